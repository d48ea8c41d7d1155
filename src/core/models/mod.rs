//! Request, result and value objects for every translate operation
//!
//! All optional members are `Option<T>` so "unset" stays distinct from an
//! empty string or a zero count. Enumeration-typed members store the
//! canonical string form; the typed enums in [`enums`] convert into it.

use std::fmt;

/// `Debug` that lists only the members that are set.
macro_rules! debug_present {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut out = f.debug_struct(stringify!($ty));
                $(
                    if let Some(value) = $crate::core::models::Present::present(&self.$field) {
                        out.field(stringify!($field), value);
                    }
                )*
                out.finish()
            }
        }
    };
}

pub mod common;
pub mod enums;
pub mod jobs;
pub mod languages;
pub mod parallel_data;
pub mod tagging;
pub mod terminology;
pub mod text;

pub use common::*;
pub use enums::*;
pub use jobs::*;
pub use languages::*;
pub use parallel_data::*;
pub use tagging::*;
pub use terminology::*;
pub use text::*;

pub(crate) trait Present {
    fn present(&self) -> Option<&dyn fmt::Debug>;
}

impl<T: fmt::Debug> Present for Option<T> {
    fn present(&self) -> Option<&dyn fmt::Debug> {
        self.as_ref().map(|value| value as &dyn fmt::Debug)
    }
}

/// Opaque binary payload (document content, terminology file).
///
/// Bytes are kept exactly as given; wire encoding happens in [`crate::core::wire`].
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Blob {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

/// Append `values` to an optional sequence, creating it when unset.
pub(crate) fn extend<T, I>(target: &mut Option<Vec<T>>, values: I)
where
    I: IntoIterator,
    I::Item: Into<T>,
{
    target
        .get_or_insert_with(Vec::new)
        .extend(values.into_iter().map(Into::into));
}
