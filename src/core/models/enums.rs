//! Closed value sets for enumeration-typed members
//!
//! Each enum converts into its canonical wire string, so
//! `with_status(ParallelDataStatus::Active)` stores exactly what
//! `with_status("ACTIVE")` stores.

use std::fmt;
use std::str::FromStr;

use crate::core::validation::{ValidationError, Violation};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every allowed wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(ValidationError {
                        violations: vec![Violation {
                            field: stringify!($name).to_string(),
                            reason: format!(
                                "value '{}' not in [{}]",
                                other,
                                Self::VALUES.join(", ")
                            ),
                        }],
                    }),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

string_enum! {
    /// Lifecycle state of a parallel data resource
    ParallelDataStatus {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Lifecycle state of a batch text translation job
    JobStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        CompletedWithError => "COMPLETED_WITH_ERROR",
        Failed => "FAILED",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
    }
}

string_enum! {
    Formality {
        Formal => "FORMAL",
        Informal => "INFORMAL",
    }
}

string_enum! {
    Profanity {
        Mask => "MASK",
    }
}

string_enum! {
    Brevity {
        On => "ON",
    }
}

string_enum! {
    ParallelDataFormat {
        Tsv => "TSV",
        Csv => "CSV",
        Tmx => "TMX",
    }
}

string_enum! {
    TerminologyDataFormat {
        Csv => "CSV",
        Tmx => "TMX",
        Tsv => "TSV",
    }
}

string_enum! {
    /// Whether a terminology maps one source language or several
    Directionality {
        Uni => "UNI",
        Multi => "MULTI",
    }
}

string_enum! {
    MergeStrategy {
        Overwrite => "OVERWRITE",
    }
}

string_enum! {
    EncryptionKeyType {
        Kms => "KMS",
    }
}

string_enum! {
    /// Language used for the language names returned by ListLanguages
    DisplayLanguageCode {
        De => "de",
        En => "en",
        Es => "es",
        Fr => "fr",
        It => "it",
        Ja => "ja",
        Ko => "ko",
        Pt => "pt",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("IN_PROGRESS".parse::<JobStatus>().unwrap(), JobStatus::InProgress);
        assert_eq!(JobStatus::CompletedWithError.to_string(), "COMPLETED_WITH_ERROR");
        assert_eq!(DisplayLanguageCode::ZhTw.as_str(), "zh-TW");
        assert_eq!(String::from(Formality::Informal), "INFORMAL");
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "PAUSED".parse::<ParallelDataStatus>().unwrap_err();
        assert!(err.has_field("ParallelDataStatus"));
        assert!(err.to_string().contains("CREATING, UPDATING, ACTIVE, DELETING, FAILED"));
        // Wire values are case sensitive
        assert!("active".parse::<ParallelDataStatus>().is_err());
    }

    #[test]
    fn test_values_cover_every_variant() {
        for value in ParallelDataStatus::VALUES {
            let parsed: ParallelDataStatus = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        assert_eq!(JobStatus::VALUES.len(), 7);
    }
}
