//! Value objects shared by several operations

use serde::{Deserialize, Serialize};

use crate::core::models::enums::{Brevity, EncryptionKeyType, Formality, Profanity};
use crate::core::models::extend;
use crate::core::validation::{self, Validate, Validator};

/// Output-shaping knobs; each one is independent and optional.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brevity: Option<String>,
}

debug_present!(TranslationSettings {
    formality,
    profanity,
    brevity
});

impl TranslationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a [`Formality`] or its raw string form.
    pub fn with_formality(mut self, formality: impl Into<String>) -> Self {
        self.formality = Some(formality.into());
        self
    }

    /// Accepts a [`Profanity`] or its raw string form.
    pub fn with_profanity(mut self, profanity: impl Into<String>) -> Self {
        self.profanity = Some(profanity.into());
        self
    }

    /// Accepts a [`Brevity`] or its raw string form.
    pub fn with_brevity(mut self, brevity: impl Into<String>) -> Self {
        self.brevity = Some(brevity.into());
        self
    }
}

impl Validate for TranslationSettings {
    fn check(&self, v: &mut Validator) {
        v.one_of("Formality", self.formality.as_deref(), Formality::VALUES)
            .one_of("Profanity", self.profanity.as_deref(), Profanity::VALUES)
            .one_of("Brevity", self.brevity.as_deref(), Brevity::VALUES);
    }
}

/// Customer managed key used to encrypt stored resources or job output.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EncryptionKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

debug_present!(EncryptionKey { r#type, id });

impl EncryptionKey {
    /// KMS key reference, the only key type the service accepts.
    pub fn kms(id: impl Into<String>) -> Self {
        Self {
            r#type: Some(EncryptionKeyType::Kms.into()),
            id: Some(id.into()),
        }
    }

    pub fn with_type(mut self, key_type: impl Into<String>) -> Self {
        self.r#type = Some(key_type.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for EncryptionKey {
    fn check(&self, v: &mut Validator) {
        v.required("Type", &self.r#type)
            .one_of("Type", self.r#type.as_deref(), EncryptionKeyType::VALUES)
            .required("Id", &self.id)
            .string("Id", self.id.as_deref(), &validation::ENCRYPTION_KEY_ID);
    }
}

/// Where a batch job reads its input documents.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

debug_present!(InputDataConfig {
    s3_uri,
    content_type
});

impl InputDataConfig {
    pub fn new(s3_uri: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(s3_uri.into()),
            content_type: Some(content_type.into()),
        }
    }

    pub fn with_s3_uri(mut self, s3_uri: impl Into<String>) -> Self {
        self.s3_uri = Some(s3_uri.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl Validate for InputDataConfig {
    fn check(&self, v: &mut Validator) {
        v.required("S3Uri", &self.s3_uri)
            .string("S3Uri", self.s3_uri.as_deref(), &validation::S3_URI)
            .required("ContentType", &self.content_type)
            .string(
                "ContentType",
                self.content_type.as_deref(),
                &validation::CONTENT_TYPE,
            );
    }
}

/// Where a batch job writes its output, optionally encrypted.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<EncryptionKey>,
}

debug_present!(OutputDataConfig {
    s3_uri,
    encryption_key
});

impl OutputDataConfig {
    pub fn new(s3_uri: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(s3_uri.into()),
            encryption_key: None,
        }
    }

    pub fn with_s3_uri(mut self, s3_uri: impl Into<String>) -> Self {
        self.s3_uri = Some(s3_uri.into());
        self
    }

    pub fn with_encryption_key(mut self, key: impl Into<EncryptionKey>) -> Self {
        self.encryption_key = Some(key.into());
        self
    }
}

impl Validate for OutputDataConfig {
    fn check(&self, v: &mut Validator) {
        v.required("S3Uri", &self.s3_uri)
            .string("S3Uri", self.s3_uri.as_deref(), &validation::S3_URI)
            .nested("EncryptionKey", self.encryption_key.as_ref());
    }
}

/// One source/target pair from a custom terminology.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Term {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_text: Option<String>,
}

debug_present!(Term {
    source_text,
    target_text
});

/// A terminology that matched during translation, with the terms it applied.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppliedTerminology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Term>>,
}

debug_present!(AppliedTerminology { name, terms });

impl AppliedTerminology {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_terms<I>(mut self, terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        extend(&mut self.terms, terms);
        self
    }
}
