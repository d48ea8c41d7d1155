//! Custom terminologies (glossaries applied during translation)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::common::EncryptionKey;
use crate::core::models::enums::{Directionality, MergeStrategy, TerminologyDataFormat};
use crate::core::models::tagging::Tag;
use crate::core::models::{extend, Blob};
use crate::core::validation::{self, Validate, Validator};

/// Terminology file contents and how to interpret them.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminologyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Blob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directionality: Option<String>,
}

debug_present!(TerminologyData {
    file,
    format,
    directionality
});

impl TerminologyData {
    pub fn new(file: impl Into<Blob>, format: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            format: Some(format.into()),
            directionality: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<Blob>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Accepts a [`TerminologyDataFormat`] or its raw string form.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Accepts a [`Directionality`] or its raw string form.
    pub fn with_directionality(mut self, directionality: impl Into<String>) -> Self {
        self.directionality = Some(directionality.into());
        self
    }
}

impl Validate for TerminologyData {
    fn check(&self, v: &mut Validator) {
        v.required("File", &self.file)
            .blob(
                "File",
                self.file.as_ref(),
                validation::MAX_TERMINOLOGY_FILE_BYTES,
            )
            .required("Format", &self.format)
            .one_of(
                "Format",
                self.format.as_deref(),
                TerminologyDataFormat::VALUES,
            )
            .one_of(
                "Directionality",
                self.directionality.as_deref(),
                Directionality::VALUES,
            );
    }
}

/// Location the service exposes for downloading stored data.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminologyDataLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

debug_present!(TerminologyDataLocation {
    repository_type,
    location
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminologyProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<EncryptionKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_count: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directionality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_term_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

debug_present!(TerminologyProperties {
    name,
    description,
    arn,
    source_language_code,
    target_language_codes,
    encryption_key,
    size_bytes,
    term_count,
    created_at,
    last_updated_at,
    directionality,
    message,
    skipped_term_count,
    format,
});

/// Create or overwrite a custom terminology
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportTerminologyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_data: Option<TerminologyData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<EncryptionKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

debug_present!(ImportTerminologyRequest {
    name,
    merge_strategy,
    description,
    terminology_data,
    encryption_key,
    tags,
});

impl ImportTerminologyRequest {
    /// Import `data` under `name`, overwriting any existing terminology.
    pub fn new(name: impl Into<String>, data: TerminologyData) -> Self {
        Self {
            name: Some(name.into()),
            merge_strategy: Some(MergeStrategy::Overwrite.into()),
            terminology_data: Some(data),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Accepts a [`MergeStrategy`] or its raw string form.
    pub fn with_merge_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.merge_strategy = Some(strategy.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_terminology_data(mut self, data: TerminologyData) -> Self {
        self.terminology_data = Some(data);
        self
    }

    pub fn with_encryption_key(mut self, key: EncryptionKey) -> Self {
        self.encryption_key = Some(key);
        self
    }

    /// Appends to the tags already set.
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        extend(&mut self.tags, tags);
        self
    }
}

impl Validate for ImportTerminologyRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME)
            .required("MergeStrategy", &self.merge_strategy)
            .one_of(
                "MergeStrategy",
                self.merge_strategy.as_deref(),
                MergeStrategy::VALUES,
            )
            .string(
                "Description",
                self.description.as_deref(),
                &validation::DESCRIPTION,
            )
            .required("TerminologyData", &self.terminology_data)
            .nested("TerminologyData", self.terminology_data.as_ref())
            .nested("EncryptionKey", self.encryption_key.as_ref())
            .count("Tags", self.tags.as_deref(), 0, validation::MAX_TAGS)
            .each("Tags", self.tags.as_deref());
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportTerminologyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_properties: Option<TerminologyProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_data_location: Option<TerminologyDataLocation>,
}

debug_present!(ImportTerminologyResult {
    terminology_properties,
    auxiliary_data_location
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTerminologyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_data_format: Option<String>,
}

debug_present!(GetTerminologyRequest {
    name,
    terminology_data_format
});

impl GetTerminologyRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            terminology_data_format: None,
        }
    }

    /// Accepts a [`TerminologyDataFormat`] or its raw string form.
    pub fn with_terminology_data_format(mut self, format: impl Into<String>) -> Self {
        self.terminology_data_format = Some(format.into());
        self
    }
}

impl Validate for GetTerminologyRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME)
            .one_of(
                "TerminologyDataFormat",
                self.terminology_data_format.as_deref(),
                TerminologyDataFormat::VALUES,
            );
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTerminologyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_properties: Option<TerminologyProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_data_location: Option<TerminologyDataLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_data_location: Option<TerminologyDataLocation>,
}

debug_present!(GetTerminologyResult {
    terminology_properties,
    terminology_data_location,
    auxiliary_data_location,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteTerminologyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

debug_present!(DeleteTerminologyRequest { name });

impl DeleteTerminologyRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Validate for DeleteTerminologyRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteTerminologyResult {}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTerminologiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

debug_present!(ListTerminologiesRequest {
    next_token,
    max_results
});

impl ListTerminologiesRequest {
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for ListTerminologiesRequest {
    fn check(&self, v: &mut Validator) {
        v.string("NextToken", self.next_token.as_deref(), &validation::NEXT_TOKEN)
            .range("MaxResults", self.max_results, validation::MAX_RESULTS_RANGE);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTerminologiesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_properties_list: Option<Vec<TerminologyProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

debug_present!(ListTerminologiesResult {
    terminology_properties_list,
    next_token
});
