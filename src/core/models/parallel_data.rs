//! Parallel data resources (aligned example translations that steer output style)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::common::EncryptionKey;
use crate::core::models::enums::{ParallelDataFormat, ParallelDataStatus};
use crate::core::models::extend;
use crate::core::models::tagging::Tag;
use crate::core::validation::{self, Validate, Validator};

/// Where the parallel data file lives and how it is laid out.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParallelDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

debug_present!(ParallelDataConfig { s3_uri, format });

impl ParallelDataConfig {
    pub fn new(s3_uri: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(s3_uri.into()),
            format: Some(format.into()),
        }
    }

    pub fn with_s3_uri(mut self, s3_uri: impl Into<String>) -> Self {
        self.s3_uri = Some(s3_uri.into());
        self
    }

    /// Accepts a [`ParallelDataFormat`] or its raw string form.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Validate for ParallelDataConfig {
    fn check(&self, v: &mut Validator) {
        v.string("S3Uri", self.s3_uri.as_deref(), &validation::S3_URI)
            .one_of("Format", self.format.as_deref(), ParallelDataFormat::VALUES);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParallelDataDataLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

debug_present!(ParallelDataDataLocation {
    repository_type,
    location
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParallelDataProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_config: Option<ParallelDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_data_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_record_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_record_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_record_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<EncryptionKey>,
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
    pub latest_update_attempt_status: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub latest_update_attempt_at: Option<DateTime<Utc>>,
}

debug_present!(ParallelDataProperties {
    name,
    arn,
    description,
    status,
    source_language_code,
    target_language_codes,
    parallel_data_config,
    message,
    imported_data_size,
    imported_record_count,
    failed_record_count,
    skipped_record_count,
    encryption_key,
    created_at,
    last_updated_at,
    latest_update_attempt_status,
    latest_update_attempt_at,
});

impl ParallelDataProperties {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Accepts a [`ParallelDataStatus`] or its raw string form.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_source_language_code(mut self, code: impl Into<String>) -> Self {
        self.source_language_code = Some(code.into());
        self
    }

    /// Appends to the target language codes already set.
    pub fn with_target_language_codes<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend(&mut self.target_language_codes, codes);
        self
    }

    pub fn with_parallel_data_config(mut self, config: ParallelDataConfig) -> Self {
        self.parallel_data_config = Some(config);
        self
    }

    pub fn with_imported_record_count(mut self, count: i64) -> Self {
        self.imported_record_count = Some(count);
        self
    }

    pub fn with_failed_record_count(mut self, count: i64) -> Self {
        self.failed_record_count = Some(count);
        self
    }

    pub fn with_skipped_record_count(mut self, count: i64) -> Self {
        self.skipped_record_count = Some(count);
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Accepts a [`ParallelDataStatus`] or its raw string form.
    pub fn with_latest_update_attempt_status(mut self, status: impl Into<String>) -> Self {
        self.latest_update_attempt_status = Some(status.into());
        self
    }

    /// The status parsed into its typed form, when it is a known value.
    pub fn parsed_status(&self) -> Option<ParallelDataStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

impl Validate for ParallelDataProperties {
    fn check(&self, v: &mut Validator) {
        v.string("Name", self.name.as_deref(), &validation::RESOURCE_NAME)
            .string(
                "Description",
                self.description.as_deref(),
                &validation::DESCRIPTION,
            )
            .one_of("Status", self.status.as_deref(), ParallelDataStatus::VALUES)
            .string(
                "SourceLanguageCode",
                self.source_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .each_string(
                "TargetLanguageCodes",
                self.target_language_codes.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .nested("ParallelDataConfig", self.parallel_data_config.as_ref())
            .range("ImportedDataSize", self.imported_data_size, (0, i64::MAX))
            .range("ImportedRecordCount", self.imported_record_count, (0, i64::MAX))
            .range("FailedRecordCount", self.failed_record_count, (0, i64::MAX))
            .range("SkippedRecordCount", self.skipped_record_count, (0, i64::MAX))
            .nested("EncryptionKey", self.encryption_key.as_ref())
            .one_of(
                "LatestUpdateAttemptStatus",
                self.latest_update_attempt_status.as_deref(),
                ParallelDataStatus::VALUES,
            );
    }
}

/// Create a parallel data resource from a file in S3
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateParallelDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_config: Option<ParallelDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<EncryptionKey>,
    /// Idempotency token; the client generates one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

debug_present!(CreateParallelDataRequest {
    name,
    description,
    parallel_data_config,
    encryption_key,
    client_token,
    tags,
});

impl CreateParallelDataRequest {
    pub fn new(name: impl Into<String>, config: ParallelDataConfig) -> Self {
        Self {
            name: Some(name.into()),
            parallel_data_config: Some(config),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parallel_data_config(mut self, config: ParallelDataConfig) -> Self {
        self.parallel_data_config = Some(config);
        self
    }

    pub fn with_encryption_key(mut self, key: EncryptionKey) -> Self {
        self.encryption_key = Some(key);
        self
    }

    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
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

impl Validate for CreateParallelDataRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME)
            .string(
                "Description",
                self.description.as_deref(),
                &validation::DESCRIPTION,
            )
            .required("ParallelDataConfig", &self.parallel_data_config)
            .nested("ParallelDataConfig", self.parallel_data_config.as_ref())
            .nested("EncryptionKey", self.encryption_key.as_ref())
            .required("ClientToken", &self.client_token)
            .string(
                "ClientToken",
                self.client_token.as_deref(),
                &validation::CLIENT_TOKEN,
            )
            .count("Tags", self.tags.as_deref(), 0, validation::MAX_TAGS)
            .each("Tags", self.tags.as_deref());
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateParallelDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

debug_present!(CreateParallelDataResult { name, status });

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetParallelDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

debug_present!(GetParallelDataRequest { name });

impl GetParallelDataRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Validate for GetParallelDataRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetParallelDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_properties: Option<ParallelDataProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_location: Option<ParallelDataDataLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_data_location: Option<ParallelDataDataLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_update_attempt_auxiliary_data_location: Option<ParallelDataDataLocation>,
}

debug_present!(GetParallelDataResult {
    parallel_data_properties,
    data_location,
    auxiliary_data_location,
    latest_update_attempt_auxiliary_data_location,
});

/// Replace the contents of an existing parallel data resource
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateParallelDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_config: Option<ParallelDataConfig>,
    /// Idempotency token; the client generates one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

debug_present!(UpdateParallelDataRequest {
    name,
    description,
    parallel_data_config,
    client_token,
});

impl UpdateParallelDataRequest {
    pub fn new(name: impl Into<String>, config: ParallelDataConfig) -> Self {
        Self {
            name: Some(name.into()),
            parallel_data_config: Some(config),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl Validate for UpdateParallelDataRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME)
            .string(
                "Description",
                self.description.as_deref(),
                &validation::DESCRIPTION,
            )
            .required("ParallelDataConfig", &self.parallel_data_config)
            .nested("ParallelDataConfig", self.parallel_data_config.as_ref())
            .required("ClientToken", &self.client_token)
            .string(
                "ClientToken",
                self.client_token.as_deref(),
                &validation::CLIENT_TOKEN,
            );
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateParallelDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_update_attempt_status: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub latest_update_attempt_at: Option<DateTime<Utc>>,
}

debug_present!(UpdateParallelDataResult {
    name,
    status,
    latest_update_attempt_status,
    latest_update_attempt_at,
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteParallelDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

debug_present!(DeleteParallelDataRequest { name });

impl DeleteParallelDataRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Validate for DeleteParallelDataRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Name", &self.name)
            .string("Name", self.name.as_deref(), &validation::RESOURCE_NAME);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteParallelDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

debug_present!(DeleteParallelDataResult { name, status });

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListParallelDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

debug_present!(ListParallelDataRequest {
    next_token,
    max_results
});

impl ListParallelDataRequest {
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for ListParallelDataRequest {
    fn check(&self, v: &mut Validator) {
        v.string("NextToken", self.next_token.as_deref(), &validation::NEXT_TOKEN)
            .range("MaxResults", self.max_results, validation::MAX_RESULTS_RANGE);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListParallelDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_properties_list: Option<Vec<ParallelDataProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

debug_present!(ListParallelDataResult {
    parallel_data_properties_list,
    next_token
});
