//! Asynchronous batch translation jobs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::common::{InputDataConfig, OutputDataConfig, TranslationSettings};
use crate::core::models::enums::JobStatus;
use crate::core::models::extend;
use crate::core::validation::{self, Validate, Validator};

/// Start a batch translation job over documents stored in S3
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartTextTranslationJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_names: Option<Vec<String>>,
    /// Idempotency token; the client generates one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

debug_present!(StartTextTranslationJobRequest {
    job_name,
    input_data_config,
    output_data_config,
    data_access_role_arn,
    source_language_code,
    target_language_codes,
    terminology_names,
    parallel_data_names,
    client_token,
    settings,
});

impl StartTextTranslationJobRequest {
    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_input_data_config(mut self, config: InputDataConfig) -> Self {
        self.input_data_config = Some(config);
        self
    }

    pub fn with_output_data_config(mut self, config: OutputDataConfig) -> Self {
        self.output_data_config = Some(config);
        self
    }

    pub fn with_data_access_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.data_access_role_arn = Some(arn.into());
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

    /// Appends to the terminology names already set.
    pub fn with_terminology_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend(&mut self.terminology_names, names);
        self
    }

    /// Appends to the parallel data names already set.
    pub fn with_parallel_data_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend(&mut self.parallel_data_names, names);
        self
    }

    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }

    pub fn with_settings(mut self, settings: TranslationSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl Validate for StartTextTranslationJobRequest {
    fn check(&self, v: &mut Validator) {
        v.string("JobName", self.job_name.as_deref(), &validation::JOB_NAME)
            .required("InputDataConfig", &self.input_data_config)
            .nested("InputDataConfig", self.input_data_config.as_ref())
            .required("OutputDataConfig", &self.output_data_config)
            .nested("OutputDataConfig", self.output_data_config.as_ref())
            .required("DataAccessRoleArn", &self.data_access_role_arn)
            .string(
                "DataAccessRoleArn",
                self.data_access_role_arn.as_deref(),
                &validation::IAM_ROLE_ARN,
            )
            .required("SourceLanguageCode", &self.source_language_code)
            .string(
                "SourceLanguageCode",
                self.source_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .required("TargetLanguageCodes", &self.target_language_codes)
            .count(
                "TargetLanguageCodes",
                self.target_language_codes.as_deref(),
                1,
                validation::MAX_TARGET_LANGUAGE_CODES,
            )
            .each_string(
                "TargetLanguageCodes",
                self.target_language_codes.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .each_string(
                "TerminologyNames",
                self.terminology_names.as_deref(),
                &validation::RESOURCE_NAME,
            )
            .each_string(
                "ParallelDataNames",
                self.parallel_data_names.as_deref(),
                &validation::RESOURCE_NAME,
            )
            .required("ClientToken", &self.client_token)
            .string(
                "ClientToken",
                self.client_token.as_deref(),
                &validation::CLIENT_TOKEN,
            )
            .nested("Settings", self.settings.as_ref());
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartTextTranslationJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
}

debug_present!(StartTextTranslationJobResult { job_id, job_status });

/// Request that a running job stop
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTextTranslationJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

debug_present!(StopTextTranslationJobRequest { job_id });

impl StopTextTranslationJobRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
        }
    }
}

impl Validate for StopTextTranslationJobRequest {
    fn check(&self, v: &mut Validator) {
        v.required("JobId", &self.job_id)
            .string("JobId", self.job_id.as_deref(), &validation::JOB_ID);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTextTranslationJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
}

debug_present!(StopTextTranslationJobResult { job_id, job_status });

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTextTranslationJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

debug_present!(DescribeTextTranslationJobRequest { job_id });

impl DescribeTextTranslationJobRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
        }
    }
}

impl Validate for DescribeTextTranslationJobRequest {
    fn check(&self, v: &mut Validator) {
        v.required("JobId", &self.job_id)
            .string("JobId", self.job_id.as_deref(), &validation::JOB_ID);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTextTranslationJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_translation_job_properties: Option<TextTranslationJobProperties>,
}

debug_present!(DescribeTextTranslationJobResult {
    text_translation_job_properties
});

/// Per-job document counters
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_documents_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_with_errors_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_documents_count: Option<i64>,
}

debug_present!(JobDetails {
    translated_documents_count,
    documents_with_errors_count,
    input_documents_count,
});

/// Everything the service reports about one batch job.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextTranslationJobProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_details: Option<JobDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_data_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub submitted_time: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

debug_present!(TextTranslationJobProperties {
    job_id,
    job_name,
    job_status,
    job_details,
    source_language_code,
    target_language_codes,
    terminology_names,
    parallel_data_names,
    message,
    submitted_time,
    end_time,
    input_data_config,
    output_data_config,
    data_access_role_arn,
    settings,
});

impl TextTranslationJobProperties {
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    /// Accepts a [`JobStatus`] or its raw string form.
    pub fn with_job_status(mut self, status: impl Into<String>) -> Self {
        self.job_status = Some(status.into());
        self
    }

    pub fn with_job_details(mut self, details: JobDetails) -> Self {
        self.job_details = Some(details);
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

    pub fn with_submitted_time(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_time = Some(at);
        self
    }

    pub fn with_end_time(mut self, at: DateTime<Utc>) -> Self {
        self.end_time = Some(at);
        self
    }

    /// The job status parsed into its typed form, when it is a known value.
    pub fn status(&self) -> Option<JobStatus> {
        self.job_status.as_deref().and_then(|s| s.parse().ok())
    }

    /// True once the job can no longer change state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status(),
            Some(
                JobStatus::Completed
                    | JobStatus::CompletedWithError
                    | JobStatus::Failed
                    | JobStatus::Stopped
            )
        )
    }
}

/// Narrow a job listing by name, status or submission window.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextTranslationJobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub submitted_before_time: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::core::wire::epoch_seconds"
    )]
    pub submitted_after_time: Option<DateTime<Utc>>,
}

debug_present!(TextTranslationJobFilter {
    job_name,
    job_status,
    submitted_before_time,
    submitted_after_time,
});

impl TextTranslationJobFilter {
    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    /// Accepts a [`JobStatus`] or its raw string form.
    pub fn with_job_status(mut self, status: impl Into<String>) -> Self {
        self.job_status = Some(status.into());
        self
    }

    pub fn with_submitted_before_time(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_before_time = Some(at);
        self
    }

    pub fn with_submitted_after_time(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_after_time = Some(at);
        self
    }
}

impl Validate for TextTranslationJobFilter {
    fn check(&self, v: &mut Validator) {
        v.string("JobName", self.job_name.as_deref(), &validation::JOB_NAME)
            .one_of("JobStatus", self.job_status.as_deref(), JobStatus::VALUES);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTextTranslationJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<TextTranslationJobFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

debug_present!(ListTextTranslationJobsRequest {
    filter,
    next_token,
    max_results
});

impl ListTextTranslationJobsRequest {
    pub fn with_filter(mut self, filter: TextTranslationJobFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for ListTextTranslationJobsRequest {
    fn check(&self, v: &mut Validator) {
        v.nested("Filter", self.filter.as_ref())
            .string("NextToken", self.next_token.as_deref(), &validation::NEXT_TOKEN)
            .range("MaxResults", self.max_results, validation::MAX_RESULTS_RANGE);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTextTranslationJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_translation_job_properties_list: Option<Vec<TextTranslationJobProperties>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

debug_present!(ListTextTranslationJobsResult {
    text_translation_job_properties_list,
    next_token
});
