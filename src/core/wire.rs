//! JSON 1.1 wire protocol: operation table, member codecs, error decoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::errors::{TranslateError, UnsupportedLanguagePairError};
use crate::core::models::*;
use crate::core::validation::Validate;

/// Prefix of the `X-Amz-Target` header for every operation.
pub const TARGET_PREFIX: &str = "AWSShineFrontendService_20170701";
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A request type bound to one remote operation.
pub trait Operation: Serialize + Validate + Clone {
    /// Operation name as it appears in `X-Amz-Target`
    const NAME: &'static str;
    type Output: DeserializeOwned;

    /// Fill members the client generates when the caller leaves them unset.
    fn prepare(&mut self) {}
}

macro_rules! operations {
    ($($request:ty => $output:ty, $name:literal;)+) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = $name;
                type Output = $output;
            }
        )+
    };
}

operations! {
    TranslateTextRequest => TranslateTextResult, "TranslateText";
    TranslateDocumentRequest => TranslateDocumentResult, "TranslateDocument";
    StopTextTranslationJobRequest => StopTextTranslationJobResult, "StopTextTranslationJob";
    DescribeTextTranslationJobRequest => DescribeTextTranslationJobResult, "DescribeTextTranslationJob";
    ListTextTranslationJobsRequest => ListTextTranslationJobsResult, "ListTextTranslationJobs";
    ImportTerminologyRequest => ImportTerminologyResult, "ImportTerminology";
    GetTerminologyRequest => GetTerminologyResult, "GetTerminology";
    DeleteTerminologyRequest => DeleteTerminologyResult, "DeleteTerminology";
    ListTerminologiesRequest => ListTerminologiesResult, "ListTerminologies";
    GetParallelDataRequest => GetParallelDataResult, "GetParallelData";
    DeleteParallelDataRequest => DeleteParallelDataResult, "DeleteParallelData";
    ListParallelDataRequest => ListParallelDataResult, "ListParallelData";
    ListLanguagesRequest => ListLanguagesResult, "ListLanguages";
    TagResourceRequest => TagResourceResult, "TagResource";
    UntagResourceRequest => UntagResourceResult, "UntagResource";
    ListTagsForResourceRequest => ListTagsForResourceResult, "ListTagsForResource";
}

fn idempotency_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Operation for StartTextTranslationJobRequest {
    const NAME: &'static str = "StartTextTranslationJob";
    type Output = StartTextTranslationJobResult;

    fn prepare(&mut self) {
        self.client_token.get_or_insert_with(idempotency_token);
    }
}

impl Operation for CreateParallelDataRequest {
    const NAME: &'static str = "CreateParallelData";
    type Output = CreateParallelDataResult;

    fn prepare(&mut self) {
        self.client_token.get_or_insert_with(idempotency_token);
    }
}

impl Operation for UpdateParallelDataRequest {
    const NAME: &'static str = "UpdateParallelData";
    type Output = UpdateParallelDataResult;

    fn prepare(&mut self) {
        self.client_token.get_or_insert_with(idempotency_token);
    }
}

/// Every operation name, for CLI help and dispatch.
pub const OPERATION_NAMES: &[&str] = &[
    TranslateTextRequest::NAME,
    TranslateDocumentRequest::NAME,
    StartTextTranslationJobRequest::NAME,
    StopTextTranslationJobRequest::NAME,
    DescribeTextTranslationJobRequest::NAME,
    ListTextTranslationJobsRequest::NAME,
    ImportTerminologyRequest::NAME,
    GetTerminologyRequest::NAME,
    DeleteTerminologyRequest::NAME,
    ListTerminologiesRequest::NAME,
    CreateParallelDataRequest::NAME,
    GetParallelDataRequest::NAME,
    UpdateParallelDataRequest::NAME,
    DeleteParallelDataRequest::NAME,
    ListParallelDataRequest::NAME,
    ListLanguagesRequest::NAME,
    TagResourceRequest::NAME,
    UntagResourceRequest::NAME,
    ListTagsForResourceRequest::NAME,
];

/// `X-Amz-Target` value for an operation.
pub fn target<O: Operation>() -> String {
    format!("{}.{}", TARGET_PREFIX, O::NAME)
}

// Blobs travel as standard base64 strings.
impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(self.as_bytes()))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Blob::from)
            .map_err(serde::de::Error::custom)
    }
}

/// Optional timestamps as fractional epoch seconds (millisecond precision).
pub mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => {
                let millis = at.timestamp_millis();
                if millis % 1000 == 0 {
                    serializer.serialize_i64(millis / 1000)
                } else {
                    serializer.serialize_f64(millis as f64 / 1000.0)
                }
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let millis = (seconds * 1000.0).round() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", seconds)))
    }
}

/// String member of an error body, if present and a string.
fn member<'a>(body: &'a serde_json::Value, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| body.get(*name).and_then(|v| v.as_str()))
}

/// Strip namespace and trailing detail: `ns#Code:extra` → `Code`.
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit('#').next().unwrap_or(code).trim()
}

/// Turn a non-2xx response into a typed error.
///
/// `header_code` is the `x-amzn-ErrorType` header when present; it wins over
/// the body's `__type`.
pub fn decode_error(status: u16, header_code: Option<&str>, body: &[u8]) -> TranslateError {
    let parsed: serde_json::Value =
        serde_json::from_slice(body).unwrap_or(serde_json::Value::Null);
    let text = |names: &[&str]| member(&parsed, names).map(str::to_string);

    let raw_code = header_code
        .map(str::to_string)
        .or_else(|| text(&["__type"]))
        .or_else(|| text(&["code", "Code"]));
    let Some(raw_code) = raw_code else {
        return TranslateError::Service {
            code: "Unknown".to_string(),
            status,
            message: String::from_utf8_lossy(body).into_owned(),
        };
    };

    let code = sanitize_error_code(&raw_code);
    let message = text(&["message", "Message"]).unwrap_or_default();

    match code {
        "UnsupportedLanguagePairException" => {
            TranslateError::UnsupportedLanguagePair(UnsupportedLanguagePairError {
                message,
                source_language_code: text(&["SourceLanguageCode"]),
                target_language_code: text(&["TargetLanguageCode"]),
            })
        }
        "DetectedLanguageLowConfidenceException" => TranslateError::DetectedLanguageLowConfidence {
            message,
            detected_language_code: text(&["DetectedLanguageCode"]),
        },
        "UnsupportedDisplayLanguageCodeException" => {
            TranslateError::UnsupportedDisplayLanguageCode {
                message,
                display_language_code: text(&["DisplayLanguageCode"]),
            }
        }
        "InvalidRequestException" => TranslateError::InvalidRequest { message },
        "InvalidParameterValueException" => TranslateError::InvalidParameterValue { message },
        "InvalidFilterException" => TranslateError::InvalidFilter { message },
        "ResourceNotFoundException" => TranslateError::ResourceNotFound { message },
        "ConflictException" => TranslateError::Conflict { message },
        "ConcurrentModificationException" => TranslateError::ConcurrentModification { message },
        "LimitExceededException" => TranslateError::LimitExceeded { message },
        "TooManyRequestsException" => TranslateError::TooManyRequests { message },
        "TooManyTagsException" => TranslateError::TooManyTags {
            message,
            resource_arn: text(&["ResourceArn"]),
        },
        "TextSizeLimitExceededException" => TranslateError::TextSizeLimitExceeded { message },
        "ServiceUnavailableException" => TranslateError::ServiceUnavailable { message },
        "InternalServerException" => TranslateError::InternalServer { message },
        other => TranslateError::Service {
            code: other.to_string(),
            status,
            message,
        },
    }
}
