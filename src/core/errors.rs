//! Custom error types for translate operations

use thiserror::Error;

use crate::core::validation::ValidationError;

/// The requested source → target language pair is not offered by the service.
///
/// Constructed with a message; the two language codes are filled in afterwards
/// from the structured error members when present.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UnsupportedLanguagePairError {
    pub message: String,
    pub source_language_code: Option<String>,
    pub target_language_code: Option<String>,
}

impl UnsupportedLanguagePairError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_language_code: None,
            target_language_code: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn with_source_language_code(mut self, code: impl Into<String>) -> Self {
        self.source_language_code = Some(code.into());
        self
    }

    pub fn with_target_language_code(mut self, code: impl Into<String>) -> Self {
        self.target_language_code = Some(code.into());
        self
    }
}

/// Translate-related errors
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Request rejected client-side before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unsupported language pair: {0}")]
    UnsupportedLanguagePair(#[from] UnsupportedLanguagePairError),

    #[error("Detected language has low confidence: {message}")]
    DetectedLanguageLowConfidence {
        message: String,
        detected_language_code: Option<String>,
    },

    #[error("Unsupported display language code: {message}")]
    UnsupportedDisplayLanguageCode {
        message: String,
        display_language_code: Option<String>,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Invalid parameter value: {message}")]
    InvalidParameterValue { message: String },

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Resource not found: {message}")]
    ResourceNotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Concurrent modification: {message}")]
    ConcurrentModification { message: String },

    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    #[error("Too many requests: {message}")]
    TooManyRequests { message: String },

    #[error("Too many tags: {message}")]
    TooManyTags {
        message: String,
        resource_arn: Option<String>,
    },

    #[error("Text size limit exceeded: {message}")]
    TextSizeLimitExceeded { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Internal server error: {message}")]
    InternalServer { message: String },

    /// Service error with a code this client has no dedicated variant for
    #[error("Service error: {code} ({status}) - {message}")]
    Service {
        code: String,
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Invalid response from the service
    #[error("Invalid response: {message}")]
    InvalidResponseError { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslateError {
    /// Error code as named by the service, if this error came from the service.
    pub fn code(&self) -> Option<&str> {
        let code = match self {
            TranslateError::UnsupportedLanguagePair(_) => "UnsupportedLanguagePairException",
            TranslateError::DetectedLanguageLowConfidence { .. } => {
                "DetectedLanguageLowConfidenceException"
            }
            TranslateError::UnsupportedDisplayLanguageCode { .. } => {
                "UnsupportedDisplayLanguageCodeException"
            }
            TranslateError::InvalidRequest { .. } => "InvalidRequestException",
            TranslateError::InvalidParameterValue { .. } => "InvalidParameterValueException",
            TranslateError::InvalidFilter { .. } => "InvalidFilterException",
            TranslateError::ResourceNotFound { .. } => "ResourceNotFoundException",
            TranslateError::Conflict { .. } => "ConflictException",
            TranslateError::ConcurrentModification { .. } => "ConcurrentModificationException",
            TranslateError::LimitExceeded { .. } => "LimitExceededException",
            TranslateError::TooManyRequests { .. } => "TooManyRequestsException",
            TranslateError::TooManyTags { .. } => "TooManyTagsException",
            TranslateError::TextSizeLimitExceeded { .. } => "TextSizeLimitExceededException",
            TranslateError::ServiceUnavailable { .. } => "ServiceUnavailableException",
            TranslateError::InternalServer { .. } => "InternalServerException",
            TranslateError::Service { code, .. } => code.as_str(),
            _ => return None,
        };
        Some(code)
    }

    /// True for errors raised by this client without talking to the service.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            TranslateError::Validation(_) | TranslateError::ConfigError { .. }
        )
    }
}

impl From<anyhow::Error> for TranslateError {
    fn from(err: anyhow::Error) -> Self {
        TranslateError::ConfigError {
            message: err.to_string(),
        }
    }
}

/// Result type for translate operations
pub type Result<T> = std::result::Result<T, TranslateError>;
