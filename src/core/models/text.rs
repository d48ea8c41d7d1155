//! Real-time translation of inline text and single documents

use serde::{Deserialize, Serialize};

use crate::core::models::common::{AppliedTerminology, TranslationSettings};
use crate::core::models::{extend, Blob};
use crate::core::validation::{self, Validate, Validator};

/// Translate a block of text
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslateTextRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

debug_present!(TranslateTextRequest {
    text,
    terminology_names,
    source_language_code,
    target_language_code,
    settings,
});

impl TranslateTextRequest {
    pub fn new(
        text: impl Into<String>,
        source_language_code: impl Into<String>,
        target_language_code: impl Into<String>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            source_language_code: Some(source_language_code.into()),
            target_language_code: Some(target_language_code.into()),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
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

    pub fn with_source_language_code(mut self, code: impl Into<String>) -> Self {
        self.source_language_code = Some(code.into());
        self
    }

    pub fn with_target_language_code(mut self, code: impl Into<String>) -> Self {
        self.target_language_code = Some(code.into());
        self
    }

    pub fn with_settings(mut self, settings: TranslationSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl Validate for TranslateTextRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Text", &self.text)
            .text_bytes("Text", self.text.as_deref(), validation::MAX_TEXT_BYTES)
            .each_string(
                "TerminologyNames",
                self.terminology_names.as_deref(),
                &validation::RESOURCE_NAME,
            )
            .required("SourceLanguageCode", &self.source_language_code)
            .string(
                "SourceLanguageCode",
                self.source_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .required("TargetLanguageCode", &self.target_language_code)
            .string(
                "TargetLanguageCode",
                self.target_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .nested("Settings", self.settings.as_ref());
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslateTextResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_terminologies: Option<Vec<AppliedTerminology>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_settings: Option<TranslationSettings>,
}

debug_present!(TranslateTextResult {
    translated_text,
    source_language_code,
    target_language_code,
    applied_terminologies,
    applied_settings,
});

/// A document to translate, passed inline.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Blob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

debug_present!(Document {
    content,
    content_type
});

impl Document {
    pub fn new(content: impl Into<Blob>, content_type: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            content_type: Some(content_type.into()),
        }
    }

    pub fn with_content(mut self, content: impl Into<Blob>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl Validate for Document {
    fn check(&self, v: &mut Validator) {
        v.required("Content", &self.content)
            .blob(
                "Content",
                self.content.as_ref(),
                validation::MAX_DOCUMENT_BYTES,
            )
            .required("ContentType", &self.content_type)
            .string(
                "ContentType",
                self.content_type.as_deref(),
                &validation::CONTENT_TYPE,
            );
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslatedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Blob>,
}

debug_present!(TranslatedDocument { content });

/// Translate a single document synchronously
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<TranslationSettings>,
}

debug_present!(TranslateDocumentRequest {
    document,
    terminology_names,
    source_language_code,
    target_language_code,
    settings,
});

impl TranslateDocumentRequest {
    pub fn new(
        document: Document,
        source_language_code: impl Into<String>,
        target_language_code: impl Into<String>,
    ) -> Self {
        Self {
            document: Some(document),
            source_language_code: Some(source_language_code.into()),
            target_language_code: Some(target_language_code.into()),
            ..Default::default()
        }
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
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

    pub fn with_source_language_code(mut self, code: impl Into<String>) -> Self {
        self.source_language_code = Some(code.into());
        self
    }

    pub fn with_target_language_code(mut self, code: impl Into<String>) -> Self {
        self.target_language_code = Some(code.into());
        self
    }

    pub fn with_settings(mut self, settings: TranslationSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl Validate for TranslateDocumentRequest {
    fn check(&self, v: &mut Validator) {
        v.required("Document", &self.document)
            .nested("Document", self.document.as_ref())
            .each_string(
                "TerminologyNames",
                self.terminology_names.as_deref(),
                &validation::RESOURCE_NAME,
            )
            .required("SourceLanguageCode", &self.source_language_code)
            .string(
                "SourceLanguageCode",
                self.source_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .required("TargetLanguageCode", &self.target_language_code)
            .string(
                "TargetLanguageCode",
                self.target_language_code.as_deref(),
                &validation::LANGUAGE_CODE,
            )
            .nested("Settings", self.settings.as_ref());
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TranslateDocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_document: Option<TranslatedDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_terminologies: Option<Vec<AppliedTerminology>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_settings: Option<TranslationSettings>,
}

debug_present!(TranslateDocumentResult {
    translated_document,
    source_language_code,
    target_language_code,
    applied_terminologies,
    applied_settings,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::enums::Formality;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_translate_text_scenario() {
        let request = TranslateTextRequest::default()
            .with_text("Hello")
            .with_source_language_code("en")
            .with_target_language_code("fr");
        let twin = TranslateTextRequest::new("Hello", "en", "fr");

        assert_eq!(request.text.as_deref(), Some("Hello"));
        assert_eq!(request.source_language_code.as_deref(), Some("en"));
        assert_eq!(request.target_language_code.as_deref(), Some("fr"));
        assert_eq!(request.settings, None);
        assert_eq!(request, twin);
        assert_eq!(hash_of(&request), hash_of(&twin));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_terminology_names_accumulate_then_replace() {
        let mut request = TranslateTextRequest::new("Hello", "en", "fr")
            .with_terminology_names(["glossary"])
            .with_terminology_names(["brand-terms", "glossary"]);
        assert_eq!(
            request.terminology_names.as_deref(),
            Some(&["glossary".to_string(), "brand-terms".into(), "glossary".into()][..])
        );

        request.terminology_names = Some(vec!["only".to_string()]);
        assert_eq!(request.terminology_names, Some(vec!["only".to_string()]));
    }

    #[test]
    fn test_null_and_empty_are_distinct() {
        let unset = TranslateTextRequest::new("Hello", "en", "fr");
        let mut empty = unset.clone();
        empty.terminology_names = Some(Vec::new());
        assert_ne!(unset, empty);

        let mut blank = unset.clone();
        blank.settings = Some(TranslationSettings::default());
        assert_ne!(unset, blank);
    }

    #[test]
    fn test_debug_omits_unset_fields() {
        let request = TranslateTextRequest::new("Hello", "en", "fr");
        let debug = format!("{:?}", request);
        assert!(debug.contains(r#"text: "Hello""#));
        assert!(!debug.contains("settings"));
        assert!(!debug.contains("terminology_names"));
        assert!(!debug.contains("None"));
    }

    #[test]
    fn test_missing_required_members() {
        let err = TranslateTextRequest::default().validate().unwrap_err();
        assert!(err.has_field("Text"));
        assert!(err.has_field("SourceLanguageCode"));
        assert!(err.has_field("TargetLanguageCode"));
        assert_eq!(err.violations.len(), 3);
    }

    #[test]
    fn test_nested_settings_validated() {
        let request = TranslateTextRequest::new("Hello", "en", "fr")
            .with_settings(TranslationSettings::new().with_formality("polite"));
        let err = request.validate().unwrap_err();
        assert!(err.has_field("Settings.Formality"));

        let request = TranslateTextRequest::new("Hello", "en", "fr")
            .with_settings(TranslationSettings::new().with_formality(Formality::Informal));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_document_size_limit() {
        let ok = Document::new(vec![b'a'; validation::MAX_DOCUMENT_BYTES], "text/plain");
        assert!(ok.validate().is_ok());

        let too_big = Document::new(
            vec![b'a'; validation::MAX_DOCUMENT_BYTES + 1],
            "text/plain",
        );
        let request = TranslateDocumentRequest::new(too_big, "en", "de");
        let err = request.validate().unwrap_err();
        assert!(err.has_field("Document.Content"));
    }

    #[test]
    fn test_document_request_requires_document() {
        let mut request = TranslateDocumentRequest::new(Document::new("x", "text/plain"), "en", "de");
        request.document = None;
        let err = request.validate().unwrap_err();
        assert!(err.has_field("Document"));
    }
}
