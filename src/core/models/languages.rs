//! Supported-language listing

use serde::{Deserialize, Serialize};

use crate::core::models::enums::DisplayLanguageCode;
use crate::core::validation::{self, Validate, Validator};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Language {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

debug_present!(Language {
    language_name,
    language_code
});

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListLanguagesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

debug_present!(ListLanguagesRequest {
    display_language_code,
    next_token,
    max_results,
});

impl ListLanguagesRequest {
    /// Accepts a [`DisplayLanguageCode`] or its raw string form.
    pub fn with_display_language_code(mut self, code: impl Into<String>) -> Self {
        self.display_language_code = Some(code.into());
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

impl Validate for ListLanguagesRequest {
    fn check(&self, v: &mut Validator) {
        v.one_of(
            "DisplayLanguageCode",
            self.display_language_code.as_deref(),
            DisplayLanguageCode::VALUES,
        )
        .string("NextToken", self.next_token.as_deref(), &validation::NEXT_TOKEN)
        .range("MaxResults", self.max_results, validation::MAX_RESULTS_RANGE);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListLanguagesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

debug_present!(ListLanguagesResult {
    languages,
    display_language_code,
    next_token,
});

impl ListLanguagesResult {
    /// Look up a language by its code.
    pub fn find(&self, code: &str) -> Option<&Language> {
        self.languages
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|l| l.language_code.as_deref() == Some(code))
    }
}
