//! Client-side request validation
//!
//! Every request is checked against the service's documented field
//! constraints before it is sent. Setters never validate; the client calls
//! [`Validate::validate`] right before transmission, and callers may call it
//! themselves at any time.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::core::models::Blob;

/// A single broken constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire path of the offending member, e.g. `ParallelDataConfig.S3Uri`
    pub field: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// All constraint violations found in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s) detected: ", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Whether any violation names the given wire path.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Types whose fields carry service-side constraints.
pub trait Validate {
    /// Record every violation into `v`.
    fn check(&self, v: &mut Validator);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::default();
        self.check(&mut validator);
        validator.finish()
    }
}

/// Length and pattern rule for a string member.
///
/// Lengths count UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
#[derive(Debug)]
pub struct StringRule {
    pub min_chars: usize,
    pub max_chars: usize,
    pub pattern: Option<&'static Lazy<Regex>>,
}

fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("constraint pattern must compile")
}

static RESOURCE_NAME_RE: Lazy<Regex> = Lazy::new(|| full_match(r"([A-Za-z0-9-]_?)+"));
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| full_match(r"[\P{M}\p{M}]*"));
static JOB_NAME_RE: Lazy<Regex> = Lazy::new(|| full_match(r"([\p{L}\p{Z}\p{N}_.:/=+\-%@]*)"));
static IAM_ROLE_ARN_RE: Lazy<Regex> =
    Lazy::new(|| full_match(r"arn:aws(-[^:]+)?:iam::[0-9]{12}:role/.+"));
static RESOURCE_ARN_RE: Lazy<Regex> = Lazy::new(|| {
    full_match(
        r"arn:aws((-us-gov)|(-iso)|(-iso-b)|(-cn))?:translate:[a-z]{2}-[a-z]+(-[a-z]+)?-[0-9]:[0-9]{12}:[a-z-]+/.+",
    )
});
static KMS_KEY_ID_RE: Lazy<Regex> = Lazy::new(|| {
    full_match(
        r"(arn:aws((-us-gov)|(-iso)|(-iso-b)|(-cn))?:kms:)?([a-z]{2}-[a-z]+(-[a-z]+)?-[0-9]:)?([0-9]{12}:)?(((key/)?[a-zA-Z0-9_-]+)|(alias/[a-zA-Z0-9:/_-]+))",
    )
});
static CLIENT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| full_match(r"[a-zA-Z0-9-]+"));
static S3_URI_RE: Lazy<Regex> =
    Lazy::new(|| full_match(r"s3://[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9](/.*)?"));
static CONTENT_TYPE_RE: Lazy<Regex> = Lazy::new(|| full_match(r"[-\w.]+/[-\w.+]+"));
static NEXT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| full_match(r"[\x00-\x7F]*"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| full_match(r"([\p{L}\p{Z}\p{N}_.:/=+\-@]*)"));

pub static RESOURCE_NAME: StringRule = StringRule {
    min_chars: 1,
    max_chars: 256,
    pattern: Some(&RESOURCE_NAME_RE),
};
pub static DESCRIPTION: StringRule = StringRule {
    min_chars: 0,
    max_chars: 256,
    pattern: Some(&DESCRIPTION_RE),
};
pub static LANGUAGE_CODE: StringRule = StringRule {
    min_chars: 2,
    max_chars: 5,
    pattern: None,
};
pub static JOB_NAME: StringRule = StringRule {
    min_chars: 1,
    max_chars: 256,
    pattern: Some(&JOB_NAME_RE),
};
pub static JOB_ID: StringRule = StringRule {
    min_chars: 1,
    max_chars: 32,
    pattern: Some(&JOB_NAME_RE),
};
pub static IAM_ROLE_ARN: StringRule = StringRule {
    min_chars: 20,
    max_chars: 2048,
    pattern: Some(&IAM_ROLE_ARN_RE),
};
pub static RESOURCE_ARN: StringRule = StringRule {
    min_chars: 1,
    max_chars: 512,
    pattern: Some(&RESOURCE_ARN_RE),
};
pub static ENCRYPTION_KEY_ID: StringRule = StringRule {
    min_chars: 1,
    max_chars: 400,
    pattern: Some(&KMS_KEY_ID_RE),
};
pub static CLIENT_TOKEN: StringRule = StringRule {
    min_chars: 1,
    max_chars: 64,
    pattern: Some(&CLIENT_TOKEN_RE),
};
pub static S3_URI: StringRule = StringRule {
    min_chars: 0,
    max_chars: 1024,
    pattern: Some(&S3_URI_RE),
};
pub static CONTENT_TYPE: StringRule = StringRule {
    min_chars: 0,
    max_chars: 256,
    pattern: Some(&CONTENT_TYPE_RE),
};
pub static NEXT_TOKEN: StringRule = StringRule {
    min_chars: 0,
    max_chars: 8192,
    pattern: Some(&NEXT_TOKEN_RE),
};
pub static TAG_KEY: StringRule = StringRule {
    min_chars: 1,
    max_chars: 128,
    pattern: Some(&TAG_RE),
};
pub static TAG_VALUE: StringRule = StringRule {
    min_chars: 0,
    max_chars: 256,
    pattern: Some(&TAG_RE),
};

/// Inline text for TranslateText, measured in UTF-8 bytes.
pub const MAX_TEXT_BYTES: usize = 10_000;
/// Document content for TranslateDocument.
pub const MAX_DOCUMENT_BYTES: usize = 102_400;
/// Terminology file for ImportTerminology.
pub const MAX_TERMINOLOGY_FILE_BYTES: usize = 10_485_760;
pub const MAX_RESULTS_RANGE: (i64, i64) = (1, 500);
pub const MAX_TARGET_LANGUAGE_CODES: usize = 10;
pub const MAX_TAGS: usize = 200;

/// Accumulates violations while walking a request.
#[derive(Debug, Default)]
pub struct Validator {
    prefix: Vec<&'static str>,
    violations: Vec<Violation>,
}

impl Validator {
    fn path(&self, field: &str) -> String {
        let mut path = self.prefix.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(field);
        path
    }

    fn fail(&mut self, field: &str, reason: impl Into<String>) {
        let field = self.path(field);
        self.violations.push(Violation {
            field,
            reason: reason.into(),
        });
    }

    /// Member must be present.
    pub fn required<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.fail(field, "member must not be null");
        }
        self
    }

    /// Present string must satisfy `rule`.
    pub fn string(&mut self, field: &str, value: Option<&str>, rule: &StringRule) -> &mut Self {
        let Some(value) = value else {
            return self;
        };
        let chars = value.encode_utf16().count();
        if chars < rule.min_chars || chars > rule.max_chars {
            self.fail(
                field,
                format!(
                    "length {} outside {}..={}",
                    chars, rule.min_chars, rule.max_chars
                ),
            );
        } else if let Some(pattern) = rule.pattern {
            if !pattern.is_match(value) {
                self.fail(field, format!("value does not match pattern {}", pattern.as_str()));
            }
        }
        self
    }

    /// Present string must be one of `allowed`.
    pub fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &[&str]) -> &mut Self {
        if let Some(value) = value {
            if !allowed.contains(&value) {
                self.fail(
                    field,
                    format!("value '{}' not in [{}]", value, allowed.join(", ")),
                );
            }
        }
        self
    }

    /// Present string must be non-empty and fit in `max` UTF-8 bytes.
    pub fn text_bytes(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            if value.is_empty() {
                self.fail(field, "length 0 below minimum 1");
            } else if value.len() > max {
                self.fail(field, format!("{} bytes exceeds {} byte limit", value.len(), max));
            }
        }
        self
    }

    /// Present blob must fit in `max` bytes.
    pub fn blob(&mut self, field: &str, value: Option<&Blob>, max: usize) -> &mut Self {
        if let Some(value) = value {
            if value.len() > max {
                self.fail(field, format!("{} bytes exceeds {} byte limit", value.len(), max));
            }
        }
        self
    }

    /// Present number must be within `min..=max`.
    pub fn range(&mut self, field: &str, value: Option<i64>, (min, max): (i64, i64)) -> &mut Self {
        if let Some(value) = value {
            if value < min || value > max {
                self.fail(field, format!("value {} outside {}..={}", value, min, max));
            }
        }
        self
    }

    /// Present list must hold `min..=max` items.
    pub fn count<T>(&mut self, field: &str, value: Option<&[T]>, min: usize, max: usize) -> &mut Self {
        if let Some(items) = value {
            if items.len() < min || items.len() > max {
                self.fail(
                    field,
                    format!("{} items outside {}..={}", items.len(), min, max),
                );
            }
        }
        self
    }

    /// Every item of a present string list must satisfy `rule`.
    pub fn each_string(&mut self, field: &str, value: Option<&[String]>, rule: &StringRule) -> &mut Self {
        for item in value.unwrap_or_default() {
            self.string(field, Some(item), rule);
        }
        self
    }

    /// Recurse into a present nested value, prefixing paths with `field`.
    pub fn nested<V: Validate>(&mut self, field: &'static str, value: Option<&V>) -> &mut Self {
        if let Some(value) = value {
            self.prefix.push(field);
            value.check(self);
            self.prefix.pop();
        }
        self
    }

    /// Recurse into every item of a present list.
    pub fn each<V: Validate>(&mut self, field: &'static str, value: Option<&[V]>) -> &mut Self {
        for item in value.unwrap_or_default() {
            self.nested(field, Some(item));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_string(value: &str, rule: &StringRule) -> bool {
        let mut v = Validator::default();
        v.string("Field", Some(value), rule);
        v.finish().is_ok()
    }

    #[test]
    fn test_resource_name_boundaries() {
        assert!(!check_string("", &RESOURCE_NAME));
        assert!(check_string("a", &RESOURCE_NAME));
        assert!(check_string(&"a".repeat(256), &RESOURCE_NAME));
        assert!(!check_string(&"a".repeat(257), &RESOURCE_NAME));
    }

    #[test]
    fn test_resource_name_pattern() {
        assert!(check_string("my-glossary_v2", &RESOURCE_NAME));
        assert!(check_string("a_b_c", &RESOURCE_NAME));
        assert!(!check_string("a__b", &RESOURCE_NAME));
        assert!(!check_string("has space", &RESOURCE_NAME));
        assert!(!check_string("_leading", &RESOURCE_NAME));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // U+1F600 is a surrogate pair
        assert!(check_string(&"\u{1F600}".repeat(128), &DESCRIPTION));
        assert!(!check_string(&"\u{1F600}".repeat(129), &DESCRIPTION));
        assert!(check_string(&"é".repeat(256), &DESCRIPTION));
        assert!(!check_string("\u{1F600}\u{1F600}\u{1F600}", &LANGUAGE_CODE));
    }

    #[test]
    fn test_language_code_boundaries() {
        assert!(!check_string("e", &LANGUAGE_CODE));
        assert!(check_string("en", &LANGUAGE_CODE));
        assert!(check_string("zh-TW", &LANGUAGE_CODE));
        assert!(!check_string("zh-TWx", &LANGUAGE_CODE));
    }

    #[test]
    fn test_arn_patterns() {
        assert!(check_string(
            "arn:aws:iam::123456789012:role/TranslateAccess",
            &IAM_ROLE_ARN
        ));
        assert!(!check_string("arn:aws:iam::1234:role/x", &IAM_ROLE_ARN));
        assert!(check_string(
            "arn:aws:translate:us-east-1:123456789012:terminology/my-terms/LATEST",
            &RESOURCE_ARN
        ));
        assert!(!check_string(
            "arn:aws:s3:us-east-1:123456789012:bucket/x",
            &RESOURCE_ARN
        ));
    }

    #[test]
    fn test_s3_uri_and_content_type() {
        assert!(check_string("s3://my-bucket/input/", &S3_URI));
        assert!(!check_string("https://my-bucket/input/", &S3_URI));
        assert!(check_string("text/plain", &CONTENT_TYPE));
        assert!(check_string(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            &CONTENT_TYPE
        ));
        assert!(!check_string("plain", &CONTENT_TYPE));
    }

    #[test]
    fn test_kms_key_forms() {
        assert!(check_string("1234abcd-12ab-34cd-56ef-1234567890ab", &ENCRYPTION_KEY_ID));
        assert!(check_string("alias/my-key", &ENCRYPTION_KEY_ID));
        assert!(check_string(
            "arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            &ENCRYPTION_KEY_ID
        ));
    }

    #[test]
    fn test_text_bytes_counts_utf8() {
        let mut v = Validator::default();
        // 3 bytes per char
        v.text_bytes("Text", Some(&"語".repeat(3334)), MAX_TEXT_BYTES);
        let err = v.finish().unwrap_err();
        assert!(err.has_field("Text"));

        let mut v = Validator::default();
        v.text_bytes("Text", Some(&"語".repeat(3333)), MAX_TEXT_BYTES);
        assert!(v.finish().is_ok());

        let mut v = Validator::default();
        v.text_bytes("Text", Some(""), MAX_TEXT_BYTES);
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_violations_accumulate_with_paths() {
        let mut v = Validator::default();
        v.required::<String>("Name", &None);
        v.prefix.push("Outer");
        v.one_of("Status", Some("PAUSED"), &["ACTIVE"]);
        v.prefix.pop();
        v.range("MaxResults", Some(0), MAX_RESULTS_RANGE);

        let err = v.finish().unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.has_field("Name"));
        assert!(err.has_field("Outer.Status"));
        assert!(err.has_field("MaxResults"));
        assert!(err.to_string().starts_with("3 validation error(s) detected"));
    }

    #[test]
    fn test_absent_members_are_not_checked() {
        let mut v = Validator::default();
        v.string("Description", None, &DESCRIPTION)
            .one_of("Status", None, &["ACTIVE"])
            .range("MaxResults", None, MAX_RESULTS_RANGE)
            .count::<String>("Tags", None, 0, MAX_TAGS);
        assert!(v.finish().is_ok());
    }
}
