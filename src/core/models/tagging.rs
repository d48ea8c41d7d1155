//! Resource tags

use serde::{Deserialize, Serialize};

use crate::core::models::extend;
use crate::core::validation::{self, Validate, Validator};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

debug_present!(Tag { key, value });

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Tag::new(key, value)
    }
}

impl Validate for Tag {
    fn check(&self, v: &mut Validator) {
        v.required("Key", &self.key)
            .string("Key", self.key.as_deref(), &validation::TAG_KEY)
            .required("Value", &self.value)
            .string("Value", self.value.as_deref(), &validation::TAG_VALUE);
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

debug_present!(TagResourceRequest { resource_arn, tags });

impl TagResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: Some(resource_arn.into()),
            tags: None,
        }
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

impl Validate for TagResourceRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceArn", &self.resource_arn)
            .string(
                "ResourceArn",
                self.resource_arn.as_deref(),
                &validation::RESOURCE_ARN,
            )
            .required("Tags", &self.tags)
            .count("Tags", self.tags.as_deref(), 0, validation::MAX_TAGS)
            .each("Tags", self.tags.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagResourceResult {}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

debug_present!(UntagResourceRequest {
    resource_arn,
    tag_keys
});

impl UntagResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: Some(resource_arn.into()),
            tag_keys: None,
        }
    }

    /// Appends to the tag keys already set.
    pub fn with_tag_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend(&mut self.tag_keys, keys);
        self
    }
}

impl Validate for UntagResourceRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceArn", &self.resource_arn)
            .string(
                "ResourceArn",
                self.resource_arn.as_deref(),
                &validation::RESOURCE_ARN,
            )
            .required("TagKeys", &self.tag_keys)
            .count("TagKeys", self.tag_keys.as_deref(), 0, validation::MAX_TAGS)
            .each_string("TagKeys", self.tag_keys.as_deref(), &validation::TAG_KEY);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UntagResourceResult {}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

debug_present!(ListTagsForResourceRequest { resource_arn });

impl ListTagsForResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: Some(resource_arn.into()),
        }
    }
}

impl Validate for ListTagsForResourceRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceArn", &self.resource_arn).string(
            "ResourceArn",
            self.resource_arn.as_deref(),
            &validation::RESOURCE_ARN,
        );
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

debug_present!(ListTagsForResourceResult { tags });

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:translate:eu-west-1:123456789012:parallel-data/support-tm";

    #[test]
    fn test_tags_from_pairs() {
        let request = TagResourceRequest::new(ARN)
            .with_tags([("team", "l10n")])
            .with_tags([Tag::new("env", "")]);
        assert_eq!(
            request.tags,
            Some(vec![Tag::new("team", "l10n"), Tag::new("env", "")])
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_tag_resource_requires_tags() {
        let err = TagResourceRequest::new(ARN).validate().unwrap_err();
        assert!(err.has_field("Tags"));
    }

    #[test]
    fn test_tag_limits() {
        let too_many = (0..201).map(|i| Tag::new(format!("k{i}"), "v"));
        let err = TagResourceRequest::new(ARN).with_tags(too_many).validate().unwrap_err();
        assert!(err.has_field("Tags"));

        let err = UntagResourceRequest::new(ARN)
            .with_tag_keys(["k".repeat(129)])
            .validate()
            .unwrap_err();
        assert!(err.has_field("TagKeys"));
    }

    #[test]
    fn test_resource_arn_checked() {
        let err = ListTagsForResourceRequest::new("arn:aws:s3:::bucket")
            .validate()
            .unwrap_err();
        assert!(err.has_field("ResourceArn"));
        assert!(ListTagsForResourceRequest::new(ARN).validate().is_ok());
    }
}
