//! Property tests for value semantics and validation bounds

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use cloud_translate::core::models::*;
use cloud_translate::Validate;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn settings() -> impl Strategy<Value = TranslationSettings> {
    (
        proptest::option::of(prop::sample::select(Formality::VALUES)),
        proptest::option::of(prop::sample::select(Profanity::VALUES)),
        proptest::option::of(prop::sample::select(Brevity::VALUES)),
    )
        .prop_map(|(formality, profanity, brevity)| TranslationSettings {
            formality: formality.map(str::to_string),
            profanity: profanity.map(str::to_string),
            brevity: brevity.map(str::to_string),
        })
}

fn translate_text_request() -> impl Strategy<Value = TranslateTextRequest> {
    (
        proptest::option::of(".{0,40}"),
        proptest::option::of(proptest::collection::vec("[a-z][a-z0-9-]{0,15}", 0..4)),
        proptest::option::of("[a-z]{2}"),
        proptest::option::of("[a-z]{2}(-[A-Z]{2})?"),
        proptest::option::of(settings()),
    )
        .prop_map(
            |(text, terminology_names, source, target, settings)| TranslateTextRequest {
                text,
                terminology_names,
                source_language_code: source,
                target_language_code: target,
                settings,
            },
        )
}

fn parallel_data_properties() -> impl Strategy<Value = ParallelDataProperties> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,20}"),
        proptest::option::of(prop::sample::select(ParallelDataStatus::VALUES)),
        proptest::option::of(0i64..1_000_000),
        proptest::option::of(0i64..1_000),
    )
        .prop_map(|(name, status, imported, failed)| ParallelDataProperties {
            name,
            status: status.map(str::to_string),
            imported_record_count: imported,
            failed_record_count: failed,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn clone_is_equal_with_equal_hash(request in translate_text_request()) {
        let copy = request.clone();
        prop_assert_eq!(&copy, &request);
        prop_assert_eq!(hash_of(&copy), hash_of(&request));
    }

    #[test]
    fn equality_is_symmetric(a in translate_text_request(), b in translate_text_request()) {
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn wire_form_preserves_value(props in parallel_data_properties()) {
        let json = serde_json::to_string(&props).unwrap();
        let back: ParallelDataProperties = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, props);
    }

    #[test]
    fn text_within_byte_limit_is_accepted(text in "\\PC{1,2000}") {
        prop_assume!(text.len() <= 10_000);
        let request = TranslateTextRequest::new(text, "en", "fr");
        prop_assert!(request.validate().is_ok());
    }

    #[test]
    fn max_results_range(value in -10i64..600) {
        let request = ListTerminologiesRequest::default().with_max_results(value);
        prop_assert_eq!(request.validate().is_ok(), (1..=500).contains(&value));
    }

    #[test]
    fn setting_replaces_and_with_list_appends(
        first in proptest::collection::vec("[a-z]{1,8}", 0..4),
        second in proptest::collection::vec("[a-z]{1,8}", 0..4),
        replacement in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut request = TranslateTextRequest::default()
            .with_terminology_names(first.clone())
            .with_terminology_names(second.clone());
        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(request.terminology_names.as_ref(), Some(&expected));

        request.terminology_names = Some(replacement.clone());
        prop_assert_eq!(request.terminology_names, Some(replacement));
    }
}
