//! Client tests against an in-process mock of the service

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

use cloud_translate::core::models::*;
use cloud_translate::{ClientConfig, TranslateClient, TranslateError};

#[derive(Debug, Clone)]
struct Captured {
    target: String,
    content_type: String,
    body: Value,
}

type Reply = (StatusCode, HeaderMap, String);
type Responder = Arc<dyn Fn(&str, &Value) -> Reply + Send + Sync>;

#[derive(Clone)]
struct MockService {
    seen: Arc<Mutex<Vec<Captured>>>,
    respond: Responder,
}

async fn handle(State(mock): State<MockService>, headers: HeaderMap, body: Bytes) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let target = header("x-amz-target");
    let content_type = header("content-type");
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let operation = target.rsplit('.').next().unwrap_or_default().to_string();
    let reply = (mock.respond)(&operation, &body);

    mock.seen.lock().unwrap().push(Captured {
        target,
        content_type,
        body,
    });
    reply.into_response()
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, HeaderMap::new(), body.to_string())
}

async fn mock_service<F>(respond: F) -> (TranslateClient, Arc<Mutex<Vec<Captured>>>)
where
    F: Fn(&str, &Value) -> Reply + Send + Sync + 'static,
{
    mock_service_with(ClientConfig::default(), respond).await
}

async fn mock_service_with<F>(
    config: ClientConfig,
    respond: F,
) -> (TranslateClient, Arc<Mutex<Vec<Captured>>>)
where
    F: Fn(&str, &Value) -> Reply + Send + Sync + 'static,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockService {
        seen: seen.clone(),
        respond: Arc::new(respond),
    };
    let app = Router::new().route("/", post(handle)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = TranslateClient::new(config.with_endpoint(format!("http://{}", addr))).unwrap();
    (client, seen)
}

#[tokio::test]
async fn test_translate_text_round_trip() {
    let (client, seen) = mock_service(|_, body| {
        ok(json!({
            "TranslatedText": format!("[fr] {}", body["Text"].as_str().unwrap_or_default()),
            "SourceLanguageCode": "en",
            "TargetLanguageCode": "fr",
            "AppliedTerminologies": [
                { "Name": "brand-names", "Terms": [{ "SourceText": "Acme", "TargetText": "Acme" }] }
            ],
            "AppliedSettings": { "Formality": "FORMAL" }
        }))
    })
    .await;

    let request = TranslateTextRequest::new("Hello from Acme", "en", "fr")
        .with_terminology_names(["brand-names"])
        .with_settings(TranslationSettings::new().with_formality(Formality::Formal));
    let result = assert_ok!(client.translate_text(&request).await);

    assert_eq!(result.translated_text.as_deref(), Some("[fr] Hello from Acme"));
    assert_eq!(
        result.applied_settings.and_then(|s| s.formality).as_deref(),
        Some("FORMAL")
    );
    let applied = result.applied_terminologies.unwrap_or_default();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].name.as_deref(), Some("brand-names"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].target, "AWSShineFrontendService_20170701.TranslateText");
    assert_eq!(seen[0].content_type, "application/x-amz-json-1.1");
    assert_eq!(
        seen[0].body,
        json!({
            "Text": "Hello from Acme",
            "TerminologyNames": ["brand-names"],
            "SourceLanguageCode": "en",
            "TargetLanguageCode": "fr",
            "Settings": { "Formality": "FORMAL" }
        })
    );
}

fn batch_job() -> StartTextTranslationJobRequest {
    StartTextTranslationJobRequest::default()
        .with_job_name("nightly-docs")
        .with_input_data_config(InputDataConfig::new("s3://docs-in/en/", "text/html"))
        .with_output_data_config(OutputDataConfig::new("s3://docs-out/"))
        .with_data_access_role_arn("arn:aws:iam::123456789012:role/TranslateBatch")
        .with_source_language_code("en")
        .with_target_language_codes(["de", "ja"])
}

#[tokio::test]
async fn test_start_job_generates_client_token() {
    let (client, seen) = mock_service(|_, _| {
        ok(json!({ "JobId": "4446f95f4a72b0b5f0d1f2a2", "JobStatus": "SUBMITTED" }))
    })
    .await;

    let request = batch_job();
    let result = assert_ok!(client.start_text_translation_job(&request).await);
    assert_eq!(result.job_status.as_deref(), Some("SUBMITTED"));

    // The caller's request is left untouched.
    assert_eq!(request.client_token, None);

    assert_ok!(client.start_text_translation_job(&request).await);

    let seen = seen.lock().unwrap();
    let first = seen[0].body["ClientToken"].as_str().unwrap().to_string();
    let second = seen[1].body["ClientToken"].as_str().unwrap().to_string();
    assert!(!first.is_empty());
    assert_ne!(first, second);
    assert_eq!(seen[0].body["TargetLanguageCodes"], json!(["de", "ja"]));
}

#[tokio::test]
async fn test_explicit_client_token_is_sent_unchanged() {
    let (client, seen) = mock_service(|_, _| ok(json!({ "JobId": "j-1" }))).await;

    let request = batch_job().with_client_token("retry-7f3a");
    assert_ok!(client.start_text_translation_job(&request).await);

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].body["ClientToken"], json!("retry-7f3a"));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let (client, seen) = mock_service(|_, _| ok(json!({}))).await;

    let request = batch_job().with_target_language_codes(
        ["fr", "es", "it", "pt", "nl", "sv", "da", "fi", "pl", "cs"],
    );
    let err = assert_err!(client.start_text_translation_job(&request).await);
    match err {
        TranslateError::Validation(e) => assert!(e.has_field("TargetLanguageCodes")),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = assert_err!(
        client
            .translate_text(&TranslateTextRequest::new("x".repeat(10_001), "en", "de"))
            .await
    );
    assert!(err.is_client_side());

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_can_be_disabled() {
    let config = ClientConfig {
        client_side_validation: false,
        ..Default::default()
    };
    let (client, seen) = mock_service_with(config, |_, _| {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("InvalidRequestException"),
        );
        (StatusCode::BAD_REQUEST, headers, json!({ "message": "empty text" }).to_string())
    })
    .await;

    let err = assert_err!(
        client
            .translate_text(&TranslateTextRequest::new("", "en", "de"))
            .await
    );
    assert!(matches!(err, TranslateError::InvalidRequest { ref message } if message == "empty text"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_errors_are_typed() {
    let (client, _) = mock_service(|operation, _| match operation {
        "GetTerminology" => {
            let mut headers = HeaderMap::new();
            headers.insert(
                "x-amzn-errortype",
                HeaderValue::from_static("ResourceNotFoundException:http://internal.amazon.com/"),
            );
            (
                StatusCode::BAD_REQUEST,
                headers,
                json!({ "Message": "terminology missing" }).to_string(),
            )
        }
        _ => (
            StatusCode::BAD_REQUEST,
            HeaderMap::new(),
            json!({
                "__type": "com.amazonaws.translate#UnsupportedLanguagePairException",
                "Message": "en to tlh is not supported",
                "SourceLanguageCode": "en",
                "TargetLanguageCode": "tlh"
            })
            .to_string(),
        ),
    })
    .await;

    let err = assert_err!(
        client
            .get_terminology(&GetTerminologyRequest::new("brand-names"))
            .await
    );
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert!(matches!(err, TranslateError::ResourceNotFound { .. }));

    let err = assert_err!(
        client
            .translate_text(&TranslateTextRequest::new("Hello", "en", "tlh"))
            .await
    );
    match err {
        TranslateError::UnsupportedLanguagePair(inner) => {
            assert_eq!(inner.message(), "en to tlh is not supported");
            assert_eq!(inner.target_language_code.as_deref(), Some("tlh"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_throttling_and_server_errors() {
    let (client, _) = mock_service(|operation, _| {
        let code = if operation == "ListTerminologies" {
            "TooManyRequestsException"
        } else {
            "ServiceUnavailableException"
        };
        (
            StatusCode::SERVICE_UNAVAILABLE,
            HeaderMap::new(),
            json!({ "__type": code, "message": "slow down" }).to_string(),
        )
    })
    .await;

    let err = assert_err!(
        client
            .list_terminologies(&ListTerminologiesRequest::default())
            .await
    );
    assert!(matches!(err, TranslateError::TooManyRequests { .. }));

    let err = assert_err!(
        client
            .list_parallel_data(&ListParallelDataRequest::default())
            .await
    );
    assert!(matches!(err, TranslateError::ServiceUnavailable { .. }));
}

#[tokio::test]
async fn test_empty_and_malformed_success_bodies() {
    let (client, _) = mock_service(|operation, _| match operation {
        "DeleteTerminology" => (StatusCode::OK, HeaderMap::new(), String::new()),
        _ => (StatusCode::OK, HeaderMap::new(), "<html>not json</html>".to_string()),
    })
    .await;

    assert_ok!(
        client
            .delete_terminology(&DeleteTerminologyRequest::new("brand-names"))
            .await
    );

    let err = assert_err!(
        client
            .describe_text_translation_job(&DescribeTextTranslationJobRequest::new("job-1"))
            .await
    );
    assert!(matches!(err, TranslateError::InvalidResponseError { .. }));
}

#[tokio::test]
async fn test_list_all_languages_follows_next_token() {
    let (client, seen) = mock_service(|_, body| match body["NextToken"].as_str() {
        None => ok(json!({
            "Languages": [
                { "LanguageName": "English", "LanguageCode": "en" },
                { "LanguageName": "French", "LanguageCode": "fr" }
            ],
            "DisplayLanguageCode": "en",
            "NextToken": "page-2"
        })),
        Some(_) => ok(json!({
            "Languages": [{ "LanguageName": "German", "LanguageCode": "de" }],
            "DisplayLanguageCode": "en"
        })),
    })
    .await;

    let languages = assert_ok!(
        client
            .list_all_languages(&ListLanguagesRequest::default().with_max_results(2))
            .await
    );
    let codes: Vec<_> = languages
        .iter()
        .filter_map(|l| l.language_code.as_deref())
        .collect();
    assert_eq!(codes, ["en", "fr", "de"]);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].body, json!({ "NextToken": "page-2", "MaxResults": 2 }));
}

#[tokio::test]
async fn test_list_all_languages_stops_on_repeated_token() {
    let (client, seen) = mock_service(|_, _| {
        ok(json!({
            "Languages": [{ "LanguageName": "English", "LanguageCode": "en" }],
            "NextToken": "same"
        }))
    })
    .await;

    let outcome = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        client.list_all_languages(&ListLanguagesRequest::default()),
    )
    .await
    .expect("pagination must terminate");
    let err = assert_err!(outcome);
    assert!(matches!(err, TranslateError::InvalidResponseError { .. }));
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_all_languages_stops_on_token_cycle() {
    let (client, seen) = mock_service(|_, body| {
        let next = match body["NextToken"].as_str() {
            None => "a",
            Some("a") => "b",
            Some(_) => "a",
        };
        ok(json!({ "Languages": [], "NextToken": next }))
    })
    .await;

    let err = assert_err!(
        client
            .list_all_languages(&ListLanguagesRequest::default())
            .await
    );
    assert!(matches!(err, TranslateError::InvalidResponseError { .. }));
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_parallel_data_timestamps_decode() {
    let (client, _) = mock_service(|_, _| {
        ok(json!({
            "ParallelDataProperties": {
                "Name": "support-tm",
                "Status": "ACTIVE",
                "SourceLanguageCode": "en",
                "TargetLanguageCodes": ["es"],
                "ImportedRecordCount": 1200,
                "FailedRecordCount": 0,
                "CreatedAt": 1_700_000_000,
                "LastUpdatedAt": 1_700_000_123.25
            },
            "DataLocation": { "RepositoryType": "S3", "Location": "https://presigned.example/tm.tsv" }
        }))
    })
    .await;

    let result = assert_ok!(
        client
            .get_parallel_data(&GetParallelDataRequest::new("support-tm"))
            .await
    );
    let props = result.parallel_data_properties.unwrap();
    assert_eq!(props.parsed_status(), Some(ParallelDataStatus::Active));
    assert_eq!(props.failed_record_count, Some(0));
    assert_eq!(props.skipped_record_count, None);
    assert_eq!(props.created_at.map(|t| t.timestamp()), Some(1_700_000_000));
    assert_eq!(
        props.last_updated_at.map(|t| t.timestamp_millis()),
        Some(1_700_000_123_250)
    );
}
