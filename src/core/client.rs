//! Async client for the translation service

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslateError};
use crate::core::models::*;
use crate::core::wire::{self, Operation};

const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// Async client that sends each operation as a JSON 1.1 POST
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl TranslateClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one operation.
    ///
    /// The caller's request is never modified: generated members such as the
    /// idempotency token are filled on a copy. Invalid requests fail with
    /// [`TranslateError::Validation`] before anything goes over the network.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Output> {
        let mut request = request.clone();
        request.prepare();

        if self.config.client_side_validation {
            request.validate()?;
        }

        let url = self.config.endpoint_url();
        debug!("Sending {} to {}", O::NAME, url);

        let response = self
            .client
            .post(&url)
            .header("X-Amz-Target", wire::target::<O>())
            .header("Content-Type", wire::CONTENT_TYPE)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslateError::NetworkError {
                message: e.to_string(),
            })?;

        if status.is_success() {
            info!(
                "{} succeeded (request id: {})",
                O::NAME,
                request_id.as_deref().unwrap_or("-")
            );
            let body: &[u8] = if body.is_empty() { b"{}" } else { &body };
            serde_json::from_slice(body).map_err(|e| TranslateError::InvalidResponseError {
                message: format!("{}: {}", O::NAME, e),
            })
        } else {
            let err = wire::decode_error(status.as_u16(), error_type.as_deref(), &body);
            warn!("{} failed with status {}: {}", O::NAME, status.as_u16(), err);
            Err(err)
        }
    }

    pub async fn translate_text(&self, request: &TranslateTextRequest) -> Result<TranslateTextResult> {
        self.send(request).await
    }

    pub async fn translate_document(
        &self,
        request: &TranslateDocumentRequest,
    ) -> Result<TranslateDocumentResult> {
        self.send(request).await
    }

    /// Start an asynchronous batch job; a client token is generated when unset.
    pub async fn start_text_translation_job(
        &self,
        request: &StartTextTranslationJobRequest,
    ) -> Result<StartTextTranslationJobResult> {
        self.send(request).await
    }

    pub async fn stop_text_translation_job(
        &self,
        request: &StopTextTranslationJobRequest,
    ) -> Result<StopTextTranslationJobResult> {
        self.send(request).await
    }

    pub async fn describe_text_translation_job(
        &self,
        request: &DescribeTextTranslationJobRequest,
    ) -> Result<DescribeTextTranslationJobResult> {
        self.send(request).await
    }

    pub async fn list_text_translation_jobs(
        &self,
        request: &ListTextTranslationJobsRequest,
    ) -> Result<ListTextTranslationJobsResult> {
        self.send(request).await
    }

    pub async fn import_terminology(
        &self,
        request: &ImportTerminologyRequest,
    ) -> Result<ImportTerminologyResult> {
        self.send(request).await
    }

    pub async fn get_terminology(&self, request: &GetTerminologyRequest) -> Result<GetTerminologyResult> {
        self.send(request).await
    }

    pub async fn delete_terminology(
        &self,
        request: &DeleteTerminologyRequest,
    ) -> Result<DeleteTerminologyResult> {
        self.send(request).await
    }

    pub async fn list_terminologies(
        &self,
        request: &ListTerminologiesRequest,
    ) -> Result<ListTerminologiesResult> {
        self.send(request).await
    }

    pub async fn create_parallel_data(
        &self,
        request: &CreateParallelDataRequest,
    ) -> Result<CreateParallelDataResult> {
        self.send(request).await
    }

    pub async fn get_parallel_data(&self, request: &GetParallelDataRequest) -> Result<GetParallelDataResult> {
        self.send(request).await
    }

    pub async fn update_parallel_data(
        &self,
        request: &UpdateParallelDataRequest,
    ) -> Result<UpdateParallelDataResult> {
        self.send(request).await
    }

    pub async fn delete_parallel_data(
        &self,
        request: &DeleteParallelDataRequest,
    ) -> Result<DeleteParallelDataResult> {
        self.send(request).await
    }

    pub async fn list_parallel_data(&self, request: &ListParallelDataRequest) -> Result<ListParallelDataResult> {
        self.send(request).await
    }

    pub async fn list_languages(&self, request: &ListLanguagesRequest) -> Result<ListLanguagesResult> {
        self.send(request).await
    }

    pub async fn tag_resource(&self, request: &TagResourceRequest) -> Result<TagResourceResult> {
        self.send(request).await
    }

    pub async fn untag_resource(&self, request: &UntagResourceRequest) -> Result<UntagResourceResult> {
        self.send(request).await
    }

    pub async fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResult> {
        self.send(request).await
    }

    /// Follow `NextToken` until every supported language has been listed.
    ///
    /// A token the service already handed out is treated as a broken
    /// response rather than followed again.
    pub async fn list_all_languages(&self, request: &ListLanguagesRequest) -> Result<Vec<Language>> {
        let mut request = request.clone();
        let mut languages = Vec::new();
        let mut seen_tokens: HashSet<String> = request.next_token.iter().cloned().collect();

        loop {
            let page = self.list_languages(&request).await?;
            languages.extend(page.languages.unwrap_or_default());
            match page.next_token {
                Some(token) if !token.is_empty() => {
                    if !seen_tokens.insert(token.clone()) {
                        warn!("ListLanguages returned NextToken {} twice", token);
                        return Err(TranslateError::InvalidResponseError {
                            message: format!("ListLanguages repeated NextToken {}", token),
                        });
                    }
                    request.next_token = Some(token);
                }
                _ => break,
            }
        }

        Ok(languages)
    }
}
