//! HTTP commenting service using reqwest

use crate::config::{DETECT_LANGUAGE_PATH, ServiceConfig};
use crate::error::{Error, Result};
use crate::fence::extract_commented_code;
use crate::service::CommentService;
use crate::types::{AUTO_LANGUAGE, SubmissionRequest};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Commenting service reached over HTTP
pub struct HttpCommentService {
    client: Client,
    config: ServiceConfig,
}

#[derive(Serialize)]
struct DetectLanguagePayload<'a> {
    code: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct DetectLanguageResponse {
    language: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpCommentService {
    /// Create a new HTTP service
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.config.timeout_secs)
        } else {
            Error::from(err)
        }
    }

    /// Turn a non-2xx response into [`Error::Server`], keeping its error text
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(Error::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_json<T: Serialize + Sync + ?Sized>(&self, url: &str, payload: &T) -> Result<Value> {
        debug!(url, "sending request");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        serde_json::from_str(&text).map_err(|e| Error::Parse(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl CommentService for HttpCommentService {
    async fn comment(&self, request: &SubmissionRequest) -> Result<String> {
        let body = self.post_json(&self.config.comment_url(), request).await?;
        extract_commented_code(&body, &self.config.response_key)
    }

    async fn detect_language(&self, code: &str) -> Result<String> {
        let payload = DetectLanguagePayload {
            code,
            language: AUTO_LANGUAGE,
        };
        let body = self
            .post_json(&self.config.endpoint_url(DETECT_LANGUAGE_PATH), &payload)
            .await?;

        let detected: DetectLanguageResponse = serde_json::from_value(body)
            .map_err(|e| Error::Parse(format!("invalid language response: {e}")))?;

        Ok(detected.language.to_lowercase())
    }
}
