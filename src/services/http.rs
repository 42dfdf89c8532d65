//! HTTP client for the FastAPI prediction backend.

use super::prediction_service::PredictionService;
use crate::error::RequestError;
use crate::nutrition::{
    HealthStatus, HistoryEntry, MealAnalysis, MealImage, MealSuggestion, MealSuggestionRequest,
    NutritionTargets, Payload, PredictionResult,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("fitnourish/", env!("CARGO_PKG_VERSION"));

/// [`PredictionService`] backed by the prediction REST API.
pub struct HttpPredictionService {
    http_client: Client,
    base_url: String,
}

impl HttpPredictionService {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/history/{user_id}` with the id percent-encoded as a single
    /// path segment.
    fn history_url(&self, user_id: &str) -> Result<Url, RequestError> {
        let invalid = |reason: String| {
            error!("Invalid service URL {}: {}", self.base_url, reason);
            RequestError::Transport(format!("invalid service URL {}: {}", self.base_url, reason))
        };
        let mut url = Url::parse(&self.url("history")).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".to_string()))?
            .push(user_id);
        Ok(url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + fmt::Debug + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        info!("POST {}", url);
        debug!("Body: {:?}", body);

        self.send(self.http_client.post(&url).json(body), &url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestError> {
        info!("GET {}", url);
        self.send(self.http_client.get(url), url).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, RequestError> {
        let response = request
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                RequestError::Transport(e.to_string())
            })?;

        decode(response).await
    }
}

/// Turn a response into `T`, or into a [`RequestError`] carrying the
/// service's `detail` message.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    info!("Response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    if !status.is_success() {
        error!("Prediction service error ({}): {}", status, body);
        return Err(RequestError::Status {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        error!("Could not decode response body: {}", e);
        RequestError::Decode(e.to_string())
    })
}

/// Pull a readable message out of an error body.
///
/// FastAPI reports `{"detail": "text"}` for raised errors and
/// `{"detail": [{"msg": ..., "loc": [...]}, ...]}` for rejected payloads.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .and_then(Value::as_str);
                    Some(match field {
                        Some(field) => format!("{}: {}", field, msg),
                        None => msg.to_string(),
                    })
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict_and_save(&self, payload: &Payload) -> Result<PredictionResult, RequestError> {
        self.post_json("predict-and-save", payload).await
    }

    async fn predict(&self, payload: &Payload) -> Result<NutritionTargets, RequestError> {
        self.post_json("predict", payload).await
    }

    async fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>, RequestError> {
        let url = self.history_url(user_id)?;
        self.get_json(url.as_str()).await
    }

    async fn health(&self) -> Result<HealthStatus, RequestError> {
        self.get_json(&self.url("api/health")).await
    }

    async fn suggest_meals(
        &self,
        request: &MealSuggestionRequest,
    ) -> Result<Vec<MealSuggestion>, RequestError> {
        self.post_json("api/suggest-meals", request).await
    }

    async fn analyze_meal(&self, image: MealImage) -> Result<MealAnalysis, RequestError> {
        let url = self.url("api/analyze-meal");
        info!("POST {} ({}, {} bytes)", url, image.file_name, image.bytes.len());

        let mime = image.mime();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime)
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let form = Form::new().part("image", part);

        self.send(self.http_client.post(&url).multipart(form), &url).await
    }
}
