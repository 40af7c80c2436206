//! Client for the FarmEase REST endpoints the labour pages consume.

use std::fmt;

use dioxus::prelude::document;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    ActionResponse, ApplyRequest, ErrorBody, FarmWork, LocationResponse, LoginRequest,
    LoginResponse, WithdrawRequest, WorksResponse,
};

/// Compile-time override of where the API lives.
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("FARMEASE_API_BASE");

/// Used only when there is neither an override nor a page origin to follow.
const LOCAL_API: &str = "http://127.0.0.1:8080";

/// Pick the API base: the compile-time override, else the origin the page was
/// served from, else the local development server.
pub fn resolve_base(configured: Option<&str>, page_origin: Option<&str>) -> String {
    let usable = |s: &&str| !s.trim().is_empty() && *s != "null";
    configured
        .filter(usable)
        .or(page_origin.filter(usable))
        .unwrap_or(LOCAL_API)
        .trim()
        .trim_end_matches('/')
        .to_string()
}

async fn page_origin() -> Option<String> {
    match document::eval("return window.location.origin;").join::<String>().await {
        Ok(origin) => Some(origin),
        Err(e) => {
            tracing::debug!(error = ?e, "page origin unavailable");
            None
        }
    }
}

/// Why a request did not produce the expected body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never got a response.
    Transport(String),
    /// Non-2xx status. `message` is the body's `error` field when present.
    Status { status: u16, message: Option<String> },
    /// 2xx status with a body that did not decode.
    Decode(String),
}

impl ApiError {
    /// The server's message for status failures, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
            ApiError::Status {
                status,
                message: Some(m),
            } => write!(f, "HTTP {status}: {m}"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            ApiError::Decode(e) => write!(f, "unexpected response body: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Endpoints used by the labour dashboard and its sibling pages.
#[allow(async_fn_in_trait)]
pub trait FarmWorksApi {
    async fn user_location(&self, username: &str) -> Result<LocationResponse, ApiError>;

    async fn works_in(&self, area: &str, state: &str) -> Result<Vec<FarmWork>, ApiError>;

    async fn withdraw(&self, request: &WithdrawRequest) -> Result<ActionResponse, ApiError>;

    async fn apply(&self, request: &ApplyRequest) -> Result<ActionResponse, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// [`FarmWorksApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFarmWorksApi {
    client: reqwest::Client,
    /// `None` follows the page origin, looked up per request.
    base: Option<String>,
}

impl Default for HttpFarmWorksApi {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base: API_BASE_OVERRIDE.map(|b| resolve_base(Some(b), None)),
        }
    }
}

impl HttpFarmWorksApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: Some(resolve_base(Some(base), None)),
        }
    }

    async fn url(&self, path: &str) -> String {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => resolve_base(None, page_origin().await.as_deref()),
        };
        format!("{base}{path}")
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path).await)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path).await)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl FarmWorksApi for HttpFarmWorksApi {
    async fn user_location(&self, username: &str) -> Result<LocationResponse, ApiError> {
        self.get("/api/weather/location", &[("username", username)])
            .await
    }

    async fn works_in(&self, area: &str, state: &str) -> Result<Vec<FarmWork>, ApiError> {
        let response: WorksResponse = self
            .get("/api/farm-works", &[("area", area), ("state", state)])
            .await?;
        Ok(response.works)
    }

    async fn withdraw(&self, request: &WithdrawRequest) -> Result<ActionResponse, ApiError> {
        self.post("/api/farm-works/withdraw", request).await
    }

    async fn apply(&self, request: &ApplyRequest) -> Result<ActionResponse, ApiError> {
        self.post("/api/farm-works/apply", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("/api/login", request).await
    }
}
