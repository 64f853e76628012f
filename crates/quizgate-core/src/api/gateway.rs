//! Single egress point for backend calls.
//!
//! The gateway shapes requests and classifies responses. It knows nothing
//! about sessions or navigation: the token is a parameter and a 401 comes
//! back as `ApiError::Unauthorized` for the caller to act on.

use reqwest::{header, Client, Method, Response};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::LoginRequest;

use super::ApiError;

/// Backend client. Clone is cheap - reqwest::Client uses Arc internally
/// for connection pooling.
#[derive(Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    fn headers(token: Option<&str>) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(format!("Unusable token: {}", e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Send one request and classify the answer.
    ///
    /// A 2xx response is returned untouched. 401 maps to
    /// `ApiError::Unauthorized`, other statuses through
    /// `ApiError::from_status`, and transport failures to `ApiError::Network`.
    pub async fn call(
        &self,
        method: Method,
        resource: &str,
        body: Option<&JsonValue>,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = self.url(resource);
        debug!(%method, url = %url, authorized = token.is_some(), "Dispatching request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(Self::headers(token)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, url = %url, error = %e, "Request failed");
            ApiError::Network(e)
        })?;

        Self::check_response(response).await
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %url, "Backend returned error status");
            Err(ApiError::from_status(status, &body))
        }
    }

    /// POST `login` with the admin password; never carries a token
    pub async fn login(&self, password: &str) -> Result<Response, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            password: password.to_string(),
        })
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.call(Method::POST, "login", Some(&body), None).await
    }
}
