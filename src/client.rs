use crate::config::{ConfigError, GatewayConfig};
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Network failure or a non-2xx status.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Cannot build endpoint URL from '{0}'")]
    Url(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GatewayError {
    /// Status code of the response, when the backend answered with a non-2xx.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// One method per backend endpoint; the domain modules add them.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    origin: Url,
    api_root: Url,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: &GatewayConfig, http: reqwest::Client) -> Result<Self, GatewayError> {
        Ok(Self {
            http,
            origin: config.parsed_base_url()?,
            api_root: config.api_root()?,
        })
    }

    /// The versioned API root, e.g. `http://localhost:8000/api/v1`.
    pub fn base_url(&self) -> &Url {
        &self.api_root
    }

    /// Joins path segments onto the API root, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        join(&self.api_root, segments)
    }

    pub async fn get(&self, segments: &[&str]) -> Result<Value, GatewayError> {
        let url = self.endpoint(segments)?;
        self.send(Method::GET, url, |request| request).await
    }

    pub async fn get_query<Q>(&self, segments: &[&str], query: &Q) -> Result<Value, GatewayError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        self.send(Method::GET, url, |request| request.query(query))
            .await
    }

    pub async fn post<B>(&self, segments: &[&str], body: &B) -> Result<Value, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        self.send(Method::POST, url, |request| request.json(body))
            .await
    }

    /// POST without a body.
    pub async fn post_empty(&self, segments: &[&str]) -> Result<Value, GatewayError> {
        let url = self.endpoint(segments)?;
        self.send(Method::POST, url, |request| request).await
    }

    /// POST whose parameters travel in the query string.
    pub async fn post_query<Q>(&self, segments: &[&str], query: &Q) -> Result<Value, GatewayError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        self.send(Method::POST, url, |request| request.query(query))
            .await
    }

    /// `GET /` on the origin: service name, version and docs location.
    pub async fn root(&self) -> Result<Value, GatewayError> {
        let url = join(&self.origin, &[])?;
        self.send(Method::GET, url, |request| request).await
    }

    /// `GET /health` on the origin, outside the versioned prefix.
    pub async fn health(&self) -> Result<Value, GatewayError> {
        let url = join(&self.origin, &["health"])?;
        self.send(Method::GET, url, |request| request).await
    }

    async fn send<F>(&self, method: Method, url: Url, build: F) -> Result<Value, GatewayError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        tracing::debug!(%method, %url, "gateway request");

        let request = build(self.http.request(method.clone(), url.clone()));
        let response = match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    %method, %url, status = ?e.status(), error = %e,
                    "gateway request failed"
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(
            %method, %url, status = status.as_u16(), len = bytes.len(),
            "gateway response"
        );

        // 204 and friends carry no body
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn join(root: &Url, segments: &[&str]) -> Result<Url, GatewayError> {
    let mut url = root.clone();
    url.path_segments_mut()
        .map_err(|_| GatewayError::Url(root.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
