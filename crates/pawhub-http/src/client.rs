//! HTTP client for platform API requests.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use pawhub_core::error::{ApiError, Error, TransportError};
use pawhub_core::types::ApiUrl;

use crate::endpoints::ErrorEnvelope;

/// Classify a reqwest failure into the crate's transport taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let inner = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(inner)
}

/// HTTP client for the platform API.
///
/// Attaches the bearer credential when one is supplied, surfaces non-2xx
/// responses as [`ApiError`], and nothing more: no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pawhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// GET with query parameters.
    #[instrument(skip(self, params, token), fields(base = %self.base))]
    pub async fn get<Q, R>(&self, path: &str, params: &Q, token: Option<&str>) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(path, "GET");
        trace!(?params, "query parameters");
        let request = self.client.get(self.base.endpoint_url(path)).query(params);
        self.send(request, token).await
    }

    /// POST with a JSON body.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub async fn post<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.client.post(self.base.endpoint_url(path)).json(body);
        self.send(request, token).await
    }

    /// PUT with a JSON body.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub async fn put<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(path, "PUT");
        let request = self.client.put(self.base.endpoint_url(path)).json(body);
        self.send(request, token).await
    }

    /// PATCH with no request body, for action endpoints
    /// (`PATCH /resource/:id/action`).
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn patch<R>(&self, path: &str, token: Option<&str>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!(path, "PATCH");
        let request = self.client.patch(self.base.endpoint_url(path));
        self.send(request, token).await
    }

    /// DELETE, discarding any response body.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), Error> {
        debug!(path, "DELETE");
        let request = self.client.delete(self.base.endpoint_url(path));

        let response = self
            .bearer(request, token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<R, Error> {
        let response = self
            .bearer(request, token)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Attach the bearer credential, if present.
    fn bearer(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.headers(auth_headers(token)),
            None => request,
        }
    }

    /// Handle a platform response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse the server's JSON error envelope, falling back to
    /// status-only when the body is not JSON.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => ApiError::new(status, envelope.error, envelope.message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

fn auth_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let auth_value = format!("Bearer {}", token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value).expect("invalid token characters"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
