//! Image hosting boundary.

use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use pawhub_core::error::{ApiError, Error, InvalidInputError};
use pawhub_core::Result;

use crate::client::transport;

/// Response envelope of the hosting endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Client for the third-party image hosting endpoint.
///
/// A binary image goes up as multipart form data; the returned URL is
/// what gets stored on the owning pet or campaign record.
#[derive(Debug, Clone)]
pub struct ImageHost {
    client: reqwest::Client,
    endpoint: Url,
    key: String,
}

impl ImageHost {
    /// Create a client for a hosting endpoint and its API key.
    pub fn new(endpoint: impl AsRef<str>, key: impl Into<String>) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref()).map_err(|e| InvalidInputError::Other {
            message: format!("invalid upload endpoint: {e}"),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("pawhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Ok(Self {
            client,
            endpoint,
            key: key.into(),
        })
    }

    /// Upload an image, returning its hosted URL.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String> {
        debug!(filename, "uploading image");

        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", self.key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(ApiError::new(status.as_u16(), None, None)));
        }

        let body: UploadResponse = response.json().await.map_err(transport)?;
        Ok(body.data.url)
    }
}
