//! # Racer X API Client
//!
//! Typed wrappers around the Racer X REST backend. One [`ApiClient`] is built
//! per process with a resolved base URL and a shared `reqwest::Client` that
//! always sends `Content-Type: application/json`. Every operation is a single
//! HTTP request mapped onto one verb and path.
//!
//! ## Modules
//!
//! - [`auth`] - registration, login and the authenticated user listing
//! - [`tracks`] - health check, track CRUD, search and track links
//! - [`credentials`] - where bearer tokens come from
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, reqwest::Error>`. Connection failures,
//! non-2xx statuses and undecodable bodies all arrive as the same error type;
//! callers that care about the status ask `err.status()`. Nothing in this
//! module retries or recovers.
//!
//! ## Response Shapes
//!
//! Auth operations return the decoded body. Track operations return an
//! [`ApiResponse`] carrying the status and headers alongside the decoded
//! `data`, so callers can inspect the raw response when they need to.
//!
//! ```rust,ignore
//! let client = ApiClient::from_env()?;
//! let tracks = client.get_tracks().await?.data;
//! ```

pub mod auth;
pub mod credentials;
pub mod tracks;

pub use credentials::{CredentialProvider, StaticToken};

use reqwest::{
    Client, RequestBuilder, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::{config, types::ApiResponse};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Builds a client rooted at `base_url`, e.g. `http://localhost:5555/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, http })
    }

    /// Builds a client from the environment, see [`config::api_url`].
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(config::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url, path = path)
    }
}

async fn checked(request: RequestBuilder) -> Result<Response, reqwest::Error> {
    request.send().await?.error_for_status()
}

/// Sends a request and decodes the body, keeping status and headers.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<ApiResponse<T>, reqwest::Error> {
    let response = checked(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let data = response.json::<T>().await?;

    Ok(ApiResponse {
        status,
        headers,
        data,
    })
}

/// Sends a request whose contract only promises a status; the body is ignored.
async fn send_empty(request: RequestBuilder) -> Result<ApiResponse<()>, reqwest::Error> {
    let response = checked(request).await?;

    Ok(ApiResponse {
        status: response.status(),
        headers: response.headers().clone(),
        data: (),
    })
}
