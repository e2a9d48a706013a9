//! HTTP boundary to the PokeWealth backend.
//!
//! Every backend call goes through [`Transport`]: JSON reads, binary reads,
//! and multipart posts. Requests are single-shot; a failure is reported to
//! the caller and never retried here.

use crate::config;
use crate::error::{PokewealthError, Result};
use reqwest::blocking::{multipart::Form, Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Owns the HTTP client and the backend origin every path is resolved against.
pub struct Transport {
    /// Backend origin, e.g. `http://localhost:8000`.
    pub base_url: String,
    timeout: Duration,
    client: Client,
}

impl Transport {
    /// Create a transport for the given origin.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        config::join_url(&self.base_url, path)
    }

    /// `GET` a path and decode its JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(method = "GET", %url, "backend request");
        let resp = self.client.get(&url).send().map_err(|e| log_failure(&url, e))?;
        let resp = check_status(&url, resp)?;
        decode(&url, resp)
    }

    /// `GET` a path and return the raw body bytes.
    pub fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!(method = "GET", %url, "backend request");
        let resp = self.client.get(&url).send().map_err(|e| log_failure(&url, e))?;
        let resp = check_status(&url, resp)?;
        Ok(resp.bytes()?.to_vec())
    }

    /// `POST` a multipart form and decode the JSON reply.
    pub fn post_multipart_json<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path);
        debug!(method = "POST", %url, "backend multipart request");
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| log_failure(&url, e))?;
        let resp = check_status(&url, resp)?;
        decode(&url, resp)
    }
}

/// Decode a JSON body. Malformed bodies surface as [`PokewealthError::Json`].
fn decode<T: DeserializeOwned>(url: &str, resp: Response) -> Result<T> {
    let body = resp.bytes()?;
    serde_json::from_slice(&body).map_err(|e| {
        warn!(%url, error = %e, "undecodable backend response");
        PokewealthError::Json(e)
    })
}

fn log_failure(url: &str, err: reqwest::Error) -> PokewealthError {
    warn!(%url, error = %err, "backend unreachable");
    PokewealthError::Http(err)
}

/// Turn a non-2xx response into [`PokewealthError::Api`].
///
/// FastAPI reports failures as `{"detail": "..."}`; that text is kept when
/// present. Bodies that are not JSON, or carry a non-string detail, give
/// `detail: None`.
fn check_status(url: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let detail = extract_detail(&body);
    warn!(%url, status = status.as_u16(), ?detail, "backend rejected request");
    Err(PokewealthError::Api {
        status: status.as_u16(),
        detail,
    })
}

/// Pull the `detail` string out of an error body, if there is one.
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}
