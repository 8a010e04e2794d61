pub mod models;
pub mod projects;
pub mod work_packages;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

pub const API_PATH: &str = "/api/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the OpenProject v3 API, authenticated with an API key.
pub struct OpenProjectClient {
    pub client: Client,
    pub base_url: String,
    api_key: String,
}

impl OpenProjectClient {
    /// `base_url` must already end in `/api/v3`; see [`normalize_base_url`].
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the API key as basic auth (user `apikey`) and the HAL accept header.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth("apikey", Some(&self.api_key))
            .header(ACCEPT, "application/hal+json")
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    /// Sends `request`, fails on any non-2xx status and parses the JSON body.
    pub async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("{action}: request failed"))?;
        let response = check_response(response, action).await?;

        let body = response.text().await?;
        let parsed: T = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("{action}: failed to parse response: {e}\nBody: {body}"))?;
        Ok(parsed)
    }
}

/// Turns auth failures and other non-2xx responses into errors.
pub async fn check_response(response: Response, action: &str) -> Result<Response> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        bail!(
            "{action}: unauthorized (HTTP {}). Check the API key and its permissions.",
            status.as_u16()
        );
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("{action}: HTTP {}\n{body}", status.as_u16());
    }

    Ok(response)
}

/// Derives the API base (ending in `/api/v3`) from an instance URL.
pub fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        bail!("OPENPROJECT_URL must not be empty");
    }

    match url.find(API_PATH) {
        Some(idx) => Ok(format!("{}{}", &url[..idx], API_PATH)),
        None => Ok(format!("{url}{API_PATH}")),
    }
}

/// The instance URL users open in a browser, without the API path.
pub fn instance_origin(base_url: &str) -> String {
    base_url.replace(API_PATH, "").trim_end_matches('/').to_string()
}
