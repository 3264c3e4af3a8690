//! Search API HTTP client.

use reqwest::{header, Client, Proxy, Response};

use crate::api::types::SearchResults;
use crate::error::{Error, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Apikey";

/// Authenticated client for the search and download endpoints.
///
/// One `reqwest::Client` is built up front and reused for every request,
/// so all traffic goes through the same proxy configuration.
pub struct SearchApi {
    client: Client,
    api_key: String,
}

impl SearchApi {
    /// Create a new API client, routed through `proxy` when given.
    pub fn new(api_key: String, proxy: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy) = proxy {
            let proxy_url = url::Url::parse(proxy)?;
            tracing::debug!("Routing requests through proxy {}", proxy_url);
            builder = builder.proxy(Proxy::all(proxy_url.as_str())?);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, api_key })
    }

    /// Run one search and decode the result envelope.
    pub async fn search(&self, url: &str) -> Result<SearchResults> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Search failed: HTTP {} - {}",
                status,
                text.chars().take(500).collect::<String>()
            )));
        }

        let results: SearchResults = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!("Undecodable search response: {}", text);
            Error::Json(e)
        })?;

        tracing::debug!(
            "Search returned {} items ({} total hits)",
            results.len(),
            results.meta.total_hits
        );

        Ok(results)
    }

    /// Request a file from the download endpoint.
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
