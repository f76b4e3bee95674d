//! Fetch client: build the URL, perform the request, decode JSON.

use super::endpoints::{ApiBases, Endpoint};
use crate::error::{NhlError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
mod tests;

const USER_AGENT: &str = "nhl-stats/0.1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Anything that can resolve an [`Endpoint`] to a JSON document.
///
/// The scrape driver only depends on this trait; tests substitute an
/// in-memory source.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value>;
}

/// HTTP-backed [`JsonSource`] for the public NHL APIs.
#[derive(Debug, Clone)]
pub struct NhlClient {
    http: Client,
    bases: ApiBases,
}

impl NhlClient {
    pub fn new() -> Result<Self> {
        Self::with_bases(ApiBases::default())
    }

    pub fn with_bases(bases: ApiBases) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, bases })
    }

    pub fn bases(&self) -> &ApiBases {
        &self.bases
    }

    /// GET `url` and decode the body.
    ///
    /// 404 maps to [`NhlError::NotFound`]; any other non-success status to
    /// [`NhlError::Status`].
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(NhlError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(NhlError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl JsonSource for NhlClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        self.get_json(&endpoint.url(&self.bases)).await
    }
}
