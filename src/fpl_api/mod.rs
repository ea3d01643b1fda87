pub(crate) mod catalogue;
pub(crate) mod entry;
pub(crate) mod live;
pub(crate) mod standings;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::{FplError, Result};

pub(crate) const BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Borrowed view of the client settings needed for a single request.
pub(crate) struct Api<'a> {
    pub(crate) http: &'a reqwest::Client,
    pub(crate) base_url: &'a str,
    pub(crate) timeout: Option<Duration>,
    pub(crate) cache: Option<&'a ResponseCache>,
}

impl Api<'_> {
    /// Fetch `path` relative to the base URL and decode the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = endpoint_url(self.base_url, path);

        if let Some(body) = self.cache.and_then(|c| c.get(&url)) {
            debug!(url, "serving cached response");
            return decode(url, &body);
        }

        let body: Arc<str> = get_body(self.http, &url, self.timeout).await?.into();
        let value = decode(url.clone(), &body)?;
        if let Some(cache) = self.cache {
            cache.insert(url, body);
        }
        Ok(value)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn decode<T: DeserializeOwned>(url: String, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| FplError::Decode { url, source })
}

async fn get_body(
    client: &reqwest::Client,
    url: &str,
    timeout: Option<Duration>,
) -> Result<String> {
    debug!(url, "fetching resource");

    let mut request = client.get(url).header(CACHE_CONTROL, "no-cache");
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(|e| FplError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FplError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| FplError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
