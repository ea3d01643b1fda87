/// All errors that can occur while fetching or aggregating league data.
#[derive(thiserror::Error, Debug)]
pub enum FplError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A resource shared by every manager could not be fetched, so no
    /// statistics can be produced for the league.
    #[error("provider unavailable while fetching {resource}: {source}")]
    ProviderUnavailable {
        resource: String,
        source: Box<FplError>,
    },

    /// A manager's season history could not be fetched.
    #[error("history unavailable for manager {manager_id}: {source}")]
    ManagerUnavailable {
        manager_id: u32,
        source: Box<FplError>,
    },
}

impl FplError {
    pub(crate) fn unavailable(resource: impl Into<String>) -> impl FnOnce(FplError) -> FplError {
        let resource = resource.into();
        move |source| FplError::ProviderUnavailable {
            resource,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, FplError>;
