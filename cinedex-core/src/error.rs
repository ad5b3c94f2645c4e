use thiserror::Error;

/// Errors surfaced by builders, matching services and repositories.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup produced no qualifying candidate after both resolution phases.
    #[error("no movie was found")]
    NotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A mandatory field is absent from a provider payload. This is a broken
    /// precondition of the provider, not of the builder that noticed it.
    #[error("malformed {provider} payload: missing {field}")]
    MalformedPayload {
        provider: &'static str,
        field: &'static str,
    },

    /// The catalog behind this repository cannot express the operation.
    #[error("{0} is not supported by this provider")]
    Unsupported(&'static str),

    #[error("API error: {0}")]
    Api(String),

    #[error("rate limited")]
    RateLimited,

    #[error("invalid API key")]
    InvalidApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn malformed(provider: &'static str, field: &'static str) -> Self {
        Error::MalformedPayload { provider, field }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
