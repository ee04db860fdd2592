use std::error::Error as StdError;
use std::fmt;

use crate::domain::ValidationError;

/// API call a [`NotifyError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Email,
    Sms,
    BulkEmail,
    Status,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::BulkEmail => "bulk email",
            Self::Status => "status",
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NotifyClient`](crate::NotifyClient).
///
/// A call that reached the API and got a non-2xx answer is *not* an error:
/// it returns a response record with `status_code` and `errors` populated.
/// These variants cover calls that produced no usable response at all.
pub enum NotifyError {
    /// The API key failed validation when building the client.
    #[error("invalid API key: {0}")]
    InvalidCredential(#[from] ValidationError),

    /// The request body could not be serialized.
    #[error("error encoding {operation} request body: {source}")]
    Encoding {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP round trip failure (DNS, TLS, connection, timeout, body read).
    #[error("error calling {operation} endpoint: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Response body is not the expected JSON.
    #[error("error decoding {operation} response: {source}")]
    Decoding {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// [`NotifyClient::next_status_page`](crate::NotifyClient::next_status_page)
    /// was called on the last page.
    #[error("status page has no next link")]
    NoNextPage,
}

impl NotifyError {
    /// Operation the error belongs to, if it came from an API call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Encoding { operation, .. }
            | Self::Network { operation, .. }
            | Self::Decoding { operation, .. } => Some(*operation),
            Self::InvalidCredential(_) | Self::HttpClient(_) | Self::NoNextPage => None,
        }
    }
}
