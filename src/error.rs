//! Error types for Postmark operations.

use std::path::PathBuf;

use thiserror::Error;

/// A message description was rejected before any I/O happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `to` is absent, empty, or an empty list.
    #[error("message has no `to` recipient")]
    MissingRecipient,

    #[error("message has no subject")]
    MissingSubject,

    /// Neither `text` nor `html` was given.
    #[error("message has neither a text nor an html body")]
    MissingBody,

    #[error("batch contains no messages")]
    EmptyBatch,
}

/// Errors that can occur when talking to Postmark.
#[derive(Debug, Error)]
pub enum Error {
    /// The message failed validation; nothing was sent.
    #[error("invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// `to` + `cc` + `bcc` holds more addresses than Postmark accepts.
    #[error("message has {count} recipients, at most {max} are allowed", max = crate::MAX_RECIPIENTS)]
    RecipientLimitExceeded { count: usize },

    /// A batch holds more messages than Postmark accepts in one call.
    #[error("batch has {count} messages, at most {max} are allowed", max = crate::MAX_BATCH_SIZE)]
    BatchLimitExceeded { count: usize },

    /// An attachment could not be read from disk.
    #[error("failed to read attachment {}: {source}", .path.display())]
    AttachmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or transport failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to parse response (status {status}): {source}")]
    ResponseParse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Postmark accepted the request but reported an error.
    ///
    /// `detail` holds the response body with its `Message` field removed.
    #[error("postmark error {code}: {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
        detail: serde_json::Value,
    },

    /// A successful response did not have the expected shape.
    #[error("unexpected response body: {detail}")]
    UnexpectedBody { detail: serde_json::Value },

    /// The client was built without a server token.
    #[error("a server token is required")]
    MissingToken,

    /// An account-level endpoint was called on a client without an account token.
    #[error("an account token is required for this endpoint")]
    MissingAccountToken,

    /// A token contained characters that cannot be sent in an HTTP header.
    #[error("token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}
