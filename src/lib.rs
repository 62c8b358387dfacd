//! # Postmark Client
//! Asynchronous wrapper around the Postmark transactional email HTTP API: send single or batched messages with [`Client`], and query bounces, message history, sender signatures and servers.
//!
//! ## Audience and uses
//! For Rust services that deliver transactional mail through Postmark: configure with [`ClientBuilder`], describe a message with [`MessageRequest`], then await [`Client::send`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest` and attachments are read with `tokio::fs`.
//!
//! ## Out of scope
//! No retries, timeouts or queueing. Every call is one request and one response; wrap calls in `tokio::time::timeout` or your own retry policy as needed.
//!
//! ## Errors
//! Input problems are reported before any I/O as [`Error::Validation`] or [`Error::RecipientLimitExceeded`]. Transport failures surface as [`Error::Request`], unparseable bodies as [`Error::ResponseParse`], and provider-reported failures as [`Error::Api`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use postmark_client::{Client, MessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_client::Error> {
//!     let client = Client::new("server-token")?;
//!     let message = MessageRequest::new()
//!         .from("sender@example.com")
//!         .from_name("Example Support")
//!         .to(["alice@example.com", "bob@example.com"])
//!         .subject("Your receipt")
//!         .html("<p>Thanks for your order.</p>")
//!         .attachment("receipt.pdf");
//!
//!     let response = client.send(&message).await?;
//!     println!("Sent: {}", response["MessageID"]);
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;
mod payload;

pub use client::{Client, ClientBuilder};
pub use error::{Error, ValidationError};
pub use models::{Headers, MessageRequest, Recipients, WireAttachment, WireHeader, WirePayload};

/// Most addresses (`to` + `cc` + `bcc`) one message may have.
pub const MAX_RECIPIENTS: usize = 20;

/// Most messages one batch call may carry.
pub const MAX_BATCH_SIZE: usize = 500;

/// Result type alias for Postmark operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
