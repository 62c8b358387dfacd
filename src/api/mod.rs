//! Passthrough endpoints.
//!
//! Each method maps its options onto query parameters (GET) or a JSON body
//! (POST/PUT) and returns the response body normalized the same way as
//! [`Client::send`](crate::Client::send).

mod bounces;
mod messages;
mod senders;
mod servers;
