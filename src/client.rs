//! Postmark async client implementation.

use crate::{Error, MAX_BATCH_SIZE, MessageRequest, Result, ValidationError};
use futures::future::try_join_all;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

/// Which credential an endpoint is authorized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Server,
    Account,
}

/// Async client for the Postmark API.
///
/// Use [`Client::new`] with a server token, or [`Client::builder`] for
/// custom settings like an account token, proxy, or base URL.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    server_token: HeaderValue,
    account_token: Option<HeaderValue>,
    base_url: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client authorized with a server token.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// # fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(server_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().server_token(server_token).build()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a single email.
    ///
    /// The message is validated and its attachments are read before any
    /// network traffic. Returns the provider's response body.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Client, MessageRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token")?;
    /// let message = MessageRequest::new()
    ///     .from("sender@example.com")
    ///     .to("recipient@example.com")
    ///     .subject("Hello")
    ///     .text("World");
    /// let response = client.send(&message).await?;
    /// println!("{}", response["MessageID"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, message: &MessageRequest) -> Result<Value> {
        let payload = message.to_payload().await?;
        self.request(Method::POST, "/email", Auth::Server, None::<&()>, Some(&payload))
            .await
    }

    /// Send up to 500 emails in one call.
    ///
    /// Every message must pass validation before anything is sent. The
    /// returned array holds one result per message, in order; per-message
    /// error codes are left for the caller to inspect.
    pub async fn send_batch(&self, messages: &[MessageRequest]) -> Result<Vec<Value>> {
        if messages.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }
        if messages.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchLimitExceeded {
                count: messages.len(),
            });
        }
        // Validate everything up front so a bad message never waits on file reads.
        for message in messages {
            message.validate()?;
        }

        let payloads = try_join_all(messages.iter().map(|message| message.to_payload())).await?;
        let response = self
            .request(
                Method::POST,
                "/email/batch",
                Auth::Server,
                None::<&()>,
                Some(&payloads),
            )
            .await?;

        match response {
            Value::Array(results) => Ok(results),
            other => Err(Error::UnexpectedBody { detail: other }),
        }
    }

    pub(crate) async fn get<Q>(&self, path: &str, auth: Auth, query: Option<&Q>) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, path, auth, query, None::<&()>)
            .await
    }

    /// Common request pattern: send, then normalize the response.
    pub(crate) async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let headers = self.headers(auth)?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "sending postmark request");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(path, status = status.as_u16(), "received postmark response");

        normalize(status, &text)
    }

    /// Build headers for API requests.
    fn headers(&self, auth: Auth) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match auth {
            Auth::Server => {
                headers.insert(SERVER_TOKEN_HEADER, self.server_token.clone());
            }
            Auth::Account => {
                let token = self
                    .account_token
                    .clone()
                    .ok_or(Error::MissingAccountToken)?;
                headers.insert(ACCOUNT_TOKEN_HEADER, token);
            }
        }
        Ok(headers)
    }
}

/// Turn a raw response into the parsed body or an [`Error`].
fn normalize(status: StatusCode, body: &str) -> Result<Value> {
    let mut value: Value = serde_json::from_str(body).map_err(|source| Error::ResponseParse {
        status: status.as_u16(),
        source,
    })?;

    let code = value.get("ErrorCode").map(error_code).unwrap_or(0);
    if code == 0 && status.is_success() {
        return Ok(value);
    }

    let message = value
        .as_object_mut()
        .and_then(|object| object.remove("Message"))
        .and_then(|message| message.as_str().map(str::to_string))
        .unwrap_or_else(|| "failed".to_string());
    tracing::warn!(status = status.as_u16(), code, %message, "postmark reported an error");

    Err(Error::Api {
        status: status.as_u16(),
        code,
        message,
        detail: value,
    })
}

/// Numeric value of an `ErrorCode` field; -1 when it is present but unreadable.
fn error_code(field: &Value) -> i64 {
    match field {
        Value::Null => 0,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .unwrap_or(-1),
        Value::String(s) => s.trim().parse().unwrap_or(-1),
        _ => -1,
    }
}

const BASE_URL: &str = "https://api.postmarkapp.com";
const USER_AGENT_VALUE: &str = concat!("postmark-client-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Postmark client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    server_token: Option<String>,
    account_token: Option<String>,
    proxy: Option<String>,
    user_agent: String,
    base_url: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No tokens
    /// - No proxy
    /// - `postmark-client-rs/<version>` user agent
    /// - `https://api.postmarkapp.com` base URL
    pub fn new() -> Self {
        Self {
            server_token: None,
            account_token: None,
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Token for sending and server-level endpoints. Required.
    pub fn server_token(mut self, token: impl Into<String>) -> Self {
        self.server_token = Some(token.into());
        self
    }

    /// Token for account-level endpoints (senders, servers).
    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the client. No network traffic happens here.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// # fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::builder()
    ///     .server_token("server-token")
    ///     .account_token("account-token")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let server_token = self
            .server_token
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingToken)?;
        let server_token = token_header(&server_token)?;
        let account_token = self
            .account_token
            .filter(|t| !t.is_empty())
            .map(|t| token_header(&t))
            .transpose()?;

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        let http = builder.build()?;

        Ok(Client {
            http,
            server_token,
            account_token,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Tokens are marked sensitive so they stay out of `Debug` output.
fn token_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(token)?;
    value.set_sensitive(true);
    Ok(value)
}
