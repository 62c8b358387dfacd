//! Message description and the JSON payload sent to Postmark.

use std::path::PathBuf;

use serde::Serialize;

/// One address or an ordered list of addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Number of addresses counted against the recipient limit.
    ///
    /// An empty address counts as 0, matching what reaches the wire.
    pub fn count(&self) -> usize {
        match self {
            Recipients::One(address) => usize::from(!address.is_empty()),
            Recipients::Many(list) => list.len(),
        }
    }

    /// `true` for an empty address or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::One(address) => address.is_empty(),
            Recipients::Many(list) => list.is_empty(),
        }
    }

    /// Render as one comma-separated field value.
    pub(crate) fn to_field(&self) -> String {
        match self {
            Recipients::One(address) => address.clone(),
            Recipients::Many(list) => list.join(","),
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(list: Vec<String>) -> Self {
        Recipients::Many(list)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(list: Vec<&str>) -> Self {
        Recipients::Many(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(list: &[&str]) -> Self {
        Recipients::Many(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(list: [&str; N]) -> Self {
        Recipients::Many(list.iter().map(|s| s.to_string()).collect())
    }
}

/// Custom headers, kept in insertion order.
///
/// Inserting a name that is already present replaces its value without
/// moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// An email to send through Postmark.
///
/// Optional text fields count as absent when they are `None` or empty.
///
/// # Examples
/// ```
/// use postmark_client::MessageRequest;
///
/// let message = MessageRequest::new()
///     .from("sender@example.com")
///     .from_name("Example Team")
///     .to(["a@example.com", "b@example.com"])
///     .subject("Welcome")
///     .text("Hello!")
///     .header("X-Campaign", "onboarding");
/// assert_eq!(message.recipient_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub to: Option<Recipients>,
    pub cc: Option<Recipients>,
    pub bcc: Option<Recipients>,
    pub reply_to: Option<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub tag: Option<String>,
    pub headers: Headers,
    pub attachments: Vec<PathBuf>,
}

impl MessageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Display name shown next to the `from` address.
    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    pub fn to(mut self, recipients: impl Into<Recipients>) -> Self {
        self.to = Some(recipients.into());
        self
    }

    pub fn cc(mut self, recipients: impl Into<Recipients>) -> Self {
        self.cc = Some(recipients.into());
        self
    }

    pub fn bcc(mut self, recipients: impl Into<Recipients>) -> Self {
        self.bcc = Some(recipients.into());
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a file; it is read when the message is sent.
    pub fn attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }

    /// Total of `to`, `cc` and `bcc` addresses.
    pub fn recipient_count(&self) -> usize {
        [&self.to, &self.cc, &self.bcc]
            .into_iter()
            .flatten()
            .map(Recipients::count)
            .sum()
    }
}

/// A custom header as Postmark expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireHeader {
    pub name: String,
    pub value: String,
}

/// A file attachment with base64 content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireAttachment {
    pub name: String,
    pub content: String,
    pub content_type: String,
}

/// Request body for `POST /email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WirePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<WireHeader>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<WireAttachment>,
}
