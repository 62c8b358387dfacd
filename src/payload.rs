//! Validation and wire assembly for outgoing messages.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;
use regex::Regex;

use crate::models::{MessageRequest, WireAttachment, WireHeader, WirePayload};
use crate::{Error, MAX_RECIPIENTS, Result, ValidationError};

/// Display names made only of these characters are sent unquoted.
static PLAIN_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]*$").unwrap());

impl MessageRequest {
    /// Validate the message and assemble the body Postmark expects.
    ///
    /// Attachments are read from disk here, concurrently. Nothing is sent.
    pub async fn to_payload(&self) -> Result<WirePayload> {
        self.validate()?;
        let attachments = read_attachments(&self.attachments).await?;

        Ok(WirePayload {
            from: format_from(present(&self.from), present(&self.from_name)),
            to: self.to.as_ref().map(|r| r.to_field()),
            cc: self
                .cc
                .as_ref()
                .filter(|r| !r.is_empty())
                .map(|r| r.to_field()),
            bcc: self
                .bcc
                .as_ref()
                .filter(|r| !r.is_empty())
                .map(|r| r.to_field()),
            reply_to: present(&self.reply_to).map(str::to_string),
            subject: present(&self.subject).map(str::to_string),
            tag: present(&self.tag).map(str::to_string),
            html_body: present(&self.html).map(str::to_string),
            text_body: present(&self.text).map(str::to_string),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| WireHeader {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            attachments,
        })
    }

    /// Checks run in order; the first failure wins.
    pub fn validate(&self) -> Result<()> {
        if self.to.as_ref().is_none_or(|to| to.is_empty()) {
            return Err(ValidationError::MissingRecipient.into());
        }
        if present(&self.subject).is_none() {
            return Err(ValidationError::MissingSubject.into());
        }
        if present(&self.text).is_none() && present(&self.html).is_none() {
            return Err(ValidationError::MissingBody.into());
        }

        let count = self.recipient_count();
        if count > MAX_RECIPIENTS {
            return Err(Error::RecipientLimitExceeded { count });
        }
        Ok(())
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn format_from(address: Option<&str>, name: Option<&str>) -> Option<String> {
    let address = address?;
    let formatted = match name {
        Some(name) if PLAIN_NAME.is_match(name) => format!("{name} <{address}>"),
        Some(name) => {
            let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{escaped}\" <{address}>")
        }
        None => address.to_string(),
    };
    Some(formatted)
}

async fn read_attachments(paths: &[PathBuf]) -> Result<Vec<WireAttachment>> {
    try_join_all(paths.iter().map(|path| read_attachment(path))).await
}

async fn read_attachment(path: &Path) -> Result<WireAttachment> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| Error::AttachmentRead {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded attachment");

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(WireAttachment {
        name,
        content: STANDARD.encode(content),
        content_type,
    })
}
