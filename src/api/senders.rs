//! Sender signature management, authorized with the account token.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::client::{Auth, Client};

impl Client {
    /// List sender signatures.
    ///
    /// Fails with [`Error::MissingAccountToken`](crate::Error::MissingAccountToken)
    /// when the client has no account token, as do all methods here.
    pub async fn senders<Q>(&self, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.get("/senders", Auth::Account, Some(query)).await
    }

    pub async fn sender(&self, id: u64) -> Result<Value> {
        self.get(&format!("/senders/{id}"), Auth::Account, None::<&()>)
            .await
    }

    /// Create a sender signature; Postmark then emails a confirmation link.
    pub async fn create_sender<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, "/senders", Auth::Account, None::<&()>, Some(body))
            .await
    }

    pub async fn edit_sender<B>(&self, id: u64, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/senders/{id}");
        self.request(Method::PUT, &path, Auth::Account, None::<&()>, Some(body))
            .await
    }

    pub async fn delete_sender(&self, id: u64) -> Result<Value> {
        self.account_action(Method::DELETE, &format!("/senders/{id}"))
            .await
    }

    pub async fn resend_sender_confirmation(&self, id: u64) -> Result<Value> {
        self.account_action(Method::POST, &format!("/senders/{id}/resend"))
            .await
    }

    pub async fn verify_sender_spf(&self, id: u64) -> Result<Value> {
        self.account_action(Method::POST, &format!("/senders/{id}/verifyspf"))
            .await
    }

    pub async fn request_new_sender_dkim(&self, id: u64) -> Result<Value> {
        self.account_action(Method::POST, &format!("/senders/{id}/requestnewdkim"))
            .await
    }

    /// Bodiless account-level call.
    pub(crate) async fn account_action(&self, method: Method, path: &str) -> Result<Value> {
        self.request(method, path, Auth::Account, None::<&()>, None::<&()>)
            .await
    }
}
