//! Server management.
//!
//! `current_server` and `edit_current_server` act on the server the server
//! token belongs to; the rest need the account token.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::client::{Auth, Client};

impl Client {
    pub async fn current_server(&self) -> Result<Value> {
        self.get("/server", Auth::Server, None::<&()>).await
    }

    pub async fn edit_current_server<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, "/server", Auth::Server, None::<&()>, Some(body))
            .await
    }

    /// List servers on the account.
    pub async fn servers<Q>(&self, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.get("/servers", Auth::Account, Some(query)).await
    }

    pub async fn server(&self, id: u64) -> Result<Value> {
        self.get(&format!("/servers/{id}"), Auth::Account, None::<&()>)
            .await
    }

    pub async fn create_server<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, "/servers", Auth::Account, None::<&()>, Some(body))
            .await
    }

    pub async fn edit_server<B>(&self, id: u64, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/servers/{id}");
        self.request(Method::PUT, &path, Auth::Account, None::<&()>, Some(body))
            .await
    }

    pub async fn delete_server(&self, id: u64) -> Result<Value> {
        self.account_action(Method::DELETE, &format!("/servers/{id}"))
            .await
    }
}
