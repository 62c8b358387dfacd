//! Message history, authorized with the server token.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::client::{Auth, Client};

impl Client {
    /// Search sent messages.
    pub async fn outbound_messages<Q>(&self, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.get("/messages/outbound", Auth::Server, Some(query))
            .await
    }

    pub async fn outbound_message_details(&self, message_id: &str) -> Result<Value> {
        let path = format!("/messages/outbound/{message_id}/details");
        self.get(&path, Auth::Server, None::<&()>).await
    }

    /// Search processed inbound messages.
    pub async fn inbound_messages<Q>(&self, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.get("/messages/inbound", Auth::Server, Some(query))
            .await
    }

    pub async fn inbound_message_details(&self, message_id: &str) -> Result<Value> {
        let path = format!("/messages/inbound/{message_id}/details");
        self.get(&path, Auth::Server, None::<&()>).await
    }
}
