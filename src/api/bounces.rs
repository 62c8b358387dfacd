//! Bounce queries, authorized with the server token.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::client::{Auth, Client};

impl Client {
    /// Summary of bounce counts by type.
    pub async fn delivery_stats(&self) -> Result<Value> {
        self.get("/deliverystats", Auth::Server, None::<&()>).await
    }

    /// List bounces.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token")?;
    /// let bounces = client
    ///     .bounces(&[("count", "50"), ("offset", "0"), ("type", "HardBounce")])
    ///     .await?;
    /// println!("{}", bounces["TotalCount"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn bounces<Q>(&self, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.get("/bounces", Auth::Server, Some(query)).await
    }

    pub async fn bounce(&self, id: u64) -> Result<Value> {
        self.get(&format!("/bounces/{id}"), Auth::Server, None::<&()>)
            .await
    }

    /// Raw source of the bounced message.
    pub async fn bounce_dump(&self, id: u64) -> Result<Value> {
        self.get(&format!("/bounces/{id}/dump"), Auth::Server, None::<&()>)
            .await
    }

    /// Reactivate the address that bounced.
    pub async fn activate_bounce(&self, id: u64) -> Result<Value> {
        self.request(
            Method::PUT,
            &format!("/bounces/{id}/activate"),
            Auth::Server,
            None::<&()>,
            None::<&()>,
        )
        .await
    }

    pub async fn bounce_tags(&self) -> Result<Value> {
        self.get("/bounces/tags", Auth::Server, None::<&()>).await
    }
}
