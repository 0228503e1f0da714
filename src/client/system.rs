//! Connectivity probes, async request tracking and account-wide `sys.*` actions.

use serde_json::{Map, Value};

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload};

impl SendsayClient {
    /// Check that the service is reachable. Sent without credentials.
    ///
    /// Returns `true` when the answer carries `pong`.
    pub async fn ping(&self) -> Result<bool, SendsayError> {
        let result = self.execute(Payload::anonymous("ping").build()).await?;
        Ok(result.contains_key("pong"))
    }

    /// Authenticated ping. Returns `true` when the answer carries `ping`.
    pub async fn pong(&self) -> Result<bool, SendsayError> {
        let result = self.execute(Payload::builder("pong").build()).await?;
        Ok(result.contains_key("ping"))
    }

    /// List asynchronous requests matching `filter` (at least one criterion).
    pub async fn track_list(&self, filter: Map<String, Value>) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("track.list").field("filter", filter).build())
            .await
    }

    /// Describe one asynchronous request.
    pub async fn track_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("track.get").field("id", id).build())
            .await
    }

    pub async fn sys_settings_get(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("sys.settings.get").build())
            .await
    }

    /// Change account settings; `settings` maps setting names to new values.
    pub async fn sys_settings_set(
        &self,
        settings: Map<String, Value>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sys.settings.set")
                .field("list", settings)
                .build(),
        )
        .await
    }

    /// Read the account key-value storage.
    ///
    /// Always fails with [`SendsayError::NotImplemented`]: the remote action name for this
    /// call is unconfirmed, and sending `sys.settings.set` in its place would write settings.
    // TODO: confirm the storage read action against the current Sendsay API reference.
    pub async fn sys_storage_get(&self) -> Result<ApiResult, SendsayError> {
        Err(SendsayError::NotImplemented {
            operation: "sys.storage.get",
        })
    }

    /// Change the password of the current user.
    pub async fn sys_password_set(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sys.password.set")
                .field("password.old", old_password)
                .field("password.new", new_password)
                .build(),
        )
        .await
    }

    /// Write to support. `email` is the reply address.
    pub async fn sys_message(&self, email: &str, text: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sys.message")
                .field("email", email)
                .field("text", text)
                .build(),
        )
        .await
    }

    /// Account activity log between two `YYYY-MM-DD hh:mm:ss` instants.
    pub async fn sys_log(
        &self,
        from: Option<&str>,
        upto: Option<&str>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sys.log")
                .optional("from", from)
                .optional("upto", upto)
                .build(),
        )
        .await
    }

    /// Check address syntax and deliverability, returning normalized spellings.
    pub async fn email_test(
        &self,
        list: Vec<String>,
        smtp_check: bool,
        timeout_secs: u32,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("email.test")
                .field("smtp.test", u8::from(smtp_check))
                .field("smtp.timeout", timeout_secs)
                .field("list", list)
                .build(),
        )
        .await
    }
}
