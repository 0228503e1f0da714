//! Sub-users of the account and their access rights (`user.*`, `rights.*`).

use serde_json::Value;

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload, UserStatus, UserUpdate};

impl SendsayClient {
    pub async fn user_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("user.list").build()).await
    }

    /// Create a sub-user; account details are mailed to `email` when given.
    pub async fn user_create(
        &self,
        sublogin: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("user.create")
                .field("sublogin", sublogin)
                .field("password", password)
                .optional("email", email)
                .build(),
        )
        .await
    }

    pub async fn user_delete(&self, sublogin: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("user.delete")
                .field("sublogin", sublogin)
                .build(),
        )
        .await
    }

    pub async fn user_set(
        &self,
        sublogin: &str,
        status: UserStatus,
        update: UserUpdate,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("user.set")
                .field("sublogin", sublogin)
                .field("status", status)
                .optional("email", update.email)
                .optional("password.old", update.old_password)
                .optional("password.new", update.new_password)
                .build(),
        )
        .await
    }

    pub async fn rights_get(&self, sublogin: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("rights.get").field("user", sublogin).build())
            .await
    }

    /// Grant the rights described by `rights` to a sub-user.
    pub async fn rights_set(
        &self,
        sublogin: &str,
        rights: Value,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("rights.set")
                .field("user", sublogin)
                .field("list", rights)
                .build(),
        )
        .await
    }
}
