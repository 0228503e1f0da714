//! External service authorizations (`authext.*`). Only Google Analytics is supported.

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload};

/// `type` code of a Google Analytics authorization.
const GOOGLE_ANALYTICS: u8 = 8;

impl SendsayClient {
    pub async fn authext_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("authext.list").build())
            .await
    }

    pub async fn authext_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("authext.get").field("id", id).build())
            .await
    }

    pub async fn authext_create(
        &self,
        login: &str,
        token: &str,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("authext.create")
                .field("type", GOOGLE_ANALYTICS)
                .field("login", login)
                .field("token", token)
                .build(),
        )
        .await
    }

    pub async fn authext_set(
        &self,
        id: u64,
        login: Option<&str>,
        token: Option<&str>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("authext.set")
                .field("id", id)
                .field("type", GOOGLE_ANALYTICS)
                .optional("login", login)
                .optional("token", token)
                .build(),
        )
        .await
    }

    pub async fn authext_delete(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("authext.delete").field("id", id).build())
            .await
    }

    /// Analytics properties visible through authorization `id`.
    pub async fn authext_ga_props(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("authext.ga.props").field("id", id).build())
            .await
    }
}
