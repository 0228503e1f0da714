//! Subscribers (`member.*`) and the account data-model variants of `member.set`.

use serde_json::json;

use super::{BoxFuture, SendsayClient, SendsayError};
use crate::domain::{AddrType, ApiResult, Audience, IfExists, ImportSource, MemberSet, Payload};

/// How an account stores subscriber data; decides the shape of `member.set`.
///
/// Both variants take the same [`MemberSet`] arguments. Pick the one matching the account
/// schema and pass it to [`SendsayClient::member_set`].
pub trait MemberDataModel: Send + Sync {
    fn member_set<'a>(
        &'a self,
        client: &'a SendsayClient,
        request: MemberSet,
    ) -> BoxFuture<'a, Result<ApiResult, SendsayError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Legacy questionnaire schema: data goes under `obj` as `anketa -> question -> answer`.
pub struct QuestionnaireAnswers;

impl QuestionnaireAnswers {
    fn payload(request: MemberSet) -> Payload {
        let with_data = request.data.is_some();
        Payload::builder("member.set")
            .field("addr_type", request.addr_type)
            .field("email", request.email)
            .field("if_exists", request.if_exists)
            .field("newbie.confirm", request.confirm)
            .optional("obj", request.data)
            .optional("return_fresh_obj", with_data.then_some(true))
            .optional("newbie.letter.confirm", request.template_confirm)
            .optional("newbie.letter.no-confirm", request.template_no_confirm)
            .build()
    }
}

impl MemberDataModel for QuestionnaireAnswers {
    fn member_set<'a>(
        &'a self,
        client: &'a SendsayClient,
        request: MemberSet,
    ) -> BoxFuture<'a, Result<ApiResult, SendsayError>> {
        Box::pin(async move { client.execute(Self::payload(request)).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Flat data-keys schema.
///
/// Not available yet: every call fails with [`SendsayError::NotImplemented`].
pub struct DataKeys;

impl MemberDataModel for DataKeys {
    fn member_set<'a>(
        &'a self,
        _client: &'a SendsayClient,
        _request: MemberSet,
    ) -> BoxFuture<'a, Result<ApiResult, SendsayError>> {
        Box::pin(async {
            Err(SendsayError::NotImplemented {
                operation: "member.set",
            })
        })
    }
}

impl SendsayClient {
    /// Create or update a subscriber using the account's data model.
    pub async fn member_set<M>(
        &self,
        model: &M,
        request: MemberSet,
    ) -> Result<ApiResult, SendsayError>
    where
        M: MemberDataModel + ?Sized,
    {
        model.member_set(self, request).await
    }

    pub async fn member_get(&self, email: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("member.get").field("email", email).build())
            .await
    }

    /// Delete a whole group of members or an explicit address list.
    ///
    /// With `sync = false` the service answers with a tracking id instead of waiting.
    pub async fn member_delete(
        &self,
        audience: Audience,
        sync: bool,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("member.delete")
                .field("sync", sync)
                .with(|b| audience.apply(b))
                .build(),
        )
        .await
    }

    /// Bulk import. Imported members are added to `group` when given.
    pub async fn member_import(
        &self,
        source: ImportSource,
        group: Option<&str>,
        if_exists: IfExists,
        addr_type: AddrType,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("member.import")
                .field("addr_type", addr_type)
                .field("if_exists", if_exists)
                .field("charset", "utf-8")
                .field("users.list", source)
                .optional("auto_group", group.map(|id| json!({ "id": id })))
                .field("clean_group", 0)
                .build(),
        )
        .await
    }
}
