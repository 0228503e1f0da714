//! Member groups: static lists and filters (`group.*`).

use serde_json::{Map, Value};

use super::{SendsayClient, SendsayError};
use crate::domain::{AddrType, Addresses, ApiResult, GroupCleanScope, GroupType, OneOrMany, Payload};

impl SendsayClient {
    pub async fn group_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("group.list").build()).await
    }

    /// Create a group. The service picks the id unless `id` is given.
    pub async fn group_create(
        &self,
        name: &str,
        group_type: GroupType,
        id: Option<&str>,
        addr_type: AddrType,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("group.create")
                .field("name", name)
                .field("type", group_type)
                .field("addr_type", addr_type)
                .optional("id", id)
                .build(),
        )
        .await
    }

    /// Remove members from a list group.
    pub async fn group_clean(
        &self,
        id: &str,
        scope: GroupCleanScope,
        sync: bool,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("group.clean")
                .field("id", id)
                .field("sync", sync)
                .with(|b| scope.apply(b))
                .build(),
        )
        .await
    }

    /// Rename a group.
    pub async fn group_set(&self, id: &str, name: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("group.set")
                .field("id", id)
                .field("name", name)
                .build(),
        )
        .await
    }

    pub async fn group_get(
        &self,
        id: OneOrMany<String>,
        with_filter: bool,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("group.get")
                .field("id", id)
                .field("with_filter", with_filter)
                .build(),
        )
        .await
    }

    /// Copy the given members into list group `to`, emptying it first when `clean` is set.
    pub async fn group_snapshot(
        &self,
        from: Addresses,
        to: &str,
        clean: bool,
        sync: bool,
    ) -> Result<ApiResult, SendsayError> {
        let mut target = Map::new();
        target.insert("id".to_owned(), Value::from(to));
        target.insert("clean".to_owned(), Value::Bool(clean));

        let mut source = Map::new();
        source.insert("sync".to_owned(), Value::Bool(sync));
        from.insert_into(&mut source);

        self.execute(
            Payload::builder("group.snapshot")
                .field("to", target)
                .field("from", source)
                .build(),
        )
        .await
    }

    pub async fn group_filter_get(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("group.filter.get").field("id", id).build())
            .await
    }

    /// Replace the filter of a filter group.
    pub async fn group_filter_set(
        &self,
        id: &str,
        filter: Value,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("group.filter.set")
                .field("id", id)
                .field("filter", filter)
                .build(),
        )
        .await
    }

    pub async fn group_delete(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("group.delete").field("id", id).build())
            .await
    }
}
