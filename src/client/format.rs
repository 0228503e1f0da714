//! Member data formats (`format.*`).

use serde_json::Value;

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload};

impl SendsayClient {
    pub async fn format_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("format.list").build()).await
    }

    /// Create a format, or replace the one named by `id`.
    pub async fn format_set(
        &self,
        obj: Value,
        id: Option<&str>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("format.set")
                .field("obj", obj)
                .optional("id", id)
                .build(),
        )
        .await
    }

    pub async fn format_get(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("format.get").field("id", id).build())
            .await
    }

    pub async fn format_delete(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("format.delete").field("id", id).build())
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::fake::{FakeTransport, fake_client};

    #[tokio::test]
    async fn format_set_without_id_creates() {
        let transport = FakeTransport::ok();
        let client = fake_client(&transport);

        client
            .format_set(json!({"name": "short"}), None)
            .await
            .unwrap();

        let payload = transport.last_payload();
        assert_eq!(payload["action"], json!("format.set"));
        assert_eq!(payload["obj"], json!({"name": "short"}));
        assert!(!payload.contains_key("id"));
    }

    #[tokio::test]
    async fn format_set_with_id_replaces() {
        let transport = FakeTransport::ok();
        let client = fake_client(&transport);

        client
            .format_set(json!({"name": "short"}), Some("f1"))
            .await
            .unwrap();

        assert_eq!(transport.last_payload()["id"], json!("f1"));
    }

    #[tokio::test]
    async fn format_delete_sends_id() {
        let transport = FakeTransport::ok();
        fake_client(&transport).format_delete("f1").await.unwrap();

        let payload = transport.last_payload();
        assert_eq!(payload["action"], json!("format.delete"));
        assert_eq!(payload["id"], json!("f1"));
    }
}
