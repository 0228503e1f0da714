//! Questionnaires, their questions and answer options (`anketa.*`).

use serde_json::Value;

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, OneOrMany, Payload};

const ANKETA_ID: &str = "anketa.id";

impl SendsayClient {
    pub async fn anketa_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("anketa.list").build()).await
    }

    pub async fn anketa_get(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("anketa.get").field("id", id).build())
            .await
    }

    pub async fn anketa_delete(&self, id: &str) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("anketa.delete").field("id", id).build())
            .await
    }

    /// Create a questionnaire, optionally with a fixed `id` or as a copy of `copy_from`.
    pub async fn anketa_create(
        &self,
        name: &str,
        id: Option<&str>,
        copy_from: Option<&str>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.create")
                .field("name", name)
                .optional("id", id)
                .optional("copy_from", copy_from)
                .build(),
        )
        .await
    }

    /// Rename a questionnaire.
    pub async fn anketa_set(&self, id: &str, name: &str) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.set")
                .field("id", id)
                .field("name", name)
                .build(),
        )
        .await
    }

    /// Add questions described by `questions` to questionnaire `anketa`.
    pub async fn anketa_quest_add(
        &self,
        anketa: &str,
        questions: Value,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.add")
                .field(ANKETA_ID, anketa)
                .field("obj", questions)
                .build(),
        )
        .await
    }

    pub async fn anketa_quest_set(
        &self,
        anketa: &str,
        questions: Value,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.set")
                .field(ANKETA_ID, anketa)
                .field("obj", questions)
                .build(),
        )
        .await
    }

    pub async fn anketa_quest_delete(
        &self,
        anketa: &str,
        questions: OneOrMany<String>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.delete")
                .field(ANKETA_ID, anketa)
                .field("id", questions)
                .build(),
        )
        .await
    }

    /// Reorder questions; `order` lists question ids in the new order.
    pub async fn anketa_quest_order(
        &self,
        anketa: &str,
        order: Vec<String>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.order")
                .field(ANKETA_ID, anketa)
                .field("order", order)
                .build(),
        )
        .await
    }

    /// Reorder the answer options of one question.
    pub async fn anketa_quest_response_order(
        &self,
        anketa: &str,
        question: &str,
        order: Vec<String>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.response.order")
                .field(ANKETA_ID, anketa)
                .field("id", question)
                .field("order", order)
                .build(),
        )
        .await
    }

    pub async fn anketa_quest_response_delete(
        &self,
        anketa: &str,
        question: &str,
        answer: &str,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("anketa.quest.response.delete")
                .field(ANKETA_ID, anketa)
                .field("quest.id", question)
                .field("id", answer)
                .build(),
        )
        .await
    }
}
