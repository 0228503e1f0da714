//! Automated letter sequences and their participants (`sequence.*`).

use serde_json::Value;

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Audience, Payload, SequenceCreate, SequenceGrouping, SequenceUpdate};

impl SendsayClient {
    pub async fn sequence_list(&self) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("sequence.list").build())
            .await
    }

    pub async fn sequence_create(
        &self,
        request: SequenceCreate,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.create")
                .field("name", request.name)
                .field("onlyonce", request.only_once)
                // Key spelled as the remote API expects it.
                .field("parrallel", 0)
                .field("closed", request.closed)
                .field("resume_on_growing", request.resume_on_growing)
                .field("pause", request.paused)
                .build(),
        )
        .await
    }

    pub async fn sequence_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("sequence.get").field("id", id).build())
            .await
    }

    /// Change the given properties; unset fields keep their remote value.
    pub async fn sequence_set(
        &self,
        id: u64,
        update: SequenceUpdate,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.set")
                .field("id", id)
                .optional("name", update.name)
                .optional("pause", update.paused)
                .optional("closed", update.closed)
                .optional("onlyonce", update.only_once)
                .optional("resume_on_growing", update.resume_on_growing)
                .build(),
        )
        .await
    }

    pub async fn sequence_delete(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("sequence.delete").field("id", id).build())
            .await
    }

    pub async fn sequence_steps_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.steps.get")
                .field("id", id)
                .build(),
        )
        .await
    }

    /// Replace every step of the sequence with `steps`.
    pub async fn sequence_steps_set(
        &self,
        id: u64,
        steps: Vec<Value>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.steps.set")
                .field("id", id)
                .field("list", steps)
                .build(),
        )
        .await
    }

    pub async fn sequence_stats(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("sequence.stats").field("id", id).build())
            .await
    }

    /// Participants of a sequence, optionally grouped and limited to some steps.
    pub async fn sequence_member_list(
        &self,
        id: u64,
        group_by: Option<SequenceGrouping>,
        steps: Option<Vec<u64>>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.member.list")
                .field("id", id)
                .optional("groupby", group_by)
                .optional("steps", steps)
                .build(),
        )
        .await
    }

    pub async fn sequence_member_start(
        &self,
        id: u64,
        members: Audience,
    ) -> Result<ApiResult, SendsayError> {
        self.sequence_member_action("sequence.member.start", id, members)
            .await
    }

    pub async fn sequence_member_pause(
        &self,
        id: u64,
        members: Audience,
    ) -> Result<ApiResult, SendsayError> {
        self.sequence_member_action("sequence.member.pause", id, members)
            .await
    }

    pub async fn sequence_member_resume(
        &self,
        id: u64,
        members: Audience,
    ) -> Result<ApiResult, SendsayError> {
        self.sequence_member_action("sequence.member.resume", id, members)
            .await
    }

    pub async fn sequence_member_stop(
        &self,
        id: u64,
        members: Audience,
    ) -> Result<ApiResult, SendsayError> {
        self.sequence_member_action("sequence.member.stop", id, members)
            .await
    }

    /// Sequences the member takes part in, or the state in sequence `id` only.
    pub async fn sequence_member_membership(
        &self,
        email: &str,
        id: Option<u64>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("sequence.member.membership")
                .field("email", email)
                .optional("id", id)
                .build(),
        )
        .await
    }

    async fn sequence_member_action(
        &self,
        action: &'static str,
        id: u64,
        members: Audience,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder(action)
                .field("id", id)
                .with(|b| members.apply(b))
                .build(),
        )
        .await
    }
}
