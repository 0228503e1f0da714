//! Issues (sent mailings) and letter drafts (`issue.*`).

use serde_json::{Map, Value};

use super::{SendsayClient, SendsayError};
use crate::domain::{
    ApiResult, IssueGroup, IssueListOptions, IssueSendOptions, LetterSource, OneOrMany, Payload,
    PayloadBuilder, Relink, SendWhen,
};

impl SendsayClient {
    /// Issues sent within a date range, optionally restricted to some groups.
    pub async fn issue_list(&self, options: IssueListOptions) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("issue.list")
                .field("from", options.from)
                .field("group", options.groups)
                .field("format", options.format)
                .optional("upto", options.upto)
                .build(),
        )
        .await
    }

    pub async fn issue_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("issue.get").field("id", id).build())
            .await
    }

    pub async fn issue_draft_get(&self, id: u64) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("issue.draft.get").field("id", id).build())
            .await
    }

    /// Create a draft, or overwrite draft `id`. The stored draft is returned.
    pub async fn issue_draft_set(
        &self,
        obj: Value,
        id: Option<u64>,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("issue.draft.set")
                .field("obj", obj)
                .field("return_fresh_obj", true)
                .optional("id", id)
                .build(),
        )
        .await
    }

    pub async fn issue_draft_delete(&self, ids: OneOrMany<u64>) -> Result<ApiResult, SendsayError> {
        self.execute(Payload::builder("issue.draft.delete").field("id", ids).build())
            .await
    }

    /// Send (or schedule, or store) an issue to `group`.
    ///
    /// The letter is either built from a stored draft or composed inline from `options`.
    pub async fn issue_send(
        &self,
        group: IssueGroup,
        source: LetterSource,
        options: IssueSendOptions,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(issue_send_payload(group, source, options))
            .await
    }
}

fn issue_send_payload(
    group: IssueGroup,
    source: LetterSource,
    options: IssueSendOptions,
) -> Payload {
    let mut letter = Map::new();
    match source {
        LetterSource::Draft(id) => {
            letter.insert("draft.id".to_owned(), Value::from(id));
        }
        LetterSource::Sender(email) => {
            letter.insert("from.email".to_owned(), Value::String(email));
        }
    }
    if let Some(name) = options.sender_name {
        letter.insert("from.name".to_owned(), Value::String(name));
    }
    if let Some(subject) = options.subject {
        letter.insert("subject".to_owned(), Value::String(subject));
    }
    if let Some(text) = options.text {
        let mut message = Map::new();
        message.insert(options.format.as_str().to_owned(), Value::String(text));
        letter.insert("message".to_owned(), Value::Object(message));
    }

    let send_when = options.send_when;
    Payload::builder("issue.send")
        .field("group", group.as_str())
        .field("letter", letter)
        .field("sendwhen", send_when.as_str())
        .optional(
            "later.time",
            match send_when {
                SendWhen::Later(time) => Some(time),
                SendWhen::Now | SendWhen::Save => None,
            },
        )
        .with(|b| apply_relink(b, options.relink))
        .optional("email", options.email)
        .optional("users.list", options.users_list)
        .optional("extra", options.extra)
        .build()
}

fn apply_relink(builder: PayloadBuilder, relink: Relink) -> PayloadBuilder {
    match relink {
        Relink::Disabled => builder.field("relink", 0),
        Relink::Enabled(overrides) => {
            let mut params = Map::new();
            params.insert("link".to_owned(), Value::from(1));
            params.insert("image".to_owned(), Value::from(0));
            params.insert("test".to_owned(), Value::from(1));
            params.extend(overrides);
            builder.field("relink", 1).field("relink.param", params)
        }
    }
}
