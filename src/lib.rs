//! Typed Rust client for the Sendsay marketing automation HTTP API.
//!
//! The crate is split the usual way: a domain layer of strong types, a transport layer for
//! wire-format quirks (single `request` form field, `REDIRECT` hops, `errors` envelopes), and
//! a client layer exposing one async method per remote action.
//!
//! ```rust,no_run
//! use sendsay::{Credentials, MemberSet, QuestionnaireAnswers, SendsayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendsay::SendsayError> {
//!     let client = SendsayClient::new(Credentials::new("login", "", "password")?);
//!     assert!(client.pong().await?);
//!     let request = MemberSet::new("new@example.com");
//!     let _member = client.member_set(&QuestionnaireAnswers, request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BadResponseReason, DataKeys, MemberDataModel, QuestionnaireAnswers, RemoteErrorDetail,
    SendsayClient, SendsayClientBuilder, SendsayError,
};
pub use domain::{
    AddrType, Addresses, ApiResult, Audience, Credentials, GroupCleanScope, GroupType, IfExists,
    ImportSource, IssueGroup, IssueListOptions, IssueSendOptions, LetterSource, MemberSet,
    MessageFormat, OneOrMany, Payload, Relink, ResultFormat, SendWhen, SequenceCreate,
    SequenceGrouping, SequenceUpdate, StatActivity, StatIssue, StatResult, StatTotal, StatUni,
    UserStatus, UserUpdate, ValidationError,
};
