//! Domain layer: strong types with validation and invariants (no I/O).

mod options;
mod payload;
mod request;
mod response;
mod target;
mod validation;
mod value;

pub use options::{
    AddrType, GroupType, IfExists, MessageFormat, ResultFormat, SendWhen, SequenceGrouping,
    StatTotal, UserStatus,
};
pub use payload::{ACTION_FIELD, Payload, PayloadBuilder};
pub use request::{
    ISSUE_LIST_DEFAULT_FROM, IssueGroup, IssueListOptions, IssueSendOptions, LetterSource,
    MemberSet, Relink, SequenceCreate, SequenceUpdate, StatActivity, StatIssue, StatUni,
    UserUpdate,
};
pub use response::{ApiResult, RemoteErrorEntry};
pub use target::{Addresses, Audience, GroupCleanScope, ImportSource, OneOrMany, StatResult};
pub use validation::ValidationError;
pub use value::{Credentials, Login, Password, Sublogin};
