use serde_json::{Map, Value};

use crate::domain::options::{AddrType, IfExists, MessageFormat, ResultFormat, SendWhen, StatTotal};
use crate::domain::target::StatResult;

/// Earliest `from` date used by `issue.list` when no filter is given.
pub const ISSUE_LIST_DEFAULT_FROM: &str = "1900-01-01";

#[derive(Debug, Clone, PartialEq, Default)]
/// Arguments shared by both `member.set` data models.
pub struct MemberSet {
    pub email: String,
    /// Subscriber data in the shape the account's data model expects.
    pub data: Option<Value>,
    /// Require the subscriber to confirm the address (`newbie.confirm`).
    pub confirm: bool,
    /// Letter template sent when confirmation is required.
    pub template_confirm: Option<u64>,
    /// Letter template sent when no confirmation is required.
    pub template_no_confirm: Option<u64>,
    pub if_exists: IfExists,
    pub addr_type: AddrType,
}

impl MemberSet {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueListOptions {
    /// Start date, `YYYY-MM-DD`.
    pub from: String,
    /// End date, `YYYY-MM-DD`.
    pub upto: Option<String>,
    pub groups: Vec<String>,
    pub format: String,
}

impl Default for IssueListOptions {
    fn default() -> Self {
        Self {
            from: ISSUE_LIST_DEFAULT_FROM.to_owned(),
            upto: None,
            groups: Vec::new(),
            format: "email".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Who receives an issue (`group`).
pub enum IssueGroup {
    /// Members of a group.
    Group(String),
    /// Express issue (`masssending`).
    MassSending,
    /// Transactional letter (`personal`).
    Personal,
}

impl IssueGroup {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Group(id) => id,
            Self::MassSending => "masssending",
            Self::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Origin of the letter body.
pub enum LetterSource {
    /// Build the letter from a stored draft (`letter.draft.id`).
    Draft(u64),
    /// Compose the letter inline from this sender address (`letter.from.email`).
    Sender(String),
}

#[derive(Debug, Clone, PartialEq)]
/// Link rewriting for click tracking (`relink`, `relink.param`).
pub enum Relink {
    Disabled,
    /// Enabled with overrides on top of `{link: 1, image: 0, test: 1}`.
    Enabled(Map<String, Value>),
}

impl Default for Relink {
    fn default() -> Self {
        Self::Enabled(Map::new())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueSendOptions {
    /// Sender display name (`letter.from.name`).
    pub sender_name: Option<String>,
    pub subject: Option<String>,
    /// Letter body, placed under `letter.message.<format>`.
    pub text: Option<String>,
    pub format: MessageFormat,
    pub send_when: SendWhen,
    /// Recipient address for `personal` issues.
    pub email: Option<String>,
    pub users_list: Option<Value>,
    pub relink: Relink,
    /// Extra data available to the letter template.
    pub extra: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq)]
/// `stat.activity` arguments.
pub struct StatActivity {
    /// Filter keys (`gid`, `from`, `to`, `with_read`, ...) merged into the top level.
    pub filter: Map<String, Value>,
    pub result: StatResult,
    pub format: ResultFormat,
    pub page_size: u32,
    pub page: u32,
}

impl Default for StatActivity {
    fn default() -> Self {
        Self {
            filter: Map::new(),
            result: StatResult::Save,
            format: ResultFormat::Csv,
            page_size: 20,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `stat.issue` arguments.
pub struct StatIssue {
    pub from: Option<String>,
    pub upto: Option<String>,
    pub groups: Vec<String>,
    /// Time bucket, e.g. `YM`.
    pub group_by: String,
    pub total: StatTotal,
    /// Include groups without a single issue.
    pub with_empty: bool,
    pub result: StatResult,
    pub format: ResultFormat,
}

impl Default for StatIssue {
    fn default() -> Self {
        Self {
            from: None,
            upto: None,
            groups: Vec::new(),
            group_by: "YM".to_owned(),
            total: StatTotal::None,
            with_empty: false,
            result: StatResult::Save,
            format: ResultFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// `stat.uni` arguments.
pub struct StatUni {
    pub select: Vec<Value>,
    pub filter: Vec<Value>,
    pub order: Vec<Value>,
    pub result: StatResult,
    pub format: ResultFormat,
    pub skip: u64,
    /// Row limit (`first`).
    pub count: Option<u64>,
}

impl StatUni {
    pub fn new(select: Vec<Value>) -> Self {
        Self {
            select,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceCreate {
    pub name: String,
    /// A member passes the sequence at most once.
    pub only_once: bool,
    /// Closed for new members.
    pub closed: bool,
    /// Resume members who finished when new steps are appended.
    pub resume_on_growing: bool,
    pub paused: bool,
}

impl SequenceCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Partial update for `sequence.set`; unset fields are left untouched remotely.
pub struct SequenceUpdate {
    pub name: Option<String>,
    pub only_once: Option<bool>,
    pub closed: Option<bool>,
    pub resume_on_growing: Option<bool>,
    pub paused: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Optional parts of `user.set`.
pub struct UserUpdate {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    /// Where to mail the account details.
    pub email: Option<String>,
}
