//! Documented option values. The remote service validates them; these enums only spell them.

use serde_json::Value;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Value as sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_owned())
            }
        }
    };
}

wire_enum! {
    /// Subscriber address kind (`addr_type`).
    #[derive(Default)]
    pub enum AddrType {
        #[default]
        Email => "email",
        Msisdn => "msisdn",
    }
}

wire_enum! {
    /// What to do when a subscriber already exists (`if_exists`).
    #[derive(Default)]
    pub enum IfExists {
        #[default]
        Overwrite => "overwrite",
        Update => "update",
        Ignore => "ignore",
        Error => "error",
    }
}

wire_enum! {
    /// Group kind: a static member list or a dynamic filter.
    #[derive(Default)]
    pub enum GroupType {
        #[default]
        List => "list",
        Filter => "filter",
    }
}

wire_enum! {
    /// File format of a saved or mailed statistics report (`result.format`).
    #[derive(Default)]
    pub enum ResultFormat {
        #[default]
        Csv => "csv",
        Xlsx => "xlsx",
    }
}

wire_enum! {
    /// Totals row in `stat.issue` (`total`).
    #[derive(Default)]
    pub enum StatTotal {
        /// No totals.
        #[default]
        None => "none",
        /// Rows plus totals.
        Yes => "yes",
        /// Totals only.
        Only => "only",
    }
}

wire_enum! {
    /// Grouping of `sequence.member.list` results (`groupby`).
    pub enum SequenceGrouping {
        Member => "member",
        Step => "step",
    }
}

wire_enum! {
    /// Body format of a letter sent through `issue.send`.
    #[derive(Default)]
    pub enum MessageFormat {
        #[default]
        Html => "html",
        Text => "text",
        Sms => "sms",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Account state set through `user.set` (`status`).
pub enum UserStatus {
    /// Force a password change on next login (`-1`).
    MustChangePassword,
    /// Active (`0`).
    Active,
    /// Blocked (`1`).
    Blocked,
}

impl UserStatus {
    pub fn code(self) -> i8 {
        match self {
            Self::MustChangePassword => -1,
            Self::Active => 0,
            Self::Blocked => 1,
        }
    }
}

impl From<UserStatus> for Value {
    fn from(value: UserStatus) -> Self {
        Value::from(value.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// When `issue.send` releases the issue (`sendwhen`).
pub enum SendWhen {
    #[default]
    Now,
    /// Keep the issue stored without sending.
    Save,
    /// Send at the given time (`later.time`, `YYYY-MM-DD hh:mm:ss`).
    Later(String),
}

impl SendWhen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Save => "save",
            Self::Later(_) => "later",
        }
    }
}
