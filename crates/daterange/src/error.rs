use crate::types::Date;
use thiserror::Error as ThisError;

///
/// Error
///
/// Both variants indicate a caller or configuration defect, never a transient
/// condition. They propagate unchanged; nothing in this crate maps an unknown
/// kind to a default range or repairs a malformed interval.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("unknown date range kind '{name}'")]
    UnknownRangeKind { name: String },

    #[error("invalid interval: lower bound {from} is not before upper bound {to}")]
    InvalidInterval { from: Date, to: Date },
}

impl Error {
    pub(crate) fn unknown_range_kind(name: impl Into<String>) -> Self {
        Self::UnknownRangeKind { name: name.into() }
    }
}
