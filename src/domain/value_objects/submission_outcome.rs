use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one remote "create booking" call.
///
/// `Rejected` and `Unreachable` are handled identically by the retry policy:
/// both keep the record queued for a later pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The remote durably registered the booking.
    Accepted,
    /// The remote explicitly declined the booking.
    Rejected,
    /// The remote could not be reached (transport failure or timeout).
    Unreachable,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted => "accepted",
            SubmissionOutcome::Rejected => "rejected",
            SubmissionOutcome::Unreachable => "unreachable",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
