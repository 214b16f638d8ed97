use serde::{Deserialize, Serialize};

/// Loan status of a single catalog book
///
/// The borrower is carried inside the `CheckedOut` variant as a member id,
/// so a book can never be marked unavailable without a recorded borrower,
/// or the other way around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookStatus {
    /// Book is on the shelf and can be borrowed
    #[default]
    Available,
    /// Book is checked out by the member with this id
    CheckedOut(String),
}

impl BookStatus {
    /// Get a human-readable description of the current status
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Available => "available for checkout".to_string(),
            Self::CheckedOut(member_id) => format!("checked out by member {member_id}"),
        }
    }

    /// Whether this status permits a checkout
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// The id of the member currently holding the book, if any
    #[must_use]
    pub fn borrower(&self) -> Option<&str> {
        match self {
            Self::Available => None,
            Self::CheckedOut(member_id) => Some(member_id),
        }
    }
}
