//! HTTP route modules
//!
//! Route handlers organized by resource. Handlers return the bare JSON
//! entity on success; failures map through
//! [`crate::utils::error::BackendError`] or are produced by the gates.

pub mod auth;
pub mod cow_censuses;
pub mod dung_censuses;
pub mod forage_quality_censuses;
pub mod forage_quantity_censuses;
pub mod health;
pub mod herds;
pub mod memberships;
pub mod plots;
pub mod sync;
pub mod teams;
pub mod users;

use serde::Serialize;

/// Body returned by delete endpoints
#[derive(Debug, Serialize)]
pub struct DeletionMessage {
    /// Confirmation message naming the deleted document
    pub message: String,
}

impl DeletionMessage {
    /// Confirmation for a successful deletion
    pub fn new(id: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Successfully deleted document with id: {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_message_names_the_id() {
        let message = DeletionMessage::new("abc-123");
        assert_eq!(
            message.message,
            "Successfully deleted document with id: abc-123"
        );
    }
}
