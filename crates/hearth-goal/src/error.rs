// error.rs — Error types for the goal store.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during goal store operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// The requested goal was not found.
    #[error("goal not found: {0}")]
    NotFound(Uuid),

    /// A creation payload was missing or had invalid required fields.
    #[error("invalid goal: missing or invalid fields: {}", fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// `complete` was called on a goal that is already completed.
    /// The lifecycle has no Completed → Completed edge; a second
    /// completion record would corrupt the history.
    #[error("goal already completed: {0}")]
    AlreadyCompleted(Uuid),
}
