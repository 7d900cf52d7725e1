//! Errors shared by the garment handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::AIError;

/// Errors that can occur while producing dialogue or analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialogueError {
    /// The request carried unusable garment data.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The language-model collaborator failed.
    #[error("{0}")]
    Collaborator(#[from] AIError),
}
