//! Project field rules.
//!
//! Column limits mirror the `projects` table so oversized input is rejected
//! as a validation error instead of surfacing as a database failure.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project title in characters (`VARCHAR(255)`).
pub const MAX_TITLE_LENGTH: usize = 255;

/// Status assigned to every newly created project.
pub const STATUS_ACTIVE: &str = "active";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a project title.
///
/// Only the length is checked. An empty title is accepted: the column is
/// `NOT NULL` but carries no emptiness constraint.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}
