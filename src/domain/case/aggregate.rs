//! Case aggregate entity.
//!
//! A case is one user's legal-intake conversation plus its eventual solution
//! document. Cases own their messages by id reference; message records are
//! managed by the conversation module.
//!
//! # Invariants
//!
//! - `title` is 1-200 characters after trimming
//! - `solution` is `Some` if and only if `status == Completed`
//! - A `Completed` case accepts no further mutation

use serde::{Deserialize, Serialize};

use super::{CaseError, CaseStatus};
use crate::domain::foundation::{CaseId, Timestamp, UserId};

/// Maximum length for a case title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Minimum length for the initial problem description.
pub const MIN_INITIAL_MESSAGE_LENGTH: usize = 10;

/// Case aggregate - a legal-intake conversation and its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier for this case.
    id: CaseId,

    /// User who owns this case.
    user_id: UserId,

    /// Case title.
    title: String,

    /// Current lifecycle status.
    status: CaseStatus,

    /// The generated solution document, present only once completed.
    solution: Option<String>,

    /// When the case was created.
    created_at: Timestamp,

    /// When the case was last updated.
    updated_at: Timestamp,
}

impl Case {
    /// Create a new active case with no solution.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or longer than 200 chars
    pub fn new(id: CaseId, user_id: UserId, title: String) -> Result<Self, CaseError> {
        Self::validate_title(&title)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            title,
            status: CaseStatus::Active,
            solution: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a case from persistence (no validation).
    pub fn reconstitute(
        id: CaseId,
        user_id: UserId,
        title: String,
        status: CaseStatus,
        solution: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            status,
            solution,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the case ID.
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the case title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current status.
    pub fn status(&self) -> CaseStatus {
        self.status
    }

    /// Returns the solution document, if the case is completed.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Returns when the case was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the case was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this case.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the case still accepts conversation messages.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the case is completed
    pub fn ensure_accepts_messages(&self) -> Result<(), CaseError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(CaseError::invalid_state(
                "Cannot add messages to a completed case",
            ))
        }
    }

    /// Validates that the case can still run intake operations
    /// (follow-up or solution generation).
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the case is completed
    pub fn ensure_active(&self) -> Result<(), CaseError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(CaseError::invalid_state("Case is already completed"))
        }
    }

    /// Store the generated solution and transition to `Completed`.
    ///
    /// The status change and the solution assignment happen together so the
    /// `solution ⇔ completed` invariant can never be observed broken.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the case is already completed
    /// - `ValidationFailed` if the solution text is empty
    pub fn complete(&mut self, solution: String) -> Result<(), CaseError> {
        if !self.status.can_transition_to(&CaseStatus::Completed) {
            return Err(CaseError::invalid_state("Case is already completed"));
        }
        if solution.trim().is_empty() {
            return Err(CaseError::validation("solution", "Solution cannot be empty"));
        }

        self.solution = Some(solution);
        self.status = CaseStatus::Completed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record message activity by bumping the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Validates a prospective title without constructing a case.
    pub fn validate_title(title: &str) -> Result<(), CaseError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(CaseError::validation("title", "Title is required"));
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(CaseError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }
}
