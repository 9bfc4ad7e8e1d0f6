//! Domain error types.
//!
//! These errors represent invariant violations in the domain layer. They are
//! distinct from I/O and parse errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip has no segments
    #[error("trip must have at least one segment")]
    EmptyTrip,
}
