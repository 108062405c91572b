//! Domain-level error type used across the engine.
//!
//! This error type is presentation-agnostic. Callers embedding the
//! engine should map `DomainError` into their own surface errors; the
//! [`ValidationKind`] reason code is stable and suitable for that
//! mapping (e.g. telling a recoverable illegal move apart from a
//! broken precondition).

use thiserror::Error;

/// Stable reason codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Dealing from a deck that is not exactly 33 cards.
    DeckSize,
    /// Acting player does not hold the named card.
    CardNotInHand,
    /// Hand holds lead-aspect cards but an off-aspect card was played.
    MustFollowLead,
    /// The non-active player attempted to act.
    OutOfTurn,
    /// Operation is not valid in the current phase.
    PhaseMismatch,
    /// Resolving a trick with fewer than two cards.
    IncompleteTrick,
    /// Malformed card token.
    ParseCard,
    /// Catch-all for violated internal invariants.
    Other,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation. State is never mutated
    /// when this is returned.
    #[error("validation error ({kind:?}): {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation {
            kind: ValidationKind::Other,
            detail: detail.into(),
        }
    }

    /// Reason code carried by this error.
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::Validation { kind, .. } => *kind,
        }
    }
}
