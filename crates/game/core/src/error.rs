//! Common error infrastructure for battle-core.
//!
//! Domain errors live next to the concern that raises them but share the
//! [`BattleError`] trait so hosts can classify failures uniformly.
//!
//! Invariant violations (an effect or tween completing twice) are not part of
//! this taxonomy: they are made unrepresentable by the state machine.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the host can fix the condition and call again
/// - **Validation**: invalid input, rejected at the boundary
/// - **Internal**: unexpected inconsistency that deserves investigation
/// - **Fatal**: the session cannot be created or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while validating a combatant roster or drawing from it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster needs at least 2 combatants, found {available}")]
    TooFewCombatants { available: usize },

    #[error("combatant '{name}' must have exactly 4 moves, found {count}")]
    InvalidMoveCount { name: String, count: usize },

    #[error("combatant '{name}' has a max HP of zero")]
    ZeroMaxHp { name: String },

    #[error("combatant name '{name}' appears more than once")]
    DuplicateName { name: String },
}

impl BattleError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewCombatants { .. } => "ROSTER_TOO_FEW_COMBATANTS",
            Self::InvalidMoveCount { .. } => "ROSTER_INVALID_MOVE_COUNT",
            Self::ZeroMaxHp { .. } => "ROSTER_ZERO_MAX_HP",
            Self::DuplicateName { .. } => "ROSTER_DUPLICATE_NAME",
        }
    }
}

/// Errors surfaced to hosts driving an [`Arena`](crate::Arena).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no active session: start a battle before polling or sending input")]
    NoActiveSession,

    #[error("failed to build session: {0}")]
    Roster(#[from] RosterError),
}

impl BattleError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActiveSession => ErrorSeverity::Recoverable,
            Self::Roster(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveSession => "SESSION_NOT_ACTIVE",
            Self::Roster(inner) => inner.error_code(),
        }
    }
}
