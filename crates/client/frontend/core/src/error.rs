//! Error channel between game modules and the host.

use battle_core::{BattleError, ErrorSeverity};

/// Module lifecycle step that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ModuleStage {
    Startup,
    Frame,
    Input,
}

/// Failure reported by a game module.
///
/// The host decides what to do with it; [`GameShelf`](crate::GameShelf)
/// disables the entry and records the reason.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    #[error("{module} failed to start: {reason}")]
    Startup { module: String, reason: String },

    #[error("{module} failed during a frame: {reason}")]
    Frame { module: String, reason: String },

    #[error("{module} rejected input: {reason}")]
    Input { module: String, reason: String },
}

impl ModuleError {
    pub fn new(stage: ModuleStage, module: impl Into<String>, reason: impl ToString) -> Self {
        let module = module.into();
        let reason = reason.to_string();
        match stage {
            ModuleStage::Startup => Self::Startup { module, reason },
            ModuleStage::Frame => Self::Frame { module, reason },
            ModuleStage::Input => Self::Input { module, reason },
        }
    }

    pub fn stage(&self) -> ModuleStage {
        match self {
            Self::Startup { .. } => ModuleStage::Startup,
            Self::Frame { .. } => ModuleStage::Frame,
            Self::Input { .. } => ModuleStage::Input,
        }
    }

    pub fn module(&self) -> &str {
        match self {
            Self::Startup { module, .. } | Self::Frame { module, .. } | Self::Input { module, .. } => {
                module
            }
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Startup { reason, .. } | Self::Frame { reason, .. } | Self::Input { reason, .. } => {
                reason
            }
        }
    }
}

impl BattleError for ModuleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Startup { .. } => ErrorSeverity::Fatal,
            Self::Frame { .. } => ErrorSeverity::Internal,
            Self::Input { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Startup { .. } => "MODULE_STARTUP",
            Self::Frame { .. } => "MODULE_FRAME",
            Self::Input { .. } => "MODULE_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_round_trips_through_constructor() {
        for stage in [ModuleStage::Startup, ModuleStage::Frame, ModuleStage::Input] {
            let error = ModuleError::new(stage, "Snake", "boom");
            assert_eq!(error.stage(), stage);
            assert_eq!(error.module(), "Snake");
            assert_eq!(error.reason(), "boom");
        }
    }

    #[test]
    fn messages_name_the_module() {
        let error = ModuleError::new(ModuleStage::Startup, "Battle", "roster too small");
        assert_eq!(error.to_string(), "Battle failed to start: roster too small");
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(error.error_code(), "MODULE_STARTUP");
    }
}
