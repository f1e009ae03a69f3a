//! Error types for omni-cli

use crate::cli;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad or missing command-line arguments
    #[error("{message}")]
    Usage {
        message: String,
        /// Help text printed after the message
        help: String,
    },

    /// Error from omni-core
    #[error(transparent)]
    Core(#[from] omni_core::Error),

    /// Error from omni-exec
    #[error(transparent)]
    Exec(#[from] omni_exec::ExecError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Usage error for `init`, shown with the init help.
    pub fn init_usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            help: cli::init_help(),
        }
    }

    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Help text to print after the error message, if any.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::Usage { help, .. } => Some(help.clone()),
            Self::Core(omni_core::Error::UnknownTarget { .. }) => Some(cli::init_help()),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec(e) if e.is_not_found() => 127,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omni_exec::ExecError;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
        assert_eq!(error.exit_code(), 1);
        assert!(error.help().is_none());
    }

    #[test]
    fn test_unknown_target_shows_init_help() {
        let error = CliError::from(omni_core::Error::UnknownTarget {
            value: "vim".into(),
        });
        assert_eq!(error.exit_code(), 1);
        assert!(error.help().unwrap().contains("--ai <target>"));
    }

    #[test]
    fn test_missing_interpreter_exits_127() {
        let error = CliError::from(ExecError::InterpreterNotFound {
            tried: vec!["python3".into()],
        });
        assert_eq!(error.exit_code(), 127);
    }

    #[test]
    fn test_spawn_failure_exits_1() {
        let error = CliError::from(ExecError::Spawn {
            program: "python3".into(),
            source: std::io::Error::other("permission denied"),
        });
        assert_eq!(error.exit_code(), 1);
    }
}
