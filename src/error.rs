//! Error handling for wordlist-forge


use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone)]
pub enum ForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input error: {message}")]
    Input {
        message: String,
        path: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl ForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an input error (missing or unreadable base word source)
    pub fn input(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Input {
            message: message.into(),
            path,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// An interrupted prompt is a clean no-op, bad input paths exit with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 0,
            Self::Input { .. } | Self::Cli { .. } => 2,
            _ => 1,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your profile file or .env", message)
            }
            Self::Input { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Input error{}: {}\n💡 Check the base word file path", path_info, message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and free disk space", path_info, message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the profile JSON syntax", message)
            }
            Self::Interrupted => "👋 Cancelled, nothing was written".to_string(),
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }

}

/// Convert from common error types
impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for ForgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::Interrupted,
            inquire::InquireError::IO(e) => Self::io(e.to_string(), None),
            other => Self::cli(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ForgeError>;



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ForgeError::Interrupted.exit_code(), 0);
        assert_eq!(ForgeError::input("missing", None).exit_code(), 2);
        assert_eq!(ForgeError::io("disk full", None).exit_code(), 1);
    }

    #[test]
    fn test_inquire_interrupt_maps_to_interrupted() {
        let err: ForgeError = inquire::InquireError::OperationInterrupted.into();
        assert!(matches!(err, ForgeError::Interrupted));
        let err: ForgeError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, ForgeError::Interrupted));
    }

    #[test]
    fn test_user_message_includes_path() {
        let err = ForgeError::input("file not found", Some("words.txt".to_string()));
        assert!(err.user_message().contains("words.txt"));
    }
}
