//! Error types for ethcmd.
//!
//! `ParseError` describes why an argument vector was rejected by the grammar
//! layer. `EthcmdError` is the application-level error used by the binary,
//! configuration loading and the transport boundary.

use thiserror::Error;

/// Classification of a grammar rejection.
///
/// Every rejection surfaces the same way to the caller (exit status 1), but the
/// kind is preserved for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownSelector,
    MissingDeviceName,
    DeviceNameTooLong,
    UnknownKeyword,
    MissingValue,
    InvalidValueFormat,
    MissingRequiredKeyword,
    ConflictingKeywords,
    TrailingUnconsumedTokens,
    UnsupportedOption,
}

/// Grammar rejection with enough context for a one-line diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First token does not name any command.
    #[error("unknown option '{0}'")]
    UnknownSelector(String),

    /// The command needs a device and none was given.
    #[error("no device name given")]
    MissingDeviceName,

    /// Device name exceeds the active backend's limit.
    #[error("device name '{name}' is longer than {limit} characters")]
    DeviceNameTooLong { name: String, limit: usize },

    /// Token in keyword position is not part of the active grammar.
    #[error("unknown parameter '{0}'")]
    UnknownKeyword(String),

    /// Input ended before the keyword's value(s).
    #[error("missing value for '{0}'")]
    MissingValue(String),

    /// Value token failed its parser.
    #[error("invalid value '{value}' for '{keyword}': {reason}")]
    InvalidValue {
        keyword: String,
        value: String,
        reason: String,
    },

    /// A mandatory keyword never appeared.
    #[error("missing required parameter '{0}'")]
    MissingRequiredKeyword(String),

    /// Two keywords that cannot be combined.
    #[error("'{keyword}' cannot be combined with '{other}'")]
    ConflictingKeywords { keyword: String, other: String },

    /// Keyword (or mask) given more than once.
    #[error("'{0}' given more than once")]
    DuplicateKeyword(String),

    /// Keyword present without any of the keywords it depends on.
    #[error("'{keyword}' requires one of: {requires}")]
    MissingPrerequisite { keyword: String, requires: String },

    /// Arguments left over after the grammar finished.
    #[error("unexpected argument '{0}'")]
    TrailingTokens(String),

    /// Global option the command or backend does not support.
    #[error("option '{option}' is not supported with '{command}'")]
    UnsupportedOption { option: String, command: String },
}

impl ParseError {
    /// Creates an invalid-value error.
    pub fn invalid(
        keyword: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            keyword: keyword.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a conflict error between two keywords.
    pub fn conflict(keyword: impl Into<String>, other: impl Into<String>) -> Self {
        Self::ConflictingKeywords {
            keyword: keyword.into(),
            other: other.into(),
        }
    }

    /// Returns the kind of this rejection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSelector(_) => ErrorKind::UnknownSelector,
            Self::MissingDeviceName => ErrorKind::MissingDeviceName,
            Self::DeviceNameTooLong { .. } => ErrorKind::DeviceNameTooLong,
            Self::UnknownKeyword(_) => ErrorKind::UnknownKeyword,
            Self::MissingValue(_) => ErrorKind::MissingValue,
            Self::InvalidValue { .. } => ErrorKind::InvalidValueFormat,
            Self::MissingRequiredKeyword(_) => ErrorKind::MissingRequiredKeyword,
            Self::ConflictingKeywords { .. }
            | Self::DuplicateKeyword(_)
            | Self::MissingPrerequisite { .. } => ErrorKind::ConflictingKeywords,
            Self::TrailingTokens(_) => ErrorKind::TrailingUnconsumedTokens,
            Self::UnsupportedOption { .. } => ErrorKind::UnsupportedOption,
        }
    }
}

/// Main error type for ethcmd operations.
#[derive(Error, Debug)]
pub enum EthcmdError {
    /// The argument vector was rejected by the grammar layer.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The transport boundary refused or failed a submitted command.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration errors (invalid config file, unknown backend name, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EthcmdError {
    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse Error",
            Self::Transport(_) => "Transport Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using EthcmdError.
pub type Result<T> = std::result::Result<T, EthcmdError>;
