//! Error types for the MCP Debate Server.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`SessionError`]: Debate session boundary errors
//! - [`McpError`]: MCP protocol errors
//! - [`ConfigError`]: Configuration errors
//!
//! The debate core itself (fallacy detection, response selection) is total
//! and returns no errors; this taxonomy covers the session boundary, the
//! serving layer, and configuration loading.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Debate session error.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Debate session errors.
///
/// These errors occur at the session boundary. A detector or selector call
/// never produces them; they cover calls that arrive in the wrong session
/// state or with input the original interface would refuse to submit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No debate is currently running.
    #[error("No active debate: start one with debate_start")]
    NoActiveSession,

    /// The debate topic is empty or whitespace-only.
    #[error("Empty topic: provide a topic to debate")]
    EmptyTopic,

    /// The submitted argument is empty or whitespace-only.
    #[error("Empty argument: provide a statement to argue")]
    EmptyArgument,
}

/// MCP protocol errors.
///
/// These errors represent failures in MCP serving and result encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum McpError {
    /// A tool response failed to serialize.
    #[error("Response serialization failed: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value could not be parsed.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// Configuration value is outside the accepted range.
    #[error("Value for {var} out of range: {reason}")]
    OutOfRange {
        /// The variable name.
        var: String,
        /// Why the value is out of range.
        reason: String,
    },
}
