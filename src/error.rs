//! Errors returned by engine probes

use thiserror::Error;

/// Listing output could not be turned into container names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("engine output is not valid UTF-8")]
    NotUtf8,

    #[error("invalid container name {token:?} on line {line}")]
    InvalidName { line: usize, token: String },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// Engine executable could not be started at all
    #[error("could not execute {command:?}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine ran but did not succeed, usually the daemon is unreachable
    #[error("command {command:?} failed with code {code}: {stderr}")]
    Status {
        command: String,
        code: u8,
        stderr: String,
    },

    #[error("could not parse output of {command:?}")]
    Parse {
        command: String,
        #[source]
        source: ParseError,
    },
}

impl ProbeError {
    /// Full command line of the engine invocation that failed
    pub fn command(&self) -> &str {
        match self {
            Self::Launch { command, .. }
            | Self::Status { command, .. }
            | Self::Parse { command, .. } => command,
        }
    }
}

/// Engine chosen by the user cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine {0:?} not found in PATH or filesystem")]
    NotFound(String),

    #[error("unknown engine {0:?}, supported are docker and podman")]
    Unknown(String),
}
