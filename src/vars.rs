//! File containing constants

/// Prefix env var name with proper prefix
#[macro_export]
macro_rules! ENV_VAR_PREFIX {
    ($($args:literal),*) => {
        concat!(env!("CARGO_PKG_NAME_UPPERCASE"), "_", $($args),*)
    };
}

/// Set log level from the environ
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Engine to use instead of the detected one
pub const ENV_ENGINE: &str = ENV_VAR_PREFIX!("ENGINE");

/// Engines in order of preference when none is chosen explicitly
pub const KNOWN_ENGINES: [&str; 2] = ["docker", "podman"];

/// Go template that makes the engine print only container names
pub const NAMES_FORMAT: &str = "{{.Names}}";
