//! Probe a container engine (docker or podman) through its command line
//!
//! ```no_run
//! use conprobe::Engine;
//!
//! let engine = Engine::find_available_engine().expect("no container engine in PATH");
//! if engine.is_available() {
//!     let exists = engine.container_exists("my_container").unwrap();
//!     println!("my_container exists: {exists}");
//! }
//! ```

pub mod command_ext;
pub mod engine;
pub mod error;
pub mod vars;


pub use engine::{ContainerRecord, Engine, EngineKind};
pub use error::{EngineError, ParseError, ProbeError};
