//! Infrastructure adapters for CleanDDD.
//!
//! This crate implements the ports defined in `cleanddd-core::application::ports`.
//! It contains all terminal, filesystem and process I/O.

pub mod console;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use console::{ScriptedConsole, StdConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, SystemCommandRunner};
