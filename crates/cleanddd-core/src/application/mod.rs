//! Application layer for CleanDDD.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CoachService, InitService, Prompter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences prompts, tool calls and writes; the rules
//! themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CoachService, InitOutcome, InitRequest, InitService, Prompter, PromptDefaults,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutcome, CommandRunner, Console, Filesystem};

pub use error::ApplicationError;
