//! Application services - use case orchestration.
//!
//! Services coordinate domain objects and ports to fulfil the two
//! interactive workflows. They hold boxed port implementations so the CLI
//! can inject real adapters and tests can inject doubles.

pub mod coach_service;
pub mod init_service;
pub mod prompter;

pub use coach_service::{CoachService, DEFAULT_NOTES_PATH, parse_selection, selected_modules};
pub use init_service::{InitOutcome, InitRequest, InitService, PromptDefaults};
pub use prompter::Prompter;
