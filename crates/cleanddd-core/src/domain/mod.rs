//! Core domain layer for the CleanDDD toolkit.
//!
//! This module contains pure logic with no I/O: the coaching module table,
//! session aggregation and report rendering on one side, and the initializer's
//! enumerated settings, name normalization and resolved configuration on the
//! other. Console, filesystem and process access happen through the ports in
//! `crate::application`.
//!
//! ## Rules
//!
//! - **No I/O**: No filesystem, console, or process calls
//! - **Immutable results**: `ProjectConfig` has no setters
//! - **Invariants by construction**: `CoachSession` can only grow by one
//!   question per recorded answer

pub mod entities;
pub mod error;
pub mod report;
pub mod text;
pub mod value_objects;

pub use entities::{
    CoachModule, CoachSession, MODULES, ModuleResult, ProjectConfig, ProjectConfigBuilder,
    SessionNote, TemplateToolchain,
};
pub use error::{DomainError, ErrorCategory};
pub use report::render_report;
pub use text::{WRAP_WIDTH, expand_home, heading_lines, wrap_text};
pub use value_objects::{
    Choice, Database, Framework, MessageQueue, normalize_project_name, parse_bool_arg,
};
