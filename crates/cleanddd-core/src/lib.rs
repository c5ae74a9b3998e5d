//! CleanDDD Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers behind the
//! `cleanddd` command: an interactive CleanDDD coach and an initializer that
//! drives the NetCorePal .NET project template.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cleanddd-cli (CLI)            │
//! │   (clap commands, config, logging)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (CoachService, InitService)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: Console, Filesystem, Runner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cleanddd-adapters (Infrastructure)   │
//! │ (StdConsole, LocalFilesystem, System…)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (CoachModule, CoachSession, ProjectConfig)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cleanddd_core::application::{InitRequest, InitService};
//!
//! let service = InitService::new(console, runner);
//! let outcome = service.run(&InitRequest::default(), &std::env::current_dir()?)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CoachService, InitOutcome, InitRequest, InitService, PromptDefaults,
        ports::{CommandOutcome, CommandRunner, Console, Filesystem},
    };
    pub use crate::domain::{
        Choice, CoachModule, CoachSession, Database, Framework, MODULES, MessageQueue,
        ProjectConfig, TemplateToolchain,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
