//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cleanddd-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Console`: prompts and printed output
//!   - `Filesystem`: report writing
//!   - `CommandRunner`: the external template engine
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandOutcome, CommandRunner, Console, Filesystem};

#[cfg(test)]
pub use output::MockCommandRunner;
