//! Command handlers, one module per subcommand.
//!
//! Handlers wire adapters into core services and translate outcomes; no
//! business logic lives here.

pub mod coach;
pub mod completions;
pub mod config;
pub mod init;
