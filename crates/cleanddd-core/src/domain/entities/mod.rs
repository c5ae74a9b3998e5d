pub mod coach_module;
pub mod project_config;
pub mod session;

pub use coach_module::{CoachModule, MODULES};
pub use project_config::{ProjectConfig, ProjectConfigBuilder, TemplateToolchain};
pub use session::{CoachSession, ModuleResult, SessionNote};
