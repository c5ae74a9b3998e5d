//! External command adapters.

mod recording;
mod system;

pub use recording::{RecordedCall, RecordingCommandRunner};
pub use system::SystemCommandRunner;
