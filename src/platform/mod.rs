// Platform capabilities: everything probes read from the host goes through here

pub mod command;
pub mod env;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake;
pub mod fs;
pub mod kind;

// Re-exports for cleaner imports
pub use command::{CommandRunner, SystemCommandRunner};
pub use env::{Environment, SystemEnvironment};
pub use fs::{FileReader, SystemFileReader};
pub use kind::Platform;
