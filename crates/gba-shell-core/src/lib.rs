// Page shell modules
pub mod config;
pub mod error;
pub mod host;
pub mod input_guard;
pub mod load_trigger;
pub mod shell;
pub mod viewport;

pub mod prelude;

#[cfg(any(test, feature = "testing-utils"))]
pub mod testing_utils;

mod shell_test;

// Re-exports
pub use config::PageConfig;
pub use error::{ConfigError, PageError};
pub use shell::PageShell;
