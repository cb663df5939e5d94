//! Convenient imports for consumers of gba-shell-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use gba_shell_core::prelude::*;
//! ```

// Handlers
pub use crate::input_guard::InputGuard;
pub use crate::load_trigger::{LoadTrigger, rom_url};
pub use crate::shell::PageShell;
pub use crate::viewport::{CanvasSize, Viewport, ViewportAdapter, css_px, fit_canvas, scale_factor};

// Host seams
pub use crate::host::{PageHost, Scheduler};

// Config and errors
pub use crate::config::{FitConfig, LogicalResolution, PageConfig};
pub use crate::error::{ConfigError, PageError};

// Conditional testing utilities
#[cfg(feature = "testing-utils")]
pub use crate::testing_utils::*;
