use crate::config::PageConfig;
use std::collections::HashSet;

/// Keeps the page from scrolling when the game's keys are pressed.
#[derive(Clone, Debug)]
pub struct InputGuard {
    codes: HashSet<String>,
}

impl InputGuard {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.guarded_keys.iter().cloned())
    }

    /// Exact, case-sensitive match on `KeyboardEvent.code`.
    pub fn should_suppress(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Runs `prevent_default` for guarded codes and returns whether it did.
    pub fn handle(&self, code: &str, prevent_default: impl FnOnce()) -> bool {
        if !self.should_suppress(code) {
            return false;
        }
        log::trace!("suppressing default action for {code}");
        prevent_default();
        true
    }
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}
