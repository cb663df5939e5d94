use crate::config::PageConfig;
use crate::error::ConfigError;
use crate::input_guard::InputGuard;
use crate::load_trigger::LoadTrigger;
use crate::viewport::ViewportAdapter;

/// The three page handlers, built from one validated config.
///
/// They never call each other; the host wires each to its own event.
#[derive(Clone, Debug)]
pub struct PageShell {
    pub viewport: ViewportAdapter,
    pub input: InputGuard,
    pub load: LoadTrigger,
    bind_play_button: bool,
}

impl PageShell {
    pub fn new(config: &PageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            viewport: ViewportAdapter::new(config),
            input: InputGuard::from_config(config),
            load: LoadTrigger::new(config),
            bind_play_button: config.bind_play_button,
        })
    }

    pub fn binds_play_button(&self) -> bool {
        self.bind_play_button
    }
}
