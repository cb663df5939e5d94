use crate::config::PageConfig;
use crate::error::PageError;
use crate::host::PageHost;

/// ROM address relative to the page. Plain concatenation, so a page URL
/// without a trailing slash yields `.../indexpiranha.gba` just like the
/// stock page does.
pub fn rom_url(page_url: &str, rom_path: &str) -> String {
    format!("{page_url}{rom_path}")
}

/// Starts the ROM download and retires the play button.
#[derive(Clone, Debug)]
pub struct LoadTrigger {
    rom_path: String,
    loader_fn: String,
    play_button_id: String,
}

impl LoadTrigger {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            rom_path: config.rom_path.clone(),
            loader_fn: config.loader_fn.clone(),
            play_button_id: config.play_button_id.clone(),
        }
    }

    pub fn play_button_id(&self) -> &str {
        &self.play_button_id
    }

    /// Calls the loader once, then removes the play button.
    ///
    /// Nothing here is validated up front: a missing loader stops before the
    /// button is touched, and a missing button is reported only after the
    /// loader has already been called. Whatever the loader does after the
    /// call returns is its own business.
    pub fn trigger<P: PageHost>(&self, page: &mut P) -> Result<String, PageError> {
        let url = rom_url(&page.page_url()?, &self.rom_path);
        log::info!("loading ROM from {url}");
        page.call_loader(&self.loader_fn, &url)?;
        page.remove_element_by_id(&self.play_button_id)?;
        Ok(url)
    }
}
