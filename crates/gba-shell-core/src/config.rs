use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const LOGICAL_WIDTH: f64 = 480.0;
pub const LOGICAL_HEIGHT: f64 = 320.0;

/// Space reserved around the canvas, subtracted after scaling.
pub const WIDTH_MARGIN: f64 = 24.0;
pub const HEIGHT_MARGIN: f64 = 18.0;

/// Delay before a refit measures the page, in milliseconds.
pub const RESIZE_DELAY_MS: u32 = 1000;

pub const GUARDED_KEYS: [&str; 5] = ["Space", "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalResolution {
    pub width: f64,
    pub height: f64,
}

impl LogicalResolution {
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for LogicalResolution {
    fn default() -> Self {
        Self {
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FitConfig {
    pub logical: LogicalResolution,
    pub width_margin: f64,
    pub height_margin: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            logical: LogicalResolution::default(),
            width_margin: WIDTH_MARGIN,
            height_margin: HEIGHT_MARGIN,
        }
    }
}

/// Everything the page shell needs to know about the host page.
///
/// JS callers may hand over a partial object; missing fields fall back to
/// the defaults of the stock GBA page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub canvas_selector: String,
    pub control_panel_selector: String,
    pub play_button_id: String,
    pub rom_path: String,
    pub loader_fn: String,
    pub fit: FitConfig,
    pub resize_delay_ms: u32,
    pub guarded_keys: Vec<String>,
    pub bind_play_button: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "canvas".to_owned(),
            control_panel_selector: ".ctrl_div".to_owned(),
            play_button_id: "play_btn".to_owned(),
            rom_path: "piranha.gba".to_owned(),
            loader_fn: "loadRomFromNetwork".to_owned(),
            fit: FitConfig::default(),
            resize_delay_ms: RESIZE_DELAY_MS,
            guarded_keys: GUARDED_KEYS.iter().map(|k| (*k).to_owned()).collect(),
            bind_play_button: false,
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let logical = self.fit.logical;
        if !(logical.width > 0.0 && logical.height > 0.0) {
            return Err(ConfigError::InvalidResolution {
                width: logical.width,
                height: logical.height,
            });
        }
        if self.guarded_keys.is_empty() {
            return Err(ConfigError::NoGuardedKeys);
        }
        for (field, value) in [
            ("canvasSelector", &self.canvas_selector),
            ("controlPanelSelector", &self.control_panel_selector),
            ("playButtonId", &self.play_button_id),
            ("loaderFn", &self.loader_fn),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        Ok(())
    }
}
