use crate::config::{FitConfig, LogicalResolution, PageConfig};
use crate::error::PageError;
use crate::host::{PageHost, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Displayed canvas size in CSS pixels. Values are kept fractional and may
/// go negative on tiny viewports; the browser's CSS engine deals with both.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Factor by which the logical resolution is scaled to touch the limiting
/// viewport edge.
pub fn scale_factor(viewport: Viewport, logical: LogicalResolution) -> f64 {
    if viewport.aspect() > logical.aspect() {
        viewport.height / logical.height
    } else {
        viewport.width / logical.width
    }
}

pub fn fit_canvas(viewport: Viewport, control_panel_height: f64, fit: &FitConfig) -> CanvasSize {
    let val = scale_factor(viewport, fit.logical);
    CanvasSize {
        width: fit.logical.width * val - fit.width_margin,
        height: fit.logical.height * val - control_panel_height - fit.height_margin,
    }
}

/// Formats a length the way the page writes it into `style`.
pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Keeps the canvas fitted to the window, one deferred measurement per
/// triggering event.
#[derive(Clone, Debug)]
pub struct ViewportAdapter {
    canvas_selector: String,
    control_panel_selector: String,
    fit: FitConfig,
    delay_ms: u32,
}

impl ViewportAdapter {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            canvas_selector: config.canvas_selector.clone(),
            control_panel_selector: config.control_panel_selector.clone(),
            fit: config.fit,
            delay_ms: config.resize_delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Measures the page and writes the canvas size.
    ///
    /// Returns `Ok(None)` without touching the page when there is no canvas.
    pub fn refit<P: PageHost>(&self, page: &mut P) -> Result<Option<CanvasSize>, PageError> {
        let Some(canvas) = page.find_canvas(&self.canvas_selector) else {
            log::trace!("refit skipped, no `{}` on the page", self.canvas_selector);
            return Ok(None);
        };

        let viewport = page.viewport()?;
        // Intentionally unguarded: a missing control panel aborts the refit.
        let panel_height = page.element_height(&self.control_panel_selector)?;
        let size = fit_canvas(viewport, panel_height, &self.fit);
        page.set_canvas_size(&canvas, size)?;

        log::debug!(
            "canvas fitted to {}x{} for viewport {}x{}",
            size.width,
            size.height,
            viewport.width,
            viewport.height
        );
        Ok(Some(size))
    }

    /// Queues one refit `delay_ms` from now. Earlier pending refits are left
    /// alone; whichever runs last decides the final size.
    pub fn schedule_refit<P, S>(&self, page: &Rc<RefCell<P>>, scheduler: &S)
    where
        P: PageHost + 'static,
        S: Scheduler + ?Sized,
    {
        let adapter = self.clone();
        let page = Rc::clone(page);
        scheduler.defer(
            self.delay_ms,
            Box::new(move || {
                if let Err(e) = adapter.refit(&mut *page.borrow_mut()) {
                    log::warn!("deferred canvas refit failed: {e}");
                }
            }),
        );
    }
}
