use crate::error::PageError;
use crate::viewport::{CanvasSize, Viewport};

/// The slice of the browser page the shell reads and writes.
///
/// Implemented over the real DOM by the wasm crate and by `FakePage` in tests.
pub trait PageHost {
    type Canvas;

    /// First element matching `selector`, if any. Absence is not an error.
    fn find_canvas(&self, selector: &str) -> Option<Self::Canvas>;

    fn viewport(&self) -> Result<Viewport, PageError>;

    /// Rendered height of the first element matching `selector`.
    fn element_height(&self, selector: &str) -> Result<f64, PageError>;

    fn set_canvas_size(&mut self, canvas: &Self::Canvas, size: CanvasSize) -> Result<(), PageError>;

    /// Address of the current document (`document.URL`).
    fn page_url(&self) -> Result<String, PageError>;

    /// Hands `url` to the externally supplied loader function named `loader_fn`.
    fn call_loader(&mut self, loader_fn: &str, url: &str) -> Result<(), PageError>;

    fn remove_element_by_id(&mut self, id: &str) -> Result<(), PageError>;
}

/// One-shot deferred execution on the host event loop.
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>);
}
