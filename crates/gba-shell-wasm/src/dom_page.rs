use gba_shell_core::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

fn host_err(err: JsValue) -> PageError {
    PageError::Host(format!("{err:?}"))
}

/// `PageHost` over the live browser document. Holds no state of its own, so
/// clones are interchangeable handles to the same page.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn from_window() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Host("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Host("window has no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn window_dimension(value: Result<JsValue, JsValue>) -> Result<f64, PageError> {
        value
            .map_err(host_err)?
            .as_f64()
            .ok_or_else(|| PageError::Host("viewport dimension is not a number".into()))
    }
}

impl PageHost for DomPage {
    type Canvas = HtmlCanvasElement;

    fn find_canvas(&self, selector: &str) -> Option<HtmlCanvasElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok()),
            Err(e) => {
                // Still a no-op, but a broken selector is a config bug, not an absent canvas
                log::warn!("canvas selector `{selector}` is invalid: {e:?}");
                None
            }
        }
    }

    fn viewport(&self) -> Result<Viewport, PageError> {
        Ok(Viewport::new(
            Self::window_dimension(self.window.inner_width())?,
            Self::window_dimension(self.window.inner_height())?,
        ))
    }

    fn element_height(&self, selector: &str) -> Result<f64, PageError> {
        let element: HtmlElement = self
            .document
            .query_selector(selector)
            .map_err(host_err)?
            .ok_or_else(|| PageError::MissingElement(selector.to_owned()))?
            .dyn_into()
            .map_err(|_| PageError::Host(format!("`{selector}` is not an HTML element")))?;
        Ok(f64::from(element.offset_height()))
    }

    fn set_canvas_size(&mut self, canvas: &HtmlCanvasElement, size: CanvasSize) -> Result<(), PageError> {
        let style = canvas.style();
        style.set_property("height", &css_px(size.height)).map_err(host_err)?;
        style.set_property("width", &css_px(size.width)).map_err(host_err)?;
        Ok(())
    }

    fn page_url(&self) -> Result<String, PageError> {
        self.document.url().map_err(host_err)
    }

    fn call_loader(&mut self, loader_fn: &str, url: &str) -> Result<(), PageError> {
        let loader: js_sys::Function = js_sys::Reflect::get(&self.window, &JsValue::from_str(loader_fn))
            .map_err(host_err)?
            .dyn_into()
            .map_err(|_| PageError::LoaderUnavailable(loader_fn.to_owned()))?;
        // Whatever the loader returns (usually a pending promise) is not observed.
        loader
            .call1(&self.window, &JsValue::from_str(url))
            .map_err(host_err)?;
        Ok(())
    }

    fn remove_element_by_id(&mut self, id: &str) -> Result<(), PageError> {
        // Intentionally unguarded: the button is expected to exist.
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(format!("#{id}")))?;
        element.remove();
        Ok(())
    }
}
