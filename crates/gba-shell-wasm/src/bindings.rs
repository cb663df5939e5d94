use crate::dom_page::DomPage;
use crate::listener::Listener;
use crate::scheduler::TimeoutScheduler;
use gba_shell_core::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

/// Window and button subscriptions of an installed shell.
///
/// Lives as long as the page keeps it; dropping it detaches every handler.
/// Refits already queued on a timer still run.
pub struct PageBindings {
    listeners: Vec<Listener>,
}

impl PageBindings {
    pub fn install(shell: &PageShell, page: &Rc<RefCell<DomPage>>) -> Result<Self, JsValue> {
        let (window, document) = {
            let page = page.borrow();
            let window: EventTarget = page.window().clone().into();
            (window, page.document().clone())
        };
        let mut listeners = Vec::new();

        let refit = {
            let adapter = shell.viewport.clone();
            let page = Rc::clone(page);
            move |_: Event| adapter.schedule_refit(&page, &TimeoutScheduler)
        };
        listeners.push(Listener::new(&window, "resize", refit.clone())?);
        if document.ready_state() == "complete" {
            shell.viewport.schedule_refit(page, &TimeoutScheduler);
        } else {
            listeners.push(Listener::new(&window, "load", refit)?);
        }

        let guard = shell.input.clone();
        listeners.push(Listener::new(&window, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            guard.handle(&key.code(), || event.prevent_default());
        })?);

        if shell.binds_play_button() {
            match document.get_element_by_id(shell.load.play_button_id()) {
                Some(button) => {
                    if let Some(inline) = inline_click_handler(&button) {
                        log::warn!(
                            "#{} already has onclick=\"{inline}\", one click will load the ROM twice",
                            shell.load.play_button_id()
                        );
                    }
                    let trigger = shell.load.clone();
                    let page = Rc::clone(page);
                    listeners.push(Listener::new(&button, "click", move |_: Event| {
                        // Work on a detached handle so the loader may reenter the shell
                        let mut page = page.borrow().clone();
                        if let Err(e) = trigger.trigger(&mut page) {
                            log::error!("loading the ROM failed: {e}");
                        }
                    })?);
                }
                None => log::warn!("no #{} to bind, waiting for loadGame()", shell.load.play_button_id()),
            }
        }

        log::debug!("page shell bound {} listeners", listeners.len());
        Ok(Self { listeners })
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(Listener::event).collect()
    }
}

/// Inline `onclick` markup on `element`, if any.
fn inline_click_handler(element: &Element) -> Option<String> {
    element.get_attribute("onclick").filter(|code| !code.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn button(markup: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(markup);
        holder.first_element_child().unwrap()
    }

    #[wasm_bindgen_test]
    fn inline_onclick_is_detected() {
        let stock = button(r#"<button id="play_btn" onclick="loadGame()">Play</button>"#);
        assert_eq!(inline_click_handler(&stock).as_deref(), Some("loadGame()"));
    }

    #[wasm_bindgen_test]
    fn plain_button_has_no_inline_handler() {
        assert_eq!(inline_click_handler(&button(r#"<button id="play_btn">Play</button>"#)), None);
        assert_eq!(inline_click_handler(&button(r#"<button onclick=" ">Play</button>"#)), None);
    }
}
