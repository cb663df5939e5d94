#![cfg(target_arch = "wasm32")]
#![warn(clippy::all, rust_2018_idioms)]
use gba_shell_core::prelude::*;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod bindings;
mod dom_page;
mod listener;
mod scheduler;

pub use bindings::PageBindings;
pub use dom_page::DomPage;
pub use listener::Listener;
pub use scheduler::TimeoutScheduler;

struct Installed {
    shell: PageShell,
    page: Rc<RefCell<DomPage>>,
    _bindings: PageBindings,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn with_installed<R>(f: impl FnOnce(&Installed) -> R) -> Result<R, JsValue> {
    INSTALLED.with(|cell| {
        let cell = cell.borrow();
        let installed = cell
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Page shell not installed"))?;
        Ok(f(installed))
    })
}

fn install(config: &PageConfig) -> Result<(), JsValue> {
    let shell = PageShell::new(config).map_err(to_js)?;
    let page = Rc::new(RefCell::new(DomPage::from_window().map_err(to_js)?));
    let bindings = PageBindings::install(&shell, &page)?;
    log::info!("page shell installed, listening for {:?}", bindings.events());

    // Replacing a previous install drops its bindings, detaching its handlers
    INSTALLED.with(|cell| {
        *cell.borrow_mut() = Some(Installed {
            shell,
            page,
            _bindings: bindings,
        });
    });
    Ok(())
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::debug!("Already initialized, skipping");
        return;
    }
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(e) = install(&PageConfig::default()) {
        log::error!("page shell install failed: {e:?}");
    }
}

/// Reinstalls the shell with `config`, a partial `PageConfig` object.
/// `undefined`/`null` mean the stock page.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(to_js)?
    };
    install(&config)
}

#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PageConfig::default()).map_err(to_js)
}

/// Detaches every handler. Pending refits still fire.
#[wasm_bindgen]
pub fn uninstall() {
    let previous = INSTALLED.with(|cell| cell.borrow_mut().take());
    if previous.is_some() {
        log::info!("page shell uninstalled");
    }
}

/// Schedules a deferred canvas refit, same as a window resize.
#[wasm_bindgen(js_name = resizeCanvas)]
pub fn resize_canvas() -> Result<(), JsValue> {
    with_installed(|installed| {
        installed
            .shell
            .viewport
            .schedule_refit(&installed.page, &TimeoutScheduler)
    })
}

/// Hands the ROM to the page's loader and removes the play button.
/// Errors are thrown back to the caller, nothing is retried.
#[wasm_bindgen(js_name = loadGame)]
pub fn load_game() -> Result<(), JsValue> {
    // No borrow is held while the loader runs, so it may call back into
    // uninstall()/installWithConfig() synchronously.
    let (trigger, mut page) =
        with_installed(|installed| (installed.shell.load.clone(), installed.page.borrow().clone()))?;
    trigger.trigger(&mut page).map(|_| ()).map_err(to_js)
}
