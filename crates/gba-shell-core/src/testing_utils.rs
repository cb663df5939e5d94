//! In-memory page and scheduler used by tests.

use crate::error::PageError;
use crate::host::{PageHost, Scheduler};
use crate::viewport::{CanvasSize, Viewport};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub enum PageCall {
    SetCanvasSize(CanvasSize),
    Loader { name: String, url: String },
    Remove(String),
}

/// A page made of a few selectors and ids, recording every mutation.
#[derive(Debug)]
pub struct FakePage {
    pub url: String,
    pub viewport: Viewport,
    /// Selectors that resolve to a canvas.
    pub canvases: HashSet<String>,
    /// Selector -> rendered height.
    pub heights: HashMap<String, f64>,
    pub ids: HashSet<String>,
    pub loaders: HashSet<String>,
    pub calls: Vec<PageCall>,
}

impl FakePage {
    /// The stock GBA page: canvas, `.ctrl_div`, `play_btn` and the loader.
    pub fn stock(viewport: Viewport, panel_height: f64) -> Self {
        Self {
            url: "https://example.org/gba/".to_owned(),
            viewport,
            canvases: HashSet::from(["canvas".to_owned()]),
            heights: HashMap::from([(".ctrl_div".to_owned(), panel_height)]),
            ids: HashSet::from(["play_btn".to_owned()]),
            loaders: HashSet::from(["loadRomFromNetwork".to_owned()]),
            calls: Vec::new(),
        }
    }

    pub fn canvas_sizes(&self) -> Vec<CanvasSize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PageCall::SetCanvasSize(size) => Some(*size),
                _ => None,
            })
            .collect()
    }

    pub fn loader_calls(&self) -> Vec<(&str, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PageCall::Loader { name, url } => Some((name.as_str(), url.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn removals(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PageCall::Remove(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PageHost for FakePage {
    type Canvas = ();

    fn find_canvas(&self, selector: &str) -> Option<()> {
        self.canvases.contains(selector).then_some(())
    }

    fn viewport(&self) -> Result<Viewport, PageError> {
        Ok(self.viewport)
    }

    fn element_height(&self, selector: &str) -> Result<f64, PageError> {
        self.heights
            .get(selector)
            .copied()
            .ok_or_else(|| PageError::MissingElement(selector.to_owned()))
    }

    fn set_canvas_size(&mut self, _canvas: &(), size: CanvasSize) -> Result<(), PageError> {
        self.calls.push(PageCall::SetCanvasSize(size));
        Ok(())
    }

    fn page_url(&self) -> Result<String, PageError> {
        Ok(self.url.clone())
    }

    fn call_loader(&mut self, loader_fn: &str, url: &str) -> Result<(), PageError> {
        if !self.loaders.contains(loader_fn) {
            return Err(PageError::LoaderUnavailable(loader_fn.to_owned()));
        }
        self.calls.push(PageCall::Loader {
            name: loader_fn.to_owned(),
            url: url.to_owned(),
        });
        Ok(())
    }

    fn remove_element_by_id(&mut self, id: &str) -> Result<(), PageError> {
        if !self.ids.remove(id) {
            return Err(PageError::MissingElement(format!("#{id}")));
        }
        self.calls.push(PageCall::Remove(id.to_owned()));
        Ok(())
    }
}

/// Collects deferred tasks until the test decides to run them.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Runs everything queued so far in submission order.
    pub fn run_all(&self) -> usize {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) {
        self.tasks.borrow_mut().push((delay_ms, task));
    }
}
