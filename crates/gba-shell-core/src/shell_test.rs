#[cfg(test)]
mod test {
    use crate::config::PageConfig;
    use crate::error::{ConfigError, PageError};
    use crate::shell::PageShell;
    use crate::testing_utils::{FakePage, ManualScheduler, PageCall};
    use crate::viewport::{CanvasSize, Viewport};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shell() -> PageShell {
        PageShell::new(&PageConfig::default()).unwrap()
    }

    #[test]
    fn test_refit_writes_both_dimensions() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 40.0);

        let size = shell.viewport.refit(&mut page).unwrap();

        let expected = CanvasSize {
            width: 876.0,
            height: 320.0 * 1.875 - 40.0 - 18.0,
        };
        assert_eq!(size, Some(expected));
        assert_eq!(page.calls, vec![PageCall::SetCanvasSize(expected)]);
    }

    #[test]
    fn test_refit_without_canvas_is_silent() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 40.0);
        page.canvases.clear();
        // The panel is irrelevant once the canvas is gone
        page.heights.clear();

        assert_eq!(shell.viewport.refit(&mut page), Ok(None));
        assert!(page.calls.is_empty());
    }

    #[test]
    fn test_refit_without_control_panel_errors_and_writes_nothing() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 40.0);
        page.heights.clear();

        assert_eq!(
            shell.viewport.refit(&mut page),
            Err(PageError::MissingElement(".ctrl_div".into()))
        );
        assert!(page.calls.is_empty());
    }

    #[test]
    fn test_schedule_refit_defers_by_configured_delay() {
        let shell = shell();
        let page = Rc::new(RefCell::new(FakePage::stock(Viewport::new(1000.0, 600.0), 0.0)));
        let scheduler = ManualScheduler::new();

        shell.viewport.schedule_refit(&page, &scheduler);

        assert_eq!(scheduler.delays(), vec![1000]);
        assert!(page.borrow().calls.is_empty(), "nothing happens before the timer fires");

        assert_eq!(scheduler.run_all(), 1);
        assert_eq!(page.borrow().canvas_sizes().len(), 1);
    }

    #[test]
    fn test_rapid_resizes_are_not_deduplicated_and_last_wins() {
        let shell = shell();
        let page = Rc::new(RefCell::new(FakePage::stock(Viewport::new(1000.0, 600.0), 0.0)));
        let scheduler = ManualScheduler::new();

        shell.viewport.schedule_refit(&page, &scheduler);
        shell.viewport.schedule_refit(&page, &scheduler);
        assert_eq!(scheduler.pending(), 2);

        // The window changes before the timers fire; both measure the new size
        page.borrow_mut().viewport = Viewport::new(480.0, 960.0);
        scheduler.run_all();

        let sizes = page.borrow().canvas_sizes();
        assert_eq!(sizes.len(), 2);
        let last = sizes.last().copied().unwrap();
        assert_eq!(last.width, 480.0 - 24.0);
        assert_eq!(last.height, 320.0 - 18.0);
    }

    #[test]
    fn test_deferred_refit_swallows_errors() {
        let shell = shell();
        let page = Rc::new(RefCell::new(FakePage::stock(Viewport::new(1000.0, 600.0), 0.0)));
        page.borrow_mut().heights.clear();
        let scheduler = ManualScheduler::new();

        shell.viewport.schedule_refit(&page, &scheduler);
        scheduler.run_all();

        assert!(page.borrow().calls.is_empty());
    }

    #[test]
    fn test_load_calls_loader_once_then_removes_button() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 0.0);

        let url = shell.load.trigger(&mut page).unwrap();

        assert_eq!(url, "https://example.org/gba/piranha.gba");
        assert_eq!(
            page.calls,
            vec![
                PageCall::Loader {
                    name: "loadRomFromNetwork".into(),
                    url: "https://example.org/gba/piranha.gba".into(),
                },
                PageCall::Remove("play_btn".into()),
            ]
        );
        assert!(!page.ids.contains("play_btn"));
    }

    #[test]
    fn test_load_with_missing_button_still_calls_loader() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 0.0);
        page.ids.clear();

        assert_eq!(
            shell.load.trigger(&mut page),
            Err(PageError::MissingElement("#play_btn".into()))
        );
        assert_eq!(page.loader_calls().len(), 1);
        assert!(page.removals().is_empty());
    }

    #[test]
    fn test_load_without_loader_leaves_button() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 0.0);
        page.loaders.clear();

        assert_eq!(
            shell.load.trigger(&mut page),
            Err(PageError::LoaderUnavailable("loadRomFromNetwork".into()))
        );
        assert!(page.calls.is_empty());
        assert!(page.ids.contains("play_btn"));
    }

    #[test]
    fn test_handlers_touch_disjoint_state() {
        let shell = shell();
        let mut page = FakePage::stock(Viewport::new(1000.0, 600.0), 12.0);

        shell.load.trigger(&mut page).unwrap();
        shell.viewport.refit(&mut page).unwrap();
        assert!(shell.input.should_suppress("Space"));

        assert_eq!(page.loader_calls().len(), 1);
        assert_eq!(page.removals(), vec!["play_btn"]);
        assert_eq!(page.canvas_sizes().len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = PageConfig::default();
        config.guarded_keys.clear();
        assert_eq!(PageShell::new(&config).err(), Some(ConfigError::NoGuardedKeys));
    }
}
