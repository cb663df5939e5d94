use gba_shell_core::host::Scheduler;
use gloo_timers::callback::Timeout;

/// Defers work with `setTimeout`. Timers are never cancelled, each one owns
/// its task until it fires.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) {
        Timeout::new(delay_ms, task).forget();
    }
}
