use gloo_timers::callback::Timeout;
use log::debug;

use crate::config::{FIRST_RENDER_DELAY_MS, LONG_PRESS_MS, REVEAL_FALLBACK_MS};

/// Everything on the page that runs later instead of in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Forces every still-hidden `.fade-in` element visible.
    RevealFallback,
    /// Measures the freshly shown lookbook surface before its first render.
    FirstRender,
    /// Opens an album once a touch has been held on its cover.
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTrigger {
    Unmount,
    PointerMove,
    PointerRelease,
    Rearm,
}

impl TaskKind {
    pub fn delay_ms(self) -> u32 {
        match self {
            TaskKind::RevealFallback => REVEAL_FALLBACK_MS,
            TaskKind::FirstRender => FIRST_RENDER_DELAY_MS,
            TaskKind::LongPress => LONG_PRESS_MS,
        }
    }

    pub fn cancelled_by(self) -> &'static [CancelTrigger] {
        match self {
            TaskKind::RevealFallback => &[CancelTrigger::Unmount],
            TaskKind::FirstRender => &[CancelTrigger::Unmount, CancelTrigger::Rearm],
            TaskKind::LongPress => &[
                CancelTrigger::Unmount,
                CancelTrigger::PointerMove,
                CancelTrigger::PointerRelease,
                CancelTrigger::Rearm,
            ],
        }
    }
}

/// A pending one-shot callback. Dropping it cancels the callback.
pub struct ScheduledTask {
    kind: TaskKind,
    timeout: Timeout,
}

impl ScheduledTask {
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn cancel(self) {
        debug!("Cancelled {:?}", self.kind);
        let _ = self.timeout.cancel();
    }
}

pub fn schedule<F>(kind: TaskKind, callback: F) -> ScheduledTask
where
    F: FnOnce() + 'static,
{
    debug!("Scheduling {:?} in {} ms", kind, kind.delay_ms());
    ScheduledTask {
        kind,
        timeout: Timeout::new(kind.delay_ms(), callback),
    }
}

/// Holds at most one pending task of a kind, e.g. the long-press on whatever
/// cover is currently being touched.
#[derive(Default)]
pub struct TaskSlot {
    pending: Option<ScheduledTask>,
}

impl TaskSlot {
    pub fn arm<F>(&mut self, kind: TaskKind, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel(CancelTrigger::Rearm);
        self.pending = Some(schedule(kind, callback));
    }

    /// Cancels the pending task if `trigger` applies to it. Returns whether a
    /// task was cancelled.
    pub fn cancel(&mut self, trigger: CancelTrigger) -> bool {
        let applies = self
            .pending
            .as_ref()
            .map(|task| task.kind().cancelled_by().contains(&trigger))
            .unwrap_or(false);
        if !applies {
            return false;
        }
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
        true
    }
}
