//! Fixed-interval auto advance.
//!
//! The timer does not own a thread. The host polls it with its own clock and
//! feeds a [`Trigger::Tick`](crate::Trigger::Tick) into the carousel whenever
//! [`AutoAdvance::poll`] fires. Because a teleport and its animated step are
//! produced by a single call, no tick can land between them.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running { next_due: Instant },
    Suspended,
    Cancelled,
}

/// Periodic tick source for one carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvance {
    delay: Duration,
    state: TimerState,
}

impl AutoAdvance {
    /// Creates an idle timer firing every `delay` once started.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: TimerState::Idle,
        }
    }

    /// Interval between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts (or restarts) the interval at `now`. Ignored once cancelled.
    pub fn start(&mut self, now: Instant) {
        if self.is_cancelled() {
            return;
        }
        self.state = TimerState::Running {
            next_due: now + self.delay,
        };
    }

    /// Returns true when a tick is due, and schedules the next one.
    ///
    /// At most one tick fires per call; a host that stalled for several
    /// intervals does not receive a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let TimerState::Running { next_due } = self.state else {
            return false;
        };
        if now < next_due {
            return false;
        }
        trace!(delay = ?self.delay, "auto advance tick");
        self.state = TimerState::Running {
            next_due: now + self.delay,
        };
        true
    }

    /// Changes the interval without changing the state.
    ///
    /// A running timer keeps the time of its last start or tick and is due
    /// one new interval after it.
    pub fn retime(&mut self, delay: Duration) {
        if let TimerState::Running { next_due } = self.state {
            let since = next_due.checked_sub(self.delay).unwrap_or(next_due);
            self.state = TimerState::Running {
                next_due: since + delay,
            };
        }
        self.delay = delay;
    }

    /// Pauses the timer without releasing it.
    pub fn suspend(&mut self) {
        if matches!(self.state, TimerState::Running { .. }) {
            self.state = TimerState::Suspended;
        }
    }

    /// Resumes a suspended timer with a full interval from `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.state == TimerState::Suspended {
            self.start(now);
        }
    }

    /// Releases the timer. It never fires again.
    pub fn cancel(&mut self) {
        self.state = TimerState::Cancelled;
    }

    /// Whether the timer is counting toward a tick.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Whether the timer was released.
    pub fn is_cancelled(&self) -> bool {
        self.state == TimerState::Cancelled
    }
}
