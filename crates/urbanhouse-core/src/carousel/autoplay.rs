//! Cancellable autoplay timer.
//!
//! [`AutoplayTimer`] owns at most one background tokio task that emits a
//! tick every period. Re-arming replaces the running task instead of
//! stacking a second one, and dropping the timer cancels it.

use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default period between automatic advances.
pub const DEFAULT_AUTOPLAY_PERIOD: Duration = Duration::from_secs(5);

/// Handle to the periodic tick task.
///
/// Each arming gets a new generation number, which is the payload of every
/// tick it sends. Receivers compare it with [`AutoplayTimer::generation`] to
/// discard ticks that were already in flight when the timer was cancelled.
#[derive(Debug)]
pub struct AutoplayTimer {
    period: Duration,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl AutoplayTimer {
    /// Creates a disarmed timer. A zero `period` disables autoplay entirely.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Generation of the most recent arming.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    /// Starts ticking into `tx`, replacing any running task.
    ///
    /// The first tick fires one full period from now. A tick is dropped,
    /// not queued, when the receiver has not consumed the previous one.
    /// Returns the new generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, tx: Sender<u64>) -> u64 {
        self.cancel();
        self.generation += 1;
        if self.period.is_zero() {
            return self.generation;
        }

        let generation = self.generation;
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                let _ = tx.try_send(generation);
            }
        }));
        generation
    }

    /// Stops the running task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
