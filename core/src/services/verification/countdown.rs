//! Resend countdown driven by a single cancellable interval task

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::domain::entities::VerificationSession;

/// Period of one countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owner of the countdown task; at most one task is alive at a time
#[derive(Debug, Default)]
pub struct Countdown {
    handle: Option<JoinHandle<()>>,
    /// Number of timers started over the lifetime of the session
    started: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking `state` once per `period`, replacing any running timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, state: Arc<watch::Sender<VerificationSession>>, period: Duration) {
        self.cancel();
        self.started += 1;
        let timer_id = self.started;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut remaining = 0;
                state.send_modify(|session| remaining = session.tick());
                if remaining == 0 {
                    tracing::debug!(
                        timer_id = timer_id,
                        event = "countdown_finished",
                        "Countdown reached zero, resend available"
                    );
                    break;
                }
            }
        });
        self.handle = Some(handle);
    }

    /// Abort the running timer; returns whether one was running
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Render seconds as `m:ss` for the resend button
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
