#![cfg(feature = "std")]

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};

use crate::core::format_elapsed;

/// How often the formatted elapsed time is refreshed.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running(Instant),
    Paused(Instant),
    Stopped(u64),
}

/// Elapsed-time counter for a game.
///
/// While running, a background task publishes `MM:SS` once per second on a
/// watch channel. The task is optional: without a tokio runtime the timer
/// still measures elapsed time but emits nothing.
pub struct GameTimer {
    state: TimerState,
    display: Arc<watch::Sender<String>>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTimer {
    pub fn new() -> Self {
        let (display, _) = watch::channel(format_elapsed(0));
        Self {
            state: TimerState::Idle,
            display: Arc::new(display),
            ticker: None,
        }
    }

    /// Receiver of the formatted elapsed time.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    /// Latest formatted value.
    pub fn formatted(&self) -> String {
        self.display.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running(_))
    }

    /// Begin counting. A paused timer resumes from its original origin; a
    /// running timer is left alone.
    pub fn start(&mut self) {
        let origin = match self.state {
            TimerState::Running(_) => return,
            TimerState::Paused(origin) => origin,
            TimerState::Idle | TimerState::Stopped(_) => Instant::now(),
        };
        self.state = TimerState::Running(origin);
        self.spawn_ticker(origin);
    }

    /// Halt emission and return whole seconds since [`GameTimer::start`],
    /// or 0 if it was never started.
    pub fn stop(&mut self) -> u64 {
        self.halt_ticker();
        match self.state {
            TimerState::Idle => 0,
            TimerState::Stopped(secs) => secs,
            TimerState::Running(origin) | TimerState::Paused(origin) => {
                let secs = origin.elapsed().as_secs();
                self.state = TimerState::Stopped(secs);
                self.display.send_replace(format_elapsed(secs));
                secs
            }
        }
    }

    /// Halt emission, keeping the origin.
    pub fn pause(&mut self) {
        self.halt_ticker();
        if let TimerState::Running(origin) = self.state {
            self.state = TimerState::Paused(origin);
        }
    }

    /// Forget the origin and show `00:00`.
    pub fn reset(&mut self) {
        self.halt_ticker();
        self.state = TimerState::Idle;
        self.display.send_replace(format_elapsed(0));
    }

    /// Whole seconds elapsed so far.
    pub fn elapsed_secs(&self) -> u64 {
        match self.state {
            TimerState::Idle => 0,
            TimerState::Stopped(secs) => secs,
            TimerState::Running(origin) | TimerState::Paused(origin) => origin.elapsed().as_secs(),
        }
    }

    fn spawn_ticker(&mut self, origin: Instant) {
        self.halt_ticker();
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                log::warn!("no async runtime; timer display will not update");
                return;
            }
        };
        let display = Arc::clone(&self.display);
        self.ticker = Some(handle.spawn(async move {
            let mut ticks = interval(TICK);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                display.send_replace(format_elapsed(origin.elapsed().as_secs()));
            }
        }));
    }

    fn halt_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for GameTimer {
    fn drop(&mut self) {
        self.halt_ticker();
    }
}
