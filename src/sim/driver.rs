use std::thread;
use std::time::Duration;

use crate::core::{Phase, PlaybackController, PlaybackEvent, ProcessTable, DEFAULT_STEP};

/// Wall-clock pacing for playback: `step` virtual units per `interval` of
/// real time. The default reproduces the reference cadence of 0.5 units
/// per 500ms; only the ratio is contractual.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    pub interval: Duration,
    pub step: f64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            step: DEFAULT_STEP,
        }
    }
}

/// Drives a `PlaybackController` against the wall clock.
///
/// The only component in the crate that sleeps. At most one tick source
/// exists because the ticker arms only on a successful `run` and disarms
/// when playback finishes or resets.
#[derive(Debug)]
pub struct Player {
    ctrl: PlaybackController,
    cadence: Cadence,
    ticking: bool,
}

impl Player {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            ctrl: PlaybackController::with_step(cadence.step),
            cadence,
            ticking: false,
        }
    }

    /// Start playback, arming the ticker only when the controller accepts.
    /// Returns whether a new playback started.
    pub fn run(&mut self, table: &ProcessTable) -> bool {
        let started = self.ctrl.run(table);
        if started {
            self.ticking = true;
        }
        started
    }

    /// Sleep one interval, then advance the clock, returning the tick's
    /// events. Disarms the ticker when playback finishes; a no-op while
    /// disarmed.
    pub fn step(&mut self) -> Vec<PlaybackEvent> {
        if !self.ticking {
            return Vec::new();
        }

        thread::sleep(self.cadence.interval);
        let events = self.ctrl.tick();
        if self.ctrl.phase() == Phase::Finished {
            self.ticking = false;
        }
        events
    }

    /// Cancel any armed ticker and return the controller to idle.
    pub fn reset(&mut self) {
        self.ticking = false;
        self.ctrl.reset();
    }

    /// Play the whole animation to completion, invoking `on_tick` with
    /// the virtual time and events of each tick. Returns `false` without
    /// ticking when playback cannot start.
    pub fn play_to_end(
        &mut self,
        table: &ProcessTable,
        mut on_tick: impl FnMut(f64, &[PlaybackEvent]),
    ) -> bool {
        if !self.run(table) {
            return false;
        }
        while self.ticking {
            let events = self.step();
            on_tick(self.ctrl.virtual_time(), &events);
        }
        true
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.ctrl
    }
}
