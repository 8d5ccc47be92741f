use log::{debug, trace};

use super::event::PlaybackEvent;
use super::observer;
use super::state::{ProcessTable, Ticks};
use crate::sched::{self, ExecutedProcess, GanttSegment, Schedule};

/// Virtual time advanced per tick unless overridden: half a time unit,
/// matching the reference animation cadence of 0.5 units per 500ms.
pub const DEFAULT_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Everything a playback owns: created fresh on each run, cleared on
/// reset, and mutated only through `run`/`tick`/`reset`.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub phase: Phase,
    pub virtual_time: f64,
    pub schedule: Schedule,
}

/// Replays a computed schedule on a virtual clock.
///
/// The controller never generates ticks itself; the owner calls `tick()`
/// at whatever pace it wants (see `sim::Player` for the wall-clock
/// driver). Exactly one tick source should feed a controller at a time:
/// arm it only when `run` returns `true`, and stop it on the `Finished`
/// event or on `reset`.
#[derive(Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    step: f64,
    // Gantt index reported by the previous tick, for segment-entry edges
    active_idx: Option<usize>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    pub fn with_step(step: f64) -> Self {
        assert!(step > 0.0, "tick step must be positive");
        Self {
            state: PlaybackState::default(),
            step,
            active_idx: None,
        }
    }

    /// Start playback over the table's current processes.
    ///
    /// Returns `true` when a new playback actually started. A `false`
    /// return (already running, or empty table) means no tick source
    /// should be armed and the existing state is untouched.
    pub fn run(&mut self, table: &ProcessTable) -> bool {
        if self.state.phase == Phase::Running || table.is_empty() {
            return false;
        }

        let specs = table.snapshot();
        self.state.schedule = sched::plan(&specs);
        self.state.virtual_time = 0.0;
        self.state.phase = Phase::Running;
        self.active_idx = None;

        debug!(
            "playback started: {} processes, makespan {}",
            specs.len(),
            self.state.schedule.makespan
        );
        observer::check_playback(&self.state);
        true
    }

    /// Advance the virtual clock by one step and report what changed.
    /// No-op outside `Running`.
    pub fn tick(&mut self) -> Vec<PlaybackEvent> {
        if self.state.phase != Phase::Running {
            return Vec::new();
        }

        self.state.virtual_time += self.step;
        trace!("tick: virtual time {}", self.state.virtual_time);

        let mut events = Vec::new();

        let active = self.segment_index_at(self.state.virtual_time);
        if active != self.active_idx {
            if let Some(idx) = active {
                let seg = &self.state.schedule.gantt[idx];
                events.push(PlaybackEvent::SegmentEntered {
                    process: seg.process.clone(),
                    start: seg.start,
                    end: seg.end,
                });
            }
            self.active_idx = active;
        }

        if self.state.virtual_time >= self.state.schedule.makespan as f64 {
            self.state.phase = Phase::Finished;
            debug!("playback finished at t={}", self.state.virtual_time);
            events.push(PlaybackEvent::Finished {
                makespan: self.state.schedule.makespan,
            });
        }

        observer::check_playback(&self.state);
        events
    }

    /// Return to `Idle`, dropping any plan. Callable from any state, any
    /// number of times in a row.
    pub fn reset(&mut self) {
        self.state = PlaybackState::default();
        self.active_idx = None;
        debug!("playback reset");
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn virtual_time(&self) -> f64 {
        self.state.virtual_time
    }

    pub fn makespan(&self) -> Ticks {
        self.state.schedule.makespan
    }

    pub fn executed(&self) -> &[ExecutedProcess] {
        &self.state.schedule.executed
    }

    pub fn gantt(&self) -> &[GanttSegment] {
        &self.state.schedule.gantt
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Segment the virtual clock currently sits in, if any. `None` during
    /// idle gaps and outside playback.
    pub fn active_segment(&self) -> Option<&GanttSegment> {
        self.segment_index_at(self.state.virtual_time)
            .map(|idx| &self.state.schedule.gantt[idx])
    }

    fn segment_index_at(&self, t: f64) -> Option<usize> {
        self.state
            .schedule
            .gantt
            .iter()
            .position(|seg| seg.start as f64 <= t && t < seg.end as f64)
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
