pub mod core;
pub mod sched;
pub mod sim;

pub use crate::core::{
    Phase, PlaybackController, PlaybackEvent, PlaybackState, ProcessField, ProcessId, ProcessSpec,
    ProcessTable, Ticks, DEFAULT_STEP,
};
pub use sched::{plan, summarize, ExecutedProcess, GanttSegment, Schedule, ScheduleMetrics};
pub use sim::{bernoulli_procs, Cadence, Player};
