pub mod fcfs;
pub mod metrics;

pub use fcfs::{plan, ExecutedProcess, GanttSegment, Schedule};
pub use metrics::{summarize, ScheduleMetrics};
