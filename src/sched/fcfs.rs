use crate::core::state::{ProcessSpec, Ticks};

/// A process with its computed execution window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedProcess {
    pub spec: ProcessSpec,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

/// A `[start, end)` slot of server time labeled with its occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttSegment {
    pub process: String,
    pub start: Ticks,
    pub end: Ticks,
}

/// A fully computed execution plan. `makespan` is the end of the last
/// segment, 0 when the plan is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub executed: Vec<ExecutedProcess>,
    pub gantt: Vec<GanttSegment>,
    pub makespan: Ticks,
}

/// Plan a single-server, non-preemptive FCFS schedule.
///
/// Processes are served in arrival order; equal arrivals keep their input
/// order. The server idles until the next arrival when nothing is eligible
/// and otherwise runs each process to completion back to back.
///
/// Pure and deterministic: identical input yields an identical plan.
/// Callers must supply `burst_time >= 1`.
pub fn plan(specs: &[ProcessSpec]) -> Schedule {
    let mut sorted: Vec<&ProcessSpec> = specs.iter().collect();
    // Stable sort: ties keep input order
    sorted.sort_by_key(|spec| spec.arrival_time);

    let mut time: Ticks = 0;
    let mut executed = Vec::with_capacity(sorted.len());
    let mut gantt = Vec::with_capacity(sorted.len());

    for spec in sorted {
        debug_assert!(
            spec.burst_time >= 1,
            "process {} has a zero burst time",
            spec.id
        );

        let start_time = time.max(spec.arrival_time);
        let end_time = start_time + spec.burst_time;

        executed.push(ExecutedProcess {
            spec: spec.clone(),
            start_time,
            end_time,
            waiting_time: start_time - spec.arrival_time,
            turnaround_time: end_time - spec.arrival_time,
        });
        gantt.push(GanttSegment {
            process: spec.name(),
            start: start_time,
            end: end_time,
        });

        time = end_time;
    }

    Schedule {
        executed,
        gantt,
        makespan: time,
    }
}
