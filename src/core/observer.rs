use super::driver::{Phase, PlaybackState};

/// Debug-build consistency walk over the playback state, run after every
/// transition. All checks compile out of release builds.
pub(crate) fn check_playback(state: &PlaybackState) {
    let sched = &state.schedule;

    debug_assert_eq!(
        sched.executed.len(),
        sched.gantt.len(),
        "every executed process must have exactly one segment"
    );

    for (proc, seg) in sched.executed.iter().zip(&sched.gantt) {
        debug_assert!(
            proc.start_time >= proc.spec.arrival_time,
            "process {} started before it arrived",
            proc.spec.id
        );
        debug_assert_eq!(proc.end_time, proc.start_time + proc.spec.burst_time);
        debug_assert_eq!(proc.waiting_time, proc.start_time - proc.spec.arrival_time);
        debug_assert_eq!(proc.turnaround_time, proc.end_time - proc.spec.arrival_time);
        debug_assert_eq!(seg.process, proc.spec.name());
        debug_assert_eq!((seg.start, seg.end), (proc.start_time, proc.end_time));
    }

    for pair in sched.gantt.windows(2) {
        debug_assert!(
            pair[0].end <= pair[1].start,
            "segments overlap: {:?}",
            pair
        );
    }
    match sched.gantt.last() {
        Some(last) => debug_assert_eq!(last.end, sched.makespan),
        None => debug_assert_eq!(sched.makespan, 0),
    }

    debug_assert!(state.virtual_time >= 0.0);
    match state.phase {
        Phase::Idle => {
            debug_assert_eq!(state.virtual_time, 0.0);
            debug_assert!(sched.executed.is_empty(), "idle playback holds a plan");
        }
        Phase::Running => {
            debug_assert!(!sched.gantt.is_empty(), "running playback with no plan");
            debug_assert!(state.virtual_time < sched.makespan as f64);
        }
        Phase::Finished => {
            debug_assert!(state.virtual_time >= sched.makespan as f64);
        }
    }
}
