use average::{Estimate, Mean};

use super::fcfs::ExecutedProcess;

/// Summary statistics over an execution plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScheduleMetrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

/// Average waiting and turnaround time; both 0 for an empty plan.
pub fn summarize(executed: &[ExecutedProcess]) -> ScheduleMetrics {
    ScheduleMetrics {
        avg_waiting_time: avg(executed.iter().map(|p| p.waiting_time as f64)),
        avg_turnaround_time: avg(executed.iter().map(|p| p.turnaround_time as f64)),
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ProcessSpec;
    use crate::sched::fcfs::plan;

    #[test]
    fn empty_plan_averages_to_zero() {
        let metrics = summarize(&[]);
        assert_eq!(metrics.avg_waiting_time, 0.0);
        assert_eq!(metrics.avg_turnaround_time, 0.0);
    }

    #[test]
    fn averages_match_hand_computation() {
        let specs = [
            ProcessSpec {
                id: 1,
                arrival_time: 0,
                burst_time: 4,
            },
            ProcessSpec {
                id: 2,
                arrival_time: 1,
                burst_time: 3,
            },
            ProcessSpec {
                id: 3,
                arrival_time: 2,
                burst_time: 1,
            },
        ];
        let schedule = plan(&specs);

        // Waits 0, 3, 5 and turnarounds 4, 6, 6
        let metrics = summarize(&schedule.executed);
        assert!((metrics.avg_waiting_time - 8.0 / 3.0).abs() < 1e-9);
        assert!((metrics.avg_turnaround_time - 16.0 / 3.0).abs() < 1e-9);
    }
}
