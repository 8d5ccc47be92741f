use crate::core::state::Ticks;

/// Observable transitions produced by a playback tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The virtual clock entered a new Gantt segment.
    SegmentEntered {
        process: String,
        start: Ticks,
        end: Ticks,
    },
    /// The virtual clock reached the makespan; any tick source must stop.
    Finished { makespan: Ticks },
}
