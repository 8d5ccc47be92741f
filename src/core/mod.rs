pub mod driver;
pub mod event;
mod observer;
pub mod state;

pub use driver::{Phase, PlaybackController, PlaybackState, DEFAULT_STEP};
pub use event::PlaybackEvent;
pub use state::{ProcessField, ProcessId, ProcessSpec, ProcessTable, Ticks};
