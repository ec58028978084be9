pub mod controller;
pub mod events;
pub mod schedule;
pub mod script;
pub mod state;

pub use controller::SearchSequencer;
pub use events::SequencerEvent;
pub use schedule::{Pacing, Schedule, ScheduledTask, Task};
pub use script::{Script, ScriptStep};
pub use state::{RunStatus, SearchRun, StartOutcome};
