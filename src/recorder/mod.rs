//! Time block recording
//!
//! This module provides the `TimeBlockRecorder` that manages:
//! - the start/stop session state (idle or started at a timestamp)
//! - building the time block for the clicked task
//! - dispatching it and reloading the page once it is saved

mod clock;
mod recorder;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use recorder::{PendingSubmission, SubmissionOutcome, TimeBlockRecorder};
pub use state::{ActiveSession, RecorderState};
