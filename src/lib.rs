pub mod config;
pub mod error;
pub mod http;
pub mod page;
pub mod recorder;

pub use config::Config;
pub use error::{RecorderError, SubmitError};
pub use http::{HttpTimeBlockClient, SubmitRequest, SubmitResponse, TimeBlockEnvelope, TimeBlockSink, TimeBlockSubmission};
pub use page::{ClickEvent, ConsolePage, Element, HostPage};
pub use recorder::{Clock, ManualClock, PendingSubmission, SubmissionOutcome, SystemClock, TimeBlockRecorder};
