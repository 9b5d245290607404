//! Time block submission over HTTP
//!
//! - `messages`: the JSON body and the request/response pair
//! - `client`: the `TimeBlockSink` seam and its reqwest implementation

pub mod client;
pub mod messages;

pub use client::{HttpTimeBlockClient, TimeBlockSink, CSRF_HEADER, JSON_CONTENT_TYPE};
pub use messages::{SubmitRequest, SubmitResponse, TimeBlockEnvelope, TimeBlockSubmission};
