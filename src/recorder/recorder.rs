use super::clock::{Clock, SystemClock};
use super::state::RecorderState;
use crate::error::{RecorderError, SubmitError};
use crate::http::{SubmitRequest, SubmitResponse, TimeBlockEnvelope, TimeBlockSink, TimeBlockSubmission};
use crate::page::{ClickEvent, HostPage, START_BUTTON_ID, STOP_BUTTON_ID};
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Records how long a task was worked on, between a start click and a stop click,
/// and submits the result as a time block
#[derive(Clone)]
pub struct TimeBlockRecorder {
    /// Current session, if any
    state: Arc<Mutex<RecorderState>>,

    /// Where finished time blocks go
    sink: Arc<dyn TimeBlockSink>,

    /// Token source and reload target
    page: Arc<dyn HostPage>,

    clock: Arc<dyn Clock>,
}

/// Result of a dispatched submission
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Server acknowledged the time block; the page has been reloaded
    Acknowledged(SubmitResponse),

    /// Time block was not saved; the session is lost and the page was left alone
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SubmissionOutcome::Acknowledged(_))
    }
}

/// A time block that has been handed to the sink
///
/// Dropping this does not cancel the request.
pub struct PendingSubmission {
    submission: TimeBlockSubmission,
    handle: JoinHandle<SubmissionOutcome>,
}

impl PendingSubmission {
    /// What was sent
    pub fn submission(&self) -> &TimeBlockSubmission {
        &self.submission
    }

    /// Wait for the server's answer
    pub async fn outcome(self) -> SubmissionOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Submission task panicked: {}", e);
                SubmissionOutcome::Failed(SubmitError::Aborted(e.to_string()))
            }
        }
    }
}

impl TimeBlockRecorder {
    pub fn new(sink: Arc<dyn TimeBlockSink>, page: Arc<dyn HostPage>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecorderState::new())),
            sink,
            page,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Route a click to the handler bound to its target
    pub async fn handle_click(
        &self,
        event: &ClickEvent,
    ) -> Result<Option<PendingSubmission>, RecorderError> {
        if event.target.is(START_BUTTON_ID) {
            self.on_start_click(event).await;
            Ok(None)
        } else if event.target.is(STOP_BUTTON_ID) {
            self.on_stop_click(event).await
        } else {
            debug!("Ignoring click on unbound element {:?}", event.target.id);
            Ok(None)
        }
    }

    /// Begin a session now, discarding any unsaved start
    pub async fn on_start_click(&self, _event: &ClickEvent) {
        let now = self.now();
        let mut state = self.state.lock().await;

        if let Some(previous) = state.begin(now) {
            debug!(
                "Discarding unsaved session {} started at {}",
                previous.id, previous.started_at
            );
        }

        if let Some(session) = state.active() {
            info!("Started session {} at {}", session.id, now);
        }
    }

    /// End the current session and submit it for the clicked task
    ///
    /// Returns `Ok(None)` when no session is running. On dispatch the recorder
    /// is idle again straight away; it does not wait for the server.
    pub async fn on_stop_click(
        &self,
        event: &ClickEvent,
    ) -> Result<Option<PendingSubmission>, RecorderError> {
        let mut state = self.state.lock().await;

        let Some(session) = state.active() else {
            debug!("Stop clicked with no session running");
            return Ok(None);
        };

        let now = self.now();
        let end = RecorderState::end_for(&session, now);
        if end != now {
            warn!(
                "Clock moved backwards during session {} ({} < {}); using start as end",
                session.id, now, session.started_at
            );
        }

        let task_id = match event.target.task_id() {
            Some(id) => id.to_string(),
            None => {
                warn!("Stop button has no task id; submitting session {} anyway", session.id);
                String::new()
            }
        };

        // Nothing has been sent yet, so the session survives this error
        let csrf_token = self.page.csrf_token().ok_or(RecorderError::MissingCsrfToken)?;

        let envelope = TimeBlockEnvelope::from(TimeBlockSubmission {
            task_id,
            start: session.started_at,
            end,
        });
        let body = serde_json::to_string(&envelope)?;
        let submission = envelope.time_block;

        info!(
            "Submitting session {} for task {:?} to {} ({}s)",
            session.id,
            submission.task_id,
            self.sink.endpoint(),
            (submission.end - submission.start).num_seconds()
        );

        let handle = self.dispatch(SubmitRequest { csrf_token, body }, submission.task_id.clone());

        state.reset();

        Ok(Some(PendingSubmission { submission, handle }))
    }

    fn dispatch(&self, request: SubmitRequest, task_id: String) -> JoinHandle<SubmissionOutcome> {
        let sink = Arc::clone(&self.sink);
        let page = Arc::clone(&self.page);

        tokio::spawn(async move {
            match sink.submit(request).await {
                Ok(response) => {
                    info!("Time block for task {:?} saved; reloading page", task_id);
                    page.reload();
                    SubmissionOutcome::Acknowledged(response)
                }
                Err(e) => {
                    error!("Time block for task {:?} was not saved: {}", task_id, e);
                    SubmissionOutcome::Failed(e)
                }
            }
        })
    }

    /// Current time at the millisecond precision the wire format carries
    fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    pub async fn is_tracking(&self) -> bool {
        self.state.lock().await.is_tracking()
    }

    /// When the running session began, if one is running
    pub async fn started_at(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.active().map(|s| s.started_at)
    }
}
