// file: src/poller/status_poller.rs
// description: background processing status poller with owned lifecycle handle
// reference: async polling over the processing-status endpoint

use crate::error::Result;
use crate::models::{ProcessingStatus, StatusReport};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Where status reports come from. `ApiClient` is the production
/// implementation; tests script their own.
pub trait StatusSource: Send + Sync + 'static {
    fn fetch_status(&self, document_id: &str) -> impl Future<Output = Result<StatusReport>> + Send;
}

/// The progress tuple observable by the UI while a job runs.
#[derive(Debug, Clone, PartialEq)]
pub struct JobProgress {
    pub status: ProcessingStatus,
    pub progress_percent: u8,
    pub is_processing: bool,
    pub error_detail: Option<String>,
}

impl JobProgress {
    /// Initial state before the first poll response arrives.
    fn pending() -> Self {
        Self {
            status: ProcessingStatus::Unknown,
            progress_percent: 0,
            is_processing: true,
            error_detail: None,
        }
    }

    /// State of a poller that was never started (no document id).
    fn idle() -> Self {
        Self {
            status: ProcessingStatus::Unknown,
            progress_percent: 0,
            is_processing: false,
            error_detail: None,
        }
    }

    /// Derive the next progress tuple from a poll response. `error` has
    /// no percent of its own, so the last derived value is retained.
    fn from_report(report: StatusReport, last_percent: u8) -> Self {
        let status = report.status;
        Self {
            status,
            progress_percent: status.progress_percent().unwrap_or(last_percent),
            is_processing: !status.is_terminal(),
            error_detail: if status == ProcessingStatus::Error {
                report.error
            } else {
                None
            },
        }
    }
}

/// Issues one immediate status query and then a fixed-interval schedule
/// until a terminal status is observed.
pub struct StatusPoller<S> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn new(source: Arc<S>, interval: Duration) -> Self {
        Self { source, interval }
    }

    /// Start polling for `document_id`. A blank id is a no-op: the
    /// returned handle is inert and no query is ever issued.
    pub fn start(&self, document_id: &str) -> PollerHandle {
        if document_id.trim().is_empty() {
            debug!("No document id given, poller not started");
            return PollerHandle::inert();
        }

        let (tx, rx) = watch::channel(JobProgress::pending());
        let source = Arc::clone(&self.source);
        let interval = self.interval;
        let document_id = document_id.to_string();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last_percent = 0u8;

            loop {
                ticker.tick().await;

                match source.fetch_status(&document_id).await {
                    Ok(report) => {
                        let progress = JobProgress::from_report(report, last_percent);
                        last_percent = progress.progress_percent;
                        let terminal = !progress.is_processing;

                        if tx.send(progress).is_err() {
                            break;
                        }

                        if terminal {
                            debug!(document_id = %document_id, "Terminal status observed, polling stopped");
                            break;
                        }
                    }
                    // A failed poll attempt is transient: keep the
                    // schedule running, only an explicit error status
                    // terminates the job.
                    Err(e) => {
                        warn!(document_id = %document_id, "Status poll failed, will retry: {}", e);
                    }
                }
            }
        });

        PollerHandle {
            progress: rx,
            task: Some(task),
        }
    }
}

/// Owned handle to one polling schedule. Dropping it cancels the timer;
/// a schedule must never outlive the view that created it.
pub struct PollerHandle {
    progress: watch::Receiver<JobProgress>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    fn inert() -> Self {
        let (_tx, rx) = watch::channel(JobProgress::idle());
        Self {
            progress: rx,
            task: None,
        }
    }

    /// Latest observed progress.
    pub fn progress(&self) -> JobProgress {
        self.progress.borrow().clone()
    }

    /// A receiver for consumers that want every update.
    pub fn subscribe(&self) -> watch::Receiver<JobProgress> {
        self.progress.clone()
    }

    /// Wait for the job to reach a terminal state (or for an inert
    /// handle, return immediately).
    pub async fn wait_until_terminal(&mut self) -> JobProgress {
        loop {
            let current = self.progress.borrow().clone();
            if !current.is_processing {
                return current;
            }
            if self.progress.changed().await.is_err() {
                return self.progress.borrow().clone();
            }
        }
    }

    /// Explicit cancellation of the recurring schedule.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether a polling task was actually scheduled.
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedSource {
        calls: AtomicUsize,
        script: Mutex<VecDeque<Result<StatusReport>>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<StatusReport>>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                script: Mutex::new(script.into()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl StatusSource for ScriptedSource {
        fn fetch_status(
            &self,
            _document_id: &str,
        ) -> impl Future<Output = Result<StatusReport>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop_front();
            async move {
                next.unwrap_or_else(|| {
                    Err(ClientError::Validation("script exhausted".to_string()))
                })
            }
        }
    }

    fn ok(status: ProcessingStatus) -> Result<StatusReport> {
        Ok(StatusReport {
            status,
            error: None,
        })
    }

    fn transport_err() -> Result<StatusReport> {
        Err(ClientError::Validation("connection refused".to_string()))
    }

    const INTERVAL: Duration = Duration::from_secs(3);

    #[tokio::test(start_paused = true)]
    async fn test_parsing_then_complete_stops_polling() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Parsing),
            ok(ProcessingStatus::Complete),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let mut updates = handle.subscribe();
        updates.changed().await.unwrap();
        let first = updates.borrow().clone();
        assert_eq!(first.status, ProcessingStatus::Parsing);
        assert_eq!(first.progress_percent, 25);
        assert!(first.is_processing);

        let last = handle.wait_until_terminal().await;
        assert_eq!(last.status, ProcessingStatus::Complete);
        assert_eq!(last.progress_percent, 100);
        assert!(!last.is_processing);
        assert_eq!(source.calls(), 2);

        // No third poll is ever issued once the terminal status landed.
        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_status_is_terminal_and_keeps_progress() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Parsing),
            Ok(StatusReport {
                status: ProcessingStatus::Error,
                error: Some("bad format".to_string()),
            }),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let last = handle.wait_until_terminal().await;
        assert_eq!(last.status, ProcessingStatus::Error);
        assert_eq!(last.error_detail.as_deref(), Some("bad format"));
        assert!(!last.is_processing);
        // Progress stops changing: the last derived percent is kept.
        assert_eq!(last.progress_percent, 25);

        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_document_id_never_polls() {
        let source = ScriptedSource::new(vec![ok(ProcessingStatus::Complete)]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);

        let mut empty = poller.start("");
        let mut blank = poller.start("   ");
        assert!(!empty.is_active());
        assert!(!blank.is_active());

        let progress = empty.wait_until_terminal().await;
        assert_eq!(progress.status, ProcessingStatus::Unknown);
        assert!(!progress.is_processing);
        blank.wait_until_terminal().await;

        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_does_not_stop_schedule() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Parsing),
            transport_err(),
            ok(ProcessingStatus::Analyzing),
            ok(ProcessingStatus::GeneratingVisualizations),
            ok(ProcessingStatus::Complete),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let last = handle.wait_until_terminal().await;
        assert_eq!(last.status, ProcessingStatus::Complete);
        // All five ticks ran despite the failed second attempt.
        assert_eq!(source.calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_status_treated_as_not_started() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Unknown),
            ok(ProcessingStatus::Complete),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let mut updates = handle.subscribe();
        updates.changed().await.unwrap();
        let first = updates.borrow().clone();
        assert_eq!(first.progress_percent, 0);
        assert!(first.is_processing);

        handle.wait_until_terminal().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_schedule() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Parsing),
            ok(ProcessingStatus::Parsing),
            ok(ProcessingStatus::Parsing),
            ok(ProcessingStatus::Parsing),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let handle = poller.start("42");

        let mut updates = handle.subscribe();
        updates.changed().await.unwrap();
        drop(handle);

        let calls_at_drop = source.calls();
        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(source.calls(), calls_at_drop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel_stops_schedule() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Uploaded),
            ok(ProcessingStatus::Uploaded),
            ok(ProcessingStatus::Uploaded),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let mut updates = handle.subscribe();
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow().progress_percent, 10);

        handle.cancel();
        assert!(!handle.is_active());

        let calls_at_cancel = source.calls();
        tokio::time::sleep(INTERVAL * 10).await;
        assert_eq!(source.calls(), calls_at_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_status_reports_are_tolerated() {
        let source = ScriptedSource::new(vec![
            ok(ProcessingStatus::Analyzing),
            ok(ProcessingStatus::Analyzing),
            ok(ProcessingStatus::Complete),
        ]);
        let poller = StatusPoller::new(Arc::clone(&source), INTERVAL);
        let mut handle = poller.start("42");

        let last = handle.wait_until_terminal().await;
        assert_eq!(last.progress_percent, 100);
        assert_eq!(source.calls(), 3);
    }
}
