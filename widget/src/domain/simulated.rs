//! Timer-backed simulated asynchronous source.
//!
//! Stands in for a real asynchronous data source: a fixed delay followed by
//! a terminal settle. State machine: {pending} -> {resolved} or
//! {pending} -> {rejected}, terminal either way, no retry, no cancellation.
//! Two consumers observe the same machine, one through completion callbacks
//! and one through suspend/resume; both produce identical observable output
//! for the same outcome.

use std::time::Duration;

use tracing::{error, info};

/// Fixed resolution delay mirroring the original two-second timer.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Record the simulated source resolves with.
///
/// Constructed once inside the source; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Fixed demo username.
    pub username: String,
    /// Fixed demo age in years.
    pub age: u8,
}

impl UserRecord {
    fn fixed() -> Self {
        Self {
            username: "John_doe".to_owned(),
            age: 25,
        }
    }
}

/// Rejection raised on the source's failure branch.
///
/// Surfaced to the diagnostic log only, never to the display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Failed to fetch data")]
pub struct FetchRejected;

/// Terminal outcome the source settles on once its delay elapses.
///
/// The rejection branch stays reachable on purpose: a real replacement for
/// this source exercises both, so consumers must handle both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatedOutcome {
    /// Resolve with the fixed user record.
    #[default]
    Resolve,
    /// Reject with the fixed error.
    Reject,
}

/// Simulated source suspending for a fixed delay before settling.
#[derive(Debug, Clone)]
pub struct SimulatedUserSource {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl Default for SimulatedUserSource {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, SimulatedOutcome::Resolve)
    }
}

impl SimulatedUserSource {
    /// Build a source with an explicit delay and outcome.
    pub fn new(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }

    /// Suspend for the configured delay, then settle.
    ///
    /// # Errors
    ///
    /// Returns [`FetchRejected`] when the source is configured to reject.
    pub async fn fetch_user_record(&self) -> Result<UserRecord, FetchRejected> {
        tokio::time::sleep(self.delay).await;
        match self.outcome {
            SimulatedOutcome::Resolve => Ok(UserRecord::fixed()),
            SimulatedOutcome::Reject => Err(FetchRejected),
        }
    }

    /// Observe one settlement through completion callbacks.
    ///
    /// Exactly one of the callbacks runs, matching the terminal two-state
    /// machine.
    pub async fn observe_with_callbacks(
        &self,
        on_resolved: impl FnOnce(&UserRecord),
        on_rejected: impl FnOnce(&FetchRejected),
    ) {
        match self.fetch_user_record().await {
            Ok(record) => on_resolved(&record),
            Err(rejection) => on_rejected(&rejection),
        }
    }

    /// Observe one settlement through suspend/resume with a guarded error
    /// path.
    ///
    /// Logs the same lines as the callback demo consumer and returns the
    /// resolved record so callers can compare observations across consumer
    /// styles; a rejection is consumed here.
    pub async fn observe_with_await(&self) -> Option<UserRecord> {
        match self.fetch_user_record().await {
            Ok(record) => {
                log_resolved(&record);
                Some(record)
            }
            Err(rejection) => {
                log_rejected(&rejection);
                None
            }
        }
    }

    /// Run both demo consumers against this source, as the original demo
    /// does at load time.
    pub async fn run_demo(&self) {
        self.observe_with_callbacks(log_resolved, log_rejected).await;
        self.observe_with_await().await;
    }
}

fn log_resolved(record: &UserRecord) {
    info!(username = %record.username, age = record.age, "user record resolved");
}

fn log_rejected(rejection: &FetchRejected) {
    error!(error = %rejection, "user record fetch rejected");
}
