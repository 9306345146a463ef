//! Polling waiters.
//!
//! A [`Waiter`] repeatedly invokes one operation and classifies each outcome
//! with an acceptor into [`WaiterState::Pending`], [`WaiterState::Success`] or
//! [`WaiterState::Failure`]. Polls are spaced by a fixed delay; when the next
//! delay would run past the timeout the waiter gives up with
//! [`SdkError::WaiterTimeout`].

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use ruststack_sdk_core::SdkError;
use tokio::time::Instant;
use tracing::{debug, info};

/// State observed after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaiterState {
    /// Condition not reached yet; poll again.
    Pending,
    /// Condition reached.
    Success,
    /// Condition can no longer be reached.
    Failure,
}

impl WaiterState {
    /// Whether polling stops in this state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for WaiterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        })
    }
}

/// Fixed delay between polls and overall timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Delay between two polls.
    pub delay: Duration,
    /// Wall-clock budget for the whole wait.
    pub timeout: Duration,
}

impl WaiterConfig {
    /// Create a waiter configuration.
    #[must_use]
    pub const fn new(delay: Duration, timeout: Duration) -> Self {
        Self { delay, timeout }
    }
}

/// Classifies one poll outcome.
pub type Acceptor<T> = fn(&Result<T, SdkError>) -> WaiterState;

type PollFn<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T, SdkError>> + Send + Sync>;

/// A polling state machine over one operation.
pub struct Waiter<T> {
    name: &'static str,
    config: WaiterConfig,
    acceptor: Acceptor<T>,
    poll: PollFn<T>,
    state: Option<WaiterState>,
    last_outcome: Option<String>,
    attempts: u32,
}

impl<T> fmt::Debug for Waiter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waiter")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Waiter<T> {
    /// Create a waiter named `name` that polls with `poll`.
    pub fn new<F, Fut>(
        name: &'static str,
        config: WaiterConfig,
        acceptor: Acceptor<T>,
        poll: F,
    ) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        Self {
            name,
            config,
            acceptor,
            poll: Box::new(move || Box::pin(poll())),
            state: None,
            last_outcome: None,
            attempts: 0,
        }
    }

    /// Replace the delay and timeout.
    #[must_use]
    pub fn with_config(mut self, config: WaiterConfig) -> Self {
        self.config = config;
        self
    }

    /// Waiter name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Delay and timeout in effect.
    #[must_use]
    pub fn config(&self) -> WaiterConfig {
        self.config
    }

    /// State observed by the last poll, `None` before the first poll.
    #[must_use]
    pub fn state(&self) -> Option<WaiterState> {
        self.state
    }

    /// Number of polls issued so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Poll once and return the new state.
    ///
    /// Once a terminal state is reached the waiter does not poll again.
    pub async fn refresh_state(&mut self) -> WaiterState {
        if let Some(state) = self.state.filter(|s| s.is_terminal()) {
            return state;
        }

        self.attempts += 1;
        let outcome = (self.poll)().await;
        let state = (self.acceptor)(&outcome);
        self.last_outcome = Some(match &outcome {
            Ok(_) => "operation succeeded".to_owned(),
            Err(err) => err.to_string(),
        });
        debug!(
            waiter = self.name,
            attempt = self.attempts,
            state = %state,
            outcome = self.last_outcome.as_deref().unwrap_or_default(),
            "waiter polled"
        );
        self.state = Some(state);
        state
    }

    /// Poll until success, failure, or timeout.
    pub async fn wait(mut self) -> Result<(), SdkError> {
        let started = Instant::now();
        loop {
            match self.refresh_state().await {
                WaiterState::Success => {
                    info!(waiter = self.name, attempts = self.attempts, "waiter succeeded");
                    return Ok(());
                }
                WaiterState::Failure => {
                    return Err(SdkError::WaiterFailed {
                        waiter: self.name,
                        reason: self.last_outcome.take().unwrap_or_default(),
                    });
                }
                WaiterState::Pending => {}
            }

            if started.elapsed() + self.config.delay > self.config.timeout {
                info!(waiter = self.name, attempts = self.attempts, "waiter timed out");
                return Err(SdkError::WaiterTimeout {
                    waiter: self.name,
                    timeout: self.config.timeout,
                });
            }
            tokio::time::sleep(self.config.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use ruststack_sdk_core::ServiceError;

    use super::*;

    fn status_acceptor(outcome: &Result<u16, SdkError>) -> WaiterState {
        match outcome {
            Ok(200) => WaiterState::Success,
            Ok(_) => WaiterState::Pending,
            Err(err) if err.status() == Some(404) => WaiterState::Pending,
            Err(_) => WaiterState::Failure,
        }
    }

    fn scripted_waiter(
        outcomes: Vec<Result<u16, SdkError>>,
        config: WaiterConfig,
    ) -> (Waiter<u16>, Arc<Mutex<u32>>) {
        let outcomes = Arc::new(Mutex::new(VecDeque::from(outcomes)));
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = calls.clone();
        let waiter = Waiter::new("TestWaiter", config, status_acceptor, move || {
            *calls_clone.lock() += 1;
            let next = outcomes
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(SdkError::from(ServiceError::new(404, "NotFound"))));
            async move { next }
        });
        (waiter, calls)
    }

    fn not_found() -> Result<u16, SdkError> {
        Err(SdkError::from(ServiceError::new(404, "NotFound")))
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_succeed_after_pending_polls() {
        let config = WaiterConfig::new(Duration::from_secs(5), Duration::from_secs(100));
        let (waiter, calls) = scripted_waiter(vec![not_found(), not_found(), Ok(200)], config);

        waiter.wait().await.unwrap();
        assert_eq!(*calls.lock(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_fail_on_unexpected_error() {
        let config = WaiterConfig::new(Duration::from_secs(5), Duration::from_secs(100));
        let (waiter, _) = scripted_waiter(
            vec![
                not_found(),
                Err(SdkError::from(ServiceError::new(500, "InternalError"))),
            ],
            config,
        );

        let err = waiter.wait().await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::WaiterFailed { waiter: "TestWaiter", ref reason } if reason.contains("InternalError")
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_time_out_when_never_satisfied() {
        let config = WaiterConfig::new(Duration::from_secs(5), Duration::from_secs(20));
        let (waiter, calls) = scripted_waiter(vec![], config);

        let started = Instant::now();
        let err = waiter.wait().await.unwrap_err();

        assert!(matches!(err, SdkError::WaiterTimeout { timeout, .. } if timeout == Duration::from_secs(20)));
        // polls at t = 0, 5, 10, 15, 20; the next delay would pass 20s
        assert_eq!(*calls.lock(), 5);
        assert!(started.elapsed() <= Duration::from_secs(20));
    }

    #[tokio::test]
    async fn test_should_not_poll_again_after_terminal_state() {
        let config = WaiterConfig::new(Duration::from_secs(1), Duration::from_secs(10));
        let (mut waiter, calls) = scripted_waiter(vec![Ok(200), not_found()], config);

        assert_eq!(waiter.state(), None);
        assert_eq!(waiter.refresh_state().await, WaiterState::Success);
        assert_eq!(waiter.refresh_state().await, WaiterState::Success);
        assert_eq!(*calls.lock(), 1);
        assert_eq!(waiter.attempts(), 1);
    }

    #[test]
    fn test_should_display_states() {
        assert_eq!(WaiterState::Pending.to_string(), "PENDING");
        assert!(WaiterState::Failure.is_terminal());
        assert!(!WaiterState::Pending.is_terminal());
    }
}
