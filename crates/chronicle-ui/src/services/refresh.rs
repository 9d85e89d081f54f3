//! Single-flight coordinator for token refresh.
//!
//! # Design
//! - Exactly one refresh call runs no matter how many requests hit a 401
//!   together; the first caller leads, the rest park on oneshot receivers.
//! - `complete` always clears the in-flight flag, success or failure, so a
//!   failed refresh never wedges the client.
//! - Pure single-threaded state behind `Rc<RefCell<_>>`; the browser event
//!   loop is the only executor and channels resolve synchronously after
//!   `complete`, which keeps this testable off-target.

use std::cell::RefCell;
use std::rc::Rc;

use chronicle_api_models::ApiError;
use futures::channel::oneshot;

/// What a 401-handling caller should do next.
pub enum BeginOutcome {
    /// This caller owns the refresh: perform it, then call
    /// [`RefreshGate::complete`].
    Leader,
    /// A refresh is already running; await the shared result.
    Follower(oneshot::Receiver<Result<String, ApiError>>),
}

#[derive(Default)]
struct GateInner {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Result<String, ApiError>>>,
}

/// Shared handle coordinating refresh attempts across concurrent requests.
#[derive(Clone, Default)]
pub struct RefreshGate {
    inner: Rc<RefCell<GateInner>>,
}

impl RefreshGate {
    /// Create a gate with no refresh in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the refresh or join the one already running.
    #[must_use]
    pub fn begin(&self) -> BeginOutcome {
        let mut inner = self.inner.borrow_mut();
        if inner.in_flight {
            let (tx, rx) = oneshot::channel();
            inner.waiters.push(tx);
            BeginOutcome::Follower(rx)
        } else {
            inner.in_flight = true;
            BeginOutcome::Leader
        }
    }

    /// Publish the leader's result to every parked follower and reopen the
    /// gate. Followers that dropped their receiver are skipped.
    pub fn complete(&self, outcome: &Result<String, ApiError>) {
        let waiters = {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight = false;
            std::mem::take(&mut inner.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }

    /// Whether a refresh is currently running.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.inner.borrow().in_flight
    }
}

/// Whether a failed request should trigger a refresh-and-retry cycle.
///
/// Only the first 401 of a request qualifies; a request that already
/// retried once fails through to the caller.
#[must_use]
pub const fn should_refresh(status: u16, retried: bool) -> bool {
    status == 401 && !retried
}

#[cfg(test)]
mod tests {
    use super::{BeginOutcome, RefreshGate, should_refresh};
    use chronicle_api_models::ApiError;

    fn follower(gate: &RefreshGate) -> futures::channel::oneshot::Receiver<Result<String, ApiError>> {
        match gate.begin() {
            BeginOutcome::Follower(rx) => rx,
            BeginOutcome::Leader => panic!("expected a follower"),
        }
    }

    #[test]
    fn first_caller_leads_and_later_callers_follow() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.begin(), BeginOutcome::Leader));
        assert!(gate.in_flight());
        assert!(matches!(gate.begin(), BeginOutcome::Follower(_)));
        assert!(matches!(gate.begin(), BeginOutcome::Follower(_)));
    }

    #[test]
    fn success_fans_the_token_out_to_every_follower() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.begin(), BeginOutcome::Leader));
        let mut receivers: Vec<_> = (0..3).map(|_| follower(&gate)).collect();

        gate.complete(&Ok("fresh-token".to_string()));
        assert!(!gate.in_flight());
        for rx in &mut receivers {
            let token = rx
                .try_recv()
                .ok()
                .flatten()
                .and_then(Result::ok);
            assert_eq!(token.as_deref(), Some("fresh-token"));
        }
    }

    #[test]
    fn failure_rejects_every_follower_and_reopens_the_gate() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.begin(), BeginOutcome::Leader));
        let mut rx = follower(&gate);

        gate.complete(&Err(ApiError::Api {
            status: 401,
            message: "refresh token expired".to_string(),
        }));
        assert!(!gate.in_flight(), "failure must clear the in-flight flag");
        let outcome = rx.try_recv().ok().flatten();
        assert!(matches!(outcome, Some(Err(_))));

        // The next 401 can start a fresh refresh.
        assert!(matches!(gate.begin(), BeginOutcome::Leader));
        gate.complete(&Ok("t2".to_string()));
    }

    #[test]
    fn dropped_followers_do_not_block_completion() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.begin(), BeginOutcome::Leader));
        drop(follower(&gate));
        gate.complete(&Ok("token".to_string()));
        assert!(!gate.in_flight());
    }

    #[test]
    fn only_an_unretried_401_triggers_refresh() {
        assert!(should_refresh(401, false));
        assert!(!should_refresh(401, true));
        assert!(!should_refresh(403, false));
        assert!(!should_refresh(500, false));
    }
}
