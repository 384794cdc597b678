//! # Bounded status polling with an explicit cancellation handle
//!
//! The payment and appointment result pages do not know the final outcome when they
//! load: the payment gateway notifies the backend asynchronously. They poll the
//! backend's status resource until it settles.
//!
//! ## Loop
//!
//! [`run_poll`] issues one request per attempt and reports every result through a
//! callback as a [`PollUpdate`]:
//!
//! 1. An empty order id finishes immediately with [`StatusView::NotFound`], no request.
//! 2. A 404 ([`FetchOutcome::NotFound`]) finishes immediately, bypassing the loop.
//! 3. A settled snapshot (either field non-empty) finishes.
//! 4. An inconclusive snapshot or a failed request is retried after
//!    [`PollPolicy::interval`], until [`PollPolicy::max_attempts`] requests were made.
//!
//! A request is only scheduled once the previous one has settled, so at most one is
//! ever in flight per loop.
//!
//! ## Cancellation
//!
//! [`start_poll`] wraps the loop in [`futures::future::Abortable`] and returns the
//! future together with a [`PollHandle`]. Cancelling (or dropping) the handle stops
//! the loop at its next suspension point: no further request is issued and no further
//! update is delivered. [`PollSlot`] holds the handle for the current order id and
//! cancels the previous one whenever a new poll replaces it.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::status::{StatusSnapshot, StatusView};

/// Spacing between two attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Attempt ceiling; with the default interval about 30 seconds in total.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of one status request.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Found(StatusSnapshot),
    NotFound,
    Failed(String),
}

/// Anything that can look up the status of an order id.
pub trait StatusSource {
    fn fetch_status(&self, order_id: &str) -> impl Future<Output = FetchOutcome>;
}

/// One observation delivered to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PollUpdate {
    /// The order id this update belongs to.
    pub order_id: String,
    /// 1-based number of the request that produced it (0 when no request was made).
    pub attempt: u32,
    pub view: StatusView,
    pub snapshot: Option<StatusSnapshot>,
    /// No further request will be issued.
    pub finished: bool,
}

/// Drive the poll loop to completion. Returns the last update.
pub async fn run_poll<S, F>(
    source: &S,
    order_id: &str,
    policy: PollPolicy,
    mut on_update: F,
) -> PollUpdate
where
    S: StatusSource + ?Sized,
    F: FnMut(PollUpdate),
{
    let order_id = order_id.trim();
    if order_id.is_empty() {
        let update = PollUpdate {
            order_id: String::new(),
            attempt: 0,
            view: StatusView::NotFound,
            snapshot: None,
            finished: true,
        };
        on_update(update.clone());
        return update;
    }

    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let (view, snapshot, settled) = match source.fetch_status(order_id).await {
            FetchOutcome::NotFound => (StatusView::NotFound, None, true),
            FetchOutcome::Failed(message) => {
                tracing::warn!(order_id, attempt, "status request failed: {message}");
                (StatusView::Error(message), None, false)
            }
            FetchOutcome::Found(snapshot) => {
                let settled = snapshot.is_settled();
                (StatusView::from_snapshot(&snapshot), Some(snapshot), settled)
            }
        };

        let update = PollUpdate {
            order_id: order_id.to_string(),
            attempt,
            view,
            snapshot,
            finished: settled || attempt >= max_attempts,
        };
        on_update(update.clone());

        if update.finished {
            if !settled {
                tracing::info!(order_id, attempt, "status polling gave up at the attempt ceiling");
            }
            return update;
        }

        crate::sleep(policy.interval).await;
    }
}

/// Cancels a running poll when [`cancel`](PollHandle::cancel)led or dropped.
#[derive(Debug)]
pub struct PollHandle {
    order_id: String,
    abort: AbortHandle,
}

impl PollHandle {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            tracing::debug!(order_id = %self.order_id, "cancelling status poll");
            self.abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Build a cancellable poll. The caller spawns the returned future on its executor;
/// it resolves to `None` when cancelled.
pub fn start_poll<S, F>(
    source: S,
    order_id: String,
    policy: PollPolicy,
    on_update: F,
) -> (PollHandle, impl Future<Output = Option<PollUpdate>>)
where
    S: StatusSource,
    F: FnMut(PollUpdate),
{
    let (abort, registration) = AbortHandle::new_pair();
    let handle = PollHandle {
        order_id: order_id.clone(),
        abort,
    };
    let task = Abortable::new(
        async move { run_poll(&source, &order_id, policy, on_update).await },
        registration,
    );
    (handle, async move { task.await.ok() })
}

/// Holds the poll for the order id currently on screen.
#[derive(Debug, Default)]
pub struct PollSlot {
    current: Option<PollHandle>,
}

impl PollSlot {
    /// Install a new poll, cancelling the previous one first.
    pub fn replace(&mut self, handle: PollHandle) {
        self.cancel();
        self.current = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }

    pub fn current_order_id(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|h| !h.is_cancelled())
            .map(PollHandle::order_id)
    }

    /// Whether an update for `order_id` may still be applied.
    pub fn accepts(&self, order_id: &str) -> bool {
        self.current_order_id() == Some(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Scripted responses per call; falls back to an inconclusive snapshot.
    #[derive(Default)]
    struct ScriptedSource {
        responses: RefCell<VecDeque<FetchOutcome>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<FetchOutcome>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::default(),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl StatusSource for ScriptedSource {
        async fn fetch_status(&self, order_id: &str) -> FetchOutcome {
            self.calls.borrow_mut().push(order_id.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| FetchOutcome::Found(StatusSnapshot::new(order_id, "", "")))
        }
    }

    impl<T: StatusSource> StatusSource for Rc<T> {
        fn fetch_status(&self, order_id: &str) -> impl Future<Output = FetchOutcome> {
            self.as_ref().fetch_status(order_id)
        }
    }

    fn fast_policy() -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(2),
            max_attempts: 15,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_at_attempt_ceiling() {
        let source = ScriptedSource::default();
        let mut updates = Vec::new();
        let started = tokio::time::Instant::now();

        let last = run_poll(&source, "ORD123", fast_policy(), |u| updates.push(u)).await;

        assert_eq!(source.call_count(), 15);
        assert_eq!(updates.len(), 15);
        assert!(last.finished);
        assert_eq!(last.attempt, 15);
        assert_eq!(last.view, StatusView::Pending { redirect_url: None });
        assert!(updates[..14].iter().all(|u| !u.finished));
        // 14 sleeps between 15 requests
        assert_eq!(started.elapsed(), Duration::from_secs(28));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_once_status_is_populated() {
        let source = ScriptedSource::new(vec![
            FetchOutcome::Found(StatusSnapshot::new("ORD123", "", "")),
            FetchOutcome::Failed("HTTP 502".into()),
            FetchOutcome::Found(StatusSnapshot::new("ORD123", "processing", "paid")),
        ]);
        let mut views = Vec::new();

        let last = run_poll(&source, "ORD123", fast_policy(), |u| views.push(u.view)).await;

        assert_eq!(source.call_count(), 3);
        assert_eq!(last.view, StatusView::Success);
        assert_eq!(
            views,
            vec![
                StatusView::Pending { redirect_url: None },
                StatusView::Error("HTTP 502".into()),
                StatusView::Success,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_are_retried_up_to_ceiling() {
        let source = ScriptedSource::new(
            (0..20).map(|_| FetchOutcome::Failed("connection refused".into())).collect(),
        );
        let last = run_poll(&source, "ORD123", fast_policy(), |_| {}).await;
        assert_eq!(source.call_count(), 15);
        assert_eq!(last.view, StatusView::Error("connection refused".into()));
        assert!(last.finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_bypasses_loop() {
        let source = ScriptedSource::new(vec![FetchOutcome::NotFound]);
        let last = run_poll(&source, "ORD404", fast_policy(), |_| {}).await;
        assert_eq!(source.call_count(), 1);
        assert_eq!(last.view, StatusView::NotFound);
        assert!(last.finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_order_id_makes_no_request() {
        let source = ScriptedSource::default();
        let last = run_poll(&source, "   ", fast_policy(), |_| {}).await;
        assert_eq!(source.call_count(), 0);
        assert_eq!(last.view, StatusView::NotFound);
        assert_eq!(last.attempt, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_requests_and_updates() {
        let source = Rc::new(ScriptedSource::default());
        let updates = Rc::new(RefCell::new(Vec::new()));

        let sink = updates.clone();
        let (handle, task) = start_poll(source.clone(), "ORD123".to_string(), fast_policy(), move |u| {
            sink.borrow_mut().push(u)
        });

        let canceller = async {
            // first request at t=0, second at t=2, third would be at t=4
            tokio::time::sleep(Duration::from_secs(3)).await;
            handle.cancel();
        };
        let (result, ()) = tokio::join!(task, canceller);

        assert!(result.is_none());
        assert!(handle.is_cancelled());
        assert_eq!(source.call_count(), 2);
        assert_eq!(updates.borrow().len(), 2);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_order_id_cancels_stale_poll() {
        let source = Rc::new(ScriptedSource::default());
        let applied = Rc::new(RefCell::new(Vec::<String>::new()));
        let slot = Rc::new(RefCell::new(PollSlot::default()));

        let spawn_poll = |order_id: &str| {
            let applied = applied.clone();
            let guard = slot.clone();
            let (handle, task) = start_poll(source.clone(), order_id.to_string(), fast_policy(), move |u| {
                if guard.borrow().accepts(&u.order_id) {
                    applied.borrow_mut().push(u.order_id);
                }
            });
            slot.borrow_mut().replace(handle);
            task
        };

        let first = spawn_poll("OLD");
        let switch = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let second = spawn_poll("NEW");
            let unmount = async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                slot.borrow_mut().cancel();
            };
            tokio::join!(second, unmount).0
        };
        let (first_result, second_result) = tokio::join!(first, switch);

        assert!(first_result.is_none());
        assert!(second_result.is_none());
        let calls = source.calls.borrow();
        // OLD: t=0 only. NEW: t=1, t=3, t=5, cancelled at t=6.
        assert_eq!(calls.iter().filter(|id| *id == "OLD").count(), 1);
        assert_eq!(calls.iter().filter(|id| *id == "NEW").count(), 3);
        assert_eq!(
            *applied.borrow(),
            vec!["OLD".to_string(), "NEW".into(), "NEW".into(), "NEW".into()]
        );
    }

    #[test]
    fn test_slot_tracks_current_order() {
        let source = ScriptedSource::default();
        let (handle, _task) = start_poll(source, "ORD123".to_string(), PollPolicy::default(), |_| {});
        let mut slot = PollSlot::default();
        slot.replace(handle);
        assert_eq!(slot.current_order_id(), Some("ORD123"));
        assert!(slot.accepts("ORD123"));
        assert!(!slot.accepts("ORD999"));
        slot.cancel();
        assert_eq!(slot.current_order_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let source = Rc::new(ScriptedSource::default());
        let (handle, task) = start_poll(source.clone(), "ORD123".to_string(), fast_policy(), |_| {});

        let dropper = async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            drop(handle);
        };
        let (result, ()) = tokio::join!(task, dropper);

        assert!(result.is_none());
        assert_eq!(source.call_count(), 2);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(source.call_count(), 2);
    }
}
