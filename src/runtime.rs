//! Cooperative driver connecting the session to a search service.
//!
//! [`SessionRuntime`] is the single thread of control for one session. It
//! applies events through the handler, executes the actions they return, and
//! holds at most one in-flight search future. The future is polled only when
//! the caller awaits [`SessionRuntime::settle`], typically inside a
//! `tokio::select!` next to user input, so intents keep applying while a
//! search is outstanding.
//!
//! ```text
//! intent ──► handle ──► handle_event ──► Action::Search ──► in_flight
//!                                                              │
//! render ◄── handle ◄── Event::SearchCompleted ◄──── settle ◄──┘
//! ```
//!
//! There is no cancellation and no timeout: a started search always runs to
//! completion or failure.

use crate::app::{handle_event, Action, Event, SearchSession};
use crate::service::{perform_search, SearchService};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Drives one [`SearchSession`] against a [`SearchService`].
pub struct SessionRuntime<S: SearchService + 'static> {
    session: SearchSession,
    service: Arc<S>,
    in_flight: Option<BoxFuture<'static, Event>>,
}

impl<S: SearchService + 'static> SessionRuntime<S> {
    #[must_use]
    pub fn new(session: SearchSession, service: Arc<S>) -> Self {
        Self {
            session,
            service,
            in_flight: None,
        }
    }

    /// Read access for the rendering surface.
    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Whether a search future is waiting to be settled.
    #[must_use]
    pub const fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies an event and executes the resulting actions.
    ///
    /// Returns whether the caller should re-render. Searches are only started
    /// here, not awaited; call [`SessionRuntime::settle`] to resume them.
    pub fn handle(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.session, event);
        for action in actions {
            self.execute(action);
        }
        render
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::Search(request) => {
                // the session refuses a dispatch while Searching
                debug_assert!(self.in_flight.is_none(), "second search emitted while one is in flight");

                let service = Arc::clone(&self.service);
                self.in_flight = Some(Box::pin(async move {
                    let outcome = perform_search(service.as_ref(), &request).await;
                    Event::SearchCompleted {
                        generation: request.generation,
                        outcome,
                    }
                }));
            }
        }
    }

    /// Waits for the in-flight search and applies its completion.
    ///
    /// Returns `false` immediately when nothing is in flight. Cancel-safe:
    /// dropping the returned future before it finishes leaves the search in
    /// flight for the next call.
    pub async fn settle(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        let completion = in_flight.await;
        self.in_flight = None;
        self.handle(completion)
    }
}

impl<S: SearchService + 'static> std::fmt::Debug for SessionRuntime<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRuntime")
            .field("session", &self.session)
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PageSize, SearchMode};
    use crate::domain::{NcoSearchError, Occupation, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct GatedService {
        calls: AtomicUsize,
        gate: Notify,
        fail: bool,
        semantic_count: usize,
    }

    impl GatedService {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchService for GatedService {
        async fn exact_search(&self, query: &str) -> Result<Vec<Occupation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.fail {
                return Err(NcoSearchError::Decode {
                    endpoint: "/exact_search".to_string(),
                    message: "expected value at line 1 column 1".to_string(),
                });
            }
            Ok(vec![Occupation::new(format!("Combat {query}"), "31-9099.01", "31-9099.00")])
        }

        async fn semantic_search(&self, _query: &str, _limit: usize) -> Result<Vec<Occupation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok((0..self.semantic_count)
                .map(|i| Occupation::new(format!("Role {i}"), format!("{i:02}-2000.00"), "").with_score(0.5))
                .collect())
        }
    }

    fn runtime(service: &Arc<GatedService>) -> SessionRuntime<GatedService> {
        SessionRuntime::new(SearchSession::default(), Arc::clone(service))
    }

    #[tokio::test]
    async fn double_dispatch_calls_service_once() {
        let service = Arc::new(GatedService::default());
        let mut runtime = runtime(&service);

        runtime.handle(Event::SetQuery("medic".to_string()));
        assert!(runtime.handle(Event::Dispatch));
        assert!(!runtime.handle(Event::Dispatch));

        service.gate.notify_one();
        assert!(runtime.settle().await);

        assert_eq!(service.calls(), 1);
        let snapshot = runtime.session().snapshot();
        assert_eq!(snapshot.result_count, 1);
        assert_eq!(snapshot.visible_rows[0].occupation.code_2015, "31-9099.01");
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn intents_apply_while_search_is_pending() {
        let service = Arc::new(GatedService::default());
        let mut runtime = runtime(&service);
        runtime.handle(Event::Dispatch);

        let pending = tokio::time::timeout(std::time::Duration::from_millis(20), runtime.settle()).await;
        assert!(pending.is_err());
        assert!(runtime.has_in_flight());

        runtime.handle(Event::SetMode(SearchMode::Semantic));
        runtime.handle(Event::SetQuery("army doctor".to_string()));
        let snapshot = runtime.session().snapshot();
        assert!(snapshot.loading);
        assert_eq!(snapshot.mode, SearchMode::Semantic);

        assert!(!runtime.handle(Event::Dispatch));

        service.gate.notify_one();
        assert!(runtime.settle().await);
        assert_eq!(service.calls(), 1);
        assert_eq!(runtime.session().results().len(), 1);
    }

    #[tokio::test]
    async fn failed_search_settles_empty() {
        let service = Arc::new(GatedService { fail: true, ..GatedService::default() });
        let mut runtime = runtime(&service);

        runtime.handle(Event::Dispatch);
        service.gate.notify_one();
        runtime.settle().await;

        let snapshot = runtime.session().snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.has_searched);
        assert_eq!(snapshot.result_count, 0);
        assert!(!runtime.has_in_flight());
    }

    #[tokio::test]
    async fn semantic_results_paginate_by_selected_size() {
        let service = Arc::new(GatedService { semantic_count: 25, ..GatedService::default() });
        let mut runtime = runtime(&service);

        runtime.handle(Event::SetMode(SearchMode::Semantic));
        runtime.handle(Event::SetPageSize(PageSize::Ten));
        runtime.handle(Event::Dispatch);
        service.gate.notify_one();
        runtime.settle().await;
        runtime.handle(Event::SetPage(3));

        let snapshot = runtime.session().snapshot();
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.visible_rows.len(), 5);
    }

    #[tokio::test]
    async fn settle_without_search_returns_false() {
        let service = Arc::new(GatedService::default());
        let mut runtime = runtime(&service);
        assert!(!runtime.settle().await);
    }
}
