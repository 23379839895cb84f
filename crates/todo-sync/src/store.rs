//! Synchronized State Store
//!
//! Single owner of the client state. All mutation goes through
//! [`Store::dispatch`]; readers get snapshots, either on demand or pushed
//! to subscribers after every dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::action::Action;
use crate::auth::{self, AuthState};
use crate::lists::{self, ListsState};
use crate::sequencer::{RequestKey, RequestSequencer, Ticket};
use crate::status::{self, StatusState};
use crate::tasks::{self, TasksState};

/// The whole client state tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    pub app: StatusState,
    pub auth: AuthState,
    pub lists: ListsState,
    pub tasks: TasksState,
}

/// Root reducer
pub fn reduce(state: &mut SyncState, action: &Action) {
    status::reduce(&mut state.app, action);
    auth::reduce(&mut state.auth, action);
    lists::reduce(&mut state.lists, action);
    tasks::reduce(&mut state.tasks, action);
}

type Listener = Rc<dyn Fn(&SyncState)>;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

#[derive(Default)]
struct Inner {
    state: SyncState,
    /// Bumped on every clear; completions from older epochs are dropped
    epoch: u64,
    sequencer: RequestSequencer,
    listeners: Vec<(Subscription, Listener)>,
    next_listener: usize,
}

/// Cheaply cloneable handle to the shared store
#[derive(Clone, Default)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and notify subscribers
    pub fn dispatch(&self, action: Action) {
        tracing::debug!("dispatch {}", action.name());

        let listeners = {
            let mut inner = self.inner.borrow_mut();
            reduce(&mut inner.state, &action);
            if matches!(action, Action::ClearAll) {
                inner.epoch += 1;
                inner.sequencer.reset();
            }
            if inner.listeners.is_empty() {
                return;
            }
            inner.listeners.iter().map(|(_, l)| l.clone()).collect::<Vec<Listener>>()
        };

        // Borrow released: listeners may read or dispatch. Re-read per
        // listener so one that dispatches never leaves the rest on older state.
        for listener in listeners {
            let snapshot = self.snapshot();
            listener(&snapshot);
        }
    }

    pub fn snapshot(&self) -> SyncState {
        self.inner.borrow().state.clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&SyncState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    pub fn subscribe(&self, listener: impl Fn(&SyncState) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = Subscription(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner.borrow_mut().listeners.retain(|(id, _)| *id != subscription);
    }

    pub fn epoch(&self) -> u64 {
        self.inner.borrow().epoch
    }

    /// Ticket for a request whose completion must not overwrite a newer one
    pub fn track(&self, key: RequestKey) -> Ticket {
        let mut inner = self.inner.borrow_mut();
        let epoch = inner.epoch;
        inner.sequencer.issue(Some(key), epoch)
    }

    /// Ticket for a request that only needs the epoch check
    pub fn untracked(&self) -> Ticket {
        let mut inner = self.inner.borrow_mut();
        let epoch = inner.epoch;
        inner.sequencer.issue(None, epoch)
    }

    /// Whether the ticket was issued in the current session
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.inner.borrow().epoch == ticket.epoch
    }

    /// Whether a successful completion should be applied
    pub fn settle(&self, ticket: &Ticket) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.epoch != ticket.epoch {
            return false;
        }
        let fresh = inner.sequencer.settle(ticket);
        if !fresh {
            tracing::debug!("dropping out-of-order completion for {:?}", ticket.key);
        }
        fresh
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("state", &inner.state)
            .field("epoch", &inner.epoch)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestStatus;
    use std::cell::Cell;

    #[test]
    fn test_subscribers_see_every_dispatch() {
        let store = Store::new();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let sub = store.subscribe(move |state| {
            if state.app.status == RequestStatus::Loading {
                counter.set(counter.get() + 1);
            }
        });

        store.dispatch(Action::SetStatus(RequestStatus::Loading));
        store.dispatch(Action::SetStatus(RequestStatus::Loading));
        store.unsubscribe(sub);
        store.dispatch(Action::SetStatus(RequestStatus::Loading));

        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_listener_may_dispatch() {
        let store = Store::new();
        let handle = store.clone();
        store.subscribe(move |state| {
            if state.app.error.is_some() {
                handle.dispatch(Action::SetError(None));
            }
        });

        store.dispatch(Action::SetError(Some("boom".into())));
        assert_eq!(store.snapshot().app.error, None);
    }

    #[test]
    fn test_nested_dispatch_never_rolls_back_later_listeners() {
        let store = Store::new();
        let handle = store.clone();
        store.subscribe(move |state| {
            if state.app.status == RequestStatus::Loading {
                handle.dispatch(Action::SetStatus(RequestStatus::Succeeded));
            }
        });
        let last_seen = Rc::new(Cell::new(RequestStatus::Idle));
        let recorder = last_seen.clone();
        store.subscribe(move |state| recorder.set(state.app.status));

        store.dispatch(Action::SetStatus(RequestStatus::Loading));

        assert_eq!(store.snapshot().app.status, RequestStatus::Succeeded);
        assert_eq!(last_seen.get(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_clear_all_invalidates_outstanding_tickets() {
        let store = Store::new();
        let ticket = store.track(RequestKey::Bucket("tl1".into()));
        assert!(store.is_current(&ticket));

        store.dispatch(Action::ClearAll);

        assert_eq!(store.epoch(), 1);
        assert!(!store.is_current(&ticket));
        assert!(!store.settle(&ticket));
        assert!(store.settle(&store.track(RequestKey::Bucket("tl1".into()))));
    }
}
