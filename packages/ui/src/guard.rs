//! # Session guard
//!
//! Protected views are only rendered for an actor holding a session token.
//! The check is a single synchronous read of the session at mount:
//!
//! ```text
//! Checking ─┬─> Denied   (no token: redirect, render nothing)
//!           └─> Allowed  (any non-empty token: render the view)
//! ```
//!
//! Both exits are terminal for the mount. The token is never validated beyond
//! being present, and a denied check does not touch the store.
//!
//! [`SessionGate`] takes the protected view as its children and settles the
//! guard before its first render, so the wrapped view never runs its hooks
//! for a denied session.

use dioxus::prelude::*;
use store::{KeyValueStore, Session};

use crate::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Denied,
    Allowed,
}

/// One mount's worth of guard state.
#[derive(Debug)]
pub struct SessionGuard {
    state: GuardState,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Read the session once. Later calls return the settled state without
    /// reading again.
    pub fn resolve<S: KeyValueStore>(&mut self, session: &Session<S>) -> GuardState {
        if self.state == GuardState::Checking {
            self.state = if session.is_authenticated() {
                GuardState::Allowed
            } else {
                GuardState::Denied
            };
        }
        self.state
    }
}

/// Renders `children` only when the session holds a token; otherwise calls
/// `on_denied` once for this mount and renders nothing.
#[component]
pub fn SessionGate(on_denied: EventHandler<()>, children: Element) -> Element {
    let session = use_session();
    let state = use_hook(|| {
        let mut guard = SessionGuard::new();
        let state = guard.resolve(&session);
        if state == GuardState::Denied {
            tracing::debug!("No session token, redirecting to login");
            on_denied.call(());
        }
        state
    });

    if state != GuardState::Allowed {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render_with_session, Tally};
    use store::MemoryStore;

    #[component]
    fn Protected() -> Element {
        use_context::<Tally>().render();
        rsx! {
            p { "protected view" }
        }
    }

    fn gated_view() -> Element {
        let tally = use_context::<Tally>();
        rsx! {
            SessionGate {
                on_denied: move |_| tally.redirect(),
                Protected {}
            }
        }
    }

    #[test]
    fn test_guard_starts_checking() {
        assert_eq!(SessionGuard::new().state(), GuardState::Checking);
    }

    #[test]
    fn test_resolution_is_terminal() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        let mut guard = SessionGuard::new();

        assert_eq!(guard.resolve(&session), GuardState::Denied);
        session.set("late-token");
        assert_eq!(guard.resolve(&session), GuardState::Denied);

        let mut fresh = SessionGuard::new();
        assert_eq!(fresh.resolve(&session), GuardState::Allowed);
        session.clear();
        assert_eq!(fresh.resolve(&session), GuardState::Allowed);
    }

    #[test]
    fn test_empty_token_is_denied() {
        let session = Session::new(MemoryStore::with_item("token", ""));
        let mut guard = SessionGuard::new();
        assert_eq!(guard.resolve(&session), GuardState::Denied);
    }

    #[test]
    fn test_gate_without_token_redirects_without_rendering() {
        let session = Session::new(MemoryStore::new());
        let (html, tally) = render_with_session(session.clone(), gated_view);

        assert_eq!(tally.renders(), 0);
        assert_eq!(tally.redirects(), 1);
        assert!(!html.contains("protected view"));
        assert!(session.get().is_none());
    }

    #[test]
    fn test_gate_with_any_token_renders_once() {
        let session = Session::new(MemoryStore::with_item("token", "garbage"));
        let (html, tally) = render_with_session(session.clone(), gated_view);

        assert_eq!(tally.renders(), 1);
        assert_eq!(tally.redirects(), 0);
        assert!(html.contains("protected view"));
        assert_eq!(session.get().as_deref(), Some("garbage"));
    }
}
