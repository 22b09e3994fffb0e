//! Connection lifecycle state for the realtime session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Whichever layer owns the socket reports lifecycle transitions into the
//! shared signal; everything else only observes them, so UI code never
//! touches the transport directly.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Liveness of the single realtime connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    /// Not connected; socket is closed or was never opened.
    Disconnected,
    /// Connection attempt is in progress.
    #[default]
    Connecting,
    /// Socket is open and usable.
    Connected,
    /// Connection failed or dropped with an error.
    Error,
}

impl ConnectionState {
    /// Parse a shell status-event label (e.g. `"connected"`).
    ///
    /// Labels arrive as plain strings on the app shell's status events;
    /// unknown labels yield `None` so callers can ignore them.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "disconnected" => Some(Self::Disconnected),
            "connecting" => Some(Self::Connecting),
            "connected" => Some(Self::Connected),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Canonical lowercase label, the inverse of [`Self::from_label`].
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Error => "error",
        }
    }
}

/// Create the shared connection-state signal and register it in context.
///
/// The initial value is [`ConnectionState::Connecting`]: the app starts its
/// connection attempt before the first render. Call once from the root
/// component, alongside the other state providers.
pub fn provide_connection_state() -> RwSignal<ConnectionState> {
    let state = RwSignal::new(ConnectionState::default());
    provide_context(state);
    state
}

/// Retrieve the shared connection-state signal from context.
///
/// Panics when no ancestor called [`provide_connection_state`].
#[must_use]
pub fn use_connection_state() -> RwSignal<ConnectionState> {
    expect_context::<RwSignal<ConnectionState>>()
}

/// Invoke `callback` with the current connection state and every change.
pub fn on_connection_change<F>(state: RwSignal<ConnectionState>, callback: F)
where
    F: Fn(ConnectionState) + 'static,
{
    Effect::new(move || callback(state.get()));
}
