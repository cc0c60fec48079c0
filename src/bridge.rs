// SPDX-License-Identifier: MPL-2.0
//! Process-wide bridge from non-UI code to the alert overlay.
//!
//! The alert `Controller` lives inside the application state and only
//! exists once the event loop is running, so code outside the UI tree
//! (service layers, background tasks) cannot hold a reference to it.
//! The bridge closes that gap: the app registers a request sender when its
//! bridge subscription starts, and anyone can then call the free functions
//! in this module to raise an alert from any thread.
//!
//! The registry itself is an injectable [`Bridge`] object; [`global`]
//! exposes the one default instance the free functions use. Calls made
//! before registration are logged and dropped, never queued.

use crate::alert::{AlertAction, AlertButton, AlertType};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// An alert operation forwarded to the event loop.
#[derive(Clone)]
pub enum Request {
    /// Show an auto-hiding toast. `duration` falls back to the
    /// controller's configured default when `None`.
    Toast {
        message: String,
        alert_type: AlertType,
        duration: Option<Duration>,
    },
    /// Show a confirmation dialog with the given buttons (order preserved).
    Confirm {
        message: String,
        buttons: Vec<AlertButton>,
        alert_type: AlertType,
    },
    /// Show the fixed Cancel/Delete confirmation pair.
    DeleteConfirmation {
        message: String,
        on_confirm: AlertAction,
        on_cancel: Option<AlertAction>,
    },
}

// Callbacks are opaque, so Debug is written out by hand.
impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::Toast {
                message,
                alert_type,
                duration,
            } => f
                .debug_struct("Toast")
                .field("message", message)
                .field("alert_type", alert_type)
                .field("duration", duration)
                .finish(),
            Request::Confirm {
                message,
                buttons,
                alert_type,
            } => f
                .debug_struct("Confirm")
                .field("message", message)
                .field("buttons", buttons)
                .field("alert_type", alert_type)
                .finish(),
            Request::DeleteConfirmation { message, .. } => f
                .debug_struct("DeleteConfirmation")
                .field("message", message)
                .finish_non_exhaustive(),
        }
    }
}

/// Registry slot connecting free-function call sites to the running event
/// loop. Registration is late and idempotent: re-registering simply
/// overwrites the sender with an equivalent one.
#[derive(Debug)]
pub struct Bridge {
    slot: RwLock<Option<UnboundedSender<Request>>>,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Bridge {
    /// Creates an unregistered bridge.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Registers the event-loop sender. Overwrites any previous one.
    pub fn register(&self, sender: UnboundedSender<Request>) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(sender);
    }

    /// Clears the registered sender, returning the bridge to its
    /// unregistered state.
    pub fn unregister(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    /// Returns whether a sender is currently registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Raises an auto-hiding toast through the bridge.
    pub fn show_alert(
        &self,
        message: impl Into<String>,
        alert_type: AlertType,
        duration: Option<Duration>,
    ) {
        self.forward(Request::Toast {
            message: message.into(),
            alert_type,
            duration,
        });
    }

    /// Raises a confirmation dialog through the bridge.
    pub fn show_confirm_alert(
        &self,
        message: impl Into<String>,
        buttons: Vec<AlertButton>,
        alert_type: AlertType,
    ) {
        self.forward(Request::Confirm {
            message: message.into(),
            buttons,
            alert_type,
        });
    }

    /// Raises a delete confirmation through the bridge.
    pub fn show_delete_confirmation(
        &self,
        message: impl Into<String>,
        on_confirm: AlertAction,
        on_cancel: Option<AlertAction>,
    ) {
        self.forward(Request::DeleteConfirmation {
            message: message.into(),
            on_confirm,
            on_cancel,
        });
    }

    /// Forwards a request to the registered sender, or warns and drops it.
    ///
    /// Dropping is deliberate: a call made before the overlay exists has
    /// nowhere meaningful to go, and queueing would show stale alerts at
    /// startup.
    fn forward(&self, request: Request) {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(sender) => {
                if sender.send(request).is_err() {
                    log::warn!("alert bridge: event loop closed, dropping alert");
                }
            }
            None => {
                log::warn!("alert bridge: not registered yet, dropping alert");
            }
        }
    }
}

/// Returns the process-wide bridge used by the free functions below.
#[must_use]
pub fn global() -> &'static Bridge {
    static GLOBAL: Bridge = Bridge::new();
    &GLOBAL
}

/// Shows an auto-hiding toast from anywhere in the process.
pub fn show_alert(message: impl Into<String>, alert_type: AlertType, duration: Option<Duration>) {
    global().show_alert(message, alert_type, duration);
}

/// Shows a confirmation dialog from anywhere in the process.
pub fn show_confirm_alert(
    message: impl Into<String>,
    buttons: Vec<AlertButton>,
    alert_type: AlertType,
) {
    global().show_confirm_alert(message, buttons, alert_type);
}

/// Shows a delete confirmation from anywhere in the process.
pub fn show_delete_confirmation(
    message: impl Into<String>,
    on_confirm: AlertAction,
    on_cancel: Option<AlertAction>,
) {
    global().show_delete_confirmation(message, on_confirm, on_cancel);
}
