// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the `AlertType` classification, the `AlertButton`
//! configuration carried by confirmation dialogs, and the shared
//! `AlertAction` callback type.

use std::fmt;
use std::sync::Arc;

/// Classification of an alert. Drives presentation only (accent color,
/// icon); behavior is controlled by the alert's button set and auto-hide
/// flag, not its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertType {
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Error,
    /// Neutral informational message.
    #[default]
    Info,
    /// Needs attention but is not fatal.
    Warning,
}

/// Visual role of a dialog button, mapped to a color in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    /// Primary/neutral action.
    #[default]
    Default,
    /// Dismissive action ("Cancel").
    Cancel,
    /// Irreversible action ("Delete").
    Destructive,
}

/// No-arg callback invoked when an alert button is pressed.
///
/// Wrapped in an `Arc` so buttons stay cheaply cloneable: requests carrying
/// them cross the bridge channel, and iced messages must be `Clone`.
pub type AlertAction = Arc<dyn Fn() + Send + Sync>;

/// Builds an `AlertAction` from any compatible closure.
pub fn action(f: impl Fn() + Send + Sync + 'static) -> AlertAction {
    Arc::new(f)
}

/// An action button displayed on a confirmation dialog.
///
/// Buttons are owned by the controller for the lifetime of one displayed
/// alert and overwritten by the next `show_*` call.
#[derive(Clone)]
pub struct AlertButton {
    label: String,
    kind: ButtonKind,
    action: AlertAction,
}

impl AlertButton {
    /// Creates a button with an explicit kind.
    pub fn new(
        label: impl Into<String>,
        kind: ButtonKind,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            action: Arc::new(action),
        }
    }

    /// Creates a primary/neutral button.
    pub fn primary(label: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new(label, ButtonKind::Default, action)
    }

    /// Creates a cancel button.
    pub fn cancel(label: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new(label, ButtonKind::Cancel, action)
    }

    /// Creates a destructive button.
    pub fn destructive(
        label: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self::new(label, ButtonKind::Destructive, action)
    }

    /// Creates a button from an already-shared action.
    pub fn with_action(label: impl Into<String>, kind: ButtonKind, action: AlertAction) -> Self {
        Self {
            label: label.into(),
            kind,
            action,
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the visual kind.
    #[must_use]
    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// Returns a clone of the button's action.
    #[must_use]
    pub fn action(&self) -> AlertAction {
        Arc::clone(&self.action)
    }
}

impl fmt::Debug for AlertButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertButton")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn default_alert_type_is_info() {
        assert_eq!(AlertType::default(), AlertType::Info);
    }

    #[test]
    fn default_button_kind_is_default() {
        assert_eq!(ButtonKind::default(), ButtonKind::Default);
    }

    #[test]
    fn button_constructors_set_correct_kind() {
        assert_eq!(AlertButton::primary("OK", || {}).kind(), ButtonKind::Default);
        assert_eq!(
            AlertButton::cancel("Cancel", || {}).kind(),
            ButtonKind::Cancel
        );
        assert_eq!(
            AlertButton::destructive("Delete", || {}).kind(),
            ButtonKind::Destructive
        );
    }

    #[test]
    fn button_action_is_shared_across_clones() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let button = AlertButton::primary("OK", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let cloned = button.clone();
        (button.action())();
        (cloned.action())();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn button_debug_omits_action() {
        let button = AlertButton::cancel("Cancel", || {});
        let debug = format!("{:?}", button);
        assert!(debug.contains("Cancel"));
        assert!(!debug.contains("action"));
    }
}
