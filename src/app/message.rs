// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::alert::AlertType;
use crate::bridge;
use crate::ui::overlay;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Demo trigger: show a toast of the given type.
    ShowToast(AlertType),
    /// Demo trigger: show a two-button confirmation dialog.
    ShowConfirm,
    /// Demo trigger: show the Cancel/Delete confirmation.
    ShowDeleteConfirmation,
    /// Demo trigger: raise a toast from a background thread through the
    /// global bridge, exercising the non-UI call path.
    ShowFromBackground,
    /// Interaction reported by the overlay widget.
    Overlay(overlay::Message),
    /// An alert request received over the bridge.
    Bridge(bridge::Request),
    /// Periodic tick driving animations and the auto-hide deadline.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
