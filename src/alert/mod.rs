// SPDX-License-Identifier: MPL-2.0
//! Alert overlay core: data model and lifecycle state machine.
//!
//! This module is UI-toolkit-agnostic. The `Controller` owns the state of
//! the single overlay (message, type, buttons, visibility phase, animation
//! progress) and is mutated exclusively from the event loop; the rendering
//! side (`crate::ui::overlay`) only reads it.
//!
//! # Components
//!
//! - [`alert`] - `AlertType`, `ButtonKind`, `AlertButton`, `AlertAction`
//! - [`controller`] - `Controller` with the `Hidden -> Showing -> Hiding`
//!   state machine, animation tweens, and the auto-hide deadline
//!
//! # Usage
//!
//! ```
//! use iced_alerts::alert::{AlertType, Controller};
//!
//! let mut alerts = Controller::new();
//! alerts.show_alert("Image saved", AlertType::Success);
//! assert!(alerts.is_visible());
//! ```

mod alert;
mod controller;

pub use alert::{action, AlertAction, AlertButton, AlertType, ButtonKind};
pub use controller::{Controller, DEFAULT_ANIMATION_DURATION, DEFAULT_TOAST_DURATION};
