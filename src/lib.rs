// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` is a toast and confirmation alert overlay system built with
//! the Iced GUI framework.
//!
//! It provides transient auto-hiding toasts, modal confirmation dialogs with
//! configurable buttons, a convenience delete-confirmation pattern, and a
//! process-wide bridge so non-UI code (service layers, background tasks) can
//! raise alerts without a reference to the running controller.

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod alert;
pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod ui;
