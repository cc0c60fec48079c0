// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::alert::{action, AlertButton, AlertType};
use crate::bridge;
use crate::ui::overlay;
use iced::Task;
use std::time::Duration;

/// Applies a message to the application state.
///
/// Every alert mutation funnels through here, keeping the event loop the
/// single writer of overlay state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ShowToast(alert_type) => {
            let text = match alert_type {
                AlertType::Success => "Changes saved",
                AlertType::Error => "Something went wrong",
                AlertType::Info => "Sync in progress",
                AlertType::Warning => "Storage almost full",
            };
            app.alerts_mut().show_alert(text, alert_type);
        }
        Message::ShowConfirm => {
            // Button actions go back through the bridge so the follow-up
            // toast is processed after this dialog's hide.
            app.alerts_mut().show_confirm_alert(
                "Apply changes?",
                vec![
                    AlertButton::cancel("Cancel", || {}),
                    AlertButton::primary("Apply", || {
                        bridge::show_alert("Changes applied", AlertType::Success, None);
                    }),
                ],
                AlertType::Info,
            );
        }
        Message::ShowDeleteConfirmation => {
            app.alerts_mut().show_delete_confirmation(
                "Delete 3 items?",
                action(|| {
                    bridge::show_alert("3 items deleted", AlertType::Success, None);
                }),
                Some(action(|| {
                    bridge::show_alert("Nothing was deleted", AlertType::Info, None);
                })),
            );
        }
        Message::ShowFromBackground => {
            // A plain OS thread with no access to the UI tree, raising an
            // alert through the process-wide bridge.
            std::thread::spawn(|| {
                std::thread::sleep(Duration::from_millis(1200));
                bridge::show_alert("Background task finished", AlertType::Info, None);
            });
        }
        Message::Overlay(overlay::Message::ButtonPressed(index)) => {
            app.alerts_mut().press_button(index);
        }
        Message::Overlay(overlay::Message::Dismiss) => {
            app.alerts_mut().hide();
        }
        Message::Overlay(overlay::Message::BackdropPressed) => {
            // Modal contract: the backdrop only blocks input underneath.
        }
        Message::Bridge(request) => {
            app.alerts_mut().apply(request);
        }
        Message::Tick(now) => {
            app.alerts_mut().tick(now);
        }
    }

    Task::none()
}
