// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `Controller` owns the state of the single alert overlay: the current
//! message, button set, and an explicit visibility state machine
//! (`Hidden -> Showing -> Hiding -> Hidden`). Time is threaded in through
//! `tick`, which drives both the in/out animation progress and the auto-hide
//! deadline, so the whole lifecycle is deterministic under test.

use super::alert::{AlertAction, AlertButton, AlertType, ButtonKind};
use crate::bridge::Request;
use std::time::{Duration, Instant};

/// Default display time for auto-hiding toasts.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Duration of the in/out animation tween.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Visibility state of the overlay.
///
/// Modeled as a tagged enum with the animation start instant attached, so
/// there is exactly one source of truth for "is something on screen" and no
/// boolean flags can drift out of sync with pending timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing displayed. Content fields may hold stale data from the
    /// previous alert; they are overwritten by the next `show_*` call.
    Hidden,
    /// Alert visible, animating in or steady.
    Showing { since: Instant },
    /// Out-animation running; still visible until it completes.
    Hiding { since: Instant },
}

/// Owns and mutates the state of the alert overlay.
///
/// Exactly one instance exists per application; every mutation happens on
/// the event loop, so no locking is needed.
#[derive(Debug)]
pub struct Controller {
    message: String,
    alert_type: AlertType,
    buttons: Vec<AlertButton>,
    auto_hide: bool,
    phase: Phase,
    /// Pending auto-hide deadline. A single slot that every `show_*` call
    /// overwrites, so a stale timer from a superseded alert can never
    /// dismiss a newer one.
    hide_deadline: Option<Instant>,
    /// Animation progress in `[0, 1]`; 0 when hidden, 1 when fully shown.
    progress: f32,
    animation: Duration,
    default_duration: Duration,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a hidden controller with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(DEFAULT_ANIMATION_DURATION, DEFAULT_TOAST_DURATION)
    }

    /// Creates a hidden controller with configured animation and toast
    /// durations (see `config`).
    #[must_use]
    pub fn with_timing(animation: Duration, default_duration: Duration) -> Self {
        Self {
            message: String::new(),
            alert_type: AlertType::default(),
            buttons: Vec::new(),
            auto_hide: false,
            phase: Phase::Hidden,
            hide_deadline: None,
            progress: 0.0,
            animation,
            default_duration,
        }
    }

    /// Shows an auto-hiding toast with the default display duration.
    pub fn show_alert(&mut self, message: impl Into<String>, alert_type: AlertType) {
        let duration = self.default_duration;
        self.show_alert_for(message, alert_type, duration);
    }

    /// Shows an auto-hiding toast that stays up for `duration` before the
    /// out-animation starts.
    pub fn show_alert_for(
        &mut self,
        message: impl Into<String>,
        alert_type: AlertType,
        duration: Duration,
    ) {
        self.show_alert_at(message, alert_type, duration, Instant::now());
    }

    /// Instant-threaded variant of [`Self::show_alert_for`] used by tests
    /// and tick-driven callers.
    pub fn show_alert_at(
        &mut self,
        message: impl Into<String>,
        alert_type: AlertType,
        duration: Duration,
        now: Instant,
    ) {
        self.message = message.into();
        self.alert_type = alert_type;
        self.buttons.clear();
        self.auto_hide = true;
        self.phase = Phase::Showing { since: now };
        self.hide_deadline = Some(now + duration);
        self.progress = ramp(now, now, self.animation);
    }

    /// Shows a confirmation dialog that stays visible until one of its
    /// buttons is pressed or `hide` is called explicitly.
    ///
    /// Button order is preserved.
    pub fn show_confirm_alert(
        &mut self,
        message: impl Into<String>,
        buttons: Vec<AlertButton>,
        alert_type: AlertType,
    ) {
        self.show_confirm_alert_at(message, buttons, alert_type, Instant::now());
    }

    /// Instant-threaded variant of [`Self::show_confirm_alert`].
    pub fn show_confirm_alert_at(
        &mut self,
        message: impl Into<String>,
        buttons: Vec<AlertButton>,
        alert_type: AlertType,
        now: Instant,
    ) {
        self.message = message.into();
        self.alert_type = alert_type;
        self.buttons = buttons;
        self.auto_hide = false;
        self.phase = Phase::Showing { since: now };
        self.hide_deadline = None;
        self.progress = ramp(now, now, self.animation);
    }

    /// Shows a two-button delete confirmation: `Cancel` (kind `Cancel`,
    /// running `on_cancel` if given) and `Delete` (kind `Destructive`,
    /// running `on_confirm`).
    pub fn show_delete_confirmation(
        &mut self,
        message: impl Into<String>,
        on_confirm: AlertAction,
        on_cancel: Option<AlertAction>,
    ) {
        let buttons = delete_confirmation_buttons(on_confirm, on_cancel);
        self.show_confirm_alert(message, buttons, AlertType::Warning);
    }

    /// Starts the out-animation. No-op while hidden; while already hiding
    /// it restarts the out-animation, which is harmless.
    pub fn hide(&mut self) {
        self.hide_at(Instant::now());
    }

    /// Instant-threaded variant of [`Self::hide`].
    pub fn hide_at(&mut self, now: Instant) {
        match self.phase {
            Phase::Hidden => {}
            Phase::Showing { .. } | Phase::Hiding { .. } => {
                self.phase = Phase::Hiding { since: now };
                // Invariant: no auto-hide deadline is pending once the
                // overlay is on its way out.
                self.hide_deadline = None;
                self.progress = 1.0;
            }
        }
    }

    /// Dispatches a button press: runs the button's callback, then hides.
    ///
    /// The callback runs before the hide so it can raise a follow-up alert
    /// (through the bridge) without that alert being dismissed by this
    /// press. Out-of-range indices and presses while hidden are no-ops.
    pub fn press_button(&mut self, index: usize) {
        if matches!(self.phase, Phase::Hidden) {
            return;
        }
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        let action = button.action();
        action();
        self.hide();
    }

    /// Advances animations and checks the auto-hide deadline.
    ///
    /// Called from the periodic tick subscription while the overlay is
    /// active; safe to call at any cadence.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Hidden => {}
            Phase::Showing { since } => {
                self.progress = ramp(now, since, self.animation);
                if self.auto_hide {
                    if let Some(deadline) = self.hide_deadline {
                        if now >= deadline {
                            self.hide_at(now);
                        }
                    }
                }
            }
            Phase::Hiding { since } => {
                let out = ramp(now, since, self.animation);
                if out >= 1.0 {
                    self.phase = Phase::Hidden;
                    self.progress = 0.0;
                } else {
                    self.progress = 1.0 - out;
                }
            }
        }
    }

    /// Applies a request received over the bridge. Keeps the event loop the
    /// single writer of alert state.
    pub fn apply(&mut self, request: Request) {
        match request {
            Request::Toast {
                message,
                alert_type,
                duration,
            } => {
                let duration = duration.unwrap_or(self.default_duration);
                self.show_alert_for(message, alert_type, duration);
            }
            Request::Confirm {
                message,
                buttons,
                alert_type,
            } => {
                self.show_confirm_alert(message, buttons, alert_type);
            }
            Request::DeleteConfirmation {
                message,
                on_confirm,
                on_cancel,
            } => {
                self.show_delete_confirmation(message, on_confirm, on_cancel);
            }
        }
    }

    /// Returns whether the overlay is on screen (showing or animating out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    /// Returns whether an in/out animation is currently running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.phase {
            Phase::Hidden => false,
            Phase::Showing { .. } => self.progress < 1.0,
            Phase::Hiding { .. } => true,
        }
    }

    /// Returns whether the overlay needs periodic ticks (animation running
    /// or an auto-hide deadline pending).
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_animating() || (self.is_visible() && self.hide_deadline.is_some())
    }

    /// Returns the current message. Stale after hide until the next show.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current alert type.
    #[must_use]
    pub fn alert_type(&self) -> AlertType {
        self.alert_type
    }

    /// Returns the current button set; empty for plain toasts.
    #[must_use]
    pub fn buttons(&self) -> &[AlertButton] {
        &self.buttons
    }

    /// Returns whether the current alert auto-hides.
    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Returns the animation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// Builds the fixed Cancel/Delete button pair for delete confirmations.
fn delete_confirmation_buttons(
    on_confirm: AlertAction,
    on_cancel: Option<AlertAction>,
) -> Vec<AlertButton> {
    let cancel_action: AlertAction = on_cancel.unwrap_or_else(|| std::sync::Arc::new(|| {}));
    vec![
        AlertButton::with_action("Cancel", ButtonKind::Cancel, cancel_action),
        AlertButton::with_action("Delete", ButtonKind::Destructive, on_confirm),
    ]
}

/// Linear tween from 0 to 1 over `animation`, clamped at 1.
fn ramp(now: Instant, since: Instant, animation: Duration) -> f32 {
    if animation.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / animation.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::action;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_controller_is_hidden() {
        let controller = Controller::new();
        assert!(!controller.is_visible());
        assert!(!controller.is_animating());
        assert!(!controller.needs_tick());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn show_alert_sets_toast_state() {
        let mut controller = Controller::new();
        controller.show_alert("Saved", AlertType::Success);

        assert!(controller.is_visible());
        assert_eq!(controller.message(), "Saved");
        assert_eq!(controller.alert_type(), AlertType::Success);
        assert!(controller.buttons().is_empty());
        assert!(controller.auto_hide());
    }

    #[test]
    fn show_confirm_alert_keeps_button_order_and_disables_auto_hide() {
        let mut controller = Controller::new();
        controller.show_confirm_alert(
            "Proceed?",
            vec![
                AlertButton::cancel("Cancel", || {}),
                AlertButton::primary("OK", || {}),
            ],
            AlertType::Info,
        );

        assert!(controller.is_visible());
        assert!(!controller.auto_hide());
        assert_eq!(controller.buttons().len(), 2);
        assert_eq!(controller.buttons()[0].label(), "Cancel");
        assert_eq!(controller.buttons()[1].label(), "OK");
    }

    #[test]
    fn delete_confirmation_builds_fixed_cancel_delete_pair() {
        let mut controller = Controller::new();
        controller.show_delete_confirmation("Delete item?", action(|| {}), None);

        assert_eq!(controller.alert_type(), AlertType::Warning);
        let buttons = controller.buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label(), "Cancel");
        assert_eq!(buttons[0].kind(), ButtonKind::Cancel);
        assert_eq!(buttons[1].label(), "Delete");
        assert_eq!(buttons[1].kind(), ButtonKind::Destructive);
        assert!(!controller.auto_hide());
    }

    #[test]
    fn in_animation_progress_ramps_to_one() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("x", AlertType::Info, ms(3000), start);
        assert_eq!(controller.progress(), 0.0);

        controller.tick(start + ms(150));
        assert!((controller.progress() - 0.5).abs() < 0.01);

        controller.tick(start + ms(300));
        assert_eq!(controller.progress(), 1.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn auto_hide_runs_out_animation_then_hides() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("Saved", AlertType::Success, ms(100), start);

        controller.tick(start + ms(50));
        assert!(controller.is_visible());
        assert_eq!(controller.message(), "Saved");
        assert_eq!(controller.alert_type(), AlertType::Success);

        // Deadline passed: out-animation starts but the overlay is still
        // painted until it completes.
        controller.tick(start + ms(150));
        assert!(controller.is_visible());
        assert!(controller.is_animating());

        controller.tick(start + ms(150) + ms(300));
        assert!(!controller.is_visible());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn confirm_alert_never_auto_hides() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_confirm_alert_at(
            "Proceed?",
            vec![AlertButton::primary("OK", || {})],
            AlertType::Info,
            start,
        );

        controller.tick(start + ms(60_000));
        assert!(controller.is_visible());
    }

    #[test]
    fn button_press_runs_action_once_then_hides() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);

        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_confirm_alert_at(
            "Proceed?",
            vec![AlertButton::primary("OK", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })],
            AlertType::Info,
            start,
        );

        controller.press_button(0);
        assert_eq!(presses.load(Ordering::SeqCst), 1);
        assert!(controller.is_animating());

        controller.tick(start + ms(10_000));
        assert!(!controller.is_visible());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pressing_one_button_never_fires_the_other() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let ok_log = Arc::clone(&order);
        let cancel_log = Arc::clone(&order);

        let mut controller = Controller::new();
        controller.show_confirm_alert(
            "Proceed?",
            vec![
                AlertButton::cancel("Cancel", move || {
                    cancel_log.lock().unwrap().push("cancel");
                }),
                AlertButton::primary("OK", move || {
                    ok_log.lock().unwrap().push("ok");
                }),
            ],
            AlertType::Info,
        );

        controller.press_button(1);
        assert_eq!(*order.lock().unwrap(), vec!["ok"]);
    }

    #[test]
    fn press_button_out_of_range_is_a_no_op() {
        let mut controller = Controller::new();
        controller.show_confirm_alert("Proceed?", vec![], AlertType::Info);

        controller.press_button(5);
        assert!(controller.is_visible());
    }

    #[test]
    fn press_button_while_hidden_is_a_no_op() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);

        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_confirm_alert_at(
            "Proceed?",
            vec![AlertButton::primary("OK", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })],
            AlertType::Info,
            start,
        );
        controller.hide_at(start + ms(500));
        controller.tick(start + ms(500) + ms(300));
        assert!(!controller.is_visible());

        // Stale button content remains, but presses no longer dispatch.
        controller.press_button(0);
        assert_eq!(presses.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn hide_while_hidden_is_idempotent() {
        let mut controller = Controller::new();
        controller.hide();
        assert!(!controller.is_visible());
        assert!(!controller.needs_tick());
    }

    #[test]
    fn hide_clears_pending_deadline() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("x", AlertType::Info, ms(3000), start);
        assert!(controller.needs_tick());

        controller.hide_at(start + ms(100));
        controller.tick(start + ms(100) + ms(300));
        assert!(!controller.is_visible());
        assert!(!controller.needs_tick());
    }

    #[test]
    fn newer_alert_supersedes_older_auto_hide_deadline() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("first", AlertType::Info, ms(100), start);

        // A second alert arrives before the first deadline fires. Its
        // longer deadline replaces the first one entirely.
        controller.show_alert_at("second", AlertType::Success, ms(5000), start + ms(50));

        // The first alert's deadline (t=100) must not dismiss the second.
        controller.tick(start + ms(200));
        assert!(controller.is_visible());
        assert_eq!(controller.message(), "second");

        controller.tick(start + ms(50) + ms(5000));
        controller.tick(start + ms(50) + ms(5000) + ms(300));
        assert!(!controller.is_visible());
    }

    #[test]
    fn content_is_left_stale_after_hide() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("kept", AlertType::Error, ms(100), start);
        controller.tick(start + ms(100));
        controller.tick(start + ms(100) + ms(300));

        assert!(!controller.is_visible());
        assert_eq!(controller.message(), "kept");
        assert_eq!(controller.alert_type(), AlertType::Error);
    }

    #[test]
    fn show_alert_clears_previous_buttons() {
        let mut controller = Controller::new();
        controller.show_confirm_alert(
            "Proceed?",
            vec![AlertButton::primary("OK", || {})],
            AlertType::Info,
        );
        controller.show_alert("plain", AlertType::Info);
        assert!(controller.buttons().is_empty());
    }

    #[test]
    fn zero_duration_hides_on_first_tick() {
        let mut controller = Controller::new();
        let start = Instant::now();
        controller.show_alert_at("gone", AlertType::Info, ms(0), start);

        controller.tick(start);
        assert!(controller.is_animating());
        controller.tick(start + ms(300));
        assert!(!controller.is_visible());
    }

    #[test]
    fn zero_animation_duration_completes_immediately() {
        let mut controller = Controller::with_timing(ms(0), ms(100));
        let start = Instant::now();
        controller.show_alert_at("x", AlertType::Info, ms(100), start);
        assert_eq!(controller.progress(), 1.0);

        controller.tick(start + ms(100));
        controller.tick(start + ms(100));
        assert!(!controller.is_visible());
    }

    #[test]
    fn apply_toast_request_uses_default_duration_when_unset() {
        let mut controller = Controller::with_timing(ms(300), ms(100));
        controller.apply(Request::Toast {
            message: "bridged".into(),
            alert_type: AlertType::Info,
            duration: None,
        });
        assert!(controller.is_visible());
        assert!(controller.auto_hide());
        assert_eq!(controller.message(), "bridged");
    }

    #[test]
    fn apply_delete_confirmation_request() {
        let mut controller = Controller::new();
        controller.apply(Request::DeleteConfirmation {
            message: "Delete item?".into(),
            on_confirm: action(|| {}),
            on_cancel: None,
        });
        assert_eq!(controller.buttons().len(), 2);
        assert_eq!(controller.alert_type(), AlertType::Warning);
    }
}
