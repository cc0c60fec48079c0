// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the alert overlay demo.
//!
//! The `App` struct owns the alert `Controller` and translates messages
//! (demo triggers, overlay interactions, bridge requests, ticks) into
//! controller mutations. This file keeps policy decisions (window size,
//! config-driven timing) close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::alert::Controller;
use crate::config;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state hosting the alert overlay.
#[derive(Debug, Default)]
pub struct App {
    /// The single alert overlay controller.
    alerts: Controller,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load_with_override(flags.config_dir.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("failed to load settings, using defaults: {}", err);
                config::Config::default()
            }
        };

        let app = App {
            alerts: Controller::with_timing(config.animation(), config.toast_duration()),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Alerts")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::bridge_subscription(),
            subscription::tick_subscription(&self.alerts),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Returns the alert controller (read access for the view layer).
    #[must_use]
    pub fn alerts(&self) -> &Controller {
        &self.alerts
    }

    /// Returns mutable access to the alert controller.
    pub fn alerts_mut(&mut self) -> &mut Controller {
        &mut self.alerts
    }
}
