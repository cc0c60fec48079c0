// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions drive the overlay: the bridge subscription, which
//! registers the process-wide alert sender and forwards incoming requests
//! to the update loop, and a conditional tick subscription that runs only
//! while the overlay needs time to pass.

use super::Message;
use crate::alert::Controller;
use crate::bridge;
use iced::futures::{self, SinkExt};
use iced::{stream, time, Subscription};
use std::time::Duration;
use tokio::sync::mpsc;

/// Tick cadence while an in/out animation is running.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick cadence while steady but waiting on an auto-hide deadline.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Subscription ID for the bridge stream; a single fixed value, so the
/// subscription survives for the whole application lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BridgeStreamId;

/// Creates the bridge subscription.
///
/// When the stream starts it registers a request sender with the global
/// bridge; this is the one-time, mount-time initialization of the
/// process-wide alert surface. Requests raised anywhere in the process are
/// then forwarded into the update loop as [`Message::Bridge`].
pub fn bridge_subscription() -> Subscription<Message> {
    Subscription::run_with(BridgeStreamId, |_| {
        stream::channel(16, |mut output: futures::channel::mpsc::Sender<Message>| async move {
            let (sender, mut receiver) = mpsc::unbounded_channel();
            bridge::global().register(sender);

            // The global bridge holds a sender for the process lifetime,
            // so this loop never sees a closed channel.
            while let Some(request) = receiver.recv().await {
                let _ = output.send(Message::Bridge(request)).await;
            }

            std::future::pending::<()>().await
        })
    })
}

/// Creates a periodic tick subscription for animations and auto-hide.
///
/// Runs fast while animating, slow while only an auto-hide deadline is
/// pending, and not at all when the overlay is idle.
pub fn tick_subscription(alerts: &Controller) -> Subscription<Message> {
    if alerts.is_animating() {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if alerts.needs_tick() {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
