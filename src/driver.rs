// SPDX-License-Identifier: MPL-2.0
//! Abstract platform capabilities consumed by the widget.
//!
//! The state machine never talks to a real animation system, timer wheel or
//! status bar. It requests work through these traits and is re-entered later
//! via [`FlashMessage::animation_complete`](crate::widget::FlashMessage::animation_complete)
//! and [`FlashMessage::timer_fired`](crate::widget::FlashMessage::timer_fired).
//! Tokens carry the widget's transition generation so completions of
//! superseded requests are recognized and dropped.

use std::time::{Duration, Instant};

/// Identifies one animation request. Returned to the widget on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationToken(u64);

impl AnimationToken {
    pub(crate) fn new(generation: u64) -> Self {
        AnimationToken(generation)
    }

    pub(crate) fn generation(self) -> u64 {
        self.0
    }
}

/// Identifies one armed auto-hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        TimerToken(generation)
    }
}

/// Outcome of an animation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The driver finished synchronously; the widget proceeds immediately.
    Finished,
    /// The host will call `animation_complete(token)` once the animation ends.
    Pending,
}

/// Advances a progress value from `from` to `to` over `duration`.
///
/// A driver must report each request's completion at most once; reporting a
/// superseded request is harmless because its token no longer matches.
pub trait AnimationDriver {
    fn animate(&mut self, from: f32, to: f32, duration: Duration, token: AnimationToken)
        -> Completion;
}

/// A driver that completes every animation synchronously.
///
/// Useful for hosts without an animation system and as the instant fake in
/// tests: with it, `show_message` lands in `Visible` before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantAnimations;

impl AnimationDriver for InstantAnimations {
    fn animate(
        &mut self,
        _from: f32,
        _to: f32,
        _duration: Duration,
        _token: AnimationToken,
    ) -> Completion {
        Completion::Finished
    }
}

/// Schedules and cancels the auto-hide timer.
///
/// A widget arms at most one timer at a time, so implementations only need a
/// single slot.
pub trait TimerScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken);
    fn cancel(&mut self, token: TimerToken);
}

/// Deadline-based scheduler for hosts that poll on a frame or tick loop.
///
/// Call [`TickTimers::poll_expired`] periodically and feed any returned token
/// into `FlashMessage::timer_fired`. The single slot serves exactly one
/// widget; give each widget its own `TickTimers`, or a second widget's
/// schedule would silently replace the first one's deadline.
#[derive(Debug, Default)]
pub struct TickTimers {
    armed: Option<(TimerToken, Instant)>,
}

impl TickTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the armed token if its deadline has passed, disarming it.
    pub fn poll_expired(&mut self, now: Instant) -> Option<TimerToken> {
        match self.armed {
            Some((token, deadline)) if now >= deadline => {
                self.armed = None;
                Some(token)
            }
            _ => None,
        }
    }

    /// Whether a timer is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl TimerScheduler for TickTimers {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.armed = Some((token, Instant::now() + delay));
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some((armed, _)) = self.armed {
            if armed == token {
                self.armed = None;
            }
        }
    }
}

/// Control over the shared status bar resource.
pub trait StatusBar {
    fn set_hidden(&mut self, hidden: bool);
}
