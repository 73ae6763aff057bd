// SPDX-License-Identifier: MPL-2.0
//! The message visibility state machine.
//!
//! One [`FlashMessage`] owns one on-screen slot. Its lifecycle is
//! `Hidden → Showing → Visible → Hiding → Hidden`; the transient phases are
//! only entered when the resolved `animated` option is on, otherwise the
//! machine jumps straight between `Hidden` and `Visible`.
//!
//! Only one transition is in flight per instance. Every new transition bumps
//! a generation counter and cancels the pending auto-hide timer, so a
//! superseded animation completion or a stale timer can never mutate state
//! that has already moved on: its token no longer matches.
//!
//! Callbacks (`on_show`, `on_hide`, `on_press`) run synchronously inside the
//! transition that triggers them and must not re-enter the widget.

use crate::config::{
    resolve, resolve_optional, HideCallback, HideStatusBar, Position, PressCallback, PressEvent,
    PressKind, ShowCallback, WidgetConfig,
};
use crate::driver::{
    AnimationDriver, AnimationToken, Completion, StatusBar, TimerScheduler, TimerToken,
};
use crate::message::{MessageContent, MessageType};
use crate::renderer::MessageView;
use crate::safe_area::{DeviceMetrics, SafeAreaCallback, SafeAreaProvider, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Opaque identity token, unique per widget instance. Compared for equality
/// by the registry, never ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        InstanceId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Visibility phase of one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Showing,
    Visible,
    Hiding,
}

struct SafeAreaBinding {
    provider: Rc<dyn SafeAreaProvider>,
    _subscription: Subscription,
}

/// The state machine for one flash message slot.
pub struct FlashMessage {
    id: InstanceId,
    config: WidgetConfig,
    animations: Rc<RefCell<dyn AnimationDriver>>,
    timers: Rc<RefCell<dyn TimerScheduler>>,
    status_bar: Option<Rc<RefCell<dyn StatusBar>>>,
    safe_area: Option<SafeAreaBinding>,
    phase: Phase,
    message: Option<MessageContent>,
    progress: f32,
    generation: u64,
    armed_timer: Option<TimerToken>,
    status_bar_hidden: bool,
}

impl FlashMessage {
    pub fn new(
        config: WidgetConfig,
        animations: Rc<RefCell<dyn AnimationDriver>>,
        timers: Rc<RefCell<dyn TimerScheduler>>,
    ) -> Self {
        FlashMessage {
            id: InstanceId::next(),
            config,
            animations,
            timers,
            status_bar: None,
            safe_area: None,
            phase: Phase::Hidden,
            message: None,
            progress: 0.0,
            generation: 0,
            armed_timer: None,
            status_bar_hidden: false,
        }
    }

    /// Attaches the status bar controller used for the `hide_status_bar`
    /// side effect. Without one the option is resolved but has no effect.
    #[must_use]
    pub fn with_status_bar(mut self, status_bar: Rc<RefCell<dyn StatusBar>>) -> Self {
        self.status_bar = Some(status_bar);
        self
    }

    /// Binds a safe-area provider. The widget reads its metrics on every
    /// paint and keeps `on_change` subscribed until the widget is dropped,
    /// so hosts can repaint on orientation changes.
    pub fn attach_safe_area(
        &mut self,
        provider: Rc<dyn SafeAreaProvider>,
        on_change: SafeAreaCallback,
    ) {
        let subscription = provider.subscribe(on_change);
        self.safe_area = Some(SafeAreaBinding {
            provider,
            _subscription: subscription,
        });
    }

    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_message(&self) -> Option<&MessageContent> {
        self.message.as_ref()
    }

    /// Animation progress, 0 at `Hidden` and 1 at `Visible`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Replaces the widget defaults (prop updates from the owner). Does not
    /// affect the message currently in flight.
    pub fn set_config(&mut self, config: WidgetConfig) {
        self.config = config;
    }

    /// Shows a message, superseding whatever is queued or in flight.
    ///
    /// Blank content is an implicit hide: the slot clears without invoking
    /// `on_hide`. Otherwise the pending auto-hide timer is cancelled, the
    /// content replaces the current message, and the show sequence restarts
    /// (last call wins; no queueing).
    pub fn show_message(&mut self, content: impl Into<MessageContent>) {
        let content = content.into();
        if content.is_blank() {
            self.clear();
            return;
        }

        self.cancel_timer();
        self.generation += 1;
        self.message = Some(content);

        if self.resolved_animated() {
            self.phase = Phase::Showing;
            self.progress = 0.0;
            let token = AnimationToken::new(self.generation);
            let duration = self.resolved_animation_duration();
            let completion = self
                .animations
                .borrow_mut()
                .animate(0.0, 1.0, duration, token);
            if completion == Completion::Finished {
                self.enter_visible();
            }
        } else {
            self.enter_visible();
        }
    }

    /// Convenience for the common title/description/type triple.
    pub fn show_text(
        &mut self,
        message: impl Into<String>,
        description: Option<&str>,
        message_type: MessageType,
    ) {
        let mut content = MessageContent::with_type(message, message_type);
        if let Some(description) = description {
            content = content.description(description);
        }
        self.show_message(content);
    }

    /// Hides the current message. A no-op while already `Hidden`; `on_hide`
    /// only fires when a message actually leaves the screen.
    pub fn hide_message(&mut self) {
        if self.phase == Phase::Hidden {
            return;
        }

        self.cancel_timer();
        self.generation += 1;

        if self.resolved_animated() {
            self.phase = Phase::Hiding;
            let token = AnimationToken::new(self.generation);
            let duration = self.resolved_animation_duration();
            let completion = self
                .animations
                .borrow_mut()
                .animate(self.progress, 0.0, duration, token);
            if completion == Completion::Finished {
                self.enter_hidden();
            }
        } else {
            self.enter_hidden();
        }
    }

    /// Delivers an animation completion from the host.
    ///
    /// Completions of superseded requests carry an old generation and are
    /// dropped here, so a stale callback can never move the machine.
    pub fn animation_complete(&mut self, token: AnimationToken) {
        if token.generation() != self.generation {
            return;
        }
        match self.phase {
            Phase::Showing => self.enter_visible(),
            Phase::Hiding => self.enter_hidden(),
            Phase::Hidden | Phase::Visible => {}
        }
    }

    /// Delivers an intermediate progress value from drivers that report
    /// frames. Stale tokens are ignored.
    pub fn animation_progress(&mut self, token: AnimationToken, value: f32) {
        if token.generation() != self.generation {
            return;
        }
        if matches!(self.phase, Phase::Showing | Phase::Hiding) {
            self.progress = value.clamp(0.0, 1.0);
        }
    }

    /// Delivers an expired auto-hide timer from the host.
    pub fn timer_fired(&mut self, token: TimerToken) {
        if self.armed_timer != Some(token) {
            return;
        }
        self.armed_timer = None;
        self.hide_message();
    }

    /// Handles a tap or long-press on the message.
    ///
    /// Ignored while `Hiding`. The resolved `hide_on_press` option may
    /// trigger `hide_message`; the matching message callback is invoked
    /// regardless, with the event and the pressed content.
    pub fn press(&mut self, event: PressEvent) {
        if self.phase == Phase::Hiding {
            return;
        }
        let Some(pressed) = self.message.clone() else {
            return;
        };

        let callback = match event.kind {
            PressKind::Tap => resolve_optional(
                Some(&pressed),
                |o| o.on_press.clone(),
                self.config.on_press.clone(),
            ),
            PressKind::LongPress => resolve_optional(
                Some(&pressed),
                |o| o.on_long_press.clone(),
                self.config.on_long_press.clone(),
            ),
        };

        if self.resolved_hide_on_press() {
            self.hide_message();
        }
        if let Some(callback) = callback {
            callback(&event, &pressed);
        }
    }

    /// Composes the paintable snapshot for the current message, or `None`
    /// while `Hidden`. Recomputed from current geometry facts every call.
    #[must_use]
    pub fn view(&self) -> Option<MessageView> {
        let message = self.message.as_ref()?;
        let metrics = self.current_metrics();
        Some(MessageView::compose(
            message,
            &self.config,
            self.progress,
            &metrics,
        ))
    }

    fn current_metrics(&self) -> DeviceMetrics {
        self.safe_area
            .as_ref()
            .map(|binding| binding.provider.metrics())
            .unwrap_or_default()
    }

    fn enter_visible(&mut self) {
        self.phase = Phase::Visible;
        self.progress = 1.0;

        let hide = self
            .resolved_hide_status_bar()
            .applies_at(self.resolved_position());
        self.sync_status_bar(hide);

        // Fires on entering Visible whether or not the entry was animated.
        if let Some(on_show) = self.resolved_on_show() {
            if let Some(message) = self.message.clone() {
                on_show(&message);
            }
        }

        if self.resolved_auto_hide() {
            let duration = self.resolved_duration();
            if !duration.is_zero() {
                let token = TimerToken::new(self.generation);
                self.timers.borrow_mut().schedule(duration, token);
                self.armed_timer = Some(token);
            }
        }
    }

    fn enter_hidden(&mut self) {
        let on_hide = self.resolved_on_hide();
        let message = self.message.take();
        self.phase = Phase::Hidden;
        self.progress = 0.0;
        self.sync_status_bar(false);

        if let (Some(on_hide), Some(message)) = (on_hide, message) {
            on_hide(&message);
        }
    }

    /// Implicit hide: clears the slot without animation or `on_hide`.
    fn clear(&mut self) {
        self.cancel_timer();
        self.generation += 1;
        self.message = None;
        self.phase = Phase::Hidden;
        self.progress = 0.0;
        self.sync_status_bar(false);
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.armed_timer.take() {
            self.timers.borrow_mut().cancel(token);
        }
    }

    fn sync_status_bar(&mut self, hidden: bool) {
        if hidden == self.status_bar_hidden {
            return;
        }
        if let Some(status_bar) = &self.status_bar {
            status_bar.borrow_mut().set_hidden(hidden);
            self.status_bar_hidden = hidden;
        }
    }

    fn resolved_animated(&self) -> bool {
        resolve(self.message.as_ref(), |o| o.animated, self.config.animated)
    }

    fn resolved_animation_duration(&self) -> Duration {
        resolve(
            self.message.as_ref(),
            |o| o.animation_duration,
            self.config.animation_duration,
        )
    }

    fn resolved_auto_hide(&self) -> bool {
        resolve(self.message.as_ref(), |o| o.auto_hide, self.config.auto_hide)
    }

    fn resolved_duration(&self) -> Duration {
        resolve(self.message.as_ref(), |o| o.duration, self.config.duration)
    }

    fn resolved_hide_on_press(&self) -> bool {
        resolve(
            self.message.as_ref(),
            |o| o.hide_on_press,
            self.config.hide_on_press,
        )
    }

    fn resolved_hide_status_bar(&self) -> HideStatusBar {
        resolve(
            self.message.as_ref(),
            |o| o.hide_status_bar,
            self.config.hide_status_bar,
        )
    }

    fn resolved_position(&self) -> Position {
        resolve(self.message.as_ref(), |o| o.position, self.config.position)
    }

    fn resolved_on_show(&self) -> Option<ShowCallback> {
        resolve_optional(
            self.message.as_ref(),
            |o| o.on_show.clone(),
            self.config.on_show.clone(),
        )
    }

    fn resolved_on_hide(&self) -> Option<HideCallback> {
        resolve_optional(
            self.message.as_ref(),
            |o| o.on_hide.clone(),
            self.config.on_hide.clone(),
        )
    }
}

impl Drop for FlashMessage {
    fn drop(&mut self) {
        // A disposed instance must never have its timer fire.
        self.cancel_timer();
    }
}

impl fmt::Debug for FlashMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlashMessage")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("message", &self.message)
            .field("progress", &self.progress)
            .field("generation", &self.generation)
            .field("armed_timer", &self.armed_timer)
            .finish()
    }
}
