// SPDX-License-Identifier: MPL-2.0
//! Widget configuration and the two-level option resolution rule.
//!
//! Every option a widget is constructed with can be shadowed per message via
//! [`MessageOverrides`](crate::message::MessageOverrides). The lookup is the
//! pure function [`resolve`]: prefer the field on the current message, fall
//! back to the widget default. It is performed independently for every option
//! on every transition, so a message may override only a subset of options.

use crate::message::{MessageContent, MessageOverrides};
use crate::style::{default_transition, EdgeSpacing, Spacing, TransitionFn};
use iced_core::{Point, Rectangle};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Default show/hide animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(225);

/// Default auto-hide delay.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1850);

/// Where the message slot is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Center,
    /// An explicit rectangle in viewport coordinates, for hosts that place
    /// the slot themselves.
    Custom(Rectangle),
}

/// Status bar suppression while a message is visible.
///
/// The side-specific variants only apply when the message is anchored at the
/// matching edge, so a bottom sheet does not blank the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HideStatusBar {
    #[default]
    No,
    Yes,
    TopOnly,
    BottomOnly,
}

impl HideStatusBar {
    /// Whether the status bar should be suppressed for a message at `position`.
    #[must_use]
    pub fn applies_at(self, position: Position) -> bool {
        match self {
            HideStatusBar::No => false,
            HideStatusBar::Yes => true,
            HideStatusBar::TopOnly => matches!(position, Position::Top),
            HideStatusBar::BottomOnly => matches!(position, Position::Bottom),
        }
    }
}

/// Override for the status bar height used in inset computation.
///
/// Hosts that know better than the safe-area provider (translucent bars,
/// custom chrome) can pin a fixed value or derive one from orientation.
#[derive(Clone)]
pub enum StatusBarHeight {
    Fixed(f32),
    PerOrientation(Rc<dyn Fn(bool) -> f32>),
}

impl StatusBarHeight {
    #[must_use]
    pub fn resolve(&self, is_landscape: bool) -> f32 {
        match self {
            StatusBarHeight::Fixed(height) => *height,
            StatusBarHeight::PerOrientation(f) => f(is_landscape),
        }
    }
}

impl fmt::Debug for StatusBarHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBarHeight::Fixed(height) => f.debug_tuple("Fixed").field(height).finish(),
            StatusBarHeight::PerOrientation(_) => f.write_str("PerOrientation(..)"),
        }
    }
}

/// How a message was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    Tap,
    LongPress,
}

/// The event handed to press callbacks alongside the message content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressEvent {
    pub kind: PressKind,
    pub location: Option<Point>,
}

impl PressEvent {
    #[must_use]
    pub fn tap() -> Self {
        PressEvent {
            kind: PressKind::Tap,
            location: None,
        }
    }

    #[must_use]
    pub fn long_press() -> Self {
        PressEvent {
            kind: PressKind::LongPress,
            location: None,
        }
    }

    #[must_use]
    pub fn at(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }
}

/// Invoked when a message finishes entering the `Visible` phase.
pub type ShowCallback = Rc<dyn Fn(&MessageContent)>;

/// Invoked when a message finishes returning to the `Hidden` phase.
pub type HideCallback = Rc<dyn Fn(&MessageContent)>;

/// Invoked on tap or long-press with the event and the pressed message.
pub type PressCallback = Rc<dyn Fn(&PressEvent, &MessageContent)>;

/// The defaults a widget instance is constructed with.
///
/// Owned by the widget; immutable after construction except through
/// [`FlashMessage::set_config`](crate::widget::FlashMessage::set_config).
#[derive(Clone)]
pub struct WidgetConfig {
    pub position: Position,
    pub animated: bool,
    pub animation_duration: Duration,
    pub auto_hide: bool,
    pub duration: Duration,
    pub hide_on_press: bool,
    pub hide_status_bar: HideStatusBar,
    /// Use margins instead of padding when merging insets, so the banner
    /// floats clear of the device chrome instead of growing into it.
    pub floating: bool,
    pub style: EdgeSpacing,
    pub status_bar_height: Option<StatusBarHeight>,
    pub transition: TransitionFn,
    pub on_show: Option<ShowCallback>,
    pub on_hide: Option<HideCallback>,
    pub on_press: Option<PressCallback>,
    pub on_long_press: Option<PressCallback>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            position: Position::Top,
            animated: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            auto_hide: true,
            duration: DEFAULT_DURATION,
            hide_on_press: true,
            hide_status_bar: HideStatusBar::No,
            floating: false,
            style: EdgeSpacing::symmetric(Spacing::Px(15.0), Spacing::Px(20.0)),
            status_bar_height: None,
            transition: Rc::new(default_transition),
            on_show: None,
            on_hide: None,
            on_press: None,
            on_long_press: None,
        }
    }
}

impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("position", &self.position)
            .field("animated", &self.animated)
            .field("animation_duration", &self.animation_duration)
            .field("auto_hide", &self.auto_hide)
            .field("duration", &self.duration)
            .field("hide_on_press", &self.hide_on_press)
            .field("hide_status_bar", &self.hide_status_bar)
            .field("floating", &self.floating)
            .field("style", &self.style)
            .field("status_bar_height", &self.status_bar_height)
            .field("has_on_show", &self.on_show.is_some())
            .field("has_on_hide", &self.on_hide.is_some())
            .field("has_on_press", &self.on_press.is_some())
            .field("has_on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}

/// Two-level option resolution: the field on the current message wins,
/// otherwise the widget default applies.
#[must_use]
pub fn resolve<T>(
    message: Option<&MessageContent>,
    pick: impl Fn(&MessageOverrides) -> Option<T>,
    default: T,
) -> T {
    message
        .and_then(|m| pick(&m.overrides))
        .unwrap_or(default)
}

/// [`resolve`] for options that may be absent at both levels (callbacks,
/// custom transitions, status bar height overrides).
#[must_use]
pub fn resolve_optional<T>(
    message: Option<&MessageContent>,
    pick: impl Fn(&MessageOverrides) -> Option<T>,
    default: Option<T>,
) -> Option<T> {
    message.and_then(|m| pick(&m.overrides)).or(default)
}
