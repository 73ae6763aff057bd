// SPDX-License-Identifier: MPL-2.0
//! Message content data model.
//!
//! A [`MessageContent`] describes one notification: the text to display, its
//! semantic type, optional explicit colors and icon, and a bag of per-message
//! [`MessageOverrides`] that shadow the widget's own configuration for the
//! lifetime of that message (see [`crate::config::resolve`]).

use crate::config::{
    HideCallback, HideStatusBar, Position, PressCallback, ShowCallback, StatusBarHeight,
};
use crate::style::{EdgeSpacing, TransitionFn};
use iced_core::Color;
use std::fmt;
use std::time::Duration;

/// Semantic type of a flash message, determining its themed background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    Success,
    Info,
    Warning,
    Danger,
    /// Neutral message rendered with the default gray background.
    #[default]
    Default,
    /// Explicitly unstyled; renderers may skip the background entirely.
    None,
}

/// Icon selector for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Pick the icon matching the message's semantic type.
    Auto,
    Success,
    Info,
    Warning,
    Danger,
}

/// Which side of the message body the icon is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Icon descriptor carried by a message and handed to the icon renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub kind: IconKind,
    pub position: IconPosition,
}

impl Icon {
    #[must_use]
    pub fn auto() -> Self {
        Icon {
            kind: IconKind::Auto,
            position: IconPosition::Left,
        }
    }

    #[must_use]
    pub fn new(kind: IconKind) -> Self {
        Icon {
            kind,
            position: IconPosition::Left,
        }
    }

    #[must_use]
    pub fn on_right(mut self) -> Self {
        self.position = IconPosition::Right;
        self
    }

    /// Resolves `Auto` against the message type. Untyped messages have no
    /// automatic icon, so `Auto` yields `None` for them.
    #[must_use]
    pub fn resolved_for(self, message_type: MessageType) -> Option<Icon> {
        let kind = match self.kind {
            IconKind::Auto => match message_type {
                MessageType::Success => IconKind::Success,
                MessageType::Info => IconKind::Info,
                MessageType::Warning => IconKind::Warning,
                MessageType::Danger => IconKind::Danger,
                MessageType::Default | MessageType::None => return None,
            },
            concrete => concrete,
        };
        Some(Icon { kind, ..self })
    }
}

/// Per-message overrides for the widget configuration.
///
/// Every field mirrors one option of [`crate::config::WidgetConfig`]; a
/// `Some` value shadows the widget default for this message only.
#[derive(Clone, Default)]
pub struct MessageOverrides {
    pub position: Option<Position>,
    pub animated: Option<bool>,
    pub animation_duration: Option<Duration>,
    pub auto_hide: Option<bool>,
    pub duration: Option<Duration>,
    pub hide_on_press: Option<bool>,
    pub hide_status_bar: Option<HideStatusBar>,
    pub floating: Option<bool>,
    pub style: Option<EdgeSpacing>,
    pub status_bar_height: Option<StatusBarHeight>,
    pub transition: Option<TransitionFn>,
    pub on_show: Option<ShowCallback>,
    pub on_hide: Option<HideCallback>,
    pub on_press: Option<PressCallback>,
    pub on_long_press: Option<PressCallback>,
}

impl fmt::Debug for MessageOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageOverrides")
            .field("position", &self.position)
            .field("animated", &self.animated)
            .field("animation_duration", &self.animation_duration)
            .field("auto_hide", &self.auto_hide)
            .field("duration", &self.duration)
            .field("hide_on_press", &self.hide_on_press)
            .field("hide_status_bar", &self.hide_status_bar)
            .field("floating", &self.floating)
            .field("style", &self.style)
            .field("has_transition", &self.transition.is_some())
            .field("has_on_show", &self.on_show.is_some())
            .field("has_on_hide", &self.on_hide.is_some())
            .field("has_on_press", &self.on_press.is_some())
            .field("has_on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}

/// An immutable value describing one notification.
///
/// Constructed fresh on each show call, held by exactly one widget instance
/// at a time, and discarded when hidden.
#[derive(Clone, Default)]
pub struct MessageContent {
    /// The required display text. An empty string is the implicit-hide
    /// sentinel: showing it clears the current message instead.
    pub message: String,
    /// Optional secondary line, rendered under the title.
    pub description: Option<String>,
    pub message_type: MessageType,
    /// Explicit background color, winning over the theme color for the type.
    pub background_color: Option<Color>,
    /// Explicit text color, winning over the default.
    pub color: Option<Color>,
    pub icon: Option<Icon>,
    pub overrides: MessageOverrides,
}

impl MessageContent {
    pub fn new(message: impl Into<String>) -> Self {
        MessageContent {
            message: message.into(),
            ..MessageContent::default()
        }
    }

    pub fn with_type(message: impl Into<String>, message_type: MessageType) -> Self {
        MessageContent {
            message: message.into(),
            message_type,
            ..MessageContent::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_type(message, MessageType::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_type(message, MessageType::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_type(message, MessageType::Warning)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::with_type(message, MessageType::Danger)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.overrides.position = Some(position);
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.overrides.animated = Some(animated);
        self
    }

    #[must_use]
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.overrides.animation_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.overrides.auto_hide = Some(auto_hide);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.overrides.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn hide_on_press(mut self, hide_on_press: bool) -> Self {
        self.overrides.hide_on_press = Some(hide_on_press);
        self
    }

    #[must_use]
    pub fn hide_status_bar(mut self, hide_status_bar: HideStatusBar) -> Self {
        self.overrides.hide_status_bar = Some(hide_status_bar);
        self
    }

    #[must_use]
    pub fn floating(mut self, floating: bool) -> Self {
        self.overrides.floating = Some(floating);
        self
    }

    #[must_use]
    pub fn style(mut self, style: EdgeSpacing) -> Self {
        self.overrides.style = Some(style);
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: TransitionFn) -> Self {
        self.overrides.transition = Some(transition);
        self
    }

    #[must_use]
    pub fn on_show(mut self, callback: ShowCallback) -> Self {
        self.overrides.on_show = Some(callback);
        self
    }

    #[must_use]
    pub fn on_hide(mut self, callback: HideCallback) -> Self {
        self.overrides.on_hide = Some(callback);
        self
    }

    #[must_use]
    pub fn on_press(mut self, callback: PressCallback) -> Self {
        self.overrides.on_press = Some(callback);
        self
    }

    #[must_use]
    pub fn on_long_press(mut self, callback: PressCallback) -> Self {
        self.overrides.on_long_press = Some(callback);
        self
    }

    /// Whether this content is the implicit-hide sentinel.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.is_empty()
    }

    /// Whether the message has a non-empty secondary line.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

impl fmt::Debug for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContent")
            .field("message", &self.message)
            .field("description", &self.description)
            .field("message_type", &self.message_type)
            .field("background_color", &self.background_color)
            .field("color", &self.color)
            .field("icon", &self.icon)
            .field("overrides", &self.overrides)
            .finish()
    }
}

impl From<&str> for MessageContent {
    fn from(message: &str) -> Self {
        MessageContent::new(message)
    }
}

impl From<String> for MessageContent {
    fn from(message: String) -> Self {
        MessageContent::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_normalizes_to_default_content() {
        let content: MessageContent = "saved".into();
        assert_eq!(content.message, "saved");
        assert!(content.description.is_none());
        assert_eq!(content.message_type, MessageType::Default);
    }

    #[test]
    fn constructors_set_semantic_type() {
        assert_eq!(MessageContent::success("s").message_type, MessageType::Success);
        assert_eq!(MessageContent::info("i").message_type, MessageType::Info);
        assert_eq!(MessageContent::warning("w").message_type, MessageType::Warning);
        assert_eq!(MessageContent::danger("d").message_type, MessageType::Danger);
    }

    #[test]
    fn empty_message_is_blank() {
        assert!(MessageContent::new("").is_blank());
        assert!(!MessageContent::new("x").is_blank());
    }

    #[test]
    fn has_description_requires_non_empty_text() {
        assert!(!MessageContent::new("x").has_description());
        assert!(!MessageContent::new("x").description("").has_description());
        assert!(MessageContent::new("x").description("details").has_description());
    }

    #[test]
    fn builder_fills_overrides() {
        let content = MessageContent::new("x")
            .animated(false)
            .duration(Duration::from_millis(100))
            .floating(true);

        assert_eq!(content.overrides.animated, Some(false));
        assert_eq!(content.overrides.duration, Some(Duration::from_millis(100)));
        assert_eq!(content.overrides.floating, Some(true));
        assert!(content.overrides.auto_hide.is_none());
    }

    #[test]
    fn auto_icon_resolves_from_message_type() {
        let icon = Icon::auto();
        assert_eq!(
            icon.resolved_for(MessageType::Success).map(|i| i.kind),
            Some(IconKind::Success)
        );
        assert_eq!(
            icon.resolved_for(MessageType::Danger).map(|i| i.kind),
            Some(IconKind::Danger)
        );
        assert!(icon.resolved_for(MessageType::Default).is_none());
        assert!(icon.resolved_for(MessageType::None).is_none());
    }

    #[test]
    fn concrete_icon_keeps_its_kind_and_side() {
        let icon = Icon::new(IconKind::Warning).on_right();
        let resolved = icon.resolved_for(MessageType::Success).expect("icon");
        assert_eq!(resolved.kind, IconKind::Warning);
        assert_eq!(resolved.position, IconPosition::Right);
    }
}
