// SPDX-License-Identifier: MPL-2.0
//! The rendering seam.
//!
//! The widget never draws. On each paint it composes a [`MessageView`] — the
//! resolved colors, icon, spacing and transition for the current message —
//! and a host-supplied [`MessageRenderer`] turns that snapshot into toolkit
//! output. The snapshot is recomputed from current geometry facts every time;
//! it is never stored.

use crate::config::{resolve, resolve_optional, Position, WidgetConfig};
use crate::message::{Icon, MessageContent};
use crate::safe_area::DeviceMetrics;
use crate::style::{
    with_inset, ComputedStyle, SpacingMode, TransitionStyle, WrapperInset,
};
use crate::theme::{self, palette};
use iced_core::Color;

/// Everything a renderer needs to draw one message.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub message: MessageContent,
    pub position: Position,
    pub floating: bool,
    pub background: Color,
    pub foreground: Color,
    /// Icon with `Auto` already resolved against the message type.
    pub icon: Option<Icon>,
    pub style: ComputedStyle,
    pub transition: TransitionStyle,
}

impl MessageView {
    /// Resolves options, theme colors and geometry into a paintable snapshot.
    #[must_use]
    pub fn compose(
        message: &MessageContent,
        config: &WidgetConfig,
        progress: f32,
        metrics: &DeviceMetrics,
    ) -> MessageView {
        let m = Some(message);
        let position = resolve(m, |o| o.position, config.position);
        let floating = resolve(m, |o| o.floating, config.floating);
        let animated = resolve(m, |o| o.animated, config.animated);
        let hide_status_bar =
            resolve(m, |o| o.hide_status_bar, config.hide_status_bar).applies_at(position);
        let status_bar_override = resolve_optional(
            m,
            |o| o.status_bar_height.clone(),
            config.status_bar_height.clone(),
        );

        let inset = WrapperInset::compute(metrics, position, status_bar_override.as_ref());
        let spacing = resolve(m, |o| o.style, config.style);
        let mode = if floating {
            SpacingMode::Margin
        } else {
            SpacingMode::Padding
        };
        let style = with_inset(spacing, &inset, hide_status_bar, mode, metrics.width);

        let theme = theme::current();
        let background = message
            .background_color
            .or_else(|| theme.color(message.message_type))
            .unwrap_or(palette::DEFAULT_BACKGROUND);
        let foreground = message.color.unwrap_or(palette::TEXT);

        let transition = if animated {
            let transition_fn = resolve_optional(
                m,
                |o| o.transition.clone(),
                Some(config.transition.clone()),
            );
            match transition_fn {
                Some(f) => f(progress, position),
                None => TransitionStyle::SETTLED,
            }
        } else {
            TransitionStyle::SETTLED
        };

        let icon = message
            .icon
            .and_then(|icon| icon.resolved_for(message.message_type));

        MessageView {
            message: message.clone(),
            position,
            floating,
            background,
            foreground,
            icon,
            style,
            transition,
        }
    }
}

/// Turns a [`MessageView`] into host-toolkit output.
pub trait MessageRenderer {
    type Output;

    fn render(&self, view: &MessageView) -> Self::Output;
}

/// Turns a resolved [`Icon`] into host-toolkit output.
pub trait IconRenderer {
    type Output;

    fn render_icon(&self, icon: Icon, foreground: Color) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HideStatusBar;
    use crate::message::{IconKind, MessageType};
    use crate::safe_area::DeviceClass;
    use crate::style::{EdgeSpacing, Spacing};
    use crate::theme::THEME_TEST_LOCK;
    use approx::assert_abs_diff_eq;
    use std::rc::Rc;
    use std::sync::PoisonError;

    fn phone_metrics() -> DeviceMetrics {
        DeviceMetrics {
            width: 400.0,
            height: 800.0,
            device_class: DeviceClass::Phone,
            status_bar_height: 20.0,
        }
    }

    #[test]
    fn background_prefers_explicit_color_over_theme() {
        let _guard = THEME_TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let config = WidgetConfig::default();
        let explicit = Color::from_rgb8(1, 2, 3);
        let message = MessageContent::success("saved").background_color(explicit);

        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_eq!(view.background, explicit);
    }

    #[test]
    fn background_falls_back_to_theme_then_default() {
        let _guard = THEME_TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let config = WidgetConfig::default();

        let typed = MessageContent::danger("oops");
        let view = MessageView::compose(&typed, &config, 1.0, &phone_metrics());
        assert_eq!(view.background, palette::DANGER);

        let untyped = MessageContent::new("hello");
        let view = MessageView::compose(&untyped, &config, 1.0, &phone_metrics());
        assert_eq!(view.background, palette::DEFAULT_BACKGROUND);
    }

    #[test]
    fn foreground_defaults_to_text_color() {
        let config = WidgetConfig::default();
        let message = MessageContent::new("hello");
        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_eq!(view.foreground, palette::TEXT);
    }

    #[test]
    fn floating_message_uses_margin_mode() {
        let config = WidgetConfig::default();
        let message = MessageContent::new("hello").floating(true);
        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_eq!(view.style.mode, SpacingMode::Margin);
    }

    #[test]
    fn message_position_override_drives_insets() {
        let config = WidgetConfig::default();
        let message = MessageContent::new("hello")
            .position(Position::Bottom)
            .style(EdgeSpacing::all(Spacing::ZERO));

        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_eq!(view.position, Position::Bottom);
        assert_abs_diff_eq!(view.style.top, 0.0);
    }

    #[test]
    fn transition_is_settled_when_animation_disabled() {
        let config = WidgetConfig::default();
        let message = MessageContent::new("hello").animated(false);
        let view = MessageView::compose(&message, &config, 0.0, &phone_metrics());
        assert_eq!(view.transition, TransitionStyle::SETTLED);
    }

    #[test]
    fn custom_transition_override_is_applied() {
        let config = WidgetConfig::default();
        let message = MessageContent::new("hello").transition(Rc::new(|progress, _| {
            TransitionStyle {
                translate_y: 100.0 * progress,
                opacity: 1.0,
            }
        }));

        let view = MessageView::compose(&message, &config, 0.5, &phone_metrics());
        assert_abs_diff_eq!(view.transition.translate_y, 50.0);
    }

    #[test]
    fn auto_icon_resolves_against_type() {
        let config = WidgetConfig::default();
        let message = MessageContent::warning("careful").icon(Icon::auto());
        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_eq!(view.icon.map(|i| i.kind), Some(IconKind::Warning));

        let untyped = MessageContent::new("plain").icon(Icon::auto());
        let view = MessageView::compose(&untyped, &config, 1.0, &phone_metrics());
        assert!(view.icon.is_none());
    }

    #[test]
    fn hidden_status_bar_drops_top_inset() {
        let config = WidgetConfig {
            hide_status_bar: HideStatusBar::Yes,
            style: EdgeSpacing::all(Spacing::ZERO),
            ..WidgetConfig::default()
        };
        let message = MessageContent::new("hello");
        let view = MessageView::compose(&message, &config, 1.0, &phone_metrics());
        assert_abs_diff_eq!(view.style.top, 0.0);
    }

    #[test]
    fn untyped_message_type_is_default() {
        assert_eq!(MessageContent::new("x").message_type, MessageType::Default);
    }
}
