// SPDX-License-Identifier: MPL-2.0
//! Safe-area inset computation and transition styling.
//!
//! Nothing here is widget state: a [`ComputedStyle`] is derived from the
//! current geometry facts and the current message on every paint. The rules
//! mirror the directional-inset behavior described in the crate docs: top
//! inset for top-anchored messages, home-indicator insets on notched devices
//! for bottom-anchored messages, and symmetric side insets in landscape on
//! notched devices.

use crate::config::{Position, StatusBarHeight};
use crate::safe_area::DeviceMetrics;
use std::convert::Infallible;
use std::rc::Rc;
use std::str::FromStr;

/// Vertical travel of the default show/hide transition, and the minimum
/// height renderers should give the banner.
pub const OFFSET_HEIGHT: f32 = 48.0;

/// Side inset on notched devices in landscape, clearing the sensor housing.
const NOTCH_INSET_HORIZONTAL: f32 = 21.0;

/// Home-indicator clearance for bottom-anchored messages on notched devices.
const NOTCH_INSET_BOTTOM_PORTRAIT: f32 = 34.0;
const NOTCH_INSET_BOTTOM_LANDSCAPE: f32 = 24.0;

/// One spacing value, absolute or relative to viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    Px(f32),
    /// Percentage of the viewport width, resolved at paint time.
    Percent(f32),
}

impl Spacing {
    pub const ZERO: Spacing = Spacing::Px(0.0);

    /// Resolves to absolute units against the current viewport width.
    #[must_use]
    pub fn to_absolute(self, viewport_width: f32) -> f32 {
        match self {
            Spacing::Px(value) => value,
            Spacing::Percent(percent) => percent / 100.0 * viewport_width,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::ZERO
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::Px(value)
    }
}

impl FromStr for Spacing {
    type Err = Infallible;

    /// Parses `"12"` as pixels and `"10%"` as a percentage. Unparseable
    /// numbers coerce to zero; spacing is best-effort, never an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(number) = s.strip_suffix('%') {
            Ok(Spacing::Percent(number.trim().parse().unwrap_or(0.0)))
        } else {
            Ok(Spacing::Px(s.parse().unwrap_or(0.0)))
        }
    }
}

/// Per-edge spacing of the message body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeSpacing {
    pub top: Spacing,
    pub bottom: Spacing,
    pub left: Spacing,
    pub right: Spacing,
}

impl EdgeSpacing {
    #[must_use]
    pub fn all(spacing: Spacing) -> Self {
        EdgeSpacing {
            top: spacing,
            bottom: spacing,
            left: spacing,
            right: spacing,
        }
    }

    #[must_use]
    pub fn symmetric(vertical: Spacing, horizontal: Spacing) -> Self {
        EdgeSpacing {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

/// Whether computed spacing applies as padding or margin.
///
/// Floating messages use margins so the banner is displaced clear of the
/// device chrome instead of growing into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingMode {
    Padding,
    Margin,
}

/// The directional insets derived from device geometry for one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapperInset {
    pub status_bar_height: f32,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub is_landscape: bool,
    pub is_notched: bool,
}

impl WrapperInset {
    /// Computes insets for a message anchored at `position` under the given
    /// geometry facts.
    #[must_use]
    pub fn compute(
        metrics: &DeviceMetrics,
        position: Position,
        custom_status_bar: Option<&StatusBarHeight>,
    ) -> WrapperInset {
        let is_landscape = metrics.is_landscape();
        let is_notched = metrics.device_class.is_notched();
        let status_bar = status_bar_height(metrics, custom_status_bar);

        let at_top = matches!(position, Position::Top);
        let at_bottom = matches!(position, Position::Bottom);
        let at_edge = at_top || at_bottom;

        WrapperInset {
            status_bar_height: status_bar,
            top: if at_top { status_bar } else { 0.0 },
            bottom: if is_notched && at_bottom {
                if is_landscape {
                    NOTCH_INSET_BOTTOM_LANDSCAPE
                } else {
                    NOTCH_INSET_BOTTOM_PORTRAIT
                }
            } else {
                0.0
            },
            left: if at_edge && is_landscape && is_notched {
                NOTCH_INSET_HORIZONTAL
            } else {
                0.0
            },
            right: if at_edge && is_landscape && is_notched {
                NOTCH_INSET_HORIZONTAL
            } else {
                0.0
            },
            is_landscape,
            is_notched,
        }
    }
}

/// Status bar height to factor into the top inset.
///
/// A configured override wins; otherwise the provider's reported height is
/// used, suppressed in landscape on phones (where the bar is not drawn).
#[must_use]
pub fn status_bar_height(metrics: &DeviceMetrics, custom: Option<&StatusBarHeight>) -> f32 {
    let is_landscape = metrics.is_landscape();
    if let Some(custom) = custom {
        return custom.resolve(is_landscape);
    }
    match metrics.device_class {
        crate::safe_area::DeviceClass::Tablet => metrics.status_bar_height,
        _ if is_landscape => 0.0,
        _ => metrics.status_bar_height,
    }
}

/// The spacing of a message after merging device insets, in absolute units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub mode: SpacingMode,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Merges message spacing with the computed inset.
///
/// Percentages resolve against the viewport width. When the status bar is
/// being suppressed on a non-notched device the top inset is dropped, since
/// there is no chrome left to clear.
#[must_use]
pub fn with_inset(
    spacing: EdgeSpacing,
    inset: &WrapperInset,
    hide_status_bar: bool,
    mode: SpacingMode,
    viewport_width: f32,
) -> ComputedStyle {
    let top_inset = if inset.is_notched || !hide_status_bar {
        inset.top
    } else {
        0.0
    };

    ComputedStyle {
        mode,
        top: spacing.top.to_absolute(viewport_width) + top_inset,
        bottom: spacing.bottom.to_absolute(viewport_width) + inset.bottom,
        left: spacing.left.to_absolute(viewport_width) + inset.left,
        right: spacing.right.to_absolute(viewport_width) + inset.right,
    }
}

/// Transform applied by the renderer for the current animation progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub translate_y: f32,
    pub opacity: f32,
}

impl TransitionStyle {
    /// The fully shown, at-rest transform.
    pub const SETTLED: TransitionStyle = TransitionStyle {
        translate_y: 0.0,
        opacity: 1.0,
    };
}

/// Maps animation progress to a transition style.
pub type TransitionFn = Rc<dyn Fn(f32, Position) -> TransitionStyle>;

/// The default transition: fade combined with a vertical slide from the
/// anchored edge. Center and custom positions only fade.
#[must_use]
pub fn default_transition(progress: f32, position: Position) -> TransitionStyle {
    let translate_y = match position {
        Position::Top => -OFFSET_HEIGHT * (1.0 - progress),
        Position::Bottom => OFFSET_HEIGHT * (1.0 - progress),
        Position::Center | Position::Custom(_) => 0.0,
    };
    TransitionStyle {
        translate_y,
        opacity: progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe_area::DeviceClass;
    use approx::assert_abs_diff_eq;

    fn metrics(width: f32, height: f32, class: DeviceClass, status_bar: f32) -> DeviceMetrics {
        DeviceMetrics {
            width,
            height,
            device_class: class,
            status_bar_height: status_bar,
        }
    }

    #[test]
    fn spacing_parses_pixels_and_percent() {
        assert_eq!("12".parse::<Spacing>().unwrap(), Spacing::Px(12.0));
        assert_eq!("10%".parse::<Spacing>().unwrap(), Spacing::Percent(10.0));
        assert_eq!(" 7.5% ".parse::<Spacing>().unwrap(), Spacing::Percent(7.5));
    }

    #[test]
    fn spacing_coerces_garbage_to_zero() {
        assert_eq!("abc%".parse::<Spacing>().unwrap(), Spacing::Percent(0.0));
        assert_eq!("".parse::<Spacing>().unwrap(), Spacing::Px(0.0));
        assert_eq!("x1".parse::<Spacing>().unwrap(), Spacing::Px(0.0));
    }

    #[test]
    fn percent_resolves_against_viewport_width() {
        assert_abs_diff_eq!(Spacing::Percent(10.0).to_absolute(400.0), 40.0);
        assert_abs_diff_eq!(Spacing::Px(15.0).to_absolute(400.0), 15.0);
    }

    #[test]
    fn top_position_gets_status_bar_inset() {
        let m = metrics(375.0, 667.0, DeviceClass::Phone, 20.0);
        let inset = WrapperInset::compute(&m, Position::Top, None);
        assert_abs_diff_eq!(inset.top, 20.0);
        assert_abs_diff_eq!(inset.bottom, 0.0);
        assert_abs_diff_eq!(inset.left, 0.0);
    }

    #[test]
    fn bottom_position_has_no_top_inset() {
        let m = metrics(375.0, 667.0, DeviceClass::Phone, 20.0);
        let inset = WrapperInset::compute(&m, Position::Bottom, None);
        assert_abs_diff_eq!(inset.top, 0.0);
        assert_abs_diff_eq!(inset.bottom, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn notched_bottom_gets_home_indicator_clearance() {
        let portrait = metrics(375.0, 812.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&portrait, Position::Bottom, None);
        assert_abs_diff_eq!(inset.bottom, NOTCH_INSET_BOTTOM_PORTRAIT);

        let landscape = metrics(812.0, 375.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&landscape, Position::Bottom, None);
        assert_abs_diff_eq!(inset.bottom, NOTCH_INSET_BOTTOM_LANDSCAPE);
    }

    #[test]
    fn notched_landscape_gets_symmetric_side_insets() {
        let m = metrics(812.0, 375.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&m, Position::Top, None);
        assert_abs_diff_eq!(inset.left, NOTCH_INSET_HORIZONTAL);
        assert_abs_diff_eq!(inset.right, NOTCH_INSET_HORIZONTAL);

        let portrait = metrics(375.0, 812.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&portrait, Position::Top, None);
        assert_abs_diff_eq!(inset.left, 0.0);
    }

    #[test]
    fn center_position_gets_no_directional_insets() {
        let m = metrics(812.0, 375.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&m, Position::Center, None);
        assert_abs_diff_eq!(inset.top, 0.0);
        assert_abs_diff_eq!(inset.bottom, 0.0);
        assert_abs_diff_eq!(inset.left, 0.0);
        assert_abs_diff_eq!(inset.right, 0.0);
    }

    #[test]
    fn status_bar_suppressed_in_landscape_on_phones() {
        let landscape = metrics(667.0, 375.0, DeviceClass::Phone, 20.0);
        assert_abs_diff_eq!(status_bar_height(&landscape, None), 0.0);

        let notched = metrics(812.0, 375.0, DeviceClass::NotchedPhone, 44.0);
        assert_abs_diff_eq!(status_bar_height(&notched, None), 0.0);

        let tablet = metrics(1024.0, 768.0, DeviceClass::Tablet, 20.0);
        assert_abs_diff_eq!(status_bar_height(&tablet, None), 20.0);
    }

    #[test]
    fn custom_status_bar_height_wins() {
        let m = metrics(667.0, 375.0, DeviceClass::Phone, 20.0);
        let custom = StatusBarHeight::Fixed(31.0);
        assert_abs_diff_eq!(status_bar_height(&m, Some(&custom)), 31.0);
    }

    #[test]
    fn percent_padding_sums_with_device_inset() {
        // "10%" on a 400-wide viewport is 40 units; with a 20-unit status bar
        // the final top padding for a top-anchored message is 60.
        let m = metrics(400.0, 800.0, DeviceClass::Phone, 20.0);
        let inset = WrapperInset::compute(&m, Position::Top, None);
        let spacing = EdgeSpacing {
            top: "10%".parse().unwrap(),
            ..EdgeSpacing::default()
        };

        let style = with_inset(spacing, &inset, false, SpacingMode::Padding, m.width);
        assert_abs_diff_eq!(style.top, 60.0);
        assert_eq!(style.mode, SpacingMode::Padding);
    }

    #[test]
    fn hiding_status_bar_drops_top_inset_on_plain_devices() {
        let m = metrics(375.0, 667.0, DeviceClass::Phone, 20.0);
        let inset = WrapperInset::compute(&m, Position::Top, None);
        let spacing = EdgeSpacing::all(Spacing::Px(10.0));

        let style = with_inset(spacing, &inset, true, SpacingMode::Padding, m.width);
        assert_abs_diff_eq!(style.top, 10.0);
    }

    #[test]
    fn notched_devices_keep_top_inset_even_with_hidden_status_bar() {
        let m = metrics(375.0, 812.0, DeviceClass::NotchedPhone, 44.0);
        let inset = WrapperInset::compute(&m, Position::Top, None);
        let spacing = EdgeSpacing::all(Spacing::Px(10.0));

        let style = with_inset(spacing, &inset, true, SpacingMode::Padding, m.width);
        assert_abs_diff_eq!(style.top, 10.0 + inset.top);
    }

    #[test]
    fn default_transition_slides_from_anchored_edge() {
        let start = default_transition(0.0, Position::Top);
        assert_abs_diff_eq!(start.translate_y, -OFFSET_HEIGHT);
        assert_abs_diff_eq!(start.opacity, 0.0);

        let halfway = default_transition(0.5, Position::Bottom);
        assert_abs_diff_eq!(halfway.translate_y, OFFSET_HEIGHT / 2.0);
        assert_abs_diff_eq!(halfway.opacity, 0.5);

        let done = default_transition(1.0, Position::Top);
        assert_eq!(done, TransitionStyle::SETTLED);
    }

    #[test]
    fn center_transition_only_fades() {
        let style = default_transition(0.25, Position::Center);
        assert_abs_diff_eq!(style.translate_y, 0.0);
        assert_abs_diff_eq!(style.opacity, 0.25);
    }
}
