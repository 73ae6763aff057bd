// SPDX-License-Identifier: MPL-2.0
//! `flash_message` is a renderer-agnostic core for transient notification
//! banners ("flash messages" or toasts).
//!
//! It owns the parts of such a system with real lifecycle logic — the
//! per-slot visibility state machine, the registry that routes global calls
//! to the right mounted instance, and safe-area aware style computation —
//! and consumes everything platform-specific (animation, timers, device
//! geometry, status bar, drawing) through small capability traits.
//!
//! Application code shows and hides messages through the facade functions
//! without holding a reference to any mounted widget:
//!
//! ```
//! use flash_message::config::WidgetConfig;
//! use flash_message::driver::{InstantAnimations, TickTimers};
//! use flash_message::registry::{Registry, WidgetHandle};
//! use flash_message::widget::FlashMessage;
//! use flash_message::{hide_message, show_message};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut registry = Registry::new();
//! let widget = WidgetHandle::new(FlashMessage::new(
//!     WidgetConfig::default(),
//!     Rc::new(RefCell::new(InstantAnimations)),
//!     Rc::new(RefCell::new(TickTimers::new())),
//! ));
//! registry.register(&widget);
//!
//! show_message(&registry, "Contact sent");
//! hide_message(&registry);
//! ```

#![doc(html_root_url = "https://docs.rs/flash_message/0.1.0")]

pub mod config;
pub mod driver;
pub mod error;
pub mod message;
pub mod registry;
pub mod renderer;
pub mod safe_area;
pub mod style;
pub mod theme;
pub mod widget;

pub use config::WidgetConfig;
pub use message::{MessageContent, MessageType};
pub use registry::{Registry, WidgetHandle};
pub use theme::set_color_theme;
pub use widget::{FlashMessage, Phase};

/// Shows a message on the current widget instance.
///
/// A silent no-op while the registry is disabled or when no instance is
/// current; never raises, never logs.
pub fn show_message(registry: &Registry, content: impl Into<MessageContent>) {
    if !registry.is_enabled() {
        return;
    }
    if let Some(instance) = registry.current() {
        instance.show_message(content);
    }
}

/// Hides whatever the current widget instance is showing.
///
/// Same no-op rules as [`show_message`].
pub fn hide_message(registry: &Registry) {
    if !registry.is_enabled() {
        return;
    }
    if let Some(instance) = registry.current() {
        instance.hide_message();
    }
}
