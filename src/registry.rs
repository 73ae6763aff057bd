// SPDX-License-Identifier: MPL-2.0
//! The instance registry.
//!
//! A process typically mounts one widget instance, but a nested surface
//! (modal, sheet) can mount its own and temporarily take over global calls.
//! The registry tracks the live instances and designates exactly one as
//! "current": the target of the facade functions. `hold` displaces the
//! current instance onto a stack; `unhold` restores it.
//!
//! All operations are pure bookkeeping and never fail: double-holds,
//! unregistering a non-current instance and unholding with an empty stack
//! all degrade to no-ops. Registries are explicit values, not ambient
//! globals, so tests can construct isolated ones.

use crate::config::PressEvent;
use crate::driver::{AnimationToken, TimerToken};
use crate::message::MessageContent;
use crate::renderer::MessageView;
use crate::widget::{FlashMessage, InstanceId, Phase};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Cloneable handle to a mounted widget instance.
///
/// Construction wraps the widget once; calling code passes clones of the
/// handle to [`Registry::register`], [`Registry::hold`] and friends, and
/// drives the widget through the forwarding methods.
#[derive(Clone)]
pub struct WidgetHandle {
    id: InstanceId,
    inner: Rc<RefCell<FlashMessage>>,
}

impl WidgetHandle {
    #[must_use]
    pub fn new(widget: FlashMessage) -> Self {
        WidgetHandle {
            id: widget.id(),
            inner: Rc::new(RefCell::new(widget)),
        }
    }

    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn show_message(&self, content: impl Into<MessageContent>) {
        self.inner.borrow_mut().show_message(content);
    }

    pub fn hide_message(&self) {
        self.inner.borrow_mut().hide_message();
    }

    pub fn press(&self, event: PressEvent) {
        self.inner.borrow_mut().press(event);
    }

    pub fn animation_complete(&self, token: AnimationToken) {
        self.inner.borrow_mut().animation_complete(token);
    }

    pub fn animation_progress(&self, token: AnimationToken, value: f32) {
        self.inner.borrow_mut().animation_progress(token, value);
    }

    pub fn timer_fired(&self, token: TimerToken) {
        self.inner.borrow_mut().timer_fired(token);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase()
    }

    #[must_use]
    pub fn current_message(&self) -> Option<MessageContent> {
        self.inner.borrow().current_message().cloned()
    }

    #[must_use]
    pub fn view(&self) -> Option<MessageView> {
        self.inner.borrow().view()
    }

    /// Direct access to the widget, for configuration updates and bindings.
    pub fn with_widget<R>(&self, f: impl FnOnce(&mut FlashMessage) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WidgetHandle").field(&self.id).finish()
    }
}

/// Directory of live widget instances.
///
/// Invariant: the current instance is never also on the held stack; holding
/// always displaces the previous current onto it. Held entries may be
/// "unset" when `hold` was called before any instance registered.
pub struct Registry {
    current: Option<WidgetHandle>,
    held: Vec<Option<WidgetHandle>>,
    enabled: bool,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Registry {
            current: None,
            held: Vec::new(),
            enabled: true,
        }
    }

    /// Registers an instance as current if no instance is current yet.
    /// First registered wins; later registrations are no-ops.
    pub fn register(&mut self, instance: &WidgetHandle) {
        if self.current.is_none() {
            self.current = Some(instance.clone());
        }
    }

    /// Clears the current instance if it is `instance`. Tolerates being
    /// called for an instance that was never current.
    pub fn unregister(&mut self, instance: &WidgetHandle) {
        if self.current_id() == Some(instance.id()) {
            self.current = None;
        }
    }

    /// Displaces the current instance (which may be unset) onto the held
    /// stack and makes `instance` current.
    ///
    /// Idempotent: holding the instance that is already current, or the most
    /// recently held one, has no additional effect. Repeated mount callbacks
    /// must not push duplicates, and re-holding an instance buried deeper in
    /// the stack drops its stale entry so it is never both current and held.
    pub fn hold(&mut self, instance: &WidgetHandle) {
        if self.current_id() == Some(instance.id()) {
            return;
        }
        if let Some(Some(top)) = self.held.last() {
            if top.id() == instance.id() {
                return;
            }
        }
        self.held
            .retain(|h| h.as_ref().map(WidgetHandle::id) != Some(instance.id()));
        self.held.push(self.current.take());
        self.current = Some(instance.clone());
    }

    /// Restores the most recently displaced instance, first hiding whatever
    /// the current instance is showing. No-op when nothing is held.
    pub fn unhold(&mut self) {
        let Some(restored) = self.held.pop() else {
            return;
        };
        if let Some(current) = self.current.take() {
            current.hide_message();
        }
        self.current = restored;
    }

    /// Global kill switch. While disabled, facade calls are dropped silently.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.enabled = !disabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The instance global calls target, or `None` — which callers treat as
    /// "nothing to do", never as an error.
    #[must_use]
    pub fn current(&self) -> Option<&WidgetHandle> {
        self.current.as_ref()
    }

    /// Depth of the held stack.
    #[must_use]
    pub fn held_depth(&self) -> usize {
        self.held.len()
    }

    fn current_id(&self) -> Option<InstanceId> {
        self.current.as_ref().map(WidgetHandle::id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("current", &self.current)
            .field("held_depth", &self.held.len())
            .field("enabled", &self.enabled)
            .finish()
    }
}
