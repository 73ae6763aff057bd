// SPDX-License-Identifier: MPL-2.0
//! Safe-area facts and the provider capability.
//!
//! Device geometry (viewport size, device class, status bar height) is
//! consumed, never measured, by this crate. A host supplies a
//! [`SafeAreaProvider`]; the widget re-reads its metrics on every paint and
//! holds a [`Subscription`] so it learns about orientation changes and stops
//! listening when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Coarse device classification driving inset rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Phone,
    /// Phones with a notch or home indicator needing extra insets.
    NotchedPhone,
    Tablet,
}

impl DeviceClass {
    #[must_use]
    pub fn is_notched(self) -> bool {
        matches!(self, DeviceClass::NotchedPhone)
    }
}

/// A snapshot of the geometry facts the widget needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMetrics {
    pub width: f32,
    pub height: f32,
    pub device_class: DeviceClass,
    /// Height reported by the platform for the status bar, in viewport units.
    pub status_bar_height: f32,
}

impl DeviceMetrics {
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        DeviceMetrics {
            width: 375.0,
            height: 667.0,
            device_class: DeviceClass::Phone,
            status_bar_height: 20.0,
        }
    }
}

/// Notified with the new metrics whenever geometry changes.
pub type SafeAreaCallback = Rc<dyn Fn(DeviceMetrics)>;

/// Supplies geometry facts and change notifications.
pub trait SafeAreaProvider {
    fn metrics(&self) -> DeviceMetrics;

    /// Registers a change listener. The listener stays active until the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, callback: SafeAreaCallback) -> Subscription;
}

/// Scoped registration with a [`SafeAreaProvider`]; unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription(..)")
    }
}

struct FixedInner {
    metrics: DeviceMetrics,
    subscribers: Vec<(u64, SafeAreaCallback)>,
    next_id: u64,
}

/// An in-process provider holding explicit metrics.
///
/// Hosts without live geometry events can construct one and update it
/// manually; tests use it to script orientation changes.
#[derive(Clone)]
pub struct FixedMetrics {
    inner: Rc<RefCell<FixedInner>>,
}

impl FixedMetrics {
    #[must_use]
    pub fn new(metrics: DeviceMetrics) -> Self {
        FixedMetrics {
            inner: Rc::new(RefCell::new(FixedInner {
                metrics,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Replaces the metrics and notifies all subscribers.
    pub fn set_metrics(&self, metrics: DeviceMetrics) {
        let callbacks: Vec<SafeAreaCallback> = {
            let mut inner = self.inner.borrow_mut();
            inner.metrics = metrics;
            inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect()
        };
        // Invoked outside the borrow so a callback may read metrics() again.
        for callback in callbacks {
            callback(metrics);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        FixedMetrics::new(DeviceMetrics::default())
    }
}

impl SafeAreaProvider for FixedMetrics {
    fn metrics(&self) -> DeviceMetrics {
        self.inner.borrow().metrics
    }

    fn subscribe(&self, callback: SafeAreaCallback) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback));
            id
        };
        let inner = Rc::clone(&self.inner);
        Subscription::new(move || {
            inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
        })
    }
}

impl fmt::Debug for FixedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedMetrics")
            .field("metrics", &self.inner.borrow().metrics)
            .field("subscribers", &self.inner.borrow().subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_metrics_are_portrait_phone() {
        let metrics = DeviceMetrics::default();
        assert!(!metrics.is_landscape());
        assert_eq!(metrics.device_class, DeviceClass::Phone);
    }

    #[test]
    fn landscape_is_width_over_height() {
        let metrics = DeviceMetrics {
            width: 667.0,
            height: 375.0,
            ..DeviceMetrics::default()
        };
        assert!(metrics.is_landscape());
    }

    #[test]
    fn set_metrics_notifies_subscribers() {
        let provider = FixedMetrics::default();
        let seen = Rc::new(Cell::new(0.0f32));
        let seen_in_cb = Rc::clone(&seen);

        let subscription = provider.subscribe(Rc::new(move |m| seen_in_cb.set(m.width)));
        provider.set_metrics(DeviceMetrics {
            width: 800.0,
            height: 400.0,
            ..DeviceMetrics::default()
        });

        assert_eq!(seen.get(), 800.0);
        assert_eq!(provider.metrics().width, 800.0);
        drop(subscription);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let provider = FixedMetrics::default();
        let subscription = provider.subscribe(Rc::new(|_| {}));
        assert_eq!(provider.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[test]
    fn subscriptions_are_independent() {
        let provider = FixedMetrics::default();
        let first = provider.subscribe(Rc::new(|_| {}));
        let second = provider.subscribe(Rc::new(|_| {}));

        drop(first);
        assert_eq!(provider.subscriber_count(), 1);
        drop(second);
        assert_eq!(provider.subscriber_count(), 0);
    }
}
