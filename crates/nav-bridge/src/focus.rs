//! Focus event relay
//!
//! Forwards the navigator's will-focus and did-focus notifications to the
//! route renderer. Both listeners are registered and removed together, and
//! the pair remembers the hub it was registered on.

use nav_core::{
    FocusEvent, NavigationContext, StackHandle, Subscription, DID_FOCUS_EVENT, WILL_FOCUS_EVENT,
};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use crate::error::{BridgeError, Result};
use crate::renderer::RouteRenderer;

/// The will-focus/did-focus subscription pair
#[derive(Debug)]
struct FocusSubscriptions {
    hub: Weak<NavigationContext>,
    will_focus: Subscription,
    did_focus: Subscription,
}

impl FocusSubscriptions {
    /// The hub still exists
    fn is_live(&self) -> bool {
        self.hub.strong_count() > 0
    }

    fn is_on(&self, hub: &Arc<NavigationContext>) -> bool {
        self.hub.upgrade().is_some_and(|own| Arc::ptr_eq(&own, hub))
    }

    fn remove(mut self) {
        self.will_focus.remove();
        self.did_focus.remove();
    }
}

/// Relays focus notifications to a [`RouteRenderer`]
pub struct FocusRelay {
    renderer: Arc<dyn RouteRenderer>,
    subscriptions: Mutex<Option<FocusSubscriptions>>,
}

impl FocusRelay {
    /// Create an unsubscribed relay
    pub fn new(renderer: Arc<dyn RouteRenderer>) -> Self {
        Self {
            renderer,
            subscriptions: Mutex::new(None),
        }
    }

    /// Check if the listener pair is registered on a live hub
    pub fn is_subscribed(&self) -> bool {
        self.subscriptions
            .lock()
            .as_ref()
            .is_some_and(FocusSubscriptions::is_live)
    }

    /// Check if the listener pair is registered on `navigator`'s hub
    pub fn is_subscribed_to(&self, navigator: &dyn StackHandle) -> bool {
        let hub = navigator.navigation_context();
        self.subscriptions
            .lock()
            .as_ref()
            .is_some_and(|pair| pair.is_on(&hub))
    }

    /// Check if the listener pair is registered on a live hub other than
    /// `navigator`'s
    pub fn is_subscribed_elsewhere(&self, navigator: &dyn StackHandle) -> bool {
        let hub = navigator.navigation_context();
        self.subscriptions
            .lock()
            .as_ref()
            .is_some_and(|pair| pair.is_live() && !pair.is_on(&hub))
    }

    /// Register both listeners on the navigator's hub
    ///
    /// A pair left behind by a navigator that no longer exists is discarded
    /// first. Fails with [`BridgeError::AlreadySubscribed`] if the pair is
    /// already on this hub, and with [`BridgeError::ForeignNavigator`] if it
    /// is on another live hub.
    pub fn subscribe(&self, navigator: &dyn StackHandle) -> Result<()> {
        let context = navigator.navigation_context();
        let mut subscriptions = self.subscriptions.lock();
        match subscriptions.take() {
            Some(pair) if pair.is_on(&context) => {
                *subscriptions = Some(pair);
                return Err(BridgeError::AlreadySubscribed);
            }
            Some(pair) if pair.is_live() => {
                *subscriptions = Some(pair);
                return Err(BridgeError::ForeignNavigator);
            }
            Some(stale) => {
                tracing::debug!("Dropping focus listeners of a released navigator");
                stale.remove();
            }
            None => {}
        }

        let renderer = self.renderer.clone();
        let will_focus = context.add_listener(WILL_FOCUS_EVENT, move |event: &FocusEvent| {
            renderer.on_will_focus(event)
        });
        let renderer = self.renderer.clone();
        let did_focus = context.add_listener(DID_FOCUS_EVENT, move |event: &FocusEvent| {
            renderer.on_did_focus(event)
        });

        *subscriptions = Some(FocusSubscriptions {
            hub: Arc::downgrade(&context),
            will_focus,
            did_focus,
        });
        tracing::debug!("Subscribed to navigator focus events");
        Ok(())
    }

    /// Remove both listeners
    ///
    /// Fails with [`BridgeError::NotSubscribed`] if nothing is registered.
    pub fn unsubscribe(&self) -> Result<()> {
        let subscriptions = self
            .subscriptions
            .lock()
            .take()
            .ok_or(BridgeError::NotSubscribed)?;
        subscriptions.remove();
        tracing::debug!("Unsubscribed from navigator focus events");
        Ok(())
    }
}
