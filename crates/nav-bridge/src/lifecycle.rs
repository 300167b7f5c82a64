//! Lifecycle ref manager
//!
//! A navigator emits its first focus notification while it is mounting,
//! before it hands out its handle. The bridge therefore subscribes during
//! the first render, and the handle registration only confirms that this
//! happened:
//!
//! ```text
//! Unmounted --first render / subscribe--> Rendering --handle acquired--> Mounted
//!     ^                                                                    |
//!     +--------------------handle released / unsubscribe-------------------+
//! ```
//!
//! The handle itself is held weakly; the navigator owns it.

use nav_core::{NavigationContext, StackHandle};
use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, Weak};

use crate::error::{BridgeError, Result};
use crate::focus::FocusRelay;

/// Bridge lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No navigator, no subscription
    #[default]
    Unmounted,
    /// Subscribed during the first render, waiting for the handle
    Rendering,
    /// Handle acquired and subscribed
    Mounted,
}

/// Tracks the navigator handle and the focus subscription lifecycle
pub struct LifecycleManager {
    relay: FocusRelay,
    state: Mutex<LifecycleState>,
    handle: RwLock<Option<Weak<dyn StackHandle>>>,
    /// Parent used before a handle is available
    parent_fallback: Option<Weak<dyn StackHandle>>,
}

impl LifecycleManager {
    /// Create a manager in the [`LifecycleState::Unmounted`] state
    pub fn new(relay: FocusRelay, parent_fallback: Option<Weak<dyn StackHandle>>) -> Self {
        Self {
            relay,
            state: Mutex::new(LifecycleState::Unmounted),
            handle: RwLock::new(None),
            parent_fallback,
        }
    }

    /// Current state
    pub fn state(&self) -> LifecycleState {
        *self.state.lock()
    }

    /// Check if the focus listeners are registered
    pub fn is_subscribed(&self) -> bool {
        self.relay.is_subscribed()
    }

    /// Run at the start of every scene render
    ///
    /// The first call for a handle subscribes to its focus events. Every
    /// call records `navigator` as the current handle, since routes may call
    /// back into the bridge before the handle is registered. A second live
    /// navigator is rejected with [`BridgeError::ForeignNavigator`].
    pub fn begin_render(&self, navigator: &Arc<dyn StackHandle>) -> Result<()> {
        if !self.relay.is_subscribed_to(navigator.as_ref()) {
            self.relay.subscribe(navigator.as_ref())?;
            *self.state.lock() = LifecycleState::Rendering;
        }
        self.store(Some(navigator));
        Ok(())
    }

    /// Handle registration callback: `Some` on mount, `None` on unmount
    ///
    /// Registration requires that an earlier render subscribed to this
    /// handle's hub.
    pub fn on_handle_acquired(&self, navigator: Option<Arc<dyn StackHandle>>) -> Result<()> {
        match navigator {
            Some(navigator) => {
                if self.relay.is_subscribed_elsewhere(navigator.as_ref()) {
                    return Err(BridgeError::ForeignNavigator);
                }
                self.store(Some(&navigator));
                if !self.relay.is_subscribed_to(navigator.as_ref()) {
                    return Err(BridgeError::SubscriptionMissing);
                }
                *self.state.lock() = LifecycleState::Mounted;
                tracing::debug!("Navigator handle acquired");
                Ok(())
            }
            None => {
                let unsubscribed = self.relay.unsubscribe();
                self.store(None);
                *self.state.lock() = LifecycleState::Unmounted;
                tracing::debug!("Navigator handle released");
                unsubscribed
            }
        }
    }

    /// The navigator handle
    pub fn handle(&self) -> Result<Arc<dyn StackHandle>> {
        self.current().ok_or(BridgeError::NotMounted)
    }

    /// The navigator's notification hub
    pub fn navigation_context(&self) -> Result<Arc<NavigationContext>> {
        Ok(self.handle()?.navigation_context())
    }

    /// Enclosing navigator
    ///
    /// Before a handle exists this falls back to the parent given at
    /// construction; afterwards it asks the handle.
    pub fn parent_navigator(&self) -> Option<Arc<dyn StackHandle>> {
        match self.current() {
            Some(navigator) => navigator.parent_navigator(),
            None => self.parent_fallback.as_ref().and_then(Weak::upgrade),
        }
    }

    fn current(&self) -> Option<Arc<dyn StackHandle>> {
        self.handle.read().as_ref().and_then(Weak::upgrade)
    }

    fn store(&self, navigator: Option<&Arc<dyn StackHandle>>) {
        *self.handle.write() = navigator.map(Arc::downgrade);
    }
}
