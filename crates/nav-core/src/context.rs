//! Focus notification hub
//!
//! Each navigator owns a [`NavigationContext`]. Interested parties register a
//! listener for a named event and get back a [`Subscription`]; removing the
//! subscription unregisters the listener. Listeners are called outside of the
//! registry lock, so a listener may itself add or remove listeners.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::route::Route;

/// Emitted when a route is about to become the presented route
pub const WILL_FOCUS_EVENT: &str = "willfocus";

/// Emitted once a route has become the presented route
pub const DID_FOCUS_EVENT: &str = "didfocus";

/// Focus notification payload
#[derive(Debug, Clone, PartialEq)]
pub struct FocusEvent {
    /// Event name ([`WILL_FOCUS_EVENT`] or [`DID_FOCUS_EVENT`])
    pub event_type: String,
    /// Route gaining focus
    pub route: Route,
}

impl FocusEvent {
    /// Create a will-focus event
    pub fn will_focus(route: Route) -> Self {
        Self {
            event_type: WILL_FOCUS_EVENT.to_string(),
            route,
        }
    }

    /// Create a did-focus event
    pub fn did_focus(route: Route) -> Self {
        Self {
            event_type: DID_FOCUS_EVENT.to_string(),
            route,
        }
    }
}

/// Listener callback
pub type Listener = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

struct ListenerEntry {
    id: u64,
    event_type: String,
    callback: Listener,
}

type Registry = RwLock<Vec<ListenerEntry>>;

/// Notification hub for focus events
#[derive(Default)]
pub struct NavigationContext {
    listeners: Arc<Registry>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationContext")
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl NavigationContext {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event_type`
    pub fn add_listener<F>(&self, event_type: &str, callback: F) -> Subscription
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().push(ListenerEntry {
            id,
            event_type: event_type.to_string(),
            callback: Arc::new(callback),
        });

        Subscription {
            id,
            event_type: event_type.to_string(),
            registry: Some(Arc::downgrade(&self.listeners)),
        }
    }

    /// Deliver an event to every listener registered for its type
    pub fn emit(&self, event: &FocusEvent) {
        let callbacks: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .filter(|entry| entry.event_type == event.event_type)
            .map(|entry| entry.callback.clone())
            .collect();

        tracing::trace!(
            event = %event.event_type,
            route = %event.route.name(),
            listeners = callbacks.len(),
            "Delivering focus event"
        );

        for callback in callbacks {
            callback(event);
        }
    }

    /// Number of listeners registered for `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .read()
            .iter()
            .filter(|entry| entry.event_type == event_type)
            .count()
    }
}

/// Handle to a registered listener
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    event_type: String,
    registry: Option<Weak<Registry>>,
}

impl Subscription {
    /// Event this subscription listens to
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|registry| registry.read().iter().any(|entry| entry.id == self.id))
            .unwrap_or(false)
    }

    /// Unregister the listener. Removing twice has no effect.
    pub fn remove(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            registry.write().retain(|entry| entry.id != self.id);
        }
    }
}
