//! Guarded navigation facade
//!
//! Every stack mutation is defined once here, as a provided method of
//! [`NavigationFacade`]. An implementor supplies the handle and the gate
//! state; the methods check the gate and forward to the handle.
//!
//! A call made while transitions are disabled is not an error: it returns
//! [`Dispatch::Suppressed`] and leaves the stack untouched.
//! `replace_previous_and_pop` is the one mutation that ignores the gate.

use nav_core::{Route, StackHandle};
use std::sync::Arc;

use crate::error::{BridgeError, Result};

/// Outcome of a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The call reached the navigator
    Forwarded,
    /// Transitions were disabled; nothing happened
    Suppressed,
}

impl Dispatch {
    /// Check if the call reached the navigator
    pub fn is_forwarded(&self) -> bool {
        matches!(self, Dispatch::Forwarded)
    }
}

fn gated<T, F>(facade: &T, operation: &'static str, forward: F) -> Result<Dispatch>
where
    T: NavigationFacade + ?Sized,
    F: FnOnce(&dyn StackHandle) -> nav_core::Result<()>,
{
    if facade.transitions_disabled() {
        tracing::debug!(operation, "Transitions disabled, ignoring navigation call");
        return Ok(Dispatch::Suppressed);
    }
    let navigator = facade.stack_handle()?;
    forward(navigator.as_ref())?;
    Ok(Dispatch::Forwarded)
}

/// Stack navigation API with a transition gate
pub trait NavigationFacade {
    /// The navigator to forward to
    fn stack_handle(&self) -> Result<Arc<dyn StackHandle>>;

    /// Whether mutating calls are currently suppressed
    fn transitions_disabled(&self) -> bool;

    /// Current routes, bottom to top. Never gated.
    fn current_routes(&self) -> Result<Vec<Route>> {
        Ok(self.stack_handle()?.current_routes())
    }

    /// Push a route
    fn push(&self, route: Route) -> Result<Dispatch> {
        gated(self, "push", |navigator| navigator.push(route))
    }

    /// Pop the presented route
    fn pop(&self) -> Result<Dispatch> {
        gated(self, "pop", |navigator| navigator.pop())
    }

    /// Replace the presented route
    fn replace(&self, route: Route) -> Result<Dispatch> {
        gated(self, "replace", |navigator| navigator.replace(route))
    }

    /// Replace the route at `index`
    fn replace_at_index(&self, route: Route, index: isize) -> Result<Dispatch> {
        gated(self, "replace_at_index", |navigator| {
            navigator.replace_at_index(route, index)
        })
    }

    /// Replace the route below the presented one
    fn replace_previous(&self, route: Route) -> Result<Dispatch> {
        gated(self, "replace_previous", |navigator| {
            navigator.replace_previous(route)
        })
    }

    /// Replace the previous route and pop back to it. Not gated.
    fn replace_previous_and_pop(&self, route: Route) -> Result<Dispatch> {
        self.stack_handle()?.replace_previous_and_pop(route)?;
        Ok(Dispatch::Forwarded)
    }

    /// Reset the stack to a single route
    fn reset_to(&self, route: Route) -> Result<Dispatch> {
        gated(self, "reset_to", |navigator| navigator.reset_to(route))
    }

    /// Replace the whole stack without a transition
    fn immediately_reset_route_stack(&self, routes: Vec<Route>) -> Result<Dispatch> {
        gated(self, "immediately_reset_route_stack", |navigator| {
            navigator.immediately_reset_route_stack(routes)
        })
    }

    /// Pop every route above `route`
    fn pop_to_route(&self, route: &Route) -> Result<Dispatch> {
        gated(self, "pop_to_route", |navigator| navigator.pop_to_route(route))
    }

    /// Pop back to the root route
    fn pop_to_top(&self) -> Result<Dispatch> {
        gated(self, "pop_to_top", |navigator| navigator.pop_to_top())
    }

    /// Present the previous route, keeping the forward history
    fn jump_back(&self) -> Result<Dispatch> {
        gated(self, "jump_back", |navigator| navigator.jump_back())
    }

    /// Present the next route in the forward history
    fn jump_forward(&self) -> Result<Dispatch> {
        gated(self, "jump_forward", |navigator| navigator.jump_forward())
    }

    /// Present an existing route
    fn jump_to(&self, route: &Route) -> Result<Dispatch> {
        gated(self, "jump_to", |navigator| navigator.jump_to(route))
    }

    /// Make `route` the root and pop everything above it
    fn transition_to_top(&self, route: Route) -> Result<Dispatch> {
        self.replace_at_index(route, 0)?;
        self.pop_to_top()
    }

    /// Pop back `n` routes; `pop_back(1)` behaves like `pop()`
    ///
    /// Fails with [`BridgeError::PopBackOutOfRange`] when `n` is not smaller
    /// than the stack depth.
    fn pop_back(&self, n: usize) -> Result<Dispatch> {
        let routes = self.current_routes()?;
        if n >= routes.len() {
            return Err(BridgeError::PopBackOutOfRange {
                requested: n,
                depth: routes.len(),
            });
        }
        self.pop_to_route(&routes[routes.len() - n - 1])
    }
}
