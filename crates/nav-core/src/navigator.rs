//! Host engine traits
//!
//! [`StackHandle`] is the live object a stack navigator hands out: the route
//! list, the mutation methods and the notification hub. [`NavigatorHost`] is
//! the other direction, the callbacks the navigator invokes on whoever
//! embeds it.

use std::sync::Arc;

use crate::context::NavigationContext;
use crate::error::Result;
use crate::route::Route;
use crate::scene_config::SceneConfig;
use crate::view::View;

/// Error type returned by host callbacks
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Live handle to a navigator's route stack
pub trait StackHandle: Send + Sync {
    /// Current routes, bottom to top
    fn current_routes(&self) -> Vec<Route>;

    /// Push a route and present it
    fn push(&self, route: Route) -> Result<()>;

    /// Pop the presented route
    fn pop(&self) -> Result<()>;

    /// Replace the presented route
    fn replace(&self, route: Route) -> Result<()>;

    /// Replace the route at `index` (negative indices count from the top)
    fn replace_at_index(&self, route: Route, index: isize) -> Result<()>;

    /// Replace the route below the presented one
    fn replace_previous(&self, route: Route) -> Result<()>;

    /// Replace the previous route and pop back to it
    fn replace_previous_and_pop(&self, route: Route) -> Result<()>;

    /// Reset the stack to a single route
    fn reset_to(&self, route: Route) -> Result<()>;

    /// Replace the whole stack without a transition
    fn immediately_reset_route_stack(&self, routes: Vec<Route>) -> Result<()>;

    /// Pop every route above `route`
    fn pop_to_route(&self, route: &Route) -> Result<()>;

    /// Pop back to the root route
    fn pop_to_top(&self) -> Result<()>;

    /// Present the previous route, keeping the forward history
    fn jump_back(&self) -> Result<()>;

    /// Present the next route in the forward history
    fn jump_forward(&self) -> Result<()>;

    /// Present an existing route, keeping the rest of the stack
    fn jump_to(&self, route: &Route) -> Result<()>;

    /// Focus notification hub
    fn navigation_context(&self) -> Arc<NavigationContext>;

    /// Enclosing navigator, if this one is nested
    fn parent_navigator(&self) -> Option<Arc<dyn StackHandle>>;
}

/// Callbacks a navigator invokes on its embedder
pub trait NavigatorHost: Send + Sync {
    /// Produce the scene for `route`
    fn render_scene(
        &self,
        route: &Route,
        navigator: Arc<dyn StackHandle>,
    ) -> std::result::Result<View, HostError>;

    /// Transition to use when `route` is presented
    fn configure_scene(&self, route: &Route) -> SceneConfig;

    /// Called with the handle after mount and with `None` on unmount
    fn on_handle_acquired(
        &self,
        navigator: Option<Arc<dyn StackHandle>>,
    ) -> std::result::Result<(), HostError>;
}
