//! Route rendering strategy
//!
//! The bridge does not know how a route turns into a view. That is the job
//! of a [`RouteRenderer`], which also supplies the navigation bar mapping and
//! receives the relayed focus notifications.

use nav_core::{FocusEvent, Route, SceneConfig, View};
use std::sync::Arc;

use crate::bridge::NavigatorBridge;

/// Maps a route to the pieces of the navigation bar
pub trait NavigationBarRouteMapper: Send + Sync {
    /// Title view for `route` at `index` in `routes`
    fn title(&self, route: &Route, index: usize, routes: &[Route]) -> Option<View>;

    /// Left button view, usually "back"
    fn left_button(&self, route: &Route, index: usize, routes: &[Route]) -> Option<View>;

    /// Right button view
    fn right_button(&self, route: &Route, index: usize, routes: &[Route]) -> Option<View>;
}

/// Strategy that renders routes for the bridge
#[cfg_attr(test, mockall::automock)]
pub trait RouteRenderer: Send + Sync {
    /// Render the scene for `route`
    fn render_scene(&self, route: &Route, bridge: &NavigatorBridge) -> View;

    /// Transition to use when `route` is presented
    fn configure_scene(&self, route: &Route) -> SceneConfig {
        route.scene_config().unwrap_or_default()
    }

    /// Route to navigation bar mapping
    fn navigation_bar_route_mapper(&self) -> Arc<dyn NavigationBarRouteMapper>;

    /// A route is about to be presented
    fn on_will_focus(&self, _event: &FocusEvent) {}

    /// A route has been presented
    fn on_did_focus(&self, _event: &FocusEvent) {}
}
