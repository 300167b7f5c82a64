//! Navigation bar synchronizer
//!
//! Builds the props handed to the navigation bar renderer. Nothing is
//! cached: props are rebuilt from the current configuration on every pass.

use nav_core::{Style, View};
use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::renderer::{NavigationBarRouteMapper, RouteRenderer};
use crate::styles;

/// Props for the navigation bar renderer
#[derive(Clone)]
pub struct BarProps {
    /// Route to bar content mapping, owned by the route renderer
    pub route_mapper: Arc<dyn NavigationBarRouteMapper>,
    /// Base bar style merged with the configured override
    pub style: Style,
}

impl std::fmt::Debug for BarProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarProps")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Navigation bar renderer; returning `None` renders no bar
pub type RenderNavigationBar = Arc<dyn Fn(BarProps) -> Option<View> + Send + Sync>;

/// Default bar renderer
pub fn default_navigation_bar(props: BarProps) -> Option<View> {
    Some(View::new("NavigationBar").with_style(&props.style))
}

/// Produces bar props and the bar view
pub struct NavigationBarSynchronizer {
    render: RenderNavigationBar,
}

impl Default for NavigationBarSynchronizer {
    fn default() -> Self {
        Self::new(Arc::new(default_navigation_bar))
    }
}

impl NavigationBarSynchronizer {
    /// Create a synchronizer with a custom bar renderer
    pub fn new(render: RenderNavigationBar) -> Self {
        Self { render }
    }

    /// Props for the bar renderer
    pub fn build_bar_props(
        &self,
        renderer: &dyn RouteRenderer,
        config: &BridgeConfig,
    ) -> BarProps {
        BarProps {
            route_mapper: renderer.navigation_bar_route_mapper(),
            style: styles::bar().merge_opt(config.navigation_bar_style.as_ref()),
        }
    }

    /// The bar view, or `None` when hidden
    pub fn render(&self, renderer: &dyn RouteRenderer, config: &BridgeConfig) -> Option<View> {
        if !config.show_navigation_bar {
            return None;
        }
        (self.render)(self.build_bar_props(renderer, config))
    }
}
