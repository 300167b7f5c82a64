//! Shared fixtures for the integration tests

#![allow(dead_code)]

use nav_bridge::{BridgeConfig, NavigationBarRouteMapper, NavigationFacade, NavigatorBridge, RouteRenderer};
use nav_core::{FocusEvent, MemoryNavigator, Route, View};
use parking_lot::Mutex;
use std::sync::Arc;

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bar mapper showing the route title and a back button above the root
pub struct TitleMapper;

impl NavigationBarRouteMapper for TitleMapper {
    fn title(&self, route: &Route, _index: usize, _routes: &[Route]) -> Option<View> {
        Some(View::new("Title").with_prop("text", route.title()))
    }

    fn left_button(&self, _route: &Route, index: usize, _routes: &[Route]) -> Option<View> {
        (index > 0).then(|| View::new("BackButton"))
    }

    fn right_button(&self, _route: &Route, _index: usize, _routes: &[Route]) -> Option<View> {
        None
    }
}

/// Renderer recording what it renders and which focus events it sees
#[derive(Default)]
pub struct RecordingRenderer {
    renders: Mutex<Vec<String>>,
    focus: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    pub fn renders(&self) -> Vec<String> {
        self.renders.lock().clone()
    }

    pub fn focus(&self) -> Vec<String> {
        self.focus.lock().clone()
    }
}

impl RouteRenderer for RecordingRenderer {
    fn render_scene(&self, route: &Route, bridge: &NavigatorBridge) -> View {
        self.renders.lock().push(route.name().to_string());
        // Routes may query the bridge while they render
        let depth = bridge.current_routes().map(|routes| routes.len()).unwrap_or(0);
        View::new("Scene")
            .with_key(route.key())
            .with_prop("route", route.name())
            .with_prop("depth", depth as u64)
    }

    fn navigation_bar_route_mapper(&self) -> Arc<dyn NavigationBarRouteMapper> {
        Arc::new(TitleMapper)
    }

    fn on_will_focus(&self, event: &FocusEvent) {
        self.focus
            .lock()
            .push(format!("{}:{}", event.event_type, event.route.name()));
    }

    fn on_did_focus(&self, event: &FocusEvent) {
        self.focus
            .lock()
            .push(format!("{}:{}", event.event_type, event.route.name()));
    }
}

/// A bridge, its renderer, and an unmounted navigator over `names`
pub struct Fixture {
    pub bridge: Arc<NavigatorBridge>,
    pub renderer: Arc<RecordingRenderer>,
    pub navigator: Arc<MemoryNavigator>,
    pub routes: Vec<Route>,
}

impl Fixture {
    pub fn new(names: &[&str]) -> Self {
        Self::with_config(names, BridgeConfig::default())
    }

    pub fn with_config(names: &[&str], config: BridgeConfig) -> Self {
        init_tracing();
        let renderer = Arc::new(RecordingRenderer::default());
        let bridge = NavigatorBridge::new(config, renderer.clone());
        Self::assemble(names, bridge, renderer)
    }

    pub fn assemble(
        names: &[&str],
        bridge: Arc<NavigatorBridge>,
        renderer: Arc<RecordingRenderer>,
    ) -> Self {
        let routes: Vec<Route> = names.iter().map(|name| Route::new(*name)).collect();
        let navigator = MemoryNavigator::new(routes.clone()).expect("non-empty route list");
        Self {
            bridge,
            renderer,
            navigator,
            routes,
        }
    }

    /// Mount the navigator under the bridge
    pub fn mount(&self) -> anyhow::Result<()> {
        self.navigator.mount(self.bridge.clone())?;
        Ok(())
    }

    /// Route names currently on the stack
    pub fn names(&self) -> Vec<String> {
        self.bridge
            .current_routes()
            .expect("bridge is mounted")
            .iter()
            .map(|route| route.name().to_string())
            .collect()
    }
}
