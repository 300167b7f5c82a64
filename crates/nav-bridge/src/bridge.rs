//! Navigator bridge
//!
//! [`NavigatorBridge`] sits between application code and a stack navigator.
//! The navigator sees it as its [`NavigatorHost`]: it renders scenes through
//! the bridge and registers its handle with it. Application code sees the
//! [`NavigationFacade`], a gated pass-through to that handle.

use nav_core::{
    HostError, MountedView, NavigationContext, NavigatorHost, Route, SceneConfig, StackHandle,
    Style, View,
};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use crate::bar::{BarProps, NavigationBarSynchronizer, RenderNavigationBar};
use crate::config::{BridgeConfig, RendererStyles};
use crate::error::Result;
use crate::facade::NavigationFacade;
use crate::focus::FocusRelay;
use crate::gate::TransitionGate;
use crate::lifecycle::{LifecycleManager, LifecycleState};
use crate::renderer::RouteRenderer;
use crate::scene::{AugmentScene, ScenePipeline, SceneRef};
use crate::styles;

/// Builder for [`NavigatorBridge`]
pub struct NavigatorBridgeBuilder {
    config: BridgeConfig,
    augment_scene: Option<AugmentScene>,
    render_navigation_bar: Option<RenderNavigationBar>,
    parent_navigator: Option<Weak<dyn StackHandle>>,
    first_scene: Option<SceneRef>,
    gate: Option<TransitionGate>,
}

impl NavigatorBridgeBuilder {
    /// Hook applied to every rendered scene
    pub fn augment_scene<F>(mut self, augment: F) -> Self
    where
        F: Fn(View, &Route) -> View + Send + Sync + 'static,
    {
        self.augment_scene = Some(Arc::new(augment));
        self
    }

    /// Custom navigation bar renderer
    pub fn render_navigation_bar<F>(mut self, render: F) -> Self
    where
        F: Fn(BarProps) -> Option<View> + Send + Sync + 'static,
    {
        self.render_navigation_bar = Some(Arc::new(render));
        self
    }

    /// Navigator enclosing this one, reported until a handle is acquired
    pub fn parent_navigator(mut self, parent: &Arc<dyn StackHandle>) -> Self {
        self.parent_navigator = Some(Arc::downgrade(parent));
        self
    }

    /// Caller-owned slot for the first scene
    pub fn first_scene_ref(mut self, first_scene: SceneRef) -> Self {
        self.first_scene = Some(first_scene);
        self
    }

    /// Shared transition gate
    pub fn gate(mut self, gate: TransitionGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Build the bridge, creating its renderer from the resolved styles
    ///
    /// Only the styles resolved here reach the renderer.
    pub fn build<F>(self, make_renderer: F) -> Arc<NavigatorBridge>
    where
        F: FnOnce(&RendererStyles) -> Arc<dyn RouteRenderer>,
    {
        let renderer_styles = self.config.renderer_styles();
        let renderer = make_renderer(&renderer_styles);
        let relay = FocusRelay::new(renderer.clone());

        Arc::new(NavigatorBridge {
            config: RwLock::new(self.config),
            renderer_styles,
            renderer,
            lifecycle: LifecycleManager::new(relay, self.parent_navigator),
            scenes: ScenePipeline::new(self.augment_scene, self.first_scene.unwrap_or_default()),
            bar: self
                .render_navigation_bar
                .map(NavigationBarSynchronizer::new)
                .unwrap_or_default(),
            gate: self.gate.unwrap_or_default(),
        })
    }
}

/// Mediates between application code and a stack navigator
pub struct NavigatorBridge {
    config: RwLock<BridgeConfig>,
    renderer_styles: RendererStyles,
    renderer: Arc<dyn RouteRenderer>,
    lifecycle: LifecycleManager,
    scenes: ScenePipeline,
    bar: NavigationBarSynchronizer,
    gate: TransitionGate,
}

impl NavigatorBridge {
    /// Start building a bridge
    pub fn builder(config: BridgeConfig) -> NavigatorBridgeBuilder {
        NavigatorBridgeBuilder {
            config,
            augment_scene: None,
            render_navigation_bar: None,
            parent_navigator: None,
            first_scene: None,
            gate: None,
        }
    }

    /// Build a bridge with default hooks around an existing renderer
    pub fn new(config: BridgeConfig, renderer: Arc<dyn RouteRenderer>) -> Arc<Self> {
        Self::builder(config).build(move |_| renderer)
    }

    // =========================================================================
    // Navigator callbacks
    // =========================================================================

    /// Render the scene for `route`
    pub fn render_scene(&self, route: &Route, navigator: Arc<dyn StackHandle>) -> Result<View> {
        self.scenes.render(self, route, navigator)
    }

    /// Transition to use for `route`
    pub fn configure_scene(&self, route: &Route) -> SceneConfig {
        self.renderer.configure_scene(route)
    }

    /// Handle registration: `Some` on mount, `None` on unmount
    pub fn on_handle_acquired(&self, navigator: Option<Arc<dyn StackHandle>>) -> Result<()> {
        self.lifecycle.on_handle_acquired(navigator)
    }

    // =========================================================================
    // Navigation bar
    // =========================================================================

    /// Props for the navigation bar renderer
    pub fn build_bar_props(&self) -> BarProps {
        let config = self.config.read().clone();
        self.bar.build_bar_props(self.renderer.as_ref(), &config)
    }

    /// The navigation bar view, or `None` when hidden
    pub fn render_navigation_bar(&self) -> Option<View> {
        let config = self.config.read().clone();
        self.bar.render(self.renderer.as_ref(), &config)
    }

    // =========================================================================
    // Navigator properties
    // =========================================================================

    /// The navigator's notification hub
    pub fn navigation_context(&self) -> Result<Arc<NavigationContext>> {
        self.lifecycle.navigation_context()
    }

    /// Enclosing navigator
    pub fn parent_navigator(&self) -> Option<Arc<dyn StackHandle>> {
        self.lifecycle.parent_navigator()
    }

    /// Lifecycle state
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Check if focus events are being relayed
    pub fn is_subscribed(&self) -> bool {
        self.lifecycle.is_subscribed()
    }

    /// The mounted first scene
    pub fn first_scene(&self) -> Option<MountedView> {
        self.scenes.first_scene().get()
    }

    /// Slot holding the first scene
    pub fn first_scene_ref(&self) -> &SceneRef {
        self.scenes.first_scene()
    }

    /// The transition gate
    pub fn gate(&self) -> &TransitionGate {
        &self.gate
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current configuration
    pub fn config(&self) -> BridgeConfig {
        self.config.read().clone()
    }

    /// Replace the configuration
    ///
    /// Bar visibility and container styles follow the new configuration on
    /// the next render pass. Title and bar button styles were handed to the
    /// renderer at construction and do not change.
    pub fn update_config(&self, config: BridgeConfig) {
        *self.config.write() = config;
    }

    /// Styles the renderer was built with
    pub fn renderer_styles(&self) -> &RendererStyles {
        &self.renderer_styles
    }

    /// Scene container style
    pub fn scene_style(&self) -> Style {
        styles::scene().merge_opt(self.config.read().scene_style.as_ref())
    }

    /// Navigator container style
    pub fn navigator_style(&self) -> Style {
        styles::navigator().merge_opt(self.config.read().style.as_ref())
    }

    pub(crate) fn lifecycle(&self) -> &LifecycleManager {
        &self.lifecycle
    }

    pub(crate) fn renderer(&self) -> &dyn RouteRenderer {
        self.renderer.as_ref()
    }
}

impl NavigationFacade for NavigatorBridge {
    fn stack_handle(&self) -> Result<Arc<dyn StackHandle>> {
        self.lifecycle.handle()
    }

    fn transitions_disabled(&self) -> bool {
        self.gate.is_disabled()
    }
}

impl NavigatorHost for NavigatorBridge {
    fn render_scene(
        &self,
        route: &Route,
        navigator: Arc<dyn StackHandle>,
    ) -> std::result::Result<View, HostError> {
        Ok(NavigatorBridge::render_scene(self, route, navigator)?)
    }

    fn configure_scene(&self, route: &Route) -> SceneConfig {
        NavigatorBridge::configure_scene(self, route)
    }

    fn on_handle_acquired(
        &self,
        navigator: Option<Arc<dyn StackHandle>>,
    ) -> std::result::Result<(), HostError> {
        Ok(NavigatorBridge::on_handle_acquired(self, navigator)?)
    }
}
