//! Navigator bridge
//!
//! This crate mediates between application views and a stack navigator. The
//! navigator keeps its own transition logic; the bridge interposes on the
//! points where the navigator renders a scene, shows its navigation bar, or
//! is told to change its route stack:
//!
//! - focus notifications are relayed to the route renderer, with the
//!   subscription made during the first render so the navigator's mount-time
//!   notification is not lost
//! - navigation bar props are derived from the renderer and configuration
//! - stack mutations go through a facade that a [`TransitionGate`] can
//!   switch off
//! - the root scene's mounted view is captured in a [`SceneRef`]
//!
//! # Modules
//!
//! - [`bridge`] - [`NavigatorBridge`] and its builder
//! - [`facade`] - [`NavigationFacade`], the gated navigation API
//! - [`lifecycle`] - Handle tracking and the subscription state machine
//! - [`focus`] - Focus event relay
//! - [`scene`] - Scene rendering pipeline
//! - [`bar`] - Navigation bar synchronizer
//! - [`renderer`] - Route rendering strategy traits
//! - [`config`] - Bridge configuration
//! - [`gate`] - Transition gate
//! - [`styles`] - Base styles
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use nav_bridge::{
//!     BridgeConfig, NavigationBarRouteMapper, NavigationFacade, NavigatorBridge, RouteRenderer,
//! };
//! use nav_core::{MemoryNavigator, Route, View};
//!
//! struct Titles;
//!
//! impl NavigationBarRouteMapper for Titles {
//!     fn title(&self, route: &Route, _: usize, _: &[Route]) -> Option<View> {
//!         Some(View::new("Title").with_prop("text", route.title()))
//!     }
//!     fn left_button(&self, _: &Route, _: usize, _: &[Route]) -> Option<View> {
//!         None
//!     }
//!     fn right_button(&self, _: &Route, _: usize, _: &[Route]) -> Option<View> {
//!         None
//!     }
//! }
//!
//! struct Screens;
//!
//! impl RouteRenderer for Screens {
//!     fn render_scene(&self, route: &Route, _bridge: &NavigatorBridge) -> View {
//!         View::new("Scene").with_prop("route", route.name())
//!     }
//!     fn navigation_bar_route_mapper(&self) -> Arc<dyn NavigationBarRouteMapper> {
//!         Arc::new(Titles)
//!     }
//! }
//!
//! let bridge = NavigatorBridge::new(BridgeConfig::default(), Arc::new(Screens));
//! let navigator = MemoryNavigator::new(vec![Route::new("home")]).unwrap();
//! navigator.mount(bridge.clone()).unwrap();
//!
//! bridge.push(Route::new("detail")).unwrap();
//! assert_eq!(bridge.current_routes().unwrap().len(), 2);
//! assert!(bridge.first_scene().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bar;
pub mod bridge;
pub mod config;
pub mod error;
pub mod facade;
pub mod focus;
pub mod gate;
pub mod lifecycle;
pub mod renderer;
pub mod scene;
pub mod styles;

pub use bar::{default_navigation_bar, BarProps, NavigationBarSynchronizer, RenderNavigationBar};
pub use bridge::{NavigatorBridge, NavigatorBridgeBuilder};
pub use config::{BridgeConfig, RendererStyles};
pub use error::{BridgeError, Result};
pub use facade::{Dispatch, NavigationFacade};
pub use focus::FocusRelay;
pub use gate::TransitionGate;
pub use lifecycle::{LifecycleManager, LifecycleState};
pub use renderer::{NavigationBarRouteMapper, RouteRenderer};
pub use scene::{AugmentScene, ScenePipeline, SceneRef};
