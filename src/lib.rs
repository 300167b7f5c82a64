//! Stack bridge
//!
//! Mediation layer between application views and a stack navigator.
//!
//! - [`nav_core`] - routes, the route stack, focus notifications, host
//!   navigator traits and an in-memory navigator
//! - [`nav_bridge`] - the navigator bridge: focus relay, scene pipeline,
//!   navigation bar synchronizer and the gated navigation facade

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use nav_bridge;
pub use nav_core;

pub use nav_bridge::{
    BridgeConfig, BridgeError, Dispatch, NavigationFacade, NavigatorBridge, RouteRenderer,
    SceneRef, TransitionGate,
};
pub use nav_core::{MemoryNavigator, Route, StackHandle, View};
