//! Host navigation engine primitives
//!
//! This crate provides the collaborator side of the navigator bridge:
//! route values, the route stack, the focus notification hub, the traits
//! a host navigation engine implements, and an in-memory engine.
//!
//! # Modules
//!
//! - [`route`] - Opaque, identity-comparable route values
//! - [`stack`] - Ordered route stack with a presented index
//! - [`context`] - Focus notification hub and listener subscriptions
//! - [`navigator`] - Host engine traits ([`StackHandle`], [`NavigatorHost`])
//! - [`scene_config`] - Transition configurations
//! - [`view`] - Scene view model and the view-cloning utility
//! - [`style`] - Mergeable style properties
//! - [`memory`] - In-memory host engine
//!
//! # Example
//!
//! ```rust
//! use nav_core::{Route, RouteStack};
//!
//! let home = Route::new("home");
//! let mut stack = RouteStack::new(home.clone());
//! stack.push(Route::new("detail"));
//!
//! assert_eq!(stack.depth(), 2);
//! assert!(stack.routes()[0].is_same(&home));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod memory;
pub mod navigator;
pub mod route;
pub mod scene_config;
pub mod stack;
pub mod style;
pub mod view;

pub use context::{FocusEvent, NavigationContext, Subscription, DID_FOCUS_EVENT, WILL_FOCUS_EVENT};
pub use error::{NavigatorError, Result};
pub use memory::{MemoryNavigator, Transition, TransitionKind};
pub use navigator::{HostError, NavigatorHost, StackHandle};
pub use route::{Route, RouteParams};
pub use scene_config::SceneConfig;
pub use stack::RouteStack;
pub use style::Style;
pub use view::{clone_referenced, MountedView, RefCallback, View};
