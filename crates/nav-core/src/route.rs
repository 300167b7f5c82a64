//! Route values
//!
//! A [`Route`] identifies a navigable destination. The navigator treats it as
//! opaque: the only thing it relies on is identity, which is carried by a
//! unique key generated when the route is created. Clones share the key, so a
//! cloned route is the *same* route as far as the stack is concerned.

use std::collections::HashMap;

use crate::scene_config::SceneConfig;

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

/// A navigable destination
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Unique identity key
    key: String,
    /// Route name (screen identifier)
    name: String,
    /// Route parameters
    params: RouteParams,
    /// Title shown in the navigation bar
    title: Option<String>,
    /// Preferred transition when this route is presented
    scene_config: Option<SceneConfig>,
}

impl Route {
    /// Create a new route with a fresh identity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            params: RouteParams::new(),
            title: None,
            scene_config: None,
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the navigation bar title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the preferred transition
    pub fn with_scene_config(mut self, config: SceneConfig) -> Self {
        self.scene_config = Some(config);
        self
    }

    /// Identity key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Route name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All parameters
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Get a single parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Title for the navigation bar, falling back to the route name
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Preferred transition, if any
    pub fn scene_config(&self) -> Option<SceneConfig> {
        self.scene_config
    }

    /// Identity comparison: true when both values denote the same route
    ///
    /// Two routes built with identical names and parameters are still
    /// different routes.
    pub fn is_same(&self, other: &Route) -> bool {
        self.key == other.key
    }
}
