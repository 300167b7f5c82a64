//! Scene view model
//!
//! A [`View`] is the description of what a navigator shows for a route: a
//! kind, serializable props and children, in the same way UI components are
//! modelled elsewhere. A view may carry a ref callback; the engine calls it
//! with the [`MountedView`] when the view is mounted and with `None` when it
//! is unmounted.
//!
//! [`clone_referenced`] attaches an additional ref to a view without
//! dropping the ref it already had.

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::style::Style;

/// Callback invoked on mount (`Some`) and unmount (`None`)
pub type RefCallback = Arc<dyn Fn(Option<MountedView>) + Send + Sync>;

/// A mounted view instance
#[derive(Debug, Clone, PartialEq)]
pub struct MountedView {
    /// Unique instance id
    pub instance_id: String,
    /// View kind
    pub kind: String,
    /// View key
    pub key: Option<String>,
    /// Props at mount time
    pub props: Map<String, Value>,
}

/// A renderable view description
#[derive(Clone, Default)]
pub struct View {
    /// Component kind (e.g. "Scene", "NavigationBar")
    pub kind: String,
    /// Reconciliation key
    pub key: Option<String>,
    /// Serializable props
    pub props: Map<String, Value>,
    /// Child views
    pub children: Vec<View>,
    view_ref: Option<RefCallback>,
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("has_ref", &self.view_ref.is_some())
            .finish()
    }
}

/// Views compare by content; refs are ignored.
impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.key == other.key
            && self.props == other.props
            && self.children == other.children
    }
}

impl View {
    /// Create a new view of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Set the key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set a prop
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Set a prop from a serializable value
    pub fn try_with_prop<T>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> serde_json::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.props.insert(name.into(), value);
        Ok(self)
    }

    /// Set the `style` prop
    ///
    /// A style that cannot be serialized is logged and left unset.
    pub fn with_style(mut self, style: &Style) -> Self {
        match serde_json::to_value(style) {
            Ok(value) => {
                self.props.insert("style".to_string(), value);
            }
            Err(err) => {
                tracing::warn!("Failed to serialize style for {}: {}", self.kind, err);
            }
        }
        self
    }

    /// Add a child view
    pub fn with_child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    /// Set the ref callback, replacing any existing one
    pub fn with_ref(mut self, view_ref: RefCallback) -> Self {
        self.view_ref = Some(view_ref);
        self
    }

    /// Get a prop
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// Check if a ref callback is attached
    pub fn has_ref(&self) -> bool {
        self.view_ref.is_some()
    }

    /// Mount the view, notifying its ref
    pub fn mount(&self) -> MountedView {
        let instance = MountedView {
            instance_id: uuid::Uuid::new_v4().to_string(),
            kind: self.kind.clone(),
            key: self.key.clone(),
            props: self.props.clone(),
        };
        if let Some(view_ref) = &self.view_ref {
            view_ref(Some(instance.clone()));
        }
        instance
    }

    /// Unmount the view, notifying its ref
    pub fn unmount(&self) {
        if let Some(view_ref) = &self.view_ref {
            view_ref(None);
        }
    }
}

/// Clone `view` with an extra ref attached
///
/// The original view is left untouched. If it already had a ref, the clone
/// calls the original ref first and then `view_ref`.
pub fn clone_referenced(view: &View, view_ref: RefCallback) -> View {
    let combined: RefCallback = match view.view_ref.clone() {
        Some(original) => Arc::new(move |instance: Option<MountedView>| {
            original(instance.clone());
            view_ref(instance);
        }),
        None => view_ref,
    };

    let mut clone = view.clone();
    clone.view_ref = Some(combined);
    clone
}
