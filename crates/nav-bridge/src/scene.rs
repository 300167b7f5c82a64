//! Scene rendering pipeline
//!
//! Every scene the navigator asks for goes through the same steps:
//! lifecycle bookkeeping, the renderer, the optional augmentation hook, and
//! for the root route the first-scene ref.

use nav_core::{clone_referenced, MountedView, RefCallback, Route, StackHandle, View};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::bridge::NavigatorBridge;
use crate::error::Result;

/// Hook applied to every rendered scene
pub type AugmentScene = Arc<dyn Fn(View, &Route) -> View + Send + Sync>;

/// Caller-owned slot for the first scene's mounted view
///
/// Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct SceneRef {
    slot: Arc<RwLock<Option<MountedView>>>,
    assignments: Arc<AtomicUsize>,
}

impl SceneRef {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted first scene, if any
    pub fn get(&self) -> Option<MountedView> {
        self.slot.read().clone()
    }

    /// Check if the slot holds a view
    pub fn is_populated(&self) -> bool {
        self.slot.read().is_some()
    }

    /// How many times a mounted view was written into the slot
    pub fn assignment_count(&self) -> usize {
        self.assignments.load(Ordering::SeqCst)
    }

    /// Ref callback writing into this slot
    pub fn callback(&self) -> RefCallback {
        let target = self.clone();
        Arc::new(move |instance: Option<MountedView>| target.set(instance))
    }

    fn set(&self, instance: Option<MountedView>) {
        if instance.is_some() {
            self.assignments.fetch_add(1, Ordering::SeqCst);
        }
        *self.slot.write() = instance;
    }
}

/// Renders routes into scenes on behalf of the bridge
pub struct ScenePipeline {
    augment: Option<AugmentScene>,
    first_scene: SceneRef,
}

impl ScenePipeline {
    /// Create a pipeline
    pub fn new(augment: Option<AugmentScene>, first_scene: SceneRef) -> Self {
        Self {
            augment,
            first_scene,
        }
    }

    /// The first-scene slot
    pub fn first_scene(&self) -> &SceneRef {
        &self.first_scene
    }

    /// Render `route` for `navigator`
    pub fn render(
        &self,
        bridge: &NavigatorBridge,
        route: &Route,
        navigator: Arc<dyn StackHandle>,
    ) -> Result<View> {
        // Must subscribe before the navigator mounts: it emits its first
        // focus event before handing us a handle.
        bridge.lifecycle().begin_render(&navigator)?;

        let mut scene = bridge.renderer().render_scene(route, bridge);
        if let Some(augment) = &self.augment {
            scene = augment(scene, route);
        }

        let is_first_route = navigator
            .current_routes()
            .first()
            .is_some_and(|first| first.is_same(route));
        if is_first_route {
            tracing::debug!(route = %route.name(), "Attaching first scene ref");
            scene = clone_referenced(&scene, self.first_scene.callback());
        }

        tracing::trace!(route = %route.name(), kind = %scene.kind, "Rendered scene");
        Ok(scene)
    }
}
