//! In-memory host engine
//!
//! [`MemoryNavigator`] is a complete stack navigator without animation. It
//! follows the mount order of a real stack navigator: every route is rendered
//! and mounted, the presented route receives its focus notifications, and
//! only after that is the handle delivered to the host through
//! [`NavigatorHost::on_handle_acquired`]. Hosts that want focus events must
//! therefore subscribe while rendering.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::context::{FocusEvent, NavigationContext};
use crate::error::{NavigatorError, Result};
use crate::navigator::{HostError, NavigatorHost, StackHandle};
use crate::route::Route;
use crate::scene_config::SceneConfig;
use crate::stack::RouteStack;
use crate::view::View;

/// Kind of stack change that presented a new route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// A route was pushed
    Push,
    /// Routes were popped
    Pop,
    /// The presented route was replaced
    Replace,
    /// The stack was reset to a new root
    Reset,
    /// The presented index moved without discarding routes
    Jump,
}

/// Record of the last transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Route that became presented
    pub route: Route,
    /// What caused the transition
    pub kind: TransitionKind,
    /// Transition configuration
    pub config: SceneConfig,
}

/// Stack navigator backed by memory
pub struct MemoryNavigator {
    stack: RwLock<RouteStack>,
    /// Mounted scenes keyed by route key
    scenes: Mutex<HashMap<String, View>>,
    context: Arc<NavigationContext>,
    host: RwLock<Option<Weak<dyn NavigatorHost>>>,
    parent: Option<Weak<dyn StackHandle>>,
    last_transition: Mutex<Option<Transition>>,
    this: Weak<MemoryNavigator>,
}

impl std::fmt::Debug for MemoryNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryNavigator")
            .field("stack", &*self.stack.read())
            .field("scenes", &self.scenes.lock().len())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

fn host_error(err: HostError) -> NavigatorError {
    NavigatorError::Host(err.to_string())
}

impl MemoryNavigator {
    /// Create a navigator presenting the last of `initial_routes`
    pub fn new(initial_routes: Vec<Route>) -> Result<Arc<Self>> {
        Self::build(initial_routes, None)
    }

    /// Create a navigator nested inside `parent`
    pub fn with_parent(
        initial_routes: Vec<Route>,
        parent: &Arc<dyn StackHandle>,
    ) -> Result<Arc<Self>> {
        Self::build(initial_routes, Some(Arc::downgrade(parent)))
    }

    fn build(
        initial_routes: Vec<Route>,
        parent: Option<Weak<dyn StackHandle>>,
    ) -> Result<Arc<Self>> {
        let stack = RouteStack::from_routes(initial_routes)?;
        Ok(Arc::new_cyclic(|this| Self {
            stack: RwLock::new(stack),
            scenes: Mutex::new(HashMap::new()),
            context: Arc::new(NavigationContext::new()),
            host: RwLock::new(None),
            parent,
            last_transition: Mutex::new(None),
            this: this.clone(),
        }))
    }

    /// Mount under `host`: render every route, focus the presented one,
    /// then hand the host our handle
    pub fn mount(&self, host: Arc<dyn NavigatorHost>) -> Result<()> {
        *self.host.write() = Some(Arc::downgrade(&host));
        let handle = self.handle()?;

        let routes = self.stack.read().routes().to_vec();
        for route in &routes {
            self.render_route(host.as_ref(), route, &handle)?;
        }

        let presented = self.presented_route();
        self.emit_focus(&presented);

        host.on_handle_acquired(Some(handle)).map_err(host_error)?;
        tracing::debug!(routes = routes.len(), "Navigator mounted");
        Ok(())
    }

    /// Unmount every scene and release the handle
    pub fn unmount(&self) -> Result<()> {
        let host = self.host.write().take().and_then(|weak| weak.upgrade());

        let scenes: Vec<View> = self.scenes.lock().drain().map(|(_, view)| view).collect();
        for view in &scenes {
            view.unmount();
        }

        if let Some(host) = host {
            host.on_handle_acquired(None).map_err(host_error)?;
        }
        tracing::debug!(scenes = scenes.len(), "Navigator unmounted");
        Ok(())
    }

    /// Check if a host is attached
    pub fn is_mounted(&self) -> bool {
        self.host().is_some()
    }

    /// The presented route
    pub fn presented_route(&self) -> Route {
        self.stack.read().current().clone()
    }

    /// Index of the presented route
    pub fn presented_index(&self) -> usize {
        self.stack.read().presented_index()
    }

    /// The last transition, if any happened since mount
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition.lock().clone()
    }

    /// Check if a scene is mounted for `route`
    pub fn has_scene(&self, route: &Route) -> bool {
        self.scenes.lock().contains_key(route.key())
    }

    /// Number of mounted scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.lock().len()
    }

    fn host(&self) -> Option<Arc<dyn NavigatorHost>> {
        self.host.read().as_ref().and_then(Weak::upgrade)
    }

    fn handle(&self) -> Result<Arc<dyn StackHandle>> {
        self.this
            .upgrade()
            .map(|navigator| navigator as Arc<dyn StackHandle>)
            .ok_or(NavigatorError::NotMounted)
    }

    fn render_route(
        &self,
        host: &dyn NavigatorHost,
        route: &Route,
        handle: &Arc<dyn StackHandle>,
    ) -> Result<()> {
        let view = host.render_scene(route, handle.clone()).map_err(host_error)?;
        view.mount();
        self.scenes.lock().insert(route.key().to_string(), view);
        Ok(())
    }

    fn emit_focus(&self, route: &Route) {
        self.context.emit(&FocusEvent::will_focus(route.clone()));
        self.context.emit(&FocusEvent::did_focus(route.clone()));
    }

    /// Apply a stack mutation, then reconcile scenes and focus
    ///
    /// Scenes for new routes are rendered before discarded scenes are
    /// released. If a render fails the stack is restored, scenes rendered by
    /// this call are unmounted, and no focus event is emitted. No lock is
    /// held while calling into the host.
    fn apply<F>(&self, kind: TransitionKind, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut RouteStack) -> Result<Vec<Route>>,
    {
        let (previous, discarded, routes, presented, changed) = {
            let mut stack = self.stack.write();
            let previous = stack.clone();
            let discarded = mutate(&mut stack)?;
            let presented = stack.current().clone();
            let changed = presented.key() != previous.current().key();
            (previous, discarded, stack.routes().to_vec(), presented, changed)
        };

        let host = self.host();
        if let Some(host) = &host {
            let handle = self.handle()?;
            let missing: Vec<Route> = {
                let scenes = self.scenes.lock();
                routes
                    .iter()
                    .filter(|route| !scenes.contains_key(route.key()))
                    .cloned()
                    .collect()
            };
            for (rendered, route) in missing.iter().enumerate() {
                if let Err(err) = self.render_route(host.as_ref(), route, &handle) {
                    tracing::warn!("Failed to render scene {}: {}", route.name(), err);
                    self.roll_back(previous, &missing[..rendered]);
                    return Err(err);
                }
            }
        }

        // Release scenes of routes that left the stack
        let released: Vec<View> = {
            let mut scenes = self.scenes.lock();
            discarded
                .iter()
                .filter(|route| !routes.iter().any(|r| r.is_same(route)))
                .filter_map(|route| scenes.remove(route.key()))
                .collect()
        };
        for view in &released {
            view.unmount();
        }

        if changed {
            let config = match &host {
                Some(host) => host.configure_scene(&presented),
                None => presented.scene_config().unwrap_or_default(),
            };
            *self.last_transition.lock() = Some(Transition {
                route: presented.clone(),
                kind,
                config,
            });
            self.emit_focus(&presented);
        }
        Ok(())
    }

    /// Restore `previous` and unmount the scenes rendered for `rendered`
    fn roll_back(&self, previous: RouteStack, rendered: &[Route]) {
        *self.stack.write() = previous;
        let views: Vec<View> = {
            let mut scenes = self.scenes.lock();
            rendered
                .iter()
                .filter_map(|route| scenes.remove(route.key()))
                .collect()
        };
        for view in &views {
            view.unmount();
        }
    }
}

impl StackHandle for MemoryNavigator {
    fn current_routes(&self) -> Vec<Route> {
        self.stack.read().routes().to_vec()
    }

    fn push(&self, route: Route) -> Result<()> {
        self.apply(TransitionKind::Push, |stack| Ok(stack.push(route)))
    }

    fn pop(&self) -> Result<()> {
        self.apply(TransitionKind::Pop, |stack| stack.pop())
    }

    fn replace(&self, route: Route) -> Result<()> {
        self.apply(TransitionKind::Replace, |stack| stack.replace(route))
    }

    fn replace_at_index(&self, route: Route, index: isize) -> Result<()> {
        self.apply(TransitionKind::Replace, |stack| {
            stack.replace_at_index(route, index)
        })
    }

    fn replace_previous(&self, route: Route) -> Result<()> {
        self.apply(TransitionKind::Replace, |stack| stack.replace_previous(route))
    }

    fn replace_previous_and_pop(&self, route: Route) -> Result<()> {
        self.apply(TransitionKind::Pop, |stack| {
            stack.replace_previous_and_pop(route)
        })
    }

    fn reset_to(&self, route: Route) -> Result<()> {
        self.apply(TransitionKind::Reset, |stack| Ok(stack.reset_to(route)))
    }

    fn immediately_reset_route_stack(&self, routes: Vec<Route>) -> Result<()> {
        self.apply(TransitionKind::Reset, |stack| stack.reset(routes))
    }

    fn pop_to_route(&self, route: &Route) -> Result<()> {
        self.apply(TransitionKind::Pop, |stack| stack.pop_to_route(route))
    }

    fn pop_to_top(&self) -> Result<()> {
        self.apply(TransitionKind::Pop, |stack| Ok(stack.pop_to_top()))
    }

    fn jump_back(&self) -> Result<()> {
        self.apply(TransitionKind::Jump, |stack| {
            stack.jump_back().map(|_| Vec::new())
        })
    }

    fn jump_forward(&self) -> Result<()> {
        self.apply(TransitionKind::Jump, |stack| {
            stack.jump_forward().map(|_| Vec::new())
        })
    }

    fn jump_to(&self, route: &Route) -> Result<()> {
        self.apply(TransitionKind::Jump, |stack| {
            stack.jump_to(route).map(|_| Vec::new())
        })
    }

    fn navigation_context(&self) -> Arc<NavigationContext> {
        self.context.clone()
    }

    fn parent_navigator(&self) -> Option<Arc<dyn StackHandle>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}
