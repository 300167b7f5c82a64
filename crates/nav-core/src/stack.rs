//! Route stack
//!
//! Ordered routes (bottom to top) plus the index of the presented route.
//! Jumps move the presented index without discarding routes; every other
//! mutation discards the routes above the presented one first, the way a
//! stack navigator does once a transition settles.
//!
//! Mutations return the routes they discarded so that the engine can
//! unmount their scenes.

use crate::error::{NavigatorError, Result};
use crate::route::Route;

/// Navigation stack for a navigator
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStack {
    /// Stack routes (bottom to top)
    routes: Vec<Route>,
    /// Index of the presented route
    presented_index: usize,
}

impl RouteStack {
    /// Create a new stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            routes: vec![root],
            presented_index: 0,
        }
    }

    /// Create a stack from a list of routes, presenting the last one
    pub fn from_routes(routes: Vec<Route>) -> Result<Self> {
        if routes.is_empty() {
            return Err(NavigatorError::EmptyStack);
        }
        let presented_index = routes.len() - 1;
        Ok(Self {
            routes,
            presented_index,
        })
    }

    /// All routes, bottom to top
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Index of the presented route
    pub fn presented_index(&self) -> usize {
        self.presented_index
    }

    /// The presented route
    pub fn current(&self) -> &Route {
        &self.routes[self.presented_index]
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.presented_index > 0
    }

    /// Position of a route (by identity)
    pub fn index_of(&self, route: &Route) -> Option<usize> {
        self.routes.iter().position(|r| r.is_same(route))
    }

    /// Push a route above the presented one
    pub fn push(&mut self, route: Route) -> Vec<Route> {
        let discarded = self.truncate_to(self.presented_index);
        self.routes.push(route);
        self.presented_index = self.routes.len() - 1;
        discarded
    }

    /// Pop the presented route
    pub fn pop(&mut self) -> Result<Vec<Route>> {
        if self.presented_index == 0 {
            return Err(NavigatorError::CannotPop);
        }
        self.presented_index -= 1;
        Ok(self.truncate_to(self.presented_index))
    }

    /// Replace the route at `index`; negative indices count from the top
    pub fn replace_at_index(&mut self, route: Route, index: isize) -> Result<Vec<Route>> {
        let depth = self.routes.len();
        let resolved = if index < 0 {
            index + depth as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize >= depth {
            return Err(NavigatorError::IndexOutOfRange { index, depth });
        }
        let replaced = std::mem::replace(&mut self.routes[resolved as usize], route);
        Ok(vec![replaced])
    }

    /// Replace the presented route
    pub fn replace(&mut self, route: Route) -> Result<Vec<Route>> {
        self.replace_at_index(route, self.presented_index as isize)
    }

    /// Replace the route below the presented one
    pub fn replace_previous(&mut self, route: Route) -> Result<Vec<Route>> {
        if self.presented_index == 0 {
            return Err(NavigatorError::NoPreviousRoute);
        }
        self.replace_at_index(route, self.presented_index as isize - 1)
    }

    /// Replace the previous route and pop back to it
    pub fn replace_previous_and_pop(&mut self, route: Route) -> Result<Vec<Route>> {
        let mut discarded = self.replace_previous(route)?;
        discarded.extend(self.pop()?);
        Ok(discarded)
    }

    /// Reset to a single route
    pub fn reset_to(&mut self, route: Route) -> Vec<Route> {
        self.presented_index = 0;
        std::mem::replace(&mut self.routes, vec![route])
    }

    /// Replace the whole stack without a transition
    pub fn reset(&mut self, routes: Vec<Route>) -> Result<Vec<Route>> {
        let next = Self::from_routes(routes)?;
        let previous = std::mem::replace(self, next);
        Ok(previous.routes)
    }

    /// Pop every route above `route`
    pub fn pop_to_route(&mut self, route: &Route) -> Result<Vec<Route>> {
        let index = self
            .index_of(route)
            .ok_or_else(|| NavigatorError::RouteNotFound(route.name().to_string()))?;
        self.presented_index = index;
        Ok(self.truncate_to(index))
    }

    /// Pop back to the root route
    pub fn pop_to_top(&mut self) -> Vec<Route> {
        self.presented_index = 0;
        self.truncate_to(0)
    }

    /// Present an existing route without discarding anything
    pub fn jump_to(&mut self, route: &Route) -> Result<()> {
        self.presented_index = self
            .index_of(route)
            .ok_or_else(|| NavigatorError::RouteNotFound(route.name().to_string()))?;
        Ok(())
    }

    /// Present the route below the presented one
    pub fn jump_back(&mut self) -> Result<()> {
        self.jump_by(-1)
    }

    /// Present the route above the presented one
    pub fn jump_forward(&mut self) -> Result<()> {
        self.jump_by(1)
    }

    fn jump_by(&mut self, delta: isize) -> Result<()> {
        let target = self.presented_index as isize + delta;
        if target < 0 || target as usize >= self.routes.len() {
            return Err(NavigatorError::IndexOutOfRange {
                index: target,
                depth: self.routes.len(),
            });
        }
        self.presented_index = target as usize;
        Ok(())
    }

    /// Drop everything above `index`, returning the dropped routes
    fn truncate_to(&mut self, index: usize) -> Vec<Route> {
        self.routes.split_off(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (RouteStack, Route, Route, Route) {
        let a = Route::new("a");
        let b = Route::new("b");
        let c = Route::new("c");
        let stack = RouteStack::from_routes(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        (stack, a, b, c)
    }

    #[test]
    fn test_push_pop() {
        let mut stack = RouteStack::new(Route::new("home"));
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::new("detail"));
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(stack.current().name(), "detail");

        let popped = stack.pop().unwrap();
        assert_eq!(popped.len(), 1);
        assert_eq!(stack.current().name(), "home");

        // Can't pop past root
        assert_eq!(stack.pop(), Err(NavigatorError::CannotPop));
    }

    #[test]
    fn test_empty_stack_rejected() {
        assert_eq!(RouteStack::from_routes(vec![]), Err(NavigatorError::EmptyStack));
    }

    #[test]
    fn test_replace_at_negative_index() {
        let (mut stack, _, _, c) = abc();
        let r = Route::new("r");
        let replaced = stack.replace_at_index(r.clone(), -1).unwrap();
        assert!(replaced[0].is_same(&c));
        assert!(stack.current().is_same(&r));
        assert!(matches!(
            stack.replace_at_index(Route::new("x"), 3),
            Err(NavigatorError::IndexOutOfRange { index: 3, depth: 3 })
        ));
    }

    #[test]
    fn test_pop_to_route() {
        let (mut stack, a, b, c) = abc();
        let discarded = stack.pop_to_route(&a).unwrap();
        assert_eq!(discarded.len(), 2);
        assert!(discarded[0].is_same(&b));
        assert!(discarded[1].is_same(&c));
        assert_eq!(stack.depth(), 1);
        assert!(stack.pop_to_route(&b).is_err());
    }

    #[test]
    fn test_replace_previous_and_pop() {
        let (mut stack, a, _, _) = abc();
        let r = Route::new("r");
        stack.replace_previous_and_pop(r.clone()).unwrap();
        assert_eq!(stack.depth(), 2);
        assert!(stack.routes()[0].is_same(&a));
        assert!(stack.current().is_same(&r));
    }

    #[test]
    fn test_jumps_keep_routes() {
        let (mut stack, a, _, c) = abc();
        stack.jump_to(&a).unwrap();
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.presented_index(), 0);
        assert!(stack.jump_back().is_err());
        stack.jump_forward().unwrap();
        assert_eq!(stack.presented_index(), 1);

        // Pushing from a jumped position discards the forward history
        let discarded = stack.push(Route::new("d"));
        assert_eq!(discarded.len(), 1);
        assert!(discarded[0].is_same(&c));
    }

    #[test]
    fn test_reset() {
        let (mut stack, _, _, _) = abc();
        let r = Route::new("r");
        assert_eq!(stack.reset_to(r.clone()).len(), 3);
        assert_eq!(stack.depth(), 1);
        assert!(stack.reset(vec![]).is_err());
        assert!(stack.current().is_same(&r));
    }
}
