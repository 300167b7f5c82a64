//! Host engine errors

use thiserror::Error;

/// Errors raised by a host navigation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// A route stack must contain at least one route
    #[error("Route stack cannot be empty")]
    EmptyStack,

    /// Pop requested while the presented route is the root
    #[error("Cannot pop the root route")]
    CannotPop,

    /// Index outside of the route stack
    #[error("Index {index} is out of range for a stack of depth {depth}")]
    IndexOutOfRange {
        /// Requested index
        index: isize,
        /// Current stack depth
        depth: usize,
    },

    /// Route is not part of the stack
    #[error("Route not found in stack: {0}")]
    RouteNotFound(String),

    /// Replace-previous requested without a previous route
    #[error("No previous route to replace")]
    NoPreviousRoute,

    /// The engine is not mounted
    #[error("Navigator is not mounted")]
    NotMounted,

    /// The host failed while rendering or acknowledging the engine
    #[error("Host error: {0}")]
    Host(String),
}

/// Result type for host engine operations
pub type Result<T> = std::result::Result<T, NavigatorError>;
