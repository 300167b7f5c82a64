//! Bridge errors

use nav_core::NavigatorError;
use thiserror::Error;

/// Errors raised by the navigator bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Focus events were subscribed twice for the same handle
    #[error("The navigator is already subscribed to focus events")]
    AlreadySubscribed,

    /// Unsubscribe requested without a subscription
    #[error("The navigator is not subscribed to focus events")]
    NotSubscribed,

    /// The handle arrived before the first render subscribed to it
    #[error("Expected to have subscribed to the navigator before it was mounted")]
    SubscriptionMissing,

    /// A second live navigator tried to attach to the bridge
    #[error("The bridge is already subscribed to a different navigator")]
    ForeignNavigator,

    /// No handle has been acquired yet, or it was released
    #[error("No navigator handle is available")]
    NotMounted,

    /// `pop_back` asked for more routes than the stack holds
    #[error("Cannot pop back {requested} routes from a stack of depth {depth}")]
    PopBackOutOfRange {
        /// Requested number of routes
        requested: usize,
        /// Current stack depth
        depth: usize,
    },

    /// The host navigator rejected the operation
    #[error("Navigator error: {0}")]
    Navigator(#[from] NavigatorError),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl BridgeError {
    /// Whether the error signals a broken lifecycle contract between the
    /// bridge and its navigator
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            BridgeError::AlreadySubscribed
                | BridgeError::NotSubscribed
                | BridgeError::SubscriptionMissing
                | BridgeError::ForeignNavigator
                | BridgeError::NotMounted
        )
    }
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_classification() {
        assert!(BridgeError::AlreadySubscribed.is_invariant_violation());
        assert!(BridgeError::NotMounted.is_invariant_violation());
        assert!(!BridgeError::PopBackOutOfRange {
            requested: 3,
            depth: 3
        }
        .is_invariant_violation());
        assert!(!BridgeError::from(NavigatorError::CannotPop).is_invariant_violation());
    }

    #[test]
    fn test_messages() {
        let err = BridgeError::PopBackOutOfRange {
            requested: 4,
            depth: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot pop back 4 routes from a stack of depth 2"
        );
    }
}
