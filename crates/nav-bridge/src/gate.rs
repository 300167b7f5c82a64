//! Transition gate
//!
//! A shared switch that suppresses mutating navigation calls, for instance
//! while a transition is in flight. Policy code holds a clone and flips it;
//! the bridge only reads it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "transitions disabled" flag
#[derive(Debug, Clone, Default)]
pub struct TransitionGate {
    disabled: Arc<AtomicBool>,
}

impl TransitionGate {
    /// Create an open gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress mutating navigation calls
    pub fn disable(&self) {
        self.set_disabled(true);
    }

    /// Allow mutating navigation calls again
    pub fn enable(&self) {
        self.set_disabled(false);
    }

    /// Set the gate state
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Check if mutating calls are currently suppressed
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}
