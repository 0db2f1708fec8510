//! Grouper configuration

use std::time::Duration;

use crate::error::{GroupError, Result};

/// Default base radius in pixels
pub const DEFAULT_EPSILON: f64 = 35.0;

/// Default recompute coalescing window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1);

/// Options recognized by [`GeoGrouper`](crate::cluster::GeoGrouper)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrouperConfig {
    /// Base proximity radius in pixel units at the current zoom
    pub epsilon: f64,
    /// Trailing-edge debounce delay applied to list and viewport changes
    pub debounce: Duration,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl GrouperConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Checks that epsilon is usable as a pixel radius.
    ///
    /// A zero debounce is accepted: the recompute then fires on the next poll.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(GroupError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
