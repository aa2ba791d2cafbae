//! Capacity policy: when to grow, when to shrink, and to what size.
//!
//! The grow line sits at "full" and the shrink line at `shrink_threshold`
//! of capacity. `GrowthPolicy::new` only accepts parameters where
//! `shrink_threshold * growth_factor < 1`, so a freshly grown array is above
//! the shrink line and a freshly shrunk one is below the grow line.

use crate::error::GrowArrayError;

/// Smallest capacity an array is ever reallocated to.
pub const MIN_CAPACITY: usize = 4;

/// Multiplier applied on growth and divisor applied on shrink.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Fraction of capacity at or below which the array shrinks.
pub const SHRINK_THRESHOLD: f64 = 0.25;

/// Growth and shrink parameters of a `GrowArray`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    growth_factor: f64,
    shrink_threshold: f64,
    min_capacity: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_threshold: SHRINK_THRESHOLD,
            min_capacity: MIN_CAPACITY,
        }
    }
}

impl GrowthPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::InvalidConfiguration` if:
    /// - `growth_factor` is not a finite number greater than 1
    /// - `shrink_threshold` is not positive
    /// - `shrink_threshold * growth_factor` is not below 1
    /// - `min_capacity` is 0
    pub fn new(
        growth_factor: f64,
        shrink_threshold: f64,
        min_capacity: usize,
    ) -> Result<Self, GrowArrayError> {
        if !growth_factor.is_finite() || growth_factor <= 1.0 {
            return Err(GrowArrayError::InvalidConfiguration {
                reason: "growth factor must be a finite number greater than 1",
            });
        }
        if !(shrink_threshold > 0.0) {
            return Err(GrowArrayError::InvalidConfiguration {
                reason: "shrink threshold must be positive",
            });
        }
        if shrink_threshold * growth_factor >= 1.0 {
            return Err(GrowArrayError::InvalidConfiguration {
                reason: "shrink threshold times growth factor must be below 1",
            });
        }
        if min_capacity == 0 {
            return Err(GrowArrayError::InvalidConfiguration {
                reason: "minimum capacity must be at least 1",
            });
        }

        Ok(Self {
            growth_factor,
            shrink_threshold,
            min_capacity,
        })
    }

    /// Creates a policy with a custom growth factor and the default threshold and minimum.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GrowthPolicy::new`].
    pub fn with_growth_factor(growth_factor: f64) -> Result<Self, GrowArrayError> {
        Self::new(growth_factor, SHRINK_THRESHOLD, MIN_CAPACITY)
    }

    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    #[must_use]
    pub fn shrink_threshold(&self) -> f64 {
        self.shrink_threshold
    }

    #[must_use]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// True iff one more element does not fit.
    #[must_use]
    pub fn should_grow(&self, len: usize, capacity: usize) -> bool {
        len == capacity
    }

    /// True iff `len` is at or below the shrink line of `capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        len as f64 <= capacity as f64 * self.shrink_threshold
    }

    /// Next capacity on the growth path: `ceil(capacity * growth_factor)`,
    /// never below the minimum capacity.
    ///
    /// Returns `None` if the result is not representable.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        let raw = capacity as f64 * self.growth_factor;
        if !(raw < usize::MAX as f64) {
            return None;
        }
        // Rounds up: truncation drops the fraction, if any.
        let truncated = raw as usize;
        let target = if (truncated as f64) < raw {
            truncated.checked_add(1)?
        } else {
            truncated
        };
        let target = target.max(capacity.checked_add(1)?);
        Some(target.max(self.min_capacity))
    }

    /// Capacity to shrink to: `capacity / growth_factor`, snapped up to the
    /// minimum capacity and never below `len`.
    ///
    /// Returns `None` when no shrink should happen, which is always the case
    /// once the capacity is at or below the minimum.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn shrunk_capacity(&self, capacity: usize, len: usize) -> Option<usize> {
        if capacity <= self.min_capacity {
            return None;
        }
        let target = (capacity as f64 / self.growth_factor) as usize;
        let target = target.max(self.min_capacity).max(len);
        (target < capacity).then_some(target)
    }
}
