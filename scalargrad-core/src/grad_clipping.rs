use crate::error::ScalarGradError;

/// Default lower bound for any gradient after a backward contribution.
pub const MIN_GRAD: f64 = -10.0;
/// Default upper bound for any gradient after a backward contribution.
pub const MAX_GRAD: f64 = 10.0;

/// Closed interval gradients are clipped to.
///
/// The range is applied by the backward pass right after each operand receives a
/// contribution, not once at the end, so a node fed by several consumers is
/// clipped after every incoming contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    min: f64,
    max: f64,
}

impl ClipRange {
    /// Creates a clip range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::ConfigurationError` if either bound is NaN or if
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ScalarGradError> {
        if min.is_nan() || max.is_nan() {
            return Err(ScalarGradError::ConfigurationError(
                "clip bounds must not be NaN".to_string(),
            ));
        }
        if min > max {
            return Err(ScalarGradError::ConfigurationError(format!(
                "clip min ({min}) must not exceed clip max ({max})"
            )));
        }
        Ok(ClipRange { min, max })
    }

    /// A range that leaves every finite and infinite gradient untouched.
    pub const fn unbounded() -> Self {
        ClipRange {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bounds `grad` to the range. NaN compares false against both bounds and is
    /// returned unchanged.
    pub fn clamp(&self, grad: f64) -> f64 {
        if grad < self.min {
            self.min
        } else if grad > self.max {
            self.max
        } else {
            grad
        }
    }
}

impl Default for ClipRange {
    fn default() -> Self {
        ClipRange {
            min: MIN_GRAD,
            max: MAX_GRAD,
        }
    }
}

/// Clamps a gradient to the default range `[MIN_GRAD, MAX_GRAD]`.
pub fn clamp(grad: f64) -> f64 {
    ClipRange::default().clamp(grad)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
