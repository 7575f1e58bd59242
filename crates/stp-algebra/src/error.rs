use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Errors raised by the STP operations and the operand helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum StpError {
    /// A row/column count or vector length was zero.
    InvalidDimension { role: &'static str, value: usize },
    Shape(ShapeError),
    /// Empty half-open value range `[low, high)`.
    InvalidRange { low: i64, high: i64 },
    /// Dimension outside the configured demo bounds.
    OutOfBounds {
        role: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// An entry of the combined result does not fit the element type.
    Overflow { operation: &'static str },
}

impl fmt::Display for StpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StpError::InvalidDimension { role, value } => {
                write!(f, "Invalid dimension for {}: {} (must be positive)", role, value)
            }
            StpError::Shape(err) => write!(f, "{}", err),
            StpError::InvalidRange { low, high } => {
                write!(f, "Empty value range [{}, {})", low, high)
            }
            StpError::OutOfBounds {
                role,
                value,
                min,
                max,
            } => write!(
                f,
                "Dimension {} for {} is outside the allowed range {}..={}",
                value, role, min, max
            ),
            StpError::Overflow { operation } => {
                write!(f, "Arithmetic overflow in {}", operation)
            }
        }
    }
}

impl Error for StpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StpError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for StpError {
    fn from(err: ShapeError) -> Self {
        StpError::Shape(err)
    }
}

/// Fail with `InvalidDimension` when `value` is zero.
pub(crate) fn ensure_positive(role: &'static str, value: usize) -> Result<usize, StpError> {
    if value == 0 {
        return Err(StpError::InvalidDimension { role, value });
    }
    Ok(value)
}
