use serde::{Deserialize, Serialize};

use crate::error::StpError;
use crate::operands::ValueRange;

/// Inclusive bounds on the dimensions a demo caller may request.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionBounds {
    pub min: usize,
    pub max: usize,
}

impl DimensionBounds {
    pub fn check(&self, role: &'static str, value: usize) -> Result<usize, StpError> {
        if value < self.min || value > self.max {
            return Err(StpError::OutOfBounds {
                role,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Settings for the random-operand demos.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub product_values: ValueRange,
    pub matrix_addition_values: ValueRange,
    pub primary_vector_values: ValueRange,
    pub secondary_vector_values: ValueRange,
    pub matrix_dims: DimensionBounds,
    pub vector_dims: DimensionBounds,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            product_values: ValueRange { low: 1, high: 5 },
            matrix_addition_values: ValueRange { low: 1, high: 10 },
            primary_vector_values: ValueRange { low: 10, high: 50 },
            secondary_vector_values: ValueRange { low: 1, high: 10 },
            matrix_dims: DimensionBounds { min: 1, max: 5 },
            vector_dims: DimensionBounds { min: 2, max: 20 },
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), StpError> {
        for range in [
            &self.product_values,
            &self.matrix_addition_values,
            &self.primary_vector_values,
            &self.secondary_vector_values,
        ] {
            range.validate()?;
        }
        for (role, bounds) in [
            ("matrix dimension bounds", &self.matrix_dims),
            ("vector dimension bounds", &self.vector_dims),
        ] {
            if bounds.min == 0 {
                return Err(StpError::InvalidDimension {
                    role,
                    value: bounds.min,
                });
            }
            if bounds.min > bounds.max {
                return Err(StpError::OutOfBounds {
                    role,
                    value: bounds.max,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}
