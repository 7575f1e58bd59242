//! LCM-based sizing for two mismatched dimensions.
//!
//! Every STP operation first reconciles the pair of sizes that must agree
//! (the inner dimensions of a product, or the row/column counts of an
//! addition) into a common target `L = lcm(d1, d2)` and the factors that
//! scale each side up to it.

use serde::Serialize;

use crate::error::{ensure_positive, StpError};

/// Common target dimension and the factor applied to each side.
///
/// `alpha * d1 == lcm` and `beta * d2 == lcm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExpansionPlan {
    pub lcm: usize,
    pub alpha: usize,
    pub beta: usize,
}

impl ExpansionPlan {
    /// True when neither side needs expanding.
    pub fn is_identity(&self) -> bool {
        self.alpha == 1 && self.beta == 1
    }
}

/// Whether two dimensions already agree, and if not what they reconcile to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DimensionStatus {
    Matched { dim: usize },
    Mismatched { left: usize, right: usize, lcm: usize },
}

pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. Returns 0 if either argument is 0.
pub fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Reconcile `d1` against `d2`. Both must be positive.
pub fn reconcile(d1: usize, d2: usize) -> Result<ExpansionPlan, StpError> {
    ensure_positive("left dimension", d1)?;
    ensure_positive("right dimension", d2)?;

    let l = lcm(d1, d2);
    let plan = ExpansionPlan {
        lcm: l,
        alpha: l / d1,
        beta: l / d2,
    };
    log::trace!(
        "reconcile({}, {}) -> L={}, alpha={}, beta={}",
        d1,
        d2,
        plan.lcm,
        plan.alpha,
        plan.beta
    );
    Ok(plan)
}

pub fn dimension_status(d1: usize, d2: usize) -> Result<DimensionStatus, StpError> {
    let plan = reconcile(d1, d2)?;
    if d1 == d2 {
        Ok(DimensionStatus::Matched { dim: d1 })
    } else {
        Ok(DimensionStatus::Mismatched {
            left: d1,
            right: d2,
            lcm: plan.lcm,
        })
    }
}
