//! Semi-tensor product `A ⋉ B = (A ⊗ I_alpha) · (B ⊗ I_beta)`.
//!
//! The columns of `A` and the rows of `B` are reconciled to
//! `L = lcm(n, p)`. Expanding with an identity keeps every source scalar on
//! the diagonal of its own block and zeros elsewhere, so the following
//! ordinary product picks up no cross terms.

use serde::Serialize;

use crate::error::{ensure_positive, StpError};
use crate::math::{Array2, Scalar};
use crate::reconcile::{reconcile, ExpansionPlan};

/// Every intermediate of one STP product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductSteps<T> {
    pub lcm: usize,
    pub alpha: usize,
    pub beta: usize,
    /// `A ⊗ I_alpha`
    pub a_expanded: Array2<T>,
    /// `B ⊗ I_beta`
    pub b_expanded: Array2<T>,
    pub result: Array2<T>,
}

impl<T> ProductSteps<T> {
    pub fn plan(&self) -> ExpansionPlan {
        ExpansionPlan {
            lcm: self.lcm,
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

/// The expansion operator `I_order`.
pub fn identity_operator<T: Scalar>(order: usize) -> Array2<T> {
    Array2::identity(order)
}

/// How a single scalar looks after `⊗ I_order`: `value` on the diagonal.
pub fn diagonal_block<T: Scalar>(value: T, order: usize) -> Array2<T> {
    Array2::<T>::identity(order).mapv(|&v| v * value)
}

/// Multiply an `m x n` matrix by a `p x q` matrix where `n` need not equal `p`.
pub fn product<T: Scalar>(a: &Array2<T>, b: &Array2<T>) -> Result<ProductSteps<T>, StpError> {
    ensure_positive("rows of A", a.nrows())?;
    ensure_positive("columns of A", a.ncols())?;
    ensure_positive("rows of B", b.nrows())?;
    ensure_positive("columns of B", b.ncols())?;

    let plan = reconcile(a.ncols(), b.nrows())?;

    let a_expanded = a.kron(&identity_operator(plan.alpha));
    let b_expanded = b.kron(&identity_operator(plan.beta));
    log::debug!(
        "STP product: {:?} x {:?} with L={} -> expanded {:?} x {:?}",
        a.shape(),
        b.shape(),
        plan.lcm,
        a_expanded.shape(),
        b_expanded.shape()
    );
    let result = a_expanded
        .checked_dot(&b_expanded)
        .ok_or(StpError::Overflow {
            operation: "STP product",
        })?;

    Ok(ProductSteps {
        lcm: plan.lcm,
        alpha: plan.alpha,
        beta: plan.beta,
        a_expanded,
        b_expanded,
        result,
    })
}
