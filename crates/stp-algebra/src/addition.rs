//! Generalized (STP) addition.
//!
//! Operands are broadcast with an all-ones Kronecker factor: each scalar is
//! replicated across its whole extended block, then the expanded operands are
//! added elementwise.

use serde::Serialize;

use crate::error::{ensure_positive, StpError};
use crate::math::{Array2, Scalar};
use crate::reconcile::{lcm, reconcile};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorAdditionSteps<T> {
    pub lcm: usize,
    pub alpha: usize,
    pub beta: usize,
    /// `V1 ⊗ ones(alpha, 1)`
    pub v1_expanded: Array2<T>,
    /// `V2 ⊗ ones(beta, 1)`
    pub v2_expanded: Array2<T>,
    pub result: Array2<T>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatrixAdditionSteps<T> {
    pub lcm_rows: usize,
    pub lcm_cols: usize,
    pub alpha_rows: usize,
    pub alpha_cols: usize,
    pub beta_rows: usize,
    pub beta_cols: usize,
    /// `A ⊗ ones(alpha_rows, alpha_cols)`
    pub a_expanded: Array2<T>,
    /// `B ⊗ ones(beta_rows, beta_cols)`
    pub b_expanded: Array2<T>,
    pub result: Array2<T>,
}

/// How a single scalar looks after broadcasting: a uniform `rows x cols` block.
pub fn broadcast_block<T: Scalar>(value: T, rows: usize, cols: usize) -> Array2<T> {
    Array2::from_elem(rows, cols, value)
}

/// Add two column vectors of lengths `m` and `p` into one of length `lcm(m, p)`.
pub fn add_vectors<T: Scalar>(
    v1: &Array2<T>,
    v2: &Array2<T>,
) -> Result<VectorAdditionSteps<T>, StpError> {
    for (role, v) in [("columns of V1", v1), ("columns of V2", v2)] {
        if !v.is_column() {
            return Err(StpError::InvalidDimension {
                role,
                value: v.ncols(),
            });
        }
    }
    ensure_positive("length of V1", v1.nrows())?;
    ensure_positive("length of V2", v2.nrows())?;

    let plan = reconcile(v1.nrows(), v2.nrows())?;
    let v1_expanded = v1.kron(&Array2::ones(plan.alpha, 1));
    let v2_expanded = v2.kron(&Array2::ones(plan.beta, 1));
    log::debug!(
        "STP vector addition: {} + {} -> L={}",
        v1.nrows(),
        v2.nrows(),
        plan.lcm
    );
    let result = v1_expanded
        .checked_add(&v2_expanded)
        .ok_or(StpError::Overflow {
            operation: "STP vector addition",
        })?;

    Ok(VectorAdditionSteps {
        lcm: plan.lcm,
        alpha: plan.alpha,
        beta: plan.beta,
        v1_expanded,
        v2_expanded,
        result,
    })
}

/// Add two matrices, reconciling rows and columns independently.
pub fn add_matrices<T: Scalar>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> Result<MatrixAdditionSteps<T>, StpError> {
    ensure_positive("rows of A", a.nrows())?;
    ensure_positive("columns of A", a.ncols())?;
    ensure_positive("rows of B", b.nrows())?;
    ensure_positive("columns of B", b.ncols())?;

    let lcm_rows = lcm(a.nrows(), b.nrows());
    let lcm_cols = lcm(a.ncols(), b.ncols());
    let (alpha_rows, alpha_cols) = (lcm_rows / a.nrows(), lcm_cols / a.ncols());
    let (beta_rows, beta_cols) = (lcm_rows / b.nrows(), lcm_cols / b.ncols());

    let a_expanded = a.kron(&Array2::ones(alpha_rows, alpha_cols));
    let b_expanded = b.kron(&Array2::ones(beta_rows, beta_cols));
    log::debug!(
        "STP matrix addition: {:?} + {:?} -> {}x{}",
        a.shape(),
        b.shape(),
        lcm_rows,
        lcm_cols
    );
    let result = a_expanded
        .checked_add(&b_expanded)
        .ok_or(StpError::Overflow {
            operation: "STP matrix addition",
        })?;

    Ok(MatrixAdditionSteps {
        lcm_rows,
        lcm_cols,
        alpha_rows,
        alpha_cols,
        beta_rows,
        beta_cols,
        a_expanded,
        b_expanded,
        result,
    })
}
