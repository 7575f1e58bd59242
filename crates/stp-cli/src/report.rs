//! Text and JSON rendering of operation results.

use std::io::{self, Write};

use serde::Serialize;

use stp_algebra::addition::{add_matrices, add_vectors, broadcast_block};
use stp_algebra::math::Array2;
use stp_algebra::product::{diagonal_block, identity_operator, product};
use stp_algebra::reconcile::dimension_status;
use stp_algebra::{
    reconcile, DimensionStatus, ExpansionPlan, MatrixAdditionSteps, ProductSteps, StpError,
    VectorAdditionSteps,
};

/// One computed operation, with its inputs and every intermediate.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Report {
    Reconcile {
        d1: usize,
        d2: usize,
        plan: ExpansionPlan,
        status: DimensionStatus,
    },
    Product {
        a: Array2<i64>,
        b: Array2<i64>,
        status: DimensionStatus,
        steps: ProductSteps<i64>,
    },
    MatrixAddition {
        a: Array2<i64>,
        b: Array2<i64>,
        steps: MatrixAdditionSteps<i64>,
    },
    VectorAddition {
        v1: Array2<i64>,
        v2: Array2<i64>,
        steps: VectorAdditionSteps<i64>,
    },
}

impl Report {
    pub fn reconcile(d1: usize, d2: usize) -> Result<Self, StpError> {
        Ok(Report::Reconcile {
            d1,
            d2,
            plan: reconcile(d1, d2)?,
            status: dimension_status(d1, d2)?,
        })
    }

    pub fn product(a: Array2<i64>, b: Array2<i64>) -> Result<Self, StpError> {
        let steps = product(&a, &b)?;
        let status = dimension_status(a.ncols(), b.nrows())?;
        Ok(Report::Product {
            a,
            b,
            status,
            steps,
        })
    }

    pub fn matrix_addition(a: Array2<i64>, b: Array2<i64>) -> Result<Self, StpError> {
        let steps = add_matrices(&a, &b)?;
        Ok(Report::MatrixAddition { a, b, steps })
    }

    pub fn vector_addition(v1: Array2<i64>, v2: Array2<i64>) -> Result<Self, StpError> {
        let steps = add_vectors(&v1, &v2)?;
        Ok(Report::VectorAddition { v1, v2, steps })
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Report::Reconcile {
                d1,
                d2,
                plan,
                status,
            } => {
                writeln!(out, "{}", describe_status(status, "d1", "d2"))?;
                writeln!(out, "L = lcm({}, {}) = {}", d1, d2, plan.lcm)?;
                writeln!(out, "alpha = L / {} = {}", d1, plan.alpha)?;
                writeln!(out, "beta = L / {} = {}", d2, plan.beta)
            }
            Report::Product {
                a,
                b,
                status,
                steps,
            } => write_product(out, a, b, status, steps),
            Report::MatrixAddition { a, b, steps } => write_matrix_addition(out, a, b, steps),
            Report::VectorAddition { v1, v2, steps } => write_vector_addition(out, v1, v2, steps),
        }
    }
}

fn describe_status(status: &DimensionStatus, left: &str, right: &str) -> String {
    match status {
        DimensionStatus::Matched { dim } => {
            format!("Dimensions match ({} = {} = {}): no expansion needed.", left, right, dim)
        }
        DimensionStatus::Mismatched {
            left: l,
            right: r,
            lcm,
        } => format!(
            "Dimension conflict ({} = {} != {} = {}): expanding to L = {}.",
            left, l, right, r, lcm
        ),
    }
}

fn write_matrix<W: Write>(out: &mut W, title: &str, m: &Array2<i64>) -> io::Result<()> {
    writeln!(out, "{} ({}x{}):", title, m.nrows(), m.ncols())?;
    for line in m.to_string().lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

fn write_product<W: Write>(
    out: &mut W,
    a: &Array2<i64>,
    b: &Array2<i64>,
    status: &DimensionStatus,
    steps: &ProductSteps<i64>,
) -> io::Result<()> {
    writeln!(out, "== STP product A ⋉ B ==")?;
    writeln!(out, "{}", describe_status(status, "n", "p"))?;
    writeln!(
        out,
        "L = {}, alpha = {}, beta = {}",
        steps.lcm, steps.alpha, steps.beta
    )?;

    if steps.alpha > 1 {
        write_matrix(out, &format!("I_{}", steps.alpha), &identity_operator(steps.alpha))?;
        let sample = a[(0, 0)];
        write_matrix(
            out,
            &format!("{} ⊗ I_{}", sample, steps.alpha),
            &diagonal_block(sample, steps.alpha),
        )?;
    } else {
        writeln!(out, "A needs no expansion (factor 1).")?;
    }
    if steps.beta == 1 {
        writeln!(out, "B needs no expansion (factor 1).")?;
    }

    write_matrix(out, "A", a)?;
    write_matrix(out, &format!("A' = A ⊗ I_{}", steps.alpha), &steps.a_expanded)?;
    write_matrix(out, "B", b)?;
    write_matrix(out, &format!("B' = B ⊗ I_{}", steps.beta), &steps.b_expanded)?;
    write_matrix(out, "Result = A' · B'", &steps.result)
}

fn write_matrix_addition<W: Write>(
    out: &mut W,
    a: &Array2<i64>,
    b: &Array2<i64>,
    steps: &MatrixAdditionSteps<i64>,
) -> io::Result<()> {
    writeln!(out, "== STP matrix addition ==")?;
    writeln!(
        out,
        "Target rows (LCM): {}, target columns (LCM): {}",
        steps.lcm_rows, steps.lcm_cols
    )?;
    let sample = a[(0, 0)];
    write_matrix(
        out,
        &format!("{} broadcast", sample),
        &broadcast_block(sample, steps.alpha_rows, steps.alpha_cols),
    )?;
    write_matrix(out, "A", a)?;
    write_matrix(
        out,
        &format!("A' = A ⊗ 1_{}x{}", steps.alpha_rows, steps.alpha_cols),
        &steps.a_expanded,
    )?;
    write_matrix(out, "B", b)?;
    write_matrix(
        out,
        &format!("B' = B ⊗ 1_{}x{}", steps.beta_rows, steps.beta_cols),
        &steps.b_expanded,
    )?;
    write_matrix(out, "Result = A' + B'", &steps.result)
}

fn write_vector_addition<W: Write>(
    out: &mut W,
    v1: &Array2<i64>,
    v2: &Array2<i64>,
    steps: &VectorAdditionSteps<i64>,
) -> io::Result<()> {
    writeln!(out, "== STP vector fusion ==")?;
    writeln!(
        out,
        "L = lcm({}, {}) = {}, alpha = {}, beta = {}",
        v1.nrows(),
        v2.nrows(),
        steps.lcm,
        steps.alpha,
        steps.beta
    )?;
    writeln!(out, "V1  ({:>2}): {}", v1.nrows(), v1.column(0))?;
    writeln!(out, "V1' ({:>2}): {}", steps.lcm, steps.v1_expanded.column(0))?;
    writeln!(out, "V2  ({:>2}): {}", v2.nrows(), v2.column(0))?;
    writeln!(out, "V2' ({:>2}): {}", steps.lcm, steps.v2_expanded.column(0))?;
    writeln!(out, "Fused    : {}", steps.result.column(0))
}
