//! Random operand pairs for each demo, drawn with the configured ranges.

use rand::Rng;

use stp_algebra::config::DemoConfig;
use stp_algebra::math::Array2;
use stp_algebra::operands::{random_column, random_matrix, ValueRange};
use stp_algebra::StpError;

/// `(m, n, p, q)` for an `m x n` and a `p x q` operand.
pub type MatrixDims = (usize, usize, usize, usize);

/// `(dim1, dim2)` for two column vectors.
pub type VectorDims = (usize, usize);

pub type OperandPair = (Array2<i64>, Array2<i64>);

/// Draw a `rows x cols` operand after checking both against the matrix bounds.
pub fn bounded_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    range: &ValueRange,
    rows: (&'static str, usize),
    cols: (&'static str, usize),
) -> Result<Array2<i64>, StpError> {
    config.matrix_dims.check(rows.0, rows.1)?;
    config.matrix_dims.check(cols.0, cols.1)?;
    random_matrix(rng, rows.1, cols.1, range)
}

/// Draw a column operand after checking its length against the vector bounds.
pub fn bounded_column<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    range: &ValueRange,
    len: (&'static str, usize),
) -> Result<Array2<i64>, StpError> {
    config.vector_dims.check(len.0, len.1)?;
    random_column(rng, len.1, range)
}

fn matrix_pair<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    range: &ValueRange,
    dims: MatrixDims,
) -> Result<OperandPair, StpError> {
    let (m, n, p, q) = dims;
    Ok((
        bounded_matrix(rng, config, range, ("m", m), ("n", n))?,
        bounded_matrix(rng, config, range, ("p", p), ("q", q))?,
    ))
}

pub fn product_operands<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    dims: MatrixDims,
) -> Result<OperandPair, StpError> {
    matrix_pair(rng, config, &config.product_values, dims)
}

pub fn matrix_addition_operands<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    dims: MatrixDims,
) -> Result<OperandPair, StpError> {
    matrix_pair(rng, config, &config.matrix_addition_values, dims)
}

pub fn vector_operands<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    dims: VectorDims,
) -> Result<OperandPair, StpError> {
    let (d1, d2) = dims;
    Ok((
        bounded_column(rng, config, &config.primary_vector_values, ("dim1", d1))?,
        bounded_column(rng, config, &config.secondary_vector_values, ("dim2", d2))?,
    ))
}
