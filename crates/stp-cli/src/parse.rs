//! Operand literals: rows separated by `;`, entries by `,`.
//!
//! `"1,2;3,4"` is a 2x2 matrix, `"10,20,30"` given as a vector is a 3x1
//! column.

use anyhow::{bail, Context, Result};

use stp_algebra::math::Array2;

fn parse_entries(row: &str) -> Result<Vec<i64>> {
    row.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid matrix entry: {:?}", token))
        })
        .collect()
}

pub fn parse_matrix(literal: &str) -> Result<Array2<i64>> {
    let literal = literal.trim();
    if literal.is_empty() {
        bail!("Empty matrix literal");
    }
    let rows = literal
        .split(';')
        .map(parse_entries)
        .collect::<Result<Vec<_>>>()?;
    Array2::from_rows(rows).with_context(|| format!("Rows of unequal length in {:?}", literal))
}

pub fn parse_vector(literal: &str) -> Result<Array2<i64>> {
    let literal = literal.trim();
    if literal.is_empty() {
        bail!("Empty vector literal");
    }
    Ok(Array2::column_vector(parse_entries(literal)?))
}
