//! Integration tests for generalized vector and matrix addition.

use stp_algebra::addition::{add_matrices, add_vectors, broadcast_block};
use stp_algebra::math::Array2;
use stp_algebra::StpError;

fn column(values: &[i64]) -> Array2<i64> {
    Array2::column_vector(values.to_vec())
}

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

#[test]
fn fuse_two_and_three_dimensional_vectors() {
    let steps = add_vectors(&column(&[10, 20]), &column(&[1, 2, 3])).unwrap();
    assert_eq!((steps.lcm, steps.alpha, steps.beta), (6, 3, 2));
    assert_eq!(steps.v1_expanded.to_vec(), vec![10, 10, 10, 20, 20, 20]);
    assert_eq!(steps.v2_expanded.to_vec(), vec![1, 1, 2, 2, 3, 3]);
    assert_eq!(steps.result.to_vec(), vec![11, 11, 12, 22, 23, 23]);
    assert_eq!(steps.result.shape(), (6, 1));
}

#[test]
fn expanded_vector_repeats_each_entry_in_runs() {
    let v1 = column(&[4, 9, 1, 7]);
    let steps = add_vectors(&v1, &column(&[2, 5, 8, 3, 6, 1])).unwrap();
    assert_eq!(steps.alpha, 3);

    let signal = steps.v1_expanded.column(0);
    assert_eq!(signal.len(), steps.lcm);
    assert_eq!(signal[steps.lcm - 1], 7);
    for (run, &source) in signal.runs(steps.alpha).zip(v1.as_slice()) {
        assert_eq!(run.len(), steps.alpha);
        assert!(run.iter().all(|&v| v == source));
    }
}

#[test]
fn vector_addition_is_commutative() {
    let v1 = column(&[3, 1, 4, 1]);
    let v2 = column(&[5, 9, 2]);
    let forward = add_vectors(&v1, &v2).unwrap();
    let backward = add_vectors(&v2, &v1).unwrap();
    assert_eq!(forward.result, backward.result);
    assert_eq!(forward.alpha, backward.beta);
    assert_eq!(forward.beta, backward.alpha);
    assert_eq!(forward.v1_expanded, backward.v2_expanded);
}

#[test]
fn equal_length_vectors_add_elementwise() {
    let steps = add_vectors(&column(&[1, 2, 3]), &column(&[10, 20, 30])).unwrap();
    assert_eq!((steps.alpha, steps.beta), (1, 1));
    assert_eq!(steps.result.to_vec(), vec![11, 22, 33]);
}

#[test]
fn empty_vector_is_rejected() {
    assert!(matches!(
        add_vectors(&column(&[]), &column(&[1])),
        Err(StpError::InvalidDimension {
            role: "length of V1",
            value: 0
        })
    ));
}

#[test]
fn vector_sum_overflow_is_an_error() {
    assert_eq!(
        add_vectors(&column(&[i64::MAX]), &column(&[1, 2])),
        Err(StpError::Overflow {
            operation: "STP vector addition"
        })
    );
}

// ---------------------------------------------------------------------------
// Matrices
// ---------------------------------------------------------------------------

#[test]
fn matrices_reconcile_rows_and_columns_independently() {
    let a = Array2::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Array2::from_rows(vec![vec![5, 6, 7]]).unwrap();
    let steps = add_matrices(&a, &b).unwrap();

    assert_eq!((steps.lcm_rows, steps.lcm_cols), (2, 6));
    assert_eq!((steps.alpha_rows, steps.alpha_cols), (1, 3));
    assert_eq!((steps.beta_rows, steps.beta_cols), (2, 2));
    assert_eq!(
        steps.result,
        Array2::from_rows(vec![vec![6, 6, 7, 8, 9, 9], vec![8, 8, 9, 10, 11, 11]]).unwrap()
    );
}

#[test]
fn expanded_matrix_is_made_of_uniform_blocks() {
    let a = Array2::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Array2::from_rows(vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
    let steps = add_matrices(&a, &b).unwrap();
    let (ar, ac) = (steps.alpha_rows, steps.alpha_cols);
    assert_eq!((ar, ac), (3, 3));

    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            for r in 0..ar {
                for c in 0..ac {
                    assert_eq!(steps.a_expanded[(i * ar + r, j * ac + c)], a[(i, j)]);
                }
            }
        }
    }
    assert_eq!(steps.b_expanded.shape(), (6, 6));
}

#[test]
fn matching_matrices_add_elementwise() {
    let a = Array2::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Array2::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
    let steps = add_matrices(&a, &b).unwrap();
    assert_eq!(
        (
            steps.alpha_rows,
            steps.alpha_cols,
            steps.beta_rows,
            steps.beta_cols
        ),
        (1, 1, 1, 1)
    );
    assert_eq!(steps.result, a.checked_add(&b).unwrap());
}

#[test]
fn matrix_sum_overflow_is_an_error() {
    let a = Array2::from_rows(vec![vec![1, i64::MIN]]).unwrap();
    let b = Array2::from_rows(vec![vec![-1]]).unwrap();
    assert!(matches!(add_matrices(&a, &b), Err(StpError::Overflow { .. })));
}

#[test]
fn broadcast_block_preview() {
    assert_eq!(broadcast_block(3i64, 2, 2).to_vec(), vec![3, 3, 3, 3]);
}
