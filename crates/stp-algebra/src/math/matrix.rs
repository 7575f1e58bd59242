use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::{One, Zero};
use serde::Serialize;

use crate::math::vector::Array1;
use crate::math::Scalar;

/// Row-major dense matrix. A column vector is an `n x 1` matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(ShapeError {
                    rows: nrows,
                    cols: ncols,
                    len: data.len() + row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn column_vector(values: Vec<T>) -> Self {
        let rows = values.len();
        Self {
            data: values,
            rows,
            cols: 1,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Array1<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T: Clone> Array2<T> {
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Clone + Zero> Array2<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T: Clone + One> Array2<T> {
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::one())
    }
}

impl<T: Clone + Zero + One> Array2<T> {
    pub fn identity(order: usize) -> Self {
        let mut out = Self::zeros(order, order);
        for i in 0..order {
            out[(i, i)] = T::one();
        }
        out
    }
}

impl<T> Array2<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Kronecker product `self ⊗ other`.
    ///
    /// Entry `(i, j)` of `self` is replaced by the block `self[(i, j)] * other`,
    /// giving a `(rows * other.rows) x (cols * other.cols)` matrix.
    pub fn kron(&self, other: &Array2<T>) -> Array2<T> {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..self.rows {
            for k in 0..other.rows {
                for j in 0..self.cols {
                    let a = self[(i, j)];
                    for l in 0..other.cols {
                        data.push(a * other[(k, l)]);
                    }
                }
            }
        }
        Array2 { data, rows, cols }
    }
}

impl<T: Scalar> Array2<T> {
    /// Standard matrix product, or `None` if an entry overflows.
    /// Panics unless `self.ncols() == other.nrows()`.
    pub fn checked_dot(&self, other: &Array2<T>) -> Option<Array2<T>> {
        assert_eq!(
            self.cols, other.rows,
            "Matrix product requires inner dimensions to agree"
        );
        let mut out: Array2<T> = Array2::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                for j in 0..other.cols {
                    let term = a.checked_product(other[(k, j)])?;
                    out[(i, j)] = out[(i, j)].checked_sum(term)?;
                }
            }
        }
        Some(out)
    }

    /// Elementwise sum, or `None` if an entry overflows.
    /// Panics unless both shapes are equal.
    pub fn checked_add(&self, other: &Array2<T>) -> Option<Array2<T>> {
        assert_eq!(
            self.shape(),
            other.shape(),
            "Elementwise addition requires matrices of equal shape"
        );
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a.checked_sum(b))
            .collect::<Option<Vec<T>>>()?;
        Some(Array2 {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// Rows on separate lines with right-aligned columns, e.g.
///
/// ```text
/// [ 1,  0]
/// [ 0, 10]
/// ```
impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>width$}", cells[self.offset(row, col)], width = width)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}
