//! stp-algebra: semi-tensor product (STP) operations on small dense matrices.
//!
//! Two matrices whose dimensions do not line up are expanded with Kronecker
//! products to a common size `L = lcm(d1, d2)` and then combined. The product
//! expands with identity matrices (`A ⊗ I`), the generalized addition with
//! all-ones blocks (`A ⊗ 1`). When dimensions already agree both reduce to
//! the ordinary operations.
//!
//! Each operation returns the whole chain of intermediates (plan, expanded
//! operands, result) so a front-end can show how the result was reached.
//! Random operand generation and a caller-owned operand cache live in
//! [`operands`]; nothing here keeps global state.
pub mod addition;
pub mod config;
pub mod error;
pub mod math;
pub mod operands;
pub mod product;
pub mod reconcile;

pub use addition::{add_matrices, add_vectors, MatrixAdditionSteps, VectorAdditionSteps};
pub use error::StpError;
pub use product::{product, ProductSteps};
pub use reconcile::{reconcile, DimensionStatus, ExpansionPlan};
