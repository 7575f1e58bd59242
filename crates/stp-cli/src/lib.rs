//! stp-cli: text front-end for the semi-tensor product demos.
//!
//! Loads the demo configuration, turns literals or random draws into
//! operands, runs the `stp-algebra` operations and renders every
//! intermediate as text or JSON.
pub mod config;
pub mod operands;
pub mod parse;
pub mod report;
pub mod session;
