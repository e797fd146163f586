//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AocSolver` for part
//! dispatch and `AutoRegisterSolver` to submit itself, with its known answers,
//! to the solver plugin registry.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
