//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code puzzles. Each puzzle is a
//! solver with its own input parser and one evaluator per part; solvers
//! register themselves as plugins and a runner looks them up by year and day.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! aoc_solver::register_solver!(builder, Sums, 2022, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] parses the input once into shared data.
//! - [`PartSolver<N>`] computes part `N` from the shared data.
//! - `#[derive(AocSolver)]` generates the [`Solver`] dispatch over the parts.
//! - `#[derive(AutoRegisterSolver)]` with `#[aoc(year, day, tags, expected)]`
//!   submits a [`SolverPlugin`], picked up by
//!   [`RegistryBuilder::register_all_plugins`].
//! - [`DynSolver`] is the type-erased, timed view the runner works with; each
//!   answer comes back with a [`Verdict`] against the registered answers.

mod error;
mod input;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use input::lines;
pub use instance::{DynSolver, SolveResult, SolverInstance, Verdict};
pub use registry::{
    DAYS_PER_YEAR, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
