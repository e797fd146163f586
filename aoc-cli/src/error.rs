//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Puzzle input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for this puzzle
    #[error("input file {} not found", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver lookup or input parsing failed
    #[error("Solver setup failed for {year}/{day:02}: {source}")]
    Setup {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// A part failed to solve
    #[error("Solving {year}/{day:02} part {part} failed: {source}")]
    Solve {
        year: u16,
        day: u8,
        part: u8,
        #[source]
        source: aoc_solver::SolveError,
    },

    /// Multiple errors collected with `--keep-going`
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one, flattening nested `Multiple`s
    /// while keeping the order errors occurred in
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Number of individual failures this error stands for
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(errors) => errors.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn missing(day: u8) -> ArcExecutorError {
        ExecutorError::Input {
            year: 2022,
            day,
            source: InputError::Missing(PathBuf::from(format!("inputs/2022_day{:02}.txt", day))),
        }
        .into()
    }

    fn days(error: &ArcExecutorError) -> Vec<u8> {
        match error.inner() {
            ExecutorError::Multiple(errors) => errors.iter().flat_map(days).collect(),
            ExecutorError::Input { day, .. } => vec![*day],
            _ => vec![],
        }
    }

    #[test]
    fn test_combine_keeps_order_and_flattens() {
        let left = ArcExecutorError::combine(missing(1), missing(2));
        let right = ArcExecutorError::combine(missing(3), missing(4));
        let all = ArcExecutorError::combine(left, right);

        assert_eq!(days(&all), vec![1, 2, 3, 4]);
        match all.inner() {
            ExecutorError::Multiple(errors) => assert_eq!(errors.len(), 4),
            other => panic!("expected Multiple, got {other:?}"),
        }
        assert_eq!(all.to_string(), "Multiple errors occurred (4 total)");
    }

    #[test]
    fn test_combine_opt_without_existing_is_identity() {
        let single = ArcExecutorError::combine_opt(None, missing(5));
        assert_eq!(days(&single), vec![5]);
        assert_eq!(single.count(), 1);
    }

    #[test]
    fn test_messages_name_the_puzzle() {
        let error = missing(3);
        assert_eq!(
            error.to_string(),
            "Input unavailable for 2022/03: input file inputs/2022_day03.txt not found"
        );
    }

    proptest! {
        #[test]
        fn prop_fold_preserves_every_error(seq in prop::collection::vec(1u8..=25, 1..12)) {
            let combined = seq
                .iter()
                .fold(None, |acc, &day| Some(ArcExecutorError::combine_opt(acc, missing(day))));
            let combined = combined.unwrap();

            prop_assert_eq!(combined.count(), seq.len());
            prop_assert_eq!(days(&combined), seq);
        }
    }
}
