//! Parsed solver instances that check their answers

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// How an answer compares with the known answer for its part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: &'static str },
    /// No known answer registered for the part
    Unknown,
}

impl Verdict {
    pub fn judge(expected: Option<&'static str>, answer: &str) -> Self {
        match expected {
            Some(expected) if expected == answer => Verdict::Correct,
            Some(expected) => Verdict::Incorrect { expected },
            None => Verdict::Unknown,
        }
    }

    /// `true`, `false` or `unknown`
    pub fn as_flag(&self) -> &'static str {
        match self {
            Verdict::Correct => "true",
            Verdict::Incorrect { .. } => "false",
            Verdict::Unknown => "unknown",
        }
    }
}

/// Known answer for `part` in a list indexed by `part - 1`
pub(crate) fn expected_answer(expected: &'static [&'static str], part: u8) -> Option<&'static str> {
    let index = usize::from(part).checked_sub(1)?;
    expected.get(index).copied()
}

/// Answer for one part, judged against the known answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub verdict: Verdict,
    /// Time spent parsing the input; carried by the first part solved from
    /// an instance only, so summing over results counts each parse once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A parsed puzzle input together with the answers it should produce
///
/// The shared data lives as long as the borrowed input, so solvers may keep
/// `&str` slices of it.
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    expected: &'static [&'static str],
    parse_duration: TimeDelta,
    parse_reported: bool,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`; `expected` holds known answers, index `part - 1`
    pub fn new(input: &'a str, expected: &'static [&'static str]) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_duration = Utc::now() - parse_start;

        Ok(Self {
            shared,
            expected,
            parse_duration,
            parse_reported: false,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`]
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, DynSolver, ParseError, Solver, SolveError, SolverInstance, Verdict};
///
/// struct Len;
///
/// impl AocParser for Len {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Len {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut solver = SolverInstance::<Len>::new("abc", &["3"]).unwrap();
/// let result = solver.solve(1).unwrap();
/// assert_eq!(result.verdict, Verdict::Correct);
/// assert!(result.parse_duration.is_some());
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing and judge the answer
    ///
    /// Parts outside `1..=parts()` yield [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta;
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_duration = Utc::now() - solve_start;

        let parse_duration = (!self.parse_reported).then_some(self.parse_duration);
        self.parse_reported = true;

        Ok(SolveResult {
            part,
            verdict: Verdict::judge(expected_answer(self.expected, part), &answer),
            answer,
            parse_duration,
            solve_duration,
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Words;

    impl crate::AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.split_whitespace().collect())
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => shared
                    .first()
                    .map(|w| w.to_string())
                    .ok_or_else(|| SolveError::failed("no words")),
                _ => Err(SolveError::PartOutOfRange(part)),
            }
        }
    }

    #[test]
    fn test_verdicts_follow_expected_answers() {
        let mut solver = SolverInstance::<Words>::new("b a", &["2", "a"]).unwrap();
        assert_eq!(solver.solve(1).unwrap().verdict, Verdict::Correct);
        assert_eq!(
            solver.solve(2).unwrap().verdict,
            Verdict::Incorrect { expected: "a" }
        );

        let mut unknown = SolverInstance::<Words>::new("b a", &["2"]).unwrap();
        assert_eq!(unknown.solve(2).unwrap().verdict, Verdict::Unknown);
    }

    #[test]
    fn test_parse_duration_reported_on_first_success_only() {
        let mut solver = SolverInstance::<Words>::new("", &[]).unwrap();

        assert!(solver.solve(2).is_err());
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert_eq!(solver.solve(1).unwrap().parse_duration, Some(solver.parse_duration()));
        assert_eq!(solver.solve(1).unwrap().parse_duration, None);
    }

    #[test]
    fn test_expected_answer_indexing() {
        const EXPECTED: &[&str] = &["x", "y"];
        assert_eq!(expected_answer(EXPECTED, 0), None);
        assert_eq!(expected_answer(EXPECTED, 1), Some("x"));
        assert_eq!(expected_answer(EXPECTED, 2), Some("y"));
        assert_eq!(expected_answer(EXPECTED, 3), None);
    }

    #[test]
    fn test_verdict_flags() {
        assert_eq!(Verdict::judge(Some("CMZ"), "CMZ").as_flag(), "true");
        assert_eq!(Verdict::judge(Some("CMZ"), "MCD").as_flag(), "false");
        assert_eq!(Verdict::judge(None, "MCD").as_flag(), "unknown");
    }
}
