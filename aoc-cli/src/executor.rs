//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{SolverRegistry, Verdict};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub verdict: Verdict,
    /// Set on the first solved part of each day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(work: &WorkItem, part: u8, error: ArcExecutorError) -> Self {
        SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error),
            verdict: Verdict::Unknown,
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another in `(year, day, part)` order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    keep_going: bool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            keep_going: config.keep_going,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Puzzles among `work_items` whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items, handing each result to `on_result` as soon as
    /// it is available
    ///
    /// Stops at the first failure unless `keep_going` is set, in which case
    /// every failure is collected into one [`ExecutorError::Multiple`].
    pub fn execute(&self, mut on_result: impl FnMut(SolverResult)) -> Result<(), ArcExecutorError> {
        let mut collected_error: Option<ArcExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_solver(&work, &mut on_result) {
                if !self.keep_going {
                    return Err(e);
                }
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Load, parse and solve the requested parts of one puzzle
    fn run_solver(
        &self,
        work: &WorkItem,
        on_result: &mut impl FnMut(SolverResult),
    ) -> Result<(), ArcExecutorError> {
        let (year, day) = (work.year, work.day);
        info!(year, day, parts = ?work.parts, "running solver");

        let input = match self.inputs.load(year, day) {
            Ok(input) => input,
            Err(source) => {
                let error = ArcExecutorError::from(ExecutorError::Input { year, day, source });
                return Err(report_setup_failure(work, error, on_result));
            }
        };
        debug!(path = %self.inputs.path(year, day).display(), bytes = input.len(), "loaded input");

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(source) => {
                let error = ArcExecutorError::from(ExecutorError::Setup { year, day, source });
                return Err(report_setup_failure(work, error, on_result));
            }
        };
        debug!(year, day, parse_us = ?solver.parse_duration().num_microseconds(), "parsed input");

        let mut day_error: Option<ArcExecutorError> = None;
        for part in work.parts.clone() {
            match solver.solve(part) {
                Ok(solved) => {
                    match solved.verdict {
                        Verdict::Incorrect { expected } => {
                            warn!(year, day, part, answer = %solved.answer, expected, "answer does not match the known answer")
                        }
                        Verdict::Unknown => debug!(year, day, part, "no known answer to compare with"),
                        Verdict::Correct => {}
                    }
                    on_result(SolverResult {
                        year,
                        day,
                        part: solved.part,
                        answer: Ok(solved.answer),
                        verdict: solved.verdict,
                        parse_duration: solved.parse_duration,
                        solve_duration: solved.solve_duration,
                    });
                }
                Err(source) => {
                    let error =
                        ArcExecutorError::from(ExecutorError::Solve { year, day, part, source });
                    on_result(SolverResult::failed(work, part, error.clone()));
                    if !self.keep_going {
                        return Err(error);
                    }
                    day_error = Some(ArcExecutorError::combine_opt(day_error, error));
                }
            }
        }
        day_error.map_or(Ok(()), Err)
    }
}

/// Report a failure that prevents every part of `work` from running
fn report_setup_failure(
    work: &WorkItem,
    error: ArcExecutorError,
    on_result: &mut impl FnMut(SolverResult),
) -> ArcExecutorError {
    for part in work.parts.clone() {
        on_result(SolverResult::failed(work, part, error.clone()));
    }
    error
}
