use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["grouping"], expected = ["71506", "209603"])]
pub struct Solver;

/// Calorie total of every elf, in input order
#[derive(Debug)]
pub struct SharedData {
    group_sums: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let group_sums =
            sum_groups(aoc_solver::lines(input)).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if group_sums.is_empty() {
            return Err(ParseError::MissingData("no calorie groups in input".to_string()));
        }
        Ok(SharedData { group_sums })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .group_sums
            .iter()
            .max()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::failed("no calorie groups"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .group_sums
            .iter()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(3)
            .try_fold(0u64, |total, &sum| total.checked_add(sum))
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::failed("sum of top three groups overflows"))
    }
}

/// Sum blank-line separated groups of integers
///
/// The last group is flushed even without a trailing blank line. Consecutive
/// blank lines never produce an empty group.
fn sum_groups<'a>(lines: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Vec<u64>> {
    let mut sums = Vec::new();
    let mut current: Option<u64> = None;

    for (line_idx, line) in lines.into_iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            sums.extend(current.take());
            continue;
        }

        let calories: u64 = line
            .parse()
            .with_context(|| format!("(line {}) expected an integer, got {:?}", line_idx + 1, line))?;
        let total = current.get_or_insert(0);
        *total = total
            .checked_add(calories)
            .ok_or_else(|| anyhow!("(line {}) group total overflows", line_idx + 1))?;
    }
    sums.extend(current);

    Ok(sums)
}
