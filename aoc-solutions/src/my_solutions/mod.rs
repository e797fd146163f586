pub mod year_2022;

/// Parse `input` with `S` and solve a single part, as the runner would
#[cfg(test)]
pub(crate) fn solve_part<S: aoc_solver::SolverExt>(
    input: &str,
    part: u8,
) -> Result<String, aoc_solver::SolverError> {
    let mut shared = S::parse(input)?;
    Ok(S::solve_part_checked_range(&mut shared, part)?)
}
