//! Line splitting shared by the puzzle parsers

/// Split puzzle input into lines, keeping every segment
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// parsers that flush on blank lines see the end of the last block. A single
/// `'\r'` at the end of each line is dropped.
///
/// ```
/// let lines: Vec<_> = aoc_solver::lines("3\n4\n\n8\n").collect();
/// assert_eq!(lines, ["3", "4", "", "8", ""]);
/// ```
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
