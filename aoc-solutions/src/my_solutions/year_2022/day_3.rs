use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["set-intersection"], expected = ["7826", "2577"])]
pub struct Solver;

const GROUP_SIZE: usize = 3;

/// Item priority: `a..=z` map to 1..=26, `A..=Z` to 27..=52
pub fn priority(item: char) -> Option<u32> {
    match item {
        'a'..='z' => Some(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(item as u32 - 'A' as u32 + 27),
        _ => None,
    }
}

/// Bit `p` is set when an item of priority `p` is present
fn item_set(items: &str) -> u64 {
    items
        .chars()
        .filter_map(priority)
        .fold(0, |set, p| set | (1 << p))
}

/// First item of `items` that is also in `set`
fn first_common(items: &str, set: u64) -> Option<char> {
    items
        .chars()
        .find(|&c| priority(c).is_some_and(|p| set & (1 << p) != 0))
}

/// One rucksack; always an even number of ASCII letters
#[derive(Debug, Clone, Copy)]
pub struct Rucksack<'a> {
    items: &'a str,
}

impl<'a> Rucksack<'a> {
    pub fn new(items: &'a str) -> anyhow::Result<Self> {
        if let Some(bad) = items.chars().find(|&c| priority(c).is_none()) {
            bail!("invalid item {:?}", bad);
        }
        if items.len() % 2 != 0 {
            bail!("odd number of items ({}) cannot be split into compartments", items.len());
        }
        Ok(Self { items })
    }

    pub fn compartments(&self) -> (&'a str, &'a str) {
        self.items.split_at(self.items.len() / 2)
    }

    /// The item packed in both compartments
    pub fn misplaced_item(&self) -> Option<char> {
        let (first, second) = self.compartments();
        first_common(first, item_set(second))
    }
}

/// The item carried by all three rucksacks of a group
pub fn badge(group: &[Rucksack<'_>]) -> Option<char> {
    let (first, rest) = group.split_first()?;
    let shared = rest.iter().fold(u64::MAX, |set, r| set & item_set(r.items));
    first_common(first.items, shared)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Rucksack<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        aoc_solver::lines(input)
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                Rucksack::new(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(idx, rucksack)| {
                rucksack
                    .misplaced_item()
                    .and_then(priority)
                    .ok_or_else(|| anyhow!("no common item found in rucksack {}", idx + 1))
            })
            .sum::<anyhow::Result<u32>>()
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let groups = shared.chunks_exact(GROUP_SIZE);
        if !groups.remainder().is_empty() {
            return Err(SolveError::failed(format!(
                "{} rucksacks cannot be split into groups of {}",
                shared.len(),
                GROUP_SIZE
            )));
        }

        groups
            .enumerate()
            .map(|(idx, group)| {
                badge(group)
                    .and_then(priority)
                    .ok_or_else(|| anyhow!("no common item found in group {}", idx + 1))
            })
            .sum::<anyhow::Result<u32>>()
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve_part;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const SAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1).unwrap(), "157");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2).unwrap(), "70");
    }

    #[test]
    fn test_misplaced_items_of_sample() {
        let rucksacks = Solver::parse(SAMPLE).unwrap();
        let items: String = rucksacks.iter().filter_map(Rucksack::misplaced_item).collect();
        assert_eq!(items, "pLPvts");
    }

    #[test]
    fn test_priority_is_bijection_onto_1_to_52() {
        let letters = ('a'..='z').chain('A'..='Z');
        let priorities: BTreeSet<u32> = letters.map(|c| priority(c).unwrap()).collect();
        assert_eq!(priorities, (1..=52).collect());
    }

    #[test]
    fn test_priority_boundaries() {
        assert_eq!(priority('a'), Some(1));
        assert_eq!(priority('z'), Some(26));
        assert_eq!(priority('A'), Some(27));
        assert_eq!(priority('Z'), Some(52));
        assert_eq!(priority('1'), None);
        assert_eq!(priority('é'), None);
    }

    #[test]
    fn test_malformed_rucksacks() {
        assert!(matches!(Solver::parse("abc"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("ab\nc-"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_no_common_item_is_fatal() {
        assert!(matches!(
            solve_part::<Solver>("abcd", 1),
            Err(aoc_solver::SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
        assert!(matches!(
            solve_part::<Solver>("aa\nbb\ncc", 2),
            Err(aoc_solver::SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }

    #[test]
    fn test_incomplete_group_is_fatal() {
        assert!(matches!(
            solve_part::<Solver>("aa\naa\naa\nbb", 2),
            Err(aoc_solver::SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }

    proptest! {
        #[test]
        fn prop_priority_defined_only_for_ascii_letters(c in any::<char>()) {
            prop_assert_eq!(priority(c).is_some(), c.is_ascii_alphabetic());
        }
    }
}
