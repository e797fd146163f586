use std::str::FromStr;

use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["intervals"], expected = ["567", "907"])]
pub struct Solver;

/// Closed range of section ids, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    start: u32,
    end: u32,
}

impl Section {
    pub fn new(start: u32, end: u32) -> anyhow::Result<Self> {
        if start > end {
            bail!("section start {} is after its end {}", start, end);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, other: &Section) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Section) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .with_context(|| format!("expected a range like 2-4, got {:?}", s))?;
        let start = start
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid section start {:?}", start))?;
        let end = end
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid section end {:?}", end))?;
        Section::new(start, end)
    }
}

/// The two assignments of one elf pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPair(pub Section, pub Section);

impl SectionPair {
    pub fn fully_overlapping(&self) -> bool {
        self.0.contains(&self.1) || self.1.contains(&self.0)
    }

    pub fn partially_overlapping(&self) -> bool {
        self.0.overlaps(&self.1)
    }
}

impl FromStr for SectionPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(',')
            .with_context(|| format!("expected two comma separated ranges, got {:?}", s))?;
        Ok(SectionPair(a.parse()?, b.parse()?))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<SectionPair>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        aoc_solver::lines(input)
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<SectionPair>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.fully_overlapping()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.partially_overlapping()).count().to_string())
    }
}
