use std::str::FromStr;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["scoring"], expected = ["11475", "16862"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

/// Second column of the strategy guide; part 1 reads it as a shape, part 2
/// as the outcome to aim for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
    Z,
}

impl Shape {
    pub fn score(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// Outcome for `self` when played against `opponent`
    pub fn outcome_against(self, opponent: Shape) -> Outcome {
        match (self, opponent) {
            (Shape::Rock, Shape::Scissors)
            | (Shape::Paper, Shape::Rock)
            | (Shape::Scissors, Shape::Paper) => Outcome::Win,
            (Shape::Rock, Shape::Paper)
            | (Shape::Paper, Shape::Scissors)
            | (Shape::Scissors, Shape::Rock) => Outcome::Loss,
            _ => Outcome::Draw,
        }
    }

    /// The shape that produces `outcome` against `opponent`
    pub fn response_for(opponent: Shape, outcome: Outcome) -> Shape {
        match (opponent, outcome) {
            (shape, Outcome::Draw) => shape,
            (Shape::Rock, Outcome::Win) | (Shape::Scissors, Outcome::Loss) => Shape::Paper,
            (Shape::Paper, Outcome::Win) | (Shape::Rock, Outcome::Loss) => Shape::Scissors,
            (Shape::Scissors, Outcome::Win) | (Shape::Paper, Outcome::Loss) => Shape::Rock,
        }
    }
}

impl Outcome {
    pub fn score(self) -> u32 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

impl Column {
    pub fn as_shape(self) -> Shape {
        match self {
            Column::X => Shape::Rock,
            Column::Y => Shape::Paper,
            Column::Z => Shape::Scissors,
        }
    }

    pub fn as_outcome(self) -> Outcome {
        match self {
            Column::X => Outcome::Loss,
            Column::Y => Outcome::Draw,
            Column::Z => Outcome::Win,
        }
    }
}

/// Opponent codes `A`, `B`, `C`
impl FromStr for Shape {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Shape::Rock),
            "B" => Ok(Shape::Paper),
            "C" => Ok(Shape::Scissors),
            _ => Err(anyhow!("invalid opponent move: {:?}", s)),
        }
    }
}

impl FromStr for Column {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Column::X),
            "Y" => Ok(Column::Y),
            "Z" => Ok(Column::Z),
            _ => Err(anyhow!("invalid response code: {:?}", s)),
        }
    }
}

/// Outcome score plus the intrinsic score of the shape played
pub fn round_score(opponent: Shape, response: Shape) -> u32 {
    response.outcome_against(opponent).score() + response.score()
}

fn parse_round(line: &str) -> anyhow::Result<(Shape, Column)> {
    let Some((opponent, column)) = line.split_once(' ') else {
        bail!("expected two space separated codes, got {:?}", line);
    };
    Ok((opponent.parse()?, column.trim().parse()?))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Shape, Column)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        aoc_solver::lines(input)
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_round(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|&(opponent, column)| round_score(opponent, column.as_shape()))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|&(opponent, column)| {
                round_score(opponent, Shape::response_for(opponent, column.as_outcome()))
            })
            .sum();
        Ok(total.to_string())
    }
}
