//! Example demonstrating plugin registration with known answers
//!
//! A solver registers itself with `#[derive(AutoRegisterSolver)]`, including
//! the answers it is expected to produce, and a small runner checks them.
//!
//! Run with: cargo run --example known_answers

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
};

/// Sum and product of one integer per line
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["demo"], expected = ["10", "25"])]
pub struct SumAndProduct;

impl AocParser for SumAndProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        aoc_solver::lines(input)
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {}", line)))
            })
            .collect()
    }
}

impl PartSolver<1> for SumAndProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumAndProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(1i64, |acc, &n| acc.checked_mul(n))
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::failed("product overflows i64"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"demo"))?
        .build();

    let input = "1\n2\n3\n4\n";
    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        println!(
            "{}/{:02} parsed in {}",
            info.year,
            info.day,
            solver.parse_duration()
        );

        for part in 1..=info.parts {
            let result = solver.solve(part)?;
            println!(
                "  Part {}: {} (correct: {}, took {})",
                part,
                result.answer,
                result.verdict.as_flag(),
                result.solve_duration
            );
        }
    }

    Ok(())
}
