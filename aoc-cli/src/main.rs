//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_level());

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing_inputs = executor.missing_inputs(&work_items);
    if !missing_inputs.is_empty() {
        tracing::warn!(
            input_dir = %config.input_dir.display(),
            missing = %missing_inputs
                .iter()
                .map(|(year, day)| format!("{}/{:02}", year, day))
                .join(", "),
            "input files missing"
        );
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    outcome?;
    Ok(())
}

/// Log to stderr so stdout carries answers only; `RUST_LOG` overrides `-v`
fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered_days(tags: &[&str]) -> Vec<(u16, u8)> {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        build_registry(&tags)
            .unwrap()
            .iter_info()
            .filter(|info| info.year == 2022)
            .map(|info| (info.year, info.day))
            .collect()
    }

    #[test]
    fn test_all_puzzles_are_linked() {
        let days = registered_days(&[]);
        assert_eq!(days, (1..=5).map(|day| (2022, day)).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_tag_must_match() {
        assert_eq!(registered_days(&["stacks"]), vec![(2022, 5)]);
        assert_eq!(registered_days(&["stacks", "simulation"]), vec![(2022, 5)]);
        assert!(registered_days(&["stacks", "grouping"]).is_empty());
    }

    #[test]
    fn test_known_answers_are_registered() {
        let registry = build_registry(&[]).unwrap();
        let info = registry.info(2022, 5).unwrap();
        assert_eq!(info.expected_answer(1), Some("DHBJQJCCW"));
        assert_eq!(info.expected_answer(2), Some("WJVRLSJJT"));
        assert_eq!(info.expected_answer(3), None);
    }
}
