//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::Verdict;
use chrono::TimeDelta;
use std::io::{self, Write};

/// Output formatter for solver results
///
/// Answers go to stdout, failures to stderr.
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match self.format_result(result) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
        io::stdout().flush().ok();
    }

    /// The line for one result; `Err` lines belong on stderr
    pub fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match &result.answer {
            Ok(answer) if self.quiet => Ok(answer.clone()),
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!(", parse: {}", format_duration(d)))
                    .unwrap_or_default();

                Ok(format!(
                    "{}: {} (correct: {}{}, solve: {})",
                    prefix,
                    answer,
                    result.verdict.as_flag(),
                    parse_timing,
                    format_duration(result.solve_duration)
                ))
            }
            Err(e) if self.quiet => Err(format!("Error: {}", e)),
            Err(e) => Err(format!("{}: Error - {}", prefix, e)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in self.summary_lines(results) {
            println!("{}", line);
        }
    }

    fn summary_lines(&self, results: &[SolverResult]) -> Vec<String> {
        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let solved = || results.iter().filter(|r| r.answer.is_ok());
        let correct = solved().filter(|r| r.verdict == Verdict::Correct).count();
        let incorrect = solved()
            .filter(|r| matches!(r.verdict, Verdict::Incorrect { .. }))
            .count();
        let unknown = successes - correct - incorrect;

        let total_parse_time: TimeDelta = solved().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = solved().map(|r| r.solve_duration).sum();

        vec![
            "--- Summary ---".to_string(),
            format!("Solvers: {} solved, {} failed", successes, failures),
            format!(
                "Answers: {} correct, {} incorrect, {} unknown",
                correct, incorrect, unknown
            ),
            format!("Total parse time: {}", format_duration(total_parse_time)),
            format!("Total solve time: {}", format_duration(total_solve_time)),
            format!(
                "Elapsed wall-clock time: {}",
                format_std_duration(self.start_time.elapsed())
            ),
        ]
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError, InputError};
    use std::path::PathBuf;

    fn solved(part: u8, answer: &str, verdict: Verdict, parse_us: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2022,
            day: 5,
            part,
            answer: Ok(answer.to_string()),
            verdict,
            parse_duration: parse_us.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(250),
        }
    }

    fn failed(part: u8) -> SolverResult {
        let error: ArcExecutorError = ExecutorError::Input {
            year: 2022,
            day: 5,
            source: InputError::Missing(PathBuf::from("inputs/2022_day05.txt")),
        }
        .into();
        SolverResult {
            year: 2022,
            day: 5,
            part,
            answer: Err(error),
            verdict: Verdict::Unknown,
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_full_line_format() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_result(&solved(1, "CMZ", Verdict::Correct, Some(1500))),
            Ok("2022/05 Part 1: CMZ (correct: true, parse: 1.50ms, solve: 250µs)".to_string())
        );
        assert_eq!(
            formatter.format_result(&solved(2, "MCD", Verdict::Unknown, None)),
            Ok("2022/05 Part 2: MCD (correct: unknown, solve: 250µs)".to_string())
        );
    }

    #[test]
    fn test_quiet_prints_answers_only() {
        let formatter = OutputFormatter::new(true);
        assert_eq!(
            formatter.format_result(&solved(1, "CMZ", Verdict::Incorrect { expected: "X" }, None)),
            Ok("CMZ".to_string())
        );
        assert!(formatter.format_result(&failed(1)).unwrap_err().starts_with("Error: "));
    }

    #[test]
    fn test_failures_go_to_stderr() {
        let line = OutputFormatter::new(false).format_result(&failed(2)).unwrap_err();
        assert!(line.starts_with("2022/05 Part 2: Error - Input unavailable"), "{line}");
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            solved(1, "CMZ", Verdict::Correct, Some(1000)),
            solved(2, "XYZ", Verdict::Incorrect { expected: "MCD" }, None),
            failed(1),
        ];
        let lines = OutputFormatter::new(false).summary_lines(&results);
        assert_eq!(lines[1], "Solvers: 2 solved, 1 failed");
        assert_eq!(lines[2], "Answers: 1 correct, 1 incorrect, 0 unknown");
        assert_eq!(lines[3], "Total parse time: 1.00ms");
        assert_eq!(lines[4], "Total solve time: 500µs");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(12)), "12.00ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
