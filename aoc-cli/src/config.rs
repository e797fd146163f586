//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Puzzle input directory, `~` already expanded
    pub input_dir: PathBuf,
    /// Run every solver even after a failure
    pub keep_going: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_dir = expand_tilde(&args.input_dir);
        if input_dir.exists() && !input_dir.is_dir() {
            return Err(CliError::Config(format!(
                "input path {} is not a directory",
                input_dir.display()
            )));
        }

        let tags = args
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            input_dir,
            keep_going: args.keep_going,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }

    /// Default log directive when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    fn config_for(argv: &[&str]) -> Result<Config, CliError> {
        let mut full = vec!["aoc"];
        full.extend_from_slice(argv);
        Config::from_args(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
    }

    #[test]
    fn test_blank_tags_are_dropped() {
        let config = config_for(&["--input-dir", "inputs", "-t", "stacks, ,grouping"]).unwrap();
        assert_eq!(config.tags, vec!["stacks", "grouping"]);
    }

    #[test]
    fn test_input_dir_must_be_a_directory() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(
            config_for(&["--input-dir", path]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        assert_eq!(config_for(&["--input-dir", "inputs"]).unwrap().log_level(), "warn");
        assert_eq!(config_for(&["--input-dir", "inputs", "-v"]).unwrap().log_level(), "debug");
        assert_eq!(config_for(&["--input-dir", "inputs", "-vvv"]).unwrap().log_level(), "trace");
    }
}
