//! Puzzle inputs stored on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Path of the input file for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the whole input file in one go
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert_eq!(store.path(2022, 1), temp.path().join("2022_day01.txt"));
        assert_eq!(store.path(2023, 25), temp.path().join("2023_day25.txt"));
    }

    #[test]
    fn test_load_reads_whole_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2022, 5));

        let input = "    [D]    \n[N] [C]    \n";
        fs::write(store.path(2022, 5), input).unwrap();

        assert!(store.contains(2022, 5));
        assert_eq!(store.load(2022, 5).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().join("nowhere"));

        match store.load(2022, 1) {
            Err(InputError::Missing(path)) => assert!(path.ends_with("2022_day01.txt")),
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.path(2022, 2)).unwrap();

        assert!(!store.contains(2022, 2));
        assert!(matches!(store.load(2022, 2), Err(InputError::Io { .. })));
    }
}
