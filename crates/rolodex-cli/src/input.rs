//! Input reading for the command interpreter.

use crate::error::Result;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Read all input lines from a file, or from standard input when no path is
/// given.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(text.lines().map(str::to_string).collect())
        }
        None => {
            let stdin = io::stdin();
            let lines: io::Result<Vec<String>> = stdin.lock().lines().collect();
            Ok(lines?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Company Acme").unwrap();
        writeln!(file, "Partner Alice").unwrap();

        let lines = read_lines(Some(file.path())).unwrap();
        assert_eq!(lines, vec!["Company Acme", "Partner Alice"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_lines(Some(Path::new("/nonexistent/input.txt")));
        assert!(matches!(result, Err(crate::error::CliError::Io(_))));
    }
}
