// ============================================================================
// gridscan-cli/src/input.rs
// ============================================================================
//
// GRID INPUT: Loading text grids from disk
//
// The CLI reads plain integer matrices: one grid row per line, samples
// separated by whitespace and/or commas. Blank lines and lines starting
// with '#' are skipped. Every row must have the same number of samples.

use std::fs;
use std::path::Path;

use gridscan_core::{CoreError, GrayGrid};

use crate::error::{CliErrorContext, CliResult};

/// Parses a text grid.
pub fn parse_grid(text: &str) -> CliResult<GrayGrid> {
    let mut rows: Vec<Vec<i32>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i32>().map_err(|_| {
                    CoreError::InvalidInput(format!(
                        "line {}: '{}' is not an integer sample",
                        index + 1,
                        token
                    ))
                })
            })
            .collect::<Result<Vec<i32>, CoreError>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(CoreError::InvalidInput(format!(
                    "line {}: expected {} samples, found {}",
                    index + 1,
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CoreError::InvalidInput("grid contains no rows".to_string()));
    }
    GrayGrid::from_rows(&rows)
}

/// Reads and parses a grid file.
pub fn load_grid(path: &Path) -> CliResult<GrayGrid> {
    log::debug!("Loading grid from {}", path.display());
    let text = fs::read_to_string(path)
        .cli_with_context(|| format!("Failed to read {}", path.display()))?;
    parse_grid(&text).cli_with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscan_core::SampleGrid;

    #[test]
    fn test_parse_whitespace_and_commas() {
        let grid = parse_grid("# a comment\n0 0 0\n\n0,-1, 0\n0\t0 0\n").unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.sample_at(1, 1), -1);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = parse_grid("0 0 0\n0 0\n").unwrap_err();
        assert!(err.to_string().contains("line 2: expected 3 samples, found 2"));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        let err = parse_grid("0 x 0\n").unwrap_err();
        assert!(err.to_string().contains("'x' is not an integer sample"));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(parse_grid("# nothing\n\n").is_err());
    }
}
