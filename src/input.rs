//! Scenario lines from files or an interactive reader

use crate::error::CalcResult;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Line that ends interactive input
pub const STOP_LINE: &str = "s";

/// Read scenario lines from a file, skipping blank lines and `#` comments
pub fn read_lines_from_path<P: AsRef<Path>>(path: P) -> CalcResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Read scenario lines until a line containing only `s` or end of input
pub fn read_lines_until_stop<R: BufRead>(reader: R) -> CalcResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == STOP_LINE {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}
