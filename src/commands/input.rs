use crate::error::InputError;
use crate::models::InputEntry;
use std::fs;
use std::path::Path;

/// Reads `url;answer` lines from `path`. An empty file is an error.
pub fn read_entries(path: &Path) -> Result<Vec<InputEntry>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&content)?;
    if entries.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

pub fn parse_entries(content: &str) -> Result<Vec<InputEntry>, InputError> {
    // Number lines before dropping blanks so errors point at the real line
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

// Only the first `;` separates; answers containing `;` are not supported
fn parse_line(lineno: usize, line: &str) -> Result<InputEntry, InputError> {
    let line = line.trim_end();
    match line.split_once(';') {
        Some((url, answer)) if !url.trim().is_empty() => Ok(InputEntry {
            poll_url: url.trim().to_string(),
            expected_answer: answer.to_string(),
        }),
        _ => Err(InputError::MalformedLine {
            lineno,
            line: line.to_string(),
        }),
    }
}
