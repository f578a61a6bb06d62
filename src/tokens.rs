// src/tokens.rs
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read `path` line by line and keep the first whitespace-delimited token of
/// each line, in input order.
///
/// A line with no non-whitespace content is an error (reported with its
/// 1-based line number) rather than being silently skipped. An empty file
/// yields an empty vector.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut tokens = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read line {} of {:?}", idx + 1, path))?;
        match line.split_whitespace().next() {
            Some(tok) => tokens.push(tok.to_string()),
            None => bail!(
                "Line {} of {:?} contains no whitespace-delimited token",
                idx + 1,
                path
            ),
        }
    }

    debug!(count = tokens.len(), path = %path.display(), "read tokens");
    Ok(tokens)
}
