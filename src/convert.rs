// src/convert.rs
use anyhow::Result;
use std::path::Path;
use tracing::{info, instrument};

use crate::table::structure_batch;
use crate::tokens::read_tokens;
use crate::write::write_table;

/// Convert a whitespace-delimited record file into a one-column Parquet
/// table. Returns the number of rows written.
///
/// The input is read in full before the output path is touched, so a
/// missing or malformed input leaves any existing output file untouched.
#[instrument(level = "info", skip(input, output), fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn file_to_parquet<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let tokens = read_tokens(input.as_ref())?;
    let batch = structure_batch(&tokens)?;
    let bytes = write_table(&batch, output.as_ref())?;

    info!(rows = batch.num_rows(), bytes, "conversion complete");
    Ok(batch.num_rows())
}
