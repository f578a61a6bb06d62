// src/write.rs
use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

/// Write `batch` to `path` as Parquet, creating or overwriting the file.
///
/// The batch goes to a `.tmp` sibling first and is renamed into place, so a
/// failed write never leaves a partial file at the final path. Returns the
/// size of the written file in bytes.
pub fn write_table(batch: &RecordBatch, path: &Path) -> Result<u64> {
    let tmp_path = path.with_extension("tmp");

    let tmp_file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create temporary output file: {:?}", tmp_path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(tmp_file, batch.schema(), Some(props))
        .context("initializing Parquet writer")?;

    writer.write(batch).context("writing batch to Parquet")?;
    writer.close().context("closing Parquet writer")?;

    let file_size = fs::metadata(&tmp_path)
        .context("getting output file metadata")?
        .len();
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to rename Parquet file into place: {:?}", path))?;

    debug!(rows = batch.num_rows(), bytes = file_size, path = %path.display(), "wrote table");
    Ok(file_size)
}
