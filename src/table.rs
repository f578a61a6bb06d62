// src/table.rs
use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the single string column holding one token per row.
pub const STRUCTURE_COLUMN: &str = "structure";

/// Fixed key the table is stored under. Parquet has no keyed hierarchy the
/// way HDF5 does, so this is carried as schema-level metadata in the footer.
pub const TABLE_KEY: &str = "table";

/// Build the one-column "structure" table from an ordered token sequence.
/// Row order equals input order; zero rows is valid.
pub fn structure_batch(tokens: &[String]) -> Result<RecordBatch> {
    let field = Field::new(STRUCTURE_COLUMN, DataType::Utf8, false);
    let metadata = HashMap::from([("name".to_string(), TABLE_KEY.to_string())]);
    let schema = Arc::new(Schema::new(vec![field]).with_metadata(metadata));

    let column = StringArray::from_iter_values(tokens.iter().map(String::as_str));
    RecordBatch::try_new(schema, vec![Arc::new(column) as ArrayRef])
        .context("assembling structure RecordBatch")
}
