use arrow::{
    array::{ArrayRef, StringArray, UInt64Array},
    csv::WriterBuilder,
    datatypes::{DataType, Field, Schema},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::{fs, path::Path, sync::Arc};

use crate::error::{Error, Result};
use crate::process::aggregate::CountRow;

pub const DEDUP_DATE_FIELD: &str = "Dedup Date";
pub const COUNT_FIELD: &str = "Count";

/// Two-column batch; the unparseable bucket is a null `Dedup Date`.
pub fn counts_to_batch(rows: &[CountRow]) -> std::result::Result<RecordBatch, ArrowError> {
    let schema = Schema::new(vec![
        Field::new(DEDUP_DATE_FIELD, DataType::Utf8, true),
        Field::new(COUNT_FIELD, DataType::UInt64, false),
    ]);
    let dates: StringArray = rows.iter().map(|r| r.key.as_day()).collect();
    let counts: UInt64Array = rows.iter().map(|r| Some(r.count)).collect();

    RecordBatch::try_new(
        Arc::new(schema),
        vec![Arc::new(dates) as ArrayRef, Arc::new(counts) as ArrayRef],
    )
}

/// Serialize counts as CSV (header, no index column) and replace `path`.
/// Nulls are written as empty fields.
pub fn write_counts(path: &Path, rows: &[CountRow]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let batch = counts_to_batch(rows).map_err(write_err)?;
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().with_header(true).build(&mut buf);
        writer.write(&batch).map_err(write_err)?;
    }

    fs::write(path, buf).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
