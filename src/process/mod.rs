// src/process/mod.rs
pub mod aggregate;
pub mod date_parser;
pub mod loader;
pub mod raw_table;
pub mod trimming;
pub mod write;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{input_path, output_path};
use crate::error::Result;
use aggregate::{count_by_date, CountRow};
use date_parser::DateKey;
use raw_table::RawTable;

/// Steps between loading and writing: drop blank rows, select the date
/// column, normalize each value and count per day.
pub fn aggregate_table(table: RawTable) -> Result<Vec<CountRow>> {
    let table = trimming::drop_blank_rows(table);
    let column = table.date_column()?;
    debug!(column = column.name, values = column.values.len(), "selected date column");

    Ok(count_by_date(column.values.iter().map(DateKey::from_cell)))
}

/// Run the whole pipeline for one country: `raw_<CC>.xlsx` → `result_<CC>.csv`.
/// Returns the path written.
#[tracing::instrument(level = "info", skip(base_dir), fields(dir = %base_dir.display()))]
pub fn process_country(base_dir: &Path, country: &str) -> Result<PathBuf> {
    let input = input_path(base_dir, country);
    let output = output_path(base_dir, country);

    let table = loader::load_raw_table(&input)?;
    let counts = aggregate_table(table)?;

    let unparseable = counts
        .iter()
        .find(|r| r.key == DateKey::Unparseable)
        .map_or(0, |r| r.count);
    info!(
        days = counts.len() - usize::from(unparseable > 0),
        records = counts.iter().map(|r| r.count).sum::<u64>(),
        unparseable,
        "aggregated"
    );

    write::write_counts(&output, &counts)?;
    info!(output = %output.display(), "wrote result");
    Ok(output)
}
