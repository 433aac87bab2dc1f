use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::process::raw_table::{Cell, RawTable};

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => Cell::Empty,
            Data::String(s) if s.is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::DateTime(_) | Data::DateTimeIso(_) => value
                .as_datetime()
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Other(value.to_string())),
            other => Cell::Other(other.to_string()),
        }
    }
}

/// Load the first worksheet of `path`. Its first row becomes the header.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_raw_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let load_err = |source| Error::Load {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(load_err)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;
    let range = workbook.worksheet_range(&sheet).map_err(load_err)?;

    let table = range_to_table(&range);
    debug!(
        sheet = %sheet,
        rows = table.rows.len(),
        columns = table.num_columns(),
        "loaded worksheet"
    );
    Ok(table)
}

/// calamine ranges start at the first used cell; pad on the left so that
/// column 0 is always spreadsheet column A.
fn range_to_table(range: &Range<Data>) -> RawTable {
    let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows().map(|row| {
        let mut cells = vec![Cell::Empty; lead];
        cells.extend(row.iter().map(Cell::from));
        cells
    });

    match rows.next() {
        Some(header) => RawTable {
            header,
            rows: rows.collect(),
        },
        None => RawTable::default(),
    }
}
