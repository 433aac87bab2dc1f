use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Position of the timestamp column in the export.
pub const DATE_COLUMN: usize = 1;

/// Name given to the selected column.
pub const DATE_COLUMN_NAME: &str = "Date";

/// One spreadsheet value, reduced to what the pipeline distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    /// Native spreadsheet date/time cell.
    DateTime(NaiveDateTime),
    Number(f64),
    /// Booleans, error cells, durations.
    Other(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// First worksheet of a country export. Columns are positional; column 0 is
/// spreadsheet column A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// The worksheet's first row.
    pub header: Vec<Cell>,
    /// Every following row, each as wide as the table.
    pub rows: Vec<Vec<Cell>>,
}

/// The selected date series, header artifact already dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DateColumn {
    pub name: &'static str,
    pub values: Vec<Cell>,
}

impl RawTable {
    pub fn num_columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Take column 1 and discard its first entry.
    ///
    /// The first entry is dropped by position only: exports carry a label row
    /// there. If an export ever lacks it, the first real record is lost.
    pub fn date_column(self) -> Result<DateColumn> {
        let rows = self.rows.len();
        let columns = self.num_columns();
        if rows < 2 || columns <= DATE_COLUMN {
            return Err(Error::Schema { rows, columns });
        }

        let values = self
            .rows
            .into_iter()
            .skip(1)
            .map(|mut row| {
                if row.len() > DATE_COLUMN {
                    row.swap_remove(DATE_COLUMN)
                } else {
                    Cell::Empty
                }
            })
            .collect();

        Ok(DateColumn {
            name: DATE_COLUMN_NAME,
            values,
        })
    }
}
