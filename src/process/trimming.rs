use crate::process::raw_table::RawTable;

/// Drop rows in which every cell is empty. Partially filled rows and the
/// header are kept.
pub fn drop_blank_rows(mut table: RawTable) -> RawTable {
    table.rows.retain(|row| !row.iter().all(|c| c.is_empty()));
    table
}
