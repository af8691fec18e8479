use std::fmt;

use bookwatch_shared::domain::Record;

/// Identity of a result row; never reused within a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub record: Record,
}

impl Row {
    pub const HEADERS: [&'static str; 4] = ["Booked", "Name", "UCN", "Facility"];

    /// Display cells in column order; the remove control is the row id.
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.record.book_date,
            &self.record.name,
            &self.record.ucn.0,
            &self.record.facility,
        ]
    }
}

/// Append-only list of result rows with per-row removal.
#[derive(Debug, Default)]
pub struct ResultTable {
    rows: Vec<Row>,
    next_id: u64,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, record: Record) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, record });
        id
    }

    /// Remove exactly the row `id`. Unknown ids are ignored.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
