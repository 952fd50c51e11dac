use gh_scan::ScanOutcome;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Repository full name.
    pub repository: String,

    /// Scan signals on one line.
    pub scan: String,

    /// False when the repository could not be scanned.
    pub valid: bool,
}

impl From<&ScanOutcome> for TableRow {
    fn from(outcome: &ScanOutcome) -> Self {
        Self {
            repository: outcome.full_name.clone(),
            scan: outcome.flattened(),
            valid: outcome.valid,
        }
    }
}

/// The table browser state
#[derive(Debug)]
pub struct TableModel {
    /// Rows, in scan order
    pub rows: Vec<TableRow>,

    /// Index of the highlighted row
    pub cursor: usize,

    /// Whether the table reacts to navigation keys
    pub focused: bool,

    /// Rows moved by PageUp/PageDown
    pub page_size: usize,

    /// Repositories picked with Enter, in order
    pub selected: Vec<String>,

    /// Whether the browser should close
    pub should_quit: bool,
}

impl TableModel {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            cursor: 0,
            focused: true,
            page_size: 10,
            selected: Vec::new(),
            should_quit: false,
        }
    }

    pub fn from_outcomes(outcomes: &[ScanOutcome]) -> Self {
        Self::new(outcomes.iter().map(TableRow::from).collect())
    }

    /// The highlighted row, if the table is not empty
    pub fn current_row(&self) -> Option<&TableRow> {
        self.rows.get(self.cursor)
    }

    /// Last repository picked with Enter
    pub fn last_selected(&self) -> Option<&str> {
        self.selected.last().map(String::as_str)
    }

    pub fn move_up(&mut self, rows: usize) {
        self.cursor = self.cursor.saturating_sub(rows);
    }

    pub fn move_down(&mut self, rows: usize) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = (self.cursor + rows).min(last);
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }
}
