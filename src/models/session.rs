use serde::Serialize;

/// Number of fields a record needs to describe a full session.
pub const SESSION_FIELDS: usize = 6;

/// One complete timetable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub group: String,    // ⇔ field 0 (year / class key)
    pub start: String,    // ⇔ field 1 (HH:MM)
    pub subject: String,  // ⇔ field 2
    pub session: String,  // ⇔ field 3 (session label)
    pub location: String, // ⇔ field 4
    pub end: String,      // ⇔ field 5 (HH:MM)
}

/// A timetable record, classified once when the table is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Six or more fields; extra fields are dropped.
    Session(SessionRow),
    /// Fewer than six fields. Never matched, but its raw fields are kept
    /// because a start time may still be listed.
    Short(Vec<String>),
}

impl TableRow {
    pub fn from_fields(mut fields: Vec<String>) -> Self {
        if fields.len() < SESSION_FIELDS {
            return TableRow::Short(fields);
        }

        fields.truncate(SESSION_FIELDS);
        let mut it = fields.into_iter();
        // length checked above, every next() yields a field
        let mut next = || it.next().unwrap_or_default();
        TableRow::Session(SessionRow {
            group: next(),
            start: next(),
            subject: next(),
            session: next(),
            location: next(),
            end: next(),
        })
    }

    pub fn as_session(&self) -> Option<&SessionRow> {
        match self {
            TableRow::Session(row) => Some(row),
            TableRow::Short(_) => None,
        }
    }

    /// Second field of the record, when present.
    pub fn start_time(&self) -> Option<&str> {
        match self {
            TableRow::Session(row) => Some(row.start.as_str()),
            TableRow::Short(fields) => fields.get(1).map(String::as_str),
        }
    }
}

/// One day's timetable in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTable {
    pub rows: Vec<TableRow>,
}

impl SessionTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Build a table from raw records, classifying each one.
    pub fn from_records<I, R, F>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            rows: records
                .into_iter()
                .map(|r| TableRow::from_fields(r.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Complete session rows only, in file order.
    pub fn sessions(&self) -> impl Iterator<Item = &SessionRow> {
        self.rows.iter().filter_map(TableRow::as_session)
    }
}
