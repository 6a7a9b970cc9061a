//! Records and the header row.

/// One delimited record: an ordered sequence of field strings.
///
/// Every record in a file has the same number of fields as the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Build a record from its fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or `None` past the end of the record.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Iterate over the fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<&csv::StringRecord> for Record {
    fn from(record: &csv::StringRecord) -> Self {
        Self::new(record.iter().map(str::to_string).collect())
    }
}

/// The first record of a file, whose fields name the columns.
///
/// An empty file has an empty header and therefore zero columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header(Record);

impl Header {
    /// Wrap the first record of a file.
    pub fn new(record: Record) -> Self {
        Self(record)
    }

    /// Number of columns in the file.
    pub fn column_count(&self) -> usize {
        self.0.len()
    }

    /// Name of the column at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.0.get(index)
    }

    /// Iterate over column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter()
    }
}
