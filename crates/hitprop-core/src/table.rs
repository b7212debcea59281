// Delimited-text loading.
//
// Both inputs are read into a `RawTable`: the header row plus every data
// record as strings. Typing happens later, once the columns have been
// normalized, so the loader never needs to know the schema.

use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use crate::error::PipelineError;

/// Which of the two inputs a table came from. Used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stats,
    Odds,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Stats => "player stats",
            Source::Odds => "betting odds",
        }
    }
}

/// An in-memory table of named string columns.
#[derive(Debug, Clone)]
pub struct RawTable {
    source: Source,
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl RawTable {
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub(crate) fn headers_mut(&mut self) -> &mut Vec<String> {
        &mut self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `(row, col)`, or `None` when the cell is empty. Short rows
    /// read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.records
            .get(row)
            .and_then(|r| r.get(col))
            .filter(|v| !v.is_empty())
    }

    /// Replace (or append) a whole column.
    pub(crate) fn set_column(&mut self, name: &str, values: Vec<String>) {
        match self.column_index(name) {
            Some(idx) => {
                for (record, value) in self.records.iter_mut().zip(values) {
                    let mut rebuilt =
                        StringRecord::with_capacity(record.as_slice().len(), record.len());
                    for (i, field) in record.iter().enumerate() {
                        if i == idx {
                            rebuilt.push_field(&value);
                        } else {
                            rebuilt.push_field(field);
                        }
                    }
                    *record = rebuilt;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (record, value) in self.records.iter_mut().zip(values) {
                    record.push_field(&value);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(source: Source, headers: &[&str], rows: &[&[&str]]) -> Self {
        RawTable {
            source,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            records: rows.iter().map(|r| StringRecord::from(r.to_vec())).collect(),
        }
    }
}

/// Parse a CSV byte stream into a `RawTable`.
///
/// Short records are padded with empty cells up to the header width. A
/// record with more fields than the header is a parse failure for the whole
/// input.
pub fn load_table<R: Read>(rdr: R, source: Source) -> Result<RawTable, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| PipelineError::Parse {
            source_name: source.name(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(PipelineError::EmptyInput {
            source_name: source.name(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let mut record = result.map_err(|e| PipelineError::Parse {
            source_name: source.name(),
            source: e,
        })?;
        if record.len() > headers.len() {
            return Err(PipelineError::Parse {
                source_name: source.name(),
                source: too_many_fields(&record, headers.len()),
            });
        }
        while record.len() < headers.len() {
            record.push_field("");
        }
        records.push(record);
    }

    let table = RawTable {
        source,
        headers,
        records,
    };
    debug!(
        "loaded {} table: {} columns, {} rows",
        table.source().name(),
        table.headers.len(),
        table.len()
    );
    Ok(table)
}

fn too_many_fields(record: &StringRecord, expected: usize) -> csv::Error {
    let line = record.position().map_or(0, |p| p.line());
    csv::Error::from(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!(
            "line {line}: found record with {} fields, but the header has {expected}",
            record.len()
        ),
    ))
}
