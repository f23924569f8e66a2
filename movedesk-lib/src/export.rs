//! CSV export of table data
//!
//! An [`ExportTable`] is a plain grid of strings. Build one from a column
//! schema (cells rendered to plain text) or straight from records (headers
//! derived from field keys), then write it with [`ExportTable::write_csv`].

use std::io::Write;

use csv::Writer;

use crate::error::ExportError;
use crate::model::Record;
use crate::model::Value;
use crate::table::Column;

/// A header row plus data rows, ready for export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exports rows through a column schema.
    ///
    /// Headers are the column labels without sort indicators; cells are the
    /// rendered cells' plain text.
    pub fn from_columns<'a, R: 'a>(
        columns: &[Column<R>],
        rows: impl IntoIterator<Item = &'a R>,
    ) -> Self {
        let headers = columns.iter().map(|c| c.label().to_string()).collect();
        let mut table = Self::new(headers);
        for record in rows {
            table.push_row(
                columns
                    .iter()
                    .map(|c| c.render_cell(record).plain_text())
                    .collect(),
            );
        }
        table
    }

    /// Exports raw records.
    ///
    /// Columns are the first record's keys in sorted order, with headers
    /// humanized by [`humanize_key`]. Null and missing values export as empty
    /// strings; nested records and lists export as JSON.
    pub fn from_records(records: &[Record]) -> Result<Self, ExportError> {
        let Some(first) = records.first() else {
            return Ok(Self::default());
        };
        let keys: Vec<String> = first.keys().into_iter().map(str::to_string).collect();
        let mut table = Self::new(keys.iter().map(|k| humanize_key(k)).collect());
        for record in records {
            let row = keys
                .iter()
                .map(|key| export_value(record.get(key)))
                .collect::<Result<Vec<_>, _>>()?;
            table.push_row(row);
        }
        log::debug!(
            "Prepared export of {} records with {} columns",
            table.rows.len(),
            table.headers.len()
        );
        Ok(table)
    }

    /// Writes the table as CSV.
    ///
    /// Writes nothing for a table without rows.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let mut writer = Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Renders the table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| ExportError::Io(std::io::Error::other(e)))
    }
}

fn export_value(value: Option<&Value>) -> Result<String, ExportError> {
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(nested @ (Value::Record(_) | Value::List(_))) => serde_json::to_string(nested)?,
        Some(other) => other.to_string(),
    })
}

/// Turns a field key into a column header.
///
/// Splits camelCase words, uppercases the first letter, turns underscores
/// into spaces and spells a trailing `Id` as `ID`.
///
/// ```
/// use movedesk_lib::export::humanize_key;
///
/// assert_eq!(humanize_key("customerId"), "Customer ID");
/// assert_eq!(humanize_key("requestCount"), "Request Count");
/// assert_eq!(humanize_key("zip_code"), "Zip code");
/// ```
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() && !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    out = out.replace('_', " ");

    let mut result = String::with_capacity(out.len());
    let mut rest = out.as_str();
    while let Some(pos) = rest.find("Id") {
        let after = &rest[pos + 2..];
        let at_word_end = after
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric() && c != '_');
        result.push_str(&rest[..pos]);
        result.push_str(if at_word_end { "ID" } else { "Id" });
        rest = after;
    }
    result.push_str(rest);
    result
}

/// File name for an export of `base`.
pub fn file_name(base: &str) -> String {
    format!("{}.csv", base)
}
