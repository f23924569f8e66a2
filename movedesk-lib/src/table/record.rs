//! Field access seam between records and the table core

use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;

/// Records the search engine can inspect by field path.
///
/// Column accessors are explicit functions, so this trait is only needed for
/// search fields and for [`Column::field`](super::Column::field).
pub trait TableRecord {
    /// Resolves a field path, `None` when any segment is missing.
    fn lookup(&self, path: &FieldPath) -> Option<&Value>;
}

impl TableRecord for Record {
    fn lookup(&self, path: &FieldPath) -> Option<&Value> {
        Record::lookup(self, path)
    }
}
