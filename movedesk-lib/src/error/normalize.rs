//! Boundary normalization errors

/// Errors raised while turning API payloads into table-ready records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A contact was referenced by id but neither embedded nor cached.
    #[error("Contact '{id}' is referenced but could not be resolved")]
    UnresolvedContact { id: String },

    /// A domain model could not be converted into a record.
    #[error("Record conversion failed: {0}")]
    Conversion(String),
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Conversion(err.to_string())
    }
}
