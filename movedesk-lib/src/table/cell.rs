//! Renderable cell values

use std::fmt;

use crate::model::Value;

/// Color tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
    Accent,
}

/// A rendered table cell.
///
/// The host maps cells onto its own widgets. `plain_text` gives the form used
/// by text surfaces and exports.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Badge { label: String, tone: Tone },
    /// Several cells stacked in one column, e.g. a name with a badge under it.
    Lines(Vec<Cell>),
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Text content without styling.
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Lines(cells) => cells
                .iter()
                .map(Cell::plain_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Cell::from(&value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}
