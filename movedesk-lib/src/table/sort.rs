//! Single-column sorting.
//!
//! Rows are ordered by the column's underlying [`Value`], never by the
//! rendered cell. Null values sort last in both directions. Sorting is stable,
//! so rows with equal values keep their filtered order.

use std::cmp::Ordering;

use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort of a table: one column, one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }

    /// Next sort after the user activates `column`'s sort control.
    ///
    /// Two-state toggle: a new column starts ascending and replaces the
    /// current sort; the active column flips between ascending and
    /// descending.
    pub fn toggled(current: Option<&SortState>, column: &str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column: state.column.clone(),
                direction: state.direction.flipped(),
            },
            _ => SortState::asc(column),
        }
    }
}

/// Rank of a value's kind when two different kinds are compared.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::String(_) => 2,
        Value::DateTime(_) => 3,
        Value::Record(_) => 4,
        Value::List(_) => 5,
        Value::Null => 6,
    }
}

/// Compares two non-null values in ascending order.
fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(a, b)| compare_values(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Record(_), Value::Record(_)) => Ordering::Equal,
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => kind_rank(a).cmp(&kind_rank(b)),
        },
    }
}

/// Ascending comparison of two values with nulls last.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_present(a, b),
    }
}

/// Comparison in the given direction. Nulls stay last either way.
pub fn compare_directed(a: &Value, b: &Value, direction: Direction) -> Ordering {
    match (a.is_null(), b.is_null(), direction) {
        (false, false, Direction::Desc) => compare_present(a, b).reverse(),
        _ => compare_values(a, b),
    }
}

/// Stable sort of `items` by the value each one maps to.
///
/// Each item's value is computed once.
pub fn sort_by_value<T>(items: &mut Vec<T>, value_of: impl Fn(&T) -> Value, direction: Direction) {
    let mut keyed: Vec<(Value, T)> = items
        .drain(..)
        .map(|item| (value_of(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_directed(a, b, direction));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_toggle_same_column_flips() {
        let asc = SortState::toggled(None, "name");
        assert_eq!(asc, SortState::asc("name"));
        let desc = SortState::toggled(Some(&asc), "name");
        assert_eq!(desc, SortState::desc("name"));
        let again = SortState::toggled(Some(&desc), "name");
        assert_eq!(again, SortState::asc("name"));
    }

    #[test]
    fn test_toggle_other_column_replaces() {
        let current = SortState::desc("name");
        assert_eq!(
            SortState::toggled(Some(&current), "email"),
            SortState::asc("email")
        );
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(compare_values(&Value::Int(9), &Value::Int(10)), Ordering::Less);
        assert_eq!(
            compare_values(&Value::Float(2.5), &Value::Int(2)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let early = Value::from(Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap());
        let late = Value::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(compare_values(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_nulls_last_both_directions() {
        let mut values = vec![Value::Null, Value::Int(2), Value::Int(1)];
        sort_by_value(&mut values, |v| v.clone(), Direction::Asc);
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Null]);

        sort_by_value(&mut values, |v| v.clone(), Direction::Desc);
        assert_eq!(values, vec![Value::Int(2), Value::Int(1), Value::Null]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![("b", 1i64), ("a", 1), ("c", 0)];
        sort_by_value(&mut rows, |(_, n)| Value::Int(*n), Direction::Asc);
        assert_eq!(rows, vec![("c", 0), ("b", 1), ("a", 1)]);
    }

    #[test]
    fn test_mixed_kinds_have_fixed_order() {
        assert_eq!(
            compare_values(&Value::from("1"), &Value::Int(5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&Value::Bool(true), &Value::from("a")),
            Ordering::Less
        );
    }
}
