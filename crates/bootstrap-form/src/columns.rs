//! Grid column overrides for horizontal forms.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FormError, Result};

/// Number of columns in the Bootstrap grid.
pub const GRID_COLUMNS: u8 = 12;

/// Label/input split for a single field.
///
/// The input column is always the complement of the label column, so the two
/// add up to [`GRID_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOverride {
    left: u8,
}

impl ColumnOverride {
    /// Creates an override with `left` label columns.
    ///
    /// Zero means "no override" and yields `Ok(None)`.
    pub fn new(left: u8) -> Result<Option<Self>> {
        match left {
            0 => Ok(None),
            1..=GRID_COLUMNS => Ok(Some(Self { left })),
            _ => Err(FormError::InvalidLabelColumns(left)),
        }
    }

    /// Columns taken by the label.
    pub const fn left(self) -> u8 {
        self.left
    }

    /// Columns taken by the input.
    pub const fn right(self) -> u8 {
        GRID_COLUMNS - self.left
    }
}

fn trailing_digits() -> &'static Regex {
    static TRAILING_DIGITS: OnceLock<Regex> = OnceLock::new();
    TRAILING_DIGITS.get_or_init(|| Regex::new(r"\d+$").expect("Invalid column regex"))
}

/// Replaces the trailing number of every class token with `columns`.
///
/// ```
/// use bootstrap_form::apply_column_override;
///
/// assert_eq!(apply_column_override("col-sm-2 col-md-2", 4), "col-sm-4 col-md-4");
/// ```
pub fn apply_column_override(class: &str, columns: u8) -> String {
    class
        .split_whitespace()
        .map(|token| format!("{}{columns}", trailing_digits().replace(token, "")))
        .collect::<Vec<_>>()
        .join(" ")
}
