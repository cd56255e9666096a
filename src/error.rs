use core::fmt;

use crate::matrix::{Line, Pin};

/// Which part of a keypad description had the wrong size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dimension {
    Rows,
    Cols,
    RowPins,
    ColPins,
    /// Number of rows in the legend
    LegendRows,
    /// Length of the legend for the given row
    LegendRow(u8),
}

/// Defines errors found while checking a keypad configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same pin is wired to two conductors
    DuplicatePin { pin: Pin, first: Line, second: Line },
    /// A keypad pin is already claimed by another peripheral
    ReservedPin { pin: Pin, line: Line },
    /// A table does not have the declared size
    DimensionMismatch {
        what: Dimension,
        expected: usize,
        found: usize,
    },
    /// A table is larger than settings can hold
    TooLarge {
        what: Dimension,
        max: usize,
        found: usize,
    },
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Rows => f.write_str("rows"),
            Dimension::Cols => f.write_str("cols"),
            Dimension::RowPins => f.write_str("row pins"),
            Dimension::ColPins => f.write_str("col pins"),
            Dimension::LegendRows => f.write_str("legend rows"),
            Dimension::LegendRow(row) => write!(f, "legend row {}", row),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicatePin { pin, first, second } => {
                write!(f, "pin {} used by both {} and {}", pin, first, second)
            }
            ConfigError::ReservedPin { pin, line } => {
                write!(f, "pin {} of {} is reserved by another peripheral", pin, line)
            }
            ConfigError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(f, "{}: expected {}, found {}", what, expected, found),
            ConfigError::TooLarge { what, max, found } => {
                write!(f, "{}: at most {} fit, found {}", what, max, found)
            }
        }
    }
}

impl core::error::Error for ConfigError {}
