use core::fmt;

use heapless::Vec;
use crate::config::{MAX_LINES_PER_SIDE, MAX_REPORTED_CONFLICTS};
use crate::error::ConfigError;
use crate::log::warn;

/// Raw microcontroller pin number. What it maps to on a given board is up
/// to the HAL of the scanner using it.
pub type Pin = u8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One conductor of the matrix, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Row(u8),
    Col(u8),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(i) => write!(f, "row {}", i),
            Line::Col(i) => write!(f, "col {}", i),
        }
    }
}

/// Pins wired to each row and column conductor, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixPins<const R: usize, const C: usize> {
    rows: [Pin; R],
    cols: [Pin; C],
}

impl<const R: usize, const C: usize> MatrixPins<R, C> {
    /// Fails to build if `R` or `C` exceeds `MAX_LINES_PER_SIDE`.
    pub const fn new(rows: [Pin; R], cols: [Pin; C]) -> Self {
        const { assert!(R <= MAX_LINES_PER_SIDE && C <= MAX_LINES_PER_SIDE) };
        Self { rows, cols }
    }

    /// Pin of row `i`. Panics if `i >= R`.
    pub const fn row_pin(&self, i: usize) -> Pin {
        self.rows[i]
    }

    /// Pin of column `j`. Panics if `j >= C`.
    pub const fn col_pin(&self, j: usize) -> Pin {
        self.cols[j]
    }

    pub fn rows(&self) -> &[Pin] {
        &self.rows
    }

    pub fn cols(&self) -> &[Pin] {
        &self.cols
    }

    /// Every pin with the conductor it drives, rows first.
    pub fn lines(&self) -> impl Iterator<Item = (Pin, Line)> + '_ {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, pin)| (*pin, Line::Row(i as u8)));
        let cols = self
            .cols
            .iter()
            .enumerate()
            .map(|(j, pin)| (*pin, Line::Col(j as u8)));
        rows.chain(cols)
    }

    /// Find which conductor `pin` is wired to.
    pub fn line_for_pin(&self, pin: Pin) -> Option<Line> {
        self.lines().find(|(p, _)| *p == pin).map(|(_, line)| line)
    }

    /// Matrix position of a closure between `row_pin` and `col_pin`.
    pub fn position_for_pins(&self, row_pin: Pin, col_pin: Pin) -> Option<KeyPos> {
        let row = self.rows.iter().position(|p| *p == row_pin)?;
        let col = self.cols.iter().position(|p| *p == col_pin)?;
        Some(KeyPos::new(row as u8, col as u8))
    }

    /// Collect pin conflicts: a pin wired to more than one conductor, or a
    /// pin also claimed by another peripheral in `reserved`.
    ///
    /// Stops collecting once `MAX_REPORTED_CONFLICTS` have been found.
    pub fn conflicts(&self, reserved: &[Pin]) -> Vec<ConfigError, MAX_REPORTED_CONFLICTS> {
        let mut found = Vec::new();

        for (index, (pin, line)) in self.lines().enumerate() {
            // only report against the first earlier use
            if let Some((_, first)) = self.lines().take(index).find(|(p, _)| *p == pin) {
                let _ = found.push(ConfigError::DuplicatePin {
                    pin,
                    first,
                    second: line,
                });
            }

            if reserved.contains(&pin) {
                let _ = found.push(ConfigError::ReservedPin { pin, line });
            }
        }

        found
    }

    /// Check the pins are distinct and free of `reserved`. Every conflict
    /// is logged, the first is returned.
    pub fn validate(&self, reserved: &[Pin]) -> Result<(), ConfigError> {
        let conflicts = self.conflicts(reserved);
        for conflict in conflicts.iter() {
            warn!("[matrix] pin conflict: {}", conflict);
        }

        match conflicts.first() {
            Some(err) => Err(*err),
            None => Ok(()),
        }
    }
}

/// True if no pin appears twice in `pins`.
pub const fn pins_unique(pins: &[Pin]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i] == pins[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// True if `a` and `b` share no pin.
pub const fn pins_disjoint(a: &[Pin], b: &[Pin]) -> bool {
    let mut i = 0;
    while i < a.len() {
        let mut j = 0;
        while j < b.len() {
            if a[i] == b[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
