use crate::config::{COLS, ROWS};
use crate::error::ConfigError;
use crate::keymap::Keymap;
use crate::matrix::{KeyPos, MatrixPins, Pin};

/// Everything a scanner needs to know about the keypad: which pins to
/// drive and read, and what each closure means.
///
/// Built once and handed out by reference. There is no way to change it
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadConfig<const R: usize, const C: usize> {
    keymap: Keymap<R, C>,
    pins: MatrixPins<R, C>,
}

/// The keypad this crate is built for.
pub type Keypad = KeypadConfig<ROWS, COLS>;

impl<const R: usize, const C: usize> KeypadConfig<R, C> {
    pub const fn new(keymap: Keymap<R, C>, pins: MatrixPins<R, C>) -> Self {
        Self { keymap, pins }
    }

    pub const fn keymap(&self) -> &Keymap<R, C> {
        &self.keymap
    }

    pub const fn pins(&self) -> &MatrixPins<R, C> {
        &self.pins
    }

    /// Character for the key at `(row, col)`. Panics if out of range.
    pub const fn legend(&self, row: usize, col: usize) -> char {
        self.keymap.legend(row, col)
    }

    /// Pin of row `i`. Panics if `i >= R`.
    pub const fn row_pin(&self, i: usize) -> Pin {
        self.pins.row_pin(i)
    }

    /// Pin of column `j`. Panics if `j >= C`.
    pub const fn col_pin(&self, j: usize) -> Pin {
        self.pins.col_pin(j)
    }

    pub fn key_at(&self, pos: KeyPos) -> Option<char> {
        self.keymap.get(pos.row as usize, pos.col as usize)
    }

    /// Translate a closure between `row_pin` and `col_pin` to its legend.
    pub fn key_for_pins(&self, row_pin: Pin, col_pin: Pin) -> Option<char> {
        let pos = self.pins.position_for_pins(row_pin, col_pin)?;
        self.key_at(pos)
    }

    /// Check the pin table against itself and against pins `reserved` by
    /// other peripherals. See [`MatrixPins::validate`].
    pub fn validate(&self, reserved: &[Pin]) -> Result<(), ConfigError> {
        self.pins.validate(reserved)
    }
}
