//! Keypad description as data.
//!
//! [`KeypadSettings`] can be deserialized from whatever format a board
//! ships its configuration in, then turned into a [`KeypadConfig`] once at
//! start up. Conversion checks every size against the const dimensions of
//! the target config and rejects pin conflicts.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::config::{LEGEND_ROW_BYTES, MAX_LINES, MAX_RESERVED_PINS};
use crate::error::{ConfigError, Dimension};
use crate::keymap::Keymap;
use crate::keypad::KeypadConfig;
use crate::log::debug;
use crate::matrix::{MatrixPins, Pin};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadSettings {
    pub rows: usize,
    pub cols: usize,
    pub row_pins: Vec<Pin, MAX_LINES>,
    pub col_pins: Vec<Pin, MAX_LINES>,
    /// One string per row, one char per column
    pub keys: Vec<String<LEGEND_ROW_BYTES>, MAX_LINES>,
    /// Pins owned by other peripherals on the board
    #[serde(default)]
    pub reserved_pins: Vec<Pin, MAX_RESERVED_PINS>,
}

fn check(what: Dimension, expected: usize, found: usize) -> Result<(), ConfigError> {
    if expected == found {
        Ok(())
    } else {
        Err(ConfigError::DimensionMismatch {
            what,
            expected,
            found,
        })
    }
}

fn too_large(what: Dimension, found: usize) -> ConfigError {
    ConfigError::TooLarge {
        what,
        max: MAX_LINES,
        found,
    }
}

impl KeypadSettings {
    /// Describe `config` as settings, with no reserved pins.
    ///
    /// Fails if the keypad has more than `MAX_LINES` rows or columns.
    pub fn from_config<const R: usize, const C: usize>(
        config: &KeypadConfig<R, C>,
    ) -> Result<Self, ConfigError> {
        let mut row_pins = Vec::new();
        row_pins
            .extend_from_slice(config.pins().rows())
            .map_err(|_| too_large(Dimension::RowPins, R))?;

        let mut col_pins = Vec::new();
        col_pins
            .extend_from_slice(config.pins().cols())
            .map_err(|_| too_large(Dimension::ColPins, C))?;

        let mut keys = Vec::new();
        for (row, legend) in config.keymap().rows().iter().enumerate() {
            let mut text = String::new();
            for ch in legend {
                text.push(*ch)
                    .map_err(|_| too_large(Dimension::LegendRow(row as u8), C))?;
            }
            keys.push(text)
                .map_err(|_| too_large(Dimension::LegendRows, R))?;
        }

        Ok(Self {
            rows: R,
            cols: C,
            row_pins,
            col_pins,
            keys,
            reserved_pins: Vec::new(),
        })
    }
}

impl<const R: usize, const C: usize> TryFrom<&KeypadSettings> for KeypadConfig<R, C> {
    type Error = ConfigError;

    fn try_from(settings: &KeypadSettings) -> Result<Self, Self::Error> {
        check(Dimension::Rows, R, settings.rows)?;
        check(Dimension::Cols, C, settings.cols)?;

        let rows: [Pin; R] = settings
            .row_pins
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::DimensionMismatch {
                what: Dimension::RowPins,
                expected: R,
                found: settings.row_pins.len(),
            })?;
        let cols: [Pin; C] = settings
            .col_pins
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::DimensionMismatch {
                what: Dimension::ColPins,
                expected: C,
                found: settings.col_pins.len(),
            })?;

        check(Dimension::LegendRows, R, settings.keys.len())?;
        let mut keys = [[' '; C]; R];
        for (row, (legend, text)) in keys.iter_mut().zip(settings.keys.iter()).enumerate() {
            check(Dimension::LegendRow(row as u8), C, text.chars().count())?;
            for (slot, ch) in legend.iter_mut().zip(text.chars()) {
                *slot = ch;
            }
        }

        let config = KeypadConfig::new(Keymap::new(keys), MatrixPins::new(rows, cols));
        config.validate(&settings.reserved_pins)?;

        debug!("[settings] loaded {}x{} keypad", R, C);
        Ok(config)
    }
}
