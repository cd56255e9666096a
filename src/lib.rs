//! Keypad setup for a 4x3 membrane keypad.
//!
//! Holds the legend printed on each key and the pins wired to each row
//! and column conductor. A scanner reads these tables once at start up to
//! know which pins to drive and read, and which character a closure at
//! `(row, col)` stands for.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod keymap;
pub mod keypad;
pub mod matrix;
pub mod settings;

pub use config::{COL_PINS, COLS, KEYPAD, KEYS, ROW_PINS, ROWS};
pub use error::ConfigError;
pub use keymap::{Keymap, provide_keymap};
pub use keypad::{Keypad, KeypadConfig};
pub use matrix::{KeyPos, Line, MatrixPins, Pin};
pub use settings::KeypadSettings;

#[cfg(feature = "defmt")]
mod log {
    pub(crate) use defmt::{debug, warn};
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
mod log {
    pub(crate) use log::{debug, warn};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
mod log {
    macro_rules! debug {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }
    macro_rules! warn {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }
    pub(crate) use {debug, warn};
}
