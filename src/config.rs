use static_assertions::const_assert;

use crate::keymap::Keymap;
use crate::keypad::Keypad;
use crate::matrix::{MatrixPins, Pin, pins_disjoint, pins_unique};

/// Rows on the keypad
pub const ROWS: usize = 4;
/// Cols on the keypad
pub const COLS: usize = 3;

/// Legend printed on each key, indexed `[row][col]`
pub const KEYS: [[char; COLS]; ROWS] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// Pins wired to the row conductors, top to bottom
pub const ROW_PINS: [Pin; ROWS] = [62, 63, 64, 65];
/// Pins wired to the column conductors, left to right
pub const COL_PINS: [Pin; COLS] = [66, 67, 68];

/// The full keypad table.
pub const KEYPAD: Keypad = Keypad::new(Keymap::new(KEYS), MatrixPins::new(ROW_PINS, COL_PINS));

const_assert!(pins_unique(&ROW_PINS));
const_assert!(pins_unique(&COL_PINS));
const_assert!(pins_disjoint(&ROW_PINS, &COL_PINS));

/// Most rows or columns any matrix can have, so every index fits a `u8`.
pub const MAX_LINES_PER_SIDE: usize = u8::MAX as usize + 1;

/// Upper bound on row or column conductors accepted from settings.
pub const MAX_LINES: usize = 16;
const_assert!(ROWS <= MAX_LINES && COLS <= MAX_LINES);

/// Bytes held by one legend row in settings, room for `MAX_LINES` chars
/// of up to four UTF-8 bytes.
pub const LEGEND_ROW_BYTES: usize = 4 * MAX_LINES;

/// Upper bound on pins claimed by other peripherals in settings.
pub const MAX_RESERVED_PINS: usize = 16;

/// Conflicts reported by a single validation pass.
pub const MAX_REPORTED_CONFLICTS: usize = 8;
