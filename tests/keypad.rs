//! Tests for the shipped keypad table
//!
//! These go through the public API the way a scanner would: read the pin
//! tables, then translate closures between a row pin and a column pin into
//! the character printed on the key.

use std::collections::HashSet;

use keypad_setup::{
    COL_PINS, COLS, ConfigError, KEYPAD, KeyPos, Keypad, KeypadSettings, Line, ROW_PINS, ROWS,
};
use proptest::prelude::*;

#[test]
fn dimensions_match_tables() {
    assert_eq!(ROWS, 4);
    assert_eq!(COLS, 3);
    assert_eq!(ROW_PINS.len(), ROWS);
    assert_eq!(COL_PINS.len(), COLS);
    assert_eq!(KEYPAD.keymap().rows().len(), ROWS);
    assert!(KEYPAD.keymap().rows().iter().all(|row| row.len() == COLS));
}

#[test]
fn row_and_col_pins_are_disjoint() {
    let rows: HashSet<_> = ROW_PINS.iter().collect();
    let cols: HashSet<_> = COL_PINS.iter().collect();
    assert_eq!(rows.len(), ROWS);
    assert_eq!(cols.len(), COLS);
    assert!(rows.is_disjoint(&cols));
}

#[test]
fn scan_order_reads_every_key() {
    // drive each row, read each column
    let mut typed = String::new();
    for i in 0..ROWS {
        for j in 0..COLS {
            let ch = KEYPAD
                .key_for_pins(KEYPAD.row_pin(i), KEYPAD.col_pin(j))
                .unwrap();
            assert_eq!(ch, KEYPAD.legend(i, j));
            typed.push(ch);
        }
    }
    assert_eq!(typed, "123456789*0#");
}

#[test]
fn reserved_pin_is_rejected() {
    let mut settings = KeypadSettings::from_config(&KEYPAD).unwrap();
    settings.reserved_pins.extend_from_slice(&[62, 67]).unwrap();

    let err = Keypad::try_from(&settings).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ReservedPin {
            pin: 62,
            line: Line::Row(0),
        }
    );
    assert_eq!(
        err.to_string(),
        "pin 62 of row 0 is reserved by another peripheral"
    );
}

proptest! {
    #[test]
    fn pin_lookup_agrees_with_legend(i in 0..ROWS, j in 0..COLS) {
        let pins = *KEYPAD.pins();
        prop_assert_eq!(pins.line_for_pin(KEYPAD.row_pin(i)), Some(Line::Row(i as u8)));
        prop_assert_eq!(pins.line_for_pin(KEYPAD.col_pin(j)), Some(Line::Col(j as u8)));

        let pos = KeyPos::new(i as u8, j as u8);
        prop_assert_eq!(KEYPAD.key_at(pos), Some(KEYPAD.legend(i, j)));
    }

    #[test]
    fn unknown_pins_read_nothing(pin in any::<u8>()) {
        prop_assume!(!ROW_PINS.contains(&pin) && !COL_PINS.contains(&pin));
        prop_assert_eq!(KEYPAD.pins().line_for_pin(pin), None);
        prop_assert_eq!(KEYPAD.key_for_pins(pin, COL_PINS[0]), None);
        prop_assert_eq!(KEYPAD.key_for_pins(ROW_PINS[0], pin), None);
    }
}
