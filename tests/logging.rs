//! Tests for what validation reports through the `log` facade
//!
//! A small logger records every message on the thread that emitted it, so
//! tests running in parallel each see only their own records.

#![cfg(all(feature = "log", not(feature = "defmt")))]

use std::cell::RefCell;
use std::sync::Once;

use keypad_setup::{KEYPAD, Keypad, KeypadSettings};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Recorder;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder;
static INSTALL: Once = Once::new();

/// Run `f` and return the messages it logged at `level`.
fn capture(level: Level, f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&RECORDER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());

    f();

    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

#[test]
fn each_reserved_pin_is_warned_about() {
    let warnings = capture(Level::Warn, || {
        assert!(KEYPAD.validate(&[62, 67]).is_err());
    });

    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("pin 62 of row 0"));
    assert!(warnings[1].contains("pin 67 of col 1"));
}

#[test]
fn clean_table_warns_nothing() {
    let warnings = capture(Level::Warn, || {
        assert!(KEYPAD.validate(&[0, 1, 13]).is_ok());
    });
    assert!(warnings.is_empty());
}

#[test]
fn loading_settings_is_logged() {
    let settings = KeypadSettings::from_config(&KEYPAD).unwrap();
    let debug = capture(Level::Debug, || {
        assert_eq!(Keypad::try_from(&settings), Ok(KEYPAD));
    });
    assert_eq!(debug, vec!["[settings] loaded 4x3 keypad".to_string()]);
}
