use crate::config::{COLS, KEYS, MAX_LINES_PER_SIDE, ROWS};
use crate::matrix::KeyPos;

/// Character legend of a `R` x `C` keypad, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap<const R: usize, const C: usize> {
    keys: [[char; C]; R],
}

/// The legend compiled into this build.
pub const fn provide_keymap() -> Keymap<ROWS, COLS> {
    Keymap::new(KEYS)
}

impl<const R: usize, const C: usize> Keymap<R, C> {
    /// Positions are `u8`, so a grid wider or taller than
    /// `MAX_LINES_PER_SIDE` is rejected at build time:
    ///
    /// ```compile_fail
    /// use keypad_setup::Keymap;
    ///
    /// let keymap = Keymap::new([['.'; 1]; 257]);
    /// assert_eq!(keymap.legend(256, 0), '.');
    /// ```
    pub const fn new(keys: [[char; C]; R]) -> Self {
        const { assert!(R <= MAX_LINES_PER_SIDE && C <= MAX_LINES_PER_SIDE) };
        Self { keys }
    }

    /// Character at `(row, col)`. Panics if either index is out of range.
    pub const fn legend(&self, row: usize, col: usize) -> char {
        self.keys[row][col]
    }

    /// Character at `pos`. Panics if `pos` is outside the grid.
    pub const fn key(&self, pos: KeyPos) -> char {
        self.legend(pos.row as usize, pos.col as usize)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.keys.get(row)?.get(col).copied()
    }

    /// First position printed with `ch`, scanning row by row.
    pub fn position_of(&self, ch: char) -> Option<KeyPos> {
        self.iter().find(|(_, c)| *c == ch).map(|(pos, _)| pos)
    }

    pub fn rows(&self) -> &[[char; C]; R] {
        &self.keys
    }

    /// All keys with their position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (KeyPos, char)> + '_ {
        self.keys.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(col, ch)| (KeyPos::new(row as u8, col as u8), *ch))
        })
    }
}
