//! Text rendering of grids

use super::Grid;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing an [`Alphabet`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must have exactly 2 characters (alive, dead), got {0}")]
    Length(usize),

    #[error("alphabet characters cannot be line breaks")]
    LineBreak,
}

/// The two characters used to draw live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    pub alive: char,
    pub dead: char,
}

impl Alphabet {
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    #[inline]
    pub fn symbol(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(alive), Some(dead), None) => {
                if [alive, dead].iter().any(|&c| c == '\n' || c == '\r') {
                    return Err(AlphabetError::LineBreak);
                }
                Ok(Self::new(alive, dead))
            }
            _ => Err(AlphabetError::Length(s.chars().count())),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.alive, self.dead)
    }
}

impl Grid {
    /// Render the board as `rows` newline-separated lines of `cols` symbols.
    ///
    /// There is no trailing newline. Fails with [`GridError::NoMemory`] if
    /// the output buffer cannot be allocated.
    pub fn render(&self, alphabet: &Alphabet) -> Result<String, GridError> {
        let cells = self.cells()?;
        let rows = usize::from(self.rows());
        let cols = usize::from(self.cols());

        let symbol_len = alphabet.alive.len_utf8().max(alphabet.dead.len_utf8());
        let capacity = cells
            .len()
            .checked_mul(symbol_len)
            .and_then(|n| n.checked_add(rows.saturating_sub(1)))
            .ok_or(GridError::NoMemory)?;

        let mut out = String::new();
        out.try_reserve_exact(capacity)?;

        for y in 0..rows {
            if y != 0 {
                out.push('\n');
            }
            for &alive in &cells[y * cols..(y + 1) * cols] {
                out.push(alphabet.symbol(alive));
            }
        }
        Ok(out)
    }

    /// Render with the default `X`/`O` alphabet
    pub fn render_default(&self) -> Result<String, GridError> {
        self.render(&Alphabet::default())
    }
}
