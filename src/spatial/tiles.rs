//! Two-valued tile colors and their catalog character encoding
//!
//! Catalog text follows the floor supplier's convention: `N` (negro) marks a
//! black tile and `B` (blanco) a white one.

use std::fmt;

use crate::io::error::{Result, invalid_grid};

/// Color of a single floor tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    /// Black tile, encoded as `N`
    Black,
    /// White tile, encoded as `B`
    White,
}

impl TileColor {
    /// The opposite color, as produced by a flip
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Catalog character for this color
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'N',
            Self::White => 'B',
        }
    }

    /// Decode a catalog character (case-insensitive)
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'n' => Some(Self::Black),
            'B' | 'b' => Some(Self::White),
            _ => None,
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Decode a run of catalog characters into colors, skipping whitespace
///
/// # Errors
///
/// Returns an error naming the first character that is neither `N` nor `B`
/// and its position among the non-whitespace characters
pub fn parse_tiles(text: &str) -> Result<Vec<TileColor>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(index, c)| {
            TileColor::from_char(c).ok_or_else(|| {
                invalid_grid(&format!(
                    "unknown tile '{c}' at position {index} (expected 'N' or 'B')"
                ))
            })
        })
        .collect()
}
