//! Pressure groups A–Z.
//!
//! A letter encodes residual nitrogen loading after a dive. `A` is the least
//! loaded, `Z` the most; the derived `Ord` follows that order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum PressureGroup {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl PressureGroup {
    /// All groups, least loaded first.
    pub const ALL: [PressureGroup; 26] = {
        use PressureGroup::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    };

    /// Zero-based position in the alphabet (A = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Parse a group letter, accepting lower case.
    pub fn from_letter(letter: char) -> Result<Self, TableError> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self::ALL[(upper as u8 - b'A') as usize])
        } else {
            Err(TableError::UnknownPressureGroup(letter))
        }
    }

    /// Next more-loaded group, `None` for `Z`.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for PressureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for PressureGroup {
    type Error = TableError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter)
    }
}

impl From<PressureGroup> for char {
    fn from(group: PressureGroup) -> Self {
        group.letter()
    }
}

impl FromStr for PressureGroup {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c),
            (Some(c), Some(_)) => Err(TableError::UnknownPressureGroup(c)),
            (None, _) => Err(TableError::UnknownPressureGroup(' ')),
        }
    }
}
