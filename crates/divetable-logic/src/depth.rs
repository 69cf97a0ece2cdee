//! Depth catalog: the supported table depths and their absolute
//! no-decompression limits.
//!
//! Depths are not continuous: only the twelve rows printed on the planner
//! exist. Raw feet values from callers go through [`Depth::from_feet`] and
//! are rejected with [`TableError::UnsupportedDepth`] if they don't match a
//! row exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Whole minutes. Bottom times, surface intervals, RNT and NDL values all use it.
pub type Minutes = u32;

/// A supported table depth, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Depth {
    Ft35,
    Ft40,
    Ft50,
    Ft60,
    Ft70,
    Ft80,
    Ft90,
    Ft100,
    Ft110,
    Ft120,
    Ft130,
    Ft140,
}

impl Depth {
    /// All supported depths, shallowest first.
    pub const ALL: [Depth; 12] = [
        Depth::Ft35,
        Depth::Ft40,
        Depth::Ft50,
        Depth::Ft60,
        Depth::Ft70,
        Depth::Ft80,
        Depth::Ft90,
        Depth::Ft100,
        Depth::Ft110,
        Depth::Ft120,
        Depth::Ft130,
        Depth::Ft140,
    ];

    /// Depth in feet.
    pub const fn feet(self) -> u32 {
        match self {
            Self::Ft35 => 35,
            Self::Ft40 => 40,
            Self::Ft50 => 50,
            Self::Ft60 => 60,
            Self::Ft70 => 70,
            Self::Ft80 => 80,
            Self::Ft90 => 90,
            Self::Ft100 => 100,
            Self::Ft110 => 110,
            Self::Ft120 => 120,
            Self::Ft130 => 130,
            Self::Ft140 => 140,
        }
    }

    /// Look up the catalog row for an exact feet value.
    pub fn from_feet(feet: u32) -> Result<Self, TableError> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.feet() == feet)
            .ok_or(TableError::UnsupportedDepth(feet))
    }

    /// Whether `feet` names a catalog row.
    pub fn is_supported_feet(feet: u32) -> bool {
        Self::from_feet(feet).is_ok()
    }

    /// Position of this depth in [`Depth::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Absolute no-decompression limit for this depth.
    pub const fn absolute_limit(self) -> Minutes {
        match self {
            Self::Ft35 => 205,
            Self::Ft40 => 140,
            Self::Ft50 => 80,
            Self::Ft60 => 55,
            Self::Ft70 => 40,
            Self::Ft80 => 30,
            Self::Ft90 => 25,
            Self::Ft100 => 20,
            Self::Ft110 => 16,
            Self::Ft120 => 13,
            Self::Ft130 => 10,
            Self::Ft140 => 8,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.feet())
    }
}

impl TryFrom<u32> for Depth {
    type Error = TableError;

    fn try_from(feet: u32) -> Result<Self, Self::Error> {
        Self::from_feet(feet)
    }
}

impl From<Depth> for u32 {
    fn from(depth: Depth) -> Self {
        depth.feet()
    }
}

/// Supported depths, shallowest first.
pub fn supported_depths() -> &'static [Depth] {
    &Depth::ALL
}

/// Absolute no-decompression limit for a catalogued depth.
pub fn absolute_limit(depth: Depth) -> Minutes {
    depth.absolute_limit()
}

/// Absolute no-decompression limit for a raw feet value.
pub fn absolute_limit_feet(feet: u32) -> Result<Minutes, TableError> {
    Depth::from_feet(feet).map(Depth::absolute_limit)
}
