//! Table lookup errors.
//!
//! Every variant is recoverable at the calling boundary: a caller can
//! re-prompt for the offending input without discarding the rest of a plan.

use thiserror::Error;

use crate::depth::{Depth, Minutes};

/// Failure of a single table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Depth (in feet) is not one of the catalogued depths.
    #[error("unsupported depth {0} ft")]
    UnsupportedDepth(u32),
    /// Bottom time is beyond the last table entry for the depth.
    #[error("{bottom_time} min at {depth} exceeds the no-decompression limit of {limit} min")]
    ExceedsAbsoluteLimit {
        depth: Depth,
        bottom_time: Minutes,
        limit: Minutes,
    },
    /// Character is not a pressure group letter.
    #[error("unknown pressure group '{0}'")]
    UnknownPressureGroup(char),
}

impl TableError {
    /// True for findings about the dive itself rather than malformed input.
    pub fn is_safety_finding(&self) -> bool {
        matches!(self, Self::ExceedsAbsoluteLimit { .. })
    }
}
