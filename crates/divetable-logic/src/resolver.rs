//! Pressure group resolution: depth and bottom time to a group letter.
//!
//! The lookup is a ceiling search over the depth's row: the first entry whose
//! maximum bottom time is at least the actual bottom time wins. A 20 minute
//! dive to 60 ft falls between the 19 min (F) and 21 min (G) entries and
//! resolves to G.

use crate::depth::{Depth, Minutes};
use crate::error::TableError;
use crate::group::PressureGroup;
use crate::tables::PRESSURE_GROUP_ROWS;

/// `(max bottom time, group)` entries for a depth, ascending.
pub fn pressure_group_row(depth: Depth) -> &'static [(Minutes, PressureGroup)] {
    PRESSURE_GROUP_ROWS[depth.index()]
}

/// Resolve the pressure group after `bottom_time` minutes at `depth`.
///
/// Returns [`TableError::ExceedsAbsoluteLimit`] when the bottom time is past
/// the last entry for the depth.
pub fn resolve_group(depth: Depth, bottom_time: Minutes) -> Result<PressureGroup, TableError> {
    pressure_group_row(depth)
        .iter()
        .find(|(max_time, _)| bottom_time <= *max_time)
        .map(|(_, group)| *group)
        .ok_or(TableError::ExceedsAbsoluteLimit {
            depth,
            bottom_time,
            limit: depth.absolute_limit(),
        })
}

/// [`resolve_group`] for a raw feet value.
pub fn resolve_group_feet(feet: u32, bottom_time: Minutes) -> Result<PressureGroup, TableError> {
    resolve_group(Depth::from_feet(feet)?, bottom_time)
}

/// Most loaded group reachable at `depth` without exceeding its limit.
pub fn max_group(depth: Depth) -> PressureGroup {
    pressure_group_row(depth)
        .last()
        .map_or(PressureGroup::A, |(_, group)| *group)
}
