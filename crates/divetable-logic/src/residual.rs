//! Residual nitrogen time and no-decompression limit checks for repetitive
//! dives.
//!
//! A diver entering a repetitive dive carries residual nitrogen, credited as
//! minutes already spent at the planned depth (RNT). Adding the planned bottom
//! time gives the total bottom time (TBT), which must not exceed the depth's
//! absolute limit.
//!
//! Not every group has an RNT at every depth: once a group's implied loading
//! would itself exceed the depth's limit, the row simply stops.
//! [`lookup_residual_nitrogen`] reports that as [`ResidualNitrogen::NotApplicable`];
//! [`residual_nitrogen`] collapses it to `0` for callers that need a plain
//! number. That `0` is an invalid-combination guard, not a clean diver.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::depth::{Depth, Minutes};
use crate::group::PressureGroup;
use crate::tables::RESIDUAL_NITROGEN_ROWS;

/// RNT lookup outcome for a (depth, group) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidualNitrogen {
    Found(Minutes),
    /// The group has no entry at this depth.
    NotApplicable,
}

impl ResidualNitrogen {
    /// Minutes to credit, with `NotApplicable` mapped to `0`.
    pub fn minutes(self) -> Minutes {
        match self {
            Self::Found(minutes) => minutes,
            Self::NotApplicable => 0,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// RNT entries for a depth, indexed by [`PressureGroup::index`].
pub fn residual_nitrogen_row(depth: Depth) -> &'static [Minutes] {
    RESIDUAL_NITROGEN_ROWS[depth.index()]
}

pub fn lookup_residual_nitrogen(group: PressureGroup, depth: Depth) -> ResidualNitrogen {
    residual_nitrogen_row(depth)
        .get(group.index())
        .map_or(ResidualNitrogen::NotApplicable, |&minutes| {
            ResidualNitrogen::Found(minutes)
        })
}

/// Residual nitrogen time for `group` at `depth`; `0` if the pair is absent.
pub fn residual_nitrogen(group: PressureGroup, depth: Depth) -> Minutes {
    lookup_residual_nitrogen(group, depth).minutes()
}

/// RNT plus planned bottom time.
pub fn total_bottom_time(rnt: Minutes, planned_time: Minutes) -> Minutes {
    rnt.saturating_add(planned_time)
}

/// Whether `total_bottom_time` is at or under the limit for `depth`.
pub fn within_ndl(depth: Depth, total_bottom_time: Minutes) -> bool {
    total_bottom_time <= depth.absolute_limit()
}

/// [`within_ndl`] for a raw feet value. Off-table depths are never within limits.
pub fn within_ndl_feet(feet: u32, total_bottom_time: Minutes) -> bool {
    Depth::from_feet(feet).map_or(false, |depth| within_ndl(depth, total_bottom_time))
}

/// Safety gate for a repetitive dive: does RNT plus `planned_time` fit the limit?
pub fn validate_repetitive_dive(depth: Depth, group: PressureGroup, planned_time: Minutes) -> bool {
    let rnt = residual_nitrogen(group, depth);
    let tbt = total_bottom_time(rnt, planned_time);
    let ok = within_ndl(depth, tbt);
    debug!(
        "repetitive dive {depth} group {group}: rnt={rnt} planned={planned_time} tbt={tbt} limit={} ok={ok}",
        depth.absolute_limit()
    );
    ok
}

/// [`validate_repetitive_dive`] for a raw feet value.
pub fn validate_repetitive_dive_feet(feet: u32, group: PressureGroup, planned_time: Minutes) -> bool {
    Depth::from_feet(feet).map_or(false, |depth| {
        validate_repetitive_dive(depth, group, planned_time)
    })
}

/// Adjusted no-decompression limit: the most bottom time a diver in `group`
/// can plan at `depth`.
///
/// `None` when the group has no entry at the depth or the RNT already uses
/// the whole limit.
pub fn max_planned_time(depth: Depth, group: PressureGroup) -> Option<Minutes> {
    match lookup_residual_nitrogen(group, depth) {
        ResidualNitrogen::Found(rnt) => depth
            .absolute_limit()
            .checked_sub(rnt)
            .filter(|&remaining| remaining > 0),
        ResidualNitrogen::NotApplicable => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{max_group, pressure_group_row};

    #[test]
    fn rows_cover_the_same_groups_as_pressure_rows() {
        for depth in Depth::ALL {
            assert_eq!(
                residual_nitrogen_row(depth).len(),
                pressure_group_row(depth).len(),
                "{depth}"
            );
            assert!(lookup_residual_nitrogen(max_group(depth), depth).is_applicable());
        }
    }

    #[test]
    fn rnt_never_exceeds_limit() {
        for depth in Depth::ALL {
            for &rnt in residual_nitrogen_row(depth) {
                assert!(rnt <= depth.absolute_limit(), "{depth}: {rnt}");
            }
        }
    }

    #[test]
    fn group_c_at_sixty_feet() {
        assert_eq!(residual_nitrogen(PressureGroup::C, Depth::Ft60), 14);
        assert!(validate_repetitive_dive(Depth::Ft60, PressureGroup::C, 30));
        assert_eq!(total_bottom_time(14, 30), 44);
    }

    #[test]
    fn group_g_at_130_feet_leaves_one_minute() {
        assert_eq!(residual_nitrogen(PressureGroup::G, Depth::Ft130), 9);
        assert!(!validate_repetitive_dive(Depth::Ft130, PressureGroup::G, 5));
        assert!(validate_repetitive_dive(Depth::Ft130, PressureGroup::G, 1));
        assert_eq!(max_planned_time(Depth::Ft130, PressureGroup::G), Some(1));
    }

    #[test]
    fn absent_pair_reads_as_zero_but_is_flagged() {
        assert_eq!(
            lookup_residual_nitrogen(PressureGroup::Z, Depth::Ft60),
            ResidualNitrogen::NotApplicable
        );
        assert_eq!(residual_nitrogen(PressureGroup::Z, Depth::Ft60), 0);
        assert_eq!(residual_nitrogen(PressureGroup::G, Depth::Ft140), 0);
        assert_eq!(max_planned_time(Depth::Ft140, PressureGroup::G), None);
    }

    #[test]
    fn ndl_boundary_is_inclusive() {
        for depth in Depth::ALL {
            let limit = depth.absolute_limit();
            assert!(within_ndl(depth, limit));
            assert!(within_ndl(depth, 0));
            assert!(!within_ndl(depth, limit + 1));
        }
    }

    #[test]
    fn off_table_depth_never_within_limits() {
        assert!(!within_ndl_feet(45, 0));
        assert!(within_ndl_feet(50, 80));
        assert!(!within_ndl_feet(50, 81));
        assert!(!validate_repetitive_dive_feet(65, PressureGroup::A, 1));
        assert!(validate_repetitive_dive_feet(60, PressureGroup::C, 30));
    }

    #[test]
    fn highest_group_uses_whole_limit() {
        assert_eq!(max_planned_time(Depth::Ft35, PressureGroup::Z), None);
        assert!(validate_repetitive_dive(Depth::Ft35, PressureGroup::Z, 0));
        assert!(!validate_repetitive_dive(Depth::Ft35, PressureGroup::Z, 1));
    }

    #[test]
    fn total_bottom_time_does_not_wrap() {
        assert_eq!(total_bottom_time(10, Minutes::MAX), Minutes::MAX);
    }
}
