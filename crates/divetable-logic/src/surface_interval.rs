//! Surface interval projection: how a pressure group decays while the diver
//! rests at the surface.
//!
//! Each starting group has a row of transitions. A transition names the
//! ending group and the closed minute range `[min, max]` that lands on it;
//! the range ending at `A` is unbounded. Rows are ordered from the highest
//! ending group (shortest rest) down to `A`.
//!
//! # Lookup
//!
//! 1. Exact match: the transition whose range contains the interval.
//! 2. Fallback, only when no range contains it: walk the row from the
//!    highest ending group down, skip transitions whose `min` is above the
//!    interval, and take the first one left. If every transition is skipped
//!    the diver is fully desaturated (`A`).
//!
//! With whole minutes the shipped rows tile `[0, ∞)` with no gaps, so the
//! fallback is never reached through [`project_group`]. It is kept so a row
//! with a gap still yields an answer, and [`coverage_gaps`] reports any such
//! gap.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::depth::Minutes;
use crate::group::PressureGroup;
use crate::tables::SURFACE_INTERVAL_ROWS;

/// One entry in a starting group's surface interval row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceTransition {
    /// Group reached after resting within the range.
    pub to: PressureGroup,
    /// First minute (inclusive) of the range.
    pub min: Minutes,
    /// Last minute (inclusive); `None` means unbounded.
    pub max: Option<Minutes>,
}

impl SurfaceTransition {
    pub fn contains(&self, minutes: Minutes) -> bool {
        minutes >= self.min && self.max.map_or(true, |max| minutes <= max)
    }
}

/// Result of a projection, with the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub group: PressureGroup,
    /// `true` when a range contained the interval, `false` for the fallback.
    pub matched: bool,
}

/// A stretch of minutes not covered by any transition in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub from: Minutes,
    /// Last uncovered minute; `None` when the row never reaches infinity.
    pub to: Option<Minutes>,
}

/// The surface interval row for a starting group.
pub fn transitions_from(start: PressureGroup) -> &'static [SurfaceTransition] {
    SURFACE_INTERVAL_ROWS[start.index()]
}

/// Group after resting `surface_minutes` at the surface, starting at `start`.
pub fn project_group(start: PressureGroup, surface_minutes: Minutes) -> PressureGroup {
    project_group_detailed(start, surface_minutes).group
}

/// [`project_group`], also reporting whether the fallback path was taken.
pub fn project_group_detailed(start: PressureGroup, surface_minutes: Minutes) -> Projection {
    let projection = project_with(transitions_from(start), surface_minutes);
    if !projection.matched {
        warn!(
            "no surface interval range from group {start} contains {surface_minutes} min; fell back to {}",
            projection.group
        );
    }
    projection
}

/// Run the projection algorithm over an arbitrary transition row.
///
/// When ranges overlap, the first listed transition containing the interval
/// wins. Shipped rows list the highest ending group first.
pub fn project_with(transitions: &[SurfaceTransition], surface_minutes: Minutes) -> Projection {
    if let Some(hit) = transitions.iter().find(|t| t.contains(surface_minutes)) {
        return Projection {
            group: hit.to,
            matched: true,
        };
    }

    let mut by_group: Vec<&SurfaceTransition> = transitions.iter().collect();
    by_group.sort_by(|a, b| b.to.cmp(&a.to));

    let group = by_group
        .into_iter()
        .find(|t| t.min <= surface_minutes)
        .map_or(PressureGroup::A, |t| t.to);

    Projection {
        group,
        matched: false,
    }
}

/// Shortest rest after which `start` projects to `target` or lower.
///
/// `None` if no transition in the row ever reaches `target`.
pub fn min_interval_to_reach(start: PressureGroup, target: PressureGroup) -> Option<Minutes> {
    transitions_from(start)
        .iter()
        .filter(|t| t.to <= target)
        .map(|t| t.min)
        .min()
}

/// Uncovered stretches of `[0, ∞)` in the row for `start`.
pub fn coverage_gaps(start: PressureGroup) -> Vec<CoverageGap> {
    gaps_in(transitions_from(start))
}

/// Pairs of ending groups whose ranges overlap in the row for `start`.
pub fn coverage_overlaps(start: PressureGroup) -> Vec<(PressureGroup, PressureGroup)> {
    overlaps_in(transitions_from(start))
}

pub fn gaps_in(transitions: &[SurfaceTransition]) -> Vec<CoverageGap> {
    let mut by_min: Vec<&SurfaceTransition> = transitions.iter().collect();
    by_min.sort_by_key(|t| t.min);

    let mut gaps = Vec::new();
    // Next minute that still needs covering; `None` once a range is unbounded.
    let mut cursor: Option<Minutes> = Some(0);
    for t in by_min {
        let Some(next) = cursor else { break };
        if t.min > next {
            gaps.push(CoverageGap {
                from: next,
                to: Some(t.min - 1),
            });
        }
        cursor = match t.max {
            Some(max) if max >= next => max.checked_add(1),
            Some(_) => Some(next),
            None => None,
        };
    }
    if let Some(next) = cursor {
        gaps.push(CoverageGap {
            from: next,
            to: None,
        });
    }
    gaps
}

pub fn overlaps_in(transitions: &[SurfaceTransition]) -> Vec<(PressureGroup, PressureGroup)> {
    let mut overlaps = Vec::new();
    for (i, a) in transitions.iter().enumerate() {
        for b in &transitions[i + 1..] {
            let a_end = a.max.unwrap_or(Minutes::MAX);
            let b_end = b.max.unwrap_or(Minutes::MAX);
            if a.min <= b_end && b.min <= a_end {
                overlaps.push((a.to, b.to));
            }
        }
    }
    overlaps
}
