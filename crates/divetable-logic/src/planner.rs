//! Two-dive repetitive planning pipeline.
//!
//! Runs the table components in their fixed order:
//!
//! ```text
//! resolve(depth₁, time₁) → group₁
//!   → project(group₁, interval) → group₂
//!   → rnt(group₂, depth₂) → tbt = rnt + time₂ → within_ndl(depth₂, tbt)
//! ```
//!
//! Each stage's output is the next stage's only input. A failure is tagged
//! with the stage that produced it so a caller can ask again for just that
//! input. An over-limit repetitive dive is not an error: it is reported as a
//! `false` verdict in the [`PlanReport`].
//!
//! ```
//! use divetable_logic::config::PlannerConfig;
//! use divetable_logic::depth::Depth;
//! use divetable_logic::planner::{plan_repetitive_dive, DiveProfile, RepetitivePlanRequest};
//!
//! let request = RepetitivePlanRequest {
//!     first: DiveProfile { depth: Depth::Ft60, bottom_time: 20 },
//!     surface_interval: 60,
//!     second: DiveProfile { depth: Depth::Ft50, bottom_time: 30 },
//!     actual_bottom_time: None,
//! };
//! let report = plan_repetitive_dive(&PlannerConfig::default(), &request).unwrap();
//! assert!(report.is_safe());
//! ```

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PlannerConfig;
use crate::depth::{Depth, Minutes};
use crate::error::TableError;
use crate::group::PressureGroup;
use crate::residual::{lookup_residual_nitrogen, max_planned_time, total_bottom_time, within_ndl};
use crate::resolver::resolve_group;
use crate::surface_interval::project_group;

/// A single dive: depth and bottom time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiveProfile {
    pub depth: Depth,
    pub bottom_time: Minutes,
}

/// Inputs for a first dive followed by one repetitive dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitivePlanRequest {
    pub first: DiveProfile,
    pub surface_interval: Minutes,
    /// Second dive with its *planned* bottom time.
    pub second: DiveProfile,
    /// Bottom time actually logged on the second dive, if known.
    #[serde(default)]
    pub actual_bottom_time: Option<Minutes>,
}

impl RepetitivePlanRequest {
    /// Build a request from raw feet values, tagging an off-table depth with
    /// the dive it belongs to.
    pub fn from_feet(
        first_depth: u32,
        first_time: Minutes,
        surface_interval: Minutes,
        second_depth: u32,
        second_time: Minutes,
    ) -> Result<Self, PlanError> {
        let first = Depth::from_feet(first_depth).map_err(|source| PlanError::Table {
            stage: PlanStage::FirstDive,
            source,
        })?;
        let second = Depth::from_feet(second_depth).map_err(|source| PlanError::Table {
            stage: PlanStage::SecondDive,
            source,
        })?;
        Ok(Self {
            first: DiveProfile {
                depth: first,
                bottom_time: first_time,
            },
            surface_interval,
            second: DiveProfile {
                depth: second,
                bottom_time: second_time,
            },
            actual_bottom_time: None,
        })
    }
}

/// Pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStage {
    FirstDive,
    SurfaceInterval,
    SecondDive,
}

impl fmt::Display for PlanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstDive => write!(f, "first dive"),
            Self::SurfaceInterval => write!(f, "surface interval"),
            Self::SecondDive => write!(f, "second dive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("{stage}: {source}")]
    Table {
        stage: PlanStage,
        #[source]
        source: TableError,
    },
    #[error("{stage}: bottom time {minutes} min is below the {min} min minimum")]
    BottomTimeTooShort {
        stage: PlanStage,
        minutes: Minutes,
        min: Minutes,
    },
    #[error("surface interval {minutes} min is below the {min} min minimum")]
    SurfaceIntervalTooShort { minutes: Minutes, min: Minutes },
}

impl PlanError {
    pub fn stage(&self) -> PlanStage {
        match self {
            Self::Table { stage, .. } | Self::BottomTimeTooShort { stage, .. } => *stage,
            Self::SurfaceIntervalTooShort { .. } => PlanStage::SurfaceInterval,
        }
    }
}

/// Every derived value of a repetitive-dive plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub first_dive: DiveProfile,
    pub group_after_first: PressureGroup,
    pub surface_interval: Minutes,
    pub group_after_interval: PressureGroup,
    pub second_dive: DiveProfile,
    /// RNT credited to the second dive (`0` when not applicable).
    pub residual_nitrogen: Minutes,
    /// `false` when the group has no RNT entry at the second dive's depth.
    pub residual_nitrogen_applicable: bool,
    /// Most bottom time that could have been planned for the second dive.
    pub adjusted_ndl: Option<Minutes>,
    pub planned_total_bottom_time: Minutes,
    pub planned_within_ndl: bool,
    pub actual_total_bottom_time: Option<Minutes>,
    pub actual_within_ndl: Option<bool>,
}

impl PlanReport {
    /// Planned dive fits, and so does the actual one if it was given.
    pub fn is_safe(&self) -> bool {
        self.planned_within_ndl && self.actual_within_ndl.unwrap_or(true)
    }
}

fn check_bottom_time(
    config: &PlannerConfig,
    stage: PlanStage,
    minutes: Minutes,
) -> Result<(), PlanError> {
    if minutes < config.min_bottom_time {
        return Err(PlanError::BottomTimeTooShort {
            stage,
            minutes,
            min: config.min_bottom_time,
        });
    }
    Ok(())
}

/// Run the full repetitive-dive pipeline.
///
/// The actual bottom time, when present, is only evaluated if the planned
/// dive is within limits.
pub fn plan_repetitive_dive(
    config: &PlannerConfig,
    request: &RepetitivePlanRequest,
) -> Result<PlanReport, PlanError> {
    let first = request.first;
    check_bottom_time(config, PlanStage::FirstDive, first.bottom_time)?;
    let group_after_first =
        resolve_group(first.depth, first.bottom_time).map_err(|source| PlanError::Table {
            stage: PlanStage::FirstDive,
            source,
        })?;
    debug!(
        "first dive {} for {} min: group {group_after_first}",
        first.depth, first.bottom_time
    );

    if request.surface_interval < config.min_surface_interval {
        return Err(PlanError::SurfaceIntervalTooShort {
            minutes: request.surface_interval,
            min: config.min_surface_interval,
        });
    }
    let group_after_interval = project_group(group_after_first, request.surface_interval);
    debug!(
        "surface interval {} min: group {group_after_first} -> {group_after_interval}",
        request.surface_interval
    );

    let second = request.second;
    check_bottom_time(config, PlanStage::SecondDive, second.bottom_time)?;

    let rnt = lookup_residual_nitrogen(group_after_interval, second.depth);
    let planned_total_bottom_time = total_bottom_time(rnt.minutes(), second.bottom_time);
    let planned_within_ndl = within_ndl(second.depth, planned_total_bottom_time);
    debug!(
        "second dive {}: rnt {:?}, planned tbt {planned_total_bottom_time} min",
        second.depth, rnt
    );
    if !planned_within_ndl {
        warn!(
            "planned second dive exceeds the {} min limit at {} (tbt {planned_total_bottom_time} min)",
            second.depth.absolute_limit(),
            second.depth
        );
    }

    let (actual_total_bottom_time, actual_within_ndl) = match request.actual_bottom_time {
        Some(actual) if planned_within_ndl => {
            check_bottom_time(config, PlanStage::SecondDive, actual)?;
            let tbt = total_bottom_time(rnt.minutes(), actual);
            let ok = within_ndl(second.depth, tbt);
            if !ok {
                warn!(
                    "actual second dive exceeds the {} min limit at {} (tbt {tbt} min)",
                    second.depth.absolute_limit(),
                    second.depth
                );
            }
            (Some(tbt), Some(ok))
        }
        _ => (None, None),
    };

    Ok(PlanReport {
        first_dive: first,
        group_after_first,
        surface_interval: request.surface_interval,
        group_after_interval,
        second_dive: second,
        residual_nitrogen: rnt.minutes(),
        residual_nitrogen_applicable: rnt.is_applicable(),
        adjusted_ndl: max_planned_time(second.depth, group_after_interval),
        planned_total_bottom_time,
        planned_within_ndl,
        actual_total_bottom_time,
        actual_within_ndl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        first: (Depth, Minutes),
        interval: Minutes,
        second: (Depth, Minutes),
    ) -> RepetitivePlanRequest {
        RepetitivePlanRequest {
            first: DiveProfile {
                depth: first.0,
                bottom_time: first.1,
            },
            surface_interval: interval,
            second: DiveProfile {
                depth: second.0,
                bottom_time: second.1,
            },
            actual_bottom_time: None,
        }
    }

    #[test]
    fn stages_chain_in_order() {
        // 60 ft / 20 min → G; G after 10 min → A (1 min and up); A at 50 ft → 7.
        let report = plan_repetitive_dive(
            &PlannerConfig::default(),
            &request((Depth::Ft60, 20), 10, (Depth::Ft50, 30)),
        )
        .unwrap();
        assert_eq!(report.group_after_first, PressureGroup::G);
        assert_eq!(report.group_after_interval, PressureGroup::A);
        assert_eq!(report.residual_nitrogen, 7);
        assert!(report.residual_nitrogen_applicable);
        assert_eq!(report.planned_total_bottom_time, 37);
        assert_eq!(report.adjusted_ndl, Some(73));
        assert!(report.planned_within_ndl);
        assert!(report.is_safe());
    }

    #[test]
    fn first_dive_over_limit_is_tagged() {
        let err = plan_repetitive_dive(
            &PlannerConfig::default(),
            &request((Depth::Ft100, 25), 60, (Depth::Ft40, 20)),
        )
        .unwrap_err();
        assert_eq!(err.stage(), PlanStage::FirstDive);
        assert!(matches!(
            err,
            PlanError::Table {
                source: TableError::ExceedsAbsoluteLimit { limit: 20, .. },
                ..
            }
        ));
    }

    #[test]
    fn short_surface_interval_rejected() {
        let err = plan_repetitive_dive(
            &PlannerConfig::default(),
            &request((Depth::Ft40, 30), 9, (Depth::Ft40, 20)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::SurfaceIntervalTooShort { minutes: 9, min: 10 }
        );
        assert_eq!(err.stage(), PlanStage::SurfaceInterval);
    }

    #[test]
    fn zero_bottom_time_rejected_per_stage() {
        let config = PlannerConfig::default();
        let first = plan_repetitive_dive(&config, &request((Depth::Ft40, 0), 30, (Depth::Ft40, 20)));
        assert_eq!(first.unwrap_err().stage(), PlanStage::FirstDive);
        let second = plan_repetitive_dive(&config, &request((Depth::Ft40, 20), 30, (Depth::Ft40, 0)));
        assert_eq!(second.unwrap_err().stage(), PlanStage::SecondDive);
    }

    #[test]
    fn over_limit_second_dive_is_a_verdict_not_an_error() {
        // 35 ft / 205 min → Z; Z after 10 min → O; O at 60 ft → 37; 37 + 30 > 55.
        let mut req = request((Depth::Ft35, 205), 10, (Depth::Ft60, 30));
        req.actual_bottom_time = Some(5);
        let report = plan_repetitive_dive(&PlannerConfig::default(), &req).unwrap();
        assert_eq!(report.group_after_interval, PressureGroup::O);
        assert_eq!(report.residual_nitrogen, 37);
        assert!(!report.planned_within_ndl);
        assert_eq!(report.actual_within_ndl, None);
        assert!(!report.is_safe());
    }

    #[test]
    fn actual_time_checked_after_planned_passes() {
        let mut req = request((Depth::Ft60, 20), 10, (Depth::Ft50, 30));
        req.actual_bottom_time = Some(80);
        let report = plan_repetitive_dive(&PlannerConfig::default(), &req).unwrap();
        assert!(report.planned_within_ndl);
        assert_eq!(report.actual_total_bottom_time, Some(87));
        assert_eq!(report.actual_within_ndl, Some(false));
        assert!(!report.is_safe());
    }

    #[test]
    fn bad_actual_time_ignored_when_planned_fails() {
        let mut req = request((Depth::Ft35, 205), 10, (Depth::Ft60, 30));
        req.actual_bottom_time = Some(0);
        let report = plan_repetitive_dive(&PlannerConfig::default(), &req).unwrap();
        assert!(!report.planned_within_ndl);
        assert_eq!(report.actual_total_bottom_time, None);
        assert_eq!(report.actual_within_ndl, None);
    }

    #[test]
    fn bad_actual_time_rejected_when_planned_passes() {
        let mut req = request((Depth::Ft60, 20), 10, (Depth::Ft50, 30));
        req.actual_bottom_time = Some(0);
        assert_eq!(
            plan_repetitive_dive(&PlannerConfig::default(), &req),
            Err(PlanError::BottomTimeTooShort {
                stage: PlanStage::SecondDive,
                minutes: 0,
                min: 1,
            })
        );
    }

    #[test]
    fn group_absent_at_second_depth() {
        // 35 ft / 150 min → W; W after 10 min → M; M has no entry at 140 ft.
        let report = plan_repetitive_dive(
            &PlannerConfig::default(),
            &request((Depth::Ft35, 150), 10, (Depth::Ft140, 5)),
        )
        .unwrap();
        assert_eq!(report.group_after_interval, PressureGroup::M);
        assert!(!report.residual_nitrogen_applicable);
        assert_eq!(report.residual_nitrogen, 0);
        assert_eq!(report.adjusted_ndl, None);
        assert!(report.planned_within_ndl);
    }

    #[test]
    fn from_feet_tags_the_bad_depth() {
        let err = RepetitivePlanRequest::from_feet(60, 20, 30, 45, 10).unwrap_err();
        assert_eq!(err.stage(), PlanStage::SecondDive);
        assert_eq!(
            err,
            PlanError::Table {
                stage: PlanStage::SecondDive,
                source: TableError::UnsupportedDepth(45),
            }
        );
        let ok = RepetitivePlanRequest::from_feet(60, 20, 30, 50, 10).unwrap();
        assert_eq!(ok.second.depth, Depth::Ft50);
    }

    #[test]
    fn custom_minimum_interval() {
        let config = PlannerConfig {
            min_surface_interval: 60,
            ..PlannerConfig::default()
        };
        let err = plan_repetitive_dive(&config, &request((Depth::Ft40, 30), 30, (Depth::Ft40, 20)));
        assert!(matches!(
            err,
            Err(PlanError::SurfaceIntervalTooShort { min: 60, .. })
        ));
    }

    #[test]
    fn error_messages_name_the_stage() {
        let err = PlanError::Table {
            stage: PlanStage::FirstDive,
            source: TableError::UnsupportedDepth(45),
        };
        assert_eq!(err.to_string(), "first dive: unsupported depth 45 ft");
    }
}
