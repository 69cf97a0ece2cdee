//! Integration tests for the repetitive-dive pipeline.
//!
//! Exercises: resolve_group → project_group → residual_nitrogen
//! → total_bottom_time → within_ndl, both stage by stage and through
//! `plan_repetitive_dive`.

use divetable_logic::config::PlannerConfig;
use divetable_logic::planner::{plan_repetitive_dive, PlanReport, PlanStage, RepetitivePlanRequest};
use divetable_logic::residual::{lookup_residual_nitrogen, max_planned_time, ResidualNitrogen};
use divetable_logic::{
    project_group, resolve_group, residual_nitrogen, supported_depths, total_bottom_time,
    validate_repetitive_dive, within_ndl, Depth, Minutes, PressureGroup, TableError,
};

// ── Helpers ────────────────────────────────────────────────────────────

/// Run the stages by hand, the way a caller without the planner would.
fn run_stages(
    depth1: Depth,
    time1: Minutes,
    interval: Minutes,
    depth2: Depth,
    time2: Minutes,
) -> Result<(PressureGroup, PressureGroup, Minutes, Minutes, bool), TableError> {
    let group1 = resolve_group(depth1, time1)?;
    let group2 = project_group(group1, interval);
    let rnt = residual_nitrogen(group2, depth2);
    let tbt = total_bottom_time(rnt, time2);
    Ok((group1, group2, rnt, tbt, within_ndl(depth2, tbt)))
}

fn plan(feet1: u32, time1: Minutes, interval: Minutes, feet2: u32, time2: Minutes) -> PlanReport {
    let request = RepetitivePlanRequest::from_feet(feet1, time1, interval, feet2, time2).unwrap();
    plan_repetitive_dive(&PlannerConfig::default(), &request).unwrap()
}

// ── Pipeline coherence ─────────────────────────────────────────────────

#[test]
fn manual_stages_match_planner() {
    for &depth1 in supported_depths() {
        for &depth2 in supported_depths() {
            let time1 = depth1.absolute_limit() / 2;
            let time2 = depth2.absolute_limit() / 3;
            for interval in [10, 30, 60, 120, 240] {
                let (g1, g2, rnt, tbt, ok) =
                    run_stages(depth1, time1.max(1), interval, depth2, time2.max(1)).unwrap();
                let report = plan(depth1.feet(), time1.max(1), interval, depth2.feet(), time2.max(1));
                assert_eq!(report.group_after_first, g1);
                assert_eq!(report.group_after_interval, g2);
                assert_eq!(report.residual_nitrogen, rnt);
                assert_eq!(report.planned_total_bottom_time, tbt);
                assert_eq!(report.planned_within_ndl, ok);
                assert_eq!(
                    validate_repetitive_dive(depth2, g2, time2.max(1)),
                    ok,
                    "{depth1} -> {depth2} after {interval} min"
                );
            }
        }
    }
}

#[test]
fn surface_interval_never_raises_group() {
    for &depth in supported_depths() {
        for t in 1..=depth.absolute_limit() {
            let group = resolve_group(depth, t).unwrap();
            for interval in [0, 10, 45, 90, 180] {
                assert!(project_group(group, interval) <= group);
            }
        }
    }
}

#[test]
fn projected_group_is_valid_or_flagged_at_every_depth() {
    // Whatever a first dive produces, the validator returns a verdict and the
    // tri-state lookup distinguishes absent pairs.
    for &depth1 in supported_depths() {
        let group = resolve_group(depth1, depth1.absolute_limit()).unwrap();
        let after = project_group(group, 10);
        for &depth2 in supported_depths() {
            match lookup_residual_nitrogen(after, depth2) {
                ResidualNitrogen::Found(rnt) => {
                    assert!(rnt <= depth2.absolute_limit());
                    assert_eq!(residual_nitrogen(after, depth2), rnt);
                }
                ResidualNitrogen::NotApplicable => {
                    assert_eq!(residual_nitrogen(after, depth2), 0);
                    assert_eq!(max_planned_time(depth2, after), None);
                }
            }
        }
    }
}

// ── Worked examples ────────────────────────────────────────────────────

#[test]
fn forty_feet_forty_minutes_then_an_hour() {
    // 40 ft / 40 min → I; I after 60 min → A; A at 40 ft → 9 min RNT.
    let report = plan(40, 40, 60, 40, 50);
    assert_eq!(report.group_after_first, PressureGroup::I);
    assert_eq!(report.group_after_interval, PressureGroup::A);
    assert_eq!(report.residual_nitrogen, 9);
    assert_eq!(report.planned_total_bottom_time, 59);
    assert_eq!(report.adjusted_ndl, Some(131));
    assert!(report.is_safe());
}

#[test]
fn deep_repetitive_dive_over_limit() {
    // 70 ft / 40 min → T; T after 20 min → I; I at 100 ft → 14; 14 + 10 > 20.
    let report = plan(70, 40, 20, 100, 10);
    assert_eq!(report.group_after_first, PressureGroup::T);
    assert_eq!(report.group_after_interval, PressureGroup::I);
    assert_eq!(report.residual_nitrogen, 14);
    assert!(!report.planned_within_ndl);
    assert_eq!(report.adjusted_ndl, Some(6));

    let shorter = plan(70, 40, 20, 100, 6);
    assert!(shorter.planned_within_ndl);
}

#[test]
fn stage_errors_are_distinct() {
    let config = PlannerConfig::default();

    let over = RepetitivePlanRequest::from_feet(140, 9, 30, 40, 10).unwrap();
    let err = plan_repetitive_dive(&config, &over).unwrap_err();
    assert_eq!(err.stage(), PlanStage::FirstDive);

    let bad_depth = RepetitivePlanRequest::from_feet(65, 10, 30, 40, 10).unwrap_err();
    assert_eq!(bad_depth.stage(), PlanStage::FirstDive);

    let short = RepetitivePlanRequest::from_feet(40, 10, 5, 40, 10).unwrap();
    let err = plan_repetitive_dive(&config, &short).unwrap_err();
    assert_eq!(err.stage(), PlanStage::SurfaceInterval);
}

#[test]
fn report_round_trips_through_json() {
    let mut request = RepetitivePlanRequest::from_feet(60, 20, 45, 50, 25).unwrap();
    request.actual_bottom_time = Some(22);
    let report = plan_repetitive_dive(&PlannerConfig::default(), &request).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"group_after_first\":\"G\""));
    assert!(json.contains("\"depth\":60"));
    let back: PlanReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let request_json = r#"{
        "first": {"depth": 60, "bottom_time": 20},
        "surface_interval": 45,
        "second": {"depth": 50, "bottom_time": 25}
    }"#;
    let parsed: RepetitivePlanRequest = serde_json::from_str(request_json).unwrap();
    assert_eq!(parsed.actual_bottom_time, None);
    assert_eq!(parsed.second.depth, Depth::Ft50);
}
