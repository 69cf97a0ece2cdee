//! Dive Table Headless Harness
//!
//! Validates the planner tables and lookup rules, and runs scripted
//! repetitive-dive plans. Runs entirely in-process with no prompts and no storage.
//!
//! Usage:
//!   cargo run -p divetable-simtest -- check
//!   cargo run -p divetable-simtest -- --verbose check
//!   cargo run -p divetable-simtest -- plan --depth1 60 --time1 20 --interval 60 --depth2 50 --time2 30
//!   cargo run -p divetable-simtest -- tables

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use divetable_logic::config::{validate_config, PlannerConfig};
use divetable_logic::planner::{plan_repetitive_dive, RepetitivePlanRequest};
use divetable_logic::residual::{
    lookup_residual_nitrogen, residual_nitrogen_row, validate_repetitive_dive_feet,
    within_ndl_feet,
};
use divetable_logic::resolver::{max_group, pressure_group_row, resolve_group_feet};
use divetable_logic::surface_interval::{
    coverage_gaps, coverage_overlaps, project_group_detailed, transitions_from,
    SurfaceTransition,
};
use divetable_logic::{
    project_group, resolve_group, residual_nitrogen, supported_depths, total_bottom_time,
    validate_repetitive_dive, within_ndl, Depth, Minutes, PressureGroup, TableError,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "divetable-simtest")]
#[command(about = "Headless harness for the dive table engine", long_about = None)]
struct Args {
    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate table data and lookup rules
    Check,
    /// Plan a first dive followed by one repetitive dive
    Plan {
        /// First dive depth (ft)
        #[arg(long)]
        depth1: u32,
        /// First dive bottom time (min)
        #[arg(long)]
        time1: Minutes,
        /// Surface interval (min)
        #[arg(long)]
        interval: Minutes,
        /// Second dive depth (ft)
        #[arg(long)]
        depth2: u32,
        /// Second dive planned bottom time (min)
        #[arg(long)]
        time2: Minutes,
        /// Second dive actual bottom time (min)
        #[arg(long)]
        actual2: Option<Minutes>,
        /// Planner rules as JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Dump the tables as JSON
    Tables,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "divetable_logic=debug,divetable_simtest=debug,info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Check => run_checks(args.verbose),
        Command::Plan {
            depth1,
            time1,
            interval,
            depth2,
            time2,
            actual2,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let request = RepetitivePlanRequest::from_feet(depth1, time1, interval, depth2, time2)
                .map(|r| RepetitivePlanRequest {
                    actual_bottom_time: actual2,
                    ..r
                });
            let outcome = request.and_then(|r| plan_repetitive_dive(&config, &r));
            match outcome {
                Ok(report) => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    if !report.is_safe() {
                        eprintln!("WARNING: second dive exceeds no-decompression limits");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("plan rejected at {}: {}", e.stage(), e);
                    std::process::exit(2);
                }
            }
        }
        Command::Tables => {
            println!("{}", serde_json::to_string_pretty(&table_dump())?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };
    let errors = validate_config(&config);
    if !errors.is_empty() {
        bail!("invalid planner config: {errors:?}");
    }
    log::debug!("planner config: {config:?}");
    Ok(config)
}

// ── Table dump ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DepthDump {
    depth: Depth,
    absolute_limit: Minutes,
    max_group: PressureGroup,
    pressure_groups: &'static [(Minutes, PressureGroup)],
    residual_nitrogen: &'static [Minutes],
}

#[derive(Serialize)]
struct SurfaceDump {
    start: PressureGroup,
    transitions: &'static [SurfaceTransition],
}

#[derive(Serialize)]
struct TableDump {
    depths: Vec<DepthDump>,
    surface_intervals: Vec<SurfaceDump>,
}

fn table_dump() -> TableDump {
    TableDump {
        depths: supported_depths()
            .iter()
            .map(|&depth| DepthDump {
                depth,
                absolute_limit: depth.absolute_limit(),
                max_group: max_group(depth),
                pressure_groups: pressure_group_row(depth),
                residual_nitrogen: residual_nitrogen_row(depth),
            })
            .collect(),
        surface_intervals: PressureGroup::ALL
            .iter()
            .map(|&start| SurfaceDump {
                start,
                transitions: transitions_from(start),
            })
            .collect(),
    }
}

// ── Check harness ───────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Print a section's failures (all results when verbose) under its header.
fn print_section(results: Vec<TestResult>, verbose: bool) -> Vec<TestResult> {
    for r in &results {
        if !r.passed || verbose {
            let icon = if r.passed { "✓" } else { "✗" };
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }
    let failed = results.iter().filter(|r| !r.passed).count();
    println!("  {}/{} passed\n", results.len() - failed, results.len());
    results
}

fn run_checks(verbose: bool) -> Result<()> {
    println!("=== Dive Table Harness ===\n");

    let mut results = Vec::new();

    // 1. Depth catalog
    results.extend(print_section(validate_depth_catalog(verbose), verbose));

    // 2. Pressure group resolver
    results.extend(print_section(validate_resolver(verbose), verbose));

    // 3. Surface interval projector
    results.extend(print_section(validate_surface_intervals(verbose), verbose));

    // 4. Residual nitrogen and limits
    results.extend(print_section(validate_residual_nitrogen(verbose), verbose));

    // 5. Full pipeline sweep
    results.extend(print_section(validate_pipeline(verbose), verbose));

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Depth Catalog ────────────────────────────────────────────────────

fn validate_depth_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Depth Catalog ---");
    let mut results = Vec::new();

    let depths = supported_depths();
    results.push(TestResult {
        name: "catalog_size".into(),
        passed: depths.len() == 12,
        detail: format!("{} depths catalogued", depths.len()),
    });

    let decreasing = depths
        .windows(2)
        .all(|p| p[0].feet() < p[1].feet() && p[0].absolute_limit() > p[1].absolute_limit());
    results.push(TestResult {
        name: "catalog_limits_decrease".into(),
        passed: decreasing,
        detail: "deeper rows allow strictly less time".into(),
    });

    let accepted: Vec<u32> = (0..=150)
        .filter(|&ft| Depth::is_supported_feet(ft))
        .collect();
    results.push(TestResult {
        name: "catalog_only_listed_depths".into(),
        passed: accepted.len() == 12,
        detail: format!("{} of 0..=150 ft accepted", accepted.len()),
    });

    if verbose {
        println!("  Absolute limits:");
        for depth in depths {
            println!("    {:>6}: {:>3} min", depth.to_string(), depth.absolute_limit());
        }
    }

    results
}

// ── 2. Resolver ─────────────────────────────────────────────────────────

fn validate_resolver(_verbose: bool) -> Vec<TestResult> {
    println!("--- Pressure Group Resolver ---");
    let mut results = Vec::new();

    let mut bad_rows = Vec::new();
    for &depth in supported_depths() {
        let row = pressure_group_row(depth);
        let ascending = row.windows(2).all(|p| p[0].0 < p[1].0 && p[0].1.next() == Some(p[1].1));
        let starts_at_a = row.first().map(|e| e.1) == Some(PressureGroup::A);
        let ends_at_limit = row.last().map(|e| e.0) == Some(depth.absolute_limit());
        if !(ascending && starts_at_a && ends_at_limit) {
            bad_rows.push(depth.to_string());
        }
    }
    results.push(TestResult {
        name: "resolver_rows_well_formed".into(),
        passed: bad_rows.is_empty(),
        detail: if bad_rows.is_empty() {
            "every row ascends from A to the absolute limit".into()
        } else {
            format!("malformed rows: {}", bad_rows.join(", "))
        },
    });

    let boundary = resolve_group(Depth::Ft40, 40);
    results.push(TestResult {
        name: "resolver_exact_boundary".into(),
        passed: boundary == Ok(PressureGroup::I),
        detail: format!("40 ft / 40 min → {:?}", boundary),
    });

    let ceiling = resolve_group(Depth::Ft60, 20);
    results.push(TestResult {
        name: "resolver_ceiling".into(),
        passed: ceiling == Ok(PressureGroup::G),
        detail: format!("60 ft / 20 min → {:?}", ceiling),
    });

    let mut regressions = 0;
    for &depth in supported_depths() {
        let mut previous = PressureGroup::A;
        for t in 0..=depth.absolute_limit() {
            match resolve_group(depth, t) {
                Ok(group) if group >= previous => previous = group,
                _ => regressions += 1,
            }
        }
    }
    results.push(TestResult {
        name: "resolver_monotonic".into(),
        passed: regressions == 0,
        detail: format!("{} regressions across all depths", regressions),
    });

    let exceeded = supported_depths().iter().all(|&d| {
        matches!(
            resolve_group(d, d.absolute_limit() + 1),
            Err(TableError::ExceedsAbsoluteLimit { .. })
        )
    });
    let unsupported = resolve_group_feet(45, 10) == Err(TableError::UnsupportedDepth(45));
    results.push(TestResult {
        name: "resolver_errors_distinct".into(),
        passed: exceeded && unsupported,
        detail: format!("limit breach={} unsupported depth={}", exceeded, unsupported),
    });

    results
}

// ── 3. Surface Intervals ────────────────────────────────────────────────

fn validate_surface_intervals(verbose: bool) -> Vec<TestResult> {
    println!("--- Surface Interval Projector ---");
    let mut results = Vec::new();

    for start in PressureGroup::ALL {
        let gaps = coverage_gaps(start);
        let overlaps = coverage_overlaps(start);
        if !gaps.is_empty() || !overlaps.is_empty() || verbose {
            results.push(TestResult {
                name: format!("surface_row_{}_coverage", start),
                passed: gaps.is_empty() && overlaps.is_empty(),
                detail: format!(
                    "{} transitions, gaps={:?} overlaps={:?}",
                    transitions_from(start).len(),
                    gaps,
                    overlaps
                ),
            });
        }
    }

    let mut fallbacks = 0;
    for start in PressureGroup::ALL {
        for minutes in 0..=24 * 60 {
            if !project_group_detailed(start, minutes).matched {
                fallbacks += 1;
            }
        }
    }
    results.push(TestResult {
        name: "surface_exact_match_everywhere".into(),
        passed: fallbacks == 0,
        detail: format!("{} minute values needed the fallback path", fallbacks),
    });

    let raised: Vec<_> = PressureGroup::ALL
        .iter()
        .filter(|&&g| project_group(g, 0) > g)
        .collect();
    results.push(TestResult {
        name: "surface_zero_interval".into(),
        passed: raised.is_empty(),
        detail: "no group rises after a zero-minute interval".into(),
    });

    let desaturated = PressureGroup::ALL
        .iter()
        .all(|&g| project_group(g, 24 * 60) == PressureGroup::A);
    results.push(TestResult {
        name: "surface_full_desaturation".into(),
        passed: desaturated,
        detail: "every group reaches A after 24h".into(),
    });

    let i_after_hour = project_group(PressureGroup::I, 60);
    results.push(TestResult {
        name: "surface_i_after_60".into(),
        passed: i_after_hour == PressureGroup::A,
        detail: format!("I after 60 min → {}", i_after_hour),
    });

    results
}

// ── 4. Residual Nitrogen ────────────────────────────────────────────────

fn validate_residual_nitrogen(_verbose: bool) -> Vec<TestResult> {
    println!("--- Residual Nitrogen & Limits ---");
    let mut results = Vec::new();

    let mismatched: Vec<String> = supported_depths()
        .iter()
        .filter(|&&d| residual_nitrogen_row(d).len() != pressure_group_row(d).len())
        .map(|d| d.to_string())
        .collect();
    results.push(TestResult {
        name: "rnt_rows_cover_reachable_groups".into(),
        passed: mismatched.is_empty(),
        detail: if mismatched.is_empty() {
            "RNT rows list exactly the reachable groups".into()
        } else {
            format!("mismatched rows: {}", mismatched.join(", "))
        },
    });

    let rnt = residual_nitrogen(PressureGroup::C, Depth::Ft60);
    let safe = validate_repetitive_dive(Depth::Ft60, PressureGroup::C, 30);
    results.push(TestResult {
        name: "rnt_group_c_60ft".into(),
        passed: rnt == 14 && safe,
        detail: format!("RNT={} tbt={} safe={}", rnt, total_bottom_time(rnt, 30), safe),
    });

    let deep = validate_repetitive_dive(Depth::Ft130, PressureGroup::G, 5);
    results.push(TestResult {
        name: "rnt_group_g_130ft".into(),
        passed: !deep,
        detail: format!(
            "RNT={} + 5 vs limit {} → safe={}",
            residual_nitrogen(PressureGroup::G, Depth::Ft130),
            Depth::Ft130.absolute_limit(),
            deep
        ),
    });

    let absent = lookup_residual_nitrogen(PressureGroup::Z, Depth::Ft140);
    results.push(TestResult {
        name: "rnt_absent_pair".into(),
        passed: !absent.is_applicable() && absent.minutes() == 0,
        detail: format!("Z at 140 ft → {:?}", absent),
    });

    let boundary = supported_depths().iter().all(|&d| {
        within_ndl(d, d.absolute_limit()) && !within_ndl(d, d.absolute_limit() + 1)
    });
    let off_table = !within_ndl_feet(45, 0) && !validate_repetitive_dive_feet(45, PressureGroup::A, 1);
    results.push(TestResult {
        name: "ndl_boundary_inclusive".into(),
        passed: boundary && off_table,
        detail: format!("limit inclusive={} off-table rejected={}", boundary, off_table),
    });

    results
}

// ── 5. Pipeline ─────────────────────────────────────────────────────────

fn validate_pipeline(verbose: bool) -> Vec<TestResult> {
    println!("--- Repetitive Dive Pipeline ---");
    let mut results = Vec::new();

    let config = PlannerConfig::default();
    let mut plans = 0;
    let mut safe = 0;
    let mut mismatches = Vec::new();

    for &first in supported_depths() {
        for &second in supported_depths() {
            for interval in [10, 30, 60, 120] {
                let time1 = first.absolute_limit();
                let time2 = (second.absolute_limit() / 2).max(1);
                let request =
                    match RepetitivePlanRequest::from_feet(first.feet(), time1, interval, second.feet(), time2) {
                        Ok(r) => r,
                        Err(e) => {
                            mismatches.push(e.to_string());
                            continue;
                        }
                    };
                let report = match plan_repetitive_dive(&config, &request) {
                    Ok(r) => r,
                    Err(e) => {
                        mismatches.push(e.to_string());
                        continue;
                    }
                };
                plans += 1;

                let manual = resolve_group(first, time1)
                    .map(|g| project_group(g, interval))
                    .map(|g| within_ndl(second, residual_nitrogen(g, second) + time2));
                if manual != Ok(report.planned_within_ndl) {
                    mismatches.push(format!("{} → {} after {} min", first, second, interval));
                }
                if report.is_safe() {
                    safe += 1;
                }
            }
        }
    }

    results.push(TestResult {
        name: "pipeline_matches_stages".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            format!("{} plans agree with stage-by-stage lookups", plans)
        } else {
            format!("{} mismatches: {}", mismatches.len(), mismatches.join("; "))
        },
    });

    if verbose {
        println!("  {} of {} max-first-dive plans are within limits", safe, plans);
    }

    results
}
