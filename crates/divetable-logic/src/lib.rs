//! Pure recreational dive planner table logic.
//!
//! This crate implements the table method for no-decompression diving:
//! pressure groups from depth and bottom time, their decay over a surface
//! interval, and the residual-nitrogen check that gates a repetitive dive.
//! Everything is a lookup over compiled-in tables. Functions take plain data
//! and return results; there is no I/O and no shared mutable state, so every
//! call is safe from any number of threads.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`depth`] | Supported depths and their absolute no-decompression limits |
//! | [`group`] | Pressure groups A–Z |
//! | [`resolver`] | Depth + bottom time → pressure group |
//! | [`surface_interval`] | Pressure group decay over a surface interval |
//! | [`residual`] | Residual nitrogen time, total bottom time, limit checks |
//! | [`planner`] | Full first-dive → interval → repetitive-dive pipeline |
//! | [`config`] | Planner input rules and their validation |
//! | [`error`] | Table lookup errors |

pub mod config;
pub mod depth;
pub mod error;
pub mod group;
pub mod planner;
pub mod residual;
pub mod resolver;
pub mod surface_interval;

mod tables;

pub use depth::{absolute_limit, supported_depths, Depth, Minutes};
pub use error::TableError;
pub use group::PressureGroup;
pub use residual::{residual_nitrogen, total_bottom_time, validate_repetitive_dive, within_ndl};
pub use resolver::resolve_group;
pub use surface_interval::project_group;
