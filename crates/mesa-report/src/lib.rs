//! # mesa-report
//!
//! Turns a broker registry snapshot into table-ready report data.
//!
//! The pipeline is a pure, single-pass transform: query the registry with the
//! caller's selection flags, sort by action name, apply an optional wildcard
//! filter, group by service prefix (recording a separator index at every
//! boundary), then project one row per action - plus optional per-endpoint
//! detail rows. Two flavors share the pipeline:
//!
//! - **topology**: node counts, health state, caching, compact params
//! - **contract**: params, response description, authorization
//!
//! Building a report never fails. An empty snapshot is an empty report and a
//! malformed parameter schema degrades to a best-effort cell.

pub mod builder;
pub mod params;
pub mod pattern;
pub mod reflow;
pub mod state;

pub use builder::{Report, ReportFlavor, ReportOptions, build};
pub use state::HealthLabel;
