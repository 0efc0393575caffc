//! Registry listing commands.
//!
//! `mesa actions` - topology view (nodes, health, caching, params).
//! `mesa contracts` - contract view (params, response, authorization).
//!
//! Both commands render the same pipeline output; they differ only in the
//! report flavor handed to the builder.

use std::path::Path;

use anyhow::{Context, Result};
use mesa_registry::SnapshotRegistry;
use mesa_report::{ReportFlavor, ReportOptions};

pub fn run(flavor: ReportFlavor, snapshot: &Path, options: &ReportOptions) -> Result<()> {
    println!("{}", render(flavor, snapshot, options)?);
    Ok(())
}

fn render(flavor: ReportFlavor, snapshot: &Path, options: &ReportOptions) -> Result<String> {
    let registry = SnapshotRegistry::load(snapshot)
        .with_context(|| format!("failed to load registry snapshot from {:?}", snapshot))?;

    let report = mesa_report::build(&registry, flavor, options);
    Ok(mesa_table::render(
        &report.rows,
        &report.columns,
        &report.separators,
    ))
}
