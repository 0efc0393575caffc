//! Report assembly: fetch, sort, filter, group, project rows.
//!
//! Both report flavors run the same pipeline over a registry snapshot and
//! differ only in the columns they project. The output is a row matrix plus
//! the separator indices the table renderer needs; nothing here draws text.

use std::cmp::Ordering;

use mesa_registry::{
    ActionDescriptor, ActionQuery, EndpointHealth, Registry, RegistryItem, service_prefix,
};
use mesa_table::ColumnSpec;
use tracing::debug;
use yansi::Paint;

use crate::params;
use crate::pattern;
use crate::state::{self, HealthLabel};

/// Which projection of the registry a report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFlavor {
    /// Deployment topology: node counts, health, caching, compact params.
    Topology,
    /// Call contracts: params, response shape, authorization.
    Contract,
}

impl ReportFlavor {
    /// Soft-wrap width for schema text in this flavor.
    fn wrap_width(self) -> usize {
        match self {
            ReportFlavor::Topology => 50,
            ReportFlavor::Contract => 70,
        }
    }

    fn columns(self) -> Vec<ColumnSpec> {
        match self {
            ReportFlavor::Topology => vec![
                ColumnSpec::left(),      // Action
                ColumnSpec::right(),     // Nodes
                ColumnSpec::center(),    // State
                ColumnSpec::center(),    // Cached
                ColumnSpec::wrapped(50), // Params
            ],
            ReportFlavor::Contract => vec![
                ColumnSpec::left(),      // Action
                ColumnSpec::center(),    // State
                ColumnSpec::wrapped(70), // Params
                ColumnSpec::wrapped(40), // Response
                ColumnSpec::left(),      // Auth
            ],
        }
    }

    fn header(self, styled: bool) -> Vec<String> {
        let titles: &[&str] = match self {
            ReportFlavor::Topology => &["Action", "Nodes", "State", "Cached", "Params"],
            ReportFlavor::Contract => &["Action", "State", "Params", "Response", "Auth"],
        };
        titles
            .iter()
            .map(|title| {
                if styled {
                    title.bold().to_string()
                } else {
                    (*title).to_string()
                }
            })
            .collect()
    }
}

/// Caller-supplied report parameters.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Selection flags forwarded to the registry query.
    pub query: ActionQuery,
    /// Wildcard filter over action names (e.g. `users.*`). Empty or absent
    /// means the filter step is skipped entirely.
    pub filter: Option<String>,
    /// Attach ANSI styling to cells.
    pub styled: bool,
}

/// A built report, ready for the table renderer.
#[derive(Debug, Clone)]
pub struct Report {
    /// Row matrix, header row first.
    pub rows: Vec<Vec<String>>,
    pub columns: Vec<ColumnSpec>,
    /// Row indices that get a horizontal rule drawn above them.
    pub separators: Vec<usize>,
}

/// Build a report from one registry snapshot.
///
/// Pure transform: an empty snapshot (or one fully removed by the filter)
/// yields an empty report, and a malformed item degrades to a blank or
/// best-effort cell instead of failing the build.
pub fn build(registry: &dyn Registry, flavor: ReportFlavor, options: &ReportOptions) -> Report {
    let mut items = registry.action_list(&options.query);
    items.sort_by(|a, b| name_order(&a.name, &b.name));

    if let Some(filter) = options.filter.as_deref().filter(|f| !f.is_empty()) {
        items.retain(|item| pattern::matches(&item.name, filter));
    }

    let local_node = registry.node_id();
    let styled = options.styled;
    let wrap = flavor.wrap_width();

    let mut rows = vec![flavor.header(styled)];
    let mut separators = Vec::new();
    let mut last_service: Option<String> = None;

    for item in &items {
        let service = service_prefix(&item.name).to_string();
        // Service boundary: rule above this row. The first group is delimited
        // by the renderer's fixed header rule instead.
        if last_service.as_deref().is_some_and(|prev| prev != service) {
            separators.push(rows.len());
        }
        last_service = Some(service);

        rows.push(match flavor {
            ReportFlavor::Topology => topology_row(item, wrap, styled),
            ReportFlavor::Contract => contract_row(item, wrap, styled),
        });

        if options.query.with_endpoints
            && let Some(endpoints) = &item.endpoints
        {
            for endpoint in endpoints {
                let node = node_cell(&endpoint.node_id, local_node, styled);
                let health = health_cell(state::label(endpoint.state), styled);
                rows.push(match flavor {
                    ReportFlavor::Topology => {
                        vec![String::new(), node, health, String::new(), String::new()]
                    }
                    // The contract flavor has no Nodes column; endpoint rows
                    // carry the node identity in the Action column.
                    ReportFlavor::Contract => {
                        vec![node, health, String::new(), String::new(), String::new()]
                    }
                });
            }
            separators.push(rows.len());
        }
    }

    debug!(
        rows = rows.len(),
        separators = separators.len(),
        "built action report"
    );

    Report {
        rows,
        columns: flavor.columns(),
        separators,
    }
}

/// Total order over action names: case-insensitive primary, byte-wise
/// tiebreak. Locale-independent, so a snapshot renders identically on every
/// machine.
fn name_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn topology_row(item: &RegistryItem, wrap: usize, styled: bool) -> Vec<String> {
    match &item.action {
        Some(action) => vec![
            action.name.clone(),
            count_cell(item),
            health_cell(state::label(EndpointHealth::Flag(item.available)), styled),
            cached_cell(action.cache, styled),
            params_cell(action, wrap),
        ],
        // Known only by name: some node advertises the action but its
        // descriptor is unresolvable here.
        None => vec![
            item.name.clone(),
            item.count.to_string(),
            health_cell(HealthLabel::Failed, styled),
            String::new(),
            String::new(),
        ],
    }
}

fn contract_row(item: &RegistryItem, wrap: usize, styled: bool) -> Vec<String> {
    match &item.action {
        Some(action) => vec![
            action.name.clone(),
            health_cell(state::label(EndpointHealth::Flag(item.available)), styled),
            params_cell(action, wrap),
            action.response.clone().unwrap_or_default(),
            auth_cell(action),
        ],
        None => vec![
            item.name.clone(),
            health_cell(HealthLabel::Failed, styled),
            String::new(),
            String::new(),
            String::new(),
        ],
    }
}

fn params_cell(action: &ActionDescriptor, wrap: usize) -> String {
    action
        .params
        .as_ref()
        .map(|schema| params::describe(schema, wrap))
        .unwrap_or_default()
}

fn count_cell(item: &RegistryItem) -> String {
    if item.has_local {
        format!("(*) {}", item.count)
    } else {
        item.count.to_string()
    }
}

fn auth_cell(action: &ActionDescriptor) -> String {
    match &action.permissions {
        Some(permissions) if !permissions.is_empty() => {
            format!("[{}]", permissions.join(", "))
        }
        _ if action.auth_required => "REQUIRED".to_string(),
        _ => "NOT REQUIRED".to_string(),
    }
}

fn health_cell(label: HealthLabel, styled: bool) -> String {
    let tag = label.tag();
    if !styled {
        return tag.to_string();
    }
    match label {
        HealthLabel::Ok => tag.white().on_green().to_string(),
        HealthLabel::Trying => tag.black().on_yellow().to_string(),
        HealthLabel::Failed => tag.white().bold().on_red().to_string(),
    }
}

fn cached_cell(cache: bool, styled: bool) -> String {
    match (cache, styled) {
        (true, true) => "Yes".green().to_string(),
        (true, false) => "Yes".to_string(),
        (false, true) => "No".dim().to_string(),
        (false, false) => "No".to_string(),
    }
}

fn node_cell(node_id: &str, local_node: &str, styled: bool) -> String {
    if node_id != local_node {
        return node_id.to_string();
    }
    if styled {
        "<local>".dim().to_string()
    } else {
        "<local>".to_string()
    }
}
