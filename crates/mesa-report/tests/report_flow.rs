//! End-to-end flow: snapshot registry -> report builder -> rendered table.

use mesa_registry::{ActionQuery, RegistrySnapshot, SnapshotRegistry};
use mesa_report::{ReportFlavor, ReportOptions};

fn registry() -> SnapshotRegistry {
    let snapshot: RegistrySnapshot = serde_json::from_str(
        r#"{
            "nodeID": "broker-1",
            "actions": [
                {
                    "name": "users.create",
                    "count": 2,
                    "available": true,
                    "hasLocal": true,
                    "action": { "name": "users.create", "params": { "id": "string", "name": "string" } }
                },
                {
                    "name": "users.get",
                    "count": 2,
                    "available": true,
                    "hasLocal": true,
                    "action": { "name": "users.get", "cache": true }
                },
                {
                    "name": "posts.list",
                    "count": 1,
                    "available": true,
                    "hasLocal": false,
                    "action": { "name": "posts.list" }
                },
                {
                    "name": "mail.send",
                    "count": 2,
                    "available": true,
                    "hasLocal": true,
                    "action": { "name": "mail.send" },
                    "endpoints": [
                        { "nodeID": "broker-1", "state": true },
                        { "nodeID": "node-9", "state": "OPEN" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    SnapshotRegistry::new(snapshot)
}

#[test]
fn one_group_rule_per_service_boundary() {
    let registry = registry();
    let report = mesa_report::build(&registry, ReportFlavor::Topology, &ReportOptions::default());

    // sorted: mail.send, posts.list, users.create, users.get
    // three distinct services, so two boundaries
    assert_eq!(report.separators, vec![2, 3]);

    let table = mesa_table::render(&report.rows, &report.columns, &report.separators);
    let rules = table.lines().filter(|l| l.starts_with('╟')).count();
    // header rule plus the two group boundaries
    assert_eq!(rules, 3);
}

#[test]
fn endpoint_blocks_add_rows_and_one_more_rule() {
    let registry = registry();
    let options = ReportOptions {
        query: ActionQuery {
            with_endpoints: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let report = mesa_report::build(&registry, ReportFlavor::Topology, &options);

    // mail.send row at 1, its endpoints at 2 and 3, block rule at 4
    assert_eq!(report.rows[2][1], "<local>");
    assert_eq!(report.rows[3][1], "node-9");
    assert_eq!(report.rows[3][2], " FAILED ");
    assert!(report.separators.contains(&4));

    let table = mesa_table::render(&report.rows, &report.columns, &report.separators);
    assert!(table.contains("<local>"));
}

#[test]
fn unstyled_output_is_byte_identical_across_builds() {
    let registry = registry();
    let options = ReportOptions::default();

    let first = mesa_report::build(&registry, ReportFlavor::Contract, &options);
    let second = mesa_report::build(&registry, ReportFlavor::Contract, &options);

    assert_eq!(
        mesa_table::render(&first.rows, &first.columns, &first.separators),
        mesa_table::render(&second.rows, &second.columns, &second.separators)
    );
}
