//! Tests for roster hierarchy validation.

use proptest::prelude::*;

use roster_ingest::parse_roster;
use roster_model::{FindingKind, Record};
use roster_validate::{ValidationOptions, validate_parsed, validate_roster};

fn record(email: &str, role: &str, reports_to: &str) -> Record {
    Record::new(email, email.split('@').next().unwrap_or(email), role, reports_to)
}

fn validate(records: &[Record]) -> Vec<roster_model::Finding> {
    validate_roster(records, &ValidationOptions::default())
}

fn kinds(findings: &[roster_model::Finding]) -> Vec<FindingKind> {
    findings.iter().map(|finding| finding.kind).collect()
}

// --- Policy ---

#[test]
fn root_and_admin_roster_is_valid() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("admin@x.com", "Admin", "root@x.com"),
    ];
    assert!(validate(&records).is_empty());
}

#[test]
fn full_valid_hierarchy_has_no_findings() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("admin@x.com", "Admin", "root@x.com"),
        record("lead@x.com", "Manager", "admin@x.com"),
        record("sub@x.com", "Manager", "lead@x.com"),
        record("caller@x.com", "Caller", "sub@x.com"),
    ];
    assert!(validate(&records).is_empty());
}

#[test]
fn caller_under_non_manager_yields_one_violation() {
    for supervisor_role in ["Root", "Admin", "Caller"] {
        let records = vec![
            record("boss@x.com", supervisor_role, ""),
            record("caller@x.com", "Caller", "boss@x.com"),
        ];
        let findings = validate(&records);
        let violations: Vec<_> = findings
            .iter()
            .filter(|f| f.kind == FindingKind::HierarchyViolation)
            .collect();
        assert_eq!(violations.len(), 1, "supervisor role {supervisor_role}");
        assert_eq!(violations[0].email, "caller@x.com");
        assert_eq!(violations[0].row_index, 3);
        assert_eq!(
            violations[0].detail,
            format!(
                "Caller (caller@x.com) must report only to Manager, but reports to {supervisor_role} (boss@x.com)"
            )
        );
    }
}

#[test]
fn manager_under_root_is_violation() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("m@x.com", "Manager", "root@x.com"),
    ];
    let findings = validate(&records);
    assert_eq!(kinds(&findings), vec![FindingKind::HierarchyViolation]);
    assert_eq!(
        findings[0].detail,
        "Manager (m@x.com) must report to Admin or Manager, but reports to Root (root@x.com)"
    );
}

// --- Multiple supervisors ---

#[test]
fn multiple_supervisors_flagged_once_and_each_reference_checked() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("admin@x.com", "Admin", "root@x.com"),
        record("m@x.com", "Manager", "admin@x.com;root@x.com"),
    ];
    let findings = validate(&records);

    assert_eq!(
        kinds(&findings),
        vec![
            FindingKind::MultipleSupervisors,
            FindingKind::HierarchyViolation
        ]
    );
    assert_eq!(
        findings[0].detail,
        "User reports to multiple supervisors: admin@x.com;root@x.com"
    );
    assert!(findings[1].detail.contains("Root (root@x.com)"));
    assert!(findings.iter().all(|f| f.row_index == 4));
}

#[test]
fn multiple_supervisors_regardless_of_validity() {
    let cases = [
        ("x@y.com;z@y.com", 1usize),
        ("ghost@y.com;z@y.com", 1),
        ("ghost@y.com;phantom@y.com", 1),
    ];
    for (reports_to, expected) in cases {
        let records = vec![
            record("x@y.com", "Manager", ""),
            record("z@y.com", "Manager", ""),
            record("m@y.com", "Manager", reports_to),
        ];
        let findings = validate(&records);
        let count = findings
            .iter()
            .filter(|f| f.kind == FindingKind::MultipleSupervisors)
            .count();
        assert_eq!(count, expected, "reports_to {reports_to}");
    }
}

// --- Invalid supervisors ---

#[test]
fn missing_supervisor_reported_once_and_adds_no_cycle_edge() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("admin@x.com", "Admin", "ghost@x.com"),
    ];
    let findings = validate(&records);
    assert_eq!(kinds(&findings), vec![FindingKind::InvalidSupervisor]);
    assert_eq!(findings[0].detail, "Supervisor ghost@x.com does not exist");
    assert_eq!(findings[0].row_index, 3);
}

#[test]
fn supervisor_references_are_not_trimmed() {
    let records = vec![
        record("a@x.com", "Manager", ""),
        record("m@x.com", "Manager", "a@x.com; a@x.com"),
    ];
    let findings = validate(&records);
    assert_eq!(
        kinds(&findings),
        vec![
            FindingKind::MultipleSupervisors,
            FindingKind::InvalidSupervisor
        ]
    );
}

// --- Cycles ---

#[test]
fn three_node_cycle_reports_each_member_once() {
    let records = vec![
        record("a@x.com", "Manager", "b@x.com"),
        record("b@x.com", "Manager", "c@x.com"),
        record("c@x.com", "Manager", "a@x.com"),
    ];
    let findings = validate(&records);
    let cycles: Vec<_> = findings
        .iter()
        .filter(|f| f.kind == FindingKind::CycleDetected)
        .collect();

    assert_eq!(cycles.len(), 3);
    let emails: Vec<&str> = cycles.iter().map(|f| f.email.as_str()).collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
    for finding in cycles {
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            assert!(finding.detail.contains(email));
        }
    }
}

#[test]
fn cycle_findings_follow_rule_findings() {
    let records = vec![
        record("a@x.com", "Caller", "b@x.com"),
        record("b@x.com", "Caller", "a@x.com;ghost@x.com"),
    ];
    let findings = validate(&records);
    assert_eq!(
        kinds(&findings),
        vec![
            FindingKind::HierarchyViolation,
            FindingKind::MultipleSupervisors,
            FindingKind::HierarchyViolation,
            FindingKind::InvalidSupervisor,
            FindingKind::CycleDetected,
            FindingKind::CycleDetected,
        ]
    );
}

#[test]
fn disjoint_cycles_are_both_reported() {
    let records = vec![
        record("a@x.com", "Manager", "b@x.com"),
        record("b@x.com", "Manager", "a@x.com"),
        record("c@x.com", "Manager", "d@x.com"),
        record("d@x.com", "Manager", "c@x.com"),
    ];
    let findings = validate(&records);
    assert_eq!(findings.len(), 4);
    assert!(findings[2].detail.contains("c@x.com → d@x.com → c@x.com"));
}

#[test]
fn second_cycle_through_shared_node_reports_its_other_member() {
    let records = vec![
        record("a@x.com", "Manager", "b@x.com;c@x.com"),
        record("b@x.com", "Manager", "a@x.com"),
        record("c@x.com", "Manager", "a@x.com"),
    ];
    let findings = validate(&records);
    let cycle_rows: Vec<(&str, usize)> = findings
        .iter()
        .filter(|f| f.kind == FindingKind::CycleDetected)
        .map(|f| (f.email.as_str(), f.row_index))
        .collect();
    assert_eq!(
        cycle_rows,
        vec![
            ("a@x.com", 2),
            ("b@x.com", 3),
            ("a@x.com", 2),
            ("c@x.com", 4),
        ]
    );
}

#[test]
fn disjoint_chains_have_no_cycles() {
    let records = vec![
        record("r1@x.com", "Root", ""),
        record("a1@x.com", "Admin", "r1@x.com"),
        record("r2@x.com", "Root", ""),
        record("a2@x.com", "Admin", "r2@x.com"),
    ];
    assert!(validate(&records).is_empty());
}

// --- Duplicates and unknown roles ---

#[test]
fn duplicate_emails_last_row_wins_by_default() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("boss@x.com", "Caller", ""),
        record("boss@x.com", "Manager", "root@x.com"),
        record("c@x.com", "Caller", "boss@x.com"),
    ];
    let findings = validate(&records);
    // The caller resolves to the later Manager row; only the Manager-under-Root
    // violation remains.
    assert_eq!(kinds(&findings), vec![FindingKind::HierarchyViolation]);
    assert_eq!(findings[0].row_index, 4);
}

#[test]
fn strict_options_add_duplicate_and_unknown_role_findings() {
    let records = vec![
        record("root@x.com", "Root", ""),
        record("a@x.com", "Admin", "root@x.com"),
        record("a@x.com", "Admin", "root@x.com"),
        record("t@x.com", "Temp", "a@x.com"),
    ];
    assert!(validate(&records).is_empty());

    let findings = validate_roster(&records, &ValidationOptions::strict());
    assert_eq!(
        kinds(&findings),
        vec![
            FindingKind::DuplicateEmail,
            FindingKind::DuplicateEmail,
            FindingKind::UnknownRole
        ]
    );
    assert_eq!(findings[0].row_index, 3);
    assert_eq!(findings[1].row_index, 4);
    assert_eq!(
        findings[2].detail,
        "Role 'Temp' is not one of Root, Admin, Manager, Caller"
    );

    let only_roles = ValidationOptions::new().with_unknown_roles(true);
    assert_eq!(validate_roster(&records, &only_roles).len(), 1);
}

// --- End to end ---

#[test]
fn parsed_roster_report() {
    let text = "Email,FullName,Role,ReportsTo\n\
                root@x.com,Root,Root,\n\
                short@x.com,Short\n\
                \n\
                c@x.com,\"Doe, Jane\",Caller,root@x.com\n";
    let parsed = parse_roster(text).expect("parse roster");
    let report = validate_parsed(&parsed, &ValidationOptions::default());

    assert_eq!(report.records, 2);
    assert_eq!(report.dropped_rows, 1);
    assert_eq!(report.count(FindingKind::HierarchyViolation), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.full_name, "Doe, Jane");
    // Position in the record sequence, not the source line.
    assert_eq!(finding.row_index, 3);
}

fn roster_strategy() -> impl Strategy<Value = Vec<Record>> {
    let roles = prop::sample::select(vec!["Root", "Admin", "Manager", "Caller", "Temp"]);
    prop::collection::vec(
        (0usize..8, roles, prop::collection::vec(0usize..10, 0..3)),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(id, role, supervisors)| {
                let reports_to = supervisors
                    .iter()
                    .map(|s| format!("u{s}@x.com"))
                    .collect::<Vec<_>>()
                    .join(";");
                Record::new(format!("u{id}@x.com"), format!("User {id}"), role, reports_to)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn validation_is_idempotent(records in roster_strategy()) {
        let first = validate_roster(&records, &ValidationOptions::strict());
        let second = validate_roster(&records, &ValidationOptions::strict());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_multi_reference_row_gets_exactly_one_flag(records in roster_strategy()) {
        let findings = validate(&records);
        for (position, record) in records.iter().enumerate() {
            let flagged = findings
                .iter()
                .filter(|f| f.kind == FindingKind::MultipleSupervisors && f.row_index == position + 2)
                .count();
            prop_assert_eq!(flagged, usize::from(record.has_multiple_supervisors()));
        }
    }

    #[test]
    fn row_indices_point_at_records(records in roster_strategy()) {
        for finding in validate_roster(&records, &ValidationOptions::strict()) {
            let record = &records[finding.row_index - 2];
            prop_assert_eq!(&record.email, &finding.email);
        }
    }
}
