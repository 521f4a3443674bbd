use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gate, init_db, open_store, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    gate()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_resident_add_list_show() {
    let db_path = setup_test_db("cli_resident_add");
    init_db(&db_path);

    gate()
        .args([
            "--db",
            &db_path,
            "resident",
            "add",
            "--flat",
            "5A",
            "--owner",
            "Kim",
            "--age",
            "34",
            "--member",
            "Jin:36:spouse",
        ])
        .assert()
        .success()
        .stdout(contains("Resident Kim registered for flat 5A"));

    let residents = open_store(&db_path).list_residents();
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0].total_members, 2);
    assert_eq!(residents[0].members[0].relation, "spouse");

    gate()
        .args(["--db", &db_path, "resident", "list"])
        .assert()
        .success()
        .stdout(contains("5A").and(contains("Kim")).and(contains("Jin (36, spouse)")));

    gate()
        .args(["--db", &db_path, "resident", "show", &residents[0].id])
        .assert()
        .success()
        .stdout(contains("Flat 5A").and(contains("Jin")));
}

#[test]
fn test_resident_edit_keeps_unspecified_fields() {
    let db_path = setup_test_db("cli_resident_edit");
    init_db(&db_path);

    gate()
        .args([
            "--db", &db_path, "resident", "add", "--flat", "5A", "--owner", "Kim", "--age", "34",
        ])
        .assert()
        .success();
    let original = open_store(&db_path).list_residents().remove(0);

    gate()
        .args([
            "--db",
            &db_path,
            "resident",
            "edit",
            &original.id,
            "--owner",
            "Kim Lee",
        ])
        .assert()
        .success()
        .stdout(contains("Kim Lee"));

    let edited = open_store(&db_path).get_resident(&original.id).unwrap();
    assert_eq!(edited.owner_name, "Kim Lee");
    assert_eq!(edited.flat_no, "5A");
    assert_eq!(edited.age, 34);
    assert_eq!(edited.created_at, original.created_at);
    assert!(edited.updated_at >= original.updated_at);
}

#[test]
fn test_resident_invalid_member_spec() {
    let db_path = setup_test_db("cli_resident_bad_member");
    init_db(&db_path);

    gate()
        .args([
            "--db", &db_path, "resident", "add", "--flat", "1A", "--owner", "Ana", "--member",
            "Bob:old:son",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid family member"));

    assert!(open_store(&db_path).list_residents().is_empty());
}

#[test]
fn test_resident_delete() {
    let db_path = setup_test_db("cli_resident_del");
    init_db(&db_path);

    gate()
        .args(["--db", &db_path, "resident", "add", "--flat", "3C", "--owner", "Lou"])
        .assert()
        .success();
    let id = open_store(&db_path).list_residents()[0].id.clone();

    gate()
        .args(["--db", &db_path, "resident", "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    assert!(open_store(&db_path).list_residents().is_empty());

    gate()
        .args(["--db", &db_path, "resident", "show", &id])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_visitor_checkin_checkout_flow() {
    let db_path = setup_test_db("cli_visitor_flow");
    init_db(&db_path);

    gate()
        .args([
            "--db",
            &db_path,
            "visitor",
            "checkin",
            "--name",
            "Alex",
            "--mobile",
            "555-1234",
            "--type",
            "guest",
            "--flat",
            "12B",
            "--purpose",
            "social visit",
        ])
        .assert()
        .success()
        .stdout(contains("Alex checked in to flat 12B"));

    let visitors = open_store(&db_path).list_visitors();
    assert_eq!(visitors.len(), 1);
    let id = visitors[0].id.clone();

    gate()
        .args(["--db", &db_path, "visitor", "list", "--active"])
        .assert()
        .success()
        .stdout(contains("Alex").and(contains("inside")));

    gate()
        .args(["--db", &db_path, "visitor", "checkout", &id])
        .assert()
        .success()
        .stdout(contains("Alex checked out"));

    gate()
        .args(["--db", &db_path, "visitor", "checkout", &id])
        .assert()
        .failure()
        .stderr(contains("already checked out"));

    gate()
        .args(["--db", &db_path, "visitor", "list", "--active"])
        .assert()
        .success()
        .stdout(contains("No visitors to show"));

    assert_eq!(open_store(&db_path).count_active_visitors(), 0);
}

#[test]
fn test_visitor_invalid_type() {
    let db_path = setup_test_db("cli_visitor_bad_type");
    init_db(&db_path);

    gate()
        .args([
            "--db", &db_path, "visitor", "checkin", "--name", "Zed", "--mobile", "1", "--type",
            "plumber", "--flat", "1A",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid visitor type"));

    assert!(open_store(&db_path).list_visitors().is_empty());
}

#[test]
fn test_visitor_edit_and_flat_filter() {
    let db_path = setup_test_db("cli_visitor_edit");
    init_db(&db_path);

    for (name, flat) in [("Ann", "1A"), ("Bo", "2B")] {
        gate()
            .args([
                "--db", &db_path, "visitor", "checkin", "--name", name, "--mobile", "555",
                "--type", "delivery", "--flat", flat,
            ])
            .assert()
            .success();
    }

    let ann = open_store(&db_path)
        .list_visitors()
        .into_iter()
        .find(|v| v.name == "Ann")
        .unwrap();

    gate()
        .args([
            "--db", &db_path, "visitor", "edit", &ann.id, "--type", "relative", "--purpose",
            "birthday",
        ])
        .assert()
        .success();

    let edited = open_store(&db_path).get_visitor(&ann.id).unwrap();
    assert_eq!(edited.kind.as_str(), "relative");
    assert_eq!(edited.purpose, "birthday");
    assert_eq!(edited.in_time, ann.in_time);

    gate()
        .args(["--db", &db_path, "visitor", "list", "--flat", "2b"])
        .assert()
        .success()
        .stdout(contains("Bo").and(contains("Ann").not()));
}

#[test]
fn test_checkout_unknown_visitor_fails() {
    let db_path = setup_test_db("cli_checkout_unknown");
    init_db(&db_path);

    gate()
        .args(["--db", &db_path, "visitor", "checkout", "missing-id"])
        .assert()
        .failure()
        .stderr(contains("Visitor record not found: missing-id"));
}

#[test]
fn test_stats_and_log() {
    let db_path = setup_test_db("cli_stats_log");
    init_db(&db_path);

    gate()
        .args(["--db", &db_path, "resident", "add", "--flat", "1A", "--owner", "Ana"])
        .assert()
        .success();
    gate()
        .args([
            "--db", &db_path, "visitor", "checkin", "--name", "Cy", "--mobile", "555", "--type",
            "guest", "--flat", "1A",
        ])
        .assert()
        .success();

    gate()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(
            contains("Total residents:")
                .and(contains("Active visitors:"))
                .and(contains("Visitors today:")),
        );

    let stats = open_store(&db_path).stats();
    assert_eq!(stats.total_residents, 1);
    assert_eq!(stats.active_visitors, 1);

    gate()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("resident added")
                .and(contains("visitor checked in"))
                .and(contains("Database initialized")),
        );
}

#[test]
fn test_watch_single_refresh() {
    let db_path = setup_test_db("cli_watch");
    init_db(&db_path);

    gate()
        .args([
            "--db", &db_path, "visitor", "checkin", "--name", "Dee", "--mobile", "555", "--type",
            "relative", "--flat", "4D",
        ])
        .assert()
        .success();

    gate()
        .args([
            "--db",
            &db_path,
            "watch",
            "--interval",
            "1",
            "--iterations",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Active visitors (1)").and(contains("Dee")));
}
