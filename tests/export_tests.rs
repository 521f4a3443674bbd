mod common;
use common::{gate, init_db, setup_test_db, temp_out};
use std::fs;

fn seed(db_path: &str) {
    init_db(db_path);

    gate()
        .args([
            "--db",
            db_path,
            "resident",
            "add",
            "--flat",
            "7C",
            "--owner",
            "Priya",
            "--member",
            "Ravi:53:spouse",
        ])
        .assert()
        .success();

    gate()
        .args([
            "--db",
            db_path,
            "visitor",
            "checkin",
            "--name",
            "Alex",
            "--mobile",
            "555-1234",
            "--type",
            "guest",
            "--flat",
            "7C",
            "--purpose",
            "tea",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_visitors_csv() {
    let db_path = setup_test_db("export_visitors_csv");
    seed(&db_path);
    let out = temp_out("export_visitors_csv", "csv");

    gate()
        .args([
            "--db", &db_path, "export", "--what", "visitors", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,mobile_number,type,flat_no,purpose,in_time,out_time,status"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("Alex"));
    assert!(row.contains("guest"));
    assert!(row.ends_with(",,active"));
}

#[test]
fn test_export_residents_json() {
    let db_path = setup_test_db("export_residents_json");
    seed(&db_path);
    let out = temp_out("export_residents_json", "json");

    gate()
        .args([
            "--db", &db_path, "export", "--what", "residents", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json[0]["flatNo"], "7C");
    assert_eq!(json[0]["ownerName"], "Priya");
    assert_eq!(json[0]["members"][0]["name"], "Ravi");
}

#[test]
fn test_export_residents_csv_flattens_members() {
    let db_path = setup_test_db("export_residents_csv");
    seed(&db_path);
    let out = temp_out("export_residents_csv", "csv");

    gate()
        .args([
            "--db", &db_path, "export", "--what", "residents", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,flat_no,owner_name,age,total_members,members"));
    assert!(content.contains("Ravi (53, spouse)"));
}
