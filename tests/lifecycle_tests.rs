use predicates::str::contains;
use std::path::Path;

mod common;
use common::{ack_ok, log_ok, setup_session_file, setup_test_db, stub_endpoint, wtk};

#[test]
fn test_start_persists_session() {
    let db = setup_test_db("start_persists");
    let session = setup_session_file("start_persists");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "home"])
        .assert()
        .success()
        .stdout(contains("Work started at Home"));

    assert!(Path::new(&session).exists());

    wtk()
        .args(["--db", &db, "--session-file", &session, "status"])
        .assert()
        .success()
        .stdout(contains("Working at Home"));
}

#[test]
fn test_start_rejected_when_already_working() {
    let db = setup_test_db("double_start");
    let session = setup_session_file("double_start");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "office"])
        .assert()
        .success();

    for location in ["home", "office"] {
        wtk()
            .args(["--db", &db, "--session-file", &session, "start", location])
            .assert()
            .failure()
            .stderr(contains("already working at Office"));
    }

    // the original session survived both rejections
    wtk()
        .args(["--db", &db, "--session-file", &session, "status"])
        .assert()
        .success()
        .stdout(contains("Working at Office"));
}

#[test]
fn test_start_rejects_unknown_location() {
    let db = setup_test_db("bad_location");
    let session = setup_session_file("bad_location");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "garage"])
        .assert()
        .failure()
        .stderr(contains("Invalid location code"));

    assert!(!Path::new(&session).exists());
}

#[test]
fn test_stop_rejected_when_not_working() {
    let db = setup_test_db("stop_idle");
    let session = setup_session_file("stop_idle");

    wtk()
        .args(["--db", &db, "--session-file", &session, "stop"])
        .assert()
        .failure()
        .stderr(contains("not currently working"));
}

#[test]
fn test_stop_syncs_entry_and_clears_session() {
    let db = setup_test_db("stop_syncs");
    let session = setup_session_file("stop_syncs");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "home"])
        .assert()
        .success();

    // one POST for the entry, one GET for the reload
    let endpoint = stub_endpoint(vec![
        ack_ok("Entry logged"),
        log_ok(r#"[{"Date":"2024-03-05","StartTime":"09:15","EndTime":"17:45","Location":"Home","Duration":"8:30","Notes":"Quick stop for session started at 09:15"}]"#),
    ]);

    wtk()
        .args([
            "--db",
            &db,
            "--session-file",
            &session,
            "--endpoint",
            &endpoint,
            "stop",
        ])
        .assert()
        .success()
        .stdout(contains("Entry logged"))
        .stdout(contains("Not working."))
        .stdout(contains("2024-03-05"));

    assert!(!Path::new(&session).exists());
}

#[test]
fn test_failed_sync_keeps_session() {
    let db = setup_test_db("stop_failed_sync");
    let session = setup_session_file("stop_failed_sync");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "office"])
        .assert()
        .success();

    let endpoint = stub_endpoint(vec![(500, "server exploded".to_string())]);

    wtk()
        .args([
            "--db",
            &db,
            "--session-file",
            &session,
            "--endpoint",
            &endpoint,
            "stop",
        ])
        .assert()
        .failure()
        .stderr(contains("HTTP error! Status: 500"));

    // session left intact so the user may retry
    assert!(Path::new(&session).exists());

    wtk()
        .args(["--db", &db, "--session-file", &session, "status"])
        .assert()
        .success()
        .stdout(contains("Working at Office"));
}

#[test]
fn test_stop_rejected_by_endpoint_keeps_session() {
    let db = setup_test_db("stop_app_error");
    let session = setup_session_file("stop_app_error");

    wtk()
        .args(["--db", &db, "--session-file", &session, "start", "home"])
        .assert()
        .success();

    let endpoint = stub_endpoint(vec![(
        200,
        r#"{"success":false,"error":"Sheet is read-only"}"#.to_string(),
    )]);

    wtk()
        .args([
            "--db",
            &db,
            "--session-file",
            &session,
            "--endpoint",
            &endpoint,
            "stop",
        ])
        .assert()
        .failure()
        .stderr(contains("Sheet is read-only"));

    assert!(Path::new(&session).exists());
}
