//! Pure-layer tests: session transitions, manual-entry validation, wire
//! serialization and table building, all without a process or a network.

mod common;
use common::setup_session_file;

use worktrack::core::entry::ManualEntryInput;
use worktrack::core::list::{error_table, log_table};
use worktrack::core::session::SessionState;
use worktrack::errors::AppError;
use worktrack::models::entry::LogEntry;
use worktrack::models::location::Location;
use worktrack::models::log_row::LogRow;
use worktrack::models::session::WorkSession;
use worktrack::store::SessionFile;

fn active_state() -> SessionState {
    SessionState::from_stored(Some(WorkSession::new(
        "2024-03-05".into(),
        "09:15".into(),
        Location::Home,
    )))
}

#[test]
fn test_start_from_idle() {
    let state = SessionState::idle();
    let (next, session) = state
        .start(Location::Office, "2024-03-05".into(), "08:30".into())
        .expect("start from idle");

    assert!(next.is_active());
    assert_eq!(session.location, Location::Office);
    assert_eq!(session.date, "2024-03-05");
    assert_eq!(session.start_time, "08:30");
}

#[test]
fn test_start_rejected_while_active_for_both_locations() {
    let state = active_state();

    for location in [Location::Home, Location::Office] {
        let err = state
            .start(location, "2024-03-05".into(), "10:00".into())
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyWorking(_, _)));
    }

    // rejection left the state untouched
    assert!(state.is_active());
    assert_eq!(state.active().unwrap().start_time, "09:15");
}

#[test]
fn test_stop_rejected_while_idle() {
    let state = SessionState::idle();
    let err = state.stop("17:00".into()).unwrap_err();
    assert!(matches!(err, AppError::NotWorking));
}

#[test]
fn test_stop_builds_quick_stop_entry() {
    let state = active_state();
    let entry = state.stop("17:45".into()).expect("stop active session");

    assert_eq!(entry.date, "2024-03-05");
    assert_eq!(entry.start_time, "09:15");
    assert_eq!(entry.end_time.as_deref(), Some("17:45"));
    assert_eq!(entry.location, Location::Home);
    assert_eq!(
        entry.notes.as_deref(),
        Some("Quick stop for session started at 09:15")
    );
}

#[test]
fn test_session_file_round_trip() {
    let path = setup_session_file("round_trip");
    let file = SessionFile::new(&path);

    let session = WorkSession::new("2024-03-05".into(), "09:15".into(), Location::Home);
    file.save(&session).expect("save session");

    // simulate a reload: a fresh store reads the same state back
    let reloaded = SessionFile::new(&path).load().expect("session restored");
    assert_eq!(reloaded, session);

    file.clear().expect("clear session");
    assert!(SessionFile::new(&path).load().is_none());
}

#[test]
fn test_corrupted_session_file_is_discarded() {
    let path = setup_session_file("corrupted");
    std::fs::write(&path, "{not json at all").expect("write corrupted state");

    let file = SessionFile::new(&path);
    assert!(file.load().is_none());

    // the corrupted file was removed, the next load starts from Idle
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_manual_entry_validation() {
    let base = ManualEntryInput {
        date: Some("2024-03-05".into()),
        start_time: Some("09:30".into()),
        end_time: None,
        location: Some("O".into()),
        notes: None,
    };

    assert!(base.validate().is_ok());

    let bad_date = ManualEntryInput {
        date: Some("2024-13-40".into()),
        ..base.clone()
    };
    assert!(matches!(
        bad_date.validate().unwrap_err(),
        AppError::InvalidDate(_)
    ));

    let missing_zero = ManualEntryInput {
        start_time: Some("9:30".into()),
        ..base.clone()
    };
    assert!(matches!(
        missing_zero.validate().unwrap_err(),
        AppError::InvalidTime(_)
    ));

    let end_of_day = ManualEntryInput {
        start_time: Some("23:59".into()),
        ..base.clone()
    };
    assert!(end_of_day.validate().is_ok());

    let empty_end = ManualEntryInput {
        end_time: Some("".into()),
        ..base.clone()
    };
    let entry = empty_end.validate().expect("empty end time is optional");
    assert!(entry.end_time.is_none());

    let empty_location = ManualEntryInput {
        location: Some("".into()),
        ..base.clone()
    };
    assert!(matches!(
        empty_location.validate().unwrap_err(),
        AppError::MissingField(_)
    ));

    let unknown_location = ManualEntryInput {
        location: Some("garage".into()),
        ..base
    };
    assert!(matches!(
        unknown_location.validate().unwrap_err(),
        AppError::InvalidLocation(_)
    ));
}

#[test]
fn test_log_entry_wire_format() {
    let entry = LogEntry {
        date: "2024-03-05".into(),
        start_time: "09:15".into(),
        end_time: None,
        location: Location::Home,
        notes: None,
    };

    let json = serde_json::to_value(&entry).expect("serialize entry");
    assert_eq!(json["date"], "2024-03-05");
    assert_eq!(json["startTime"], "09:15");
    assert_eq!(json["location"], "Home");
    // optional fields are omitted, not sent as empty strings
    assert!(json.get("endTime").is_none());
    assert!(json.get("notes").is_none());
}

#[test]
fn test_log_row_wire_format() {
    let row: LogRow = serde_json::from_str(
        r#"{"Date":"2024-03-05","StartTime":"09:15","EndTime":"17:45",
            "Location":"Home","Duration":"8:30","Notes":"a note"}"#,
    )
    .expect("deserialize row");

    assert_eq!(
        row.cells(),
        vec!["2024-03-05", "09:15", "17:45", "Home", "8:30", "a note"]
    );

    // missing fields render as N/A, notes stay blank
    let sparse: LogRow = serde_json::from_str(r#"{"Date":"2024-03-05"}"#).expect("sparse row");
    assert_eq!(
        sparse.cells(),
        vec!["2024-03-05", "N/A", "N/A", "N/A", "N/A", ""]
    );
}

#[test]
fn test_empty_log_renders_single_placeholder_row() {
    let table = log_table(&[]);
    assert_eq!(table.row_count(), 1);
    assert!(table.render().contains("No entries found."));
}

#[test]
fn test_error_table_renders_single_error_row() {
    let table = error_table("HTTP error! Status: 500 Internal Server Error");
    assert_eq!(table.row_count(), 1);
    assert!(
        table
            .render()
            .contains("Error loading data: HTTP error! Status: 500")
    );
}
