// tests/fetch_session.rs
//
// Fetch against a one-shot local HTTP stub, and how a Session takes the result.
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use attendance_view::config::options::ViewProfile;
use attendance_view::config::state::AppState;
use attendance_view::data::StudentIndex;
use attendance_view::fetch::{fetch_dataset, parse_dataset, FetchError};
use attendance_view::session::Session;

/// Serve exactly one response, then close. Returns the URL to hit.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => req.extend_from_slice(&buf[..n]),
                }
            }
            let resp = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/exec")
}

const BODY: &str = r#"{"DC":[{"Student Name":"Ann","Roll no":"12","Date":"2024-01-05","Time":"09:30:00","Attendance (%)":0.875}],
"OS":[{"Student Name":"Ben"},{"Student Name":"Ann"},{"Roll no":"3"}]}"#;

#[test]
fn fetch_ok_parses_dataset() {
    let url = serve_once("200 OK", BODY);
    let ds = fetch_dataset(&url).unwrap();
    assert_eq!(ds.subject_count(), 2);
    assert_eq!(ds.record_count(), 4);
    assert_eq!(ds.records("DC").unwrap()[0].name(), Some("Ann"));
}

#[test]
fn non_success_status_is_fetch_error() {
    let url = serve_once("500 Internal Server Error", "{}");
    let err = fetch_dataset(&url).unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
    assert_eq!(err.user_message(), "Error fetching attendance data. Please try again later.");
}

#[test]
fn bad_json_is_fetch_error() {
    let url = serve_once("200 OK", "<html>sign in</html>");
    assert!(matches!(fetch_dataset(&url), Err(FetchError::Json(_))));
}

#[test]
fn wrong_shape_is_fetch_error() {
    assert!(parse_dataset(r#"{"DC": {"Student Name": "Ann"}}"#).is_err());
    assert!(parse_dataset(r#"[1, 2, 3]"#).is_err());
}

#[test]
fn unreachable_host_is_fetch_error() {
    // Grab a free port, then close it again
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    assert!(fetch_dataset(&format!("http://127.0.0.1:{port}/")).is_err());
}

#[test]
fn failed_fetch_keeps_previous_dataset() {
    let mut session = Session::new(AppState::default());
    session.apply_fetch(parse_dataset(BODY)).unwrap();
    let before = session.dataset().clone();
    let view_before = session.view().clone();

    let res = session.apply_fetch(Err(FetchError::Status(503)));
    assert!(res.is_err());
    assert_eq!(session.dataset(), &before);
    assert_eq!(session.view(), &view_before);
}

#[test]
fn fresh_session_shows_placeholder_until_data_arrives() {
    let mut session = Session::new(AppState::default());
    assert!(session.dataset().is_empty());
    assert_eq!(session.view().placeholder_message(), Some("No records found for DC"));

    session.apply_fetch(parse_dataset(BODY)).unwrap();
    assert_eq!(session.view().nrows(), 1);
    assert_eq!(session.view().rows()[0][4], "88%");
}

#[test]
fn successful_fetch_replaces_wholesale() {
    let mut session = Session::new(AppState::default());
    session.apply_fetch(parse_dataset(BODY)).unwrap();
    session.apply_fetch(parse_dataset(r#"{"Math":[]}"#)).unwrap();
    assert_eq!(session.dataset().subjects().collect::<Vec<_>>(), vec!["Math"]);
    assert_eq!(session.view().placeholder_message(), Some("No records found for DC"));
}

#[test]
fn student_index_is_unique_and_skips_nameless() {
    let ds = parse_dataset(BODY).unwrap();
    let idx = StudentIndex::build(&ds);
    assert_eq!(idx.names(), &["Ann".to_string(), "Ben".to_string()]);
    assert_eq!(idx.suggest("n", 8), vec!["Ann", "Ben"]);
    assert_eq!(idx.suggest("ANN", 8), Vec::<&str>::new());
    assert_eq!(idx.suggest("", 8), Vec::<&str>::new());
}

#[test]
fn student_index_only_built_when_search_enabled() {
    let mut full = Session::new(AppState::default());
    full.apply_fetch(parse_dataset(BODY)).unwrap();
    assert_eq!(full.students().len(), 2);

    let mut state = AppState::default();
    state.options.profile = ViewProfile::Basic;
    let mut basic = Session::new(state);
    basic.apply_fetch(parse_dataset(BODY)).unwrap();
    assert!(basic.students().is_empty());
}

#[test]
fn selection_changes_rerender_without_refetch() {
    let mut session = Session::new(AppState::default());
    session.apply_fetch(parse_dataset(BODY)).unwrap();

    session.set_subject("OS");
    assert_eq!(session.view().nrows(), 3);

    session.set_query("be");
    assert_eq!(session.view().rows().len(), 1);
    assert_eq!(session.view().rows()[0][0], "Ben");

    session.set_subject("Nope");
    assert_eq!(session.view().placeholder_message(), Some("No records found for Nope"));
    assert_eq!(session.subject_choices(), vec!["Nope", "DC", "OS"]);
}
