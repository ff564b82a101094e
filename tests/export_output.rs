// tests/export_output.rs
//
// HTML/CSV output, export paths and CLI flag parsing.
//
use std::fs;
use std::path::PathBuf;

use attendance_view::cli::{emit, parse_args, OutputFormat};
use attendance_view::config::options::{ExportFormat, ExportOptions, ViewProfile};
use attendance_view::config::state::SelectionState;
use attendance_view::session::Session;
use attendance_view::fetch::parse_dataset;
use attendance_view::file::{to_export_string, write_export};
use attendance_view::html::{render_body, render_page};
use attendance_view::view::{render, TableView};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("attendance_view_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn view() -> TableView {
    let ds = parse_dataset(
        r#"{"DC":[
            {"Student Name":"Ann, A.","Roll no":"12","Date":"2024-01-05","Time":"09:30:00","Attendance (%)":0.875},
            {"Student Name":"<b>Bob</b> & co","Roll no":"13"}
        ]}"#,
    )
    .unwrap();
    render(&ds, &SelectionState::new("DC", ""), ViewProfile::Full)
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn html_body_escapes_cells() {
    let html = render_body(&view()).into_string();
    assert!(html.starts_with(r#"<tbody id="attendanceRecords">"#));
    assert!(html.contains("<td>&lt;b&gt;Bob&lt;/b&gt; &amp; co</td>"));
    assert!(!html.contains("<b>Bob</b>"));
    assert_eq!(html.matches("<tr>").count(), 2);
}

#[test]
fn html_placeholder_spans_all_columns() {
    let full = TableView::placeholder(ViewProfile::Full, "No records found for X");
    let basic = TableView::placeholder(ViewProfile::Basic, "No records found for X");
    assert!(render_body(&full).into_string().contains(r#"<td colspan="5">No records found for X</td>"#));
    assert!(render_body(&basic).into_string().contains(r#"<td colspan="4">No records found for X</td>"#));
}

#[test]
fn csv_export_string_quotes_and_headers() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.include_headers = true;
    let txt = to_export_string(&opts, &view(), "DC");
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines[0], "Student Name,Roll No,Date,Time,Attendance");
    assert_eq!(lines[1], "\"Ann, A.\",12,01/05/2024,09:30:00,88%");
    assert_eq!(lines[2], "<b>Bob</b> & co,13,N/A,N/A,N/A");
}

#[test]
fn export_writes_file_with_format_extension() {
    let dir = tmp_dir("export_ext");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("report").to_str().unwrap());
    opts.format = ExportFormat::Html;

    let written = write_export(&opts, &view(), "DC").unwrap();
    assert!(written.to_string_lossy().ends_with("report.html"));
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.starts_with("<!DOCTYPE html>"));
    assert!(contents.contains("<title>Attendance - DC</title>"));
}

#[test]
fn export_keeps_user_extension_and_creates_dirs() {
    let dir = tmp_dir("export_user_ext");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.join("nested/deeper/out.txt").to_str().unwrap());

    let written = write_export(&opts, &view(), "DC").unwrap();
    assert!(written.to_string_lossy().ends_with("out.txt"));
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("Ann, A.\t12\t01/05/2024"));
}

#[test]
fn placeholder_views_are_not_exported() {
    let dir = tmp_dir("export_placeholder");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("empty.csv").to_str().unwrap());
    let empty = TableView::placeholder(ViewProfile::Full, "No records found for DC");
    assert!(write_export(&opts, &empty, "DC").is_err());
    assert!(!dir.join("empty.csv").exists());
}

#[test]
fn default_out_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert!(opts.out_path().to_string_lossy().ends_with("attendance.csv"));
    opts.format = ExportFormat::Html;
    assert!(opts.out_path().to_string_lossy().ends_with("attendance.html"));
}

#[test]
fn cli_flags_fold_into_state() {
    let parsed = parse_args(args(&[
        "--url", "http://localhost/x", "-s", "OS", "-q", "ann",
        "--profile", "basic", "--format", "tsv", "--include-headers", "-o", "out/x.tsv",
    ]))
    .unwrap();
    assert_eq!(parsed.format, OutputFormat::Export(ExportFormat::Tsv));

    let state = parsed.to_state();
    assert_eq!(state.options.source_url, "http://localhost/x");
    assert_eq!(state.options.profile, ViewProfile::Basic);
    assert_eq!(state.selection, SelectionState::new("OS", "ann"));
    assert!(state.options.export.include_headers);
    assert!(state.options.export.out_path().ends_with("x.tsv"));
}

#[test]
fn cli_defaults_and_errors() {
    let parsed = parse_args(Vec::new()).unwrap();
    assert_eq!(parsed.format, OutputFormat::Text);
    assert_eq!(parsed.to_state().selection, SelectionState::default());

    assert!(parse_args(args(&["--format", "pdf"])).is_err());
    assert!(parse_args(args(&["--profile", "fancy"])).is_err());
    assert!(parse_args(args(&["--subject"])).is_err());
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--list-subjects", "--list-students"])).is_err());
}

#[test]
fn cli_delimited_output_refuses_placeholder_view() {
    let parsed = parse_args(args(&["-s", "Nope", "--format", "csv"])).unwrap();
    let mut session = Session::new(parsed.to_state());
    session.apply_fetch(parse_dataset(r#"{"DC":[{"Student Name":"Ann"}]}"#)).unwrap();
    assert!(session.view().is_placeholder());

    let mut buf: Vec<u8> = Vec::new();
    let err = emit(&parsed, &session, &mut buf).unwrap_err();
    assert_eq!(err.to_string(), "Nothing to export");
    assert!(buf.is_empty());

    // Same selection as text still prints the message
    let text = parse_args(args(&["-s", "Nope"])).unwrap();
    let mut buf: Vec<u8> = Vec::new();
    emit(&text, &session, &mut buf).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("No records found for Nope"));
}

#[test]
fn cli_delimited_output_writes_rows() {
    let parsed = parse_args(args(&["--format", "tsv", "--include-headers"])).unwrap();
    let mut session = Session::new(parsed.to_state());
    session.apply_fetch(parse_dataset(r#"{"DC":[{"Student Name":"Ann","Roll no":"12"}]}"#)).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    emit(&parsed, &session, &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("Student Name\tRoll No\tDate\tTime\tAttendance\n"));
    assert!(out.contains("Ann\t12\tN/A\tN/A\tN/A"));
}
