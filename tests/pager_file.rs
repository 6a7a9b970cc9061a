//! End-to-end paging over a delimited file on disk.
//!
//! Drives `TuiApp` with key events against a `TestBackend` and checks the
//! rendered screen after window rebuilds.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use csvpeek::config::KeyBindings;
use csvpeek::model::{AppError, Delimiter, SourceError};
use csvpeek::source::FileSource;
use csvpeek::state::PagerSettings;
use csvpeek::view::{Palette, TuiApp};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs;
use std::path::PathBuf;

/// Write `contents` to a per-process temp file.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("csvpeek_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

fn cities_tsv(rows: usize) -> String {
    let mut data = String::from("city\tpop\n");
    for i in 0..rows {
        data.push_str(&format!("city{}\t{}\n", i, i * 1000));
    }
    data
}

fn open_app(path: &PathBuf, delimiter: Delimiter) -> TuiApp<TestBackend, FileSource> {
    let source = FileSource::new(path, delimiter).unwrap();
    let terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
    let mut app = TuiApp::new(
        terminal,
        source,
        0,
        PagerSettings {
            buffer_size: 10,
            page_size: 10,
        },
        KeyBindings::default(),
        Palette::default(),
    )
    .unwrap();
    app.draw().unwrap();
    app
}

fn press(app: &mut TuiApp<TestBackend, FileSource>, code: KeyCode) -> bool {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap()
}

/// Screen lines with trailing blanks and trailing empty lines removed.
fn screen(app: &TuiApp<TestBackend, FileSource>) -> Vec<String> {
    let buffer = app.terminal().backend().buffer();
    let mut lines: Vec<String> = (0..buffer.area.height)
        .map(|y| {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[test]
fn tsv_file_pages_through_window_rebuilds() {
    let path = temp_file("cities.tsv", &cities_tsv(50));
    let mut app = open_app(&path, Delimiter::TAB);

    insta::assert_debug_snapshot!(screen(&app), @r#"
    [
        "    city  pop",
        "1   city0 0",
        "2   city1 1000",
        "3   city2 2000",
        "4   city3 3000",
    ]
    "#);

    // row 10 lies outside rows 0..=9, so the window is rebuilt around it
    assert!(!press(&mut app, KeyCode::PageDown));
    assert_eq!(app.navigator().cursor().row, 10);
    assert_eq!(app.navigator().rebuilds(), 2);
    assert_eq!(app.navigator().window().first_row(), 5);

    insta::assert_debug_snapshot!(screen(&app), @r#"
    [
        "    city   pop",
        "8   city7  7000",
        "9   city8  8000",
        "10  city9  9000",
        "11  city10 10000",
    ]
    "#);

    press(&mut app, KeyCode::Char('l'));
    insta::assert_debug_snapshot!(screen(&app), @r#"
    [
        "    pop",
        "8   7000",
        "9   8000",
        "10  9000",
        "11  10000",
    ]
    "#);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.navigator().cursor().row, 0);
    assert_eq!(app.navigator().cursor().column, 1);

    assert!(press(&mut app, KeyCode::Char('q')));
    fs::remove_file(&path).unwrap();
}

#[test]
fn page_down_stops_at_last_row_of_file() {
    let path = temp_file("last_row.tsv", &cities_tsv(25));
    let mut app = open_app(&path, Delimiter::TAB);

    for _ in 0..6 {
        press(&mut app, KeyCode::PageDown);
    }

    assert_eq!(app.navigator().cursor().row, 24);
    assert_eq!(app.navigator().row_count(), Some(25));
    assert!(app.navigator().window().covers(app.navigator().cursor()));
    assert_eq!(screen(&app).last().map(String::as_str), Some("25  city24 24000"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn quoted_comma_fields_with_newlines_render_on_one_line() {
    let path = temp_file("quoted.csv", "id,note\n1,\"a, b\"\n2,\"line\r\nbreak\"\n");
    let app = open_app(&path, Delimiter::COMMA);

    insta::assert_debug_snapshot!(screen(&app), @r#"
    [
        "    id note",
        "1   1  a, b",
        "2   2  line⏎break",
    ]
    "#);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_reported_before_paging() {
    let path = std::env::temp_dir().join("csvpeek_definitely_missing_file.csv");

    let err = FileSource::new(&path, Delimiter::COMMA).unwrap_err();
    assert!(matches!(err, SourceError::NotFound { .. }));
}

#[test]
fn malformed_row_surfaces_as_source_error() {
    let mut data = cities_tsv(30);
    data.push_str("lonely\n");
    let path = temp_file("malformed.tsv", &data);
    let mut app = open_app(&path, Delimiter::TAB);

    let result = app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::PageDown,
        KeyModifiers::NONE,
    )));
    assert!(result.is_ok(), "row 30 is not reached by the rebuild around row 10");

    press(&mut app, KeyCode::PageDown);
    let err = app
        .handle_event(Event::Key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Source(SourceError::MalformedRecord { row: Some(30), .. })
    ));

    fs::remove_file(&path).unwrap();
}
