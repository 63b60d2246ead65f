mod common;

use common::dataset_json;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use igvendetta::browser::{BannerReporter, ProfileBrowser};
use igvendetta::config::{Locale, ViewerConfig};
use igvendetta::store::{MemoryStore, Store, USERS_DATA_KEY};
use igvendetta::tui::{Focus, Viewer};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs;

fn viewer_with(json: Option<String>, config: ViewerConfig) -> Viewer<MemoryStore> {
    let mut browser = ProfileBrowser::with_reporter(MemoryStore::new(), BannerReporter::default());
    if let Some(json) = json {
        browser.load_from_text(&json).unwrap();
    }
    Viewer::new(browser, config)
}

fn screen(viewer: &Viewer<MemoryStore>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    terminal.draw(|frame| viewer.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(viewer: &mut Viewer<MemoryStore>, code: KeyCode) -> bool {
    viewer.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(viewer: &mut Viewer<MemoryStore>, text: &str) {
    for c in text.chars() {
        press(viewer, KeyCode::Char(c));
    }
}

#[test]
fn empty_dataset_shows_upload_prompt_without_pagination() {
    let viewer = viewer_with(None, ViewerConfig::default());
    let text = screen(&viewer);
    assert!(text.contains("¡Cargue un archivo JSON para comenzar!"));
    assert!(!text.contains("Página"));
    assert!(!text.contains("Mostrar verificados"));
    assert_eq!(viewer.focus(), Focus::Upload);
}

#[test]
fn key_help_and_status_follow_the_locale() {
    let viewer = viewer_with(None, ViewerConfig::default());
    let text = screen(&viewer);
    assert!(viewer.status().contains("Enter: cargar"));
    assert!(text.contains("Estado"));
    assert!(text.contains("q salir"));
    assert!(!text.contains("Status"));

    let config = ViewerConfig {
        locale: Locale::english(),
        ..ViewerConfig::default()
    };
    let viewer = viewer_with(None, config);
    let text = screen(&viewer);
    assert!(viewer.status().contains("Enter: load"));
    assert!(text.contains("Status"));
    assert!(text.contains("q quit"));
    assert!(!text.contains("Estado"));
}

#[test]
fn next_control_only_on_first_of_two_pages() {
    let mut viewer = viewer_with(Some(dataset_json(13, 0)), ViewerConfig::default());
    let first = screen(&viewer);
    assert!(first.contains("Página 1 de 2 (13 usuarios)"));
    assert!(first.contains("Siguiente"));
    assert!(!first.contains("Anterior"));
    assert!(first.contains("@user11"));
    assert!(!first.contains("@user12"));

    assert!(!press(&mut viewer, KeyCode::Right));
    let second = screen(&viewer);
    assert!(second.contains("Página 2 de 2 (13 usuarios)"));
    assert!(!second.contains("Siguiente"));
    assert!(second.contains("Anterior"));
    assert!(second.contains("@user12"));

    press(&mut viewer, KeyCode::Right);
    assert_eq!(viewer.browser().state().current_page, 2);
    press(&mut viewer, KeyCode::Left);
    assert_eq!(viewer.browser().state().current_page, 1);
}

#[test]
fn toggle_key_filters_verified_accounts() {
    let mut viewer = viewer_with(Some(dataset_json(2, 3)), ViewerConfig::default());
    assert!(screen(&viewer).contains("Mostrar verificados: Sí"));

    press(&mut viewer, KeyCode::Char('v'));
    let text = screen(&viewer);
    assert!(text.contains("Mostrar verificados: No"));
    assert!(text.contains("Página 1 de 1 (3 usuarios)"));
    assert!(!text.contains("@user0"));
    assert!(text.contains("@user2"));
}

#[test]
fn plain_variant_has_no_toggle() {
    let config = ViewerConfig {
        filtering: false,
        locale: Locale::english(),
        ..ViewerConfig::default()
    };
    let mut viewer = viewer_with(Some(dataset_json(2, 3)), config);
    press(&mut viewer, KeyCode::Char('v'));
    let text = screen(&viewer);
    assert!(!text.contains("Show verified"));
    assert!(text.contains("Page 1 of 1 (5 users)"));
    assert!(viewer.browser().state().show_verified);
}

#[test]
fn typed_path_is_loaded_in_background() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("following.json");
    fs::write(&path, dataset_json(1, 14)).unwrap();

    let mut viewer = viewer_with(None, ViewerConfig::default());
    type_text(&mut viewer, path.to_str().unwrap());
    press(&mut viewer, KeyCode::Enter);
    viewer.wait_for_reads();

    assert_eq!(viewer.pending_reads(), 0);
    assert_eq!(viewer.browser().dataset().len(), 15);
    assert_eq!(viewer.focus(), Focus::Grid);
    assert!(viewer.status().contains("15 usuarios cargados"));
    let stored = viewer.browser().store().get(USERS_DATA_KEY).unwrap();
    assert!(stored.is_some());
    assert!(screen(&viewer).contains("¡Cargue un nuevo archivo JSON!"));
}

#[test]
fn reads_commit_in_completion_order() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first.json");
    let second = tmp.path().join("second.json");
    fs::write(&first, dataset_json(3, 0)).unwrap();
    fs::write(&second, dataset_json(0, 5)).unwrap();

    let mut viewer = viewer_with(None, ViewerConfig::default());
    viewer.open(first);
    viewer.wait_for_reads();
    viewer.open(second);
    viewer.wait_for_reads();
    assert_eq!(viewer.browser().dataset().len(), 5);
    assert_eq!(viewer.drain_reads(), 0);
}

#[test]
fn bad_file_keeps_previous_dataset_and_shows_banner() {
    let tmp = tempfile::tempdir().unwrap();
    let broken = tmp.path().join("broken.json");
    fs::write(&broken, "[{\"id\": ").unwrap();

    let mut viewer = viewer_with(Some(dataset_json(4, 0)), ViewerConfig::default());
    let stored = viewer.browser().store().get(USERS_DATA_KEY).unwrap();
    viewer.open(broken);
    viewer.wait_for_reads();

    assert_eq!(viewer.browser().dataset().len(), 4);
    assert_eq!(viewer.browser().store().get(USERS_DATA_KEY).unwrap(), stored);
    assert!(viewer.status().starts_with("Error: "));
    assert!(viewer.status().contains("invalid profile data"));
}

#[test]
fn quiet_errors_leave_status_alone() {
    let config = ViewerConfig {
        surface_errors: false,
        ..ViewerConfig::default()
    };
    let tmp = tempfile::tempdir().unwrap();
    let notes = tmp.path().join("notes.txt");
    fs::write(&notes, "[]").unwrap();

    let mut viewer = viewer_with(None, config);
    viewer.open(notes.clone());
    viewer.wait_for_reads();
    assert!(!viewer.status().contains("Error"));
    assert!(viewer.status().contains("notes.txt"));
    assert!(viewer.browser().dataset().is_empty());
}

#[test]
fn quit_keys_depend_on_focus() {
    let mut viewer = viewer_with(None, ViewerConfig::default());
    assert!(!press(&mut viewer, KeyCode::Char('q')));
    assert!(!press(&mut viewer, KeyCode::Esc));
    assert_eq!(viewer.focus(), Focus::Upload);
    assert!(viewer.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));

    let mut viewer = viewer_with(Some(dataset_json(1, 0)), ViewerConfig::default());
    assert_eq!(viewer.focus(), Focus::Grid);
    press(&mut viewer, KeyCode::Tab);
    assert_eq!(viewer.focus(), Focus::Upload);
    type_text(&mut viewer, "abc");
    press(&mut viewer, KeyCode::Backspace);
    assert!(screen(&viewer).contains("ab_"));
    press(&mut viewer, KeyCode::Esc);
    assert_eq!(viewer.focus(), Focus::Grid);
    assert!(press(&mut viewer, KeyCode::Char('q')));
}
