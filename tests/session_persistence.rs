mod common;

use bloom::session::SessionState;
use bloom::ui::app::App;
use bloom::ui::nav::Destination;
use tempfile::TempDir;

#[test]
fn save_and_reload_session() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");

    let mut app = App::new();
    app.move_to(Destination::Login);
    app.move_to(Destination::Main);

    app.session_state().save_to(&session_path).unwrap();

    let restored = SessionState::load_from(&session_path).unwrap();
    assert_eq!(
        restored.stack,
        vec![Destination::Welcome, Destination::Login, Destination::Main]
    );

    let restored_app = App::from_session(&restored);
    assert_eq!(restored_app.current(), Destination::Main);
    assert_eq!(restored_app.nav().entries(), app.nav().entries());
}

#[test]
fn restored_stack_rewires_back_handling() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");

    let mut app = App::new();
    app.move_to(Destination::Login);
    app.session_state().save_to(&session_path).unwrap();

    let restored = SessionState::load_from(&session_path).unwrap();
    let mut restored_app = App::from_session(&restored);

    // Depth 2: one back-press pops, the next falls through.
    assert!(restored_app.up_press());
    assert_eq!(restored_app.current(), Destination::Welcome);
    assert!(!restored_app.up_press());
}

#[test]
fn missing_file_yields_default_session() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("nope").join("session.toml");

    let session = SessionState::load_from(&session_path).unwrap();
    assert_eq!(session.stack, vec![Destination::Welcome]);
}

#[test]
fn save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("subdir").join("session.toml");

    SessionState::default().save_to(&session_path).unwrap();
    assert!(session_path.exists());

    // Read back raw TOML to verify the flat identifier list
    let content = std::fs::read_to_string(&session_path).unwrap();
    assert!(content.contains("stack"));
    assert!(content.contains("welcome"));
}

#[test]
fn unparseable_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");
    std::fs::write(&session_path, "stack = [[[").unwrap();

    let result = SessionState::load_from(&session_path);
    assert!(result.is_err());
}

#[test]
fn unknown_destination_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");
    std::fs::write(&session_path, r#"stack = ["welcome", "garage"]"#).unwrap();

    let result = SessionState::load_from(&session_path);
    assert!(result.is_err());
}

#[test]
fn empty_stack_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");
    std::fs::write(&session_path, "stack = []").unwrap();

    let session = SessionState::load_from(&session_path).unwrap();
    assert_eq!(session.stack, vec![Destination::Welcome]);
}

#[test]
fn non_welcome_root_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");
    std::fs::write(&session_path, r#"stack = ["main", "login"]"#).unwrap();

    let session = SessionState::load_from(&session_path).unwrap();
    assert_eq!(session.stack, vec![Destination::Welcome]);
}

#[test]
fn save_overwrites_existing_session() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.toml");

    let mut app = App::new();
    app.move_to(Destination::Login);
    app.session_state().save_to(&session_path).unwrap();

    assert!(app.up_press());
    app.session_state().save_to(&session_path).unwrap();

    let restored = SessionState::load_from(&session_path).unwrap();
    assert_eq!(restored.stack, vec![Destination::Welcome]);
}
