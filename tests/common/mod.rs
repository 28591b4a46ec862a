//! Shared test utilities.

#![allow(dead_code)]

use bloom::ui::app::App;
use bloom::ui::input::handle_key;
use bloom::ui::nav::Destination;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key press with no modifiers.
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Build an app and drive it to `destination` through the forward-only
/// screen order (Welcome → Login → Main).
pub fn app_at(destination: Destination) -> App {
    let mut app = App::new();
    if destination == Destination::Welcome {
        return app;
    }
    app.move_to(Destination::Login);
    if destination == Destination::Login {
        return app;
    }
    app.move_to(Destination::Main);
    app
}

/// Type a string through the input layer.
pub fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}
