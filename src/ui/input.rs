use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::home::HomeIntent;
use crate::ui::login::LoginIntent;
use crate::ui::nav::Destination;
use crate::ui::welcome::{WelcomeButton, WelcomeIntent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The platform back signal. Handled before any screen-local input:
    // pop the stack, or fall through to the default behavior (exit) at
    // the root.
    if matches!(key.code, KeyCode::Esc) {
        if !app.up_press() {
            app.request_quit();
        }
        return;
    }

    match app.current() {
        Destination::Welcome => welcome_key(app, key),
        Destination::Login => login_key(app, key),
        Destination::Main => home_key(app, key),
    }
}

fn welcome_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.dispatch_welcome(WelcomeIntent::FocusPrev),
        KeyCode::Down | KeyCode::Tab => app.dispatch_welcome(WelcomeIntent::FocusNext),
        KeyCode::Enter => match app.welcome().focused {
            WelcomeButton::LogIn => app.move_to(Destination::Login),
            // Inert in the demo, like the original.
            WelcomeButton::CreateAccount => {}
        },
        _ => {}
    }
}

fn login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Enter => {
            if app.login().submits_on_enter() {
                app.move_to(Destination::Main);
            } else {
                app.dispatch_login(LoginIntent::FocusNext);
            }
        }
        KeyCode::Char(ch) if is_text_input(key) => {
            app.dispatch_login(LoginIntent::TypeChar(ch));
        }
        _ => {}
    }
}

fn home_key(app: &mut App, key: KeyEvent) {
    if app.home().search_focused {
        match key.code {
            KeyCode::Enter => app.dispatch_home(HomeIntent::BlurSearch),
            KeyCode::Backspace => app.dispatch_home(HomeIntent::Backspace),
            KeyCode::Up => app.dispatch_home(HomeIntent::SelectUp),
            KeyCode::Down => app.dispatch_home(HomeIntent::SelectDown),
            KeyCode::Char(ch) if is_text_input(key) => {
                app.dispatch_home(HomeIntent::TypeChar(ch));
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.dispatch_home(HomeIntent::FocusSearch),
        KeyCode::Up => app.dispatch_home(HomeIntent::SelectUp),
        KeyCode::Down => app.dispatch_home(HomeIntent::SelectDown),
        KeyCode::Left => app.dispatch_home(HomeIntent::ThemePrev),
        KeyCode::Right => app.dispatch_home(HomeIntent::ThemeNext),
        KeyCode::Char(' ') | KeyCode::Enter => app.dispatch_home(HomeIntent::ToggleChecked),
        _ => {}
    }
}

fn is_text_input(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
