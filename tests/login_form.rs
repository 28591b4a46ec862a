mod common;

use bloom::ui::login::{LoginField, LoginIntent, LoginReducer, LoginState};
use bloom::ui::mvi::Reducer;

fn reduce_all(mut state: LoginState, intents: impl IntoIterator<Item = LoginIntent>) -> LoginState {
    for intent in intents {
        state = LoginReducer::reduce(state, intent);
    }
    state
}

#[test]
fn focus_wraps_in_both_directions() {
    let state = reduce_all(
        LoginState::default(),
        [
            LoginIntent::FocusNext,
            LoginIntent::FocusNext,
            LoginIntent::FocusNext,
        ],
    );
    assert_eq!(state.focused, LoginField::Email);

    let state = reduce_all(LoginState::default(), [LoginIntent::FocusPrev]);
    assert_eq!(state.focused, LoginField::Submit);
}

#[test]
fn fields_edit_independently() {
    let state = reduce_all(
        LoginState::default(),
        [
            LoginIntent::TypeChar('a'),
            LoginIntent::FocusNext,
            LoginIntent::TypeChar('b'),
            LoginIntent::TypeChar('c'),
        ],
    );
    assert_eq!(state.email, "a");
    assert_eq!(state.password, "bc");
}

#[test]
fn backspace_on_empty_field_is_a_noop() {
    let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Backspace);
    assert!(state.email.is_empty());
}

#[test]
fn enter_submits_only_from_password_or_button() {
    let mut state = LoginState::default();
    assert!(!state.submits_on_enter());

    state.focused = LoginField::Password;
    assert!(state.submits_on_enter());

    state.focused = LoginField::Submit;
    assert!(state.submits_on_enter());
}
