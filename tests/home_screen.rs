mod common;

use bloom::data::PLANTS;
use bloom::ui::home::{HomeIntent, HomeReducer, HomeState};
use bloom::ui::input::handle_key;
use bloom::ui::mvi::Reducer;
use bloom::ui::nav::Destination;
use common::{app_at, press, type_str};
use crossterm::event::KeyCode;

#[test]
fn checkboxes_track_each_plant_independently() {
    let mut state = HomeState::default();
    state = HomeReducer::reduce(state, HomeIntent::ToggleChecked);
    state = HomeReducer::reduce(state, HomeIntent::SelectDown);
    state = HomeReducer::reduce(state, HomeIntent::SelectDown);
    state = HomeReducer::reduce(state, HomeIntent::ToggleChecked);

    let expected: Vec<bool> = (0..PLANTS.len()).map(|i| i == 0 || i == 2).collect();
    assert_eq!(state.checked, expected);
}

#[test]
fn search_keyword_edits_through_the_input_layer() {
    let mut app = app_at(Destination::Main);
    handle_key(&mut app, press(KeyCode::Char('/')));
    type_str(&mut app, "monstera");
    assert_eq!(app.home().keyword, "monstera");

    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.home().keyword, "monster");

    handle_key(&mut app, press(KeyCode::Enter));
    assert!(!app.home().search_focused);
}

#[test]
fn slash_outside_search_does_not_edit_keyword() {
    let mut app = app_at(Destination::Main);
    handle_key(&mut app, press(KeyCode::Char('m')));
    assert!(app.home().keyword.is_empty());
}

#[test]
fn theme_strip_moves_with_arrow_keys() {
    let mut app = app_at(Destination::Main);
    handle_key(&mut app, press(KeyCode::Right));
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.home().theme_index, 2);
    handle_key(&mut app, press(KeyCode::Left));
    assert_eq!(app.home().theme_index, 1);
}

#[test]
fn esc_from_search_still_goes_back() {
    // The back signal is handled before screen-local input: Esc pops the
    // stack even while the search field has focus.
    let mut app = app_at(Destination::Main);
    handle_key(&mut app, press(KeyCode::Char('/')));
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.current(), Destination::Login);
}
