use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            HomeIntent::FocusSearch => state.search_focused = true,
            HomeIntent::BlurSearch => state.search_focused = false,
            HomeIntent::TypeChar(ch) => {
                if state.search_focused {
                    state.keyword.push(ch);
                }
            }
            HomeIntent::Backspace => {
                if state.search_focused {
                    state.keyword.pop();
                }
            }
            HomeIntent::SelectUp => {
                state.search_focused = false;
                state.plant_index = state.plant_index.saturating_sub(1);
            }
            HomeIntent::SelectDown => {
                state.search_focused = false;
                let last = state.plant_count().saturating_sub(1);
                state.plant_index = (state.plant_index + 1).min(last);
            }
            HomeIntent::ToggleChecked => {
                let index = state.plant_index;
                if let Some(checked) = state.checked.get_mut(index) {
                    *checked = !*checked;
                }
            }
            HomeIntent::ThemePrev => {
                state.theme_index = state.theme_index.saturating_sub(1);
            }
            HomeIntent::ThemeNext => {
                let last = state.theme_count().saturating_sub(1);
                state.theme_index = (state.theme_index + 1).min(last);
            }
        }
        state
    }
}
