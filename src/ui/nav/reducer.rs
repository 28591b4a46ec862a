use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            NavIntent::Navigate(destination) => {
                tracing::debug!(?destination, depth = state.depth(), "navigate");
                state.push(destination);
            }
            NavIntent::Back => {
                // Guarded pop keeps the stack non-empty.
                state.pop();
            }
        }
        state
    }
}
