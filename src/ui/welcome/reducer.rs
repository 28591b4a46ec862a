use crate::ui::mvi::Reducer;
use crate::ui::welcome::intent::WelcomeIntent;
use crate::ui::welcome::state::{WelcomeButton, WelcomeState};

pub struct WelcomeReducer;

impl Reducer for WelcomeReducer {
    type State = WelcomeState;
    type Intent = WelcomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Two buttons, so next and prev both toggle.
        let focused = match intent {
            WelcomeIntent::FocusNext | WelcomeIntent::FocusPrev => match state.focused {
                WelcomeButton::CreateAccount => WelcomeButton::LogIn,
                WelcomeButton::LogIn => WelcomeButton::CreateAccount,
            },
        };
        WelcomeState { focused }
    }
}
