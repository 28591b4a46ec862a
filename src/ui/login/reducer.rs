use crate::ui::mvi::Reducer;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            LoginIntent::FocusNext => {
                state.focused = match state.focused {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Submit,
                    LoginField::Submit => LoginField::Email,
                };
            }
            LoginIntent::FocusPrev => {
                state.focused = match state.focused {
                    LoginField::Email => LoginField::Submit,
                    LoginField::Password => LoginField::Email,
                    LoginField::Submit => LoginField::Password,
                };
            }
            LoginIntent::TypeChar(ch) => match state.focused {
                LoginField::Email => state.email.push(ch),
                LoginField::Password => state.password.push(ch),
                LoginField::Submit => {}
            },
            LoginIntent::Backspace => match state.focused {
                LoginField::Email => {
                    state.email.pop();
                }
                LoginField::Password => {
                    state.password.pop();
                }
                LoginField::Submit => {}
            },
        }
        state
    }
}
