use crate::ui::mvi::UiState;

/// Focusable elements of the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focused: LoginField,
}

impl UiState for LoginState {}

impl LoginState {
    /// True when Enter should submit the form from the current focus.
    /// Mirrors the form's keyboard actions: the password field submits,
    /// the email field only advances focus.
    pub fn submits_on_enter(&self) -> bool {
        matches!(self.focused, LoginField::Password | LoginField::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_focus_is_email() {
        let state = LoginState::default();
        assert_eq!(state.focused, LoginField::Email);
        assert!(!state.submits_on_enter());
    }

    #[test]
    fn password_and_submit_accept_enter() {
        let mut state = LoginState::default();
        state.focused = LoginField::Password;
        assert!(state.submits_on_enter());
        state.focused = LoginField::Submit;
        assert!(state.submits_on_enter());
    }
}
