use crate::ui::mvi::UiState;

/// The two actions offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeButton {
    #[default]
    CreateAccount,
    LogIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WelcomeState {
    pub focused: WelcomeButton,
}

impl UiState for WelcomeState {}
