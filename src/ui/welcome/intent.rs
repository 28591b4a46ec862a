use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum WelcomeIntent {
    /// Move focus to the next button (wraps).
    FocusNext,
    /// Move focus to the previous button (wraps).
    FocusPrev,
}

impl Intent for WelcomeIntent {}
