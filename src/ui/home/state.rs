use crate::data::{PLANTS, THEMES};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    /// Search keyword. Demo only: filters nothing, mirrors the original.
    pub keyword: String,
    /// True while keystrokes go to the search field.
    pub search_focused: bool,
    /// Selected entry in the browse-themes strip.
    pub theme_index: usize,
    /// Selected row in the plant list.
    pub plant_index: usize,
    /// Checkbox per plant, indexed like [`PLANTS`].
    pub checked: Vec<bool>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            search_focused: false,
            theme_index: 0,
            plant_index: 0,
            checked: vec![false; PLANTS.len()],
        }
    }
}

impl UiState for HomeState {}

impl HomeState {
    pub fn theme_count(&self) -> usize {
        THEMES.len()
    }

    pub fn plant_count(&self) -> usize {
        PLANTS.len()
    }
}
