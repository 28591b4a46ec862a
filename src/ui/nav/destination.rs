use serde::{Deserialize, Serialize};

/// Every screen the navigator can place on its stack.
///
/// Serializes as a flat string identifier so a saved stack is a plain
/// ordered list in the session file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Landing screen with the create-account / log-in choice.
    Welcome,
    /// Email + password form.
    Login,
    /// Home screen: search, themes, and the garden list.
    Main,
}

impl Destination {
    /// Title shown in the header for this screen.
    pub fn title(self) -> &'static str {
        match self {
            Destination::Welcome => "Welcome",
            Destination::Login => "Log in",
            Destination::Main => "Home",
        }
    }
}
