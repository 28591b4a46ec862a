//! Welcome screen: logo, tagline, and the create-account / log-in choice.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WelcomeIntent;
pub use reducer::WelcomeReducer;
pub use state::{WelcomeButton, WelcomeState};
pub use view::render_welcome;
