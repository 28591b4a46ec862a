use crate::session::SessionState;
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{Destination, NavIntent, NavReducer, NavState};
use crate::ui::welcome::{WelcomeIntent, WelcomeReducer, WelcomeState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    nav: NavState,
    welcome: WelcomeState,
    login: LoginState,
    home: HomeState,
}

impl App {
    pub fn new() -> Self {
        Self::with_nav(NavState::default())
    }

    /// Build an app around a restored navigation stack.
    pub fn from_session(session: &SessionState) -> Self {
        let nav = NavState::from_entries(session.stack.clone()).unwrap_or_default();
        Self::with_nav(nav)
    }

    fn with_nav(nav: NavState) -> Self {
        Self {
            should_quit: false,
            nav,
            welcome: WelcomeState::default(),
            login: LoginState::default(),
            home: HomeState::default(),
        }
    }

    /// Snapshot the navigation stack for persistence.
    pub fn session_state(&self) -> SessionState {
        SessionState {
            stack: self.nav.entries().to_vec(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // -- Navigation actions ---------------------------------------------------

    /// The destination currently shown.
    pub fn current(&self) -> Destination {
        self.nav.current()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Navigate forward to `destination`.
    pub fn move_to(&mut self, destination: Destination) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Navigate(destination));
    }

    /// Handle a back press. Returns whether a pop occurred; `false` means
    /// the caller should fall through to the default behavior (exit).
    pub fn up_press(&mut self) -> bool {
        if !self.nav.can_go_back() {
            return false;
        }
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Back);
        true
    }

    // -- Screen state ---------------------------------------------------------

    pub fn welcome(&self) -> &WelcomeState {
        &self.welcome
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn dispatch_welcome(&mut self, intent: WelcomeIntent) {
        dispatch_mvi!(self, welcome, WelcomeReducer, intent);
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_mvi!(self, home, HomeReducer, intent);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
