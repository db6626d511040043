//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level screens. The backend serves the app from one path, so the
/// active screen lives in a signal rather than the URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Recover,
    Board,
    Tasks,
    Dashboard,
    Chat,
    Profile,
}

impl Screen {
    /// Screens reachable from the nav bar once signed in
    pub const NAV: [Screen; 5] =
        [Screen::Board, Screen::Tasks, Screen::Dashboard, Screen::Chat, Screen::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign In",
            Screen::Recover => "Account Recovery",
            Screen::Board => "Board",
            Screen::Tasks => "Tasks",
            Screen::Dashboard => "Dashboard",
            Screen::Chat => "Chat",
            Screen::Profile => "Profile",
        }
    }

    /// True for every screen behind the sign-in wall
    pub fn requires_session(&self) -> bool {
        !matches!(self, Screen::Auth | Screen::Recover)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active screen - read
    pub screen: ReadSignal<Screen>,
    /// Active screen - write
    set_screen: WriteSignal<Screen>,
    /// Trigger to reload tasks from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch the active screen
    pub fn goto(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
