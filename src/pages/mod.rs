//! Screen Components
//!
//! One module per navigable screen. Screens fetch their own data on
//! entry and abort in-flight requests when they unmount.

mod auth;
mod board;
mod chat;
mod dashboard;
mod profile;
mod recover;
mod tasks;

pub use auth::AuthPage;
pub use board::BoardPage;
pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
pub use recover::RecoverPage;
pub use tasks::TasksPage;
