//! UI Components
//!
//! Reusable Leptos components.

mod avatar_upload;
mod board_column;
mod delete_confirm_button;
mod drop_slot;
mod focus_timer;
mod nav_bar;
mod priority_select;
mod progress_bar;
mod task_card;
mod task_editor;
mod task_form;
mod trend_chart;

pub use avatar_upload::AvatarUpload;
pub use board_column::BoardColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_slot::DropSlot;
pub use focus_timer::FocusTimer;
pub use nav_bar::NavBar;
pub use priority_select::PrioritySelect;
pub use progress_bar::ProgressBar;
pub use task_card::TaskCard;
pub use task_editor::TaskEditor;
pub use task_form::NewTaskForm;
pub use trend_chart::TrendChart;
