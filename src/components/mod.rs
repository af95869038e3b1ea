//! UI Components
//!
//! Reusable Leptos components.

mod badges;
mod confirm_dialog;
mod feedback;
mod fields;
mod nav_bar;

pub use badges::{CategoryBadge, GoalStatusBadge, MedicationStatusBadge, VisitStatusBadge};
pub use confirm_dialog::{ConfirmDialog, DeletePrompt, DialogAction};
pub use feedback::{ErrorText, Spinner, SubmitMessage};
pub use fields::{BoundInput, BoundTextArea, PersonSelect};
pub use nav_bar::NavBar;
