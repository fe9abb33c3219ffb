//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod branch;
pub mod loading_state;
pub mod view_mode;

pub use branch::{default_branch_index, BranchCategory};
pub use loading_state::LoadingState;
pub use view_mode::ViewMode;
