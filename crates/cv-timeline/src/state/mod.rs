//! Application state module
//!
//! All state the reducers produce and the views read, organized by feature.
//! Everything here is cheap to clone; the render loop works on snapshots.

mod app;
mod branches;
mod document;
mod status_bar;
mod timeline;

pub use app::AppState;
pub use branches::BranchListState;
pub use document::{DocumentState, BASE_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use timeline::TimelineState;
