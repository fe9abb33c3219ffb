//! Actions module
//!
//! Every state change in the application starts as an action. Actions are
//! tagged by the domain they belong to; middleware translate, enrich, or
//! consume them before the surviving actions reach the reducers.

pub mod branches;
pub mod document;
pub mod global;
pub mod status_bar;
pub mod timeline;

pub use branches::BranchAction;
pub use document::DocumentAction;
pub use global::GlobalAction;
pub use status_bar::StatusBarAction;
pub use timeline::TimelineAction;

/// Root action enum, tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Branch strip actions
    Branches(BranchAction),
    /// Revision timeline actions
    Timeline(TimelineAction),
    /// Document pane actions
    Document(DocumentAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}
