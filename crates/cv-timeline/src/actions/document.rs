//! Document pane actions

use std::sync::Arc;

use pdf_page_viewer::RenderedPage;

/// Actions for the document pane.
///
/// Fetching, decoding and rasterizing run asynchronously; every started
/// operation is stamped with a generation, and completions for anything but
/// the newest generation are discarded by the reducer.
#[derive(Debug, Clone)]
pub enum DocumentAction {
    /// Fetch and decode the document for a revision
    Open { sha: String },
    /// Document fetch/decode started
    OpenStart { generation: u64, sha: String },
    /// Document decoded, page count known
    Opened {
        generation: u64,
        sha: String,
        page_count: usize,
    },
    /// Document fetch/decode failed, with a user-facing message
    OpenError { generation: u64, error: String },
    /// Show a specific 1-based page
    RenderPage { page: usize },
    /// Show the next page
    NextPage,
    /// Show the previous page
    PreviousPage,
    /// Increase the zoom scale one step
    ZoomIn,
    /// Decrease the zoom scale one step
    ZoomOut,
    /// Page rasterization started
    RenderStart {
        generation: u64,
        page: usize,
        scale: f32,
    },
    /// A page finished rasterizing
    Rendered {
        generation: u64,
        page: Arc<RenderedPage>,
    },
    /// Page rasterization failed, with a user-facing message
    RenderError { generation: u64, error: String },
    /// Toggle between image and native display
    SwitchMode,
    /// Open the hosted viewer for the active revision in the browser
    OpenInViewer,
}
