//! Document pane state

use std::sync::Arc;

use pdf_page_viewer::RenderedPage;

use crate::domain_models::ViewMode;

/// Scale change per zoom step
pub const ZOOM_STEP: f32 = 0.25;
/// Lowest zoom scale; zooming out below this is a no-op
pub const MIN_SCALE: f32 = 0.5;
/// Highest zoom scale; zooming in beyond this is a no-op
pub const MAX_SCALE: f32 = 4.0;
/// Scale the zoom label shows as 100%
pub const BASE_SCALE: f32 = 1.5;

/// Document pane state
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Current display mode
    pub mode: ViewMode,
    /// Sha of the revision the pane shows, or is opening
    pub open_sha: Option<String>,
    /// Page count of the opened document, 0 while nothing is open
    pub page_count: usize,
    /// 1-based page the pane shows, or is rendering
    pub current_page: usize,
    /// Zoom scale, kept across revisions
    pub scale: f32,
    /// A document fetch/decode is in flight
    pub opening: bool,
    /// A page render is in flight
    pub rendering: bool,
    /// Generation of the newest started operation; older completions are stale
    pub generation: u64,
    /// Last rasterized page
    pub rendered: Option<Arc<RenderedPage>>,
    /// Last document error, shown in the pane
    pub error: Option<String>,
}

impl DocumentState {
    /// True while a fetch, decode or render is in flight
    pub fn is_busy(&self) -> bool {
        self.opening || self.rendering
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            open_sha: None,
            page_count: 0,
            current_page: 1,
            scale: BASE_SCALE,
            opening: false,
            rendering: false,
            generation: 0,
            rendered: None,
            error: None,
        }
    }
}
