//! Document backend trait and render types
//!
//! The backend seam keeps the rasterizer swappable and lets tests drive the
//! consumer with a fake document that never touches the network.

use image::DynamicImage;
use thiserror::Error;

/// Errors produced while loading or rendering a document.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The document bytes could not be fetched (network failure, non-2xx
    /// response, unreachable URL).
    #[error("Failed to fetch document: {0}")]
    Fetch(String),

    /// The fetched bytes are not a renderable document.
    #[error("Failed to decode document: {0}")]
    Decode(String),

    /// A page failed to rasterize.
    #[error("Failed to render page {page}: {reason}")]
    Render {
        /// 1-based page number that failed
        page: usize,
        /// Underlying error message
        reason: String,
    },

    /// The requested page does not exist in the document.
    #[error("Page {page} out of range (document has {total} pages)")]
    PageOutOfRange {
        /// 1-based page number that was requested
        page: usize,
        /// Total pages in the document
        total: usize,
    },
}

/// A request to rasterize one page.
///
/// Page numbers are 1-based, matching how viewers present them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    /// 1-based page number
    pub page_number: usize,

    /// Zoom scale; 1.0 renders at the document's native 72 dpi size
    pub scale: f32,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            scale: 1.0,
        }
    }
}

/// One rasterized page.
#[derive(Clone)]
pub struct RenderedPage {
    /// 1-based page number this image shows
    pub page_number: usize,

    /// Scale the page was rendered at
    pub scale: f32,

    /// Pixel width of the image
    pub width: u32,

    /// Pixel height of the image
    pub height: u32,

    /// The rasterized page
    pub image: DynamicImage,
}

// Manual Debug so logging a rendered page never dumps the pixel buffer.
impl std::fmt::Debug for RenderedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedPage")
            .field("page_number", &self.page_number)
            .field("scale", &self.scale)
            .field("image", &format!("<{}x{} px>", self.width, self.height))
            .finish()
    }
}

/// An opened document that can rasterize its pages.
///
/// Implementations are `Send + Sync` so an opened document can be shared
/// with render tasks. `render_page` is synchronous and CPU-bound.
pub trait DocumentBackend: Send + Sync {
    /// Total number of pages in the document
    fn page_count(&self) -> usize;

    /// Rasterize one page
    ///
    /// Fails with `ViewerError::PageOutOfRange` when `request.page_number`
    /// is 0 or greater than `page_count()`, and `ViewerError::Render` when
    /// the page exists but could not be rasterized.
    fn render_page(&self, request: &RenderRequest) -> Result<RenderedPage, ViewerError>;
}
