//! Terminal image surface for the document pane
//!
//! Holds the `ratatui-image` picker and the encode protocol for the page
//! currently on screen. The protocol caches encoded graphics data between
//! frames, so it lives outside the application state and is only rebuilt
//! when a different rendered page arrives.

use std::sync::Arc;

use ratatui::{layout::Rect, Frame};
use ratatui_image::{picker::Picker, protocol::StatefulProtocol, Resize, StatefulImage};

use pdf_page_viewer::RenderedPage;

/// Mutable rendering state for the page image.
///
/// Created once at startup and passed to the draw loop by `&mut`.
pub struct PageImageSurface {
    picker: Picker,
    protocol: Option<StatefulProtocol>,
    shown: Option<Arc<RenderedPage>>,
}

// Manual Debug since Picker and StatefulProtocol don't implement it.
impl std::fmt::Debug for PageImageSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageImageSurface")
            .field("protocol", &self.protocol.as_ref().map(|_| "<StatefulProtocol>"))
            .field("shown", &self.shown)
            .finish()
    }
}

impl PageImageSurface {
    /// Probe the terminal for its graphics capability and cell size.
    ///
    /// When the query fails (not a tty, terminal doesn't answer) fall back
    /// to halfblock rendering with an assumed 8x16 font.
    pub fn new() -> Self {
        let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 16)));
        Self {
            picker,
            protocol: None,
            shown: None,
        }
    }

    /// Draw `page` into `area`, re-encoding only when the page changed.
    pub fn draw(&mut self, page: &Arc<RenderedPage>, area: Rect, f: &mut Frame) {
        let stale = match &self.shown {
            Some(shown) => !Arc::ptr_eq(shown, page),
            None => true,
        };
        if stale {
            self.protocol = Some(self.picker.new_resize_protocol(page.image.clone()));
            self.shown = Some(Arc::clone(page));
        }

        if let Some(protocol) = self.protocol.as_mut() {
            let image = StatefulImage::default().resize(Resize::Fit(None));
            f.render_stateful_widget(image, area, protocol);

            if let Err(e) = protocol.last_encoding_result().unwrap_or(Ok(())) {
                log::error!("Page image encoding failed: {}", e);
            }
        }
    }

    /// Drop the cached protocol so the next page starts from scratch.
    ///
    /// Called when the pane shows something other than a page, otherwise a
    /// later draw of the same `Arc` would reuse a protocol sized for an
    /// area that no longer exists.
    pub fn reset(&mut self) {
        self.protocol = None;
        self.shown = None;
    }
}

impl Default for PageImageSurface {
    fn default() -> Self {
        Self::new()
    }
}
