//! hayro-based document backend
//!
//! Decodes PDF bytes with the pure-Rust `hayro` rasterizer. hayro borrows
//! from the backing buffer while parsed, so the backend keeps the raw bytes
//! and re-parses per render; parsing is cheap next to rasterization.

use crate::document::{DocumentBackend, RenderRequest, RenderedPage, ViewerError};
use hayro::{InterpreterSettings, Pdf, RenderSettings};
use log::debug;
use std::sync::Arc;

/// An opened PDF document backed by hayro
pub struct HayroBackend {
    data: Vec<u8>,
    page_count: usize,
}

impl std::fmt::Debug for HayroBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HayroBackend")
            .field("data", &format!("<{} bytes>", self.data.len()))
            .field("page_count", &self.page_count)
            .finish()
    }
}

impl HayroBackend {
    /// Decode PDF bytes and count pages
    ///
    /// Fails with `ViewerError::Decode` when the bytes are not a parseable
    /// PDF.
    pub fn open(bytes: Vec<u8>) -> Result<Self, ViewerError> {
        let pdf = parse(&bytes)?;
        let page_count = pdf.pages().len();
        debug!("Opened document: {} pages, {} bytes", page_count, bytes.len());

        Ok(Self {
            data: bytes,
            page_count,
        })
    }
}

fn parse(bytes: &[u8]) -> Result<Pdf, ViewerError> {
    let arc_data: Arc<dyn AsRef<[u8]> + Send + Sync> = Arc::new(bytes.to_vec());
    Pdf::new(arc_data).map_err(|e| ViewerError::Decode(format!("{:?}", e)))
}

impl DocumentBackend for HayroBackend {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn render_page(&self, request: &RenderRequest) -> Result<RenderedPage, ViewerError> {
        if request.page_number == 0 || request.page_number > self.page_count {
            return Err(ViewerError::PageOutOfRange {
                page: request.page_number,
                total: self.page_count,
            });
        }

        let pdf = parse(&self.data)?;
        let pages = pdf.pages();
        let page = pages
            .get(request.page_number - 1)
            .ok_or(ViewerError::PageOutOfRange {
                page: request.page_number,
                total: self.page_count,
            })?;

        let interpreter_settings = InterpreterSettings::default();
        let render_settings = RenderSettings {
            x_scale: request.scale,
            y_scale: request.scale,
            ..Default::default()
        };

        let pixmap = hayro::render(page, &interpreter_settings, &render_settings);
        let png_data = pixmap.take_png();
        let image = image::load_from_memory(&png_data).map_err(|e| ViewerError::Render {
            page: request.page_number,
            reason: e.to_string(),
        })?;

        debug!(
            "Rendered page {}/{} at scale {} ({}x{})",
            request.page_number,
            self.page_count,
            request.scale,
            image.width(),
            image.height()
        );

        Ok(RenderedPage {
            page_number: request.page_number,
            scale: request.scale,
            width: image.width(),
            height: image.height(),
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a structurally valid single-page PDF with computed xref offsets
    fn minimal_pdf() -> Vec<u8> {
        let mut buf = Vec::new();
        let mut offsets = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        offsets.push(buf.len());
        buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");
        offsets.push(buf.len());
        buf.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");
        offsets.push(buf.len());
        buf.extend_from_slice(
            b"3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>\nendobj\n",
        );
        let xref_pos = buf.len();
        buf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        buf.extend_from_slice(b"trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n");
        buf.extend_from_slice(xref_pos.to_string().as_bytes());
        buf.extend_from_slice(b"\n%%EOF\n");
        buf
    }

    #[test]
    fn test_open_rejects_garbage() {
        let result = HayroBackend::open(b"this is not a pdf".to_vec());
        assert!(matches!(result, Err(ViewerError::Decode(_))));
    }

    #[test]
    fn test_open_counts_pages() {
        let backend = HayroBackend::open(minimal_pdf()).unwrap();
        assert_eq!(backend.page_count(), 1);
    }

    #[test]
    fn test_render_page_out_of_range() {
        let backend = HayroBackend::open(minimal_pdf()).unwrap();

        let result = backend.render_page(&RenderRequest {
            page_number: 2,
            scale: 1.0,
        });
        assert!(matches!(
            result,
            Err(ViewerError::PageOutOfRange { page: 2, total: 1 })
        ));

        let result = backend.render_page(&RenderRequest {
            page_number: 0,
            scale: 1.0,
        });
        assert!(matches!(result, Err(ViewerError::PageOutOfRange { .. })));
    }

    #[test]
    fn test_render_first_page() {
        let backend = HayroBackend::open(minimal_pdf()).unwrap();
        let page = backend
            .render_page(&RenderRequest {
                page_number: 1,
                scale: 1.0,
            })
            .unwrap();

        assert_eq!(page.page_number, 1);
        assert!(page.width > 0);
        assert!(page.height > 0);
    }
}
