//! Document View Model
//!
//! Pre-computes the document pane header and decides what the pane body
//! shows. The rasterized page itself stays in the state; the view draws it
//! through the terminal image surface when the content says so.

use gh_history_client::{raw_file_url, viewer_url};

use crate::domain_models::ViewMode;
use crate::state::{AppState, BASE_SCALE};

/// View model for the document pane
#[derive(Debug, Clone)]
pub struct DocumentViewModel {
    /// Pane title, e.g. " Revision abc1234 "
    pub title: String,
    /// Header line, e.g. "Image · Page 2/4 · Zoom 100%"
    pub header: String,
    /// What the pane body shows
    pub content: DocumentContent,
}

/// Body content of the document pane
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentContent {
    /// Nothing selected yet
    Empty { hint: String },
    /// A fetch, decode or render is in flight
    Loading { message: String },
    /// Image mode with a rasterized page ready
    Page,
    /// Native mode; the pane links the hosted viewer
    Viewer { url: String },
    /// The document failed to load or render
    Error { message: String },
}

impl DocumentViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let document = &state.document;

        let title = match state.timeline.active_sha() {
            Some(sha) => {
                let short: String = sha.chars().take(7).collect();
                format!(" Revision {} ", short)
            }
            None => " Document ".to_string(),
        };

        let mut parts = vec![document.mode.to_string()];
        if document.page_count > 0 {
            parts.push(format!("Page {}/{}", document.current_page, document.page_count));
        }
        if document.mode == ViewMode::Image {
            parts.push(format!("Zoom {}%", zoom_percent(document.scale)));
        }
        let header = parts.join(" · ");

        let content = match document.mode {
            ViewMode::Native => match state.timeline.active_sha() {
                Some(sha) => {
                    let raw = raw_file_url(
                        &state.app_config.raw_host,
                        &state.app_config.owner,
                        &state.app_config.repo,
                        sha,
                        &state.app_config.file_path,
                    );
                    DocumentContent::Viewer {
                        url: viewer_url(&state.app_config.viewer_endpoint, &raw),
                    }
                }
                None => DocumentContent::Empty {
                    hint: "Select a revision to display".to_string(),
                },
            },
            ViewMode::Image => {
                if let Some(error) = &document.error {
                    DocumentContent::Error {
                        message: error.clone(),
                    }
                } else if document.opening {
                    DocumentContent::Loading {
                        message: "Opening revision...".to_string(),
                    }
                } else if document.rendering {
                    DocumentContent::Loading {
                        message: "Rendering page...".to_string(),
                    }
                } else if document.rendered.is_some() {
                    DocumentContent::Page
                } else {
                    DocumentContent::Empty {
                        hint: "Select a revision to display".to_string(),
                    }
                }
            }
        };

        Self {
            title,
            header,
            content,
        }
    }
}

/// Zoom percentage shown in the header; the default scale reads as 100%
pub(crate) fn zoom_percent(scale: f32) -> u32 {
    (scale * 100.0 / BASE_SCALE).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_history_client::Commit;
    use image::DynamicImage;
    use pdf_page_viewer::RenderedPage;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn state_with_active(sha: &str) -> AppState {
        let mut state = AppState::default();
        state.timeline.revisions = vec![Commit {
            sha: sha.to_string(),
            message: "Update resume".to_string(),
            author_name: "Renan".to_string(),
            author_date: Utc::now(),
        }];
        state.timeline.active = Some(0);
        state
    }

    #[test]
    fn test_zoom_label_is_relative_to_the_default_scale() {
        assert_eq!(zoom_percent(1.5), 100);
        assert_eq!(zoom_percent(0.75), 50);
        assert_eq!(zoom_percent(3.0), 200);
        assert_eq!(zoom_percent(1.75), 117);
    }

    #[test]
    fn test_header_shows_mode_page_and_zoom() {
        let mut state = state_with_active("abc1234def");
        state.document.page_count = 4;
        state.document.current_page = 2;

        let vm = DocumentViewModel::from_state(&state);
        assert_eq!(vm.header, "Image · Page 2/4 · Zoom 100%");
        assert_eq!(vm.title, " Revision abc1234 ");
    }

    #[test]
    fn test_native_mode_links_the_viewer_for_the_active_revision() {
        let mut state = state_with_active("abc1234def");
        state.document.mode = ViewMode::Native;

        let vm = DocumentViewModel::from_state(&state);
        match vm.content {
            DocumentContent::Viewer { url } => {
                assert!(url.starts_with(&format!("{}?file=", state.app_config.viewer_endpoint)));
                assert!(url.contains("abc1234def"));
                // The embedded raw URL is percent-encoded
                assert!(url.contains("%2F"));
                assert!(!url.split_once("?file=").unwrap().1.contains('/'));
            }
            other => panic!("expected a viewer link, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_takes_precedence_over_a_previous_page() {
        let mut state = state_with_active("abc1234def");
        state.document.rendered = Some(Arc::new(RenderedPage {
            page_number: 1,
            scale: 1.5,
            width: 10,
            height: 10,
            image: DynamicImage::new_rgba8(10, 10),
        }));
        state.document.rendering = true;

        let vm = DocumentViewModel::from_state(&state);
        assert_eq!(
            vm.content,
            DocumentContent::Loading {
                message: "Rendering page...".to_string()
            }
        );
    }

    #[test]
    fn test_errors_take_precedence_over_everything() {
        let mut state = state_with_active("abc1234def");
        state.document.error = Some("HTTP status 404".to_string());
        state.document.opening = true;

        let vm = DocumentViewModel::from_state(&state);
        assert_eq!(
            vm.content,
            DocumentContent::Error {
                message: "HTTP status 404".to_string()
            }
        );
    }

    #[test]
    fn test_nothing_selected_shows_a_hint() {
        let vm = DocumentViewModel::from_state(&AppState::default());
        assert_eq!(vm.title, " Document ");
        assert!(matches!(vm.content, DocumentContent::Empty { .. }));
    }
}
