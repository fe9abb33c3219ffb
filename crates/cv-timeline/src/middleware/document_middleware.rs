//! Document middleware
//!
//! Owns the PDF pipeline: fetches the raw file for a revision, decodes it,
//! and rasterizes pages on a tokio runtime owned by this middleware. The
//! decoded document lives in a slot shared with the render tasks, never in
//! the application state.
//!
//! Every started operation is stamped with a monotonically increasing
//! generation. Completions re-enter the chain carrying their generation, and
//! the reducer drops everything that is not the newest, so rapid paging or
//! zooming always settles on the last request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gh_history_client::{raw_file_url, viewer_url};
use pdf_page_viewer::{DocumentBackend, DocumentProvider, RenderRequest};
use tokio::runtime::Runtime;
use tokio::sync::Mutex as TokioMutex;

use crate::actions::{Action, DocumentAction, StatusBarAction, TimelineAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::ViewMode;
use crate::middleware::Middleware;
use crate::state::{AppState, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use crate::utils::browser::open_url;

/// The currently open document, shared with render tasks
struct OpenDocument {
    generation: u64,
    backend: Arc<dyn DocumentBackend>,
}

pub struct DocumentMiddleware {
    runtime: Runtime,
    provider: Arc<dyn DocumentProvider>,
    /// Generation of the newest started operation
    latest_generation: Arc<AtomicU64>,
    current: Arc<TokioMutex<Option<OpenDocument>>>,
}

impl DocumentMiddleware {
    pub fn new(provider: Arc<dyn DocumentProvider>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            provider,
            latest_generation: Arc::new(AtomicU64::new(0)),
            current: Arc::new(TokioMutex::new(None)),
        }
    }

    fn next_generation(&self) -> u64 {
        self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch, decode and show the first page of one revision.
    fn open_document(&self, sha: &str, state: &AppState, dispatcher: &Dispatcher) {
        let generation = self.next_generation();
        let url = raw_file_url(
            &state.app_config.raw_host,
            &state.app_config.owner,
            &state.app_config.repo,
            sha,
            &state.app_config.file_path,
        );
        let scale = state.document.scale;
        let provider = Arc::clone(&self.provider);
        let current = Arc::clone(&self.current);
        let dispatcher = dispatcher.clone();
        let sha = sha.to_string();
        let short_sha: String = sha.chars().take(7).collect();

        dispatcher.dispatch(Action::Document(DocumentAction::OpenStart {
            generation,
            sha: sha.clone(),
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Opening revision {}...", short_sha),
            "Document",
        )));

        self.runtime.spawn(async move {
            let backend = match provider.open(&url).await {
                Ok(backend) => backend,
                Err(e) => {
                    log::error!("Failed to open revision {}: {}", sha, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Failed to open document: {}", e),
                        "Document",
                    )));
                    dispatcher.dispatch(Action::Document(DocumentAction::OpenError {
                        generation,
                        error: e.to_string(),
                    }));
                    return;
                }
            };
            let page_count = backend.page_count();

            {
                let mut slot = current.lock().await;
                if slot
                    .as_ref()
                    .is_some_and(|open| open.generation > generation)
                {
                    log::debug!("Open {} superseded before completion", generation);
                    return;
                }
                *slot = Some(OpenDocument {
                    generation,
                    backend: Arc::clone(&backend),
                });
            }

            log::info!("Opened revision {} with {} pages", sha, page_count);
            dispatcher.dispatch(Action::Document(DocumentAction::Opened {
                generation,
                sha,
                page_count,
            }));
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                format!("Opened revision {}", short_sha),
                "Document",
            )));

            // Every freshly opened document shows its first page
            dispatcher.dispatch(Action::Document(DocumentAction::RenderStart {
                generation,
                page: 1,
                scale,
            }));
            render_with(backend, generation, 1, scale, &dispatcher).await;
        });
    }

    /// Render `page` at `scale` from the document slot.
    ///
    /// `RenderStart` goes out synchronously so starts are ordered the way
    /// the user issued them; only the rasterization runs in the background.
    fn start_render(&self, page: usize, scale: f32, dispatcher: &Dispatcher) {
        let generation = self.next_generation();
        let current = Arc::clone(&self.current);
        let dispatcher = dispatcher.clone();

        dispatcher.dispatch(Action::Document(DocumentAction::RenderStart {
            generation,
            page,
            scale,
        }));

        self.runtime.spawn(async move {
            let backend = {
                let slot = current.lock().await;
                match slot.as_ref() {
                    Some(open) => Arc::clone(&open.backend),
                    None => {
                        log::warn!("Render requested with no open document");
                        return;
                    }
                }
            };
            render_with(backend, generation, page, scale, &dispatcher).await;
        });
    }

    /// Validate a page change against the current state and start the render.
    fn change_page(&self, state: &AppState, page: usize, dispatcher: &Dispatcher) {
        let document = &state.document;
        if document.mode != ViewMode::Image || document.page_count == 0 {
            log::debug!("Ignoring page change, no document on display");
            return;
        }
        if page < 1 || page > document.page_count {
            log::debug!("Page {} out of range 1..={}", page, document.page_count);
            return;
        }
        self.start_render(page, document.scale, dispatcher);
    }

    /// Validate a zoom change against the scale bounds and start the render.
    fn change_zoom(&self, state: &AppState, step_in: bool, dispatcher: &Dispatcher) {
        let document = &state.document;
        if document.mode != ViewMode::Image || document.page_count == 0 {
            log::debug!("Ignoring zoom change, no document on display");
            return;
        }
        let target = if step_in {
            document.scale + ZOOM_STEP
        } else {
            document.scale - ZOOM_STEP
        };
        if !(MIN_SCALE..=MAX_SCALE).contains(&target) {
            log::debug!("Zoom already at bound, scale stays {}", document.scale);
            return;
        }
        self.start_render(document.current_page, target, dispatcher);
    }

    fn open_in_viewer(&self, state: &AppState, dispatcher: &Dispatcher) {
        match state.timeline.active_sha() {
            Some(sha) => {
                let raw = raw_file_url(
                    &state.app_config.raw_host,
                    &state.app_config.owner,
                    &state.app_config.repo,
                    sha,
                    &state.app_config.file_path,
                );
                let url = viewer_url(&state.app_config.viewer_endpoint, &raw);
                log::info!("Opening hosted viewer: {}", url);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Opening viewer in browser...",
                    "Document",
                )));
                self.runtime.spawn(open_url(url));
            }
            None => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    "No revision to open",
                    "Document",
                )));
            }
        }
    }
}

impl Middleware for DocumentMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Document(DocumentAction::Open { sha }) => {
                self.open_document(sha, state, dispatcher);
                // OpenStart carries the state change
                false
            }
            Action::Document(DocumentAction::NextPage) => {
                self.change_page(state, state.document.current_page + 1, dispatcher);
                false
            }
            Action::Document(DocumentAction::PreviousPage) => {
                // current_page is 1-based; page 1 has no predecessor
                if state.document.current_page > 1 {
                    self.change_page(state, state.document.current_page - 1, dispatcher);
                }
                false
            }
            Action::Document(DocumentAction::RenderPage { page }) => {
                self.change_page(state, *page, dispatcher);
                false
            }
            Action::Document(DocumentAction::ZoomIn) => {
                self.change_zoom(state, true, dispatcher);
                false
            }
            Action::Document(DocumentAction::ZoomOut) => {
                self.change_zoom(state, false, dispatcher);
                false
            }
            Action::Document(DocumentAction::SwitchMode) => {
                // Switching back to image mode reloads the active revision
                if state.document.mode.toggled() == ViewMode::Image {
                    if let Some(sha) = state.timeline.active_sha() {
                        dispatcher.dispatch(Action::Document(DocumentAction::Open {
                            sha: sha.to_string(),
                        }));
                    }
                }
                true
            }
            Action::Document(DocumentAction::OpenInViewer) => {
                self.open_in_viewer(state, dispatcher);
                false
            }
            Action::Timeline(TimelineAction::Activate { index }) => {
                match state.timeline.revisions.get(*index) {
                    Some(commit) if state.timeline.active != Some(*index) => {
                        if state.document.mode == ViewMode::Image {
                            dispatcher.dispatch(Action::Document(DocumentAction::Open {
                                sha: commit.sha.clone(),
                            }));
                        }
                        true
                    }
                    Some(commit) => {
                        log::debug!("Revision {} already active", commit.short_sha());
                        false
                    }
                    None => {
                        log::warn!("Activation index {} out of range", index);
                        false
                    }
                }
            }
            _ => true,
        }
    }
}

/// Rasterize one page on the blocking pool and dispatch the completion.
async fn render_with(
    backend: Arc<dyn DocumentBackend>,
    generation: u64,
    page: usize,
    scale: f32,
    dispatcher: &Dispatcher,
) {
    let request = RenderRequest {
        page_number: page,
        scale,
    };
    let result = tokio::task::spawn_blocking(move || backend.render_page(&request)).await;

    match result {
        Ok(Ok(rendered)) => {
            log::debug!(
                "Rendered page {} at scale {} ({}x{} px)",
                page,
                scale,
                rendered.width,
                rendered.height
            );
            dispatcher.dispatch(Action::Document(DocumentAction::Rendered {
                generation,
                page: Arc::new(rendered),
            }));
        }
        Ok(Err(e)) => {
            log::error!("Failed to render page {}: {}", page, e);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                format!("Failed to render page: {}", e),
                "Document",
            )));
            dispatcher.dispatch(Action::Document(DocumentAction::RenderError {
                generation,
                error: e.to_string(),
            }));
        }
        Err(e) => {
            log::error!("Render task for page {} panicked: {}", page, e);
            dispatcher.dispatch(Action::Document(DocumentAction::RenderError {
                generation,
                error: "render task failed".to_string(),
            }));
        }
    }
}
