//! Document pane reducer

use crate::actions::DocumentAction;
use crate::state::DocumentState;

/// Reduce document pane state.
///
/// Open and render completions carry the generation they started with. The
/// reducer applies a completion only when it belongs to the newest started
/// operation, so a slow render can never paint over a newer page.
pub fn reduce_document(mut state: DocumentState, action: &DocumentAction) -> DocumentState {
    match action {
        DocumentAction::OpenStart { generation, sha } => {
            if *generation < state.generation {
                log::debug!("Discarding out-of-order open start {}", generation);
                return state;
            }
            state.generation = *generation;
            state.open_sha = Some(sha.clone());
            state.opening = true;
            state.error = None;
        }
        DocumentAction::Opened {
            generation,
            sha,
            page_count,
        } => {
            if *generation != state.generation {
                log::debug!("Discarding stale open completion {}", generation);
                return state;
            }
            state.opening = false;
            state.open_sha = Some(sha.clone());
            state.page_count = *page_count;
            // Every freshly opened document starts on its first page
            state.current_page = 1;
            log::info!("Opened revision {} with {} pages", sha, page_count);
        }
        DocumentAction::OpenError { generation, error } => {
            if *generation != state.generation {
                log::debug!("Discarding stale open error {}", generation);
                return state;
            }
            state.opening = false;
            state.error = Some(error.clone());
            log::error!("Failed to open document: {}", error);
        }
        DocumentAction::RenderStart {
            generation,
            page,
            scale,
        } => {
            if *generation < state.generation {
                log::debug!("Discarding out-of-order render start {}", generation);
                return state;
            }
            state.generation = *generation;
            state.rendering = true;
            state.current_page = *page;
            state.scale = *scale;
        }
        DocumentAction::Rendered { generation, page } => {
            if *generation != state.generation {
                log::debug!("Discarding stale render completion {}", generation);
                return state;
            }
            state.rendering = false;
            state.rendered = Some(page.clone());
            state.error = None;
        }
        DocumentAction::RenderError { generation, error } => {
            if *generation != state.generation {
                log::debug!("Discarding stale render error {}", generation);
                return state;
            }
            state.rendering = false;
            state.error = Some(error.clone());
            log::error!("Failed to render page: {}", error);
        }
        DocumentAction::SwitchMode => {
            state.mode = state.mode.toggled();
            log::debug!("Display mode switched to {}", state.mode);
        }
        // Commands resolved by the document middleware
        DocumentAction::Open { .. }
        | DocumentAction::RenderPage { .. }
        | DocumentAction::NextPage
        | DocumentAction::PreviousPage
        | DocumentAction::ZoomIn
        | DocumentAction::ZoomOut
        | DocumentAction::OpenInViewer => {}
    }
    state
}
