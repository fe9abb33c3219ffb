//! Middleware
//!
//! Middleware sit between the raw action stream and the reducers. They run
//! in order on the background worker; each one may dispatch follow-up
//! actions, kick off async work, or consume the action entirely.

pub mod document_middleware;
pub mod history_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;

pub use document_middleware::DocumentMiddleware;
pub use history_middleware::HistoryMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

/// A stage in the action processing chain.
///
/// `state` is a snapshot taken before the chain ran; dispatched actions go
/// through the whole chain again in their own turn.
pub trait Middleware: Send {
    /// Handle an action. Return `true` to pass it down the chain,
    /// `false` to consume it.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
