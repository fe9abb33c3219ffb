//! Background worker
//!
//! All middleware run on a dedicated thread, off the render path. The main
//! thread sends raw actions in; the worker runs them through the middleware
//! chain against a snapshot of the shared state and forwards the survivors
//! back out for reducing.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// State shared between the main thread and the background worker
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread.
///
/// `action_tx` is the sending side of `action_rx`; the dispatcher handed to
/// the middleware uses it, so dispatched actions loop back through the chain.
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || background_loop(action_rx, action_tx, result_tx, state, middleware))
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");
    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            let _ = result_tx.send(action);
            break;
        }

        let current_state = match state.read() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                log::error!("Background worker: failed to read state: {}", e);
                continue;
            }
        };

        let mut forward = true;
        for mw in middleware.iter_mut() {
            if !mw.handle(&action, &current_state, &dispatcher) {
                forward = false;
                break;
            }
        }

        if forward && result_tx.send(action).is_err() {
            log::error!("Background worker: result channel closed, stopping");
            break;
        }
    }

    log::info!("Background worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StatusBarAction;
    use std::sync::mpsc;
    use std::time::Duration;

    /// Consumes status bar actions, forwards everything else
    struct ConsumeStatusBar;

    impl Middleware for ConsumeStatusBar {
        fn handle(&mut self, action: &Action, _state: &AppState, _d: &Dispatcher) -> bool {
            !matches!(action, Action::StatusBar(_))
        }
    }

    #[test]
    fn test_worker_forwards_unconsumed_actions() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let worker = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(ConsumeStatusBar)],
        );

        action_tx
            .send(Action::Global(GlobalAction::ToggleHelp))
            .unwrap();
        let forwarded = result_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(forwarded, Action::Global(GlobalAction::ToggleHelp)));

        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        worker.join().unwrap();
    }

    #[test]
    fn test_worker_drops_consumed_actions_and_stops_on_quit() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let worker = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(ConsumeStatusBar)],
        );

        action_tx
            .send(Action::StatusBar(StatusBarAction::info("gone", "Test")))
            .unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        worker.join().unwrap();

        // Quit is forwarded, the consumed status action is not
        let first = result_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(first, Action::Global(GlobalAction::Quit)));
        assert!(result_rx.try_recv().is_err());
    }
}
