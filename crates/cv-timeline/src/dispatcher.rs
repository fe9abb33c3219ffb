//! Dispatcher
//!
//! Cheap, cloneable handle for sending actions back into the processing
//! queue. Async tasks clone it so their completions re-enter the middleware
//! chain like any other action.

use std::sync::mpsc::Sender;

use crate::actions::Action;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
