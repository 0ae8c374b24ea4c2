//! Channel carrying actions from background requests back to the store thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::kernel::Action;

/// Outcome of reading the bus once.
#[derive(Debug)]
pub enum Received {
    Action(Action),
    /// Nothing arrived (yet, or within the timeout).
    Idle,
    /// Every sender is gone.
    Closed,
}

#[derive(Clone)]
pub struct ActionSender {
    tx: Sender<Action>,
}

pub struct ActionReceiver {
    rx: Receiver<Action>,
}

pub fn action_bus() -> (ActionSender, ActionReceiver) {
    let (tx, rx) = mpsc::channel();
    (ActionSender { tx }, ActionReceiver { rx })
}

impl ActionSender {
    /// False once the receiving side has been dropped.
    pub fn send(&self, action: Action) -> bool {
        self.tx.send(action).is_ok()
    }
}

impl ActionReceiver {
    pub fn next(&mut self) -> Received {
        match self.rx.try_recv() {
            Ok(action) => Received::Action(action),
            Err(TryRecvError::Empty) => Received::Idle,
            Err(TryRecvError::Disconnected) => Received::Closed,
        }
    }

    pub fn next_within(&mut self, timeout: Duration) -> Received {
        match self.rx.recv_timeout(timeout) {
            Ok(action) => Received::Action(action),
            Err(RecvTimeoutError::Timeout) => Received::Idle,
            Err(RecvTimeoutError::Disconnected) => Received::Closed,
        }
    }
}
