use std::sync::Arc;
use std::time::Duration;

use super::bus::{action_bus, ActionReceiver, ActionSender, Received};
use super::ports::{AsyncExecutor, WorkspaceError, WorkspaceFuture};
use crate::kernel::Action;

/// Runs backend requests on the executor and collects their completions for the store.
pub struct ServiceHost {
    bus: ActionSender,
    rx: ActionReceiver,
    executor: Arc<dyn AsyncExecutor>,
}

/// Cloneable handle used to start requests that report back to a [`ServiceHost`].
#[derive(Clone)]
pub struct ServiceContext {
    bus: ActionSender,
    executor: Arc<dyn AsyncExecutor>,
}

impl ServiceHost {
    pub fn new(executor: Arc<dyn AsyncExecutor>) -> Self {
        let (bus, rx) = action_bus();
        Self { bus, rx, executor }
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext {
            bus: self.bus.clone(),
            executor: Arc::clone(&self.executor),
        }
    }

    pub fn next(&mut self) -> Received {
        self.rx.next()
    }

    pub fn next_within(&mut self, timeout: Duration) -> Received {
        self.rx.next_within(timeout)
    }
}

impl ServiceContext {
    /// Awaits `request` in the background and posts `on_done(result)` to the bus.
    pub fn spawn_request<T, F>(&self, request: WorkspaceFuture<T>, on_done: F)
    where
        T: Send + 'static,
        F: FnOnce(Result<T, WorkspaceError>) -> Action + Send + 'static,
    {
        let bus = self.bus.clone();
        self.executor.spawn(Box::pin(async move {
            let action = on_done(request.await);
            if !bus.send(action) {
                tracing::debug!("service host dropped, discarding request result");
            }
        }));
    }
}
