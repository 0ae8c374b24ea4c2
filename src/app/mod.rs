//! Application shell: owns the store, runs effects, and feeds async results back.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::kernel::services::ports::{AsyncExecutor, SystemEngine, ToolChannel, WorkspaceClient};
use crate::kernel::services::ServiceHost;
use crate::kernel::{Action, AppState, Store};

mod bridge;
mod tick;

pub const NO_ENGINE: &str = "analysis engine is not loaded";

pub struct Studio {
    store: Store,
    services: ServiceHost,
    engine: Option<Box<dyn SystemEngine>>,
    workspace: Arc<dyn WorkspaceClient>,
    tool_channel: Arc<dyn ToolChannel>,
}

impl Studio {
    pub fn new(
        state: AppState,
        executor: Arc<dyn AsyncExecutor>,
        workspace: Arc<dyn WorkspaceClient>,
        tool_channel: Arc<dyn ToolChannel>,
    ) -> Self {
        Self {
            store: Store::new(state),
            services: ServiceHost::new(executor),
            engine: None,
            workspace,
            tool_channel,
        }
    }

    pub fn with_engine(mut self, engine: Box<dyn SystemEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.dispatch(Action::Tick { now })
    }

    /// Dispatches on the calling thread, then waits up to `timeout` for async results.
    pub fn dispatch_and_wait(&mut self, action: Action, timeout: Duration) -> bool {
        let mut changed = self.dispatch(action);
        changed |= self.wait_kernel_bus(timeout);
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/studio.rs"]
mod tests;
