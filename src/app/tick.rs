use std::time::{Duration, Instant};

use super::Studio;
use crate::kernel::services::Received;

impl Studio {
    /// Applies every action already waiting on the kernel bus.
    pub fn poll_kernel_bus(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.services.next() {
                Received::Action(action) => changed |= self.dispatch(action),
                Received::Idle => break,
                Received::Closed => {
                    tracing::debug!("kernel bus disconnected");
                    break;
                }
            }
        }
        changed
    }

    /// Blocks until no workspace request is pending or `timeout` elapses.
    pub fn wait_kernel_bus(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut changed = self.poll_kernel_bus();

        while self.has_pending_requests() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!("timed out waiting for workspace request");
                break;
            }
            match self.services.next_within(remaining) {
                Received::Action(action) => {
                    changed |= self.dispatch(action);
                    changed |= self.poll_kernel_bus();
                }
                Received::Idle => {
                    tracing::warn!("timed out waiting for workspace request");
                    break;
                }
                Received::Closed => break,
            }
        }
        changed
    }

    fn has_pending_requests(&self) -> bool {
        let workspace = &self.state().workspace;
        workspace.is_pending(crate::kernel::RequestKind::Load)
            || workspace.is_pending(crate::kernel::RequestKind::Create)
    }
}
