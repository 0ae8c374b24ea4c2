use tokio::sync::watch;

use crate::kernel::services::ports::{ToolChannel, ToolMessage};

/// Keeps only the latest message; a hosted tool re-renders from whatever is current.
pub struct WatchToolChannel {
    tx: watch::Sender<Option<ToolMessage>>,
}

impl Default for WatchToolChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchToolChannel {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ToolMessage>> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> Option<ToolMessage> {
        self.tx.borrow().clone()
    }
}

impl ToolChannel for WatchToolChannel {
    fn post(&self, message: ToolMessage) {
        tracing::debug!(tool = %message.tool, "posting system to tool");
        self.tx.send_replace(Some(message));
    }
}
