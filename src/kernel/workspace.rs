//! Request tracking for workspace load/create round trips.
//!
//! Each new request supersedes the previous one of the same kind; a completion is applied
//! only when its id is still the active one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Load,
    Create,
}

#[derive(Debug, Default)]
pub struct WorkspaceState {
    id: Option<String>,
    next_request_id: u64,
    pending_load: Option<u64>,
    pending_create: Option<u64>,
}

impl WorkspaceState {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.id.as_deref() == Some(id.as_str()) {
            return false;
        }
        self.id = Some(id);
        true
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn pending(&self, kind: RequestKind) -> Option<u64> {
        self.slot(kind)
    }

    pub fn begin(&mut self, kind: RequestKind) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        if let Some(prev) = self.slot_mut(kind).replace(request_id) {
            tracing::debug!(prev, request_id, ?kind, "superseding in-flight workspace request");
        }
        request_id
    }

    /// Clears the pending slot and reports whether `request_id` was still current.
    pub fn finish(&mut self, kind: RequestKind, request_id: u64) -> bool {
        let slot = self.slot_mut(kind);
        if *slot != Some(request_id) {
            tracing::debug!(request_id, ?kind, "dropping stale workspace completion");
            return false;
        }
        *slot = None;
        true
    }

    fn slot(&self, kind: RequestKind) -> Option<u64> {
        match kind {
            RequestKind::Load => self.pending_load,
            RequestKind::Create => self.pending_create,
        }
    }

    fn slot_mut(&mut self, kind: RequestKind) -> &mut Option<u64> {
        match kind {
            RequestKind::Load => &mut self.pending_load,
            RequestKind::Create => &mut self.pending_create,
        }
    }
}
