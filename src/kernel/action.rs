use serde_json::Value;
use std::time::Instant;

use crate::kernel::services::ports::WorkspaceError;
use crate::models::{FlowDesign, Leaf};

#[derive(Debug, Clone)]
pub enum Action {
    CreateFile {
        path: String,
        body: String,
    },
    CreateDirectory {
        path: String,
    },
    RemovePath {
        path: String,
    },
    OpenFile {
        path: String,
    },
    SaveFile {
        path: String,
        body: String,
    },
    ExplorerToggle {
        path: String,
    },
    Parse,
    ParseFinished(Result<Value, String>),
    FlowGenerated(FlowDesign),
    FlowFailed(String),
    WorkspaceOpen {
        id: String,
    },
    WorkspaceLoaded {
        request_id: u64,
        id: String,
        files: Vec<Leaf>,
    },
    WorkspaceLoadFailed {
        request_id: u64,
        error: WorkspaceError,
    },
    WorkspaceCreate,
    WorkspaceCreated {
        request_id: u64,
        id: String,
    },
    WorkspaceCreateFailed {
        request_id: u64,
        error: WorkspaceError,
    },
    SelectTool {
        name: String,
    },
    ReloadTool,
    DismissMessage,
    Tick {
        now: Instant,
    },
}
