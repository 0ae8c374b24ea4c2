use serde_json::Value;

use crate::kernel::services::ports::ToolMessage;
use crate::models::Leaf;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ParseWorkspace {
        files: Vec<Leaf>,
    },
    GenerateFlow {
        system: Value,
    },
    PostSystem(ToolMessage),
    LoadWorkspace {
        request_id: u64,
        id: String,
    },
    CreateWorkspace {
        request_id: u64,
        files: Vec<Leaf>,
    },
}
