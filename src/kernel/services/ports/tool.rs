use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    pub path: String,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

pub fn default_tools() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new("std@debug v1.0.0", "/std/debug/1.0.0"),
        ToolEntry::new("std@json v1.0.0", "/std/json/1.0.0"),
        ToolEntry::new("std@view v0.2.0", "/std/view/0.2.0"),
        ToolEntry::new("std@eval v0.1.0", "/std/eval/0.1.0"),
        ToolEntry::new("std@check v0.1.0", "/std/check/0.1.0"),
    ]
}

/// Payload delivered to an embedded tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMessage {
    pub tool: String,
    pub system: Value,
}

/// Fire-and-forget delivery to the hosted tool.
pub trait ToolChannel: Send + Sync {
    fn post(&self, message: ToolMessage);
}
