use serde::{Deserialize, Serialize};

use super::tool::{default_tools, ToolEntry};
use crate::flow::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default = "default_tools")]
    pub tools: Vec<ToolEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workspace: WorkspaceSettings::default(),
            notifications: NotificationSettings::default(),
            layout: LayoutConfig::default(),
            tools: default_tools(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:50000".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
        }
    }
}

fn default_auto_hide_ms() -> u64 {
    6000
}
