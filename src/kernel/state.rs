use rustc_hash::FxHashSet;
use serde_json::Value;
use std::time::Duration;

use crate::flow::LayoutConfig;
use crate::kernel::services::ports::Settings;
use crate::models::{FileTreeRow, FlowDesign, VirtualFileSystem};

use super::notify::NotifyState;
use super::tools::ToolsState;
use super::workspace::WorkspaceState;

pub const INITIAL_FILE: &str = "/design.def";
pub const INITIAL_BODY: &str = "unit design;";

pub struct AppState {
    pub fs: VirtualFileSystem,
    pub target_file: Option<String>,
    pub explorer: ExplorerState,
    pub notify: NotifyState,
    pub workspace: WorkspaceState,
    pub tools: ToolsState,
    pub system: Option<Value>,
    pub flow: Option<FlowDesign>,
    pub layout: LayoutConfig,
}

impl AppState {
    /// A fresh session holding the starter design file.
    pub fn new(settings: &Settings) -> Self {
        let mut fs = VirtualFileSystem::new();
        let target_file = match fs.make_file(INITIAL_FILE, INITIAL_BODY) {
            Ok(_) => Some(INITIAL_FILE.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "failed to seed starter file");
                None
            }
        };
        Self::with_fs(fs, target_file, settings)
    }

    pub fn with_fs(fs: VirtualFileSystem, target_file: Option<String>, settings: &Settings) -> Self {
        let explorer = ExplorerState::new(&fs);
        Self {
            fs,
            target_file,
            explorer,
            notify: NotifyState::new(Duration::from_millis(settings.notifications.auto_hide_ms)),
            workspace: WorkspaceState::default(),
            tools: ToolsState::new(settings.tools.clone()),
            system: None,
            flow: None,
            layout: settings.layout,
        }
    }

    /// Body of the file currently open in the editor.
    pub fn target_body(&self) -> Option<&str> {
        self.fs.read(self.target_file.as_deref()?)
    }
}

#[derive(Debug, Default)]
pub struct ExplorerState {
    expanded: FxHashSet<String>,
    rows: Vec<FileTreeRow>,
}

impl ExplorerState {
    pub fn new(fs: &VirtualFileSystem) -> Self {
        let mut state = Self::default();
        state.refresh_rows(fs);
        state
    }

    pub fn rows(&self) -> &[FileTreeRow] {
        &self.rows
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle(&mut self, fs: &VirtualFileSystem, path: &str) -> bool {
        if !fs.is_dir(path) || path == "/" {
            return false;
        }
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
        self.refresh_rows(fs);
        true
    }

    pub fn reset(&mut self, fs: &VirtualFileSystem) {
        self.expanded.clear();
        self.refresh_rows(fs);
    }

    /// Drops expanded entries that no longer exist and rebuilds the rows.
    pub fn refresh_rows(&mut self, fs: &VirtualFileSystem) {
        self.expanded.retain(|path| fs.is_dir(path));
        self.rows = fs.rows(&self.expanded);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
