use crate::kernel::services::ports::ToolEntry;

#[derive(Debug, Default)]
pub struct ToolsState {
    entries: Vec<ToolEntry>,
    selected: Option<usize>,
}

impl ToolsState {
    pub fn new(entries: Vec<ToolEntry>) -> Self {
        Self {
            entries,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&ToolEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Unknown names leave the selection untouched.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(idx) = self.entries.iter().position(|t| t.name == name) else {
            tracing::debug!(name, "unknown tool");
            return false;
        };
        if self.selected == Some(idx) {
            return false;
        }
        self.selected = Some(idx);
        true
    }
}
