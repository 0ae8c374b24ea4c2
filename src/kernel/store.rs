use super::notify::Severity;
use super::services::ports::ToolMessage;
use super::{Action, AppState, Effect};

#[path = "store/reducers/analysis.rs"]
mod analysis_reducer;
#[path = "store/reducers/files.rs"]
mod files_reducer;
#[path = "store/reducers/workspace.rs"]
mod workspace_reducer;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::CreateFile { .. }
            | Action::CreateDirectory { .. }
            | Action::RemovePath { .. }
            | Action::OpenFile { .. }
            | Action::SaveFile { .. }
            | Action::ExplorerToggle { .. } => self.reduce_files_action(action),
            Action::Parse
            | Action::ParseFinished(_)
            | Action::FlowGenerated(_)
            | Action::FlowFailed(_) => self.reduce_analysis_action(action),
            Action::WorkspaceOpen { .. }
            | Action::WorkspaceLoaded { .. }
            | Action::WorkspaceLoadFailed { .. }
            | Action::WorkspaceCreate
            | Action::WorkspaceCreated { .. }
            | Action::WorkspaceCreateFailed { .. } => self.reduce_workspace_action(action),
            Action::SelectTool { name } => {
                if !self.state.tools.select(&name) {
                    return DispatchResult::unchanged();
                }
                DispatchResult {
                    effects: self.post_system_effect().into_iter().collect(),
                    state_changed: true,
                }
            }
            Action::ReloadTool => DispatchResult {
                effects: self.post_system_effect().into_iter().collect(),
                state_changed: false,
            },
            Action::DismissMessage => DispatchResult::changed(self.state.notify.dismiss()),
            Action::Tick { now } => DispatchResult::changed(self.state.notify.tick(now)),
        }
    }

    /// The latest checked system addressed to the selected tool, if both exist.
    fn post_system_effect(&self) -> Option<Effect> {
        let tool = self.state.tools.selected()?;
        let system = self.state.system.as_ref()?;
        Some(Effect::PostSystem(ToolMessage {
            tool: tool.path.clone(),
            system: system.clone(),
        }))
    }

    fn show_error(&mut self, text: impl Into<String>) -> bool {
        self.state.notify.show(Severity::Error, text)
    }

    fn show_success(&mut self, text: impl Into<String>) -> bool {
        self.state.notify.show(Severity::Success, text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
