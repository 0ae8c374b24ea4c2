use crate::kernel::services::ports::{WorkspaceError, WORKSPACE_NOT_FOUND};
use crate::kernel::workspace::RequestKind;
use crate::kernel::{Action, Effect};
use crate::models::VirtualFileSystem;

impl super::Store {
    pub(super) fn reduce_workspace_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::WorkspaceOpen { id } => {
                let id = id.trim().to_string();
                if id.is_empty() {
                    return super::DispatchResult::changed(self.show_error("Workspace id is empty"));
                }
                let request_id = self.state.workspace.begin(RequestKind::Load);
                super::DispatchResult {
                    effects: vec![Effect::LoadWorkspace { request_id, id }],
                    state_changed: true,
                }
            }
            Action::WorkspaceLoaded {
                request_id,
                id,
                files,
            } => {
                if !self.state.workspace.finish(RequestKind::Load, request_id) {
                    return super::DispatchResult::unchanged();
                }

                let mut fs = VirtualFileSystem::new();
                for file in files {
                    if let Err(e) = fs.make_file(&file.name, file.body) {
                        tracing::warn!(path = %file.name, error = %e, "skipping workspace file");
                    }
                }

                tracing::info!(workspace = %id, files = fs.len(), "workspace loaded");
                self.state.target_file = fs.read_all().into_iter().next().map(|leaf| leaf.name);
                self.state.fs = fs;
                self.state.explorer.reset(&self.state.fs);
                self.state.system = None;
                self.state.flow = None;
                self.state.workspace.set_id(id.clone());
                self.show_success(format!("Workspace {id} loaded"));
                super::DispatchResult::changed(true)
            }
            Action::WorkspaceLoadFailed { request_id, error } => {
                if !self.state.workspace.finish(RequestKind::Load, request_id) {
                    return super::DispatchResult::unchanged();
                }
                let text = match error {
                    WorkspaceError::NotFound => WORKSPACE_NOT_FOUND.to_string(),
                    other => format!("Failed to load workspace: {other}"),
                };
                super::DispatchResult::changed(self.show_error(text))
            }
            Action::WorkspaceCreate => {
                let request_id = self.state.workspace.begin(RequestKind::Create);
                super::DispatchResult {
                    effects: vec![Effect::CreateWorkspace {
                        request_id,
                        files: self.state.fs.read_all(),
                    }],
                    state_changed: true,
                }
            }
            Action::WorkspaceCreated { request_id, id } => {
                if !self.state.workspace.finish(RequestKind::Create, request_id) {
                    return super::DispatchResult::unchanged();
                }
                tracing::info!(workspace = %id, "workspace created");
                self.state.workspace.set_id(id.clone());
                self.show_success(format!("Workspace created: {id}"));
                super::DispatchResult::changed(true)
            }
            Action::WorkspaceCreateFailed { request_id, error } => {
                if !self.state.workspace.finish(RequestKind::Create, request_id) {
                    return super::DispatchResult::unchanged();
                }
                super::DispatchResult::changed(
                    self.show_error(format!("Failed to create workspace: {error}")),
                )
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}
