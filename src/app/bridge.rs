use std::collections::VecDeque;

use super::{Studio, NO_ENGINE};
use crate::kernel::services::ports::check_files;
use crate::kernel::{Action, Effect};

impl Studio {
    /// Applies `action` and every follow-up produced by synchronous effects.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::from([action]);
        let mut state_changed = false;

        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            state_changed |= result.state_changed;
            for effect in result.effects {
                if let Some(next) = self.run_effect(effect) {
                    queue.push_back(next);
                }
            }
        }
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::ParseWorkspace { files } => {
                let Some(engine) = self.engine.as_deref() else {
                    tracing::error!("parse requested without an engine");
                    return Some(Action::ParseFinished(Err(NO_ENGINE.to_string())));
                };
                let result = check_files(engine, &files).map_err(|e| e.to_string());
                tracing::debug!(files = files.len(), ok = result.is_ok(), "parse finished");
                Some(Action::ParseFinished(result))
            }
            Effect::GenerateFlow { system } => {
                let Some(engine) = self.engine.as_deref() else {
                    tracing::error!("flow requested without an engine");
                    return Some(Action::FlowFailed(NO_ENGINE.to_string()));
                };
                match engine.gen_flow(&system) {
                    Ok(design) => Some(Action::FlowGenerated(design)),
                    Err(e) => {
                        tracing::error!(error = %e, "flow generation failed");
                        Some(Action::FlowFailed(e.to_string()))
                    }
                }
            }
            Effect::PostSystem(message) => {
                self.tool_channel.post(message);
                None
            }
            Effect::LoadWorkspace { request_id, id } => {
                let load = self.workspace.load(&id);
                self.services.context().spawn_request(load, move |result| match result {
                    Ok(files) => Action::WorkspaceLoaded {
                        request_id,
                        id,
                        files,
                    },
                    Err(error) => {
                        tracing::error!(workspace = %id, %error, "workspace load failed");
                        Action::WorkspaceLoadFailed { request_id, error }
                    }
                });
                None
            }
            Effect::CreateWorkspace { request_id, files } => {
                let create = self.workspace.create(files);
                self.services.context().spawn_request(create, move |result| match result {
                    Ok(id) => Action::WorkspaceCreated { request_id, id },
                    Err(error) => {
                        tracing::error!(%error, "workspace create failed");
                        Action::WorkspaceCreateFailed { request_id, error }
                    }
                });
                None
            }
        }
    }
}
