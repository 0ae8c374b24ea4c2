use crate::kernel::{Action, Effect};
use crate::models::normalize_path;

impl super::Store {
    pub(super) fn reduce_files_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::CreateFile { path, body } => match self.state.fs.make_file(&path, body) {
                Ok(_) => {
                    self.state.explorer.refresh_rows(&self.state.fs);
                    super::DispatchResult::changed(true)
                }
                Err(e) => super::DispatchResult::changed(self.show_error(e.to_string())),
            },
            Action::CreateDirectory { path } => match self.state.fs.make_directory(&path) {
                Ok(_) => {
                    self.state.explorer.refresh_rows(&self.state.fs);
                    super::DispatchResult::changed(true)
                }
                Err(e) => super::DispatchResult::changed(self.show_error(e.to_string())),
            },
            Action::RemovePath { path } => {
                let path = match normalize_path(&path) {
                    Ok(path) => path,
                    Err(e) => return super::DispatchResult::changed(self.show_error(e.to_string())),
                };
                if let Err(e) = self.state.fs.remove(&path) {
                    return super::DispatchResult::changed(self.show_error(e.to_string()));
                }

                let prefix = format!("{path}/");
                if self
                    .state
                    .target_file
                    .as_deref()
                    .is_some_and(|t| t == path || t.starts_with(&prefix))
                {
                    self.state.target_file = None;
                }
                self.state.explorer.refresh_rows(&self.state.fs);
                super::DispatchResult::changed(true)
            }
            Action::OpenFile { path } => {
                let path = match normalize_path(&path) {
                    Ok(path) => path,
                    Err(e) => return super::DispatchResult::changed(self.show_error(e.to_string())),
                };
                if !self.state.fs.is_file(&path) {
                    return super::DispatchResult::changed(
                        self.show_error(format!("{path} not found")),
                    );
                }
                if self.state.target_file.as_deref() == Some(path.as_str()) {
                    return super::DispatchResult::unchanged();
                }
                self.state.target_file = Some(path);
                super::DispatchResult::changed(true)
            }
            Action::SaveFile { path, body } => {
                if let Err(e) = self.state.fs.make_file(&path, body) {
                    return super::DispatchResult::changed(self.show_error(e.to_string()));
                }
                self.state.explorer.refresh_rows(&self.state.fs);
                super::DispatchResult {
                    effects: vec![Effect::ParseWorkspace {
                        files: self.state.fs.read_all(),
                    }],
                    state_changed: true,
                }
            }
            Action::ExplorerToggle { path } => {
                let Ok(path) = normalize_path(&path) else {
                    return super::DispatchResult::unchanged();
                };
                super::DispatchResult::changed(self.state.explorer.toggle(&self.state.fs, &path))
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}
