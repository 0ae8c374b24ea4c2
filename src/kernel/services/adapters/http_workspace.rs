//! Workspace backend over HTTP.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::kernel::services::ports::{WorkspaceClient, WorkspaceError, WorkspaceFuture};
use crate::models::{normalize_path, FsError, Leaf};

#[derive(Clone)]
pub struct HttpWorkspaceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorkspaceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// `{base}/workspace/{tail}` with exactly one slash at each join.
pub fn workspace_url(base_url: &str, tail: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let tail = tail.trim_start_matches('/');
    if tail.is_empty() {
        format!("{base}/workspace")
    } else {
        format!("{base}/workspace/{tail}")
    }
}

/// Maps an object key such as `abc/lib/a.def` to the tree path `/lib/a.def`.
pub fn key_to_path(id: &str, key: &str) -> Result<String, FsError> {
    let rest = key
        .strip_prefix(id)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(key);
    normalize_path(rest)
}

fn transport(e: reqwest::Error) -> WorkspaceError {
    tracing::warn!(error = %e, "workspace request failed");
    WorkspaceError::Transport(e.to_string())
}

fn decode(e: reqwest::Error) -> WorkspaceError {
    tracing::warn!(error = %e, "unable to decode workspace response");
    WorkspaceError::Decode(e.to_string())
}

fn check_status(status: StatusCode) -> Result<(), WorkspaceError> {
    if status == StatusCode::NOT_FOUND {
        return Err(WorkspaceError::NotFound);
    }
    if !status.is_success() {
        return Err(WorkspaceError::Http(status.as_u16()));
    }
    Ok(())
}

impl WorkspaceClient for HttpWorkspaceClient {
    fn load(&self, id: &str) -> WorkspaceFuture<Vec<Leaf>> {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let id = id.to_string();

        Box::pin(async move {
            let resp = client
                .get(workspace_url(&base_url, &id))
                .send()
                .await
                .map_err(transport)?;
            check_status(resp.status())?;

            let keys: Vec<String> = resp.json().await.map_err(decode)?;
            if keys.is_empty() {
                return Err(WorkspaceError::NotFound);
            }
            tracing::debug!(workspace = %id, keys = keys.len(), "fetching workspace files");

            let mut files = Vec::with_capacity(keys.len());
            for key in keys {
                let name = match key_to_path(&id, &key) {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::warn!(%key, error = %e, "skipping workspace file");
                        continue;
                    }
                };
                let resp = client
                    .get(workspace_url(&base_url, &key))
                    .send()
                    .await
                    .map_err(transport)?;
                if resp.status() == StatusCode::NOT_FOUND {
                    tracing::warn!(%key, "listed workspace file is missing");
                    continue;
                }
                check_status(resp.status())?;
                let body = resp.text().await.map_err(decode)?;
                files.push(Leaf { name, body });
            }
            Ok(files)
        })
    }

    fn create(&self, files: Vec<Leaf>) -> WorkspaceFuture<String> {
        let client = self.client.clone();
        let url = workspace_url(&self.base_url, "");

        Box::pin(async move {
            let mut form = Form::new();
            for file in files {
                let name = file.name.trim_start_matches('/').to_string();
                form = form.part(name.clone(), Part::text(file.body).file_name(name));
            }

            let resp = client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(transport)?;
            check_status(resp.status())?;

            let id = resp.text().await.map_err(decode)?;
            let id = id.trim();
            if id.is_empty() {
                return Err(WorkspaceError::Decode("empty workspace id".to_string()));
            }
            Ok(id.to_string())
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http_workspace.rs"]
mod tests;
