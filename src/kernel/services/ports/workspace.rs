use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::Leaf;

pub const WORKSPACE_NOT_FOUND: &str = "The specified workspace is not found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    NotFound,
    Http(u16),
    Transport(String),
    Decode(String),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::NotFound => f.write_str(WORKSPACE_NOT_FOUND),
            WorkspaceError::Http(status) => write!(f, "server responded with status {status}"),
            WorkspaceError::Transport(e) => write!(f, "request failed: {e}"),
            WorkspaceError::Decode(e) => write!(f, "invalid response: {e}"),
        }
    }
}

impl std::error::Error for WorkspaceError {}

pub type WorkspaceFuture<T> =
    Pin<Box<dyn Future<Output = Result<T, WorkspaceError>> + Send + 'static>>;

/// Backend that stores workspaces as sets of files.
pub trait WorkspaceClient: Send + Sync {
    fn load(&self, id: &str) -> WorkspaceFuture<Vec<Leaf>>;
    fn create(&self, files: Vec<Leaf>) -> WorkspaceFuture<String>;
}
