//! Service ports: traits + data contracts.

pub mod engine;
pub mod runtime;
pub mod settings;
pub mod tool;
pub mod workspace;

pub use engine::{check_files, EngineError, Parser, SystemEngine};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{NotificationSettings, Settings, WorkspaceSettings};
pub use tool::{default_tools, ToolChannel, ToolEntry, ToolMessage};
pub use workspace::{WorkspaceClient, WorkspaceError, WorkspaceFuture, WORKSPACE_NOT_FOUND};
