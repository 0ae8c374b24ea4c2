//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod notify;
pub mod services;
pub mod state;
pub mod store;
pub mod tools;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use notify::{Notification, NotifyState, Severity};
pub use state::{AppState, ExplorerState};
pub use store::{DispatchResult, Store};
pub use tools::ToolsState;
pub use workspace::{RequestKind, WorkspaceState};
