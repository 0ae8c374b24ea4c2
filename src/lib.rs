//! sysdc-studio: headless core of the SysDC design editor.
//!
//! Modules:
//! - models: virtual file tree, flow-graph data model
//! - flow: nested flow-graph layout
//! - kernel: session store (state/action/effect), service ports and adapters
//! - app: shell that drives the kernel's effects

pub mod app;
pub mod flow;
pub mod kernel;
pub mod models;
