//! Data models shared by the kernel and the adapters.

pub mod file_system;
pub mod flow;

pub use file_system::{
    load_from_dir, normalize_path, EntryId, EntryKind, FileTreeRow, FsEntry, FsError, Leaf,
    VirtualFileSystem,
};
pub use flow::{FlowDesign, FlowEdge, FlowNode, FlowNodeKind};
