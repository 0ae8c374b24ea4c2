//! In-memory virtual file tree used as the editor's working set.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::{collections::BTreeMap, fmt, io, path::Path};

new_key_type! { pub struct EntryId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// No final segment to name a file, or a `.`/`..` segment.
    InvalidPath(String),
    /// A file sits where a directory is needed, or a directory where a file is.
    PathConflict(String),
    NotFound(String),
    RootRemoval,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::InvalidPath(path) => write!(f, "invalid path: {path:?}"),
            FsError::PathConflict(path) => {
                write!(f, "{path} already exists with a different kind")
            }
            FsError::NotFound(path) => write!(f, "{path} not found"),
            FsError::RootRemoval => write!(f, "the root directory cannot be removed"),
        }
    }
}

impl std::error::Error for FsError {}

/// A file: absolute path plus text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub name: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub name: CompactString,
    pub path: String,
    pub is_dir: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    kind: EntryKind,
    path: String,
    parent: Option<EntryId>,
    children: Option<BTreeMap<CompactString, EntryId>>,
    body: String,
}

impl Entry {
    fn new_file(path: String, parent: EntryId, body: String) -> Self {
        Self {
            kind: EntryKind::File,
            path,
            parent: Some(parent),
            children: None,
            body,
        }
    }

    fn new_dir(path: String, parent: Option<EntryId>) -> Self {
        Self {
            kind: EntryKind::Dir,
            path,
            parent,
            children: Some(BTreeMap::new()),
            body: String::new(),
        }
    }
}

pub struct VirtualFileSystem {
    arena: SlotMap<EntryId, Entry>,
    root: EntryId,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VirtualFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualFileSystem")
            .field("leaves", &self.len())
            .finish()
    }
}

/// Leading `/` enforced, empty segments dropped, `.` and `..` rejected.
pub fn normalize_path(path: &str) -> Result<String, FsError> {
    Ok(join(&checked_segments(path)?))
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn checked_segments(path: &str) -> Result<Vec<&str>, FsError> {
    let segs = segments(path);
    if segs.iter().any(|s| matches!(*s, "." | "..")) {
        return Err(FsError::InvalidPath(path.to_string()));
    }
    Ok(segs)
}

fn join(segments: &[&str]) -> String {
    let mut out = String::new();
    for seg in segments {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Entry::new_dir("/".to_string(), None));
        Self { arena, root }
    }

    /// Creates `path` and every missing directory above it.
    pub fn make_directory(&mut self, path: &str) -> Result<EntryId, FsError> {
        let segs = checked_segments(path)?;

        // Reject before creating anything so a conflict leaves the tree untouched.
        let mut current = Some(self.root);
        for (idx, seg) in segs.iter().enumerate() {
            let Some(dir) = current else { break };
            current = match self.child(dir, seg) {
                Some(id) if self.arena[id].kind == EntryKind::Dir => Some(id),
                Some(_) => return Err(FsError::PathConflict(join(&segs[..=idx]))),
                None => None,
            };
        }

        let mut current = self.root;
        for (idx, seg) in segs.iter().enumerate() {
            current = match self.child(current, seg) {
                Some(id) => id,
                None => {
                    let entry = Entry::new_dir(join(&segs[..=idx]), Some(current));
                    self.insert_child(current, seg, entry)
                }
            };
        }
        Ok(current)
    }

    /// Inserts or replaces the file at `path`, creating parent directories on demand.
    pub fn make_file(&mut self, path: &str, body: impl Into<String>) -> Result<EntryId, FsError> {
        let segs = checked_segments(path)?;
        let (name, parents) = segs
            .split_last()
            .ok_or_else(|| FsError::InvalidPath(path.to_string()))?;

        if let Some(existing) = self.resolve(&segs) {
            let entry = &mut self.arena[existing];
            if entry.kind == EntryKind::Dir {
                return Err(FsError::PathConflict(entry.path.clone()));
            }
            entry.body = body.into();
            return Ok(existing);
        }

        let parent = if parents.is_empty() {
            self.root
        } else {
            self.make_directory(&join(parents))?
        };

        let entry = Entry::new_file(join(&segs), parent, body.into());
        Ok(self.insert_child(parent, name, entry))
    }

    pub fn read(&self, path: &str) -> Option<&str> {
        let id = self.resolve(&segments(path))?;
        let entry = self.arena.get(id)?;
        (entry.kind == EntryKind::File).then_some(entry.body.as_str())
    }

    /// Every file in the tree; sub-directories are visited before a directory's own files.
    pub fn read_all(&self) -> Vec<Leaf> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_leaves(self.root, &mut out);
        out
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve(&segments(path)).is_some()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.kind_of(path) == Some(EntryKind::Dir)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.kind_of(path) == Some(EntryKind::File)
    }

    pub fn kind_of(&self, path: &str) -> Option<EntryKind> {
        let id = self.resolve(&segments(path))?;
        self.arena.get(id).map(|e| e.kind)
    }

    /// Direct children of the directory at `path`.
    pub fn list(&self, path: &str) -> Option<Vec<FsEntry>> {
        let id = self.resolve(&segments(path))?;
        let children = self.arena.get(id)?.children.as_ref()?;
        Some(
            children
                .iter()
                .filter_map(|(name, &child_id)| {
                    let child = self.arena.get(child_id)?;
                    Some(FsEntry {
                        name: name.clone(),
                        path: child.path.clone(),
                        is_dir: child.kind == EntryKind::Dir,
                    })
                })
                .collect(),
        )
    }

    pub fn remove(&mut self, path: &str) -> Result<(), FsError> {
        let segs = segments(path);
        let Some((name, _)) = segs.split_last() else {
            return Err(FsError::RootRemoval);
        };
        let id = self
            .resolve(&segs)
            .ok_or_else(|| FsError::NotFound(join(&segs)))?;

        if let Some(parent_id) = self.arena.get(id).and_then(|e| e.parent) {
            if let Some(children) = self
                .arena
                .get_mut(parent_id)
                .and_then(|e| e.children.as_mut())
            {
                children.remove(*name);
            }
        }

        self.recursive_remove(id);
        Ok(())
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.arena
            .values()
            .filter(|e| e.kind == EntryKind::File)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn child(&self, dir: EntryId, name: &str) -> Option<EntryId> {
        self.arena
            .get(dir)?
            .children
            .as_ref()?
            .get(name)
            .copied()
    }

    fn resolve(&self, segs: &[&str]) -> Option<EntryId> {
        let mut current = self.root;
        for seg in segs {
            current = self.child(current, seg)?;
        }
        Some(current)
    }

    fn insert_child(&mut self, parent: EntryId, name: &str, entry: Entry) -> EntryId {
        let id = self.arena.insert(entry);
        if let Some(children) = self
            .arena
            .get_mut(parent)
            .and_then(|e| e.children.as_mut())
        {
            children.insert(CompactString::from(name), id);
        }
        id
    }

    fn collect_leaves(&self, dir: EntryId, out: &mut Vec<Leaf>) {
        let Some(children) = self.arena.get(dir).and_then(|e| e.children.as_ref()) else {
            return;
        };

        for &child_id in children.values() {
            if self.arena[child_id].kind == EntryKind::Dir {
                self.collect_leaves(child_id, out);
            }
        }
        for &child_id in children.values() {
            let child = &self.arena[child_id];
            if child.kind == EntryKind::File {
                out.push(Leaf {
                    name: child.path.clone(),
                    body: child.body.clone(),
                });
            }
        }
    }

    fn recursive_remove(&mut self, id: EntryId) {
        if let Some(entry) = self.arena.remove(id) {
            if let Some(children) = entry.children {
                for (_, child_id) in children {
                    self.recursive_remove(child_id);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub path: String,
    pub depth: u16,
    pub name: CompactString,
    pub is_dir: bool,
    pub is_expanded: bool,
}

impl VirtualFileSystem {
    /// Explorer rows; the root is always open and `expanded` holds open directory paths.
    pub fn rows(&self, expanded: &FxHashSet<String>) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(EntryId, u16)> = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            let Some(entry) = self.arena.get(id) else {
                continue;
            };
            let is_expanded = id == self.root || expanded.contains(&entry.path);

            if id != self.root {
                result.push(FileTreeRow {
                    path: entry.path.clone(),
                    depth,
                    name: entry
                        .path
                        .rsplit('/')
                        .next()
                        .map(CompactString::from)
                        .unwrap_or_default(),
                    is_dir: entry.kind == EntryKind::Dir,
                    is_expanded: entry.kind == EntryKind::Dir && is_expanded,
                });
            }

            if !is_expanded {
                continue;
            }
            if let Some(children) = &entry.children {
                let mut dirs = Vec::new();
                let mut files = Vec::new();
                for &child_id in children.values() {
                    match self.arena.get(child_id).map(|c| c.kind) {
                        Some(EntryKind::Dir) => dirs.push(child_id),
                        Some(EntryKind::File) => files.push(child_id),
                        None => {}
                    }
                }

                for file_id in files.into_iter().rev() {
                    stack.push((file_id, depth + 1));
                }
                for dir_id in dirs.into_iter().rev() {
                    stack.push((dir_id, depth + 1));
                }
            }
        }

        result
    }
}

/// Loads every readable text file under `root` into a fresh tree, keyed by relative path.
pub fn load_from_dir(root: &Path) -> io::Result<VirtualFileSystem> {
    let root = root.canonicalize()?;
    let mut fs = VirtualFileSystem::new();

    let walker = ignore::WalkBuilder::new(&root)
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        .build();

    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        let rel = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let body = match std::fs::read_to_string(entry.path()) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        fs.make_file(&rel, body)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    }

    Ok(fs)
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_system.rs"]
mod tests;
