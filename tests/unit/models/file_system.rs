use super::*;
use tempfile::tempdir;

#[test]
fn test_new_tree_is_empty() {
    let fs = VirtualFileSystem::new();
    assert!(fs.is_empty());
    assert!(fs.is_dir("/"));
    assert!(fs.read_all().is_empty());
}

#[test]
fn make_file_then_read_returns_body() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/design.def", "unit design;").unwrap();
    assert_eq!(fs.read("/design.def"), Some("unit design;"));
}

#[test]
fn make_file_overwrites_previous_body() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a.def", "first").unwrap();
    fs.make_file("/a.def", "second").unwrap();
    assert_eq!(fs.read("/a.def"), Some("second"));
    assert_eq!(fs.len(), 1);
}

#[test]
fn writes_do_not_affect_other_paths() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a/x.def", "x").unwrap();
    fs.make_file("/a/y.def", "y").unwrap();
    fs.make_file("/a/x.def", "changed").unwrap();
    assert_eq!(fs.read("/a/y.def"), Some("y"));
    assert_eq!(fs.read("/a/x.def"), Some("changed"));
}

#[test]
fn read_all_returns_every_leaf_once() {
    let mut fs = VirtualFileSystem::new();
    let paths = ["/a.def", "/b/c.def", "/b/d/e.def", "/f/g.def", "/b/c.def"];
    for (i, p) in paths.iter().enumerate() {
        fs.make_file(p, format!("body{i}")).unwrap();
    }

    let mut leaves = fs.read_all();
    leaves.sort_by(|a, b| a.name.cmp(&b.name));
    let names: Vec<_> = leaves.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["/a.def", "/b/c.def", "/b/d/e.def", "/f/g.def"]);

    let c = leaves.iter().find(|l| l.name == "/b/c.def").unwrap();
    assert_eq!(c.body, "body4");
}

#[test]
fn read_all_visits_subdirectories_before_own_files() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/top.def", "t").unwrap();
    fs.make_file("/sub/inner.def", "i").unwrap();

    let names: Vec<_> = fs.read_all().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["/sub/inner.def".to_string(), "/top.def".to_string()]);
}

#[test]
fn single_file_scenario() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/design.def", "unit design;").unwrap();
    assert_eq!(
        fs.read_all(),
        vec![Leaf {
            name: "/design.def".to_string(),
            body: "unit design;".to_string(),
        }]
    );
}

#[test]
fn make_file_auto_creates_parent_directory() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a/b.txt", "x").unwrap();
    assert!(fs.is_dir("/a"));
    assert!(fs.is_file("/a/b.txt"));
    assert_eq!(fs.read("/a/b.txt"), Some("x"));
}

#[test]
fn unwritten_file_in_existing_directory_is_absent() {
    let mut fs = VirtualFileSystem::new();
    fs.make_directory("/a/b/c").unwrap();
    assert!(fs.is_dir("/a"));
    assert!(fs.is_dir("/a/b"));
    assert_eq!(fs.read("/a/b/c/x.txt"), None);
    assert_eq!(fs.read("/missing/x.txt"), None);
}

#[test]
fn make_directory_is_idempotent() {
    let mut fs = VirtualFileSystem::new();
    let first = fs.make_directory("/a/b").unwrap();
    let second = fs.make_directory("/a/b").unwrap();
    assert_eq!(first, second);

    let children = fs.list("/a").unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].path, "/a/b");
    assert!(children[0].is_dir);
}

#[test]
fn make_directory_keeps_existing_contents() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a/keep.def", "k").unwrap();
    fs.make_directory("/a").unwrap();
    assert_eq!(fs.read("/a/keep.def"), Some("k"));
}

#[test]
fn paths_are_normalized() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("a//b.def", "x").unwrap();
    assert_eq!(fs.read("/a/b.def"), Some("x"));
    assert_eq!(fs.read_all()[0].name, "/a/b.def");
    assert_eq!(normalize_path(""), Ok("/".to_string()));
    assert_eq!(normalize_path("x/y/"), Ok("/x/y".to_string()));
}

#[test]
fn file_over_directory_is_a_conflict() {
    let mut fs = VirtualFileSystem::new();
    fs.make_directory("/a").unwrap();
    assert_eq!(
        fs.make_file("/a", "x"),
        Err(FsError::PathConflict("/a".to_string()))
    );
    assert!(fs.is_dir("/a"));
}

#[test]
fn directory_through_file_is_a_conflict() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a", "x").unwrap();
    assert_eq!(
        fs.make_directory("/a/b/c"),
        Err(FsError::PathConflict("/a".to_string()))
    );
    assert_eq!(
        fs.make_file("/a/b.def", "y"),
        Err(FsError::PathConflict("/a".to_string()))
    );
    assert_eq!(fs.read("/a"), Some("x"));
    assert_eq!(fs.len(), 1);
}

#[test]
fn make_file_without_name_is_invalid() {
    let mut fs = VirtualFileSystem::new();
    assert_eq!(
        fs.make_file("/", "x"),
        Err(FsError::InvalidPath("/".to_string()))
    );
    assert_eq!(
        fs.make_file("", "x"),
        Err(FsError::InvalidPath(String::new()))
    );
}

#[test]
fn remove_drops_subtree() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/a/b/c.def", "c").unwrap();
    fs.make_file("/a/d.def", "d").unwrap();
    fs.make_file("/e.def", "e").unwrap();

    fs.remove("/a").unwrap();
    assert!(!fs.exists("/a"));
    assert_eq!(fs.read("/a/d.def"), None);
    assert_eq!(fs.len(), 1);

    assert_eq!(fs.remove("/"), Err(FsError::RootRemoval));
    assert_eq!(
        fs.remove("/nope"),
        Err(FsError::NotFound("/nope".to_string()))
    );
}

#[test]
fn rows_follow_expanded_directories() {
    let mut fs = VirtualFileSystem::new();
    fs.make_file("/file1.def", "").unwrap();
    fs.make_file("/sub/file2.def", "").unwrap();

    let mut expanded = FxHashSet::default();
    let rows = fs.rows(&expanded);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_dir);
    assert_eq!(rows[0].name, "sub");
    assert!(!rows[0].is_expanded);

    expanded.insert("/sub".to_string());
    let rows = fs.rows(&expanded);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].path, "/sub/file2.def");
    assert_eq!(rows[1].depth, 2);
    assert_eq!(rows[2].path, "/file1.def");
}

#[test]
fn load_from_dir_reads_relative_paths() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("design.def"), "unit design;").unwrap();
    std::fs::write(dir.path().join("nested").join("box.def"), "unit box;").unwrap();

    let fs = load_from_dir(dir.path()).unwrap();
    assert_eq!(fs.len(), 2);
    assert_eq!(fs.read("/design.def"), Some("unit design;"));
    assert_eq!(fs.read("/nested/box.def"), Some("unit box;"));
}

#[test]
fn dot_segments_are_rejected() {
    let mut fs = VirtualFileSystem::new();
    assert_eq!(
        fs.make_file("/a/./b.def", "x"),
        Err(FsError::InvalidPath("/a/./b.def".to_string()))
    );
    assert!(matches!(
        fs.make_file("/../../evil.txt", "x"),
        Err(FsError::InvalidPath(_))
    ));
    assert!(matches!(
        fs.make_directory("/a/../b"),
        Err(FsError::InvalidPath(_))
    ));
    assert!(fs.is_empty());
    assert!(!fs.exists("/a"));
    assert!(fs.list("/").unwrap().is_empty());

    assert!(normalize_path("/x/../y").is_err());
    assert!(normalize_path("./y").is_err());
    // dots inside a name are fine
    fs.make_file("/a/..b/c.d.def", "ok").unwrap();
    assert_eq!(fs.read("/a/..b/c.d.def"), Some("ok"));
}
