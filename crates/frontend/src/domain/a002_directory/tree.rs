//! Directory tree model built from a flat folder selection.
//!
//! The browser hands over a flat list of files, each tagged with a
//! relative path such as `project/src/main.rs`. [`FileTree::build`] turns
//! that list into nested [`TreeNode`]s and, in the same pass, fills the
//! [`FileHandleIndex`] used later to read a clicked file.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Path → opaque file handle (`web_sys::File` in the browser)
pub type FileHandleIndex<H> = HashMap<String, H>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    /// Full relative path. For directories: prefix up to and including the directory.
    pub path: String,
    pub children: Vec<TreeNode>,
    /// Только для папок; свёрнута по умолчанию
    pub expanded: bool,
}

impl TreeNode {
    fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            path: path.to_string(),
            children: Vec::new(),
            expanded: false,
        }
    }

    fn directory(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Directory,
            path: path.to_string(),
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Children in display order (see [`display_order`])
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        display_order(&self.children)
    }
}

/// Порядок отображения уровня: сначала папки, затем по имени без учёта регистра.
///
/// The builder keeps insertion order; this is applied only when rendering.
pub fn display_order(nodes: &[TreeNode]) -> Vec<&TreeNode> {
    let mut sorted: Vec<&TreeNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
    sorted
}

/// Flip the `expanded` flag of the directory at `path`.
///
/// Returns the new state, or `None` if no directory has that path.
pub fn toggle(nodes: &mut [TreeNode], path: &str) -> Option<bool> {
    for node in nodes.iter_mut() {
        if !node.is_dir() {
            continue;
        }
        if node.path == path {
            node.expanded = !node.expanded;
            return Some(node.expanded);
        }
        // Искать глубже только если путь лежит внутри этой папки
        if path.starts_with(&node.path) && path[node.path.len()..].starts_with('/') {
            return toggle(&mut node.children, path);
        }
    }
    None
}

/// Entries below a subdirectory of the root go first.
fn is_nested(path: &str) -> bool {
    path.split('/').count() > 2
}

/// Pre-sort a selection for visual grouping: nested entries before flat
/// ones, ties broken by the full path. This is only a heuristic. Per-level
/// ordering is the job of [`display_order`].
pub fn sort_entries<H>(entries: &mut [(String, H)]) {
    entries.sort_by(|(a, _), (b, _)| match (is_nested(a), is_nested(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    });
}

#[derive(Debug, Clone)]
pub struct FileTree<H> {
    pub nodes: Vec<TreeNode>,
    pub index: FileHandleIndex<H>,
}

impl<H> Default for FileTree<H> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<H> FileTree<H> {
    /// Build the tree and the handle index from `(relative_path, handle)` pairs.
    ///
    /// The first path segment is the selected folder itself and is dropped.
    /// A repeated path keeps one node and the last handle.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, H)>,
    {
        let mut entries: Vec<(String, H)> = entries.into_iter().collect();
        sort_entries(&mut entries);

        let mut tree = Self::default();
        for (path, handle) in entries {
            if insert_path(&mut tree.nodes, &path) {
                tree.index.insert(path, handle);
            }
        }

        log::debug!(
            "build_tree: {} files, {} directories, {} root nodes",
            tree.file_count(),
            tree.directory_count(),
            tree.nodes.len()
        );
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn file_count(&self) -> usize {
        count(&self.nodes, NodeKind::File)
    }

    pub fn directory_count(&self) -> usize {
        count(&self.nodes, NodeKind::Directory)
    }

    pub fn handle(&self, path: &str) -> Option<&H> {
        self.index.get(path)
    }

    pub fn into_parts(self) -> (Vec<TreeNode>, FileHandleIndex<H>) {
        (self.nodes, self.index)
    }
}

fn count(nodes: &[TreeNode], kind: NodeKind) -> usize {
    nodes
        .iter()
        .map(|n| usize::from(n.kind == kind) + count(&n.children, kind))
        .sum()
}

/// Walk/extend the tree along `path`. Returns `false` when the path has no
/// segment below the root, so there is nothing to index.
///
/// Kind conflicts resolve in favour of the directory: a file node that
/// turns out to have children becomes a directory, and a file whose name
/// is already taken by a directory gets no node of its own.
fn insert_path(nodes: &mut Vec<TreeNode>, path: &str) -> bool {
    let mut parts = path.split('/');
    let root = parts.next().unwrap_or_default();
    let segments: Vec<&str> = parts.filter(|s| !s.is_empty()).collect();
    let Some(last) = segments.len().checked_sub(1) else {
        return false;
    };

    let mut prefix = root.to_string();
    let mut level = nodes;
    for (i, segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);
        let is_last = i == last;

        let pos = match level.iter().position(|n| n.name == *segment) {
            Some(pos) => {
                let node = &mut level[pos];
                match (node.kind, is_last) {
                    (NodeKind::File, false) => {
                        log::warn!(
                            "'{}' is both a file and a directory; keeping the directory",
                            prefix
                        );
                        node.kind = NodeKind::Directory;
                        node.path = prefix.clone();
                    }
                    (NodeKind::Directory, true) => {
                        log::warn!(
                            "'{}' is both a file and a directory; keeping the directory",
                            path
                        );
                    }
                    _ => {}
                }
                pos
            }
            None => {
                let node = if is_last {
                    TreeNode::file(segment, path)
                } else {
                    TreeNode::directory(segment, &prefix)
                };
                level.push(node);
                level.len() - 1
            }
        };

        if is_last {
            break;
        }
        let current = level;
        level = &mut current[pos].children;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<(String, usize)> {
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| (p.to_string(), i))
            .collect()
    }

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_file_and_subdirectory() {
        let tree = FileTree::build(entries(&["root/a.txt", "root/b/c.txt"]));

        assert_eq!(tree.nodes.len(), 2);
        let a = tree.nodes.iter().find(|n| n.name == "a.txt").unwrap();
        assert_eq!(a.kind, NodeKind::File);
        assert_eq!(a.path, "root/a.txt");

        let b = tree.nodes.iter().find(|n| n.name == "b").unwrap();
        assert_eq!(b.kind, NodeKind::Directory);
        assert_eq!(b.path, "root/b");
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].name, "c.txt");
        assert_eq!(b.children[0].kind, NodeKind::File);
        assert_eq!(b.children[0].path, "root/b/c.txt");
    }

    #[test]
    fn test_file_count_matches_input() {
        let paths = [
            "proj/README.md",
            "proj/src/main.rs",
            "proj/src/lib.rs",
            "proj/src/ui/view.rs",
            "proj/docs/guide.md",
            "proj/Cargo.toml",
        ];
        let tree = FileTree::build(entries(&paths));

        assert_eq!(tree.file_count(), paths.len());
        assert_eq!(tree.index.len(), paths.len());
        assert_eq!(tree.directory_count(), 3);
        for path in paths {
            assert!(tree.handle(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_directory_created_once() {
        let tree = FileTree::build(entries(&[
            "root/src/a.rs",
            "root/src/b.rs",
            "root/src/nested/c.rs",
        ]));

        assert_eq!(names(&tree.nodes), vec!["src"]);
        let src = &tree.nodes[0];
        assert_eq!(src.children.len(), 3);
        assert_eq!(
            src.children.iter().filter(|n| n.name == "nested").count(),
            1
        );
    }

    #[test]
    fn test_duplicate_path_last_handle_wins() {
        let tree = FileTree::build(vec![
            ("root/a.txt".to_string(), "first"),
            ("root/a.txt".to_string(), "second"),
        ]);

        assert_eq!(tree.file_count(), 1);
        assert_eq!(tree.index.len(), 1);
        assert_eq!(tree.handle("root/a.txt"), Some(&"second"));
    }

    #[test]
    fn test_empty_selection() {
        let tree: FileTree<()> = FileTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.index.is_empty());
    }

    #[test]
    fn test_root_only_path_is_ignored() {
        let tree = FileTree::build(entries(&["root", "root/", "root/a.txt"]));
        assert_eq!(names(&tree.nodes), vec!["a.txt"]);
        assert_eq!(tree.index.len(), 1);
    }

    #[test]
    fn test_nested_entries_inserted_first() {
        let tree = FileTree::build(entries(&[
            "root/z.txt",
            "root/b.txt",
            "root/m/n/o.txt",
            "root/a/b.txt",
        ]));
        assert_eq!(names(&tree.nodes), vec!["a", "m", "b.txt", "z.txt"]);
    }

    #[test]
    fn test_display_order_directories_first() {
        let tree = FileTree::build(entries(&[
            "root/b.txt",
            "root/A.txt",
            "root/zeta/x.txt",
            "root/Alpha/y.txt",
        ]));
        let ordered: Vec<&str> = display_order(&tree.nodes)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(ordered, vec!["Alpha", "zeta", "A.txt", "b.txt"]);
    }

    #[test]
    fn test_file_then_directory_conflict_keeps_directory() {
        // within one build "root/x/y" sorts first, so insert by hand
        let mut tree = FileTree::build(entries(&["root/x"]));
        assert_eq!(tree.nodes[0].kind, NodeKind::File);

        assert!(insert_path(&mut tree.nodes, "root/x/y"));
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].kind, NodeKind::Directory);
        assert_eq!(tree.nodes[0].path, "root/x");
        assert_eq!(names(&tree.nodes[0].children), vec!["y"]);
    }

    #[test]
    fn test_directory_then_file_conflict_keeps_directory() {
        let tree = FileTree::build(entries(&["root/x/y", "root/x"]));

        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].kind, NodeKind::Directory);
        assert_eq!(tree.file_count(), 1);
        // handle is still indexed even though no node shows it
        assert!(tree.handle("root/x").is_some());
    }

    #[test]
    fn test_toggle_nested_directory() {
        let mut tree = FileTree::build(entries(&["root/a/b/c.txt", "root/a/d.txt"]));
        assert!(!tree.nodes[0].expanded);

        assert_eq!(toggle(&mut tree.nodes, "root/a/b"), Some(true));
        assert!(!tree.nodes[0].expanded);
        let b = tree.nodes[0].children.iter().find(|n| n.name == "b").unwrap();
        assert!(b.expanded);

        assert_eq!(toggle(&mut tree.nodes, "root/a/b"), Some(false));
        assert_eq!(toggle(&mut tree.nodes, "root/a"), Some(true));
    }

    #[test]
    fn test_toggle_ignores_files_and_unknown_paths() {
        let mut tree = FileTree::build(entries(&["root/a/b.txt", "root/ab/c.txt"]));
        assert_eq!(toggle(&mut tree.nodes, "root/a/b.txt"), None);
        assert_eq!(toggle(&mut tree.nodes, "root/missing"), None);
        // "root/ab" must not be confused with a child of "root/a"
        assert_eq!(toggle(&mut tree.nodes, "root/ab"), Some(true));
        let a = tree.nodes.iter().find(|n| n.name == "a").unwrap();
        assert!(!a.expanded);
    }
}
