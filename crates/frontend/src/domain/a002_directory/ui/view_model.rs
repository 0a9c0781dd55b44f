//! Directory - View Model

use crate::domain::a002_directory::preview::{resolve, PreviewError};
use crate::domain::a002_directory::tree::{self, FileHandleIndex, FileTree, TreeNode};
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct DirectoryVm {
    pub nodes: RwSignal<Vec<TreeNode>>,
    /// `web_sys::File` is !Send, so the index lives in local storage
    pub index: StoredValue<FileHandleIndex<File>, LocalStorage>,
    pub root_name: RwSignal<Option<String>>,
}

impl DirectoryVm {
    pub fn new() -> Self {
        Self {
            nodes: RwSignal::new(Vec::new()),
            index: StoredValue::new_local(FileHandleIndex::new()),
            root_name: RwSignal::new(None),
        }
    }

    /// Replace the previous selection entirely
    pub fn load(&self, selection: Vec<(String, File)>) {
        let root = selection
            .first()
            .and_then(|(path, _)| path.split('/').next())
            .map(str::to_string);
        let tree = FileTree::build(selection);
        log::info!(
            "loaded directory {:?}: {} files, {} directories",
            root,
            tree.file_count(),
            tree.directory_count()
        );

        let (nodes, index) = tree.into_parts();
        self.index.set_value(index);
        self.root_name.set(root);
        self.nodes.set(nodes);
    }

    pub fn toggle(&self, path: &str) {
        self.nodes.update(|nodes| {
            if tree::toggle(nodes, path).is_none() {
                log::warn!("toggle: no directory at {}", path);
            }
        });
    }

    pub fn file(&self, path: &str) -> Result<File, PreviewError> {
        self.index
            .with_value(|index| resolve(index, path).cloned())
    }
}

impl Default for DirectoryVm {
    fn default() -> Self {
        Self::new()
    }
}
