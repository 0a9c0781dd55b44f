//! Local directory browser
//!
//! Structure:
//! - tree.rs: TreeNode model and the path-list → tree builder
//! - preview.rs: path lookup and markdown/plain preview rendering
//! - ui/: picker, tree view and file preview panel

pub mod preview;
pub mod tree;
pub mod ui;
