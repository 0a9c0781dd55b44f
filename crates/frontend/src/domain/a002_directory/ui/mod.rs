//! Directory Browser UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: File API helpers (selection, text read)
//! - view_model.rs: DirectoryVm (tree signal + handle index)
//! - view.rs: DirectoryBrowser (picker + tree)
//! - file_view.rs: FilePreviewPanel

mod file_view;
mod model;
mod view;
mod view_model;

pub use file_view::FilePreviewPanel;
pub use view::DirectoryBrowser;
pub use view_model::DirectoryVm;
