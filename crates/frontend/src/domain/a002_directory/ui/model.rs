//! Directory - Model (browser File API)

use wasm_bindgen::JsValue;
use web_sys::{File, FileList};

/// `(webkitRelativePath, file)` pairs of a folder selection.
pub fn collect_selection(files: &FileList) -> Vec<(String, File)> {
    let mut selection = Vec::with_capacity(files.length() as usize);
    for i in 0..files.length() {
        if let Some(file) = files.get(i) {
            let path = relative_path_or_name(&webkit_relative_path(&file), &file.name());
            selection.push((path, file));
        }
    }
    selection
}

/// web-sys has no binding for `File.webkitRelativePath`
fn webkit_relative_path(file: &File) -> String {
    js_sys::Reflect::get(file, &JsValue::from_str("webkitRelativePath"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Browsers without `webkitdirectory` leave the relative path empty. The
/// bare name is then placed under a `.` root so it still shows up.
pub fn relative_path_or_name(relative: &str, name: &str) -> String {
    if relative.is_empty() {
        format!("./{}", name)
    } else {
        relative.to_string()
    }
}

/// Read the whole file as UTF-8 text.
pub async fn read_file_text(file: &File) -> Result<String, String> {
    let promise: js_sys::Promise = file.text();
    let text = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_directory::tree::FileTree;

    #[test]
    fn test_relative_path_kept() {
        assert_eq!(
            relative_path_or_name("photos/2024/a.md", "a.md"),
            "photos/2024/a.md"
        );
    }

    #[test]
    fn test_missing_relative_path_falls_back_to_name() {
        let path = relative_path_or_name("", "notes.md");
        assert_eq!(path, "./notes.md");

        // still lands in the tree under the "." root
        let tree = FileTree::build(vec![(path, 1u8)]);
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].name, "notes.md");
        assert!(tree.handle("./notes.md").is_some());
    }
}
