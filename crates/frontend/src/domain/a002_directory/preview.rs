//! File preview: resolving a clicked path and choosing how to show the text.

use super::tree::FileHandleIndex;
use crate::shared::markdown::{render_markdown, MarkdownOptions};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// Path is not in the current selection
    NotFound(String),
    /// Reading the file failed
    Read(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NotFound(_) => write!(f, "File not found."),
            PreviewError::Read(e) => write!(f, "Could not read file: {}", e),
        }
    }
}

/// Rendered preview body
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    /// HTML produced by the markdown renderer
    Markdown(String),
    /// Raw text for a `<pre>` block
    Plain(String),
}

impl PreviewContent {
    pub fn is_markdown(&self) -> bool {
        matches!(self, PreviewContent::Markdown(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub file_name: String,
    pub content: PreviewContent,
}

impl FilePreview {
    /// `.md` (any case) → markdown, everything else → literal text
    pub fn render(file_name: &str, text: &str) -> Self {
        let content = if is_markdown_file(file_name) {
            PreviewContent::Markdown(render_markdown(text, &MarkdownOptions::document()))
        } else {
            PreviewContent::Plain(text.to_string())
        };
        Self {
            file_name: file_name.to_string(),
            content,
        }
    }
}

pub fn is_markdown_file(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".md")
}

pub fn resolve<'a, H>(index: &'a FileHandleIndex<H>, path: &str) -> Result<&'a H, PreviewError> {
    index
        .get(path)
        .ok_or_else(|| PreviewError::NotFound(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_markdown_extension_detection() {
        assert!(is_markdown_file("notes.md"));
        assert!(is_markdown_file("README.MD"));
        assert!(!is_markdown_file("notes.txt"));
        assert!(!is_markdown_file("notes.md.txt"));
        assert!(!is_markdown_file("md"));
    }

    #[test]
    fn test_md_and_txt_render_differently() {
        let text = "# Title\n\n<b>x</b>";
        let md = FilePreview::render("notes.md", text);
        let txt = FilePreview::render("notes.txt", text);

        assert!(md.content.is_markdown());
        assert_eq!(txt.content, PreviewContent::Plain(text.to_string()));
        assert_ne!(md.content, txt.content);
        match md.content {
            PreviewContent::Markdown(html) => assert!(html.contains("<h1 id=\"title\">")),
            PreviewContent::Plain(_) => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_miss() {
        let mut index: FileHandleIndex<u8> = HashMap::new();
        index.insert("root/a.txt".to_string(), 7);

        assert_eq!(resolve(&index, "root/a.txt"), Ok(&7));
        let err = resolve(&index, "root/b.txt").unwrap_err();
        assert_eq!(err, PreviewError::NotFound("root/b.txt".to_string()));
        assert_eq!(err.to_string(), "File not found.");
    }
}
