use crate::domain::a002_directory::preview::FilePreview;
use leptos::prelude::*;

/// Какая панель видна в центре
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Chat,
    FilePreview,
}

/// ViewMode plus the preview it shows. The views are a projection of this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub mode: ViewMode,
    pub preview: Option<FilePreview>,
}

impl PanelState {
    pub fn is_chat(&self) -> bool {
        self.mode == ViewMode::Chat
    }

    pub fn file_name(&self) -> Option<&str> {
        self.preview.as_ref().map(|p| p.file_name.as_str())
    }

    pub fn show_preview(&mut self, preview: FilePreview) {
        self.preview = Some(preview);
        self.mode = ViewMode::FilePreview;
    }

    /// Drops the preview so a large render does not stay in memory
    pub fn back_to_chat(&mut self) {
        self.preview = None;
        self.mode = ViewMode::Chat;
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub panel: RwSignal<PanelState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(PanelState::default()),
        }
    }

    pub fn is_chat(&self) -> bool {
        self.panel.with(|p| p.is_chat())
    }

    pub fn show_file(&self, file_name: &str, text: &str) {
        let preview = FilePreview::render(file_name, text);
        log::info!(
            "preview: {} ({} bytes, markdown: {})",
            file_name,
            text.len(),
            preview.content.is_markdown()
        );
        self.panel.update(|p| p.show_preview(preview));
    }

    pub fn back_to_chat(&self) {
        self.panel.update(|p| p.back_to_chat());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_directory::preview::{resolve, PreviewContent};
    use crate::domain::a002_directory::tree::FileHandleIndex;

    #[test]
    fn test_starts_in_chat_mode() {
        let panel = PanelState::default();
        assert!(panel.is_chat());
        assert_eq!(panel.file_name(), None);
    }

    #[test]
    fn test_show_preview_then_back() {
        let mut panel = PanelState::default();
        let big = "x".repeat(1 << 20);
        panel.show_preview(FilePreview::render("big.txt", &big));

        assert_eq!(panel.mode, ViewMode::FilePreview);
        assert_eq!(panel.file_name(), Some("big.txt"));
        assert_eq!(
            panel.preview.as_ref().map(|p| &p.content),
            Some(&PreviewContent::Plain(big.clone()))
        );

        panel.back_to_chat();
        assert_eq!(panel, PanelState::default());
    }

    #[test]
    fn test_later_preview_replaces_earlier() {
        let mut panel = PanelState::default();
        panel.show_preview(FilePreview::render("a.md", "# a"));
        panel.show_preview(FilePreview::render("b.txt", "b"));
        assert_eq!(panel.file_name(), Some("b.txt"));
    }

    #[test]
    fn test_lookup_miss_keeps_mode() {
        let mut panel = PanelState::default();
        panel.show_preview(FilePreview::render("a.txt", "a"));
        let before = panel.clone();

        let index: FileHandleIndex<()> = FileHandleIndex::new();
        assert!(resolve(&index, "root/missing.txt").is_err());
        assert_eq!(panel, before);
        assert_eq!(panel.mode, ViewMode::FilePreview);
    }
}
