pub mod global_context;
pub mod left;
pub mod top_header;

use crate::domain::a001_chat::ui::ChatPanel;
use crate::domain::a002_directory::ui::FilePreviewPanel;
use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (app title | file name)      |
/// +------------------------------------------+
/// |  Sidebar   |  ChatPanel / FilePreview    |
/// +------------------------------------------+
/// ```
///
/// Both center panels stay mounted; ViewMode only switches which one is
/// visible, so the chat transcript survives a file preview.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Sidebar />

                <div class="app-main">
                    <ChatPanel />
                    <FilePreviewPanel />
                </div>
            </div>
        </div>
    }
}
