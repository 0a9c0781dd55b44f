use crate::domain::a002_directory::ui::DirectoryBrowser;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside data-zone="left" class="app-sidebar">
            <DirectoryBrowser />
        </aside>
    }
}
