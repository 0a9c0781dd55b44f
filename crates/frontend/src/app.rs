use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // ViewMode shared by the chat and the directory browser
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
    }
}
