//! TopHeader component - application top bar.
//!
//! Shows the application title in chat mode and the previewed file name
//! in preview mode.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const APP_TITLE: &str = "Folio";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let file_name = move || {
        ctx.panel
            .with(|p| p.file_name().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("chat")}
                <h1
                    id="app-title"
                    class="top-header__title"
                    style:display=move || if ctx.is_chat() { "block" } else { "none" }
                >
                    {APP_TITLE}
                </h1>
                <span
                    id="file-name"
                    class="top-header__file-name"
                    style:display=move || if ctx.is_chat() { "none" } else { "block" }
                >
                    {file_name}
                </span>
            </div>
        </header>
    }
}
