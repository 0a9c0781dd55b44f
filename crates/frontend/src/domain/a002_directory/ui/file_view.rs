//! File preview panel

use crate::domain::a002_directory::preview::PreviewContent;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn FilePreviewPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let content = move || ctx.panel.with(|p| p.preview.as_ref().map(|pv| pv.content.clone()));
    let is_markdown = move || ctx.panel.with(|p| {
        p.preview
            .as_ref()
            .map(|pv| pv.content.is_markdown())
            .unwrap_or(false)
    });

    view! {
        <div
            id="file-view"
            class="file-view"
            style:display=move || if ctx.is_chat() { "none" } else { "flex" }
        >
            <div class="file-view__toolbar">
                <button
                    id="back-to-chat-btn"
                    class="button button--secondary"
                    type="button"
                    on:click=move |_| ctx.back_to_chat()
                >
                    {icon("arrow-left")}
                    " Back to Chat"
                </button>
            </div>

            <div
                id="file-content"
                class=move || if is_markdown() { "file-content markdown-body" } else { "file-content" }
            >
                {move || {
                    content()
                        .map(|c| match c {
                            PreviewContent::Markdown(html) => {
                                view! { <div inner_html=html></div> }.into_any()
                            }
                            // Только текст, разметка внутри не интерпретируется
                            PreviewContent::Plain(text) => view! { <pre>{text}</pre> }.into_any(),
                        })
                }}
            </div>
        </div>
    }
}
