//! Chat - View Component

use super::model::post_chat;
use super::view_model::{ChatMessage, ChatRole, ChatVm};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::markdown::{render_markdown, MarkdownOptions};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Каждая отправка - отдельный запрос, ответы могут прийти в любом порядке
    let submit = move || {
        let raw = vm.input.get_untracked();
        let mut outgoing = None;
        vm.transcript.update(|t| outgoing = t.submit(&raw));
        let Some(message) = outgoing else {
            return;
        };

        vm.input.set(String::new());
        scroll_to_bottom();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_chat(&message).await;
            vm.transcript.update(|t| {
                t.receive(outcome);
            });
            scroll_to_bottom();
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div
            id="chat-view"
            class="chat-view"
            style:display=move || if ctx.is_chat() { "flex" } else { "none" }
        >
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding: 8px 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <span style="color: var(--colorNeutralForeground3); font-size: 13px;">
                    {move || format!("Messages: {}", vm.transcript.with(|t| t.len()))}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.transcript.update(|t| t.clear())
                >
                    {icon("plus")}
                    " New chat"
                </Button>
            </Flex>

            <div id="chat-container" class="chat-container" node_ref=messages_container_ref>
                <For
                    each=move || vm.transcript.with(|t| t.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
            </div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <textarea
                    id="user-input"
                    class="chat-input"
                    rows="2"
                    placeholder="Type a message. Enter sends, Shift+Enter adds a line."
                    prop:value=move || vm.input.get()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button id="chat-submit" class="button button--primary" type="submit">
                    {icon("send")}
                </button>
            </form>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    match message.role {
        // Текст пользователя никогда не интерпретируется как разметка
        ChatRole::User => view! {
            <div class="message user">
                <div class="message-content">{message.content}</div>
            </div>
        }
        .into_any(),
        ChatRole::Assistant => {
            let html = render_markdown(&message.content, &MarkdownOptions::chat());
            view! {
                <div class="message ai">
                    <div class="message-content" inner_html=html></div>
                </div>
            }
            .into_any()
        }
    }
}
