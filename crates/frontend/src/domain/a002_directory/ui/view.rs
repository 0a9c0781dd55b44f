//! Directory - View Component

use super::model::{collect_selection, read_file_text};
use super::view_model::DirectoryVm;
use crate::domain::a002_directory::preview::PreviewError;
use crate::domain::a002_directory::tree::{display_order, NodeKind, TreeNode};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

fn notify(err: &PreviewError) {
    log::warn!("preview: {:?}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&err.to_string());
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DirectoryBrowser() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = DirectoryVm::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // webkitdirectory нет среди типизированных атрибутов input
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.set_attribute("webkitdirectory", "");
        }
    });

    let on_browse = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        vm.load(collect_selection(&files));
        // allow picking the same folder again
        input.set_value("");
    };

    let on_toggle = Callback::new(move |path: String| vm.toggle(&path));

    // Последнее завершённое чтение побеждает, отмены нет
    let on_open = Callback::new(move |path: String| match vm.file(&path) {
        Ok(file) => wasm_bindgen_futures::spawn_local(async move {
            match read_file_text(&file).await {
                Ok(text) => ctx.show_file(&file.name(), &text),
                Err(e) => {
                    log::error!("failed to read {}: {}", path, e);
                    notify(&PreviewError::Read(e));
                }
            }
        }),
        Err(e) => notify(&e),
    });

    view! {
        <div class="directory-browser">
            <div class="directory-browser__toolbar">
                <button id="browse-button" class="button button--secondary" type="button" on:click=on_browse>
                    {icon("folder-search")}
                    " Load Directory"
                </button>
                <input
                    id="directory-input"
                    type="file"
                    multiple=true
                    style="display: none;"
                    node_ref=input_ref
                    on:change=on_change
                />
            </div>

            <div class="directory-browser__summary">
                {move || {
                    vm.root_name
                        .get()
                        .map(|root| {
                            let files = vm.index.with_value(|index| index.len());
                            format!("{} · {} files", root, files)
                        })
                }}
            </div>

            <div id="directory-tree" class="directory-tree">
                {move || {
                    let nodes = vm.nodes.get();
                    if nodes.is_empty() {
                        return view! {
                            <div class="directory-tree__empty">"No directory loaded"</div>
                        }
                        .into_any();
                    }
                    display_order(&nodes)
                        .into_iter()
                        .cloned()
                        .map(|node| {
                            view! { <TreeItem node=node on_toggle=on_toggle on_open=on_open /> }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// One file or directory. Directories render their children only while expanded.
#[component]
#[allow(non_snake_case)]
fn TreeItem(
    node: TreeNode,
    on_toggle: Callback<String>,
    on_open: Callback<String>,
) -> impl IntoView {
    match node.kind {
        NodeKind::Directory => {
            let expanded = node.expanded;
            let path = node.path.clone();
            let children: Vec<TreeNode> = node.sorted_children().into_iter().cloned().collect();

            view! {
                <div class="directory-item">
                    <div
                        class="directory-header"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_toggle.run(path.clone());
                        }
                    >
                        <div class="directory-icon">
                            {icon(if expanded { "chevron-down" } else { "chevron-right" })}
                            {icon(if expanded { "folder-open" } else { "folder" })}
                        </div>
                        <span class="directory-name">{node.name}</span>
                    </div>
                    <div
                        class="children-container"
                        style:display=if expanded { "block" } else { "none" }
                    >
                        {expanded
                            .then(|| {
                                children
                                    .into_iter()
                                    .map(|child| {
                                        view! {
                                            <TreeItem node=child on_toggle=on_toggle on_open=on_open />
                                        }
                                        .into_any()
                                    })
                                    .collect_view()
                            })}
                    </div>
                </div>
            }
            .into_any()
        }
        NodeKind::File => {
            let path = node.path.clone();
            view! {
                <div class="directory-item">
                    <div class="file-item" on:click=move |_| on_open.run(path.clone())>
                        <div class="file-icon">{icon("file")}</div>
                        <span class="file-name">{node.name}</span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
