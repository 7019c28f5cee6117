//! Modal dialog showing full item detail. Replaces `window.alert`.

use leptos::prelude::*;

use crate::net::types::Item;

/// Item detail view: description, image count, and author.
#[component]
pub fn ItemDetailDialog(item: Item, on_close: Callback<()>) -> impl IntoView {
    let author = item
        .author
        .as_ref()
        .and_then(|a| a.nick_name.clone())
        .unwrap_or_else(|| "Unknown".to_owned());
    let description = item
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_owned());
    let image_count = item.image_count();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{item.title.clone()}</h2>
                <p class="dialog__detail">{description}</p>
                <p class="dialog__detail">"Images: " {image_count}</p>
                <p class="dialog__detail">"Author: " {author}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
