//! Card component for items in the dashboard list.

use leptos::prelude::*;

use crate::net::types::Item;
use crate::util::format::format_created_at;

/// One item card with view/edit/delete actions keyed by the item id.
#[component]
pub fn ItemCard(
    item: Item,
    on_view: Callback<i64>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = item.id;
    let created = format_created_at(&item.created_at);
    let description = item
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_owned());

    view! {
        <div class="item-card">
            {match item.cover_image.clone() {
                Some(src) => {
                    view! { <img class="item-card__image" src=src alt=item.title.clone()/> }
                        .into_any()
                }
                None => {
                    view! { <div class="item-card__image item-card__image--empty">"No Image"</div> }
                        .into_any()
                }
            }}
            <div class="item-card__title">{item.title.clone()}</div>
            <div class="item-card__description">{description}</div>
            <div class="item-card__created">"Created: " {created}</div>
            <div class="item-card__actions">
                <button class="btn" on:click=move |_| on_view.run(id)>
                    "View"
                </button>
                <button class="btn btn--secondary" on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
