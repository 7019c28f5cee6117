//! Dashboard page: user panel, create-item form, and the item list with
//! view/edit/delete flows.
//!
//! Every mutation follows the same shape: authenticated request → a 401
//! expires the session (which redirects to login) → other failures surface
//! the server detail as a banner → success shows a banner and refetches the
//! list once.

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::edit_title_dialog::EditTitleDialog;
use crate::components::image_picker::{ImagePicker, ImagePreview};
use crate::components::item_card::ItemCard;
use crate::components::item_detail_dialog::ItemDetailDialog;
use crate::components::message_banner::MessageBanner;
use crate::net::api::{self, ApiError};
use crate::net::types::{Item, User};
use crate::state::items::ItemFormState;
use crate::state::messages::{self, MessagesState};
use crate::state::session::{self, SessionState};

/// Dashboard page. Redirects to `/login` when there is no session token;
/// otherwise loads the user profile and item list in parallel.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let navigate = use_navigate();

    // Redirect whenever the token is absent; expiring the session anywhere
    // funnels through here, so clearing the token forces re-authentication
    // before any further data request.
    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Profile and item list load in parallel, both keyed on the token.
    let user = LocalResource::new(move || {
        let token = session.get().token;
        async move { load_user(token, session, messages).await }
    });
    let items = LocalResource::new(move || {
        let token = session.get().token;
        async move { load_items(token, session).await }
    });

    // Create form state.
    let form = RwSignal::new(ItemFormState::default());
    let previews = RwSignal::new(Vec::<ImagePreview>::new());
    let file_input = NodeRef::<html::Input>::new();

    // Dialog state, keyed by item id.
    let edit_target = RwSignal::new(None::<i64>);
    let edit_title = RwSignal::new(String::new());
    let edit_pending = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);
    let detail = RwSignal::new(None::<Item>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().submitting {
            return;
        }
        let title = form.get_untracked().title;
        if title.trim().is_empty() {
            messages::show_error(messages, "Title is required");
            return;
        }
        let Some(token) = session.get_untracked().token else {
            messages::show_error(messages, "Please login first");
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let description = form.get_untracked().description;
            let files = file_input
                .get_untracked()
                .map(|input| crate::util::images::files_from_input(&input))
                .unwrap_or_default();
            form.update(|f| f.submitting = true);
            leptos::task::spawn_local(async move {
                // Upload first; the returned paths become the item's images.
                // An upload failure degrades to no images rather than
                // blocking creation.
                let uploaded = api::upload_images(&token, &files).await;
                let payload = crate::net::types::ItemCreate::from_form(
                    &title,
                    &description,
                    uploaded,
                );
                match api::create_item(&token, &payload).await {
                    Ok(item) => {
                        form.update(ItemFormState::reset_fields);
                        previews.set(Vec::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        messages::show_success(
                            messages,
                            format!("Item \"{}\" created successfully!", item.title),
                        );
                        items.refetch();
                    }
                    Err(ApiError::Unauthorized) => session::expire(session),
                    Err(err) => {
                        messages::show_error(messages, err.message_or("Failed to create item"));
                    }
                }
                form.update(|f| f.submitting = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    let on_view = Callback::new(move |id: i64| {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_item(&token, id).await {
                Ok(item) => detail.set(Some(item)),
                Err(ApiError::Unauthorized) => session::expire(session),
                Err(err) => messages::show_error(messages, err.message_or("Failed to load item")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    });

    let on_edit = Callback::new(move |id: i64| {
        let current = items
            .get()
            .and_then(Result::ok)
            .and_then(|list| list.into_iter().find(|i| i.id == id))
            .map(|i| i.title)
            .unwrap_or_default();
        edit_title.set(current);
        edit_pending.set(false);
        edit_target.set(Some(id));
    });

    let on_edit_submit = Callback::new(move |()| {
        let new_title = edit_title.get_untracked();
        if new_title.trim().is_empty() || edit_pending.get_untracked() {
            return;
        }
        let Some(id) = edit_target.get_untracked() else {
            return;
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            edit_pending.set(true);
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::ItemUpdate::title(&new_title);
                match api::update_item(&token, id, &payload).await {
                    Ok(item) => {
                        messages::show_success(
                            messages,
                            format!("Item \"{}\" updated successfully!", item.title),
                        );
                        edit_target.set(None);
                        items.refetch();
                    }
                    Err(ApiError::Unauthorized) => session::expire(session),
                    Err(err) => {
                        messages::show_error(messages, err.message_or("Failed to update item"));
                    }
                }
                edit_pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, new_title);
        }
    });

    let on_delete = Callback::new(move |id: i64| delete_target.set(Some(id)));

    // Declining the confirmation issues no request at all; confirming closes
    // the dialog and fires the delete.
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        let Some(token) = session.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_item(&token, id).await {
                Ok(()) => {
                    messages::show_success(messages, "Item deleted successfully!");
                    items.refetch();
                }
                Err(ApiError::Unauthorized) => session::expire(session),
                Err(err) => messages::show_error(messages, err.message_or("Failed to delete item")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    });

    let on_refresh = move |_| {
        user.refetch();
        items.refetch();
        messages::show_success(messages, "Information refreshed!");
    };

    let on_logout = move |_| {
        let token = session.get_untracked().token.unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Best-effort revocation; the local session goes away regardless
            // of what the server says.
            api::logout(&token).await;
            session::expire(session);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            session::expire(session);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Items"</h1>
                <div class="dashboard-page__header-actions">
                    <button class="btn" on:click=on_refresh>
                        "Refresh"
                    </button>
                    <button class="btn btn--secondary" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <MessageBanner/>

            <section class="user-panel">
                <h2>"Profile"</h2>
                <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                    {move || {
                        user.get()
                            .map(|maybe| match maybe {
                                Some(u) => {
                                    view! {
                                        <div class="user-panel__info">
                                            <p>
                                                <strong>"Name: "</strong>
                                                {u.display_name()}
                                            </p>
                                            <p>
                                                <strong>"Nickname: "</strong>
                                                {u.nick_name.clone().unwrap_or_else(|| "Not set".to_owned())}
                                            </p>
                                            <p>
                                                <strong>"Email: "</strong>
                                                {u.email.clone()}
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Profile unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <section class="create-item">
                <h2>"Create Item"</h2>
                <form class="create-item__form" on:submit=on_create>
                    <label class="create-item__label">
                        "Title"
                        <input
                            type="text"
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="create-item__label">
                        "Description"
                        <textarea
                            prop:value=move || form.get().description
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <ImagePicker previews=previews input_ref=file_input/>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        prop:disabled=move || form.get().submitting
                    >
                        {move || if form.get().submitting { "Creating..." } else { "Create" }}
                    </button>
                </form>
            </section>

            <section class="items">
                <h2>"Items"</h2>
                <Suspense fallback=move || view! { <p>"Loading items..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No items yet. Create your first item!"</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="items__grid">
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <ItemCard
                                                            item=item
                                                            on_view=on_view
                                                            on_edit=on_edit
                                                            on_delete=on_delete
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="items__error">
                                            {err.message_or("Failed to load items")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <Show when=move || edit_target.get().is_some()>
                <EditTitleDialog
                    title=edit_title
                    pending=edit_pending
                    on_submit=on_edit_submit
                    on_cancel=Callback::new(move |()| edit_target.set(None))
                />
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    message="Are you sure you want to delete this item?".to_owned()
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| delete_target.set(None))
                />
            </Show>

            {move || {
                detail
                    .get()
                    .map(|item| {
                        view! {
                            <ItemDetailDialog
                                item=item
                                on_close=Callback::new(move |()| detail.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Fetch the profile for the user panel. A missing token is a no-op; a 401
/// expires the session.
async fn load_user(
    token: Option<String>,
    session: RwSignal<SessionState>,
    messages: RwSignal<MessagesState>,
) -> Option<User> {
    let token = token?;
    match api::fetch_user(&token).await {
        Ok(user) => Some(user),
        Err(ApiError::Unauthorized) => {
            session::expire(session);
            None
        }
        Err(err) => {
            messages::show_error(messages, err.message_or("Failed to load user info"));
            None
        }
    }
}

/// Fetch the caller's items. A missing token yields an empty list without
/// issuing a request; a 401 expires the session.
async fn load_items(
    token: Option<String>,
    session: RwSignal<SessionState>,
) -> Result<Vec<Item>, ApiError> {
    let Some(token) = token else {
        return Ok(Vec::new());
    };
    match api::fetch_my_items(&token).await {
        Ok(items) => Ok(items),
        Err(ApiError::Unauthorized) => {
            session::expire(session);
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}
