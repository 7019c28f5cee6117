//! Transient success/error banner bound to the messages context.

use leptos::prelude::*;

use crate::state::messages::MessagesState;

/// Renders the current banner, if any. Auto-dismiss is handled by the
/// messages state itself.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();

    view! {
        {move || {
            messages.get().entry.map(|entry| {
                view! {
                    <div class=format!("message message--{}", entry.kind.css_class())>
                        {entry.text}
                    </div>
                }
            })
        }}
    }
}
