//! Login page: credential form posting to `/api/login`.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::message_banner::MessageBanner;
use crate::state::messages::{self, MessagesState};
use crate::state::session::SessionState;
use crate::util::validate::check_credentials;

/// Delay before navigating to the dashboard so the success banner is seen.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 1500;

/// Login form. Validates locally, exchanges credentials for a token, stores
/// it, and redirects to the dashboard after a short delay.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(msg) = check_credentials(&email.get_untracked(), &password.get_untracked()) {
            messages::show_error(messages, msg);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::LoginPayload {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let signed_in = match crate::net::api::login(&payload).await {
                    Ok(resp) => {
                        crate::state::session::sign_in(session, resp.token);
                        messages::show_success(messages, "Signed in successfully!");
                        true
                    }
                    Err(err) => {
                        messages::show_error(
                            messages,
                            err.message_or("Login failed. Check your email and password."),
                        );
                        false
                    }
                };
                submitting.set(false);
                if signed_in {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        REDIRECT_DELAY_MS,
                    ))
                    .await;
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Curio"</h1>
            <p>"Sign in to manage your items"</p>
            <MessageBanner/>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:focus=move |_| messages::clear(messages)
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:focus=move |_| messages::clear(messages)
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__alt">"No account? " <a href="/register">"Register"</a></p>
        </div>
    }
}
