//! Registration page: account form posting to `/api/register`, with an
//! advisory password-strength indicator.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::message_banner::MessageBanner;
use crate::state::messages::{self, MessagesState};
use crate::state::session::SessionState;
use crate::util::password::rate_password;
use crate::util::validate::check_registration;

/// Delay before navigating to the dashboard so the success banner is seen.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 2000;

/// Registration form. The optional name fields are sent as `null` when left
/// blank; the strength label is cosmetic and never blocks submission.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let nick_name = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let strength = Memo::new(move |_| rate_password(&password.get()));

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(msg) = check_registration(&email.get_untracked(), &password.get_untracked()) {
            messages::show_error(messages, msg);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::RegisterPayload::from_form(
                &email.get_untracked(),
                &password.get_untracked(),
                &first_name.get_untracked(),
                &last_name.get_untracked(),
                &nick_name.get_untracked(),
            );
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let signed_in = match crate::net::api::register(&payload).await {
                    Ok(resp) => {
                        crate::state::session::sign_in(session, resp.token);
                        messages::show_success(messages, "Registration successful!");
                        true
                    }
                    Err(err) => {
                        messages::show_error(
                            messages,
                            err.message_or("Registration failed. Try a different email."),
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

    let clear_banner = move |_| messages::clear(messages);

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
            <MessageBanner/>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:focus=clear_banner
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:focus=clear_banner
                    />
                </label>
                <Show when=move || !password.get().is_empty()>
                    <p class=move || format!("password-strength {}", strength.get().css_class())>
                        {move || format!("Password strength: {}", strength.get().label())}
                    </p>
                </Show>
                <label class="auth-form__label">
                    "First name (optional)"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                        on:focus=clear_banner
                    />
                </label>
                <label class="auth-form__label">
                    "Last name (optional)"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                        on:focus=clear_banner
                    />
                </label>
                <label class="auth-form__label">
                    "Nickname (optional)"
                    <input
                        type="text"
                        prop:value=move || nick_name.get()
                        on:input=move |ev| nick_name.set(event_target_value(&ev))
                        on:focus=clear_banner
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-page__alt">"Already registered? " <a href="/login">"Sign in"</a></p>
        </div>
    }
}
