#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

/// How long a banner stays up before auto-dismissing.
pub const DISMISS_AFTER_MS: u64 = 5000;

/// Banner flavor; controls the CSS modifier on the rendered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single transient banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub kind: MessageKind,
    pub text: String,
}

/// Message surface context: at most one visible banner at a time.
///
/// The epoch counter ties each auto-dismiss timer to the message it was
/// started for, so a stale timer never hides a newer message.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub entry: Option<MessageEntry>,
    epoch: u64,
}

impl MessagesState {
    /// Replace the visible banner and return the epoch of the new message.
    pub fn show(&mut self, kind: MessageKind, text: String) -> u64 {
        self.epoch += 1;
        self.entry = Some(MessageEntry { kind, text });
        self.epoch
    }

    /// Dismiss the banner only if it is still the one `epoch` was issued for.
    pub fn dismiss(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.entry = None;
        }
    }

    /// Dismiss whatever banner is visible.
    pub fn dismiss_now(&mut self) {
        self.entry = None;
    }
}

/// Show a banner and schedule its auto-dismiss.
pub fn show_message(
    messages: RwSignal<MessagesState>,
    kind: MessageKind,
    text: impl Into<String>,
) {
    let text = text.into();
    let mut epoch = 0;
    messages.update(|m| epoch = m.show(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
        messages.update(|m| m.dismiss(epoch));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = epoch;
    }
}

pub fn show_success(messages: RwSignal<MessagesState>, text: impl Into<String>) {
    show_message(messages, MessageKind::Success, text);
}

pub fn show_error(messages: RwSignal<MessagesState>, text: impl Into<String>) {
    show_message(messages, MessageKind::Error, text);
}

/// Hide the current banner immediately (e.g. when a form input gains focus).
pub fn clear(messages: RwSignal<MessagesState>) {
    messages.update(MessagesState::dismiss_now);
}
