//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `messages`, `items`) so individual
//! components can depend on small focused models. Session and messages are
//! provided as contexts from the app root.

pub mod items;
pub mod messages;
pub mod session;
