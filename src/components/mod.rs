//! Reusable UI components.

pub mod confirm_dialog;
pub mod edit_title_dialog;
pub mod image_picker;
pub mod item_card;
pub mod item_detail_dialog;
pub mod message_banner;
