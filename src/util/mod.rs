//! Form and file utilities shared across pages.

pub mod format;
pub mod images;
pub mod password;
pub mod validate;
