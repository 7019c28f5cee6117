#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

/// Create-item form fields plus the in-flight flag that makes submission
/// non-re-entrant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFormState {
    pub title: String,
    pub description: String,
    pub submitting: bool,
}

impl ItemFormState {
    /// Clear the form after a successful create, leaving the in-flight flag
    /// to its owner.
    pub fn reset_fields(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
