use super::*;

#[test]
fn item_form_defaults_are_empty_and_idle() {
    let form = ItemFormState::default();
    assert!(form.title.is_empty());
    assert!(form.description.is_empty());
    assert!(!form.submitting);
}

#[test]
fn reset_fields_clears_inputs_but_not_flag() {
    let mut form = ItemFormState {
        title: "Demo".to_owned(),
        description: "desc".to_owned(),
        submitting: true,
    };
    form.reset_fields();
    assert!(form.title.is_empty());
    assert!(form.description.is_empty());
    assert!(form.submitting);
}
