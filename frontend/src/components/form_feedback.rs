use shared::FieldErrors;
use yew::prelude::*;

/// `form-control`, plus `invalid` when the field failed validation.
pub fn input_class(errors: &FieldErrors, field: &str) -> Classes {
    classes!("form-control", errors.has(field).then_some("invalid"))
}

/// Inline message under a field, keyed `{field}-error`.
pub fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <div id={format!("{}-error", field)} class="error-message" style="display: block;">{message}</div>
        },
        None => html! {},
    }
}
