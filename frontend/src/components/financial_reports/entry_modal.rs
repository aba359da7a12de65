use shared::finance::{fields, EntryForm};
use shared::FieldErrors;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_feedback::{field_error, input_class};

#[derive(Properties, PartialEq)]
pub struct EntryModalProps {
    pub form: EntryForm,
    pub errors: FieldErrors,
    pub saving: bool,
    pub on_submit: Callback<EntryForm>,
    pub on_close: Callback<()>,
}

#[function_component(EntryModal)]
pub fn entry_modal(props: &EntryModalProps) -> Html {
    let form = use_state(|| props.form.clone());
    let errors = &props.errors;

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // One handler per input; `apply` writes the new value into a copy of the form
    let bind = |apply: fn(&mut EntryForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_category = bind(|f, v| f.category_or_source = v);
    let on_description = bind(|f, v| f.description = v);
    let on_amount = bind(|f, v| f.amount = v);
    let on_date = bind(|f, v| f.date = v);

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" id="entry-modal" onclick={on_modal_click}>
                <h3 class="modal-title" id="entry-modal-title">{form.title()}</h3>
                <form id="entry-form" novalidate={true} onsubmit={on_submit}>
                    <div class="form-group">
                        <label for={fields::ENTRY_CATEGORY_SOURCE} id="entry-category-source-label">
                            <i class="fas fa-tag"></i>{format!(" {}", form.kind.label())}
                        </label>
                        <input
                            id={fields::ENTRY_CATEGORY_SOURCE}
                            type="text"
                            class={input_class(errors, fields::ENTRY_CATEGORY_SOURCE)}
                            value={form.category_or_source.clone()}
                            oninput={on_category}
                        />
                        {field_error(errors, fields::ENTRY_CATEGORY_SOURCE)}
                    </div>
                    <div class="form-group">
                        <label for={fields::ENTRY_DESCRIPTION}>{"Description"}</label>
                        <input
                            id={fields::ENTRY_DESCRIPTION}
                            type="text"
                            class={input_class(errors, fields::ENTRY_DESCRIPTION)}
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                        {field_error(errors, fields::ENTRY_DESCRIPTION)}
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for={fields::ENTRY_AMOUNT}>{"Amount"}</label>
                            <input
                                id={fields::ENTRY_AMOUNT}
                                type="number"
                                step="0.01"
                                min="0"
                                class={input_class(errors, fields::ENTRY_AMOUNT)}
                                value={form.amount.clone()}
                                oninput={on_amount}
                            />
                            {field_error(errors, fields::ENTRY_AMOUNT)}
                        </div>
                        <div class="form-group">
                            <label for={fields::ENTRY_DATE}>{"Date"}</label>
                            <input
                                id={fields::ENTRY_DATE}
                                type="date"
                                class={input_class(errors, fields::ENTRY_DATE)}
                                value={form.date.clone()}
                                oninput={on_date}
                            />
                            {field_error(errors, fields::ENTRY_DATE)}
                        </div>
                    </div>
                    <div class="modal-buttons">
                        <button type="button" class="btn secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn primary" disabled={props.saving}>{"Save Entry"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
