use shared::wallet::{format_card_number, CardForm};
use shared::FieldErrors;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_feedback::{field_error, input_class};
use crate::services::date_utils::current_month;

#[derive(Properties, PartialEq)]
pub struct CardModalProps {
    pub form: CardForm,
    pub errors: FieldErrors,
    pub busy: bool,
    pub on_submit: Callback<CardForm>,
    pub on_close: Callback<()>,
}

/// Add/edit card dialog. Number and CVV are read-only for an existing card.
#[function_component(CardModal)]
pub fn card_modal(props: &CardModalProps) -> Html {
    let form = use_state(|| props.form.clone());
    let errors = &props.errors;
    let locked = form.mode.identity_locked();

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

    let on_holder = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(CardForm { card_holder_name: input.value(), ..(*form).clone() });
        })
    };
    let on_number = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_card_number(&input.value());
            input.set_value(&formatted);
            form.set(CardForm { card_number: formatted, ..(*form).clone() });
        })
    };
    let on_expiry = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(CardForm { expiry_month: input.value(), ..(*form).clone() });
        })
    };
    let on_cvv = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(CardForm { cvv: input.value(), ..(*form).clone() });
        })
    };

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
            <div class="modal-dialog" id="cardModal" onclick={on_modal_click}>
                <h5 class="modal-title" id="cardModalTitle">{form.mode.title()}</h5>
                <form id="cardForm" novalidate={true} onsubmit={on_submit}>
                    <div class="mb-3">
                        <label for="cardHolderName" class="form-label">{"Card Holder Name"}</label>
                        <input id="cardHolderName" type="text" class={input_class(errors, "cardHolderName")}
                            value={form.card_holder_name.clone()} oninput={on_holder} />
                        {field_error(errors, "cardHolderName")}
                    </div>
                    <div class="mb-3">
                        <label for="cardNumber" class="form-label">{"Card Number"}</label>
                        <input id="cardNumber" type="text" inputmode="numeric" maxlength="23"
                            class={input_class(errors, "cardNumber")}
                            disabled={locked}
                            value={form.card_number.clone()} oninput={on_number} />
                        {field_error(errors, "cardNumber")}
                    </div>
                    <div class="row">
                        <div class="col-md-6 mb-3">
                            <label for="expiryDate" class="form-label">{"Expiry Date"}</label>
                            <input id="expiryDate" type="month" min={current_month()}
                                class={input_class(errors, "expiryDate")}
                                value={form.expiry_month.clone()} onchange={on_expiry} />
                            {field_error(errors, "expiryDate")}
                        </div>
                        <div class="col-md-6 mb-3">
                            <label for="cvv" class="form-label">{"CVV"}</label>
                            <input id="cvv" type="password" inputmode="numeric" maxlength="4"
                                class={input_class(errors, "cvv")}
                                disabled={locked}
                                value={form.cvv.clone()} oninput={on_cvv} />
                            {field_error(errors, "cvv")}
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>{"Save Card"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
