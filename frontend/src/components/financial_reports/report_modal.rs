use shared::finance::{fields, report_type_label, ReportForm};
use shared::{FieldErrors, ReportType};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_feedback::{field_error, input_class};

#[derive(Properties, PartialEq)]
pub struct ReportModalProps {
    pub form: ReportForm,
    pub errors: FieldErrors,
    pub saving: bool,
    pub on_submit: Callback<ReportForm>,
    pub on_close: Callback<()>,
}

/// Create/edit dialog for a report. Rendered only while open, so the local
/// form state starts from `props.form` every time.
#[function_component(ReportModal)]
pub fn report_modal(props: &ReportModalProps) -> Html {
    let form = use_state(|| props.form.clone());
    let errors = &props.errors;
    let editing = form.is_edit();

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

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReportForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ReportForm { report_type: select.value(), ..(*form).clone() });
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ReportForm { description: area.value(), ..(*form).clone() });
        })
    };
    let on_start = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReportForm { start: input.value(), ..(*form).clone() });
        })
    };
    let on_end = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReportForm { end: input.value(), ..(*form).clone() });
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
            <div class="modal-dialog" id="report-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{form.title()}</h3>
                <form id="report-form" novalidate={true} onsubmit={on_submit}>
                    <div class="form-group">
                        <label for={fields::REPORT_NAME}>{"Report Name"}</label>
                        <input
                            id={fields::REPORT_NAME}
                            type="text"
                            class={input_class(errors, fields::REPORT_NAME)}
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        {field_error(errors, fields::REPORT_NAME)}
                    </div>
                    <div class="form-group">
                        <label for={fields::REPORT_TYPE}>{"Report Type"}</label>
                        <select
                            id={fields::REPORT_TYPE}
                            class={input_class(errors, fields::REPORT_TYPE)}
                            disabled={editing}
                            onchange={on_type}
                        >
                            <option value="" selected={form.report_type.is_empty()}>{"Select type..."}</option>
                            {for ReportType::ALL.iter().map(|t| html! {
                                <option value={t.as_str()} selected={form.report_type == t.as_str()}>
                                    {report_type_label(*t)}
                                </option>
                            })}
                        </select>
                        {field_error(errors, fields::REPORT_TYPE)}
                    </div>
                    <div class="form-group">
                        <label for="report-description">{"Description"}</label>
                        <textarea
                            id="report-description"
                            class="form-control"
                            rows="3"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for={fields::REPORT_START}>{"Start Date"}</label>
                            <input
                                id={fields::REPORT_START}
                                type="datetime-local"
                                class={input_class(errors, fields::REPORT_START)}
                                value={form.start.clone()}
                                onchange={on_start}
                            />
                            {field_error(errors, fields::REPORT_START)}
                        </div>
                        <div class="form-group">
                            <label for={fields::REPORT_END}>{"End Date"}</label>
                            <input
                                id={fields::REPORT_END}
                                type="datetime-local"
                                class={input_class(errors, fields::REPORT_END)}
                                value={form.end.clone()}
                                onchange={on_end}
                            />
                            {field_error(errors, fields::REPORT_END)}
                        </div>
                    </div>
                    <div class="modal-buttons">
                        <button type="button" class="btn secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn primary" disabled={props.saving}>
                            {if editing { "Update Report" } else { "Create Report" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
