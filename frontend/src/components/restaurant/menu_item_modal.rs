use gloo::file::ObjectUrl;
use shared::menu::MenuCategory;
use shared::restaurant::MenuItemForm;
use shared::FieldErrors;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_feedback::{field_error, input_class};

#[derive(Properties, PartialEq)]
pub struct MenuItemModalProps {
    pub form: MenuItemForm,
    pub errors: FieldErrors,
    pub saving: bool,
    /// Form values plus the newly picked image, if any
    pub on_submit: Callback<(MenuItemForm, Option<File>)>,
    pub on_close: Callback<()>,
}

#[function_component(MenuItemModal)]
pub fn menu_item_modal(props: &MenuItemModalProps) -> Html {
    let form = use_state(|| props.form.clone());
    let file = use_state(|| None::<File>);
    // Revoked when replaced or when the modal unmounts
    let preview = use_state(|| None::<ObjectUrl>);
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

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(MenuItemForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(MenuItemForm { description: area.value(), ..(*form).clone() });
        })
    };
    let on_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(MenuItemForm { price: input.value(), ..(*form).clone() });
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(MenuItemForm { category: select.value(), ..(*form).clone() });
        })
    };
    let on_available = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(MenuItemForm { available: input.checked(), ..(*form).clone() });
        })
    };
    let on_file = {
        let file = file.clone();
        let preview = preview.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = input.files().and_then(|files| files.get(0));
            preview.set(
                picked
                    .clone()
                    .map(|f| ObjectUrl::from(gloo::file::File::from(f))),
            );
            file.set(picked);
        })
    };

    let on_submit = {
        let form = form.clone();
        let file = file.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*form).clone(), (*file).clone()));
        })
    };

    let image_src = match &*preview {
        Some(url) => Some(url.to_string()),
        None if !form.image_url.is_empty() => Some(form.image_url.clone()),
        None => None,
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" id="menuItemModal" onclick={on_modal_click}>
                <h5 class="modal-title">{form.title()}</h5>
                <form id="menuItemForm" novalidate={true} onsubmit={on_submit}>
                    <div class="mb-3">
                        <label for="name" class="form-label">{"Name"}</label>
                        <input id="name" type="text" class={input_class(errors, "name")}
                            value={form.name.clone()} oninput={on_name} />
                        {field_error(errors, "name")}
                    </div>
                    <div class="mb-3">
                        <label for="description" class="form-label">{"Description"}</label>
                        <textarea id="description" class="form-control" rows="2"
                            value={form.description.clone()} oninput={on_description} />
                    </div>
                    <div class="row">
                        <div class="col-md-6 mb-3">
                            <label for="price" class="form-label">{"Price"}</label>
                            <input id="price" type="number" step="0.01" min="0" class={input_class(errors, "price")}
                                value={form.price.clone()} oninput={on_price} />
                            {field_error(errors, "price")}
                        </div>
                        <div class="col-md-6 mb-3">
                            <label for="category" class="form-label">{"Category"}</label>
                            <select id="category" class="form-select" onchange={on_category}>
                                <option value="" selected={form.category.is_empty()}>{"Select category..."}</option>
                                {for MenuCategory::ALL.iter().map(|c| html! {
                                    <option value={c.display_name()} selected={form.category == c.display_name()}>
                                        {c.display_name()}
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>
                    <div class="form-check form-switch mb-3">
                        <input id="isAvailable" class="form-check-input" type="checkbox"
                            checked={form.available} onchange={on_available} />
                        <label for="isAvailable" class="form-check-label">{"Available"}</label>
                    </div>
                    <div class="mb-3">
                        <label for="imageFile" class="form-label">{"Image"}</label>
                        <input id="imageFile" type="file" accept="image/*" class="form-control" onchange={on_file} />
                        <div class="image-preview mt-2">
                            if let Some(src) = image_src {
                                <img id="imagePreview" src={src} class="img-thumbnail" alt="Preview" />
                            } else {
                                <div id="noImagePlaceholder" class="text-muted">{"No image selected"}</div>
                            }
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
