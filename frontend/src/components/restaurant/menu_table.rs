use shared::format::format_price;
use shared::restaurant::{description_preview, thumbnail_src};
use shared::MenuItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuTableProps {
    pub items: Vec<MenuItem>,
    pub loading: bool,
    pub failed: bool,
    pub on_edit: Callback<MenuItem>,
    pub on_delete: Callback<i64>,
}

#[function_component(MenuTable)]
pub fn menu_table(props: &MenuTableProps) -> Html {
    let rows = if props.loading {
        html! { <tr><td colspan="7" class="text-center"><div class="spinner-border"></div></td></tr> }
    } else if props.failed {
        html! { <tr><td colspan="7" class="text-center text-danger">{"Failed to load menu items."}</td></tr> }
    } else if props.items.is_empty() {
        html! { <tr><td colspan="7" class="text-center">{"No menu items found."}</td></tr> }
    } else {
        props
            .items
            .iter()
            .map(|item| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let item = item.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(item.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = item.id;
                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                };
                html! {
                    <tr key={item.id}>
                        <td><img src={thumbnail_src(item)} class="menu-item-thumbnail rounded" alt={item.name.clone()} /></td>
                        <td><strong>{&item.name}</strong></td>
                        <td title={item.description.clone().unwrap_or_default()}>{description_preview(item)}</td>
                        <td><span class="badge bg-secondary">{item.category.as_deref().unwrap_or_default()}</span></td>
                        <td><strong class="text-success">{format_price(item.price)}</strong></td>
                        <td>
                            <div class="form-check form-switch">
                                <input class="form-check-input" type="checkbox" checked={item.available} disabled={true} />
                            </div>
                        </td>
                        <td>
                            <button class="btn btn-sm btn-outline-primary edit-item" onclick={on_edit}><i class="fas fa-edit"></i></button>
                            <button class="btn btn-sm btn-outline-danger delete-item" onclick={on_delete}><i class="fas fa-trash"></i></button>
                        </td>
                    </tr>
                }
            })
            .collect()
    };

    html! {
        <table class="table table-hover align-middle">
            <thead>
                <tr>
                    <th>{"Image"}</th>
                    <th>{"Name"}</th>
                    <th>{"Description"}</th>
                    <th>{"Category"}</th>
                    <th>{"Price"}</th>
                    <th>{"Available"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody id="menuTableBody">{rows}</tbody>
        </table>
    }
}
