use shared::format::format_price;
use shared::menu::{image_src, CategoryFilter, MenuCategory, DEFAULT_FOOD_IMAGE};
use shared::MenuItem;
use web_sys::{HtmlImageElement, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_menu::use_menu;
use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct MenuPageProps {
    pub api_client: ApiClient,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(MenuPage)]
pub fn menu_page(props: &MenuPageProps) -> Html {
    let menu = use_menu(&props.api_client, props.notify.clone());
    let state = &menu.state;

    let on_search = {
        let search = menu.actions.search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.emit(input.value());
        })
    };

    let filters = std::iter::once(CategoryFilter::All)
        .chain(MenuCategory::ALL.into_iter().map(CategoryFilter::Only));

    html! {
        <div class="menu-page">
            <div class="menu-toolbar">
                <div class="category-buttons">
                    {for filters.map(|filter| {
                        let select = menu.actions.select_category.clone();
                        let active = state.catalog.category() == filter;
                        let label = match filter {
                            CategoryFilter::All => "All",
                            CategoryFilter::Only(category) => category.display_name(),
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("btn", "category-btn", active.then_some("active"))}
                                data-category={filter.key()}
                                onclick={Callback::from(move |_: MouseEvent| select.emit(filter.key().to_string()))}
                            >
                                {label}
                            </button>
                        }
                    })}
                </div>
                <input
                    type="search"
                    class="form-control menu-search"
                    placeholder="Search menu..."
                    value={state.catalog.search().to_string()}
                    oninput={on_search}
                />
                <span class="cart-badge" style={if state.cart_count > 0 { "" } else { "display: none;" }}>
                    {state.cart_count}
                </span>
            </div>

            <div class="row" id="menuItemsContainer">
                {render_items(state.loading, state.error.as_deref(), state.catalog.visible(), &menu.actions.order)}
            </div>
        </div>
    }
}

fn render_items(loading: bool, error: Option<&str>, items: Vec<&MenuItem>, order: &Callback<MenuItem>) -> Html {
    if loading {
        return html! {
            <div class="col-12 text-center py-5">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{"Loading menu items..."}</span>
                </div>
            </div>
        };
    }
    if let Some(error) = error {
        return html! { <p class="text-center text-danger">{error}</p> };
    }
    if items.is_empty() {
        return html! { <p class="text-center">{"No menu items available at the moment."}</p> };
    }

    items
        .into_iter()
        .map(|item| html! {
            <MenuCard key={item.id} item={item.clone()} on_order={order.clone()} />
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct MenuCardProps {
    item: MenuItem,
    on_order: Callback<MenuItem>,
}

#[function_component(MenuCard)]
fn menu_card(props: &MenuCardProps) -> Html {
    let item = &props.item;

    let on_order = {
        let on_order = props.on_order.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_order.emit(item.clone()))
    };

    // Broken uploads fall back to the stock picture once
    let on_image_error = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(DEFAULT_FOOD_IMAGE) {
            img.set_src(DEFAULT_FOOD_IMAGE);
        }
    });

    html! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="menu-card">
                <div class="menu-card-img">
                    <img src={image_src(item)} alt={item.name.clone()} class="img-fluid rounded" onerror={on_image_error} />
                </div>
                <div class="menu-card-body">
                    <h4 class="menu-item-title">{&item.name}</h4>
                    <span class="menu-item-category badge bg-secondary mb-2">
                        {item.category.as_deref().unwrap_or("Uncategorized")}
                    </span>
                    <p class="menu-item-desc">
                        {item.description.as_deref().unwrap_or("No description available")}
                    </p>
                    <div class="d-flex justify-content-between align-items-center">
                        <span class="menu-item-price">{format_price(item.price)}</span>
                        <button class="btn btn-sm btn-primary order-btn" data-id={item.id.to_string()} onclick={on_order}>
                            {"Order"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
