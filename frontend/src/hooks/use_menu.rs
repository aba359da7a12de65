use shared::cart::{add_to_cart, Cart};
use shared::menu::{load_available_items, CategoryFilter, MenuCatalog};
use shared::MenuItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStore;

#[derive(Clone, PartialEq)]
pub struct MenuState {
    pub catalog: MenuCatalog,
    pub loading: bool,
    pub error: Option<String>,
    pub cart_count: u32,
}

pub struct UseMenuResult {
    pub state: MenuState,
    pub actions: UseMenuActions,
}

#[derive(Clone)]
pub struct UseMenuActions {
    pub select_category: Callback<String>,
    pub search: Callback<String>,
    pub order: Callback<MenuItem>,
}

#[hook]
pub fn use_menu(api_client: &ApiClient, notify: Callback<(ToastKind, String)>) -> UseMenuResult {
    let items = use_state(Vec::<MenuItem>::new);
    let category = use_state(CategoryFilter::default);
    let search = use_state(String::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let cart_count = use_state(|| Cart::load(&BrowserStore).map(|cart| cart.total_quantity()).unwrap_or(0));

    let fetch = {
        let api_client = api_client.clone();
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |filter: CategoryFilter, _| {
            let api_client = api_client.clone();
            let items = items.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            spawn_local(async move {
                match load_available_items(&api_client, filter).await {
                    Ok(fetched) => {
                        items.set(fetched);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("menu", &format!("Error fetching menu items: {}", e));
                        error.set(Some(
                            "Failed to load menu items. Please try again later.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(CategoryFilter::All);
            || ()
        });
    }

    let select_category = {
        let category = category.clone();
        let fetch = fetch.clone();
        let notify = notify.clone();
        use_callback((), move |key: String, _| match CategoryFilter::from_key(&key) {
            Ok(filter) => {
                category.set(filter);
                fetch.emit(filter);
            }
            Err(e) => {
                Logger::warn_with_component("menu", &e.to_string());
                notify.emit((ToastKind::Error, e.to_string()));
            }
        })
    };

    let on_search = {
        let search = search.clone();
        use_callback((), move |term: String, _| search.set(term))
    };

    let order = {
        let cart_count = cart_count.clone();
        use_callback((), move |item: MenuItem, _| {
            match add_to_cart(&BrowserStore, &item) {
                Ok(count) => {
                    cart_count.set(count);
                    notify.emit((ToastKind::Success, format!("{} added to cart", item.name)));
                }
                Err(e) => {
                    Logger::error_with_component("menu", &format!("Stored cart is unreadable: {}", e));
                    notify.emit((ToastKind::Error, "Could not add the item to your cart.".to_string()));
                }
            }
        })
    };

    let mut catalog = MenuCatalog::new((*items).clone());
    catalog.set_category(*category);
    catalog.set_search((*search).clone());

    UseMenuResult {
        state: MenuState {
            catalog,
            loading: *loading,
            error: (*error).clone(),
            cart_count: *cart_count,
        },
        actions: UseMenuActions {
            select_category,
            search: on_search,
            order,
        },
    }
}
