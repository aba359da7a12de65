use gloo::dialogs::confirm;
use shared::restaurant::{
    self, DashboardCounters, MenuItemForm, SaveMenuItemError, CONFIRM_DELETE_MENU_ITEM,
};
use shared::{FieldErrors, FoodOrder, MenuItem, OrderStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "restaurant";

#[derive(Clone, PartialEq)]
pub struct RestaurantState {
    pub orders: Vec<FoodOrder>,
    pub menu_items: Vec<MenuItem>,
    pub counters: DashboardCounters,
    pub orders_loading: bool,
    pub menu_loading: bool,
    pub orders_failed: bool,
    pub menu_failed: bool,
    pub item_form: Option<MenuItemForm>,
    pub form_errors: FieldErrors,
    pub saving: bool,
}

pub struct UseRestaurantResult {
    pub state: RestaurantState,
    pub actions: UseRestaurantActions,
}

#[derive(Clone)]
pub struct UseRestaurantActions {
    pub reload_orders: Callback<()>,
    pub reload_menu: Callback<()>,
    pub change_status: Callback<(i64, OrderStatus)>,
    pub open_add: Callback<()>,
    pub open_edit: Callback<MenuItem>,
    pub close_form: Callback<()>,
    pub submit_item: Callback<(MenuItemForm, Option<File>)>,
    pub delete_item: Callback<i64>,
}

#[hook]
pub fn use_restaurant(api_client: &ApiClient, notify: Callback<(ToastKind, String)>) -> UseRestaurantResult {
    let orders = use_state(Vec::<FoodOrder>::new);
    let menu_items = use_state(Vec::<MenuItem>::new);
    let orders_loading = use_state(|| true);
    let menu_loading = use_state(|| true);
    let orders_failed = use_state(|| false);
    let menu_failed = use_state(|| false);
    let item_form = use_state(|| None::<MenuItemForm>);
    let form_errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let reload_orders = {
        let api_client = api_client.clone();
        let orders = orders.clone();
        let orders_loading = orders_loading.clone();
        let orders_failed = orders_failed.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let orders = orders.clone();
            let orders_loading = orders_loading.clone();
            let orders_failed = orders_failed.clone();

            orders_loading.set(true);
            spawn_local(async move {
                match restaurant::load_orders(&api_client).await {
                    Ok(fetched) => {
                        orders.set(fetched);
                        orders_failed.set(false);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching orders: {}", e));
                        orders_failed.set(true);
                    }
                }
                orders_loading.set(false);
            });
        })
    };

    let reload_menu = {
        let api_client = api_client.clone();
        let menu_items = menu_items.clone();
        let menu_loading = menu_loading.clone();
        let menu_failed = menu_failed.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let menu_items = menu_items.clone();
            let menu_loading = menu_loading.clone();
            let menu_failed = menu_failed.clone();

            menu_loading.set(true);
            spawn_local(async move {
                match restaurant::load_menu_items(&api_client).await {
                    Ok(fetched) => {
                        menu_items.set(fetched);
                        menu_failed.set(false);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching menu items: {}", e));
                        menu_failed.set(true);
                    }
                }
                menu_loading.set(false);
            });
        })
    };

    {
        let reload_orders = reload_orders.clone();
        let reload_menu = reload_menu.clone();
        use_effect_with((), move |_| {
            reload_orders.emit(());
            reload_menu.emit(());
            || ()
        });
    }

    let change_status = {
        let api_client = api_client.clone();
        let orders = orders.clone();
        let notify = notify.clone();

        use_callback((), move |(order_id, status): (i64, OrderStatus), _| {
            let api_client = api_client.clone();
            let orders = orders.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match restaurant::update_order_status(&api_client, order_id, status).await {
                    Ok(fetched) => {
                        orders.set(fetched);
                        notify.emit((
                            ToastKind::Success,
                            format!("Order {} status updated to {}", order_id, status.as_str()),
                        ));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error updating order {}: {}", order_id, e));
                        notify.emit((ToastKind::Error, format!("Failed to update order {}", order_id)));
                    }
                }
            });
        })
    };

    let open_add = {
        let item_form = item_form.clone();
        let form_errors = form_errors.clone();
        use_callback((), move |_, _| {
            form_errors.set(FieldErrors::new());
            item_form.set(Some(MenuItemForm::default()));
        })
    };

    let open_edit = {
        let item_form = item_form.clone();
        let form_errors = form_errors.clone();
        use_callback((), move |item: MenuItem, _| {
            form_errors.set(FieldErrors::new());
            item_form.set(Some(MenuItemForm::from_item(&item)));
        })
    };

    let close_form = {
        let item_form = item_form.clone();
        use_callback((), move |_, _| item_form.set(None))
    };

    let submit_item = {
        let api_client = api_client.clone();
        let menu_items = menu_items.clone();
        let item_form = item_form.clone();
        let form_errors = form_errors.clone();
        let saving = saving.clone();
        let notify = notify.clone();

        use_callback((), move |(form, file): (MenuItemForm, Option<File>), _| {
            if let Err(errors) = form.validate() {
                form_errors.set(errors);
                return;
            }
            form_errors.set(FieldErrors::new());

            let api_client = api_client.clone();
            let menu_items = menu_items.clone();
            let item_form = item_form.clone();
            let form_errors = form_errors.clone();
            let saving = saving.clone();
            let notify = notify.clone();

            saving.set(true);
            spawn_local(async move {
                match restaurant::save_menu_item(&api_client, &form, file.as_ref()).await {
                    Ok(fetched) => {
                        menu_items.set(fetched);
                        item_form.set(None);
                        let verb = if form.id.is_some() { "updated" } else { "created" };
                        notify.emit((ToastKind::Success, format!("Menu item {} successfully!", verb)));
                    }
                    Err(SaveMenuItemError::Invalid(errors)) => form_errors.set(errors),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error saving menu item: {:?}", e));
                        if matches!(e, SaveMenuItemError::Refresh(_)) {
                            item_form.set(None);
                        }
                        notify.emit((ToastKind::Error, e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let delete_item = {
        let api_client = api_client.clone();
        let menu_items = menu_items.clone();

        use_callback((), move |item_id: i64, _| {
            if !confirm(CONFIRM_DELETE_MENU_ITEM) {
                return;
            }
            let api_client = api_client.clone();
            let menu_items = menu_items.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match restaurant::delete_menu_item(&api_client, item_id).await {
                    Ok(fetched) => {
                        menu_items.set(fetched);
                        notify.emit((ToastKind::Success, "Menu item deleted.".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error deleting menu item: {}", e));
                        notify.emit((ToastKind::Error, "Failed to delete menu item.".to_string()));
                    }
                }
            });
        })
    };

    UseRestaurantResult {
        state: RestaurantState {
            counters: DashboardCounters::compute(&orders, &menu_items),
            orders: (*orders).clone(),
            menu_items: (*menu_items).clone(),
            orders_loading: *orders_loading,
            menu_loading: *menu_loading,
            orders_failed: *orders_failed,
            menu_failed: *menu_failed,
            item_form: (*item_form).clone(),
            form_errors: (*form_errors).clone(),
            saving: *saving,
        },
        actions: UseRestaurantActions {
            reload_orders,
            reload_menu,
            change_status,
            open_add,
            open_edit,
            close_form,
            submit_item,
            delete_item,
        },
    }
}
