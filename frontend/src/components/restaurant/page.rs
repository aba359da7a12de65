use yew::prelude::*;

use super::menu_item_modal::MenuItemModal;
use super::menu_table::MenuTable;
use super::orders_table::OrdersTable;
use crate::hooks::use_restaurant::use_restaurant;
use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RestaurantDashboardProps {
    pub api_client: ApiClient,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(RestaurantDashboard)]
pub fn restaurant_dashboard(props: &RestaurantDashboardProps) -> Html {
    let restaurant = use_restaurant(&props.api_client, props.notify.clone());
    let state = &restaurant.state;
    let actions = &restaurant.actions;

    let on_refresh_orders = {
        let reload = actions.reload_orders.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };
    let on_add_item = {
        let open_add = actions.open_add.clone();
        Callback::from(move |_: MouseEvent| open_add.emit(()))
    };

    html! {
        <div class="restaurant-dashboard">
            <div class="row mb-4 dashboard-counters">
                {counter("Pending Orders", "pendingOrdersCount", state.counters.pending_orders.to_string())}
                {counter("Menu Items", "menuItemsCount", state.counters.menu_items.to_string())}
                {counter("Completed Today", "completedOrdersCount", "N/A".to_string())}
                {counter("Today's Revenue", "todaysRevenue", "N/A".to_string())}
            </div>

            <div class="card mb-4">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{"Orders"}</h5>
                    <button class="btn btn-sm btn-outline-secondary" onclick={on_refresh_orders}>
                        <i class="fas fa-sync"></i>{" Refresh"}
                    </button>
                </div>
                <div class="card-body table-responsive">
                    <OrdersTable
                        orders={state.orders.clone()}
                        loading={state.orders_loading}
                        failed={state.orders_failed}
                        on_status_change={actions.change_status.clone()}
                    />
                </div>
            </div>

            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{"Menu Items"}</h5>
                    <button class="btn btn-sm btn-primary" onclick={on_add_item}>
                        <i class="fas fa-plus"></i>{" Add Item"}
                    </button>
                </div>
                <div class="card-body table-responsive">
                    <MenuTable
                        items={state.menu_items.clone()}
                        loading={state.menu_loading}
                        failed={state.menu_failed}
                        on_edit={actions.open_edit.clone()}
                        on_delete={actions.delete_item.clone()}
                    />
                </div>
            </div>

            if let Some(form) = &state.item_form {
                <MenuItemModal
                    form={form.clone()}
                    errors={state.form_errors.clone()}
                    saving={state.saving}
                    on_submit={actions.submit_item.clone()}
                    on_close={actions.close_form.clone()}
                />
            }
        </div>
    }
}

fn counter(label: &str, id: &'static str, value: String) -> Html {
    html! {
        <div class="col-md-3">
            <div class="card stat-card">
                <div class="card-body">
                    <h6 class="text-muted">{label}</h6>
                    <h3 {id}>{value}</h3>
                </div>
            </div>
        </div>
    }
}
