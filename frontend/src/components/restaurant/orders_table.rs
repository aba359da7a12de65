use shared::format::format_price;
use shared::restaurant::order_items_preview;
use shared::{FoodOrder, OrderStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrdersTableProps {
    pub orders: Vec<FoodOrder>,
    pub loading: bool,
    pub failed: bool,
    /// (order id, new status)
    pub on_status_change: Callback<(i64, OrderStatus)>,
}

#[function_component(OrdersTable)]
pub fn orders_table(props: &OrdersTableProps) -> Html {
    let rows = if props.loading {
        html! { <tr><td colspan="6" class="text-center"><div class="spinner-border"></div></td></tr> }
    } else if props.failed {
        html! { <tr><td colspan="6" class="text-center text-danger">{"Failed to load orders."}</td></tr> }
    } else if props.orders.is_empty() {
        html! { <tr><td colspan="6" class="text-center">{"No orders found."}</td></tr> }
    } else {
        props
            .orders
            .iter()
            .map(|order| order_row(order, &props.on_status_change))
            .collect()
    };

    html! {
        <table class="table table-hover align-middle">
            <thead>
                <tr>
                    <th>{"Order"}</th>
                    <th>{"Room"}</th>
                    <th>{"Items"}</th>
                    <th>{"Total"}</th>
                    <th>{"Status"}</th>
                    <th>{"Update"}</th>
                </tr>
            </thead>
            <tbody id="ordersTableBody">{rows}</tbody>
        </table>
    }
}

fn order_row(order: &FoodOrder, on_status_change: &Callback<(i64, OrderStatus)>) -> Html {
    let (full, short) = order_items_preview(order);
    let order_id = order.id;
    let onchange = {
        let on_status_change = on_status_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = OrderStatus::parse(&select.value()) {
                on_status_change.emit((order_id, status));
            }
        })
    };

    html! {
        <tr key={order_id}>
            <td><strong>{order_id}</strong></td>
            <td><span class="badge bg-secondary">{"Room"}</span>{format!(" {}", order.room.room_number)}</td>
            <td title={full}>{short}</td>
            <td><strong class="text-success">{format_price(order.total_price)}</strong></td>
            <td><span class={classes!("badge", format!("bg-{}", order.status.badge_color()))}>{order.status.as_str()}</span></td>
            <td>
                <select class="form-select form-select-sm update-order-status" {onchange}>
                    {for OrderStatus::ALL.iter().map(|status| html! {
                        <option value={status.as_str()} selected={*status == order.status}>{status.label()}</option>
                    })}
                </select>
            </td>
        </tr>
    }
}
