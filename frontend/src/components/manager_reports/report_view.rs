use shared::format::format_price;
use shared::manager_reports::ManagerReport;
use shared::{
    ComprehensiveReport, CustomerReport, FoodBeverageReport, OccupancyReport, RevenueReport,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub report: ManagerReport,
}

#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    match &props.report {
        ManagerReport::Revenue(data) => revenue_view(data),
        ManagerReport::Occupancy(data) => occupancy_view(data),
        ManagerReport::Customers(data) => customers_view(data),
        ManagerReport::FoodBeverage(data) => food_beverage_view(data),
        ManagerReport::Comprehensive(data) => comprehensive_view(data),
    }
}

fn summary_row(label: &str, value: Html) -> Html {
    html! {
        <tr><td>{format!("{}:", label)}</td><td>{value}</td></tr>
    }
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

fn revenue_view(data: &RevenueReport) -> Html {
    let period = format!(
        "{} to {}",
        data.start_date.as_deref().unwrap_or_default(),
        data.end_date.as_deref().unwrap_or_default()
    );

    html! {
        <div class="row">
            <div class="col-md-6">
                <h6>{"Revenue Summary"}</h6>
                <table class="table table-sm">
                    {summary_row("Total Revenue", html! { <strong>{format_price(data.total_revenue)}</strong> })}
                    {summary_row("Booking Revenue", html! { {format_price(data.total_booking_revenue)} })}
                    {summary_row("Food Revenue", html! { {format_price(data.total_food_revenue)} })}
                    {summary_row("Total Bookings", html! { {data.total_bookings} })}
                    {summary_row("Total Food Orders", html! { {data.total_food_orders} })}
                </table>
            </div>
            <div class="col-md-6">
                <h6>{"Performance Metrics"}</h6>
                <table class="table table-sm">
                    {summary_row("Average Booking Value", html! { {format_price(data.average_booking_value)} })}
                    {summary_row("Average Food Order Value", html! { {format_price(data.average_food_order_value)} })}
                    {summary_row("Report Period", html! { {period} })}
                </table>
            </div>
        </div>
    }
}

fn occupancy_view(data: &OccupancyReport) -> Html {
    html! {
        <div class="row">
            <div class="col-md-4">
                <h6>{"Occupancy Summary"}</h6>
                <table class="table table-sm">
                    {summary_row("Average Occupancy", html! { <strong>{percent(data.average_occupancy)}</strong> })}
                    {summary_row("Peak Occupancy", html! { {percent(data.peak_occupancy)} })}
                    {summary_row("Total Days", html! { {data.total_days} })}
                </table>
            </div>
            <div class="col-md-8">
                <h6>{"Daily Occupancy Details"}</h6>
                <div class="table-responsive">
                    <table class="table table-sm table-striped">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Occupied"}</th>
                                <th>{"Total"}</th>
                                <th>{"Rate"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for data.daily_occupancy.iter().map(|day| html! {
                                <tr>
                                    <td>{&day.date_formatted}</td>
                                    <td>{day.occupied_rooms}</td>
                                    <td>{day.total_rooms}</td>
                                    <td><span class="badge bg-primary">{percent(day.occupancy_rate)}</span></td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn customers_view(data: &CustomerReport) -> Html {
    let stats = &data.customer_stats;

    html! {
        <div class="row">
            <div class="col-md-4">
                <h6>{"Customer Statistics"}</h6>
                <table class="table table-sm">
                    {summary_row("Total Customers", html! { <strong>{stats.total_customers}</strong> })}
                    {summary_row("Active Customers", html! { {stats.active_customers} })}
                    {summary_row("New Customers", html! { {stats.new_customers} })}
                </table>
            </div>
            <div class="col-md-8">
                <h6>{"Top Customers by Spending"}</h6>
                <div class="table-responsive">
                    <table class="table table-sm table-striped">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Total Spent"}</th>
                                <th>{"Bookings"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for data.top_customers.iter().map(|customer| html! {
                                <tr>
                                    <td>{&customer.name}</td>
                                    <td>{&customer.email}</td>
                                    <td>{format_price(customer.total_spent)}</td>
                                    <td>{customer.booking_count}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn food_beverage_view(data: &FoodBeverageReport) -> Html {
    html! {
        <div class="row">
            <div class="col-md-6">
                <h6>{"Food & Beverage Summary"}</h6>
                <table class="table table-sm">
                    {summary_row("Total Revenue", html! { <strong>{format_price(data.total_revenue)}</strong> })}
                    {summary_row("Total Orders", html! { {data.total_orders} })}
                    {summary_row("Completed Orders", html! { {data.completed_orders} })}
                    {summary_row("Average Order Value", html! { {format_price(data.average_order_value)} })}
                </table>
            </div>
            <div class="col-md-6">
                <h6>{"Order Status Breakdown"}</h6>
                <table class="table table-sm">
                    {for data.orders_by_status.iter().map(|(status, count)| summary_row(status, html! { {*count} }))}
                </table>
            </div>
        </div>
    }
}

fn comprehensive_view(data: &ComprehensiveReport) -> Html {
    let revenue = &data.revenue;
    let occupancy = &data.occupancy;

    html! {
        <>
            <div class="alert alert-info">
                <h6><i class="fas fa-info-circle me-2"></i>{"Comprehensive Report"}</h6>
                <p>{format!("Report Period: {}", data.report_period)}</p>
                <p>{format!("Generated: {}", data.generated_at)}</p>
            </div>
            <div class="row">
                <div class="col-md-6">
                    <h6>{"Revenue Summary"}</h6>
                    <p>{"Total Revenue: "}<strong>{format_price(revenue.total_revenue)}</strong></p>
                    <p>{format!("Booking Revenue: {}", format_price(revenue.total_booking_revenue))}</p>
                    <p>{format!("Food Revenue: {}", format_price(revenue.total_food_revenue))}</p>
                </div>
                <div class="col-md-6">
                    <h6>{"Occupancy Summary"}</h6>
                    <p>{"Average Occupancy: "}<strong>{percent(occupancy.average_occupancy)}</strong></p>
                    <p>{format!("Peak Occupancy: {}", percent(occupancy.peak_occupancy))}</p>
                    <p>{format!("Total Days: {}", occupancy.total_days)}</p>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_keeps_backend_precision() {
        assert_eq!(percent(75.0), "75%");
        assert_eq!(percent(62.5), "62.5%");
    }
}
