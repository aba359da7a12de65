use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::financial_reports::FinancialReportsEditor;
use components::manager_reports::ReportsConsole;
use components::menu_page::MenuPage;
use components::reservation_search::ReservationSearch;
use components::reservations_page::ReservationsPage;
use components::restaurant::RestaurantDashboard;
use components::toast::ToastStack;
use components::wallet::WalletConsole;
use hooks::use_toast::use_toast;
use services::api::ApiClient;
use services::config::{Page, PageConfig};
use services::logging::Logger;

const MOUNT_ID: &str = "app";

/// The menu page shows short cart toasts; the consoles keep theirs longer.
fn toast_duration_ms(config: &Result<PageConfig, String>) -> u32 {
    match config {
        Ok(PageConfig { page: Page::Menu, .. }) => 3000,
        _ => 5000,
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Result<PageConfig, String>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let toast = use_toast(toast_duration_ms(&props.config));

    let config = match &props.config {
        Ok(config) => config,
        Err(message) => {
            return html! {
                <div class="alert alert-danger m-4" role="alert">
                    {format!("This page could not start: {}", message)}
                </div>
            };
        }
    };

    let api_client = ApiClient::with_base_url(config.api_base.clone());
    let notify = toast.push.clone();

    let page = match config.page {
        Page::Menu => html! { <MenuPage {api_client} {notify} /> },
        Page::ManagerReports => html! { <ReportsConsole {api_client} {notify} /> },
        Page::FinancialReports => html! { <FinancialReportsEditor {api_client} {notify} /> },
        Page::Reservations => html! { <ReservationsPage {api_client} user_id={config.user_id} /> },
        Page::Restaurant => html! { <RestaurantDashboard {api_client} {notify} /> },
        Page::ReservationSearch => html! { <ReservationSearch {api_client} /> },
        Page::Wallet => html! { <WalletConsole {api_client} user_id={config.user_id} {notify} /> },
    };

    html! {
        <>
            {page}
            <ToastStack toasts={toast.toasts.clone()} on_dismiss={toast.dismiss.clone()} />
        </>
    }
}

fn main() {
    let Some(root) = gloo::utils::document().get_element_by_id(MOUNT_ID) else {
        Logger::error_with_component("app", &format!("no #{} element to mount into", MOUNT_ID));
        return;
    };

    let config = PageConfig::from_root(&root).map_err(|e| {
        Logger::error_with_component("app", &format!("Invalid page config: {:#}", e));
        format!("{:#}", e)
    });
    if let Ok(config) = &config {
        Logger::info_with_component("app", &format!("Mounting {} page", config.page.key()));
    }

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
