use shared::format::format_price;
use shared::{UserProfile, WalletStatistics};
use yew::prelude::*;

use super::card_modal::CardModal;
use super::card_tile::CardTile;
use super::delete_modal::DeleteCardModal;
use crate::hooks::use_toast::ToastKind;
use crate::hooks::use_wallet::use_wallet;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct WalletConsoleProps {
    pub api_client: ApiClient,
    pub user_id: i64,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(WalletConsole)]
pub fn wallet_console(props: &WalletConsoleProps) -> Html {
    let wallet = use_wallet(&props.api_client, props.user_id, props.notify.clone());
    let state = &wallet.state;
    let actions = &wallet.actions;
    let today = today();

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };
    let on_add = {
        let open_add = actions.open_add.clone();
        Callback::from(move |_: MouseEvent| open_add.emit(()))
    };

    let cards = if state.loading && state.cards.is_empty() {
        html! {
            <div class="text-center py-5">
                <div class="spinner-border text-primary" role="status"></div>
            </div>
        }
    } else if state.cards.is_empty() {
        html! {
            <div class="empty-wallet text-center py-5">
                <i class="fas fa-wallet fa-3x mb-3"></i>
                <p>{"No cards in your wallet yet."}</p>
            </div>
        }
    } else {
        state
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                html! {
                    <CardTile
                        key={card.id}
                        card={card.clone()}
                        index={index}
                        today={today}
                        on_edit={actions.open_edit.clone()}
                        on_delete={actions.ask_delete.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="wallet-console">
            {profile_header(state.profile.as_ref(), props.user_id)}
            {statistics_row(&state.statistics)}

            <div class="d-flex justify-content-between align-items-center mb-3">
                <h4 class="mb-0">{"My Cards"}</h4>
                <div>
                    <button class="btn btn-outline-secondary me-2" disabled={state.loading} onclick={on_refresh}>
                        <i class="fas fa-sync-alt"></i>{" Refresh"}
                    </button>
                    <button class="btn btn-primary" onclick={on_add}>
                        <i class="fas fa-plus"></i>{" Add Card"}
                    </button>
                </div>
            </div>

            <div class="row" id="cardsContainer">{cards}</div>

            if let Some(form) = &state.card_form {
                <CardModal
                    form={form.clone()}
                    errors={state.form_errors.clone()}
                    busy={state.loading}
                    on_submit={actions.submit_card.clone()}
                    on_close={actions.close_form.clone()}
                />
            }
            if let Some(card) = &state.delete_target {
                <DeleteCardModal
                    card={card.clone()}
                    busy={state.loading}
                    on_confirm={actions.confirm_delete.clone()}
                    on_cancel={actions.cancel_delete.clone()}
                />
            }
        </div>
    }
}

fn profile_header(profile: Option<&UserProfile>, user_id: i64) -> Html {
    let name = profile
        .and_then(|p| p.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Guest".to_string());
    let account_id = profile.and_then(|p| p.id).unwrap_or(user_id);

    html! {
        <div class="wallet-header mb-4">
            <h2 id="userName">{name}</h2>
            <small class="text-muted">{"Account ID: "}<span id="accountId">{account_id}</span></small>
        </div>
    }
}

fn statistics_row(stats: &WalletStatistics) -> Html {
    html! {
        <div class="row mb-4 wallet-stats">
            {stat_card("Total Cards", "totalCards", stats.total_cards.to_string())}
            {stat_card("Active Cards", "activeCards", stats.active_cards.to_string())}
            {stat_card("Expiring Soon", "expiringCards", stats.expiring_cards.to_string())}
            {stat_card("Total Balance", "accountBalance", format_price(stats.total_balance))}
        </div>
    }
}

fn stat_card(label: &'static str, id: &'static str, value: String) -> Html {
    html! {
        <div class="col-md-3 col-sm-6 mb-3">
            <div class="stat-card">
                <div class="stat-label">{label}</div>
                <div class="stat-value" id={id}>{value}</div>
            </div>
        </div>
    }
}
