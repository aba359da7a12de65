use chrono::NaiveDate;
use shared::format::format_price;
use shared::wallet::{card_gradient, format_expiry, mask_card_number, CardControls, ExpiryState};
use shared::WalletCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardTileProps {
    pub card: WalletCard,
    /// Position in the list, picks the gradient
    pub index: usize,
    pub today: NaiveDate,
    pub on_edit: Callback<WalletCard>,
    pub on_delete: Callback<WalletCard>,
}

#[function_component(CardTile)]
pub fn card_tile(props: &CardTileProps) -> Html {
    let card = &props.card;
    let state = ExpiryState::classify(card.expiry_date, props.today);
    let controls = CardControls::for_card(card, state);

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let card = card.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(card.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let card = card.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(card.clone()))
    };

    html! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div
                class={classes!(
                    "card-visual",
                    card_gradient(props.index),
                    (state == ExpiryState::Expired).then_some("card-expired")
                )}
                data-card-id={card.id.to_string()}
            >
                if card.is_default {
                    <span class="card-status card-default">{"Default"}</span>
                }
                <span class={classes!("card-status", state.css_class())}>{state.label()}</span>
                <div class="card-chip"></div>
                <div class="card-number">{mask_card_number(&card.card_number)}</div>
                <div class="d-flex justify-content-between card-footer-details">
                    <div>
                        <small>{"Card Holder"}</small>
                        <div>{&card.card_holder_name}</div>
                    </div>
                    <div class="text-end">
                        <small>{"Expires"}</small>
                        <div>{format_expiry(card.expiry_date)}</div>
                    </div>
                </div>
                <div class="card-balance-display">
                    <small>{"Balance"}</small>
                    <div class="fw-bold">{format_price(card.balance)}</div>
                </div>
                <div class="card-brand"><i class="fab fa-cc-visa"></i></div>
                <div class="card-actions">
                    <button class="btn edit-btn" title="Edit Card" disabled={!controls.edit_enabled} onclick={on_edit}>
                        <i class="fas fa-edit"></i>
                    </button>
                    if controls.show_delete {
                        <button class="btn delete-btn" title="Delete Card" onclick={on_delete}>
                            <i class="fas fa-trash"></i>
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
