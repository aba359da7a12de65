use shared::wallet::mask_card_number;
use shared::WalletCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteCardModalProps {
    pub card: WalletCard,
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(DeleteCardModal)]
pub fn delete_card_modal(props: &DeleteCardModalProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" id="deleteCardModal" onclick={on_modal_click}>
                <h5 class="modal-title">{"Delete Card"}</h5>
                <p>{"Are you sure you want to delete this card?"}</p>
                <div class="delete-card-summary">
                    <div id="deleteCardName"><strong>{&props.card.card_holder_name}</strong></div>
                    <div id="deleteCardNumber">{mask_card_number(&props.card.card_number)}</div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="button" class="btn btn-danger" disabled={props.busy} onclick={on_confirm}>
                        {if props.busy { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
