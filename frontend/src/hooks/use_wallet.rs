use shared::wallet::{self, CardForm, WalletPaths, WalletSnapshot};
use shared::{ApiError, FieldErrors, UserProfile, WalletCard, WalletStatistics};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "wallet";

#[derive(Clone, PartialEq)]
pub struct WalletState {
    pub profile: Option<UserProfile>,
    pub cards: Vec<WalletCard>,
    pub statistics: WalletStatistics,
    pub loading: bool,
    pub card_form: Option<CardForm>,
    pub form_errors: FieldErrors,
    /// Card waiting in the delete confirmation dialog
    pub delete_target: Option<WalletCard>,
}

pub struct UseWalletResult {
    pub state: WalletState,
    pub actions: UseWalletActions,
}

#[derive(Clone)]
pub struct UseWalletActions {
    pub refresh: Callback<()>,
    pub open_add: Callback<()>,
    pub open_edit: Callback<WalletCard>,
    pub close_form: Callback<()>,
    pub submit_card: Callback<CardForm>,
    pub ask_delete: Callback<WalletCard>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Store a freshly loaded wallet. A statistics failure keeps the previous
/// numbers on screen.
fn apply_snapshot(
    snapshot: WalletSnapshot,
    cards: &UseStateHandle<Vec<WalletCard>>,
    statistics: &UseStateHandle<WalletStatistics>,
) {
    cards.set(snapshot.cards);
    match snapshot.statistics {
        Ok(stats) => statistics.set(stats),
        Err(e) => Logger::error_with_component(COMPONENT, &format!("Statistics fetch error: {}", e)),
    }
}

fn report_failure(notify: &Callback<(ToastKind, String)>, context: &str, error: &ApiError) {
    Logger::error_with_component(COMPONENT, &format!("{}: {}", context, error));
    notify.emit((ToastKind::Error, error.to_string()));
}

#[hook]
pub fn use_wallet(
    api_client: &ApiClient,
    user_id: i64,
    notify: Callback<(ToastKind, String)>,
) -> UseWalletResult {
    let paths = WalletPaths::new(user_id);
    let profile = use_state(|| None::<UserProfile>);
    let cards = use_state(Vec::<WalletCard>::new);
    let statistics = use_state(WalletStatistics::default);
    let loading = use_state(|| true);
    let card_form = use_state(|| None::<CardForm>);
    let form_errors = use_state(FieldErrors::new);
    let delete_target = use_state(|| None::<WalletCard>);

    // Cards and statistics, then the profile. `true` announces the refresh.
    let load_all = {
        let api_client = api_client.clone();
        let profile = profile.clone();
        let cards = cards.clone();
        let statistics = statistics.clone();
        let loading = loading.clone();
        let notify = notify.clone();

        use_callback(paths, move |announce: bool, paths| {
            let paths = *paths;
            let api_client = api_client.clone();
            let profile = profile.clone();
            let cards = cards.clone();
            let statistics = statistics.clone();
            let loading = loading.clone();
            let notify = notify.clone();

            loading.set(true);
            spawn_local(async move {
                match wallet::load_wallet(&api_client, paths).await {
                    Ok(snapshot) => apply_snapshot(snapshot, &cards, &statistics),
                    Err(e) => report_failure(&notify, "Card fetch error", &e),
                }
                match wallet::load_profile(&api_client, paths).await {
                    Ok(user) => profile.set(Some(user)),
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("User fetch error: {}", e)),
                }
                loading.set(false);
                if announce {
                    notify.emit((ToastKind::Success, "Data refreshed successfully!".to_string()));
                }
            });
        })
    };

    {
        let load_all = load_all.clone();
        use_effect_with(user_id, move |_| {
            load_all.emit(false);
            || ()
        });
    }

    let refresh = {
        let load_all = load_all.clone();
        use_callback((), move |_, _| load_all.emit(true))
    };

    let open_add = {
        let card_form = card_form.clone();
        let form_errors = form_errors.clone();
        use_callback((), move |_, _| {
            form_errors.set(FieldErrors::new());
            card_form.set(Some(CardForm::new()));
        })
    };

    let open_edit = {
        let card_form = card_form.clone();
        let form_errors = form_errors.clone();
        use_callback((), move |card: WalletCard, _| {
            form_errors.set(FieldErrors::new());
            card_form.set(Some(CardForm::for_edit(&card)));
        })
    };

    let close_form = {
        let card_form = card_form.clone();
        use_callback((), move |_, _| card_form.set(None))
    };

    let submit_card = {
        let api_client = api_client.clone();
        let cards = cards.clone();
        let statistics = statistics.clone();
        let loading = loading.clone();
        let card_form = card_form.clone();
        let form_errors = form_errors.clone();
        let notify = notify.clone();

        use_callback(paths, move |form: CardForm, paths| {
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(errors) => {
                    form_errors.set(errors);
                    return;
                }
            };
            form_errors.set(FieldErrors::new());

            let paths = *paths;
            let api_client = api_client.clone();
            let cards = cards.clone();
            let statistics = statistics.clone();
            let loading = loading.clone();
            let card_form = card_form.clone();
            let notify = notify.clone();

            loading.set(true);
            spawn_local(async move {
                match wallet::save_card(&api_client, paths, form.mode, &payload).await {
                    Ok(snapshot) => {
                        let verb = if form.mode.identity_locked() { "updated" } else { "added" };
                        notify.emit((ToastKind::Success, format!("Card successfully {}!", verb)));
                        card_form.set(None);
                        apply_snapshot(snapshot, &cards, &statistics);
                    }
                    Err(e) => report_failure(&notify, "Card save error", &e),
                }
                loading.set(false);
            });
        })
    };

    let ask_delete = {
        let delete_target = delete_target.clone();
        use_callback((), move |card: WalletCard, _| delete_target.set(Some(card)))
    };

    let cancel_delete = {
        let delete_target = delete_target.clone();
        use_callback((), move |_, _| delete_target.set(None))
    };

    let confirm_delete = {
        let api_client = api_client.clone();
        let cards = cards.clone();
        let statistics = statistics.clone();
        let loading = loading.clone();
        let delete_target = delete_target.clone();
        let target_id = (*delete_target).as_ref().map(|card| card.id);

        use_callback((paths, target_id), move |_, (paths, target_id)| {
            let Some(card_id) = *target_id else {
                return;
            };
            let paths = *paths;
            let api_client = api_client.clone();
            let cards = cards.clone();
            let statistics = statistics.clone();
            let loading = loading.clone();
            let delete_target = delete_target.clone();
            let notify = notify.clone();

            loading.set(true);
            spawn_local(async move {
                // The dialog closes only once the list and statistics are back
                match wallet::delete_card(&api_client, paths, card_id).await {
                    Ok(snapshot) => {
                        notify.emit((ToastKind::Success, "Card deleted successfully!".to_string()));
                        apply_snapshot(snapshot, &cards, &statistics);
                        delete_target.set(None);
                    }
                    Err(e) => report_failure(&notify, "Card delete error", &e),
                }
                loading.set(false);
            });
        })
    };

    UseWalletResult {
        state: WalletState {
            profile: (*profile).clone(),
            cards: (*cards).clone(),
            statistics: (*statistics).clone(),
            loading: *loading,
            card_form: (*card_form).clone(),
            form_errors: (*form_errors).clone(),
            delete_target: (*delete_target).clone(),
        },
        actions: UseWalletActions {
            refresh,
            open_add,
            open_edit,
            close_form,
            submit_card,
            ask_delete,
            cancel_delete,
            confirm_delete,
        },
    }
}
