use shared::reservations::{search_booking, BookingView, RememberedSearch};
use shared::BookingSearchRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStore;

#[derive(Clone, PartialEq)]
pub enum SearchOutcome {
    None,
    Found(BookingView),
    /// The backend's message, shown in the not-found panel
    NotFound(String),
}

#[derive(Clone, PartialEq)]
pub struct ReservationSearchState {
    pub booking_id: String,
    pub last_name: String,
    pub remember: bool,
    pub searching: bool,
    pub outcome: SearchOutcome,
}

pub struct UseReservationSearchResult {
    pub state: ReservationSearchState,
    pub actions: UseReservationSearchActions,
}

#[derive(Clone)]
pub struct UseReservationSearchActions {
    pub set_booking_id: Callback<String>,
    pub set_last_name: Callback<String>,
    pub set_remember: Callback<bool>,
    pub submit: Callback<()>,
    /// Clear both inputs for another attempt
    pub reset: Callback<()>,
}

#[hook]
pub fn use_reservation_search(api_client: &ApiClient) -> UseReservationSearchResult {
    let remembered = use_memo((), |_| RememberedSearch::load(&BrowserStore));
    let booking_id = use_state(|| {
        (*remembered)
            .as_ref()
            .map(|r| r.booking_id.clone())
            .unwrap_or_default()
    });
    let last_name = use_state(|| {
        (*remembered)
            .as_ref()
            .map(|r| r.last_name.clone())
            .unwrap_or_default()
    });
    let remember = use_state(|| remembered.is_some());
    let searching = use_state(|| false);
    let outcome = use_state(|| SearchOutcome::None);

    let set_booking_id = {
        let booking_id = booking_id.clone();
        use_callback((), move |value: String, _| booking_id.set(value))
    };

    let set_last_name = {
        let last_name = last_name.clone();
        use_callback((), move |value: String, _| last_name.set(value))
    };

    let set_remember = {
        let remember = remember.clone();
        use_callback((), move |checked: bool, _| remember.set(checked))
    };

    let submit = {
        let api_client = api_client.clone();
        let searching = searching.clone();
        let outcome = outcome.clone();
        let deps = ((*booking_id).clone(), (*last_name).clone(), *remember);

        use_callback(deps, move |_, (booking_id, last_name, remember)| {
            if *remember {
                RememberedSearch {
                    booking_id: booking_id.clone(),
                    last_name: last_name.clone(),
                }
                .save(&BrowserStore);
            }

            let request = BookingSearchRequest {
                booking_id: booking_id.trim().to_string(),
                last_name: last_name.trim().to_string(),
            };
            let api_client = api_client.clone();
            let searching = searching.clone();
            let outcome = outcome.clone();

            searching.set(true);
            spawn_local(async move {
                match search_booking(&api_client, &request).await {
                    Ok(booking) => outcome.set(SearchOutcome::Found(BookingView::from_booking(&booking))),
                    Err(e) => {
                        Logger::warn_with_component("reservation-search", &format!("Booking lookup failed: {}", e));
                        outcome.set(SearchOutcome::NotFound(e.to_string()));
                    }
                }
                searching.set(false);
            });
        })
    };

    let reset = {
        let booking_id = booking_id.clone();
        let last_name = last_name.clone();
        use_callback((), move |_, _| {
            booking_id.set(String::new());
            last_name.set(String::new());
        })
    };

    UseReservationSearchResult {
        state: ReservationSearchState {
            booking_id: (*booking_id).clone(),
            last_name: (*last_name).clone(),
            remember: *remember,
            searching: *searching,
            outcome: (*outcome).clone(),
        },
        actions: UseReservationSearchActions {
            set_booking_id,
            set_last_name,
            set_remember,
            submit,
            reset,
        },
    }
}
