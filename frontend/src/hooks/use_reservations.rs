use shared::reservations::{load_available_rooms, price_estimate, StayDates};
use shared::Room;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::parse_input_date;
use crate::services::logging::Logger;

/// What the room select currently offers
#[derive(Clone, PartialEq)]
pub enum RoomOptions {
    /// Dates not chosen yet
    Idle,
    Loading,
    Loaded(Vec<Room>),
    Failed,
}

#[derive(Clone, PartialEq)]
pub struct ReservationsState {
    pub sidebar_open: bool,
    pub dates: StayDates,
    pub rooms: RoomOptions,
    pub selected_room: Option<i64>,
    pub price_info: Option<String>,
}

pub struct UseReservationsResult {
    pub state: ReservationsState,
    pub actions: UseReservationsActions,
}

#[derive(Clone)]
pub struct UseReservationsActions {
    pub toggle_sidebar: Callback<()>,
    pub close_sidebar: Callback<()>,
    pub set_check_in: Callback<String>,
    pub set_check_out: Callback<String>,
    pub select_room: Callback<String>,
}

#[hook]
pub fn use_reservations(api_client: &ApiClient) -> UseReservationsResult {
    let sidebar_open = use_state(|| false);
    let dates = use_state(StayDates::default);
    let rooms = use_state(|| RoomOptions::Idle);
    let selected_room = use_state(|| None::<i64>);

    // Availability follows the dates; an invalid range leaves the list alone
    {
        let api_client = api_client.clone();
        let rooms = rooms.clone();
        let selected_room = selected_room.clone();
        use_effect_with(*dates, move |dates| {
            if let Some(endpoint) = dates.rooms_endpoint() {
                rooms.set(RoomOptions::Loading);
                selected_room.set(None);
                spawn_local(async move {
                    match load_available_rooms(&api_client, &endpoint).await {
                        Ok(found) => rooms.set(RoomOptions::Loaded(found)),
                        Err(e) => {
                            Logger::error_with_component("reservations", &format!("Error loading rooms: {}", e));
                            rooms.set(RoomOptions::Failed);
                        }
                    }
                });
            }
            || ()
        });
    }

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        use_callback(*sidebar_open, move |_, open| sidebar_open.set(!*open))
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        use_callback((), move |_, _| sidebar_open.set(false))
    };

    let set_check_in = {
        let dates = dates.clone();
        use_callback(*dates, move |value: String, current| {
            dates.set(current.with_check_in(parse_input_date(&value)));
        })
    };

    let set_check_out = {
        let dates = dates.clone();
        use_callback(*dates, move |value: String, current| {
            dates.set(current.with_check_out(parse_input_date(&value)));
        })
    };

    let select_room = {
        let selected_room = selected_room.clone();
        use_callback((), move |value: String, _| selected_room.set(value.parse::<i64>().ok()))
    };

    let price_info = match (&*rooms, *selected_room, dates.nights()) {
        (RoomOptions::Loaded(list), Some(room_id), Some(nights)) => list
            .iter()
            .find(|room| room.id == room_id)
            .map(|room| price_estimate(room, nights)),
        _ => None,
    };

    UseReservationsResult {
        state: ReservationsState {
            sidebar_open: *sidebar_open,
            dates: *dates,
            rooms: (*rooms).clone(),
            selected_room: *selected_room,
            price_info,
        },
        actions: UseReservationsActions {
            toggle_sidebar,
            close_sidebar,
            set_check_in,
            set_check_out,
            select_room,
        },
    }
}
