use shared::reservations::room_option_label;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_reservations::{use_reservations, RoomOptions};
use crate::services::api::ApiClient;
use crate::services::date_utils::{input_value, today};

#[derive(Properties, PartialEq)]
pub struct ReservationsPageProps {
    pub api_client: ApiClient,
    pub user_id: i64,
}

/// Booking form with live room availability. The form itself is posted
/// natively to `/reservations/create`; the page only guards the dates.
#[function_component(ReservationsPage)]
pub fn reservations_page(props: &ReservationsPageProps) -> Html {
    let reservations = use_reservations(&props.api_client);
    let state = &reservations.state;
    let actions = &reservations.actions;
    let validated = use_state(|| false);

    let on_toggle = {
        let toggle = actions.toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let on_close = {
        let close = actions.close_sidebar.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_check_in = {
        let set_check_in = actions.set_check_in.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_check_in.emit(input.value());
        })
    };
    let on_check_out = {
        let set_check_out = actions.set_check_out.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_check_out.emit(input.value());
        })
    };
    let on_room = {
        let select_room = actions.select_room.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select_room.emit(select.value());
        })
    };

    let on_submit = {
        let validated = validated.clone();
        let ready = state.dates.is_valid() && state.selected_room.is_some();
        Callback::from(move |e: SubmitEvent| {
            validated.set(true);
            if !ready {
                e.prevent_default();
                e.stop_propagation();
            }
        })
    };

    let room_options = match &state.rooms {
        RoomOptions::Idle => html! { <option value="">{"Select dates first..."}</option> },
        RoomOptions::Loading => html! { <option value="">{"Loading rooms..."}</option> },
        RoomOptions::Failed => html! { <option value="">{"Error loading rooms. Please try again."}</option> },
        RoomOptions::Loaded(rooms) if rooms.is_empty() => {
            html! { <option value="">{"No rooms available for these dates"}</option> }
        }
        RoomOptions::Loaded(rooms) => html! {
            <>
                <option value="" selected={state.selected_room.is_none()}>{"Select a room..."}</option>
                {for rooms.iter().map(|room| html! {
                    <option
                        value={room.id.to_string()}
                        data-price={room.price.to_string()}
                        selected={state.selected_room == Some(room.id)}
                    >
                        {room_option_label(room)}
                    </option>
                })}
            </>
        },
    };

    let check_out_min = input_value(state.dates.check_in.or_else(|| Some(today())));

    html! {
        <div class="reservations-layout">
            <button id="toggle-sidebar" class="btn btn-outline-secondary d-lg-none" onclick={on_toggle}>
                <i class="bi bi-list"></i>
            </button>
            <aside id="sidebar" class={classes!("sidebar", state.sidebar_open.then_some("active"))}>
                <button id="close-sidebar" class="btn-close d-lg-none" aria-label="Close" onclick={on_close}></button>
                <nav class="nav flex-column">
                    <a class="nav-link active" href="/reservations">{"New Reservation"}</a>
                    <a class="nav-link" href="/reservations/search">{"Find My Booking"}</a>
                    <a class="nav-link" href="/menu">{"Restaurant Menu"}</a>
                    <a class="nav-link" href="/wallet">{"My Wallet"}</a>
                </nav>
            </aside>

            <main class="reservations-main">
                <h2>{"Book a Room"}</h2>
                <form
                    method="post"
                    action="/reservations/create"
                    novalidate={true}
                    class={classes!("needs-validation", (*validated).then_some("was-validated"))}
                    onsubmit={on_submit}
                >
                    <input type="hidden" name="userId" value={props.user_id.to_string()} />
                    <div class="row g-3">
                        <div class="col-md-6">
                            <label for="booking-checkin" class="form-label">{"Check-in Date"}</label>
                            <input
                                id="booking-checkin"
                                name="checkInDate"
                                type="date"
                                class="form-control"
                                required={true}
                                min={input_value(Some(today()))}
                                value={input_value(state.dates.check_in)}
                                onchange={on_check_in}
                            />
                        </div>
                        <div class="col-md-6">
                            <label for="booking-checkout" class="form-label">{"Check-out Date"}</label>
                            <input
                                id="booking-checkout"
                                name="checkOutDate"
                                type="date"
                                class="form-control"
                                required={true}
                                min={check_out_min}
                                value={input_value(state.dates.check_out)}
                                onchange={on_check_out}
                            />
                            <div class="invalid-feedback">{"Check-out must be after check-in."}</div>
                        </div>
                        <div class="col-12">
                            <label for="booking-room" class="form-label">{"Room"}</label>
                            <select id="booking-room" name="roomId" class="form-select" required={true} onchange={on_room}>
                                {room_options}
                            </select>
                            if let Some(info) = &state.price_info {
                                <div id="room-price-info" class="form-text">
                                    <i class="bi bi-info-circle me-1"></i>{info}
                                </div>
                            }
                        </div>
                        <div class="col-12">
                            <label for="booking-requests" class="form-label">{"Special Requests"}</label>
                            <textarea id="booking-requests" name="specialRequests" class="form-control" rows="3"></textarea>
                        </div>
                        <div class="col-12">
                            <button type="submit" class="btn btn-primary">{"Book Now"}</button>
                        </div>
                    </div>
                </form>
            </main>
        </div>
    }
}
