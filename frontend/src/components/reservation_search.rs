use gloo::dialogs::alert;
use shared::reservations::{
    BookingView, CONTACT_MESSAGE, EMAIL_SENT_MESSAGE, NOT_FOUND_HELP_MESSAGE, SUPPORT_PHONE,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_reservation_search::{use_reservation_search, SearchOutcome};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ReservationSearchProps {
    pub api_client: ApiClient,
}

#[function_component(ReservationSearch)]
pub fn reservation_search(props: &ReservationSearchProps) -> Html {
    let search = use_reservation_search(&props.api_client);
    let state = &search.state;
    let actions = &search.actions;
    let booking_id_ref = use_node_ref();

    let on_booking_id = {
        let set = actions.set_booking_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set.emit(input.value());
        })
    };
    let on_last_name = {
        let set = actions.set_last_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set.emit(input.value());
        })
    };
    let on_remember = {
        let set = actions.set_remember.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set.emit(input.checked());
        })
    };
    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };
    let on_try_again = {
        let reset = actions.reset.clone();
        let booking_id_ref = booking_id_ref.clone();
        Callback::from(move |_: MouseEvent| {
            reset.emit(());
            if let Some(input) = booking_id_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    let result = if state.searching {
        html! {
            <div class="text-center py-4">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{"Searching..."}</span>
                </div>
                <p class="mt-3 text-muted">{"Searching for your reservation..."}</p>
            </div>
        }
    } else {
        match &state.outcome {
            SearchOutcome::None => html! {},
            SearchOutcome::Found(view) => booking_card(view),
            SearchOutcome::NotFound(message) => not_found_panel(message, on_try_again),
        }
    };

    html! {
        <div class="reservation-search">
            <form id="searchReservationForm" class="card card-body mb-4" onsubmit={on_submit}>
                <div class="row g-3">
                    <div class="col-md-6">
                        <label for="bookingId" class="form-label">{"Booking ID"}</label>
                        <input
                            ref={booking_id_ref}
                            id="bookingId"
                            type="text"
                            class="form-control"
                            required={true}
                            value={state.booking_id.clone()}
                            oninput={on_booking_id}
                        />
                    </div>
                    <div class="col-md-6">
                        <label for="lastName" class="form-label">{"Last Name"}</label>
                        <input
                            id="lastName"
                            type="text"
                            class="form-control"
                            required={true}
                            value={state.last_name.clone()}
                            oninput={on_last_name}
                        />
                    </div>
                    <div class="col-12 form-check ms-2">
                        <input id="rememberMe" type="checkbox" class="form-check-input"
                            checked={state.remember} onchange={on_remember} />
                        <label for="rememberMe" class="form-check-label">{"Remember my details"}</label>
                    </div>
                    <div class="col-12">
                        <button id="searchButton" type="submit" class="btn btn-primary" disabled={state.searching}>
                            if state.searching {
                                <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                            }
                            {"Find Reservation"}
                        </button>
                    </div>
                </div>
            </form>
            <div id="searchResult">{result}</div>
            <p class="text-muted small text-center mt-4">{format!("Guest services: {}", SUPPORT_PHONE)}</p>
        </div>
    }
}

fn booking_card(view: &BookingView) -> Html {
    let on_contact = Callback::from(|_: MouseEvent| alert(CONTACT_MESSAGE));
    let on_print = Callback::from(|_: MouseEvent| {
        if let Err(e) = gloo::utils::window().print() {
            Logger::warn_with_component("reservation-search", &format!("Print failed: {:?}", e));
        }
    });
    let on_email = Callback::from(|_: MouseEvent| alert(EMAIL_SENT_MESSAGE));

    html! {
        <div class="card">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span><i class="fas fa-clipboard-check me-2"></i>{"Booking Details"}</span>
                <span class={classes!("badge", view.badge.css_class())}>{&view.status}</span>
            </div>
            <div class="card-body">
                <h5 class="card-title">{&view.title}</h5>
                <div class="row">
                    <div class="col-md-6">
                        <p class="card-text"><i class="fas fa-door-open me-2 text-primary"></i><strong>{"Room:"}</strong>{format!(" {}", view.room)}</p>
                        <p class="card-text"><i class="fas fa-calendar-check me-2 text-primary"></i><strong>{"Check-in:"}</strong>{format!(" {}", view.check_in)}</p>
                        <p class="card-text"><i class="fas fa-calendar-times me-2 text-primary"></i><strong>{"Check-out:"}</strong>{format!(" {}", view.check_out)}</p>
                        <p class="card-text"><i class="fas fa-moon me-2 text-primary"></i><strong>{"Stay Duration:"}</strong>{format!(" {}", view.nights_label)}</p>
                    </div>
                    <div class="col-md-6">
                        <div class="card bg-light border-0">
                            <div class="card-body">
                                <h6 class="card-subtitle mb-2 text-muted">{"Need to make changes?"}</h6>
                                <p class="small">{"If you need to modify or cancel your reservation, please contact our guest services."}</p>
                                <div class="d-grid gap-2">
                                    <button class="btn btn-outline-primary btn-sm" onclick={on_contact}>
                                        <i class="fas fa-phone-alt me-2"></i>{"Contact Us"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <hr class="my-4" />
                <div class="text-center">
                    <button class="btn btn-outline-secondary me-2" onclick={on_print}>
                        <i class="fas fa-print me-2"></i>{"Print Details"}
                    </button>
                    <button class="btn btn-primary" onclick={on_email}>
                        <i class="fas fa-envelope me-2"></i>{"Email Confirmation"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn not_found_panel(message: &str, on_try_again: Callback<MouseEvent>) -> Html {
    let on_contact = Callback::from(|_: MouseEvent| alert(NOT_FOUND_HELP_MESSAGE));

    html! {
        <>
            <div class="alert alert-danger" role="alert">
                <div class="d-flex align-items-center">
                    <i class="fas fa-exclamation-circle fa-2x me-3"></i>
                    <div>
                        <h5 class="mb-1">{"Reservation Not Found"}</h5>
                        <p class="mb-0">{message}</p>
                    </div>
                </div>
            </div>
            <div class="text-center mt-3">
                <p>{"Please check the booking ID and last name, or try these options:"}</p>
                <button class="btn btn-outline-primary btn-sm me-2" id="contactHelpBtn" onclick={on_contact}>
                    <i class="fas fa-headset me-2"></i>{"Contact Support"}
                </button>
                <button class="btn btn-outline-secondary btn-sm" id="newSearchBtn" onclick={on_try_again}>
                    <i class="fas fa-search me-2"></i>{"Try Different Details"}
                </button>
            </div>
        </>
    }
}
