//! Booking pages: the new-reservation form's date and room helpers, and the
//! guest-facing booking lookup.

use chrono::NaiveDate;

use crate::api_error::ApiError;
use crate::backend::{Method, RestBackend};
use crate::endpoint::Endpoint;
use crate::models::{Booking, BookingSearchRequest, Room};
use crate::storage::KeyValueStore;

pub const SEARCH_PATH: &str = "/api/bookings/search";
pub const BOOKING_ID_KEY: &str = "bookingId";
pub const LAST_NAME_KEY: &str = "lastName";

pub const SUPPORT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_MESSAGE: &str =
    "Please call +1 (555) 123-4567 to speak with our guest services team.";
pub const NOT_FOUND_HELP_MESSAGE: &str =
    "Please call +1 (555) 123-4567 for assistance with finding your reservation.";
pub const EMAIL_SENT_MESSAGE: &str = "Confirmation email sent to your registered email address.";

/// Check-in/check-out pair of the booking form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl StayDates {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self { check_in, check_out }
    }

    /// Check-out strictly after check-in
    pub fn is_valid(&self) -> bool {
        matches!((self.check_in, self.check_out), (Some(i), Some(o)) if o > i)
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(i), Some(o)) if o > i => Some((o - i).num_days()),
            _ => None,
        }
    }

    /// New check-in; a check-out that is no longer after it is cleared.
    pub fn with_check_in(self, check_in: Option<NaiveDate>) -> Self {
        let check_out = match (check_in, self.check_out) {
            (Some(i), Some(o)) if o <= i => None,
            (_, out) => out,
        };
        Self { check_in, check_out }
    }

    pub fn with_check_out(self, check_out: Option<NaiveDate>) -> Self {
        Self { check_out, ..self }
    }

    /// Availability lookup, only once the range is valid
    pub fn rooms_endpoint(&self) -> Option<Endpoint> {
        match (self.check_in, self.check_out) {
            (Some(i), Some(o)) if o > i => Some(
                Endpoint::new("/api/rooms/available")
                    .with_query("checkInDate", i.to_string())
                    .with_query("checkOutDate", o.to_string()),
            ),
            _ => None,
        }
    }
}

/// `Room 201 - Suite ($150/night)`
pub fn room_option_label(room: &Room) -> String {
    format!(
        "Room {} - {} (${}/night)",
        room.room_number,
        room.room_type,
        trim_price(room.price)
    )
}

/// `3 night(s) × $150 = $450.00`
pub fn price_estimate(room: &Room, nights: i64) -> String {
    format!(
        "{} night(s) × ${} = ${:.2}",
        nights,
        trim_price(room.price),
        room.price * nights as f64
    )
}

/// Prices print like JavaScript numbers: `150`, `99.5`
fn trim_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        price.to_string()
    }
}

pub async fn load_available_rooms<B: RestBackend>(backend: &B, endpoint: &Endpoint) -> Result<Vec<Room>, ApiError> {
    backend.get_json(endpoint).await
}

// ---------------------------------------------------------------------------
// Booking lookup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Success,
    Danger,
    Warning,
    Secondary,
}

impl StatusBadge {
    pub fn for_status(status: &str) -> Self {
        match status {
            "CONFIRMED" => StatusBadge::Success,
            "CANCELLED" => StatusBadge::Danger,
            "PENDING_PAYMENT" => StatusBadge::Warning,
            _ => StatusBadge::Secondary,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Success => "bg-success",
            StatusBadge::Danger => "bg-danger",
            StatusBadge::Warning => "bg-warning",
            StatusBadge::Secondary => "bg-secondary",
        }
    }
}

/// Everything the booking card shows, derived once from the record
#[derive(Debug, Clone, PartialEq)]
pub struct BookingView {
    pub title: String,
    pub status: String,
    pub badge: StatusBadge,
    pub room: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub nights_label: String,
}

impl BookingView {
    pub fn from_booking(booking: &Booking) -> Self {
        let nights = (booking.check_out_date - booking.check_in_date).num_days();
        let room = match booking.room.room_type.as_deref() {
            Some(kind) => format!("{} ({})", booking.room.room_number, kind),
            None => booking.room.room_number.clone(),
        };
        Self {
            title: format!("Booking #{}", booking.id),
            status: booking.status.clone(),
            badge: StatusBadge::for_status(&booking.status),
            room,
            check_in: long_date(booking.check_in_date),
            check_out: long_date(booking.check_out_date),
            nights,
            nights_label: nights_label(nights),
        }
    }
}

/// `Saturday, June 1, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn nights_label(nights: i64) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{} nights", nights)
    }
}

pub async fn search_booking<B: RestBackend>(backend: &B, request: &BookingSearchRequest) -> Result<Booking, ApiError> {
    backend.exchange_json(Method::Post, SEARCH_PATH, request).await
}

/// Lookup fields kept when "remember me" is ticked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberedSearch {
    pub booking_id: String,
    pub last_name: String,
}

impl RememberedSearch {
    /// Only a complete pair pre-fills the form.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let booking_id = store.get(BOOKING_ID_KEY).filter(|v| !v.is_empty())?;
        let last_name = store.get(LAST_NAME_KEY).filter(|v| !v.is_empty())?;
        Some(Self { booking_id, last_name })
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(BOOKING_ID_KEY, &self.booking_id);
        store.set(LAST_NAME_KEY, &self.last_name);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::testing::RecordingBackend;
    use crate::storage::MemoryStore;

    const BOOKING_JSON: &str = r#"{"id":123,"status":"CONFIRMED","checkInDate":"2024-06-01","checkOutDate":"2024-06-04","room":{"roomNumber":"201","type":"Suite"}}"#;

    fn date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    fn suite(price: f64) -> Room {
        Room {
            id: 7,
            room_number: "201".into(),
            room_type: "Suite".into(),
            price,
        }
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let same_day = StayDates::new(date("2024-06-01"), date("2024-06-01"));
        assert!(!same_day.is_valid());
        assert!(same_day.rooms_endpoint().is_none());

        let stay = StayDates::new(date("2024-06-01"), date("2024-06-04"));
        assert_eq!(stay.nights(), Some(3));
        assert_eq!(
            stay.rooms_endpoint().unwrap().to_string(),
            "/api/rooms/available?checkInDate=2024-06-01&checkOutDate=2024-06-04"
        );
    }

    #[test]
    fn test_moving_check_in_past_check_out_clears_it() {
        let stay = StayDates::new(date("2024-06-01"), date("2024-06-04"));
        let moved = stay.with_check_in(date("2024-06-04"));
        assert_eq!(moved.check_out, None);

        let kept = stay.with_check_in(date("2024-06-02"));
        assert_eq!(kept.check_out, date("2024-06-04"));
    }

    #[test]
    fn test_room_label_and_estimate() {
        assert_eq!(room_option_label(&suite(150.0)), "Room 201 - Suite ($150/night)");
        assert_eq!(price_estimate(&suite(150.0), 3), "3 night(s) × $150 = $450.00");
        assert_eq!(price_estimate(&suite(99.5), 2), "2 night(s) × $99.5 = $199.00");
    }

    #[test]
    fn test_search_renders_confirmed_booking() {
        let backend = RecordingBackend::new().respond(SEARCH_PATH, BOOKING_JSON);
        let request = BookingSearchRequest {
            booking_id: "123".into(),
            last_name: "Smith".into(),
        };
        let booking = block_on(search_booking(&backend, &request)).unwrap();
        let view = BookingView::from_booking(&booking);

        assert_eq!(view.title, "Booking #123");
        assert_eq!(view.nights_label, "3 nights");
        assert_eq!(view.badge, StatusBadge::Success);
        assert_eq!(view.badge.css_class(), "bg-success");
        assert_eq!(view.check_in, "Saturday, June 1, 2024");
        assert_eq!(view.room, "201 (Suite)");

        let body = backend.body_of(Method::Post, SEARCH_PATH).unwrap();
        assert_eq!(body, r#"{"bookingId":"123","lastName":"Smith"}"#);
    }

    #[test]
    fn test_search_failure_carries_backend_text() {
        let backend = RecordingBackend::new().fail(
            Method::Post,
            SEARCH_PATH,
            ApiError::from_error_body(404, "Not Found", "Booking not found"),
        );
        let request = BookingSearchRequest {
            booking_id: "9".into(),
            last_name: "Doe".into(),
        };
        let err = block_on(search_booking(&backend, &request)).unwrap_err();
        assert_eq!(err.to_string(), "Booking not found");
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(StatusBadge::for_status("CANCELLED").css_class(), "bg-danger");
        assert_eq!(StatusBadge::for_status("PENDING_PAYMENT").css_class(), "bg-warning");
        assert_eq!(StatusBadge::for_status("CHECKED_OUT").css_class(), "bg-secondary");
        assert_eq!(nights_label(1), "1 night");
        assert_eq!(nights_label(0), "0 nights");
    }

    #[test]
    fn test_remembered_search_needs_both_keys() {
        let store = MemoryStore::new();
        store.set(BOOKING_ID_KEY, "123");
        assert_eq!(RememberedSearch::load(&store), None);

        RememberedSearch {
            booking_id: "123".into(),
            last_name: "Smith".into(),
        }
        .save(&store);
        let loaded = RememberedSearch::load(&store).unwrap();
        assert_eq!(loaded.last_name, "Smith");
    }
}
