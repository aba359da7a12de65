//! Payment-card wallet: expiry classification, card display helpers, the
//! add/edit form and the mutate-then-refetch workflows.

use chrono::{Datelike, Months, NaiveDate};

use crate::api_error::ApiError;
use crate::backend::{Method, RestBackend};
use crate::endpoint::Endpoint;
use crate::models::{CardPayload, UserProfile, WalletCard, WalletStatistics};
use crate::validation::FieldErrors;

pub const DEFAULT_USER_ID: i64 = 1;
pub const MASK_PLACEHOLDER: &str = "•••• •••• •••• ••••";

const GRADIENTS: [&str; 6] = [
    "card-gradient-1",
    "card-gradient-2",
    "card-gradient-3",
    "card-gradient-4",
    "card-gradient-5",
    "card-gradient-6",
];

/// Endpoints of one user's wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletPaths {
    pub user_id: i64,
}

impl WalletPaths {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }

    pub fn user(&self) -> String {
        format!("/api/users/{}", self.user_id)
    }

    pub fn cards(&self) -> String {
        format!("/api/users/{}/wallet/cards", self.user_id)
    }

    pub fn card(&self, card_id: i64) -> String {
        format!("{}/{}", self.cards(), card_id)
    }

    pub fn statistics(&self) -> String {
        format!("/api/users/{}/wallet/statistics", self.user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryState {
    Active,
    ExpiringSoon,
    Expired,
}

impl ExpiryState {
    /// Expiring on `today` counts as expired; anything up to three calendar
    /// months out is expiring soon.
    pub fn classify(expiry: NaiveDate, today: NaiveDate) -> Self {
        if expiry <= today {
            return ExpiryState::Expired;
        }
        match today.checked_add_months(Months::new(3)) {
            Some(horizon) if expiry <= horizon => ExpiryState::ExpiringSoon,
            _ => ExpiryState::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryState::Active => "Active",
            ExpiryState::ExpiringSoon => "Expiring Soon",
            ExpiryState::Expired => "Expired",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ExpiryState::Active => "status-active",
            ExpiryState::ExpiringSoon => "status-expiring",
            ExpiryState::Expired => "status-expired",
        }
    }
}

/// Live reformat of the card number input: digits only, groups of four.
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn mask_card_number(number: &str) -> String {
    let cleaned: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return MASK_PLACEHOLDER.to_string();
    }
    let count = cleaned.chars().count();
    let last4: String = cleaned.chars().skip(count.saturating_sub(4)).collect();
    format!("•••• •••• •••• {}", last4)
}

/// `2027-01-01` -> `01/27`
pub fn format_expiry(expiry: NaiveDate) -> String {
    format!("{:02}/{:02}", expiry.month(), expiry.year().rem_euclid(100))
}

pub fn card_gradient(index: usize) -> &'static str {
    GRADIENTS[index % GRADIENTS.len()]
}

/// What the card tile lets the user do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardControls {
    pub edit_enabled: bool,
    /// The default card has no delete button at all
    pub show_delete: bool,
}

impl CardControls {
    pub fn for_card(card: &WalletCard, state: ExpiryState) -> Self {
        Self {
            edit_enabled: !card.is_default && state != ExpiryState::Expired,
            show_delete: !card.is_default,
        }
    }
}

// ---------------------------------------------------------------------------
// Card form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormMode {
    Add,
    Edit(i64),
}

impl CardFormMode {
    /// Card number and CVV are fixed once a card exists.
    pub fn identity_locked(&self) -> bool {
        matches!(self, CardFormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            CardFormMode::Add => "Add New Card",
            CardFormMode::Edit(_) => "Edit Card",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    pub mode: CardFormMode,
    pub card_holder_name: String,
    /// As displayed, with grouping spaces
    pub card_number: String,
    /// `YYYY-MM` from the month input
    pub expiry_month: String,
    pub cvv: String,
}

impl CardForm {
    pub fn new() -> Self {
        Self {
            mode: CardFormMode::Add,
            card_holder_name: String::new(),
            card_number: String::new(),
            expiry_month: String::new(),
            cvv: String::new(),
        }
    }

    pub fn for_edit(card: &WalletCard) -> Self {
        Self {
            mode: CardFormMode::Edit(card.id),
            card_holder_name: card.card_holder_name.clone(),
            card_number: format_card_number(&card.card_number),
            expiry_month: card.expiry_date.format("%Y-%m").to_string(),
            cvv: String::new(),
        }
    }

    pub fn validate(&self) -> Result<CardPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let holder = self.card_holder_name.trim();
        if holder.is_empty() {
            errors.add("cardHolderName", "Card holder name is required.");
        }

        let number: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !self.mode.identity_locked()
            && (number.len() < 12 || number.len() > 19 || !number.chars().all(|c| c.is_ascii_digit()))
        {
            errors.add("cardNumber", "Card number must be 12 to 19 digits.");
        }

        let expiry = format!("{}-01", self.expiry_month.trim());
        if NaiveDate::parse_from_str(&expiry, "%Y-%m-%d").is_err() {
            errors.add("expiryDate", "Expiry date is required.");
        }

        let cvv = self.cvv.trim();
        let cvv = if self.mode.identity_locked() {
            None
        } else {
            if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
                errors.add("cvv", "CVV must be 3 or 4 digits.");
            }
            Some(cvv.to_string())
        };

        errors.into_result(CardPayload {
            card_holder_name: holder.to_string(),
            card_number: number,
            expiry_date: expiry,
            cvv,
        })
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

/// Cards plus the server-computed statistics. Statistics are fetched after
/// the cards and a failure there does not hide the cards.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSnapshot {
    pub cards: Vec<WalletCard>,
    pub statistics: Result<WalletStatistics, ApiError>,
}

pub async fn load_profile<B: RestBackend>(backend: &B, paths: WalletPaths) -> Result<UserProfile, ApiError> {
    backend.get_json(&Endpoint::new(paths.user())).await
}

pub async fn load_wallet<B: RestBackend>(backend: &B, paths: WalletPaths) -> Result<WalletSnapshot, ApiError> {
    let cards = backend.get_json(&Endpoint::new(paths.cards())).await?;
    let statistics = backend.get_json(&Endpoint::new(paths.statistics())).await;
    Ok(WalletSnapshot { cards, statistics })
}

pub async fn save_card<B: RestBackend>(
    backend: &B,
    paths: WalletPaths,
    mode: CardFormMode,
    payload: &CardPayload,
) -> Result<WalletSnapshot, ApiError> {
    let (method, path) = match mode {
        CardFormMode::Add => (Method::Post, paths.cards()),
        CardFormMode::Edit(id) => (Method::Put, paths.card(id)),
    };
    backend.send_json(method, &path, payload).await?;
    load_wallet(backend, paths).await
}

/// DELETE, then cards, then statistics. The confirmation dialog stays up
/// until this returns.
pub async fn delete_card<B: RestBackend>(
    backend: &B,
    paths: WalletPaths,
    card_id: i64,
) -> Result<WalletSnapshot, ApiError> {
    backend.send_empty(Method::Delete, &paths.card(card_id)).await?;
    load_wallet(backend, paths).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::testing::RecordingBackend;

    const CARDS_JSON: &str = r#"[
        {"id":1,"cardHolderName":"Ann Lee","cardNumber":"4111111111111111","expiryDate":"2030-01-01","balance":50.0,"isDefault":true},
        {"id":2,"cardHolderName":"Ann Lee","cardNumber":"5500000000000004","expiryDate":"2020-01-01","balance":null,"isDefault":false}
    ]"#;
    const STATS_JSON: &str = r#"{"totalCards":2,"activeCards":1,"expiringCards":0,"totalBalance":50.0}"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn card(is_default: bool) -> WalletCard {
        WalletCard {
            id: 2,
            card_holder_name: "Ann Lee".into(),
            card_number: "4111111111111111".into(),
            expiry_date: date("2030-01-01"),
            balance: 0.0,
            is_default,
        }
    }

    #[test]
    fn test_expiry_today_is_expired_not_expiring() {
        let today = date("2024-06-15");
        assert_eq!(ExpiryState::classify(today, today), ExpiryState::Expired);
        assert_eq!(ExpiryState::classify(date("2024-06-01"), today), ExpiryState::Expired);
    }

    #[test]
    fn test_expiry_within_three_calendar_months() {
        let today = date("2024-06-15");
        assert_eq!(ExpiryState::classify(date("2024-06-16"), today), ExpiryState::ExpiringSoon);
        assert_eq!(ExpiryState::classify(date("2024-09-15"), today), ExpiryState::ExpiringSoon);
        assert_eq!(ExpiryState::classify(date("2024-09-16"), today), ExpiryState::Active);
    }

    #[test]
    fn test_expiry_horizon_clamps_month_end() {
        // Nov 30 + 3 months clamps to Feb 29
        let today = date("2023-11-30");
        assert_eq!(ExpiryState::classify(date("2024-02-29"), today), ExpiryState::ExpiringSoon);
        assert_eq!(ExpiryState::classify(date("2024-03-01"), today), ExpiryState::Active);
    }

    #[test]
    fn test_card_number_formatting() {
        assert_eq!(format_card_number("4111-1111 1111x1111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number(""), "");
        assert_eq!(mask_card_number("4111 1111 1111 1234"), "•••• •••• •••• 1234");
        assert_eq!(mask_card_number(""), MASK_PLACEHOLDER);
        assert_eq!(format_expiry(date("2027-01-01")), "01/27");
        assert_eq!(card_gradient(7), "card-gradient-2");
    }

    #[test]
    fn test_default_card_is_protected() {
        let controls = CardControls::for_card(&card(true), ExpiryState::Active);
        assert!(!controls.edit_enabled);
        assert!(!controls.show_delete);

        let expired = CardControls::for_card(&card(false), ExpiryState::Expired);
        assert!(!expired.edit_enabled);
        assert!(expired.show_delete);

        let active = CardControls::for_card(&card(false), ExpiryState::ExpiringSoon);
        assert!(active.edit_enabled && active.show_delete);
    }

    #[test]
    fn test_add_form_payload() {
        let form = CardForm {
            card_holder_name: " Ann Lee ".into(),
            card_number: "4111 1111 1111 1111".into(),
            expiry_month: "2027-01".into(),
            cvv: "123".into(),
            ..CardForm::new()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.card_number, "4111111111111111");
        assert_eq!(payload.expiry_date, "2027-01-01");
        assert_eq!(payload.cvv.as_deref(), Some("123"));
        assert_eq!(payload.card_holder_name, "Ann Lee");
    }

    #[test]
    fn test_edit_form_locks_identity_fields() {
        let form = CardForm::for_edit(&card(false));
        assert!(form.mode.identity_locked());
        assert_eq!(form.mode.title(), "Edit Card");
        assert_eq!(form.expiry_month, "2030-01");
        let payload = form.validate().unwrap();
        assert_eq!(payload.cvv, None);
    }

    #[test]
    fn test_add_form_rejects_missing_fields() {
        let errors = CardForm::new().validate().unwrap_err();
        assert!(errors.has("cardHolderName"));
        assert!(errors.has("cardNumber"));
        assert!(errors.has("expiryDate"));
        assert!(errors.has("cvv"));
    }

    #[test]
    fn test_delete_card_refetches_cards_then_statistics() {
        let paths = WalletPaths::new(1);
        let backend = RecordingBackend::new()
            .respond("/api/users/1/wallet/cards", CARDS_JSON)
            .respond("/api/users/1/wallet/statistics", STATS_JSON);

        let snapshot = block_on(delete_card(&backend, paths, 2)).unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                (Method::Delete, "/api/users/1/wallet/cards/2".to_string()),
                (Method::Get, "/api/users/1/wallet/cards".to_string()),
                (Method::Get, "/api/users/1/wallet/statistics".to_string()),
            ]
        );
        assert_eq!(snapshot.cards.len(), 2);
        assert_eq!(snapshot.cards[1].balance, 0.0);
        assert_eq!(snapshot.statistics.unwrap().total_cards, 2);
    }

    #[test]
    fn test_failed_delete_does_not_refetch() {
        let paths = WalletPaths::new(1);
        let backend = RecordingBackend::new().fail(
            Method::Delete,
            "/api/users/1/wallet/cards/1",
            ApiError::from_error_body(400, "Bad Request", "Cannot delete default card"),
        );
        let err = block_on(delete_card(&backend, paths, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot delete default card");
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_statistics_failure_keeps_cards() {
        let paths = WalletPaths::new(4);
        let backend = RecordingBackend::new().respond("/api/users/4/wallet/cards", "[]");
        let snapshot = block_on(load_wallet(&backend, paths)).unwrap();
        assert!(snapshot.cards.is_empty());
        assert!(snapshot.statistics.is_err());
    }

    #[test]
    fn test_save_card_edit_uses_put() {
        let paths = WalletPaths::new(1);
        let backend = RecordingBackend::new()
            .respond("/api/users/1/wallet/cards", "[]")
            .respond("/api/users/1/wallet/statistics", STATS_JSON);
        let payload = CardForm::for_edit(&card(false)).validate().unwrap();
        block_on(save_card(&backend, paths, CardFormMode::Edit(2), &payload)).unwrap();
        assert_eq!(backend.calls()[0], (Method::Put, "/api/users/1/wallet/cards/2".to_string()));
        let body = backend.body_of(Method::Put, "/api/users/1/wallet/cards/2").unwrap();
        assert!(!body.contains("cvv"));
    }
}
