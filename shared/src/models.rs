//! Records exchanged with the hotel backend.
//!
//! Every payload the pages consume is declared here so a malformed response
//! fails at decode time with `ApiError::Decode` instead of rendering
//! half-empty HTML. Identity fields (ids, names, dates the page computes with)
//! are required; display-only aggregates fall back to zero when the backend
//! sends `null` or omits them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// Treat an explicit `null` the same as a missing field.
    pub fn default_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Int(i64),
        Float(f64),
        Text(String),
    }

    /// Room numbers arrive as `"201"` from some endpoints and `201` from others.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
            StringOrNumber::Text(s) => s,
        })
    }

    /// Ids that were written by older pages as strings (`"12"`).
    pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Int(n) => Ok(n),
            StringOrNumber::Float(n) if n.fract() == 0.0 => Ok(n as i64),
            StringOrNumber::Float(n) => Err(serde::de::Error::custom(format!("invalid id {}", n))),
            StringOrNumber::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid id {:?}", s))),
        }
    }
}

use serde_helpers::{default_if_null, id_from_string_or_number, string_or_number};

// ---------------------------------------------------------------------------
// Menu & cart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "isAvailable", deserialize_with = "default_if_null")]
    pub available: bool,
}

/// One line of the locally stored food cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// Body of `PUT`/`POST /api/menu-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Rooms, bookings, food orders
// ---------------------------------------------------------------------------

/// Room as embedded in bookings and food orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    #[serde(deserialize_with = "string_or_number")]
    pub room_number: String,
    #[serde(rename = "type", default)]
    pub room_type: Option<String>,
}

/// Room returned by the availability lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub room: RoomRef,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSearchRequest {
    pub booking_id: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrder {
    pub id: i64,
    pub room: RoomRef,
    #[serde(default, deserialize_with = "default_if_null")]
    pub items: Vec<OrderedItem>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_price: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

// ---------------------------------------------------------------------------
// Financial reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Revenue,
    Expense,
    ProfitLoss,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Revenue, ReportType::Expense, ReportType::ProfitLoss];

    /// Wire value, e.g. `PROFIT_LOSS`
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Revenue => "REVENUE",
            ReportType::Expense => "EXPENSE",
            ReportType::ProfitLoss => "PROFIT_LOSS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Report lifecycle. Anything other than the two known states is carried
/// through verbatim so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Draft,
    Finalized,
    Other(String),
}

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Draft => "DRAFT",
            ReportStatus::Finalized => "FINALIZED",
            ReportStatus::Other(s) => s,
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, ReportStatus::Finalized)
    }
}

impl From<String> for ReportStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DRAFT" => ReportStatus::Draft,
            "FINALIZED" => ReportStatus::Finalized,
            _ => ReportStatus::Other(value),
        }
    }
}

impl From<ReportStatus> for String {
    fn from(value: ReportStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub id: i64,
    #[serde(default)]
    pub report_name: Option<String>,
    pub report_type: ReportType,
    #[serde(default, deserialize_with = "default_if_null")]
    pub status: ReportStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub generated_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEntry {
    pub id: i64,
    pub source: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub description: String,
    pub amount: f64,
    pub entry_date: String,
    #[serde(default)]
    pub report: Option<ReportRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: i64,
    pub category: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub description: String,
    pub amount: f64,
    pub entry_date: String,
    #[serde(default)]
    pub report: Option<ReportRef>,
}

/// Response of `GET /api/reports/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub report: FinancialReport,
    #[serde(default, deserialize_with = "default_if_null")]
    pub revenue_entries: Vec<RevenueEntry>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub expense_entries: Vec<ExpenseEntry>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_expense: Option<f64>,
}

// ---------------------------------------------------------------------------
// Wallet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCard {
    pub id: i64,
    pub card_holder_name: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub card_number: String,
    pub expiry_date: NaiveDate,
    #[serde(default, deserialize_with = "default_if_null")]
    pub balance: f64,
    #[serde(default, alias = "default", deserialize_with = "default_if_null")]
    pub is_default: bool,
}

/// Body of the add/edit card requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub card_holder_name: String,
    pub card_number: String,
    /// `YYYY-MM-01`
    pub expiry_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatistics {
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_cards: u32,
    #[serde(default, deserialize_with = "default_if_null")]
    pub active_cards: u32,
    #[serde(default, deserialize_with = "default_if_null")]
    pub expiring_cards: u32,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Manager reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_booking_revenue: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_food_revenue: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_bookings: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_food_orders: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub average_booking_value: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub average_food_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOccupancy {
    #[serde(default)]
    pub date: Option<String>,
    pub date_formatted: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub occupied_rooms: u32,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_rooms: u32,
    #[serde(default, deserialize_with = "default_if_null")]
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub daily_occupancy: Vec<DailyOccupancy>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub average_occupancy: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub peak_occupancy: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_customers: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub active_customers: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub new_customers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub name: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub email: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_spent: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub booking_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub customer_stats: CustomerStats,
    #[serde(default, deserialize_with = "default_if_null")]
    pub top_customers: Vec<TopCustomer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodBeverageReport {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub completed_orders: u64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub average_order_value: f64,
    #[serde(default, deserialize_with = "default_if_null")]
    pub orders_by_status: BTreeMap<String, u64>,
}

/// The composite report nests full revenue and occupancy reports; those two
/// sections are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    #[serde(default, deserialize_with = "default_if_null")]
    pub report_period: String,
    #[serde(default, deserialize_with = "default_if_null")]
    pub generated_at: String,
    pub revenue: RevenueReport,
    pub occupancy: OccupancyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_accepts_is_available_alias() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":4,"name":"Soup","price":6.5,"isAvailable":true,"category":null}"#,
        )
        .unwrap();
        assert!(item.available);
        assert_eq!(item.category, None);
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_menu_item_missing_price_fails() {
        let result = serde_json::from_str::<MenuItem>(r#"{"id":4,"name":"Soup"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cart_item_accepts_string_id() {
        let item: CartItem =
            serde_json::from_str(r#"{"id":"12","name":"Tea","price":2.0,"quantity":3}"#).unwrap();
        assert_eq!(item.id, 12);

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""id":12"#));
    }

    #[test]
    fn test_report_status_round_trips_unknown_values() {
        let report: FinancialReport = serde_json::from_str(
            r#"{"id":1,"reportType":"PROFIT_LOSS","status":"ARCHIVED","totalAmount":null}"#,
        )
        .unwrap();
        assert_eq!(report.status, ReportStatus::Other("ARCHIVED".to_string()));
        assert_eq!(report.total_amount, 0.0);
        assert_eq!(report.report_type, ReportType::ProfitLoss);
        assert!(!report.status.is_finalized());
    }

    #[test]
    fn test_report_status_defaults_to_draft() {
        let report: FinancialReport =
            serde_json::from_str(r#"{"id":1,"reportType":"REVENUE","status":null}"#).unwrap();
        assert_eq!(report.status, ReportStatus::Draft);
    }

    #[test]
    fn test_unknown_order_status_does_not_fail() {
        let order: FoodOrder = serde_json::from_str(
            r#"{"id":9,"room":{"roomNumber":101},"items":[{"name":"Tea"}],"totalPrice":4.5,"status":"REFUNDED"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.room.room_number, "101");
    }

    #[test]
    fn test_order_status_serializes_screaming_case() {
        let body = serde_json::to_string(&OrderStatusUpdate { status: OrderStatus::Preparing }).unwrap();
        assert_eq!(body, r#"{"status":"PREPARING"}"#);
    }

    #[test]
    fn test_wallet_card_default_alias_and_null_balance() {
        let card: WalletCard = serde_json::from_str(
            r#"{"id":2,"cardHolderName":"Ann Lee","cardNumber":"4111111111111111","expiryDate":"2027-01-01","balance":null,"default":true}"#,
        )
        .unwrap();
        assert!(card.is_default);
        assert_eq!(card.balance, 0.0);
    }

    #[test]
    fn test_card_payload_omits_missing_cvv() {
        let payload = CardPayload {
            card_holder_name: "Ann".to_string(),
            card_number: "4111".to_string(),
            expiry_date: "2027-01-01".to_string(),
            cvv: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("cvv"));
        assert!(json.contains("cardHolderName"));
    }

    #[test]
    fn test_comprehensive_report_requires_sections() {
        let missing = serde_json::from_str::<ComprehensiveReport>(
            r#"{"reportPeriod":"Jan 01, 2024 - Jan 31, 2024","generatedAt":"Feb 01, 2024 10:00"}"#,
        );
        assert!(missing.is_err());
    }
}
