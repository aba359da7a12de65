//! Manager reports console: report kinds, date range checks, export naming
//! and the placeholder chart datasets.

use std::f64::consts::PI;
use std::fmt;

use chrono::{Months, NaiveDate};
use thiserror::Error;

use crate::api_error::ApiError;
use crate::backend::RestBackend;
use crate::endpoint::Endpoint;
use crate::models::{
    ComprehensiveReport, CustomerReport, FoodBeverageReport, OccupancyReport, RevenueReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerReportKind {
    Revenue,
    Occupancy,
    Customers,
    FoodBeverage,
    Comprehensive,
}

impl ManagerReportKind {
    pub const ALL: [ManagerReportKind; 5] = [
        ManagerReportKind::Revenue,
        ManagerReportKind::Occupancy,
        ManagerReportKind::Customers,
        ManagerReportKind::FoodBeverage,
        ManagerReportKind::Comprehensive,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ManagerReportKind::Revenue => "revenue",
            ManagerReportKind::Occupancy => "occupancy",
            ManagerReportKind::Customers => "customers",
            ManagerReportKind::FoodBeverage => "food-beverage",
            ManagerReportKind::Comprehensive => "comprehensive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ManagerReportKind::Revenue => "Revenue Report",
            ManagerReportKind::Occupancy => "Occupancy Report",
            ManagerReportKind::Customers => "Customer Report",
            ManagerReportKind::FoodBeverage => "Food & Beverage Report",
            ManagerReportKind::Comprehensive => "Comprehensive Report",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn endpoint_path(&self) -> String {
        format!("/manager/api/reports/{}", self.slug())
    }
}

impl fmt::Display for ManagerReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportRangeError {
    #[error("Please select both start and end dates")]
    MissingDates,
    #[error("Start date cannot be after end date")]
    StartAfterEnd,
}

/// A validated report request. Construction fails before any request is
/// issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub kind: ManagerReportKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportRequest {
    pub fn new(
        kind: ManagerReportKind,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ReportRangeError> {
        let (start_date, end_date) = match (start_date, end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ReportRangeError::MissingDates),
        };
        if start_date > end_date {
            return Err(ReportRangeError::StartAfterEnd);
        }
        Ok(Self {
            kind,
            start_date,
            end_date,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.kind.endpoint_path())
            .with_query("startDate", self.start_date.to_string())
            .with_query("endDate", self.end_date.to_string())
    }

    pub fn export_endpoint(&self) -> Endpoint {
        Endpoint::new("/manager/api/reports/export/pdf")
            .with_query("reportType", self.kind.slug())
            .with_query("startDate", self.start_date.to_string())
            .with_query("endDate", self.end_date.to_string())
    }

    /// `revenue_report_2024-01-01_to_2024-01-31.pdf`
    pub fn export_file_name(&self) -> String {
        format!(
            "{}_report_{}_to_{}.pdf",
            self.kind.slug(),
            self.start_date,
            self.end_date
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported export format")]
pub struct UnsupportedFormat(pub String);

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self, UnsupportedFormat> {
        if value.eq_ignore_ascii_case("pdf") {
            Ok(ExportFormat::Pdf)
        } else {
            Err(UnsupportedFormat(value.to_string()))
        }
    }
}

/// Form defaults: one month back through today.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (start, today)
}

/// A generated report, one typed payload per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagerReport {
    Revenue(RevenueReport),
    Occupancy(OccupancyReport),
    Customers(CustomerReport),
    FoodBeverage(FoodBeverageReport),
    Comprehensive(ComprehensiveReport),
}

impl ManagerReport {
    pub fn from_value(kind: ManagerReportKind, value: serde_json::Value) -> Result<Self, ApiError> {
        Ok(match kind {
            ManagerReportKind::Revenue => ManagerReport::Revenue(serde_json::from_value(value)?),
            ManagerReportKind::Occupancy => ManagerReport::Occupancy(serde_json::from_value(value)?),
            ManagerReportKind::Customers => ManagerReport::Customers(serde_json::from_value(value)?),
            ManagerReportKind::FoodBeverage => {
                ManagerReport::FoodBeverage(serde_json::from_value(value)?)
            }
            ManagerReportKind::Comprehensive => {
                ManagerReport::Comprehensive(serde_json::from_value(value)?)
            }
        })
    }

    pub fn decode(kind: ManagerReportKind, json: &str) -> Result<Self, ApiError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(kind, value)
    }

    pub fn kind(&self) -> ManagerReportKind {
        match self {
            ManagerReport::Revenue(_) => ManagerReportKind::Revenue,
            ManagerReport::Occupancy(_) => ManagerReportKind::Occupancy,
            ManagerReport::Customers(_) => ManagerReportKind::Customers,
            ManagerReport::FoodBeverage(_) => ManagerReportKind::FoodBeverage,
            ManagerReport::Comprehensive(_) => ManagerReportKind::Comprehensive,
        }
    }

    /// Period echoed by the backend, if any
    pub fn period(&self) -> Option<(&str, &str)> {
        let (start, end) = match self {
            ManagerReport::Revenue(r) => (&r.start_date, &r.end_date),
            ManagerReport::Occupancy(r) => (&r.start_date, &r.end_date),
            ManagerReport::Customers(r) => (&r.start_date, &r.end_date),
            ManagerReport::FoodBeverage(r) => (&r.start_date, &r.end_date),
            ManagerReport::Comprehensive(_) => return None,
        };
        Some((start.as_deref()?, end.as_deref()?))
    }
}

/// Fetch and decode one report. The payload shape depends on the kind.
pub async fn generate_report<B: RestBackend>(backend: &B, request: &ReportRequest) -> Result<ManagerReport, ApiError> {
    let value: serde_json::Value = backend.get_json(&request.endpoint()).await?;
    ManagerReport::from_value(request.kind, value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub kind: ManagerReportKind,
    pub start: String,
    pub end: String,
    pub generated_at: String,
    pub request: ReportRequest,
}

/// Reports generated during this page visit, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportHistory {
    entries: Vec<GeneratedReport>,
}

impl ReportHistory {
    /// Record a generated report. The backend's own period wins over the
    /// requested one when present.
    pub fn record(&mut self, request: ReportRequest, report: &ManagerReport, generated_at: impl Into<String>) {
        let (start, end) = report
            .period()
            .map(|(s, e)| (s.to_string(), e.to_string()))
            .unwrap_or_else(|| (request.start_date.to_string(), request.end_date.to_string()));
        self.entries.insert(
            0,
            GeneratedReport {
                kind: request.kind,
                start,
                end,
                generated_at: generated_at.into(),
                request,
            },
        );
    }

    pub fn entries(&self) -> &[GeneratedReport] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Placeholder charts
// ---------------------------------------------------------------------------

pub const TREND_COLOR: &str = "#3498db";

pub const REVENUE_TREND: [(&str, f64); 6] = [
    ("Jan", 12000.0),
    ("Feb", 19000.0),
    ("Mar", 15000.0),
    ("Apr", 25000.0),
    ("May", 22000.0),
    ("Jun", 30000.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueSource {
    pub label: &'static str,
    pub share: f64,
    pub color: &'static str,
}

pub const REVENUE_SOURCES: [RevenueSource; 4] = [
    RevenueSource { label: "Room Revenue", share: 60.0, color: "#3498db" },
    RevenueSource { label: "Food & Beverage", share: 25.0, color: "#e74c3c" },
    RevenueSource { label: "Services", share: 10.0, color: "#f39c12" },
    RevenueSource { label: "Other", share: 5.0, color: "#27ae60" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSlice {
    pub source: RevenueSource,
    /// Radians, clockwise from twelve o'clock
    pub start_angle: f64,
    pub end_angle: f64,
}

pub fn donut_slices(sources: &[RevenueSource]) -> Vec<DonutSlice> {
    let total: f64 = sources.iter().map(|s| s.share).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    sources
        .iter()
        .map(|source| {
            let sweep = source.share / total * 2.0 * PI;
            let slice = DonutSlice {
                source: *source,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// `#3498db` -> `(52, 152, 219)`
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::RecordingBackend;
    use futures::executor::block_on;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_slugs_and_paths() {
        for kind in ManagerReportKind::ALL {
            assert_eq!(ManagerReportKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(
            ManagerReportKind::FoodBeverage.endpoint_path(),
            "/manager/api/reports/food-beverage"
        );
        assert_eq!(ManagerReportKind::from_slug("payroll"), None);
    }

    #[test]
    fn test_start_after_end_is_rejected_before_request() {
        let result = ReportRequest::new(
            ManagerReportKind::Revenue,
            Some(date("2024-02-01")),
            Some(date("2024-01-01")),
        );
        assert_eq!(result, Err(ReportRangeError::StartAfterEnd));

        let missing = ReportRequest::new(ManagerReportKind::Revenue, None, Some(date("2024-01-01")));
        assert_eq!(missing, Err(ReportRangeError::MissingDates));
    }

    #[test]
    fn test_same_day_range_is_allowed() {
        let request = ReportRequest::new(
            ManagerReportKind::Occupancy,
            Some(date("2024-01-01")),
            Some(date("2024-01-01")),
        )
        .unwrap();
        assert_eq!(
            request.endpoint().to_string(),
            "/manager/api/reports/occupancy?startDate=2024-01-01&endDate=2024-01-01"
        );
    }

    #[test]
    fn test_export_endpoint_and_file_name() {
        let request = ReportRequest::new(
            ManagerReportKind::Revenue,
            Some(date("2024-01-01")),
            Some(date("2024-01-31")),
        )
        .unwrap();
        assert_eq!(
            request.export_endpoint().to_string(),
            "/manager/api/reports/export/pdf?reportType=revenue&startDate=2024-01-01&endDate=2024-01-31"
        );
        assert_eq!(request.export_file_name(), "revenue_report_2024-01-01_to_2024-01-31.pdf");
    }

    #[test]
    fn test_only_pdf_export_supported() {
        assert_eq!(ExportFormat::parse("PDF"), Ok(ExportFormat::Pdf));
        assert!(ExportFormat::parse("excel").is_err());
    }

    #[test]
    fn test_default_range_is_one_month_back() {
        assert_eq!(default_range(date("2024-03-31")), (date("2024-02-29"), date("2024-03-31")));
        assert_eq!(default_range(date("2024-01-15")), (date("2023-12-15"), date("2024-01-15")));
    }

    #[test]
    fn test_decode_per_kind() {
        let report = ManagerReport::decode(
            ManagerReportKind::FoodBeverage,
            r#"{"totalRevenue":120.5,"totalOrders":4,"completedOrders":3,"averageOrderValue":30.125,
                "ordersByStatus":{"PENDING":1,"DELIVERED":3}}"#,
        )
        .unwrap();
        match report {
            ManagerReport::FoodBeverage(fb) => {
                assert_eq!(fb.orders_by_status.get("DELIVERED"), Some(&3));
                assert_eq!(fb.total_orders, 4);
            }
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[test]
    fn test_decode_null_aggregates_become_zero() {
        let report = ManagerReport::decode(
            ManagerReportKind::Revenue,
            r#"{"totalRevenue":null,"startDate":"2024-01-01","endDate":"2024-01-31"}"#,
        )
        .unwrap();
        match report {
            ManagerReport::Revenue(r) => assert_eq!(r.total_revenue, 0.0),
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[test]
    fn test_decode_shape_mismatch_is_decode_error() {
        let err = ManagerReport::decode(ManagerReportKind::Revenue, r#"{"totalRevenue":"lots"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_history_is_newest_first_and_prefers_backend_period() {
        let mut history = ReportHistory::default();
        let first = ReportRequest::new(ManagerReportKind::Revenue, Some(date("2024-01-01")), Some(date("2024-01-31"))).unwrap();
        let second = ReportRequest::new(ManagerReportKind::Customers, Some(date("2024-02-01")), Some(date("2024-02-29"))).unwrap();

        let revenue = ManagerReport::Revenue(RevenueReport {
            start_date: Some("Jan 01, 2024".into()),
            end_date: Some("Jan 31, 2024".into()),
            ..RevenueReport::default()
        });
        history.record(first, &revenue, "1/31/2024, 10:00:00 AM");
        history.record(second, &ManagerReport::Customers(CustomerReport::default()), "2/29/2024, 9:00:00 AM");

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, ManagerReportKind::Customers);
        assert_eq!(entries[0].start, "2024-02-01");
        assert_eq!(entries[1].start, "Jan 01, 2024");
    }

    #[test]
    fn test_donut_slices_cover_full_circle() {
        let slices = donut_slices(&REVENUE_SOURCES);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - 0.6 * 2.0 * PI).abs() < 1e-9);
        assert!((slices[3].end_angle - 2.0 * PI).abs() < 1e-9);
        assert!(donut_slices(&[]).is_empty());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3498db"), Some((52, 152, 219)));
        assert_eq!(parse_hex_color("3498db"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn test_generate_report_decodes_by_kind() {
        let request = ReportRequest::new(
            ManagerReportKind::Revenue,
            Some(date("2024-01-01")),
            Some(date("2024-01-31")),
        )
        .unwrap();
        let backend = RecordingBackend::new().respond(
            "/manager/api/reports/revenue?startDate=2024-01-01&endDate=2024-01-31",
            r#"{"totalRevenue": 1500.5, "totalBookings": 3, "averageFoodOrderValue": null}"#,
        );

        match block_on(generate_report(&backend, &request)).unwrap() {
            ManagerReport::Revenue(report) => {
                assert_eq!(report.total_revenue, 1500.5);
                assert_eq!(report.total_bookings, 3);
                assert_eq!(report.average_food_order_value, 0.0);
            }
            other => panic!("unexpected report {:?}", other),
        }
    }
}
