//! Financial reports editor: report and ledger-entry forms, the controls a
//! report's status allows, and the write-then-refresh workflows.

use chrono::NaiveDateTime;

use crate::api_error::ApiError;
use crate::backend::{Method, RestBackend};
use crate::endpoint::Endpoint;
use crate::format::{datetime_input_value, iso_utc, parse_loose_datetime};
use crate::models::{ExpenseEntry, FinancialReport, ReportDetails, ReportType, RevenueEntry};
use crate::validation::FieldErrors;

pub const REPORTS_PATH: &str = "/api/reports";

pub const CONFIRM_DELETE_REPORT: &str =
    "Are you sure you want to delete this report? This action cannot be undone.";
pub const CONFIRM_FINALIZE_REPORT: &str =
    "Are you sure you want to finalize this report? No further changes will be possible.";
pub const CONFIRM_DELETE_ENTRY: &str = "Are you sure you want to delete this entry?";

pub fn report_path(id: i64) -> String {
    format!("{}/{}", REPORTS_PATH, id)
}

pub fn raw_report_path(id: i64) -> String {
    format!("{}/{}/raw", REPORTS_PATH, id)
}

pub fn finalize_path(id: i64) -> String {
    format!("{}/{}/finalize", REPORTS_PATH, id)
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

pub fn report_type_icon(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::Revenue => "📈",
        ReportType::Expense => "📉",
        ReportType::ProfitLoss => "💰",
    }
}

/// `PROFIT_LOSS` -> `PROFIT LOSS`
pub fn report_type_label(report_type: ReportType) -> String {
    crate::format::underscores_to_spaces(report_type.as_str())
}

impl ReportType {
    pub fn shows_revenue(&self) -> bool {
        matches!(self, ReportType::Revenue | ReportType::ProfitLoss)
    }

    pub fn shows_expense(&self) -> bool {
        matches!(self, ReportType::Expense | ReportType::ProfitLoss)
    }

    /// Per-section totals are only meaningful when both sections are shown.
    pub fn shows_section_totals(&self) -> bool {
        matches!(self, ReportType::ProfitLoss)
    }
}

/// Which actions a report's status permits. A finalized report is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportControls {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_add_entry: bool,
    pub can_modify_entries: bool,
    pub can_finalize: bool,
}

impl ReportControls {
    pub fn for_report(report: &FinancialReport) -> Self {
        let open = !report.status.is_finalized();
        Self {
            can_edit: open,
            can_delete: open,
            can_add_entry: open,
            can_modify_entries: open,
            can_finalize: open,
        }
    }
}

// ---------------------------------------------------------------------------
// Report form
// ---------------------------------------------------------------------------

pub mod fields {
    pub const REPORT_NAME: &str = "report-name";
    pub const REPORT_TYPE: &str = "report-type";
    pub const REPORT_START: &str = "report-start-date";
    pub const REPORT_END: &str = "report-end-date";

    pub const ENTRY_CATEGORY_SOURCE: &str = "entry-category-source";
    pub const ENTRY_DESCRIPTION: &str = "entry-description";
    pub const ENTRY_AMOUNT: &str = "entry-amount";
    pub const ENTRY_DATE: &str = "entry-date";
}

/// Raw values of the report modal's inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    pub id: Option<i64>,
    pub name: String,
    /// Select value, empty when nothing is chosen
    pub report_type: String,
    pub description: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission {
    pub id: Option<i64>,
    pub name: String,
    pub report_type: ReportType,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportForm {
    /// Pre-fill for editing an existing report.
    pub fn from_report(report: &FinancialReport) -> Self {
        Self {
            id: Some(report.id),
            name: report.report_name.clone().unwrap_or_default(),
            report_type: report.report_type.as_str().to_string(),
            description: report.description.clone().unwrap_or_default(),
            start: datetime_input_value(report.start_date.as_deref()),
            end: datetime_input_value(report.end_date.as_deref()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Report"
        } else {
            "Create New Report"
        }
    }

    /// Every failing field is reported at once; nothing is sent until the
    /// set is empty.
    pub fn validate(&self) -> Result<ReportSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add(fields::REPORT_NAME, "Report name is required.");
        }

        let report_type = ReportType::parse(self.report_type.trim());
        if report_type.is_none() {
            errors.add(fields::REPORT_TYPE, "Please select a report type.");
        }

        let start = parse_loose_datetime(&self.start);
        if start.is_none() {
            errors.add(fields::REPORT_START, "Start date is required.");
        }
        let end = parse_loose_datetime(&self.end);
        if end.is_none() {
            errors.add(fields::REPORT_END, "End date is required.");
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add(fields::REPORT_END, "End date must be after the start date.");
            }
        }

        match (report_type, start, end) {
            (Some(report_type), Some(start), Some(end)) if errors.is_empty() => Ok(ReportSubmission {
                id: self.id,
                name: name.to_string(),
                report_type,
                description: self.description.trim().to_string(),
                start,
                end,
            }),
            _ => Err(errors),
        }
    }
}

impl ReportSubmission {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("reportName", self.name.clone()),
            ("reportType", self.report_type.as_str().to_string()),
            ("description", self.description.clone()),
            ("startDate", iso_utc(&self.start)),
            ("endDate", iso_utc(&self.end)),
        ]
    }

    /// `POST /api/reports/create` or `PUT /api/reports/{id}`
    pub fn target(&self) -> (Method, String) {
        match self.id {
            Some(id) => (Method::Put, report_path(id)),
            None => (Method::Post, format!("{}/create", REPORTS_PATH)),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Revenue,
    Expense,
}

impl EntryKind {
    pub fn slug(&self) -> &'static str {
        match self {
            EntryKind::Revenue => "revenue",
            EntryKind::Expense => "expense",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::Revenue => "Revenue",
            EntryKind::Expense => "Expense",
        }
    }

    /// Name of the category/source input, both as label and form field
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Revenue => "Source",
            EntryKind::Expense => "Category",
        }
    }

    pub fn form_field(&self) -> &'static str {
        match self {
            EntryKind::Revenue => "source",
            EntryKind::Expense => "category",
        }
    }

    /// `POST /api/reports/{report_id}/{kind}-entry`
    pub fn create_path(&self, report_id: i64) -> String {
        format!("{}/{}/{}-entry", REPORTS_PATH, report_id, self.slug())
    }

    /// `GET|PUT|DELETE /api/reports/{kind}-entry/{entry_id}`
    pub fn entry_path(&self, entry_id: i64) -> String {
        format!("{}/{}-entry/{}", REPORTS_PATH, self.slug(), entry_id)
    }
}

/// A ledger line of either kind, as fetched for editing
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEntry {
    Revenue(RevenueEntry),
    Expense(ExpenseEntry),
}

impl LedgerEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            LedgerEntry::Revenue(_) => EntryKind::Revenue,
            LedgerEntry::Expense(_) => EntryKind::Expense,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            LedgerEntry::Revenue(e) => e.id,
            LedgerEntry::Expense(e) => e.id,
        }
    }

    pub fn report_id(&self) -> Option<i64> {
        match self {
            LedgerEntry::Revenue(e) => e.report.as_ref().map(|r| r.id),
            LedgerEntry::Expense(e) => e.report.as_ref().map(|r| r.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub kind: EntryKind,
    pub report_id: i64,
    pub entry_id: Option<i64>,
    pub category_or_source: String,
    pub description: String,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntrySubmission {
    pub kind: EntryKind,
    pub report_id: i64,
    pub entry_id: Option<i64>,
    pub category_or_source: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

impl EntryForm {
    pub fn new(kind: EntryKind, report_id: i64) -> Self {
        Self {
            kind,
            report_id,
            entry_id: None,
            category_or_source: String::new(),
            description: String::new(),
            amount: String::new(),
            date: String::new(),
        }
    }

    /// Pre-fill from a fetched entry. The entry's own report link wins over
    /// the report currently open.
    pub fn from_entry(entry: &LedgerEntry, open_report_id: i64) -> Self {
        let (category_or_source, description, amount, date) = match entry {
            LedgerEntry::Revenue(e) => (&e.source, &e.description, e.amount, &e.entry_date),
            LedgerEntry::Expense(e) => (&e.category, &e.description, e.amount, &e.entry_date),
        };
        Self {
            kind: entry.kind(),
            report_id: entry.report_id().unwrap_or(open_report_id),
            entry_id: Some(entry.id()),
            category_or_source: category_or_source.clone(),
            description: description.clone(),
            amount: amount.to_string(),
            date: date.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self.entry_id {
            Some(_) => format!("Edit {} Entry", self.kind.title()),
            None => format!("Add New {} Entry", self.kind.title()),
        }
    }

    pub fn validate(&self) -> Result<EntrySubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let category_or_source = self.category_or_source.trim();
        if category_or_source.is_empty() {
            errors.add(fields::ENTRY_CATEGORY_SOURCE, "Category/Source is required.");
        }
        let description = self.description.trim();
        if description.is_empty() {
            errors.add(fields::ENTRY_DESCRIPTION, "Description is required.");
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0);
        if amount.is_none() {
            errors.add(fields::ENTRY_AMOUNT, "Amount must be a positive number.");
        }
        let date = self.date.trim();
        if date.is_empty() {
            errors.add(fields::ENTRY_DATE, "Entry date is required.");
        }

        match amount {
            Some(amount) if errors.is_empty() => Ok(EntrySubmission {
                kind: self.kind,
                report_id: self.report_id,
                entry_id: self.entry_id,
                category_or_source: category_or_source.to_string(),
                description: description.to_string(),
                amount,
                date: date.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

impl EntrySubmission {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (self.kind.form_field(), self.category_or_source.clone()),
            ("description", self.description.clone()),
            ("amount", self.amount.to_string()),
            ("entryDate", self.date.clone()),
        ]
    }

    pub fn target(&self) -> (Method, String) {
        match self.entry_id {
            Some(id) => (Method::Put, self.kind.entry_path(id)),
            None => (Method::Post, self.kind.create_path(self.report_id)),
        }
    }
}

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

/// State to render after an entry changed
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRefresh {
    pub details: ReportDetails,
    pub reports: Vec<FinancialReport>,
}

pub async fn load_reports<B: RestBackend>(backend: &B) -> Result<Vec<FinancialReport>, ApiError> {
    backend.get_json(&Endpoint::new(REPORTS_PATH)).await
}

pub async fn load_details<B: RestBackend>(backend: &B, report_id: i64) -> Result<ReportDetails, ApiError> {
    backend.get_json(&Endpoint::new(report_path(report_id))).await
}

/// The report as stored, used to pre-fill the edit form
pub async fn load_raw_report<B: RestBackend>(backend: &B, report_id: i64) -> Result<FinancialReport, ApiError> {
    backend.get_json(&Endpoint::new(raw_report_path(report_id))).await
}

pub async fn load_entry<B: RestBackend>(backend: &B, kind: EntryKind, entry_id: i64) -> Result<LedgerEntry, ApiError> {
    let endpoint = Endpoint::new(kind.entry_path(entry_id));
    Ok(match kind {
        EntryKind::Revenue => LedgerEntry::Revenue(backend.get_json(&endpoint).await?),
        EntryKind::Expense => LedgerEntry::Expense(backend.get_json(&endpoint).await?),
    })
}

pub async fn save_report<B: RestBackend>(
    backend: &B,
    submission: &ReportSubmission,
) -> Result<Vec<FinancialReport>, ApiError> {
    let (method, path) = submission.target();
    backend.send_form(method, &path, &submission.form_fields()).await?;
    load_reports(backend).await
}

pub async fn delete_report<B: RestBackend>(backend: &B, report_id: i64) -> Result<Vec<FinancialReport>, ApiError> {
    backend.send_empty(Method::Delete, &report_path(report_id)).await?;
    load_reports(backend).await
}

/// One-way: the caller closes the detail view once this returns.
pub async fn finalize_report<B: RestBackend>(backend: &B, report_id: i64) -> Result<Vec<FinancialReport>, ApiError> {
    backend.send_empty(Method::Put, &finalize_path(report_id)).await?;
    load_reports(backend).await
}

pub async fn save_entry<B: RestBackend>(backend: &B, submission: &EntrySubmission) -> Result<EntryRefresh, ApiError> {
    let (method, path) = submission.target();
    backend.send_form(method, &path, &submission.form_fields()).await?;
    refresh_after_entry(backend, submission.report_id).await
}

pub async fn delete_entry<B: RestBackend>(
    backend: &B,
    kind: EntryKind,
    entry_id: i64,
    report_id: i64,
) -> Result<EntryRefresh, ApiError> {
    backend.send_empty(Method::Delete, &kind.entry_path(entry_id)).await?;
    refresh_after_entry(backend, report_id).await
}

async fn refresh_after_entry<B: RestBackend>(backend: &B, report_id: i64) -> Result<EntryRefresh, ApiError> {
    let details = load_details(backend, report_id).await?;
    let reports = load_reports(backend).await?;
    Ok(EntryRefresh { details, reports })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::testing::RecordingBackend;
    use crate::models::ReportStatus;

    const REPORTS_JSON: &str = r#"[{"id":1,"reportName":"Q1","reportType":"REVENUE","status":"DRAFT","totalAmount":100.0}]"#;
    const DETAILS_JSON: &str = r#"{"report":{"id":1,"reportName":"Q1","reportType":"PROFIT_LOSS","status":"DRAFT"},
        "revenueEntries":[{"id":5,"source":"Rooms","description":"Week 1","amount":50.0,"entryDate":"2024-01-03","report":{"id":1}}],
        "expenseEntries":null,"totalRevenue":50.0,"totalExpense":null}"#;

    fn report(status: ReportStatus) -> FinancialReport {
        FinancialReport {
            id: 1,
            report_name: Some("Q1".into()),
            report_type: ReportType::Revenue,
            status,
            start_date: Some("2024-01-01T00:00:00".into()),
            end_date: Some("2024-03-31T00:00:00".into()),
            total_amount: 0.0,
            description: None,
            generated_by: None,
        }
    }

    fn valid_report_form() -> ReportForm {
        ReportForm {
            id: None,
            name: "  Q1 revenue ".into(),
            report_type: "REVENUE".into(),
            description: "".into(),
            start: "2024-01-01T00:00".into(),
            end: "2024-03-31T00:00".into(),
        }
    }

    #[test]
    fn test_finalized_report_disables_every_control() {
        let controls = ReportControls::for_report(&report(ReportStatus::Finalized));
        assert!(!controls.can_edit);
        assert!(!controls.can_delete);
        assert!(!controls.can_add_entry);
        assert!(!controls.can_modify_entries);
        assert!(!controls.can_finalize);

        for status in [ReportStatus::Draft, ReportStatus::Other("REVIEW".into())] {
            let controls = ReportControls::for_report(&report(status));
            assert!(controls.can_edit && controls.can_delete && controls.can_add_entry);
        }
    }

    #[test]
    fn test_sections_by_report_type() {
        assert!(ReportType::Revenue.shows_revenue());
        assert!(!ReportType::Revenue.shows_expense());
        assert!(ReportType::Expense.shows_expense());
        assert!(!ReportType::Expense.shows_revenue());
        assert!(ReportType::ProfitLoss.shows_revenue() && ReportType::ProfitLoss.shows_expense());
        assert!(ReportType::ProfitLoss.shows_section_totals());
        assert!(!ReportType::Revenue.shows_section_totals());
    }

    #[test]
    fn test_type_icon_and_label() {
        assert_eq!(report_type_icon(ReportType::Revenue), "📈");
        assert_eq!(report_type_icon(ReportType::ProfitLoss), "💰");
        assert_eq!(report_type_label(ReportType::ProfitLoss), "PROFIT LOSS");
    }

    #[test]
    fn test_report_form_valid_submission() {
        let submission = valid_report_form().validate().unwrap();
        assert_eq!(submission.name, "Q1 revenue");
        let fields = submission.form_fields();
        assert_eq!(fields[3], ("startDate", "2024-01-01T00:00:00.000Z".to_string()));
        assert_eq!(submission.target(), (Method::Post, "/api/reports/create".to_string()));
    }

    #[test]
    fn test_report_form_reports_every_missing_field() {
        let errors = ReportForm::default().validate().unwrap_err();
        assert_eq!(errors.get(fields::REPORT_NAME), Some("Report name is required."));
        assert_eq!(errors.get(fields::REPORT_TYPE), Some("Please select a report type."));
        assert_eq!(errors.get(fields::REPORT_START), Some("Start date is required."));
        assert_eq!(errors.get(fields::REPORT_END), Some("End date is required."));
    }

    #[test]
    fn test_report_end_must_be_strictly_after_start() {
        let mut form = valid_report_form();
        form.end = form.start.clone();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(fields::REPORT_END),
            Some("End date must be after the start date.")
        );

        form.name = String::new();
        form.end = "2023-12-01T00:00".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.has(fields::REPORT_END));
    }

    #[test]
    fn test_invalid_report_form_issues_no_request() {
        let backend = RecordingBackend::new().respond("/api/reports", REPORTS_JSON);
        let mut form = valid_report_form();
        form.start = "2024-04-01T00:00".into();

        if let Ok(submission) = form.validate() {
            block_on(save_report(&backend, &submission)).unwrap();
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_edit_form_prefill_and_target() {
        let form = ReportForm::from_report(&report(ReportStatus::Draft));
        assert_eq!(form.title(), "Edit Report");
        assert_eq!(form.start, "2024-01-01T00:00");
        let submission = form.validate().unwrap();
        assert_eq!(submission.target(), (Method::Put, "/api/reports/1".to_string()));
    }

    #[test]
    fn test_entry_form_validation() {
        let mut form = EntryForm::new(EntryKind::Expense, 1);
        form.amount = "-5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(fields::ENTRY_AMOUNT), Some("Amount must be a positive number."));

        form.amount = "abc".into();
        assert!(form.validate().unwrap_err().has(fields::ENTRY_AMOUNT));
        form.amount = "0".into();
        assert!(form.validate().unwrap_err().has(fields::ENTRY_AMOUNT));
    }

    #[test]
    fn test_entry_fields_use_source_or_category() {
        let mut form = EntryForm::new(EntryKind::Revenue, 1);
        form.category_or_source = "Rooms".into();
        form.description = "Week 1".into();
        form.amount = "50.5".into();
        form.date = "2024-01-03".into();

        let revenue = form.validate().unwrap();
        assert_eq!(revenue.form_fields()[0], ("source", "Rooms".to_string()));
        assert_eq!(revenue.target(), (Method::Post, "/api/reports/1/revenue-entry".to_string()));

        form.kind = EntryKind::Expense;
        form.entry_id = Some(9);
        let expense = form.validate().unwrap();
        assert_eq!(expense.form_fields()[0], ("category", "Rooms".to_string()));
        assert_eq!(expense.target(), (Method::Put, "/api/reports/expense-entry/9".to_string()));
        assert_eq!(form.title(), "Edit Expense Entry");
    }

    #[test]
    fn test_save_report_refetches_list() {
        let backend = RecordingBackend::new().respond("/api/reports", REPORTS_JSON);
        let submission = valid_report_form().validate().unwrap();
        let reports = block_on(save_report(&backend, &submission)).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(
            backend.calls(),
            vec![
                (Method::Post, "/api/reports/create".to_string()),
                (Method::Get, "/api/reports".to_string()),
            ]
        );
        let body = backend.body_of(Method::Post, "/api/reports/create").unwrap();
        assert!(body.starts_with("reportName=Q1 revenue&reportType=REVENUE"));
    }

    #[test]
    fn test_failed_write_skips_refresh() {
        let backend = RecordingBackend::new()
            .respond("/api/reports", REPORTS_JSON)
            .fail(
                Method::Put,
                "/api/reports/1/finalize",
                ApiError::from_error_body(400, "Bad Request", r#"{"error":"Report already finalized"}"#),
            );
        let err = block_on(finalize_report(&backend, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Report already finalized");
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_delete_entry_refreshes_details_then_list() {
        let backend = RecordingBackend::new()
            .respond("/api/reports", REPORTS_JSON)
            .respond("/api/reports/1", DETAILS_JSON);
        let refresh = block_on(delete_entry(&backend, EntryKind::Revenue, 5, 1)).unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                (Method::Delete, "/api/reports/revenue-entry/5".to_string()),
                (Method::Get, "/api/reports/1".to_string()),
                (Method::Get, "/api/reports".to_string()),
            ]
        );
        assert_eq!(refresh.details.revenue_entries.len(), 1);
        assert!(refresh.details.expense_entries.is_empty());
        assert_eq!(refresh.details.total_expense, None);
    }

    #[test]
    fn test_load_entry_and_prefill() {
        let backend = RecordingBackend::new().respond(
            "/api/reports/expense-entry/7",
            r#"{"id":7,"category":"Laundry","description":"Linen","amount":12.5,"entryDate":"2024-01-09","report":{"id":3}}"#,
        );
        let entry = block_on(load_entry(&backend, EntryKind::Expense, 7)).unwrap();
        let form = EntryForm::from_entry(&entry, 1);
        assert_eq!(form.report_id, 3);
        assert_eq!(form.category_or_source, "Laundry");
        assert_eq!(form.amount, "12.5");
        assert_eq!(form.entry_id, Some(7));
    }
}
