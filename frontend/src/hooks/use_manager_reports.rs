use std::rc::Rc;

use chrono::NaiveDate;
use shared::manager_reports::{
    default_range, generate_report, ExportFormat, ManagerReport, ManagerReportKind, ReportHistory,
    ReportRequest,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::date_utils::{now_display, parse_input_date, today};
use crate::services::download::save_bytes;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ReportsConsoleState {
    pub kind: ManagerReportKind,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub generating: bool,
    pub exporting: bool,
    pub current: Option<(ReportRequest, ManagerReport)>,
    pub history: ReportHistory,
}

pub struct UseManagerReportsResult {
    pub state: ReportsConsoleState,
    pub actions: UseManagerReportsActions,
}

#[derive(Clone)]
pub struct UseManagerReportsActions {
    pub select_kind: Callback<String>,
    pub set_start: Callback<String>,
    pub set_end: Callback<String>,
    pub generate: Callback<()>,
    /// Export the report on screen in the named format
    pub export: Callback<String>,
    /// Export a row of the generated-reports list
    pub export_request: Callback<ReportRequest>,
}

#[derive(Default, PartialEq)]
struct HistoryState(ReportHistory);

struct Record {
    request: ReportRequest,
    report: ManagerReport,
    generated_at: String,
}

impl Reducible for HistoryState {
    type Action = Record;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut history = self.0.clone();
        history.record(action.request, &action.report, action.generated_at);
        Rc::new(HistoryState(history))
    }
}

#[hook]
pub fn use_manager_reports(
    api_client: &ApiClient,
    notify: Callback<(ToastKind, String)>,
) -> UseManagerReportsResult {
    let (default_start, default_end) = default_range(today());
    let kind = use_state(|| ManagerReportKind::Revenue);
    let start = use_state(|| Some(default_start));
    let end = use_state(|| Some(default_end));
    let generating = use_state(|| false);
    let exporting = use_state(|| false);
    let current = use_state(|| None::<(ReportRequest, ManagerReport)>);
    let history = use_reducer(HistoryState::default);

    let select_kind = {
        let kind = kind.clone();
        use_callback((), move |slug: String, _| {
            if let Some(selected) = ManagerReportKind::from_slug(&slug) {
                kind.set(selected);
            }
        })
    };

    let set_start = {
        let start = start.clone();
        use_callback((), move |value: String, _| start.set(parse_input_date(&value)))
    };

    let set_end = {
        let end = end.clone();
        use_callback((), move |value: String, _| end.set(parse_input_date(&value)))
    };

    let generate = {
        let api_client = api_client.clone();
        let generating = generating.clone();
        let current = current.clone();
        let dispatcher = history.dispatcher();
        let notify = notify.clone();

        use_callback((*kind, *start, *end), move |_, (kind, start, end)| {
            let request = match ReportRequest::new(*kind, *start, *end) {
                Ok(request) => request,
                Err(e) => {
                    notify.emit((ToastKind::Warning, e.to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let generating = generating.clone();
            let current = current.clone();
            let dispatcher = dispatcher.clone();
            let notify = notify.clone();

            Logger::debug_with_component(
                "manager-reports",
                &format!("Requesting {}", request.endpoint().path),
            );
            generating.set(true);
            spawn_local(async move {
                match generate_report(&api_client, &request).await {
                    Ok(report) => {
                        dispatcher.dispatch(Record {
                            request,
                            report: report.clone(),
                            generated_at: now_display(),
                        });
                        current.set(Some((request, report)));
                        notify.emit((ToastKind::Success, "Report generated successfully!".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component("manager-reports", &format!("Error generating report: {}", e));
                        notify.emit((ToastKind::Error, format!("Error generating report: {}", e)));
                    }
                }
                generating.set(false);
            });
        })
    };

    let export_request = {
        let api_client = api_client.clone();
        let exporting = exporting.clone();
        let notify = notify.clone();

        use_callback((), move |request: ReportRequest, _| {
            let api_client = api_client.clone();
            let exporting = exporting.clone();
            let notify = notify.clone();

            exporting.set(true);
            spawn_local(async move {
                let result = api_client
                    .get_bytes(&request.export_endpoint())
                    .await
                    .map_err(|e| e.to_string())
                    .and_then(|bytes| {
                        save_bytes(&bytes, "application/pdf", &request.export_file_name())
                    });
                match result {
                    Ok(()) => {
                        notify.emit((ToastKind::Success, "PDF report exported successfully!".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component("manager-reports", &format!("Export error: {}", e));
                        notify.emit((ToastKind::Error, format!("Error exporting report: {}", e)));
                    }
                }
                exporting.set(false);
            });
        })
    };

    let export = {
        let export_request = export_request.clone();
        let current_request = (*current).as_ref().map(|(request, _)| *request);

        use_callback(current_request, move |format: String, current_request| {
            let Some(request) = current_request else {
                notify.emit((ToastKind::Warning, "Please generate a report first".to_string()));
                return;
            };
            match ExportFormat::parse(&format) {
                Ok(ExportFormat::Pdf) => export_request.emit(*request),
                Err(e) => notify.emit((ToastKind::Warning, e.to_string())),
            }
        })
    };

    UseManagerReportsResult {
        state: ReportsConsoleState {
            kind: *kind,
            start: *start,
            end: *end,
            generating: *generating,
            exporting: *exporting,
            current: (*current).clone(),
            history: history.0.clone(),
        },
        actions: UseManagerReportsActions {
            select_kind,
            set_start,
            set_end,
            generate,
            export,
            export_request,
        },
    }
}
