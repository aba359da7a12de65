use shared::finance::{report_type_icon, report_type_label, ReportControls};
use shared::format::{format_currency, format_short_date};
use shared::FinancialReport;
use yew::prelude::*;

use super::detail_modal::DetailModal;
use super::entry_modal::EntryModal;
use super::report_modal::ReportModal;
use crate::hooks::use_financial_reports::{use_financial_reports, UseFinancialReportsActions};
use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct FinancialReportsProps {
    pub api_client: ApiClient,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(FinancialReportsEditor)]
pub fn financial_reports_editor(props: &FinancialReportsProps) -> Html {
    let finance = use_financial_reports(&props.api_client, props.notify.clone());
    let state = &finance.state;
    let actions = &finance.actions;

    let on_create = {
        let open_create = actions.open_create.clone();
        Callback::from(move |_: MouseEvent| open_create.emit(()))
    };

    let body = if state.loading {
        html! {
            <tr>
                <td colspan="6" class="text-center" style="padding: 3rem;">
                    <div class="loading-spinner"></div>
                    <p class="text-secondary">{"Loading reports..."}</p>
                </td>
            </tr>
        }
    } else if let Some(error) = &state.load_error {
        let on_retry = {
            let reload = actions.reload.clone();
            Callback::from(move |_: MouseEvent| reload.emit(()))
        };
        html! {
            <tr>
                <td colspan="6" class="text-center">
                    <div class="empty-state">
                        <div class="empty-state-icon">{"❌"}</div>
                        <p class="text-danger">{"Error loading reports"}</p>
                        <p class="text-secondary">{error}</p>
                        <button class="btn primary" onclick={on_retry}>
                            <i class="fas fa-sync"></i>{" Retry"}
                        </button>
                    </div>
                </td>
            </tr>
        }
    } else if state.reports.is_empty() {
        html! {
            <tr>
                <td colspan="6" class="text-center">
                    <div class="empty-state">
                        <div class="empty-state-icon">{"📄"}</div>
                        <p>{"No financial reports found"}</p>
                        <p class="text-secondary">{"Create your first report to get started."}</p>
                        <button class="btn primary" onclick={on_create.clone()}>
                            <i class="fas fa-plus-circle"></i>{" Create First Report"}
                        </button>
                    </div>
                </td>
            </tr>
        }
    } else {
        state
            .reports
            .iter()
            .map(|report| report_row(report, actions))
            .collect::<Html>()
    };

    html! {
        <div class="financial-reports">
            <div class="page-header">
                <h1>{"Financial Reports"}</h1>
                <button class="btn primary" id="create-report-btn" onclick={on_create}>
                    <i class="fas fa-plus-circle"></i>{" Create Report"}
                </button>
            </div>

            <table class="reports-table">
                <thead>
                    <tr>
                        <th>{"Report"}</th>
                        <th>{"Type"}</th>
                        <th>{"Status"}</th>
                        <th>{"Period"}</th>
                        <th>{"Total"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody id="reports-table-body">{body}</tbody>
            </table>

            if let Some(details) = &state.details {
                <DetailModal
                    details={details.clone()}
                    on_close={actions.close_details.clone()}
                    on_add_entry={actions.open_add_entry.clone()}
                    on_edit_entry={actions.open_edit_entry.clone()}
                    on_delete_entry={actions.delete_entry.clone()}
                    on_finalize={actions.finalize.clone()}
                />
            }
            if let Some(form) = &state.report_form {
                <ReportModal
                    form={form.clone()}
                    errors={state.report_errors.clone()}
                    saving={state.saving}
                    on_submit={actions.submit_report.clone()}
                    on_close={actions.close_report_form.clone()}
                />
            }
            if let Some(form) = &state.entry_form {
                <EntryModal
                    form={form.clone()}
                    errors={state.entry_errors.clone()}
                    saving={state.saving}
                    on_submit={actions.submit_entry.clone()}
                    on_close={actions.close_entry_form.clone()}
                />
            }
        </div>
    }
}

fn report_row(report: &FinancialReport, actions: &UseFinancialReportsActions) -> Html {
    let controls = ReportControls::for_report(report);
    let id = report.id;
    let emit = |cb: &Callback<i64>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    html! {
        <tr key={id}>
            <td>
                <strong>{report.report_name.as_deref().unwrap_or("Unnamed Report")}</strong>
                <br />
                <small class="text-secondary">{format!("By {}", report.generated_by.as_deref().unwrap_or("Unknown"))}</small>
            </td>
            <td>{format!("{} {}", report_type_icon(report.report_type), report_type_label(report.report_type))}</td>
            <td>
                <span class={classes!("status", report.status.as_str().to_lowercase())}>{report.status.as_str()}</span>
            </td>
            <td>
                {format_short_date(report.start_date.as_deref())}
                <br />
                <small class="text-secondary">{format!("to {}", format_short_date(report.end_date.as_deref()))}</small>
            </td>
            <td><strong>{format_currency(report.total_amount)}</strong></td>
            <td>
                <button class="btn-action view" title="View Details" onclick={emit(&actions.view)}>
                    <i class="fas fa-eye"></i>
                </button>
                <button class="btn-action edit" title="Edit Report" disabled={!controls.can_edit} onclick={emit(&actions.open_edit)}>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn-action delete" title="Delete Report" disabled={!controls.can_delete} onclick={emit(&actions.delete_report)}>
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
