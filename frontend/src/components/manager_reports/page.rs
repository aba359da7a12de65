use shared::manager_reports::{ManagerReportKind, REVENUE_SOURCES, REVENUE_TREND, TREND_COLOR};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::report_view::ReportView;
use super::source_donut::SourceDonut;
use super::trend_chart::TrendChart;
use crate::hooks::use_manager_reports::use_manager_reports;
use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::date_utils::input_value;

#[derive(Properties, PartialEq)]
pub struct ReportsConsoleProps {
    pub api_client: ApiClient,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(ReportsConsole)]
pub fn reports_console(props: &ReportsConsoleProps) -> Html {
    let reports = use_manager_reports(&props.api_client, props.notify.clone());
    let state = &reports.state;
    let actions = &reports.actions;

    let on_kind_change = {
        let select_kind = actions.select_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select_kind.emit(select.value());
        })
    };
    let on_start_change = {
        let set_start = actions.set_start.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_start.emit(input.value());
        })
    };
    let on_end_change = {
        let set_end = actions.set_end.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_end.emit(input.value());
        })
    };
    let on_generate = {
        let generate = actions.generate.clone();
        Callback::from(move |_: MouseEvent| generate.emit(()))
    };
    let on_export_pdf = {
        let export = actions.export.clone();
        Callback::from(move |_: MouseEvent| export.emit("pdf".to_string()))
    };

    html! {
        <div class="manager-reports">
            <div class="card mb-4">
                <div class="card-body">
                    <div class="row g-3 align-items-end">
                        <div class="col-md-3">
                            <label for="reportType" class="form-label">{"Report Type"}</label>
                            <select id="reportType" class="form-select" onchange={on_kind_change}>
                                {for ManagerReportKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.slug()} selected={*kind == state.kind}>{kind.label()}</option>
                                })}
                            </select>
                        </div>
                        <div class="col-md-3">
                            <label for="startDate" class="form-label">{"Start Date"}</label>
                            <input id="startDate" type="date" class="form-control"
                                value={input_value(state.start)} onchange={on_start_change} />
                        </div>
                        <div class="col-md-3">
                            <label for="endDate" class="form-label">{"End Date"}</label>
                            <input id="endDate" type="date" class="form-control"
                                value={input_value(state.end)} onchange={on_end_change} />
                        </div>
                        <div class="col-md-3 d-flex gap-2">
                            <button type="button" class="btn btn-primary" disabled={state.generating} onclick={on_generate}>
                                if state.generating {
                                    <i class="fas fa-spinner fa-spin me-2"></i>{"Generating..."}
                                } else {
                                    <i class="fas fa-chart-line me-2"></i>{"Generate Report"}
                                }
                            </button>
                            <button type="button" class="btn btn-outline-danger" disabled={state.exporting} onclick={on_export_pdf}>
                                <i class="fas fa-file-pdf me-2"></i>{"Export PDF"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="row mb-4">
                <div class="col-md-8">
                    <div class="card">
                        <div class="card-header">{"Revenue Trend"}</div>
                        <div class="card-body">
                            <TrendChart points={REVENUE_TREND.to_vec()} color={TREND_COLOR} />
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card">
                        <div class="card-header">{"Revenue Distribution"}</div>
                        <div class="card-body">
                            <SourceDonut sources={REVENUE_SOURCES.to_vec()} />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card mb-4">
                <div class="card-header">{"Report Results"}</div>
                <div class="card-body" id="reportContent">
                    {match &state.current {
                        Some((_, report)) => html! { <ReportView report={report.clone()} /> },
                        None => html! {
                            <p class="text-muted text-center">{"Select a report type and date range, then click Generate Report."}</p>
                        },
                    }}
                </div>
            </div>

            <div class="card">
                <div class="card-header">{"Generated Reports"}</div>
                <div class="card-body">
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{"Type"}</th>
                                <th>{"Period"}</th>
                                <th>{"Generated"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody id="generatedReportsBody">
                            {for state.history.entries().iter().map(|entry| {
                                let export_request = actions.export_request.clone();
                                let request = entry.request;
                                html! {
                                    <tr>
                                        <td>{entry.kind.label()}</td>
                                        <td>{format!("{} to {}", entry.start, entry.end)}</td>
                                        <td>{&entry.generated_at}</td>
                                        <td>
                                            <button
                                                type="button"
                                                class="btn btn-sm btn-outline-danger"
                                                title="Export PDF"
                                                onclick={Callback::from(move |_: MouseEvent| export_request.emit(request))}
                                            >
                                                <i class="fas fa-file-pdf"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
