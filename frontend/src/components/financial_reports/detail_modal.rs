use shared::finance::{report_type_icon, report_type_label, EntryKind, ReportControls};
use shared::format::{format_currency, format_short_date};
use shared::ReportDetails;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub details: ReportDetails,
    pub on_close: Callback<()>,
    /// (kind, report id)
    pub on_add_entry: Callback<(EntryKind, i64)>,
    /// (kind, entry id, report id)
    pub on_edit_entry: Callback<(EntryKind, i64, i64)>,
    /// (kind, entry id, report id)
    pub on_delete_entry: Callback<(EntryKind, i64, i64)>,
    pub on_finalize: Callback<i64>,
}

/// Row data common to both ledgers
struct EntryRow<'a> {
    id: i64,
    label: &'a str,
    description: &'a str,
    date: &'a str,
    amount: f64,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let details = &props.details;
    let report = &details.report;
    let controls = ReportControls::for_report(report);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_finalize = {
        let on_finalize = props.on_finalize.clone();
        let id = report.id;
        Callback::from(move |_: MouseEvent| on_finalize.emit(id))
    };

    let revenue_rows: Vec<EntryRow> = details
        .revenue_entries
        .iter()
        .map(|e| EntryRow {
            id: e.id,
            label: &e.source,
            description: &e.description,
            date: &e.entry_date,
            amount: e.amount,
        })
        .collect();
    let expense_rows: Vec<EntryRow> = details
        .expense_entries
        .iter()
        .map(|e| EntryRow {
            id: e.id,
            label: &e.category,
            description: &e.description,
            date: &e.entry_date,
            amount: e.amount,
        })
        .collect();

    let section = |kind: EntryKind, rows: Vec<EntryRow>, total: Option<f64>| {
        entry_section(kind, rows, total, report.id, controls, props)
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog modal-wide" id="report-detail-modal" onclick={on_modal_click}>
                <div class="report-header">
                    <h2>{format!("{} {}", report_type_icon(report.report_type), report.report_name.as_deref().unwrap_or_default())}</h2>
                    <div class="report-meta">
                        <div class="report-meta-item">
                            <strong>{"Report Type:"}</strong>
                            <span>{report_type_label(report.report_type)}</span>
                        </div>
                        <div class="report-meta-item">
                            <strong>{"Status:"}</strong>
                            <span class={classes!("status", report.status.as_str().to_lowercase())}>{report.status.as_str()}</span>
                        </div>
                        <div class="report-meta-item">
                            <strong>{"Date Range:"}</strong>
                            <span>{format!(
                                "{} to {}",
                                format_short_date(report.start_date.as_deref()),
                                format_short_date(report.end_date.as_deref())
                            )}</span>
                        </div>
                        <div class="report-meta-item">
                            <strong>{"Generated By:"}</strong>
                            <span>{report.generated_by.as_deref().unwrap_or_default()}</span>
                        </div>
                    </div>
                    if let Some(description) = report.description.as_deref().filter(|d| !d.is_empty()) {
                        <p class="report-description">{description}</p>
                    }
                </div>

                <div class="final-total">
                    <i class="fas fa-chart-line"></i>
                    {format!(" Report Total: {}", format_currency(report.total_amount))}
                </div>

                if report.report_type.shows_revenue() {
                    {section(EntryKind::Revenue, revenue_rows, details.total_revenue)}
                }
                if report.report_type.shows_expense() {
                    {section(EntryKind::Expense, expense_rows, details.total_expense)}
                }

                <div class="report-actions">
                    if controls.can_finalize {
                        <button class="btn-finalize" onclick={on_finalize}>
                            <i class="fas fa-lock"></i>{" Finalize Report"}
                        </button>
                    } else {
                        <p class="text-secondary">
                            <i class="fas fa-check-circle"></i>{" This report has been finalized and cannot be modified."}
                        </p>
                    }
                    <button type="button" class="btn secondary" onclick={on_close_click}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}

fn entry_section(
    kind: EntryKind,
    rows: Vec<EntryRow>,
    total: Option<f64>,
    report_id: i64,
    controls: ReportControls,
    props: &DetailModalProps,
) -> Html {
    let (icon, amount_color, heading) = match kind {
        EntryKind::Revenue => ("fas fa-arrow-up", "var(--success-color)", "Revenue Entries"),
        EntryKind::Expense => ("fas fa-arrow-down", "var(--danger-color)", "Expense Entries"),
    };
    let on_add = {
        let on_add_entry = props.on_add_entry.clone();
        Callback::from(move |_: MouseEvent| on_add_entry.emit((kind, report_id)))
    };
    let report_type = props.details.report.report_type;

    html! {
        <div class="detail-section">
            <div class="detail-header">
                <h4><i class={icon} style={format!("color: {};", amount_color)}></i>{format!(" {}", heading)}</h4>
                <button class="btn-add-entry" disabled={!controls.can_add_entry} onclick={on_add}>
                    <i class="fas fa-plus"></i>{" Add Entry"}
                </button>
            </div>
            if rows.is_empty() {
                <p class="empty-entries">{format!("No {} entries yet.", kind.slug())}</p>
            } else {
                <table class="entries-table">
                    <thead>
                        <tr>
                            <th>{kind.label()}</th>
                            <th>{"Description"}</th>
                            <th>{"Date"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|row| {
                            let entry_id = row.id;
                            let on_edit = {
                                let cb = props.on_edit_entry.clone();
                                Callback::from(move |_: MouseEvent| cb.emit((kind, entry_id, report_id)))
                            };
                            let on_delete = {
                                let cb = props.on_delete_entry.clone();
                                Callback::from(move |_: MouseEvent| cb.emit((kind, entry_id, report_id)))
                            };
                            html! {
                                <tr key={entry_id}>
                                    <td><strong>{row.label}</strong></td>
                                    <td>{row.description}</td>
                                    <td>{format_short_date(Some(row.date))}</td>
                                    <td><strong style={format!("color: {};", amount_color)}>{format_currency(row.amount)}</strong></td>
                                    <td>
                                        <button class="btn-action edit-entry" title="Edit Entry"
                                            disabled={!controls.can_modify_entries} onclick={on_edit}>
                                            <i class="fas fa-edit"></i>
                                        </button>
                                        <button class="btn-action delete-entry" title="Delete Entry"
                                            disabled={!controls.can_modify_entries} onclick={on_delete}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            }
            if report_type.shows_section_totals() {
                <div class="total">
                    {format!("Total {}: ", kind.title())}
                    <strong style={format!("color: {};", amount_color)}>{format_currency(total.unwrap_or_default())}</strong>
                </div>
            }
        </div>
    }
}
