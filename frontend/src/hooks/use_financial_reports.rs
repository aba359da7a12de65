use gloo::dialogs::confirm;
use shared::finance::{
    self, EntryForm, EntryKind, ReportForm, CONFIRM_DELETE_ENTRY, CONFIRM_DELETE_REPORT,
    CONFIRM_FINALIZE_REPORT,
};
use shared::{FieldErrors, FinancialReport, ReportDetails};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toast::ToastKind;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "financial-reports";

#[derive(Clone, PartialEq)]
pub struct FinancialReportsState {
    pub reports: Vec<FinancialReport>,
    pub loading: bool,
    pub load_error: Option<String>,
    /// Open detail view
    pub details: Option<ReportDetails>,
    /// Open report modal
    pub report_form: Option<ReportForm>,
    pub report_errors: FieldErrors,
    /// Open entry modal
    pub entry_form: Option<EntryForm>,
    pub entry_errors: FieldErrors,
    pub saving: bool,
}

pub struct UseFinancialReportsResult {
    pub state: FinancialReportsState,
    pub actions: UseFinancialReportsActions,
}

#[derive(Clone)]
pub struct UseFinancialReportsActions {
    pub reload: Callback<()>,
    pub view: Callback<i64>,
    pub close_details: Callback<()>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<i64>,
    pub close_report_form: Callback<()>,
    pub submit_report: Callback<ReportForm>,
    pub delete_report: Callback<i64>,
    pub finalize: Callback<i64>,
    /// (kind, report id)
    pub open_add_entry: Callback<(EntryKind, i64)>,
    /// (kind, entry id, id of the report on screen)
    pub open_edit_entry: Callback<(EntryKind, i64, i64)>,
    pub close_entry_form: Callback<()>,
    pub submit_entry: Callback<EntryForm>,
    /// (kind, entry id, report id)
    pub delete_entry: Callback<(EntryKind, i64, i64)>,
}

#[hook]
pub fn use_financial_reports(
    api_client: &ApiClient,
    notify: Callback<(ToastKind, String)>,
) -> UseFinancialReportsResult {
    let reports = use_state(Vec::<FinancialReport>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let details = use_state(|| None::<ReportDetails>);
    let report_form = use_state(|| None::<ReportForm>);
    let report_errors = use_state(FieldErrors::new);
    let entry_form = use_state(|| None::<EntryForm>);
    let entry_errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let reload = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let reports = reports.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();

            loading.set(true);
            spawn_local(async move {
                match finance::load_reports(&api_client).await {
                    Ok(fetched) => {
                        reports.set(fetched);
                        load_error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching reports: {}", e));
                        load_error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let view = {
        let api_client = api_client.clone();
        let details = details.clone();
        let notify = notify.clone();

        use_callback((), move |report_id: i64, _| {
            let api_client = api_client.clone();
            let details = details.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::load_details(&api_client, report_id).await {
                    Ok(fetched) => details.set(Some(fetched)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching report details: {}", e));
                        notify.emit((ToastKind::Error, "Could not load report details.".to_string()));
                    }
                }
            });
        })
    };

    let close_details = {
        let details = details.clone();
        use_callback((), move |_, _| details.set(None))
    };

    let open_create = {
        let report_form = report_form.clone();
        let report_errors = report_errors.clone();
        use_callback((), move |_, _| {
            report_errors.set(FieldErrors::new());
            report_form.set(Some(ReportForm::default()));
        })
    };

    let open_edit = {
        let api_client = api_client.clone();
        let report_form = report_form.clone();
        let report_errors = report_errors.clone();
        let notify = notify.clone();

        use_callback((), move |report_id: i64, _| {
            let api_client = api_client.clone();
            let report_form = report_form.clone();
            let report_errors = report_errors.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::load_raw_report(&api_client, report_id).await {
                    Ok(report) => {
                        report_errors.set(FieldErrors::new());
                        report_form.set(Some(ReportForm::from_report(&report)));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching report for editing: {}", e));
                        notify.emit((ToastKind::Error, "Could not load report data for editing.".to_string()));
                    }
                }
            });
        })
    };

    let close_report_form = {
        let report_form = report_form.clone();
        use_callback((), move |_, _| report_form.set(None))
    };

    let submit_report = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let report_form = report_form.clone();
        let report_errors = report_errors.clone();
        let saving = saving.clone();
        let notify = notify.clone();

        use_callback((), move |form: ReportForm, _| {
            let submission = match form.validate() {
                Ok(submission) => submission,
                Err(errors) => {
                    report_errors.set(errors);
                    return;
                }
            };
            report_errors.set(FieldErrors::new());

            let api_client = api_client.clone();
            let reports = reports.clone();
            let report_form = report_form.clone();
            let saving = saving.clone();
            let notify = notify.clone();

            saving.set(true);
            spawn_local(async move {
                match finance::save_report(&api_client, &submission).await {
                    Ok(fetched) => {
                        reports.set(fetched);
                        report_form.set(None);
                        let message = if submission.id.is_some() {
                            "Report updated successfully!"
                        } else {
                            "Report created successfully!"
                        };
                        notify.emit((ToastKind::Success, message.to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error saving report: {}", e));
                        notify.emit((ToastKind::Error, format!("Error: {}", e)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let delete_report = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let notify = notify.clone();

        use_callback((), move |report_id: i64, _| {
            if !confirm(CONFIRM_DELETE_REPORT) {
                return;
            }
            let api_client = api_client.clone();
            let reports = reports.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::delete_report(&api_client, report_id).await {
                    Ok(fetched) => {
                        reports.set(fetched);
                        notify.emit((ToastKind::Success, "Report deleted successfully.".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error deleting report: {}", e));
                        notify.emit((ToastKind::Error, "Could not delete report.".to_string()));
                    }
                }
            });
        })
    };

    let finalize = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let details = details.clone();
        let notify = notify.clone();

        use_callback((), move |report_id: i64, _| {
            if !confirm(CONFIRM_FINALIZE_REPORT) {
                return;
            }
            let api_client = api_client.clone();
            let reports = reports.clone();
            let details = details.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::finalize_report(&api_client, report_id).await {
                    Ok(fetched) => {
                        details.set(None);
                        reports.set(fetched);
                        notify.emit((ToastKind::Success, "Report finalized successfully.".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error finalizing report: {}", e));
                        notify.emit((ToastKind::Error, "Could not finalize report.".to_string()));
                    }
                }
            });
        })
    };

    let open_add_entry = {
        let entry_form = entry_form.clone();
        let entry_errors = entry_errors.clone();
        use_callback((), move |(kind, report_id): (EntryKind, i64), _| {
            entry_errors.set(FieldErrors::new());
            entry_form.set(Some(EntryForm::new(kind, report_id)));
        })
    };

    let open_edit_entry = {
        let api_client = api_client.clone();
        let entry_form = entry_form.clone();
        let entry_errors = entry_errors.clone();
        let notify = notify.clone();

        use_callback((), move |(kind, entry_id, open_report_id): (EntryKind, i64, i64), _| {
            let api_client = api_client.clone();
            let entry_form = entry_form.clone();
            let entry_errors = entry_errors.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::load_entry(&api_client, kind, entry_id).await {
                    Ok(entry) => {
                        entry_errors.set(FieldErrors::new());
                        entry_form.set(Some(EntryForm::from_entry(&entry, open_report_id)));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching entry for editing: {}", e));
                        notify.emit((ToastKind::Error, "Could not load entry data.".to_string()));
                    }
                }
            });
        })
    };

    let close_entry_form = {
        let entry_form = entry_form.clone();
        use_callback((), move |_, _| entry_form.set(None))
    };

    let submit_entry = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let details = details.clone();
        let entry_form = entry_form.clone();
        let entry_errors = entry_errors.clone();
        let saving = saving.clone();
        let notify = notify.clone();

        use_callback((), move |form: EntryForm, _| {
            let submission = match form.validate() {
                Ok(submission) => submission,
                Err(errors) => {
                    entry_errors.set(errors);
                    return;
                }
            };
            entry_errors.set(FieldErrors::new());

            let api_client = api_client.clone();
            let reports = reports.clone();
            let details = details.clone();
            let entry_form = entry_form.clone();
            let saving = saving.clone();
            let notify = notify.clone();

            saving.set(true);
            spawn_local(async move {
                match finance::save_entry(&api_client, &submission).await {
                    Ok(refresh) => {
                        entry_form.set(None);
                        details.set(Some(refresh.details));
                        reports.set(refresh.reports);
                        let message = if submission.entry_id.is_some() {
                            "Entry updated successfully!"
                        } else {
                            "Entry added successfully!"
                        };
                        notify.emit((ToastKind::Success, message.to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error saving entry: {}", e));
                        notify.emit((ToastKind::Error, format!("Error: {}", e)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let delete_entry = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let details = details.clone();

        use_callback((), move |(kind, entry_id, report_id): (EntryKind, i64, i64), _| {
            if !confirm(CONFIRM_DELETE_ENTRY) {
                return;
            }
            let api_client = api_client.clone();
            let reports = reports.clone();
            let details = details.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match finance::delete_entry(&api_client, kind, entry_id, report_id).await {
                    Ok(refresh) => {
                        details.set(Some(refresh.details));
                        reports.set(refresh.reports);
                        notify.emit((ToastKind::Success, "Entry deleted successfully.".to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error deleting entry: {}", e));
                        notify.emit((ToastKind::Error, "Could not delete entry.".to_string()));
                    }
                }
            });
        })
    };

    UseFinancialReportsResult {
        state: FinancialReportsState {
            reports: (*reports).clone(),
            loading: *loading,
            load_error: (*load_error).clone(),
            details: (*details).clone(),
            report_form: (*report_form).clone(),
            report_errors: (*report_errors).clone(),
            entry_form: (*entry_form).clone(),
            entry_errors: (*entry_errors).clone(),
            saving: *saving,
        },
        actions: UseFinancialReportsActions {
            reload,
            view,
            close_details,
            open_create,
            open_edit,
            close_report_form,
            submit_report,
            delete_report,
            finalize,
            open_add_entry,
            open_edit_entry,
            close_entry_form,
            submit_entry,
            delete_entry,
        },
    }
}
