use api_client::HttpApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowLeft, LdCamera, LdEye, LdFileText, LdImage, LdPaperclip, LdTrash2,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, FormSelect,
    Input, Separator, Textarea, ToastOptions,
};
use uuid::Uuid;

use crate::attachments::{AttachmentKind, AttachmentSet, NewFile, REMOTE_ATTACHMENT_CAP};
use crate::auth::{use_drafts, use_session};
use crate::form::ReportForm;
use crate::reference::{load_base_data, load_operator_scoped_data, OperatorData};
use crate::routes::Route;
use crate::submission;

/// The report editing screen.
///
/// Reference data loads in two tiers: the date keys the base tier
/// (operators, vehicles, violations, localities) and the selected
/// operator's sigla keys the scoped tier (lines, agents). The tier
/// resources restart whenever their key signal changes, so a superseded
/// request can never overwrite fresher data, and the cascade-clear runs in
/// the same handler that moves the key.
#[component]
pub fn ReportFormPage(audit_id: Option<String>) -> Element {
    let session = use_session();
    let drafts = use_drafts();
    let api = use_context::<HttpApi>();
    let toast = use_toast();

    // --- Form snapshot (single source of truth) ---
    let mut form = use_signal({
        let drafts = drafts.clone();
        move || {
            audit_id
                .as_deref()
                .and_then(|raw| Uuid::parse_str(raw).ok())
                .and_then(|id| drafts.get(id))
                .map(ReportForm::from_report)
                .unwrap_or_default()
        }
    });

    let mut attachments = use_signal(|| AttachmentSet::with_cap(REMOTE_ATTACHMENT_CAP));

    // --- Resource keys, mirrored out of the snapshot so the tier
    // resources only restart on date/operator changes ---
    let mut date_key = use_signal(|| form.peek().report.date.clone());
    let mut sigla_key = use_signal(|| form.peek().report.operator_sigla.clone());

    // --- Tier 1: date-scoped base data ---
    let base = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let date = date_key.read().clone();
            async move { load_base_data(&api, &date).await }
        }
    });

    // --- Tier 2: operator-scoped data, never issued before an operator
    // is known ---
    let scoped = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let sigla = sigla_key.read().clone();
            let date = date_key.read().clone();
            async move {
                if sigla.is_empty() {
                    return OperatorData::default();
                }
                load_operator_scoped_data(&api, &sigla, &date).await
            }
        }
    });

    // Degraded lookups surface as notices, one per failed list.
    use_effect(move || {
        if let Some(data) = base.read().as_ref() {
            for list in &data.failures {
                toast.error(
                    format!("Could not load {list}. The list is empty for now."),
                    ToastOptions::new(),
                );
            }
        }
    });
    use_effect(move || {
        if let Some(data) = scoped.read().as_ref() {
            for list in &data.failures {
                toast.error(
                    format!("Could not load {list}. The list is empty for now."),
                    ToastOptions::new(),
                );
            }
        }
    });

    // --- Modal + action state ---
    let mut attach_open = use_signal(|| false);
    let mut gallery_open = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    // --- Cascade handlers ---
    let on_date_change = move |e: FormEvent| {
        let date = e.value();
        form.with_mut(|f| f.set_date(date.clone()));
        sigla_key.set(String::new());
        date_key.set(date);
    };

    let on_operator_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let operators = base
            .read()
            .as_ref()
            .map(|d| d.operators.clone())
            .unwrap_or_default();
        let sigla = form.with_mut(|f| f.select_operator(id, &operators));
        sigla_key.set(sigla.unwrap_or_default());
    };

    let on_vehicle_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let vehicles = base
            .read()
            .as_ref()
            .map(|d| d.vehicles.clone())
            .unwrap_or_default();
        form.with_mut(|f| f.select_vehicle(id, &vehicles));
    };

    let on_agent_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let agents = scoped
            .read()
            .as_ref()
            .map(|d| d.agents.clone())
            .unwrap_or_default();
        form.with_mut(|f| f.select_agent(id, &agents));
    };

    let on_line_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let lines = scoped
            .read()
            .as_ref()
            .map(|d| d.lines.clone())
            .unwrap_or_default();
        form.with_mut(|f| f.select_line(id, &lines));
    };

    let on_violation_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let codes = base
            .read()
            .as_ref()
            .map(|d| d.violations.clone())
            .unwrap_or_default();
        form.with_mut(|f| f.select_violation(id, &codes));
    };

    let on_locality_change = move |e: Event<FormData>| {
        let id = e.value().parse::<i64>().unwrap_or(0);
        let localities = base
            .read()
            .as_ref()
            .map(|d| d.localities.clone())
            .unwrap_or_default();
        form.with_mut(|f| f.select_locality(id, &localities));
    };

    // --- Attachments ---
    let handle_files = move |evt: FormEvent| async move {
        let mut picked = Vec::new();
        for file in evt.files() {
            match file.read_bytes().await {
                Ok(bytes) => picked.push(NewFile {
                    name: file.name(),
                    content_type: file
                        .content_type()
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                    bytes: bytes.to_vec(),
                }),
                Err(_) => {
                    toast.error("Could not read the selected file.".to_string(), ToastOptions::new());
                }
            }
        }
        let outcome = attachments.with_mut(|a| a.add_files(picked));
        if outcome.rejected > 0 {
            toast.info(
                format!(
                    "A report carries {REMOTE_ATTACHMENT_CAP} attachment; {} file(s) were not added.",
                    outcome.rejected
                ),
                ToastOptions::new(),
            );
        }
        attach_open.set(false);
    };

    let mut remove_attachment = move |id: Uuid| {
        attachments.with_mut(|a| a.remove(id));
    };

    // --- Save / Submit / Delete ---
    let handle_save = {
        let drafts = drafts.clone();
        move |_| {
            if saving() || submitting() {
                return;
            }
            saving.set(true);
            let names = attachments.read().names();
            let result = form.with_mut(|f| submission::save_draft(&drafts, &mut f.report, names));
            match result {
                Ok(()) => {
                    toast.success("Report saved on this device.".to_string(), ToastOptions::new());
                    navigator().push(Route::ReportList {});
                }
                Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
            }
            saving.set(false);
        }
    };

    let handle_submit = {
        let api = api.clone();
        let drafts = drafts.clone();
        move |_| {
            if saving() || submitting() {
                return;
            }
            let Some(user) = session.current_user.read().as_ref().cloned() else {
                toast.error("Sign in again to submit reports.".to_string(), ToastOptions::new());
                return;
            };
            let api = api.clone();
            let drafts = drafts.clone();
            spawn(async move {
                submitting.set(true);
                let names = attachments.read().names();
                let upload = attachments.read().single().map(|a| a.to_upload());
                let mut report = form.read().report.clone();
                match submission::submit(&api, &drafts, &user, &mut report, names, upload).await {
                    Ok(outcome) => {
                        form.set(ReportForm::from_report(report));
                        attachments.with_mut(|a| a.clear());
                        toast.success(
                            format!("Report protocoled as {}.", outcome.assigned_number),
                            ToastOptions::new(),
                        );
                        navigator().push(Route::ReportList {});
                    }
                    Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
                }
                submitting.set(false);
            });
        }
    };

    let handle_delete = {
        let drafts = drafts.clone();
        move |_| {
            let id = form.read().report.id;
            match drafts.remove(id) {
                Ok(()) => {
                    toast.success("Report deleted.".to_string(), ToastOptions::new());
                    navigator().push(Route::ReportList {});
                }
                Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
            }
            show_delete.set(false);
        }
    };

    // --- Render ---
    let report = form.read().report.clone();
    let display_number = report.display_number();
    let base_data = base.read().as_ref().cloned().unwrap_or_default();
    let scoped_data = scoped.read().as_ref().cloned().unwrap_or_default();
    let base_loading = base.read().is_none();
    let scoped_loading = scoped.read().is_none();
    let operator_selected = report.operator_id != 0;
    let attachment_count = attachments.read().len();

    rsx! {
        div { class: "form-header",
            button {
                class: "header-action",
                onclick: move |_| {
                    navigator().push(Route::ReportList {});
                },
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 18, height: 18 }
            }
            h1 { class: "form-header-title", "Violation Report - STPC" }
        }

        div { class: "page-body form-body",
            // Attachment bar
            div { class: "attach-bar",
                span { class: "attach-bar-label",
                    if attachment_count == 0 {
                        "Attachments:"
                    } else {
                        "Attachments: {attachment_count}"
                    }
                }
                div { class: "attach-bar-actions",
                    button {
                        class: "attach-bar-button",
                        onclick: move |_| attach_open.set(true),
                        Icon::<LdPaperclip> { icon: LdPaperclip, width: 16, height: 16 }
                        span { "Attach" }
                    }
                    button {
                        class: "attach-bar-button",
                        onclick: move |_| gallery_open.set(true),
                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                        span { "View" }
                    }
                }
            }

            // Identity header
            div { class: "form-banner",
                h2 { class: "form-banner-title", "Report {display_number}" }
                span { class: "form-banner-status", "{report.status}" }
            }

            Input {
                label: "Inspection service order",
                value: report.service_order.clone(),
                placeholder: "Service order",
                on_input: move |e: FormEvent| form.with_mut(|f| f.report.service_order = e.value()),
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Occurrence" }
                div { class: "form-grid-2",
                    Input {
                        label: "Date",
                        input_type: "date",
                        value: report.date.clone(),
                        on_input: on_date_change,
                    }
                    Input {
                        label: "Time",
                        input_type: "time",
                        value: report.time.clone(),
                        on_input: move |e: FormEvent| form.with_mut(|f| f.set_time(e.value())),
                    }
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Operator" }
                FormSelect {
                    label: "Operator",
                    value: report.operator_id.to_string(),
                    disabled: base_loading,
                    onchange: on_operator_change,
                    option { value: "0",
                        if base_loading { "Loading operators..." } else { "Select an operator" }
                    }
                    for operator in base_data.operators.iter() {
                        option { value: "{operator.permission_id}", {operator.label()} }
                    }
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Vehicle" }
                FormSelect {
                    label: "Vehicle",
                    value: report.vehicle_id.to_string(),
                    disabled: base_loading || !operator_selected,
                    onchange: on_vehicle_change,
                    option { value: "0", "Select a vehicle" }
                    for vehicle in base_data.vehicles.iter() {
                        option { value: "{vehicle.id}", {vehicle.label()} }
                    }
                }
                div { class: "form-grid-2",
                    Input { label: "Fleet number", value: report.fleet_number.clone(), disabled: true }
                    Input { label: "Plate", value: report.plate.clone(), disabled: true }
                }
                Input { label: "Model", value: report.model.clone(), disabled: true }
                div { class: "form-grid-2",
                    Input { label: "Color", value: report.color.clone(), disabled: true }
                    Input {
                        label: "Year",
                        value: if report.year > 0 { report.year.to_string() } else { String::new() },
                        disabled: true,
                    }
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Agent" }
                FormSelect {
                    label: "Agent",
                    value: report.agent_id.to_string(),
                    disabled: !operator_selected || scoped_loading,
                    onchange: on_agent_change,
                    option { value: "0",
                        if !operator_selected {
                            "Select an operator first"
                        } else if scoped_loading {
                            "Loading agents..."
                        } else {
                            "Select an agent"
                        }
                    }
                    for agent in scoped_data.agents.iter() {
                        option { value: "{agent.id}", {agent.label()} }
                    }
                }
                div { class: "form-grid-2",
                    Input { label: "Name", value: report.agent_name.clone(), disabled: true }
                    Input { label: "Registration", value: report.agent_registration.clone(), disabled: true }
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Line" }
                FormSelect {
                    label: "Line",
                    value: report.line_id.to_string(),
                    disabled: !operator_selected || scoped_loading,
                    onchange: on_line_change,
                    option { value: "0",
                        if !operator_selected {
                            "Select an operator first"
                        } else if scoped_loading {
                            "Loading lines..."
                        } else {
                            "Select a line"
                        }
                    }
                    for line in scoped_data.lines.iter() {
                        option { value: "{line.id}", {line.label()} }
                    }
                }
                div { class: "form-grid-2",
                    Input { label: "Code", value: report.line_code.clone(), disabled: true }
                    Input { label: "Name", value: report.line_name.clone(), disabled: true }
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Location" }
                FormSelect {
                    label: "Administrative region",
                    value: report.locality_id.to_string(),
                    disabled: base_loading,
                    onchange: on_locality_change,
                    option { value: "0", "Select the region" }
                    for locality in base_data.localities.iter() {
                        option { value: "{locality.id}", "{locality.description}" }
                    }
                }
                Input {
                    label: "Location",
                    value: report.location.clone(),
                    placeholder: "Where the violation happened",
                    on_input: move |e: FormEvent| form.with_mut(|f| f.report.location = e.value()),
                }
            }

            div { class: "form-section",
                h3 { class: "form-section-title", "Violation" }
                FormSelect {
                    label: "Violation",
                    value: report.violation_id.to_string(),
                    disabled: base_loading,
                    onchange: on_violation_change,
                    option { value: "0", "Select a violation" }
                    for code in base_data.violations.iter() {
                        option { value: "{code.id}", {code.label()} }
                    }
                }
                Textarea {
                    label: "Narrative",
                    value: report.narrative.clone(),
                    placeholder: "Describe what happened",
                    on_input: move |e: FormEvent| form.with_mut(|f| f.report.narrative = e.value()),
                }
            }

            Separator {}

            div { class: "form-actions",
                div { class: "form-grid-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving() || submitting(),
                        onclick: handle_save,
                        if saving() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: saving() || submitting(),
                        onclick: move |_| show_delete.set(true),
                        "Delete"
                    }
                }
                Button {
                    variant: ButtonVariant::Send,
                    disabled: saving() || submitting(),
                    onclick: handle_submit,
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }
        }

        // Attachment source picker
        if attach_open() {
            div { class: "modal-overlay",
                div { class: "modal-box",
                    h2 { class: "modal-title", "Add attachment" }
                    div { class: "attach-options",
                        label { class: "attach-option",
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "hidden-input",
                                onchange: handle_files,
                            }
                            Icon::<LdCamera> { icon: LdCamera, width: 28, height: 28 }
                            span { "Camera" }
                        }
                        label { class: "attach-option",
                            input {
                                r#type: "file",
                                accept: "image/*",
                                multiple: true,
                                class: "hidden-input",
                                onchange: handle_files,
                            }
                            Icon::<LdImage> { icon: LdImage, width: 28, height: 28 }
                            span { "Gallery" }
                        }
                        label { class: "attach-option",
                            input {
                                r#type: "file",
                                accept: ".pdf",
                                multiple: true,
                                class: "hidden-input",
                                onchange: handle_files,
                            }
                            Icon::<LdFileText> { icon: LdFileText, width: 28, height: 28 }
                            span { "PDF" }
                        }
                    }
                    button {
                        class: "modal-cancel",
                        onclick: move |_| attach_open.set(false),
                        "Cancel"
                    }
                }
            }
        }

        // Attachment gallery
        if gallery_open() {
            div { class: "modal-overlay",
                div { class: "modal-box gallery-box",
                    div { class: "gallery-header",
                        h2 { class: "modal-title", "Attachments" }
                        button {
                            class: "gallery-close",
                            onclick: move |_| gallery_open.set(false),
                            "\u{2715}"
                        }
                    }
                    if attachments.read().is_empty() {
                        div { class: "gallery-empty",
                            Icon::<LdCamera> { icon: LdCamera, width: 40, height: 40 }
                            p { "No attachments on this report yet." }
                        }
                    } else {
                        div { class: "gallery-grid",
                            for (id, name, kind, preview) in attachments
                                .read()
                                .iter()
                                .map(|a| {
                                    (
                                        a.id,
                                        a.name.clone(),
                                        a.kind,
                                        a.preview_url().map(str::to_string),
                                    )
                                })
                            {
                                div { class: "gallery-item",
                                    if kind == AttachmentKind::Image {
                                        if let Some(url) = preview {
                                            img { class: "gallery-image", src: "{url}", alt: "{name}" }
                                        }
                                    } else {
                                        div { class: "gallery-doc",
                                            Icon::<LdFileText> { icon: LdFileText, width: 32, height: 32 }
                                            span { class: "gallery-doc-name", "{name}" }
                                        }
                                    }
                                    button {
                                        class: "gallery-remove",
                                        onclick: move |_| remove_attachment(id),
                                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        // Delete confirmation
        AlertDialogRoot {
            open: show_delete(),
            on_open_change: move |open: bool| show_delete.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Delete this report?" }
                AlertDialogDescription {
                    "The report is removed from this device. This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Keep" }
                    AlertDialogAction { on_click: handle_delete, "Delete" }
                }
            }
        }
    }
}
