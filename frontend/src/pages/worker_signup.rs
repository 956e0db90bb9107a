use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::api;
use crate::components::field::{FileField, FormStyles, SelectField, TextAreaField, TextField};
use crate::components::notification::use_notifier;
use crate::config::RESET_DELAY_MS;
use crate::forms::submission::SubmitGate;
use crate::forms::worker::{
    DocumentKind, WorkerAction, WorkerField, WorkerForm, AVAILABILITY_OPTIONS, EXPERIENCE_LEVELS,
    WORKER_SERVICES,
};

type Form = WorkerForm<File>;

const BENEFITS: [(&str, &str, &str); 4] = [
    ("💼", "Steady Work", "Regular assignments from verified customers across the city."),
    ("💰", "Timely Payments", "Transparent rates and payouts on schedule, every time."),
    ("🛡", "Safe Environment", "Every customer is verified before you take a job."),
    ("🏆", "Grow Your Career", "Training and certification support to build your skills."),
];

#[function_component(WorkerSignup)]
pub fn worker_signup() -> Html {
    let form = use_reducer(Form::default);
    let notifier = use_notifier();
    let gate = use_mut_ref(SubmitGate::default);

    {
        let status = form.status;
        let form = form.clone();
        use_effect_with_deps(
            move |status| {
                let timeout = status
                    .is_confirmed()
                    .then(|| Timeout::new(RESET_DELAY_MS, move || form.dispatch(WorkerAction::Reset)));
                move || drop(timeout)
            },
            status,
        );
    }

    let edit = |field: WorkerField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(WorkerAction::Edit(field, value)))
    };

    let attach = |kind: DocumentKind| {
        let form = form.clone();
        let notifier = notifier.clone();
        Callback::from(move |file: File| match kind.check_mime(&file.type_()) {
            Ok(()) => form.dispatch(WorkerAction::Attach(kind, file)),
            Err(err) => {
                warn!("Rejected {} upload of type {:?}", kind.wire_name(), file.type_());
                notifier.error(err.to_string());
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.status.accepts_submit() {
                return;
            }
            let application = match form.validate() {
                Ok(application) => application,
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };
            if !gate.borrow_mut().try_begin() {
                return;
            }
            form.dispatch(WorkerAction::Begin);
            info!("Sending worker application");

            let form = form.clone();
            let notifier = notifier.clone();
            let gate = gate.clone();
            spawn_local(async move {
                let outcome = api::submit_worker_application(&application).await;
                gate.borrow_mut().finish();
                match outcome {
                    Ok(message) => {
                        notifier.success(message.unwrap_or_else(|| "Application submitted".to_string()));
                        form.dispatch(WorkerAction::Succeeded);
                    }
                    Err(err) => {
                        warn!("Worker application not accepted: {:?}", err);
                        notifier.error(err.to_string());
                        form.dispatch(WorkerAction::Failed);
                    }
                }
            });
        })
    };

    let text_field = |field: WorkerField, label: &'static str, input_type: &'static str| {
        html! {
            <TextField name={field.wire_name()} {label} {input_type}
                value={form.draft.get(field).to_string()} on_change={edit(field)} />
        }
    };

    let select_field = |field: WorkerField, label: &'static str, prompt: &'static str, options: &'static [&'static str]| {
        html! {
            <SelectField name={field.wire_name()} {label} {prompt} {options}
                value={form.draft.get(field).to_string()} on_change={edit(field)} />
        }
    };

    let pending = form.status.is_pending();

    html! {
        <div class="worker-page page-shell">
            <FormStyles />
            <style>
                {r#"
                    .worker-layout {
                        display: grid;
                        grid-template-columns: minmax(0, 1fr) minmax(0, 2fr);
                        gap: 48px;
                        align-items: start;
                    }
                    .worker-aside {
                        background: linear-gradient(135deg, #1d3557 0%, #457b9d 100%);
                        color: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        position: sticky;
                        top: 112px;
                    }
                    .worker-aside h3 { margin-bottom: 24px; }
                    .benefit { display: flex; gap: 16px; margin-bottom: 24px; }
                    .benefit-icon { font-size: 1.75rem; }
                    .benefit h4 { margin-bottom: 4px; }
                    .benefit p { color: rgba(255, 255, 255, 0.8); font-size: 0.9rem; }
                    .recruit-contact {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 24px;
                        font-size: 0.9rem;
                    }
                    .recruit-contact p { margin-top: 6px; color: #a8dadc; }
                    .form-section-title { color: #1d3557; margin: 8px 0 16px; }
                    .documents {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 16px;
                        margin-bottom: 24px;
                    }
                    @media (max-width: 1024px) {
                        .worker-layout { grid-template-columns: 1fr; }
                        .worker-aside { position: static; }
                        .documents { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="page-heading page-rise">
                <h1>{"Join Our Team"}</h1>
                <p>{"Become a verified professional and start earning with Quick Safety Service"}</p>
            </div>

            <div class="worker-layout">
                <aside class="worker-aside">
                    <h3>{"Why Join Us?"}</h3>
                    { for BENEFITS.iter().map(|(icon, title, text)| html! {
                        <div class="benefit">
                            <span class="benefit-icon">{*icon}</span>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        </div>
                    }) }
                    <div class="recruit-contact">
                        <strong>{"Questions about joining?"}</strong>
                        <p>{"+91 9555731070"}</p>
                        <p>{"niraj7379@gmail.com"}</p>
                    </div>
                </aside>

                if form.status.is_confirmed() {
                    <div class="confirmation">
                        <div class="confirmation-icon">{"✓"}</div>
                        <h2>{"Application Submitted!"}</h2>
                        <p>{"Our team will review your details and documents and contact you soon."}</p>
                    </div>
                } else {
                    <form class="form-card" {onsubmit}>
                        <h3 class="form-section-title">{"Personal Details"}</h3>
                        <div class="form-grid">
                            { text_field(WorkerField::FullName, "Full Name", "text") }
                            { text_field(WorkerField::Phone, "Phone Number", "tel") }
                            { text_field(WorkerField::Email, "Email Address", "email") }
                            { text_field(WorkerField::City, "City", "text") }
                        </div>
                        { text_field(WorkerField::Address, "Full Address", "text") }

                        <h3 class="form-section-title">{"Work Details"}</h3>
                        <div class="form-grid">
                            { select_field(WorkerField::ServiceType, "Service Type", "Select a service", WORKER_SERVICES) }
                            { select_field(WorkerField::Experience, "Experience", "Select experience", EXPERIENCE_LEVELS) }
                            { select_field(WorkerField::Availability, "Availability", "Select availability", AVAILABILITY_OPTIONS) }
                            <TextField name={WorkerField::Certifications.wire_name()} label="Certifications (Optional)"
                                required={false} value={form.draft.certifications.clone()}
                                on_change={edit(WorkerField::Certifications)} />
                        </div>

                        <h3 class="form-section-title">{"Documents"}</h3>
                        <div class="documents">
                            { for DocumentKind::ALL.iter().map(|kind| html! {
                                <FileField
                                    key={kind.wire_name()}
                                    name={kind.wire_name()}
                                    label={kind.label()}
                                    accept={kind.accept()}
                                    selected={form.documents.get(*kind).map(|file| AttrValue::from(file.name()))}
                                    on_select={attach(*kind)}
                                />
                            }) }
                        </div>

                        <TextAreaField name={WorkerField::AdditionalInfo.wire_name()}
                            label="Additional Information (Optional)"
                            value={form.draft.additional_info.clone()}
                            on_change={edit(WorkerField::AdditionalInfo)} />
                        <button type="submit" class="submit-button" disabled={pending}>
                            { if pending { "Submitting..." } else { "Submit Application" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
