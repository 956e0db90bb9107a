use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::field::{FormStyles, TextAreaField, TextField};
use crate::config::RESET_DELAY_MS;

const CONTACT_INFO: [(&str, &str, [&str; 2]); 4] = [
    ("☎", "Phone", ["+91 9555731070", "+91 7701828545"]),
    ("✉", "Email", ["niraj7379@gmail.com", "nirajkumar65542@gmail.com"]),
    ("📍", "Address", ["F-137, Deepawali enclave", "Ismailpur, Faridabad, Haryana"]),
    ("⏱", "Business Hours", ["24/7 Service Available", "Office: Mon-Fri 9AM-6PM"]),
];

#[derive(Clone, Default, PartialEq)]
struct ContactDraft {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

/// The message form is not sent anywhere; it only confirms and clears.
#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactDraft::default);
    let submitted = use_state(|| false);

    {
        let is_submitted = *submitted;
        let draft = draft.clone();
        let submitted = submitted.clone();
        use_effect_with_deps(
            move |is_submitted| {
                let timeout = is_submitted.then(|| {
                    Timeout::new(RESET_DELAY_MS, move || {
                        draft.set(ContactDraft::default());
                        submitted.set(false);
                    })
                });
                move || drop(timeout)
            },
            is_submitted,
        );
    }

    let edit = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
        })
    };

    html! {
        <div class="contact-page page-shell">
            <FormStyles />
            <style>
                {r#"
                    .contact-info {
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 24px;
                        margin-bottom: 64px;
                    }
                    .contact-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        text-align: center;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .contact-icon { font-size: 2rem; margin-bottom: 16px; }
                    .contact-card h3 { color: #1d3557; margin-bottom: 12px; }
                    .contact-card p { color: #457b9d; }
                    .contact-body { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 48px; }
                    .contact-map {
                        border-radius: 16px;
                        min-height: 400px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(135deg, #a8dadc 0%, #457b9d 100%);
                        color: #1d3557;
                        padding: 32px;
                    }
                    @media (max-width: 1024px) {
                        .contact-info { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                        .contact-body { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="page-heading page-rise">
                <h1>{"Get In Touch"}</h1>
                <p>{"Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."}</p>
            </div>

            <div class="contact-info">
                { for CONTACT_INFO.iter().map(|(icon, title, details)| html! {
                    <div class="contact-card">
                        <div class="contact-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        { for details.iter().map(|line| html! { <p>{*line}</p> }) }
                    </div>
                }) }
            </div>

            <div class="contact-body">
                if *submitted {
                    <div class="confirmation">
                        <div class="confirmation-icon">{"✉"}</div>
                        <h3>{"Message Sent Successfully!"}</h3>
                        <p>{"We'll get back to you as soon as possible."}</p>
                    </div>
                } else {
                    <form class="form-card" {onsubmit}>
                        <h3>{"Send Us a Message"}</h3>
                        <TextField name="name" label="Your Name" value={draft.name.clone()}
                            on_change={edit(|d, v| d.name = v)} />
                        <TextField name="email" label="Email Address" input_type="email" value={draft.email.clone()}
                            on_change={edit(|d, v| d.email = v)} />
                        <TextField name="phone" label="Phone Number" input_type="tel" value={draft.phone.clone()}
                            on_change={edit(|d, v| d.phone = v)} />
                        <TextField name="subject" label="Subject" value={draft.subject.clone()}
                            on_change={edit(|d, v| d.subject = v)} />
                        <TextAreaField name="message" label="Your Message" rows={5} required=true
                            value={draft.message.clone()} on_change={edit(|d, v| d.message = v)} />
                        <button type="submit" class="submit-button">{"Send Message"}</button>
                    </form>
                }
                <div class="contact-map">
                    <div>
                        <h3>{"Visit Our Office"}</h3>
                        <p>{"F-137, Deepawali enclave"}<br/>{"Ismailpur, Faridabad, Haryana"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
