use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::field::{FormStyles, SelectField, TextAreaField, TextField};
use crate::components::notification::use_notifier;
use crate::config::RESET_DELAY_MS;
use crate::forms::booking::{BookingAction, BookingField, BookingForm, BOOKING_SERVICES, DURATIONS};
use crate::forms::submission::SubmitGate;

#[function_component(Booking)]
pub fn booking() -> Html {
    let form = use_reducer(BookingForm::default);
    let notifier = use_notifier();
    let gate = use_mut_ref(SubmitGate::default);
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    // Confirmation view stays up for a while, then the empty form returns.
    // The timer dies with the page if the user navigates away first.
    {
        let status = form.status;
        let form = form.clone();
        use_effect_with_deps(
            move |status| {
                let timeout = status
                    .is_confirmed()
                    .then(|| Timeout::new(RESET_DELAY_MS, move || form.dispatch(BookingAction::Reset)));
                move || drop(timeout)
            },
            status,
        );
    }

    let edit = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(BookingAction::Edit(field, value)))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(payload) = form.prepare() else {
                return;
            };
            if !gate.borrow_mut().try_begin() {
                return;
            }
            form.dispatch(BookingAction::Begin);

            let form = form.clone();
            let notifier = notifier.clone();
            let gate = gate.clone();
            spawn_local(async move {
                let outcome = api::submit_booking(&payload).await;
                gate.borrow_mut().finish();
                match outcome {
                    Ok(message) => {
                        if let Some(message) = message {
                            notifier.success(message);
                        }
                        form.dispatch(BookingAction::Succeeded);
                    }
                    Err(err) => {
                        warn!("Booking not accepted: {:?}", err);
                        notifier.error(err.to_string());
                        form.dispatch(BookingAction::Failed);
                    }
                }
            });
        })
    };

    let draft = &form.draft;
    let pending = form.status.is_pending();

    html! {
        <div class="booking-page page-shell narrow">
            <FormStyles />
            <div class="page-heading page-rise">
                <h1>{"Book Your Service"}</h1>
                <p>{"Fill out the form below and we'll get back to you shortly"}</p>
            </div>

            if form.status.is_confirmed() {
                <div class="confirmation">
                    <div class="confirmation-icon">{"✨"}</div>
                    <h2>{"Booking Submitted Successfully!"}</h2>
                    <p>{"We'll contact you shortly to confirm your booking."}</p>
                </div>
            } else {
                <form class="form-card" {onsubmit}>
                    <div class="form-grid">
                        <TextField name="name" label="Full Name" value={draft.name.clone()}
                            on_change={edit(BookingField::Name)} />
                        <TextField name="phone" label="Phone Number" input_type="tel" value={draft.phone.clone()}
                            on_change={edit(BookingField::Phone)} />
                        <TextField name="email" label="Email Address" input_type="email" value={draft.email.clone()}
                            on_change={edit(BookingField::Email)} />
                        <SelectField name="serviceType" label="Service Type" prompt="Select a service"
                            options={BOOKING_SERVICES} value={draft.service_type.clone()}
                            on_change={edit(BookingField::ServiceType)} />
                        <TextField name="date" label="Preferred Date" input_type="date" min={today}
                            value={draft.date.clone()} on_change={edit(BookingField::Date)} />
                        <TextField name="time" label="Preferred Time" input_type="time"
                            value={draft.time.clone()} on_change={edit(BookingField::Time)} />
                        <SelectField name="duration" label="Duration" prompt="Select duration"
                            options={DURATIONS} value={draft.duration.clone()}
                            on_change={edit(BookingField::Duration)} class={classes!("span-2")} />
                    </div>
                    <TextField name="address" label="Service Address" value={draft.address.clone()}
                        on_change={edit(BookingField::Address)} />
                    <TextAreaField name="notes" label="Additional Notes (Optional)" value={draft.notes.clone()}
                        on_change={edit(BookingField::Notes)} />
                    <button type="submit" class="submit-button" disabled={pending}>
                        { if pending { "Submitting..." } else { "Submit Booking" } }
                    </button>
                </form>
            }
        </div>
    }
}
