use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::forms::submission::SubmissionState;

pub const BOOKING_SERVICES: &[&str] = &[
    "Security Guard",
    "Bouncer",
    "PSO (Personal Security Officer)",
    "Servant / Aaya",
    "Driver",
    "Electrician",
];

pub const DURATIONS: &[&str] = &[
    "1 Hour",
    "2 Hours",
    "4 Hours",
    "Half Day (12 hours)",
    "Full Day (24 hours)",
    "Weekly",
    "Monthly",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Phone,
    Email,
    Address,
    ServiceType,
    Date,
    Time,
    Duration,
    Notes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub notes: String,
}

impl BookingDraft {
    fn slot(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Phone => &mut self.phone,
            BookingField::Email => &mut self.email,
            BookingField::Address => &mut self.address,
            BookingField::ServiceType => &mut self.service_type,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Duration => &mut self.duration,
            BookingField::Notes => &mut self.notes,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        *self.slot(field) = value;
    }

    pub fn to_payload(&self) -> BookingPayload {
        BookingPayload {
            full_name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            service_type: self.service_type.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            duration: self.duration.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// JSON body for `POST /api/bookings`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BookingPayload {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub address: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub draft: BookingDraft,
    pub status: SubmissionState,
}

pub enum BookingAction {
    Edit(BookingField, String),
    Begin,
    Succeeded,
    Failed,
    Reset,
}

impl BookingForm {
    /// Snapshot to send, or `None` while a request is in flight or the
    /// confirmation is showing.
    pub fn prepare(&self) -> Option<BookingPayload> {
        self.status
            .accepts_submit()
            .then(|| self.draft.to_payload())
    }
}

impl Reducible for BookingForm {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingAction::Edit(field, value) => next.draft.set(field, value),
            BookingAction::Begin => {
                if !self.status.accepts_submit() {
                    return self;
                }
                next.status = SubmissionState::Pending;
            }
            BookingAction::Succeeded => next.status = SubmissionState::Succeeded,
            // The draft stays as typed so the user can retry.
            BookingAction::Failed => next.status = SubmissionState::Failed,
            BookingAction::Reset => {
                if self.status != SubmissionState::Succeeded {
                    return self;
                }
                next = BookingForm::default();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingForm {
        let mut form = BookingForm::default();
        for (field, value) in [
            (BookingField::Name, "Asha Verma"),
            (BookingField::Phone, "+91 98765 43210"),
            (BookingField::Email, "asha@example.com"),
            (BookingField::Address, "12 MG Road"),
            (BookingField::ServiceType, "Driver"),
            (BookingField::Date, "2026-11-02"),
            (BookingField::Time, "09:30"),
            (BookingField::Duration, "Weekly"),
        ] {
            form.draft.set(field, value.to_string());
        }
        form
    }

    #[test]
    fn payload_uses_wire_names() {
        let payload = filled().draft.to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["full_name"], "Asha Verma");
        assert_eq!(json["service_type"], "Driver");
        assert_eq!(json["notes"], "");
        assert!(json.get("name").is_none());
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn success_confirms_then_resets_to_empty_draft() {
        let form = Rc::new(filled());
        assert!(form.prepare().is_some());

        let form = form.reduce(BookingAction::Begin);
        assert!(form.status.is_pending());
        assert!(form.prepare().is_none());

        let form = form.reduce(BookingAction::Succeeded);
        assert!(form.status.is_confirmed());
        assert_eq!(form.draft.name, "Asha Verma");

        let form = form.reduce(BookingAction::Reset);
        assert_eq!(*form, BookingForm::default());
    }

    #[test]
    fn failure_keeps_the_draft_for_retry() {
        let original = filled();
        let form = Rc::new(original.clone())
            .reduce(BookingAction::Begin)
            .reduce(BookingAction::Failed);
        assert_eq!(form.status, SubmissionState::Failed);
        assert_eq!(form.draft, original.draft);
        assert!(form.prepare().is_some());
    }

    #[test]
    fn second_begin_while_pending_is_ignored() {
        let pending = Rc::new(filled()).reduce(BookingAction::Begin);
        let again = pending.clone().reduce(BookingAction::Begin);
        assert!(Rc::ptr_eq(&pending, &again));
    }

    #[test]
    fn stale_reset_does_not_clear_a_new_draft() {
        let form = Rc::new(filled()).reduce(BookingAction::Reset);
        assert_eq!(form.draft.name, "Asha Verma");
    }
}
