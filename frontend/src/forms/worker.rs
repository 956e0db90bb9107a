use std::rc::Rc;

use yew::prelude::*;

use crate::forms::submission::{SubmissionState, SubmitError};

pub const WORKER_SERVICES: &[&str] = &[
    "Security Guard",
    "Bouncer",
    "Servant / Aaya",
    "AC Technician",
    "Electrician",
    "PSO (Personal Security Officer)",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Less than 1 year",
    "1-3 years",
    "3-5 years",
    "5-10 years",
    "10+ years",
];

pub const AVAILABILITY_OPTIONS: &[&str] = &[
    "Full-time",
    "Part-time",
    "Weekends only",
    "Flexible",
    "On-call",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerField {
    FullName,
    Phone,
    Email,
    Address,
    City,
    ServiceType,
    Experience,
    Certifications,
    Availability,
    AdditionalInfo,
}

impl WorkerField {
    /// Wire order of the multipart text parts.
    pub const ALL: [WorkerField; 10] = [
        WorkerField::FullName,
        WorkerField::Phone,
        WorkerField::Email,
        WorkerField::Address,
        WorkerField::City,
        WorkerField::ServiceType,
        WorkerField::Experience,
        WorkerField::Certifications,
        WorkerField::Availability,
        WorkerField::AdditionalInfo,
    ];

    /// Checked in this order; the first empty one is reported.
    pub const REQUIRED: [WorkerField; 8] = [
        WorkerField::FullName,
        WorkerField::Phone,
        WorkerField::Email,
        WorkerField::City,
        WorkerField::ServiceType,
        WorkerField::Experience,
        WorkerField::Availability,
        WorkerField::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkerField::FullName => "Full name",
            WorkerField::Phone => "Phone number",
            WorkerField::Email => "Email address",
            WorkerField::Address => "Address",
            WorkerField::City => "City",
            WorkerField::ServiceType => "Service type",
            WorkerField::Experience => "Experience level",
            WorkerField::Certifications => "Certifications",
            WorkerField::Availability => "Availability",
            WorkerField::AdditionalInfo => "Additional information",
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            WorkerField::FullName => "full_name",
            WorkerField::Phone => "phone",
            WorkerField::Email => "email",
            WorkerField::Address => "address",
            WorkerField::City => "city",
            WorkerField::ServiceType => "service_type",
            WorkerField::Experience => "experience",
            WorkerField::Certifications => "certifications",
            WorkerField::Availability => "availability",
            WorkerField::AdditionalInfo => "additional_info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    AadharCard,
    PanCard,
    Photo,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::AadharCard, DocumentKind::PanCard, DocumentKind::Photo];

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::AadharCard => "Aadhar card",
            DocumentKind::PanCard => "PAN card",
            DocumentKind::Photo => "Photo",
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            DocumentKind::AadharCard => "aadhar_card",
            DocumentKind::PanCard => "pan_card",
            DocumentKind::Photo => "photo",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(self) -> &'static str {
        match self {
            DocumentKind::Photo => "image/*",
            _ => "image/*,application/pdf",
        }
    }

    pub fn check_mime(self, mime: &str) -> Result<(), SubmitError> {
        let mime = mime.trim().to_ascii_lowercase();
        let is_image = mime.starts_with("image/");
        match self {
            DocumentKind::Photo if is_image => Ok(()),
            DocumentKind::Photo => Err(SubmitError::RejectedPhoto(self.label())),
            _ if is_image || mime == "application/pdf" => Ok(()),
            _ => Err(SubmitError::RejectedDocument(self.label())),
        }
    }
}

/// One slot per document type; a new selection replaces the old one.
#[derive(Clone, Debug, PartialEq)]
pub struct Documents<F> {
    aadhar_card: Option<F>,
    pan_card: Option<F>,
    photo: Option<F>,
}

impl<F> Default for Documents<F> {
    fn default() -> Self {
        Self { aadhar_card: None, pan_card: None, photo: None }
    }
}

impl<F> Documents<F> {
    fn slot(&mut self, kind: DocumentKind) -> &mut Option<F> {
        match kind {
            DocumentKind::AadharCard => &mut self.aadhar_card,
            DocumentKind::PanCard => &mut self.pan_card,
            DocumentKind::Photo => &mut self.photo,
        }
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&F> {
        match kind {
            DocumentKind::AadharCard => self.aadhar_card.as_ref(),
            DocumentKind::PanCard => self.pan_card.as_ref(),
            DocumentKind::Photo => self.photo.as_ref(),
        }
    }

    pub fn set(&mut self, kind: DocumentKind, file: F) {
        *self.slot(kind) = Some(file);
    }

    pub fn is_complete(&self) -> bool {
        DocumentKind::ALL.iter().all(|kind| self.get(*kind).is_some())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub service_type: String,
    pub experience: String,
    pub certifications: String,
    pub availability: String,
    pub additional_info: String,
}

impl WorkerDraft {
    fn slot(&mut self, field: WorkerField) -> &mut String {
        match field {
            WorkerField::FullName => &mut self.full_name,
            WorkerField::Phone => &mut self.phone,
            WorkerField::Email => &mut self.email,
            WorkerField::Address => &mut self.address,
            WorkerField::City => &mut self.city,
            WorkerField::ServiceType => &mut self.service_type,
            WorkerField::Experience => &mut self.experience,
            WorkerField::Certifications => &mut self.certifications,
            WorkerField::Availability => &mut self.availability,
            WorkerField::AdditionalInfo => &mut self.additional_info,
        }
    }

    pub fn get(&self, field: WorkerField) -> &str {
        match field {
            WorkerField::FullName => &self.full_name,
            WorkerField::Phone => &self.phone,
            WorkerField::Email => &self.email,
            WorkerField::Address => &self.address,
            WorkerField::City => &self.city,
            WorkerField::ServiceType => &self.service_type,
            WorkerField::Experience => &self.experience,
            WorkerField::Certifications => &self.certifications,
            WorkerField::Availability => &self.availability,
            WorkerField::AdditionalInfo => &self.additional_info,
        }
    }

    pub fn set(&mut self, field: WorkerField, value: String) {
        *self.slot(field) = value;
    }
}

/// Everything that goes into the multipart body of `POST /api/workers`.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerApplication<F> {
    pub fields: Vec<(&'static str, String)>,
    pub documents: Vec<(&'static str, F)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkerForm<F> {
    pub draft: WorkerDraft,
    pub documents: Documents<F>,
    pub status: SubmissionState,
}

impl<F> Default for WorkerForm<F> {
    fn default() -> Self {
        Self {
            draft: WorkerDraft::default(),
            documents: Documents::default(),
            status: SubmissionState::default(),
        }
    }
}

impl<F: Clone> WorkerForm<F> {
    /// Client-side checks that run before any request is made.
    pub fn validate(&self) -> Result<WorkerApplication<F>, SubmitError> {
        if let Some(missing) = WorkerField::REQUIRED
            .iter()
            .find(|field| self.draft.get(**field).trim().is_empty())
        {
            return Err(SubmitError::MissingField(missing.label()));
        }

        if !self.documents.is_complete() {
            return Err(SubmitError::MissingDocuments);
        }
        let documents = DocumentKind::ALL
            .iter()
            .filter_map(|kind| self.documents.get(*kind).map(|file| (kind.wire_name(), file.clone())))
            .collect();

        let fields = WorkerField::ALL
            .iter()
            .map(|field| (field.wire_name(), self.draft.get(*field).to_string()))
            .collect();

        Ok(WorkerApplication { fields, documents })
    }
}

pub enum WorkerAction<F> {
    Edit(WorkerField, String),
    Attach(DocumentKind, F),
    Begin,
    Succeeded,
    Failed,
    Reset,
}

impl<F: Clone + 'static> Reducible for WorkerForm<F> {
    type Action = WorkerAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WorkerAction::Edit(field, value) => next.draft.set(field, value),
            WorkerAction::Attach(kind, file) => next.documents.set(kind, file),
            WorkerAction::Begin => {
                if !self.status.accepts_submit() {
                    return self;
                }
                next.status = SubmissionState::Pending;
            }
            WorkerAction::Succeeded => next.status = SubmissionState::Succeeded,
            WorkerAction::Failed => next.status = SubmissionState::Failed,
            WorkerAction::Reset => {
                if self.status != SubmissionState::Succeeded {
                    return self;
                }
                next = WorkerForm::default();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Form = WorkerForm<&'static str>;

    fn complete() -> Form {
        let mut form = Form::default();
        for (field, value) in [
            (WorkerField::FullName, "Ravi Kumar"),
            (WorkerField::Phone, "9555731070"),
            (WorkerField::Email, "ravi@example.com"),
            (WorkerField::Address, "F-137 Deepawali Enclave"),
            (WorkerField::City, "Faridabad"),
            (WorkerField::ServiceType, "Electrician"),
            (WorkerField::Experience, "3-5 years"),
            (WorkerField::Availability, "Full-time"),
        ] {
            form.draft.set(field, value.to_string());
        }
        form.documents.set(DocumentKind::AadharCard, "aadhar.pdf");
        form.documents.set(DocumentKind::PanCard, "pan.jpg");
        form.documents.set(DocumentKind::Photo, "me.png");
        form
    }

    #[test]
    fn complete_application_builds_every_part() {
        let application = complete().validate().unwrap();
        let names: Vec<_> = application.fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "full_name", "phone", "email", "address", "city", "service_type",
                "experience", "certifications", "availability", "additional_info",
            ]
        );
        assert_eq!(
            application.documents,
            vec![("aadhar_card", "aadhar.pdf"), ("pan_card", "pan.jpg"), ("photo", "me.png")]
        );
    }

    #[test]
    fn empty_city_is_named() {
        let mut form = complete();
        form.draft.set(WorkerField::City, String::new());
        assert_eq!(form.validate(), Err(SubmitError::MissingField("City")));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = complete();
        form.draft.set(WorkerField::Phone, "   ".to_string());
        assert_eq!(form.validate(), Err(SubmitError::MissingField("Phone number")));
    }

    #[test]
    fn first_missing_field_wins() {
        let mut form = complete();
        form.draft.set(WorkerField::Address, String::new());
        form.draft.set(WorkerField::Experience, String::new());
        assert_eq!(form.validate(), Err(SubmitError::MissingField("Experience level")));
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let form = complete();
        assert!(form.draft.certifications.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn any_missing_document_gives_one_combined_error() {
        for kind in DocumentKind::ALL {
            let mut form = complete();
            *form.documents.slot(kind) = None;
            assert_eq!(form.validate(), Err(SubmitError::MissingDocuments));
        }
    }

    #[test]
    fn field_errors_are_reported_before_documents() {
        let mut form = Form::default();
        form.draft.set(WorkerField::FullName, "Ravi".to_string());
        assert_eq!(form.validate(), Err(SubmitError::MissingField("Phone number")));
    }

    #[test]
    fn new_selection_replaces_the_slot() {
        let form = Rc::new(complete()).reduce(WorkerAction::Attach(DocumentKind::Photo, "new.png"));
        assert_eq!(form.documents.get(DocumentKind::Photo), Some(&"new.png"));
        assert_eq!(form.documents.get(DocumentKind::PanCard), Some(&"pan.jpg"));
    }

    #[test]
    fn reset_after_success_clears_text_and_documents() {
        let form = Rc::new(complete())
            .reduce(WorkerAction::Begin)
            .reduce(WorkerAction::Succeeded)
            .reduce(WorkerAction::Reset);
        assert_eq!(*form, Form::default());
        assert!(!form.documents.is_complete());
    }

    #[test]
    fn failure_retains_everything() {
        let form = Rc::new(complete())
            .reduce(WorkerAction::Begin)
            .reduce(WorkerAction::Failed);
        assert_eq!(form.status, SubmissionState::Failed);
        assert!(form.documents.is_complete());
        assert_eq!(form.draft.city, "Faridabad");
    }

    #[test]
    fn mime_rules_follow_the_document_type() {
        assert!(DocumentKind::AadharCard.check_mime("application/pdf").is_ok());
        assert!(DocumentKind::PanCard.check_mime("image/jpeg").is_ok());
        assert!(DocumentKind::Photo.check_mime("image/png").is_ok());
        assert_eq!(
            DocumentKind::Photo.check_mime("application/pdf"),
            Err(SubmitError::RejectedPhoto("Photo"))
        );
        assert_eq!(
            DocumentKind::PanCard.check_mime("text/plain"),
            Err(SubmitError::RejectedDocument("PAN card"))
        );
    }
}
