use std::collections::BTreeMap;

use crate::relay::gateway::SubmissionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryType {
    Fundraising,
    Partnership,
    Press,
    Other,
    Pitch,
}

impl InquiryType {
    pub fn tag(self) -> &'static str {
        match self {
            InquiryType::Fundraising => "fundraising",
            InquiryType::Partnership => "partnership",
            InquiryType::Press => "press",
            InquiryType::Other => "other",
            InquiryType::Pitch => "pitch",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        [
            InquiryType::Fundraising,
            InquiryType::Partnership,
            InquiryType::Press,
            InquiryType::Other,
            InquiryType::Pitch,
        ]
        .into_iter()
        .find(|inquiry| inquiry.tag() == tag)
    }
}

const INQUIRY_OPTIONS: &[(&str, &str)] = &[
    ("fundraising", "Fundraising"),
    ("partnership", "Partnership"),
    ("press", "Press & Media"),
    ("other", "Other"),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "first_name", label: "First Name", placeholder: "John", kind: FieldKind::Text, required: true },
    FieldSpec { name: "last_name", label: "Last Name", placeholder: "Doe", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", label: "Email", placeholder: "john@company.com", kind: FieldKind::Email, required: true },
    FieldSpec { name: "company", label: "Company", placeholder: "Your company name", kind: FieldKind::Text, required: false },
    FieldSpec { name: "inquiry_type", label: "Inquiry Type", placeholder: "Select inquiry type", kind: FieldKind::Select(INQUIRY_OPTIONS), required: true },
    FieldSpec { name: "subject", label: "Subject", placeholder: "Brief subject line", kind: FieldKind::Text, required: true },
    FieldSpec {
        name: "message",
        label: "Message",
        placeholder: "Tell us about your startup, partnership opportunity, or inquiry...",
        kind: FieldKind::TextArea,
        required: true,
    },
];

const PITCH_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "user_name", label: "Your Name", placeholder: "Your Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "user_email", label: "Your Email", placeholder: "Your Email", kind: FieldKind::Email, required: true },
    FieldSpec { name: "startup_name", label: "Startup Name", placeholder: "Startup Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "message", label: "Your Idea", placeholder: "Describe your idea...", kind: FieldKind::TextArea, required: true },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Pitch,
}

impl FormKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::Pitch => PITCH_FIELDS,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::Pitch => "Submit Pitch",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent! We'll get back to you within 2 business days.",
            FormKind::Pitch => "Pitch submitted successfully! We'll review it soon.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Failed to send message. Try again later.",
            FormKind::Pitch => "Failed to submit pitch. Try again later.",
        }
    }
}

/// Field values of one form instance, kept while the user types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    kind: FormKind,
    values: BTreeMap<&'static str, String>,
}

impl FormDraft {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Names outside the form's field list are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        if let Some(spec) = self.kind.fields().iter().find(|f| f.name == name) {
            self.values.insert(spec.name, value);
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn submission(&self) -> FormSubmission {
        let fields = self
            .values
            .iter()
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        FormSubmission {
            kind: self.kind,
            fields,
        }
    }
}

/// One-shot request handed to the gateway on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub kind: FormKind,
    pub fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn inquiry(&self) -> Option<InquiryType> {
        match self.kind {
            FormKind::Pitch => Some(InquiryType::Pitch),
            FormKind::Contact => self
                .fields
                .get("inquiry_type")
                .and_then(|tag| InquiryType::from_tag(tag))
                .filter(|inquiry| *inquiry != InquiryType::Pitch),
        }
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        for spec in self.kind.fields() {
            let value = self.fields.get(spec.name).map(|v| v.trim()).unwrap_or_default();
            if value.is_empty() {
                if spec.required {
                    return Err(SubmissionError::MissingField(spec.label));
                }
                continue;
            }
            if spec.kind == FieldKind::Email && !looks_like_email(value) {
                return Err(SubmissionError::InvalidEmail(value.to_string()));
            }
        }
        if self.inquiry().is_none() {
            return Err(SubmissionError::MissingField("Inquiry Type"));
        }
        Ok(())
    }

    /// Template parameters as the relay expects them: form fields plus the
    /// inquiry tag.
    pub fn template_params(&self) -> BTreeMap<String, String> {
        let mut params = self.fields.clone();
        if let Some(inquiry) = self.inquiry() {
            params.insert("inquiry_type".to_string(), inquiry.tag().to_string());
        }
        params
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !value.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn filled_contact() -> FormDraft {
        let mut draft = FormDraft::new(FormKind::Contact);
        draft.set("first_name", "Asha".into());
        draft.set("last_name", "Rao".into());
        draft.set("email", "asha@example.com".into());
        draft.set("inquiry_type", "fundraising".into());
        draft.set("subject", "Seed round".into());
        draft.set("message", "We are raising a seed round.".into());
        draft
    }

    pub(crate) fn filled_pitch() -> FormDraft {
        let mut draft = FormDraft::new(FormKind::Pitch);
        draft.set("user_name", "Ravi".into());
        draft.set("user_email", "ravi@startup.in".into());
        draft.set("startup_name", "Tradomate".into());
        draft.set("message", "AI-powered trading.".into());
        draft
    }

    #[test]
    fn complete_forms_validate() {
        assert_eq!(filled_contact().submission().validate(), Ok(()));
        assert_eq!(filled_pitch().submission().validate(), Ok(()));
    }

    #[test]
    fn blank_required_field_is_reported_by_label() {
        let mut draft = filled_contact();
        draft.set("subject", "   ".into());
        assert_eq!(
            draft.submission().validate(),
            Err(SubmissionError::MissingField("Subject"))
        );
    }

    #[test]
    fn optional_company_may_be_left_empty() {
        let mut draft = filled_contact();
        draft.set("company", String::new());
        assert!(draft.submission().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["asha", "asha@", "@example.com", "asha@example", "asha @example.com", "asha@example..com"] {
            let mut draft = filled_contact();
            draft.set("email", email.into());
            assert_eq!(
                draft.submission().validate(),
                Err(SubmissionError::InvalidEmail(email.trim().to_string())),
                "{email:?}"
            );
        }
    }

    #[test]
    fn contact_inquiry_must_be_a_known_tag() {
        let mut draft = filled_contact();
        draft.set("inquiry_type", "pitch".into());
        assert_eq!(
            draft.submission().validate(),
            Err(SubmissionError::MissingField("Inquiry Type"))
        );
    }

    #[test]
    fn pitch_params_carry_the_pitch_tag() {
        let params = filled_pitch().submission().template_params();
        assert_eq!(params.get("inquiry_type").map(String::as_str), Some("pitch"));
        assert_eq!(params.get("startup_name").map(String::as_str), Some("Tradomate"));
    }

    #[test]
    fn unknown_fields_are_not_stored() {
        let mut draft = FormDraft::new(FormKind::Pitch);
        draft.set("subject", "not a pitch field".into());
        assert_eq!(draft.value("subject"), "");
        assert!(draft.submission().fields.is_empty());
    }

    #[test]
    fn clear_empties_the_draft() {
        let mut draft = filled_contact();
        draft.clear();
        assert_eq!(draft, FormDraft::new(FormKind::Contact));
    }
}
