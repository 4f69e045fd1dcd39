use log::Level;

/// EmailJS credentials baked in at build time, e.g.
/// `EMAILJS_SERVICE_ID=... trunk build --release`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub contact_template_id: Option<String>,
    pub pitch_template_id: Option<String>,
    pub public_key: String,
}

impl RelayCredentials {
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PITCH_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// Service id and public key are shared by every form; a template id is
    /// only needed by the form that sends with it.
    pub fn from_values(
        service_id: Option<&str>,
        contact_template_id: Option<&str>,
        pitch_template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            service_id: non_blank(service_id)?,
            contact_template_id: non_blank(contact_template_id),
            pitch_template_id: non_blank(pitch_template_id),
            public_key: non_blank(public_key)?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn relay_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        assert!(RelayCredentials::from_values(Some(" "), Some("t"), None, Some("key")).is_none());
        assert!(RelayCredentials::from_values(Some("svc"), Some("t"), None, None).is_none());
    }

    #[test]
    fn template_ids_are_optional_per_form() {
        let creds = RelayCredentials::from_values(Some("svc"), Some("contact"), Some(""), Some("key"))
            .expect("service id and key are present");
        assert_eq!(creds.contact_template_id.as_deref(), Some("contact"));
        assert_eq!(creds.pitch_template_id, None);
    }
}
