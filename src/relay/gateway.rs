use std::cell::Cell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config::{self, RelayCredentials};
use crate::relay::submission::{FormKind, FormSubmission};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("email service is not configured")]
    NotConfigured,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("a submission is already in progress")]
    InFlight,
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

/// Body of the EmailJS `email/send` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, payload: &RelayPayload) -> Result<(), SubmissionError>;
}

pub struct EmailJsTransport;

#[async_trait(?Send)]
impl Transport for EmailJsTransport {
    async fn send(&self, payload: &RelayPayload) -> Result<(), SubmissionError> {
        let response = Request::post(config::relay_endpoint())
            .json(payload)
            .map_err(|e| SubmissionError::SubmissionFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::SubmissionFailed(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::SubmissionFailed(format!("{}: {}", status, body)))
    }
}

/// At-most-one in-flight submission per form instance.
#[derive(Clone, Default)]
pub struct SendLatch(Rc<Cell<bool>>);

pub struct SendGuard(Rc<Cell<bool>>);

impl SendLatch {
    pub fn try_acquire(&self) -> Option<SendGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(SendGuard(self.0.clone()))
    }

    #[cfg(test)]
    pub fn is_sending(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for SendLatch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for SendGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Clone)]
pub struct Gateway {
    credentials: Option<RelayCredentials>,
    transport: Rc<dyn Transport>,
}

impl Gateway {
    pub fn new(credentials: Option<RelayCredentials>, transport: Rc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn from_env() -> Self {
        let credentials = RelayCredentials::from_env();
        if credentials.is_none() {
            warn!("EMAILJS_SERVICE_ID / EMAILJS_PUBLIC_KEY not set, form submission disabled");
        }
        Self::new(credentials, Rc::new(EmailJsTransport))
    }

    /// Checks configuration and field values, producing the request body
    /// without sending anything.
    pub fn prepare(&self, submission: &FormSubmission) -> Result<RelayPayload, SubmissionError> {
        let credentials = self.credentials.as_ref().ok_or(SubmissionError::NotConfigured)?;
        let template_id = match submission.kind {
            FormKind::Contact => credentials.contact_template_id.as_ref(),
            FormKind::Pitch => credentials.pitch_template_id.as_ref(),
        }
        .ok_or(SubmissionError::NotConfigured)?;

        submission.validate()?;

        Ok(RelayPayload {
            service_id: credentials.service_id.clone(),
            template_id: template_id.clone(),
            user_id: credentials.public_key.clone(),
            template_params: submission.template_params(),
        })
    }

    #[cfg(test)]
    pub async fn submit(&self, submission: FormSubmission) -> Result<(), SubmissionError> {
        let payload = self.prepare(&submission)?;
        deliver(self.transport.as_ref(), payload).await
    }

    /// Validates and sends `submission` while holding `latch` until the returned future
    /// completes or is dropped. Rejections happen before the future exists.
    pub fn submit_latched(
        &self,
        latch: &SendLatch,
        submission: FormSubmission,
    ) -> Result<impl Future<Output = Result<(), SubmissionError>> + 'static, SubmissionError> {
        let guard = latch.try_acquire().ok_or(SubmissionError::InFlight)?;
        let payload = self.prepare(&submission)?;
        let transport = self.transport.clone();
        Ok(async move {
            let _guard = guard;
            deliver(transport.as_ref(), payload).await
        })
    }
}

async fn deliver(transport: &dyn Transport, payload: RelayPayload) -> Result<(), SubmissionError> {
    info!("Sending form with template {}", payload.template_id);
    let result = transport.send(&payload).await;
    if let Err(e) = &result {
        error!("Failed to send email: {}", e);
    }
    result
}

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        self.credentials == other.credentials && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

#[hook]
pub fn use_gateway() -> Gateway {
    let fallback = use_memo(|_| Gateway::from_env(), ());
    use_context::<Gateway>().unwrap_or_else(|| (*fallback).clone())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::relay::submission::tests::{filled_contact, filled_pitch};

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<RelayPayload>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn send(&self, payload: &RelayPayload) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(payload.clone());
            if self.fail {
                Err(SubmissionError::SubmissionFailed("503: unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn credentials() -> RelayCredentials {
        RelayCredentials::from_values(Some("service_x"), Some("template_contact"), Some("template_pitch"), Some("pk_123"))
            .expect("complete credentials")
    }

    fn gateway(credentials: Option<RelayCredentials>) -> (Gateway, Rc<RecordingTransport>) {
        let transport = Rc::new(RecordingTransport::default());
        (Gateway::new(credentials, transport.clone()), transport)
    }

    #[test]
    fn missing_configuration_never_calls_out() {
        let (gateway, transport) = gateway(None);
        assert_eq!(
            block_on(gateway.submit(filled_contact().submission())),
            Err(SubmissionError::NotConfigured)
        );
        // even an incomplete form reports configuration first
        let empty = crate::relay::submission::FormDraft::new(FormKind::Pitch).submission();
        assert_eq!(block_on(gateway.submit(empty)), Err(SubmissionError::NotConfigured));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn missing_template_for_the_form_is_not_configured() {
        let partial = RelayCredentials::from_values(Some("service_x"), Some("template_contact"), None, Some("pk_123"));
        let (gateway, transport) = gateway(partial);
        assert_eq!(
            block_on(gateway.submit(filled_pitch().submission())),
            Err(SubmissionError::NotConfigured)
        );
        assert_eq!(block_on(gateway.submit(filled_contact().submission())), Ok(()));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn complete_contact_form_is_sent_once() {
        let (gateway, transport) = gateway(Some(credentials()));
        assert_eq!(block_on(gateway.submit(filled_contact().submission())), Ok(()));

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].template_id, "template_contact");
        assert_eq!(sent[0].template_params.get("subject").map(String::as_str), Some("Seed round"));
        assert_eq!(sent[0].template_params.get("inquiry_type").map(String::as_str), Some("fundraising"));
    }

    #[test]
    fn payload_matches_the_relay_wire_shape() {
        let (gateway, _) = gateway(Some(credentials()));
        let payload = gateway.prepare(&filled_pitch().submission()).expect("valid pitch");
        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_pitch");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["user_email"], "ravi@startup.in");
        assert_eq!(json["template_params"]["inquiry_type"], "pitch");
    }

    #[test]
    fn empty_required_field_is_rejected_before_sending() {
        let (gateway, transport) = gateway(Some(credentials()));
        let mut draft = filled_contact();
        draft.set("last_name", String::new());
        assert_eq!(
            block_on(gateway.submit(draft.submission())),
            Err(SubmissionError::MissingField("Last Name"))
        );
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn provider_failure_is_reported() {
        let transport = Rc::new(RecordingTransport {
            fail: true,
            ..Default::default()
        });
        let gateway = Gateway::new(Some(credentials()), transport.clone());
        assert!(matches!(
            block_on(gateway.submit(filled_contact().submission())),
            Err(SubmissionError::SubmissionFailed(_))
        ));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn latch_allows_a_single_submission_in_flight() {
        let (gateway, transport) = gateway(Some(credentials()));
        let latch = SendLatch::default();

        let first = gateway
            .submit_latched(&latch, filled_contact().submission())
            .unwrap_or_else(|e| panic!("first submit rejected: {e}"));
        assert!(latch.is_sending());
        assert!(matches!(
            gateway.submit_latched(&latch, filled_contact().submission()),
            Err(SubmissionError::InFlight)
        ));

        assert_eq!(block_on(first), Ok(()));
        assert!(!latch.is_sending());
        assert_eq!(transport.sent.borrow().len(), 1);

        let again = gateway
            .submit_latched(&latch, filled_contact().submission())
            .unwrap_or_else(|e| panic!("latch not released: {e}"));
        assert_eq!(block_on(again), Ok(()));
        assert_eq!(transport.sent.borrow().len(), 2);
    }

    #[test]
    fn rejected_submission_does_not_hold_the_latch() {
        let (gateway, transport) = gateway(None);
        let latch = SendLatch::default();
        assert!(matches!(
            gateway.submit_latched(&latch, filled_contact().submission()),
            Err(SubmissionError::NotConfigured)
        ));
        assert!(!latch.is_sending());
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn dropping_the_send_future_releases_the_latch() {
        let (gateway, transport) = gateway(Some(credentials()));
        let latch = SendLatch::default();
        let pending = gateway.submit_latched(&latch, filled_pitch().submission());
        assert!(latch.is_sending());
        drop(pending);
        assert!(!latch.is_sending());
        assert!(transport.sent.borrow().is_empty());
    }
}
