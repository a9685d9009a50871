use std::cell::Cell;

use chrono::{DateTime, SecondsFormat, Utc};
use http::StatusCode;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::toast::ToastVariant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("network error: {0}")]
    Network(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("couldn't encode message: {0}")]
    Encode(String),
}

/// How the webhook's HTTP status is interpreted once a response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Only 2xx responses count as delivered.
    #[default]
    RequireSuccess,
    /// Any response counts as delivered; only transport failures are errors.
    AcceptAny,
}

impl StatusPolicy {
    pub fn check(self, status: StatusCode) -> Result<(), ContactError> {
        match self {
            Self::AcceptAny => Ok(()),
            Self::RequireSuccess if status.is_success() => Ok(()),
            Self::RequireSuccess => Err(ContactError::Status(status.as_u16())),
        }
    }
}

/// Raw field values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl ContactMessage {
    pub fn new(form: ContactForm, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: form.name,
            email: form.email,
            message: form.message,
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::Encode(e.to_string()))
    }
}

#[allow(async_fn_in_trait)]
pub trait WebhookTransport {
    /// Sends `body` as a JSON POST and returns the response status.
    async fn post_json(&self, url: &str, body: String) -> Result<StatusCode, ContactError>;
}

/// Builds the webhook POST carrying `body` as JSON.
pub fn build_request(
    client: &reqwest::Client,
    url: &str,
    body: String,
) -> Result<reqwest::Request, ContactError> {
    client
        .post(url)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body)
        .build()
        .map_err(|e| ContactError::Network(e.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<StatusCode, ContactError> {
        let req = build_request(&self.client, url, body)?;
        let res = self
            .client
            .execute(req)
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;
        Ok(res.status())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Sent,
    Failed(ContactError),
    /// Another submission was still pending; nothing was sent.
    Skipped,
}

impl Submission {
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Title, description and variant of the notification to show, if any.
    pub fn notification(&self) -> Option<(&'static str, &'static str, ToastVariant)> {
        match self {
            Self::Sent => Some((
                "Message sent!",
                "Thanks for reaching out. I'll get back to you soon.",
                ToastVariant::Default,
            )),
            Self::Failed(_) => Some((
                "Error",
                "Failed to send message. Please try again.",
                ToastVariant::Destructive,
            )),
            Self::Skipped => None,
        }
    }
}

/// Sends contact messages to a webhook, one attempt each, one at a time.
pub struct ContactSubmitter<T> {
    transport: T,
    endpoint: String,
    policy: StatusPolicy,
    pending: Cell<bool>,
}

struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T: WebhookTransport> ContactSubmitter<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, policy: StatusPolicy) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            policy,
            pending: Cell::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub async fn submit(&self, message: &ContactMessage) -> Submission {
        if self.pending.replace(true) {
            log::warn!("contact submission already in flight, ignoring");
            return Submission::Skipped;
        }
        let _guard = PendingGuard(&self.pending);

        let res = match message.to_json() {
            Ok(body) => self
                .transport
                .post_json(&self.endpoint, body)
                .await
                .and_then(|status| self.policy.check(status)),
            Err(e) => Err(e),
        };
        match res {
            Ok(()) => {
                log::info!("contact message delivered");
                Submission::Sent
            }
            Err(e) => {
                log::warn!("contact message failed: {e}");
                Submission::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, sync::Mutex};
    use tokio::sync::oneshot;

    const ENDPOINT: &str = "https://hooks.example.com/contact";

    struct RecordingTransport {
        requests: RefCell<Vec<(String, serde_json::Value)>>,
        response: Result<StatusCode, ContactError>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl RecordingTransport {
        fn responding(response: Result<StatusCode, ContactError>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                response,
                gate: RefCell::new(None),
            }
        }
    }

    impl WebhookTransport for RecordingTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<StatusCode, ContactError> {
            let value = serde_json::from_str(&body).expect("body should be json");
            self.requests.borrow_mut().push((url.to_string(), value));
            let gate = self.gate.borrow_mut().take();
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            self.response.clone()
        }
    }

    fn message() -> ContactMessage {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        };
        ContactMessage::new(form, Utc::now())
    }

    #[test]
    fn test_json_payload() {
        let ts = DateTime::parse_from_rfc3339("2025-03-01T12:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        let msg = ContactMessage::new(
            ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hi".to_string(),
            },
            ts,
        );
        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi",
                "timestamp": "2025-03-01T12:00:00.500Z",
            })
        );
    }

    #[test]
    fn test_webhook_request() {
        let body = r#"{"name":"Ada"}"#.to_string();
        let req = build_request(&reqwest::Client::new(), ENDPOINT, body.clone()).unwrap();

        assert_eq!(req.method(), &http::Method::POST);
        assert_eq!(req.url().as_str(), ENDPOINT);
        assert_eq!(
            req.headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let sent = req.body().and_then(|b| b.as_bytes());
        assert_eq!(sent, Some(body.as_bytes()));
    }

    #[test]
    fn test_webhook_request_bad_url() {
        let res = build_request(&reqwest::Client::new(), "not a url", String::new());
        assert!(matches!(res, Err(ContactError::Network(_))));
    }

    #[test]
    fn test_status_policy() {
        let strict = StatusPolicy::RequireSuccess;
        assert_eq!(strict.check(StatusCode::OK), Ok(()));
        assert_eq!(strict.check(StatusCode::ACCEPTED), Ok(()));
        assert_eq!(
            strict.check(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ContactError::Status(500))
        );
        assert_eq!(
            StatusPolicy::AcceptAny.check(StatusCode::INTERNAL_SERVER_ERROR),
            Ok(())
        );
    }

    #[tokio::test]
    async fn test_submit_posts_once() {
        let submitter = ContactSubmitter::new(
            RecordingTransport::responding(Ok(StatusCode::OK)),
            ENDPOINT,
            StatusPolicy::default(),
        );
        let outcome = submitter.submit(&message()).await;
        assert_eq!(outcome, Submission::Sent);
        assert!(outcome.clears_form());
        assert!(!submitter.is_pending());

        let requests = submitter.transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        let (url, body) = &requests[0];
        assert_eq!(url, ENDPOINT);
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["message"], "Hello there");
        let ts = body["timestamp"].as_str().expect("timestamp should be a string");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
        assert!(ts.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_form() {
        let submitter = ContactSubmitter::new(
            RecordingTransport::responding(Err(ContactError::Network("offline".to_string()))),
            ENDPOINT,
            StatusPolicy::default(),
        );
        let outcome = submitter.submit(&message()).await;
        assert_eq!(
            outcome,
            Submission::Failed(ContactError::Network("offline".to_string()))
        );
        assert!(!outcome.clears_form());
        let (title, _, variant) = outcome.notification().unwrap();
        assert_eq!(title, "Error");
        assert_eq!(variant, ToastVariant::Destructive);
        // no retry
        assert_eq!(submitter.transport.requests.borrow().len(), 1);
        assert!(!submitter.is_pending());
    }

    #[tokio::test]
    async fn test_server_error_depends_on_policy() {
        let strict = ContactSubmitter::new(
            RecordingTransport::responding(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            ENDPOINT,
            StatusPolicy::RequireSuccess,
        );
        let outcome = strict.submit(&message()).await;
        assert_eq!(outcome, Submission::Failed(ContactError::Status(500)));
        assert!(!outcome.clears_form());

        let lenient = ContactSubmitter::new(
            RecordingTransport::responding(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            ENDPOINT,
            StatusPolicy::AcceptAny,
        );
        let outcome = lenient.submit(&message()).await;
        assert_eq!(outcome, Submission::Sent);
        assert!(outcome.clears_form());
        let (title, _, variant) = outcome.notification().unwrap();
        assert_eq!(title, "Message sent!");
        assert_eq!(variant, ToastVariant::Default);
    }

    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.lines
                .lock()
                .expect("should be able to lock log lines")
                .push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };

    #[tokio::test]
    async fn test_delivery_log_omits_visitor_email() {
        // other tests may have installed a logger first; then nothing is captured
        let installed = log::set_logger(&LOGGER).is_ok();
        log::set_max_level(log::LevelFilter::Trace);

        let submitter = ContactSubmitter::new(
            RecordingTransport::responding(Ok(StatusCode::OK)),
            ENDPOINT,
            StatusPolicy::default(),
        );
        let mut msg = message();
        msg.email = "private-visitor@example.com".to_string();
        assert_eq!(submitter.submit(&msg).await, Submission::Sent);

        let lines = LOGGER.lines.lock().expect("should be able to lock log lines");
        if installed {
            assert!(lines.iter().any(|l| l.contains("delivered")));
        }
        assert!(!lines.iter().any(|l| l.contains("private-visitor@example.com")));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_skipped() {
        let (tx, rx) = oneshot::channel();
        let transport = RecordingTransport::responding(Ok(StatusCode::OK));
        *transport.gate.borrow_mut() = Some(rx);
        let submitter = ContactSubmitter::new(transport, ENDPOINT, StatusPolicy::default());
        let msg = message();

        let (first, second) = tokio::join!(submitter.submit(&msg), async {
            while !submitter.is_pending() {
                tokio::task::yield_now().await;
            }
            let outcome = submitter.submit(&msg).await;
            let _ = tx.send(());
            outcome
        });

        assert_eq!(first, Submission::Sent);
        assert_eq!(second, Submission::Skipped);
        assert!(second.notification().is_none());
        assert_eq!(submitter.transport.requests.borrow().len(), 1);
        assert!(!submitter.is_pending());
    }
}
