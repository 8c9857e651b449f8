use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Serialized form handed to a backend: flat field name → raw value.
pub type FieldMap = BTreeMap<String, String>;

/// Backend-side failure. The text goes to the log; visitors get a generic
/// retry banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// A pluggable submission backend. Swapping the backend (HTTP relay, mail
/// service) must not touch validation; the controller only depends on the
/// result.
pub trait SubmissionTransport {
    fn send(&self, fields: &FieldMap) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// The stand-in backend: waits a fixed delay and always succeeds.
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl SubmissionTransport for SimulatedTransport {
    async fn send(&self, fields: &FieldMap) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        log::info!(
            "reservation accepted for {} ({} fields)",
            fields.get("email").map(String::as_str).unwrap_or("?"),
            fields.len()
        );
        Ok(())
    }
}
