//! Account holders
//!
//! A [`Holder`] is the client behind one or more accounts. It is also the
//! observer that accounts notify: `update` turns a transaction message into an
//! alert (subject with a timestamp, body with the holder's identity) and hands
//! it to the injected [`AlertSink`].
//!
//! Holders are immutable once built and shared through `Arc` between every
//! account they are attached to.

use crate::core::clock::{Clock, SystemClock};
use crate::core::traits::{AlertSink, Observer};
use crate::types::{AccountError, ClientNumber};
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Address stored in place of a malformed email
pub const INVALID_EMAIL: &str = "invalidemail@default.com";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is a valid regex")
});

/// Client identity and alert destination
#[derive(Clone)]
pub struct Holder {
    client_number: ClientNumber,
    first_name: String,
    last_name: String,
    email_address: String,
    sink: Arc<dyn AlertSink>,
    clock: Arc<dyn Clock>,
}

impl Holder {
    /// Create a holder whose alerts go to `sink`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the first or last name is blank.
    /// A malformed email is not an error: it is replaced by [`INVALID_EMAIL`].
    pub fn new(
        client_number: ClientNumber,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        sink: Arc<dyn AlertSink>,
    ) -> Result<Self, AccountError> {
        if first_name.trim().is_empty() {
            return Err(AccountError::blank("First name"));
        }
        if last_name.trim().is_empty() {
            return Err(AccountError::blank("Last name"));
        }

        let email_address = if EMAIL_PATTERN.is_match(email_address) {
            email_address.to_string()
        } else {
            INVALID_EMAIL.to_string()
        };

        Ok(Holder {
            client_number,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address,
            sink,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for alert timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn client_number(&self) -> ClientNumber {
        self.client_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl Observer for Holder {
    fn update(&self, message: &str) {
        let subject = format!(
            "ALERT: Unusual Activity: {}",
            self.clock.now().format("%Y-%m-%d %H:%M:%S")
        );
        let body = format!(
            "Notification for {}: {} {}: {}",
            self.client_number, self.first_name, self.last_name, message
        );

        tracing::debug!(
            client = self.client_number,
            email = %self.email_address,
            "sending alert"
        );
        self.sink.send(&subject, &body);
    }
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client: {} {} ({})",
            self.first_name, self.last_name, self.client_number
        )
    }
}

impl fmt::Debug for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("client_number", &self.client_number)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .finish_non_exhaustive()
    }
}
