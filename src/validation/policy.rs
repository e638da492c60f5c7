//! Link policy: format rules plus the domain denylist.

use serde_json::Value;

use crate::validation::constraints::check_link_format;
use crate::validation::{ErrorCode, ValidationError};

/// Links rejected unless overridden by configuration.
pub const DEFAULT_BANNED_LINKS: [&str; 4] = [
    "https://yahoo.com",
    "http://yahoo.com",
    "https://socket.io",
    "http://socket.io",
];

/// Validates submitted links.
///
/// Two independent checks run over the same raw value: the URL format rule and
/// an exact-string match against the denylist.
#[derive(Debug, Clone)]
pub struct LinkPolicy {
    banned: Vec<String>,
}

impl LinkPolicy {
    pub fn new(banned: Vec<String>) -> Self {
        Self { banned }
    }

    pub fn banned_links(&self) -> &[String] {
        &self.banned
    }

    /// Rejects a link that exactly matches a denylist entry.
    pub fn check_domain(&self, raw: &str) -> Result<(), ValidationError> {
        if self.banned.iter().any(|banned| banned == raw) {
            return Err(ValidationError::banned(raw));
        }
        Ok(())
    }

    /// Runs the format check, then the denylist check.
    pub fn check(&self, raw: &str) -> Result<(), ValidationError> {
        check_link_format(raw)?;
        self.check_domain(raw)
    }

    /// Validates a link taken from a JSON body.
    ///
    /// Non-string values are reported as invalid links.
    pub fn validate_value(&self, value: &Value) -> Result<String, ValidationError> {
        let Value::String(raw) = value else {
            return Err(ErrorCode::InvalidLink.into());
        };
        self.check(raw)?;
        Ok(raw.clone())
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_LINKS.iter().map(|s| s.to_string()).collect())
    }
}
