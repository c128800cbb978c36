//! Core types for extracted senders

use crate::error::HeaderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name and addr-spec pulled out of a From header
///
/// Both fields empty means the value passed validation but matched no known
/// shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sender {
    /// Human readable name, empty when the header carried none
    pub display_name: String,

    /// Address (e.g., "john@example.com")
    pub addr_spec: String,
}

impl Sender {
    #[must_use]
    pub fn new(display_name: impl Into<String>, addr_spec: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            addr_spec: addr_spec.into(),
        }
    }

    /// True when nothing was recognized
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.addr_spec.is_empty()
    }

    /// Local part (before the first @)
    #[must_use]
    pub fn local_part(&self) -> Option<&str> {
        self.addr_spec.split_once('@').map(|(local, _)| local)
    }

    /// Domain (after the first @)
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.addr_spec.split_once('@').map(|(_, domain)| domain)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            write!(f, "<{}>", self.addr_spec)
        } else {
            write!(f, "{} <{}>", self.display_name, self.addr_spec)
        }
    }
}

/// Flat record handed to an output sink
///
/// `error` holds the literal string `"null"` on success, otherwise the
/// error message with both address fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderRecord {
    pub display_name: String,
    pub addr_spec: String,
    pub error: String,
}

impl SenderRecord {
    pub const NO_ERROR: &'static str = "null";

    #[must_use]
    pub fn success(sender: Sender) -> Self {
        Self {
            display_name: sender.display_name,
            addr_spec: sender.addr_spec,
            error: Self::NO_ERROR.to_string(),
        }
    }

    #[must_use]
    pub fn failure(error: &impl fmt::Display) -> Self {
        Self {
            display_name: String::new(),
            addr_spec: String::new(),
            error: error.to_string(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error != Self::NO_ERROR
    }

    /// Render as indented JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Result<Sender, HeaderError>> for SenderRecord {
    fn from(result: Result<Sender, HeaderError>) -> Self {
        match result {
            Ok(sender) => Self::success(sender),
            Err(kind) => Self::failure(&kind),
        }
    }
}

impl From<crate::error::Result<Sender>> for SenderRecord {
    fn from(result: crate::error::Result<Sender>) -> Self {
        match result {
            Ok(sender) => Self::success(sender),
            Err(err) => Self::failure(&err),
        }
    }
}
