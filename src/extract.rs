//! Display name and addr-spec extraction
//!
//! A validated header value is cleaned of quote markers and comments, then
//! tried against four anchored, case-insensitive patterns in a fixed order.
//! The first that matches wins.

use crate::comment::remove_nested_comments;
use crate::types::Sender;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

// Whitespace is ASCII only: tab, newline, form feed, carriage return, space.
static NAME_WITH_BRACKETED: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r#"(?i)^"?([^"<]*)"?[\t\n\f\r ]*<[\t\n\f\r ]*([^@\t\n\f\r <>]+@[^@\t\n\f\r <>]+\.[^@\t\n\f\r <>]+)[\t\n\f\r ]*>$"#,
    )
    .expect("name + bracketed address pattern is valid")
});

static NAME_WITH_BARE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r#"(?i)^([^<"\t\n\f\r @][^<@"]*)[\t\n\f\r ]+([a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,})$"#,
    )
    .expect("name + bare address pattern is valid")
});

static BRACKETED_ONLY: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?i)^<[\t\n\f\r ]*([^@\t\n\f\r <>]+@[^@\t\n\f\r <>]+\.[^@\t\n\f\r <>]+)[\t\n\f\r ]*>$",
    )
    .expect("bracketed address pattern is valid")
});

static BARE_ONLY: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)^([a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,})$")
        .expect("bare address pattern is valid")
});

/// One of the four header shapes the extractor recognizes, in match order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// `Name <local@domain.tld>`, name optionally quoted or empty
    NameWithBracketedAddress,
    /// `Name local@domain.tld`
    NameWithBareAddress,
    /// `<local@domain.tld>`
    BracketedAddress,
    /// `local@domain.tld`
    BareAddress,
}

impl Tier {
    /// All tiers in the order the cascade tries them
    pub const ORDER: [Self; 4] = [
        Self::NameWithBracketedAddress,
        Self::NameWithBareAddress,
        Self::BracketedAddress,
        Self::BareAddress,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::NameWithBracketedAddress => &NAME_WITH_BRACKETED,
            Self::NameWithBareAddress => &NAME_WITH_BARE,
            Self::BracketedAddress => &BRACKETED_ONLY,
            Self::BareAddress => &BARE_ONLY,
        }
    }

    /// Whether this tier captures a display name
    #[must_use]
    pub const fn has_display_name(self) -> bool {
        matches!(
            self,
            Self::NameWithBracketedAddress | Self::NameWithBareAddress
        )
    }

    /// Match this tier's pattern against an already cleaned value.
    #[must_use]
    pub fn captures(self, input: &str) -> Option<Sender> {
        let caps = self.pattern().captures(input)?;

        let (display_name, addr_spec) = if self.has_display_name() {
            (caps.get(1)?.as_str().trim(), caps.get(2)?.as_str())
        } else {
            ("", caps.get(1)?.as_str())
        };

        Some(Sender::new(display_name, addr_spec))
    }
}

/// Outcome of running the cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeMatch {
    /// No tier recognized the value
    NoMatch,
    /// The first tier that matched and what it captured
    Matched { tier: Tier, sender: Sender },
}

impl CascadeMatch {
    /// The extracted sender, or an empty one on a miss
    #[must_use]
    pub fn into_sender(self) -> Sender {
        match self {
            Self::Matched { sender, .. } => sender,
            Self::NoMatch => Sender::default(),
        }
    }

    /// The winning tier, if any
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::Matched { tier, .. } => Some(*tier),
            Self::NoMatch => None,
        }
    }
}

/// Fold curly double quotes to ASCII and then drop every double quote.
#[must_use]
pub fn normalize_quotes(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .collect()
}

/// Try each tier in order against an already cleaned value.
#[must_use]
pub fn cascade(input: &str) -> CascadeMatch {
    for tier in Tier::ORDER {
        if let Some(sender) = tier.captures(input) {
            trace!(?tier, "Cascade matched");
            return CascadeMatch::Matched { tier, sender };
        }
    }

    debug!(input, "No recognizable sender shape");
    CascadeMatch::NoMatch
}

/// Extract the sender from a validated header value.
///
/// Never fails: a value no tier recognizes yields an empty [`Sender`].
#[must_use]
pub fn extract_sender(validated: &str) -> Sender {
    let cleaned = remove_nested_comments(&normalize_quotes(validated));
    cascade(cleaned.trim()).into_sender()
}
