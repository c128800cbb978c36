// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! From Header Sender Extraction
//!
//! Pulls a display name and an addr-spec out of the raw text of an email
//! `From:` header, following the loose conventions seen in real mail rather
//! than the full RFC 5322 grammar.
//!
//! The pipeline is linear and stateless: comments are stripped, the value is
//! validated (and lightly rewritten), then an ordered cascade of four
//! patterns picks out the name and address.
//!
//! # Example
//!
//! ```rust
//! use sender_extract::{HeaderError, validate_and_extract};
//!
//! let sender = validate_and_extract("\"John Doe\" <john@example.com>").unwrap();
//! assert_eq!(sender.display_name, "John Doe");
//! assert_eq!(sender.addr_spec, "john@example.com");
//!
//! let err = validate_and_extract("John Doe <<john@example.com>>").unwrap_err();
//! assert_eq!(err, HeaderError::NestedAngleBrackets);
//! ```

mod comment;
mod error;
mod extract;
mod parser;
mod types;
mod validate;

pub use comment::remove_nested_comments;
pub use error::{HeaderError, ParseError, Result};
pub use extract::{CascadeMatch, Tier, cascade, extract_sender, normalize_quotes};
pub use parser::{
    FROM_LABEL, locate_header, parse_eml_file, parse_lines, parse_message, parse_sender,
    validate_and_extract,
};
pub use types::*;
pub use validate::{count_addr_specs, validate_header};
