//! Structural validation of a raw header value
//!
//! Rules run in a fixed order and the first failure wins. Besides rejecting,
//! the validator rewrites a quoted name that carries its own `<...>` into a
//! comment and drops escaped quotes when the quote count allows it; the
//! rewritten string is what the extractor sees.

use crate::comment::remove_nested_comments;
use crate::error::HeaderError;
use regex::Regex;
use tracing::{debug, trace};

static BRACKETED_ADDR_SPEC: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"<([^>]+@[^>]+)>").expect("bracketed addr-spec pattern is valid")
});

const ESCAPED_QUOTE: &str = "\\\"";

/// Validate a header value and return the string to hand to the extractor.
pub fn validate_header(value: &str) -> Result<String, HeaderError> {
    let value = value.trim_matches(['\n', '\r']);

    check_structure(value).inspect_err(|kind| debug!(?kind, "Rejected header value"))?;

    let quote_parts: Vec<&str> = value.split('"').collect();
    if quote_parts.len() == 3 && count_addr_specs(quote_parts[2]) > 1 {
        debug!(kind = ?HeaderError::MultipleAddrSpecs, "Rejected header value");
        return Err(HeaderError::MultipleAddrSpecs);
    }

    let mut rewritten = value.to_string();
    if let Some(quoted) = quote_parts.get(1)
        && quoted.contains('<')
        && quoted.contains('>')
    {
        rewritten = remove_nested_comments(&rewritten.replacen('<', "(", 1).replacen('>', ")", 1));
        trace!(%rewritten, "Folded bracketed text inside quotes into a comment");
    }

    balance_quotes(rewritten).inspect_err(|kind| debug!(?kind, "Rejected header value"))
}

/// Count `<...@...>` spans in a string.
#[must_use]
pub fn count_addr_specs(input: &str) -> usize {
    BRACKETED_ADDR_SPEC.find_iter(input).count()
}

/// Rules that only look at brackets, `@` and the dots around the first `@`
fn check_structure(value: &str) -> Result<(), HeaderError> {
    if value.contains(">>") || value.contains("<<") {
        return Err(HeaderError::NestedAngleBrackets);
    }

    let Some((local, rest)) = value.split_once('@') else {
        return Err(if value.contains('<') {
            HeaderError::MissingDomain
        } else {
            HeaderError::NoAddrSpec
        });
    };

    // Only the segment up to a second `@` counts as the domain
    let domain = rest.split('@').next().unwrap_or(rest);
    if local.starts_with('.') || local.ends_with('.') || domain.starts_with('.') {
        return Err(HeaderError::LocalOrDomainDotBoundary);
    }

    Ok(())
}

/// Quote-balance check. Escaped quotes are removed when the overall quote
/// count is even, and one escaped quote is always discounted from both
/// counts once any are present.
fn balance_quotes(mut value: String) -> Result<String, HeaderError> {
    let mut quotes = value.matches('"').count();
    let mut escaped = value.matches(ESCAPED_QUOTE).count();

    if escaped > 0 {
        if quotes.is_multiple_of(2) {
            value = value.replace(ESCAPED_QUOTE, "");
            trace!(escaped, "Removed escaped quotes");
        }
        escaped -= 1;
        quotes -= 1;
    }

    if !escaped.is_multiple_of(2) || !quotes.is_multiple_of(2) {
        return Err(HeaderError::UnterminatedQuote);
    }

    Ok(value)
}
