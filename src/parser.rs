//! Sender parsing pipeline and header sources

use crate::error::{HeaderError, ParseError, Result};
use crate::extract::extract_sender;
use crate::types::{Sender, SenderRecord};
use crate::validate::validate_header;
use mailparse::MailHeaderMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Field label the line sources look for by default
pub const FROM_LABEL: &str = "From:";

/// Validate a raw From header value and extract its sender.
///
/// The extractor only runs once validation has passed.
pub fn validate_and_extract(raw: &str) -> std::result::Result<Sender, HeaderError> {
    let validated = validate_header(raw)?;
    let sender = extract_sender(&validated);

    debug!(
        display_name = %sender.display_name,
        addr_spec = %sender.addr_spec,
        "Extracted sender"
    );

    Ok(sender)
}

/// Find the value of the first header line starting with `label`.
///
/// The label match ignores ASCII case. Scanning stops at the first empty
/// line, which ends the header block.
pub fn locate_header<R: BufRead>(reader: R, label: &str) -> Result<String> {
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        if let Some(prefix) = line.get(..label.len())
            && prefix.eq_ignore_ascii_case(label)
        {
            return Ok(line[label.len()..].trim().to_string());
        }
    }

    debug!(label, "Header not found before end of header block");
    Err(HeaderError::HeaderMissing.into())
}

/// Locate the From header in a line source and extract its sender.
pub fn parse_sender<R: BufRead>(reader: R) -> Result<Sender> {
    let value = locate_header(reader, FROM_LABEL)?;
    Ok(validate_and_extract(&value)?)
}

/// Extract the sender from a message file on disk.
pub fn parse_eml_file(path: impl AsRef<Path>) -> Result<Sender> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;

    parse_sender(BufReader::new(file)).map_err(|e| match e {
        ParseError::Read(source) => ParseError::io(path, source),
        other => other,
    })
}

/// Run every line of a header-value list through the pipeline.
///
/// Each line is one raw From value; the list ends at the first empty line.
/// A rejected line yields a failure record instead of stopping the batch.
/// Stray `<` in names and `>` in addresses are dropped from successful
/// records.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<SenderRecord>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        let record = match validate_and_extract(&line) {
            Ok(sender) => SenderRecord::success(Sender::new(
                sender.display_name.replace('<', ""),
                sender.addr_spec.replace('>', ""),
            )),
            Err(kind) => SenderRecord::failure(&kind),
        };
        records.push(record);
    }

    debug!(count = records.len(), "Parsed header value list");
    Ok(records)
}

/// Extract the sender from raw message bytes.
///
/// Unlike [`parse_sender`], header lookup goes through `mailparse`, so folded
/// lines are joined and encoded words are decoded before validation.
pub fn parse_message(raw: &[u8]) -> Result<Sender> {
    let (headers, _) =
        mailparse::parse_headers(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

    let value = headers
        .get_first_value("From")
        .ok_or(HeaderError::HeaderMissing)?;

    Ok(validate_and_extract(value.trim())?)
}
