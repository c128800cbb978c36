use sender_extract::*;
use std::io::Cursor;

// --- validate_and_extract ---

#[test]
fn test_display_name_and_bracketed_address() {
    let sender = validate_and_extract("John Doe <john@example.com>").unwrap();
    assert_eq!(sender.display_name, "John Doe");
    assert_eq!(sender.addr_spec, "john@example.com");
}

#[test]
fn test_bracketed_address_only() {
    let sender = validate_and_extract("<john@example.com>").unwrap();
    assert_eq!(sender.display_name, "");
    assert_eq!(sender.addr_spec, "john@example.com");
}

#[test]
fn test_bare_address_only() {
    let sender = validate_and_extract("john@example.com").unwrap();
    assert_eq!(sender, Sender::new("", "john@example.com"));
}

#[test]
fn test_display_name_and_bare_address() {
    let sender = validate_and_extract("John Doe john@example.com").unwrap();
    assert_eq!(sender, Sender::new("John Doe", "john@example.com"));
}

#[test]
fn test_quoted_name_with_fake_address() {
    let sender = validate_and_extract("\"John <fake@example.org>\" <real@example.com>").unwrap();
    assert_eq!(sender, Sender::new("John", "real@example.com"));
}

#[test]
fn test_comment_after_address() {
    let sender = validate_and_extract("john@example.com (John Doe)").unwrap();
    assert_eq!(sender, Sender::new("", "john@example.com"));
}

#[test]
fn test_validation_short_circuits() {
    assert_eq!(
        validate_and_extract("John <<john@example.com>>"),
        Err(HeaderError::NestedAngleBrackets)
    );
    assert_eq!(
        validate_and_extract("John Doe <john.example.com>"),
        Err(HeaderError::MissingDomain)
    );
    assert_eq!(validate_and_extract("John Doe"), Err(HeaderError::NoAddrSpec));
    assert_eq!(
        validate_and_extract("\"John\" <john@example.com>, <jane@example.com>"),
        Err(HeaderError::MultipleAddrSpecs)
    );
    assert_eq!(
        validate_and_extract("\"John Doe <john@example.com>"),
        Err(HeaderError::UnterminatedQuote)
    );
}

#[test]
fn test_two_quoted_spans_fall_through_to_empty() {
    let sender =
        validate_and_extract("\"John\" <john@example.com>, \"Jane\" <jane@example.com>").unwrap();
    assert!(sender.is_empty());
}

#[test]
fn test_round_trip() {
    let inputs = [
        "John Doe <john@example.com>",
        "\"Jane Q. Public\" <jane.public+news@mail.example.org>",
        "O'Brien john_ob@example.co.uk",
        "Jürgen Groß <juergen@example.de>",
        "<solo@example.com>",
        "bare@example.net",
    ];

    for input in inputs {
        let first = validate_and_extract(input).unwrap();
        assert!(!first.addr_spec.is_empty(), "input: {input:?}");

        let again = format!("{} <{}>", first.display_name, first.addr_spec);
        let second = validate_and_extract(&again).unwrap();
        assert_eq!(first, second, "input: {input:?}");
    }
}

// --- locate_header ---

#[test]
fn test_locate_header_case_insensitive() {
    let raw = "Subject: Hello\r\nfROM:   John <john@example.com>  \r\n\r\nBody";
    let value = locate_header(Cursor::new(raw), FROM_LABEL).unwrap();
    assert_eq!(value, "John <john@example.com>");
}

#[test]
fn test_locate_header_stops_at_blank_line() {
    let raw = "Subject: Hello\n\nFrom: john@example.com\n";
    let err = locate_header(Cursor::new(raw), FROM_LABEL).unwrap_err();
    assert_eq!(err.header_error(), Some(HeaderError::HeaderMissing));
}

#[test]
fn test_locate_header_custom_label() {
    let raw = "From: a@example.com\nReply-To: b@example.com\n\n";
    let value = locate_header(Cursor::new(raw), "reply-to:").unwrap();
    assert_eq!(value, "b@example.com");
}

#[test]
fn test_locate_header_empty_value() {
    let value = locate_header(Cursor::new("From:\n\n"), FROM_LABEL).unwrap();
    assert_eq!(value, "");
}

#[test]
fn test_locate_header_short_line() {
    let err = locate_header(Cursor::new("Fr\n"), FROM_LABEL).unwrap_err();
    assert!(matches!(err, ParseError::Header(HeaderError::HeaderMissing)));
}

// --- parse_lines ---

#[test]
fn test_parse_lines_mixed() {
    let raw = "John Doe <john@example.com>\n\
               John <<john@example.com>>\n\
               jane@example.com\n\
               No Address Here\n\
               \"Jane\" <jane@example.com>, <jim@example.com>\n";

    let records = parse_lines(Cursor::new(raw)).unwrap();
    assert_eq!(records.len(), 5);

    assert_eq!(records[0].display_name, "John Doe");
    assert_eq!(records[0].addr_spec, "john@example.com");
    assert_eq!(records[0].error, "null");

    assert_eq!(
        records[1].error,
        "nested < .. > not allowed as part of addr-spec"
    );
    assert!(records[1].addr_spec.is_empty());

    assert_eq!(records[2].addr_spec, "jane@example.com");
    assert!(!records[2].is_error());

    assert_eq!(records[3].error, "no addr-spec found");
    assert_eq!(records[4].error, "more than one addr-spec given");
}

#[test]
fn test_parse_lines_stops_at_blank_line() {
    let raw = "a@example.com\r\nb@example.com\r\n\r\nc@example.com\r\n";

    let records = parse_lines(Cursor::new(raw)).unwrap();
    let addrs: Vec<&str> = records.iter().map(|r| r.addr_spec.as_str()).collect();
    assert_eq!(addrs, ["a@example.com", "b@example.com"]);
}

#[test]
fn test_parse_lines_empty_input() {
    assert!(parse_lines(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn test_parse_lines_unrecognized_shape_is_not_an_error() {
    let records = parse_lines(Cursor::new("john@localhost\n")).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].display_name.is_empty());
    assert!(records[0].addr_spec.is_empty());
    assert_eq!(records[0].error, "null");
}

// --- parse_sender ---

#[test]
fn test_parse_sender() {
    let raw = "Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n\
               From: \"John Doe\" <john@example.com>\r\n\
               Subject: Test\r\n\
               \r\n\
               Hello";

    let sender = parse_sender(Cursor::new(raw)).unwrap();
    assert_eq!(sender, Sender::new("John Doe", "john@example.com"));
}

#[test]
fn test_parse_sender_empty_value() {
    let err = parse_sender(Cursor::new("From:\r\n\r\n")).unwrap_err();
    assert_eq!(err.header_error(), Some(HeaderError::NoAddrSpec));
}

#[test]
fn test_parse_sender_missing_header() {
    let err = parse_sender(Cursor::new("Subject: Test\r\n\r\n")).unwrap_err();
    assert_eq!(err.to_string(), "\"From\" header missing or value is empty");
}

// --- parse_eml_file ---

#[test]
fn test_parse_eml_file() {
    let path = std::env::temp_dir().join(format!("sender-extract-{}.eml", std::process::id()));
    std::fs::write(
        &path,
        "From: Jane Roe <jane@example.com>\r\nSubject: Hi\r\n\r\nBody\r\n",
    )
    .unwrap();

    let result = parse_eml_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(result.unwrap(), Sender::new("Jane Roe", "jane@example.com"));
}

#[test]
fn test_parse_eml_file_not_found() {
    let err = parse_eml_file("/nonexistent/dir/message.eml").unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
    assert!(err.to_string().contains("message.eml"));
}

// --- parse_message ---

#[test]
fn test_parse_message() {
    let raw = b"From: John Doe <john@example.com>\r\n\
                To: recipient@example.com\r\n\
                Subject: Test Email\r\n\
                \r\n\
                Hello, this is a test email.";

    let sender = parse_message(raw).unwrap();
    assert_eq!(sender, Sender::new("John Doe", "john@example.com"));
}

#[test]
fn test_parse_message_encoded_word() {
    let raw = b"From: =?UTF-8?Q?Jos=C3=A9?= <jose@example.com>\r\n\r\nBody";

    let sender = parse_message(raw).unwrap();
    assert_eq!(sender.display_name, "Jos\u{e9}");
    assert_eq!(sender.addr_spec, "jose@example.com");
}

#[test]
fn test_parse_message_missing_from() {
    let raw = b"Subject: No sender\r\n\r\nBody";
    let err = parse_message(raw).unwrap_err();
    assert_eq!(err.header_error(), Some(HeaderError::HeaderMissing));
}

#[test]
fn test_parse_message_rejected_value() {
    let raw = b"From: .john@example.com\r\n\r\nBody";
    let err = parse_message(raw).unwrap_err();
    assert_eq!(err.header_error(), Some(HeaderError::LocalOrDomainDotBoundary));
}
