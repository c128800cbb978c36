//! Parenthetical comment removal

/// Remove balanced parenthetical comments, nested ones included, and trim
/// the result.
///
/// An unmatched `(` is not an error: everything from it to the end of the
/// input is dropped.
///
/// ```rust
/// use sender_extract::remove_nested_comments;
///
/// assert_eq!(remove_nested_comments("a (b (c) d) e"), "a  e");
/// assert_eq!(remove_nested_comments("a (b"), "a");
/// ```
#[must_use]
pub fn remove_nested_comments(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth: usize = 0;

    for ch in s.chars() {
        if ch == '(' {
            depth += 1;
        }

        if depth == 0 {
            out.push(ch);
        }

        if ch == ')' && depth > 0 {
            depth -= 1;
        }
    }

    out.trim().to_string()
}
