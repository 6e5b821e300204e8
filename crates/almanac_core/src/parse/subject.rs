//! Person entry splitting: `Name, short role (extra dates)`.

/// Description used when an entry has no comma-separated role.
pub const UNDESCRIBED: &str = "not described";

/// Splits a births/deaths remainder into `(name, description)`.
///
/// The first comma separates the name from the role. Parenthesized material
/// after it is dropped, as is the single space following the comma and any
/// trailing whitespace. Without a comma the whole text up to the first `(`
/// is the name, kept verbatim, and the description is [`UNDESCRIBED`].
pub fn split_subject(remainder: &str) -> (String, String) {
    match remainder.split_once(',') {
        None => {
            let name = before_parenthesis(remainder);
            (name.to_string(), UNDESCRIBED.to_string())
        }
        Some((name, rest)) => {
            let role = before_parenthesis(rest);
            let role = role.strip_prefix(' ').unwrap_or(role).trim_end();
            (name.to_string(), role.to_string())
        }
    }
}

fn before_parenthesis(text: &str) -> &str {
    text.split_once('(').map_or(text, |(head, _)| head)
}
