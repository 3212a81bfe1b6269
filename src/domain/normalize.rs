use std::borrow::Cow;

/// Collapse an event into exactly one line.
///
/// Input without `\r` or `\n` is returned trimmed and borrowed. Otherwise all
/// `\r` are removed and every whitespace run becomes a single space.
/// Whitespace-only input yields an empty string.
pub fn normalize_event(text: &str) -> Cow<'_, str> {
    if !text.contains(['\r', '\n']) {
        return Cow::Borrowed(text.trim());
    }

    let without_cr = text.replace('\r', "");
    let mut line = String::with_capacity(without_cr.len());
    for token in without_cr.split_whitespace() {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(token);
    }
    Cow::Owned(line)
}
