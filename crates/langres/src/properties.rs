//! Minimal reader for `.properties` style key=value text.
//!
//! Covers the subset the resource files use: one pair per line, `=` or `:`
//! as separator, `#`/`!` comment lines. Backslash line continuations and
//! `\uXXXX` escapes from the full Java dialect are not recognized.

/// Parses key=value text into pairs, preserving input order.
///
/// Keys and values are trimmed. A line without a separator yields the whole
/// trimmed line as key with an empty value; the first separator on a line
/// wins, so values may contain `=` or `:`.
pub fn parse(text: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(['=', ':']) {
            Some(pos) => (&line[..pos], &line[pos + 1..]),
            None => (line, ""),
        };
        entries.push((key.trim().to_string(), value.trim().to_string()));
    }
    entries
}

/// Looks up `key` among parsed pairs, the last occurrence winning.
pub fn get<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
