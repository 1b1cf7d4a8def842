/// Formats an integer with `,` as thousands separator, e.g. `150000` → `150,000`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Turns an artist name into a filename stem.
///
/// Whitespace runs become a single `_`. Letters and digits of any script are
/// kept, as are `_` and `-`; path separators, reserved characters such as
/// `<>:"|?*` and control characters are dropped.
///
/// # Example
///
/// ```
/// assert_eq!(safe_filename("Björk"), "Björk");
/// assert_eq!(safe_filename("AC/DC"), "ACDC");
/// ```
pub fn safe_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "artist".to_string()
    } else {
        stem
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts after any character that is not a letter, so `"j-pop"`
/// becomes `"J-Pop"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Keeps at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Lowercased, trimmed form used for case-insensitive name comparison.
pub fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}
