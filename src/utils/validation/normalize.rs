use unicode_normalization::UnicodeNormalization;

/// Applies NFKC normalization and trims surrounding whitespace.
/// Absent input is treated as the empty string.
///
/// The ASCII separators U+001C to U+001F are trimmed too, like any other
/// whitespace.
pub fn normalize_basic<'a>(value: impl Into<Option<&'a str>>) -> String {
    let value = value.into().unwrap_or_default();
    value
        .nfkc()
        .collect::<String>()
        .trim_matches(is_space)
        .to_string()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
