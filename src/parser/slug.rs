use deunicode::deunicode;

/// Turns free text into a lowercase, hyphen-separated ASCII identifier.
///
/// Non-ASCII letters are transliterated first ("Café" becomes "cafe"), then every run of
/// characters that is not an ASCII letter or digit collapses into a single `-`. Leading and
/// trailing separators are dropped, so empty or punctuation-only input gives an empty slug.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
