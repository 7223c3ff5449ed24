/// Builds a URL slug from a display name.
///
/// Lowercases alphanumeric characters and collapses every run of other
/// characters into a single `-`, with no leading or trailing separator.
/// Returns an empty string when the name has no alphanumeric characters.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in value.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
