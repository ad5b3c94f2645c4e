/// Collapse a title to the hyphen slug the exact-search comparison uses:
/// lowercase, every run of non-alphanumerics becomes a single `-`.
///
/// Both sides of a comparison go through this, so leading/trailing dashes
/// cancel out and only the alphanumeric skeleton matters.
pub fn title_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut previous_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }

    slug
}
