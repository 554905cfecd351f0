/// Canonical form used for every credential lookup and storage key.
///
/// Only the case is folded; surrounding whitespace is kept, so a padded
/// address never matches a stored one.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
