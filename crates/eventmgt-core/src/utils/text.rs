//! Text manipulation helpers.

/// Upper-cases the first character of a string if it is an ASCII letter.
///
/// Non-ASCII leading characters are left unchanged, so `"über"` stays
/// `"über"`.
///
/// # Examples
///
/// ```
/// use eventmgt_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("radio"), "Radio");
/// assert_eq!(capfirst(""), "");
/// assert_eq!(capfirst("SELECT"), "SELECT");
/// assert_eq!(capfirst("ßa"), "ßa");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut result = s.to_string();
    if let Some(first) = result.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    result
}
