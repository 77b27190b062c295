//! Character sets allowed in notation.

/// Returns whether `c` is a character allowed in a move family name.
pub fn is_family_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Regex character class (including the surrounding `[]`) matching all
/// characters for which [`is_family_char()`] returns true.
pub const FAMILY_CHAR_CLASS: &str = "[A-Za-z]";

/// String containing all characters for which [`is_family_char()`]
/// returns true.
pub const FAMILY_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

#[cfg(test)]
lazy_static::lazy_static! {
    pub(crate) static ref FAMILY_REGEX: &'static str = format!("{FAMILY_CHAR_CLASS}{{1,3}}").leak();
}
