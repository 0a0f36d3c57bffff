//! Character classes of the lexical grammar.
//!
//! Every branch the scanner takes on a lookahead character goes through one
//! of these predicates, so the grammar can be read (and tested) in one place.

/// Checks if a character may appear in source text at all.
///
/// Tab, line feed and carriage return are the only control characters
/// allowed; everything at or above U+0020 is allowed.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_source_char;
///
/// assert!(is_source_char('a'));
/// assert!(is_source_char('\t'));
/// assert!(is_source_char('\u{7f}'));
/// assert!(!is_source_char('\u{7}'));
/// assert!(!is_source_char('\0'));
/// ```
#[inline]
pub fn is_source_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || c >= ' '
}

/// Checks if a character is a control character rejected as source text.
#[inline]
pub fn is_control(c: char) -> bool {
    !is_source_char(c)
}

/// Checks if a character is skipped between tokens (whitespace or comma).
///
/// `#` also starts ignored input, but as a comment it needs its own scan.
#[inline]
pub fn is_ignored(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\n' | '\r' | ',')
}

/// Checks if a character ends a line comment or breaks a string.
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start a name: `[_A-Za-z]`.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_name_start;
///
/// assert!(is_name_start('_'));
/// assert!(is_name_start('Q'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('é'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue a name: `[_0-9A-Za-z]`.
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
