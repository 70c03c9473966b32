use crate::error::CoreError;

/// First printable ASCII character (space, 32).
pub const PRINTABLE_MIN: char = ' ';

/// Last printable ASCII character (tilde, 126).
pub const PRINTABLE_MAX: char = '~';

/// Palette de départ : les dix chiffres.
pub const CHARSET_DIGITS: &str = "0123456789";

/// 10 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 caractères — Paul Bourke extended, bon équilibre.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Returns `true` if `c` lies in the printable ASCII range [32, 126].
///
/// # Example
/// ```
/// use am_core::charset::is_printable;
/// assert!(is_printable('a'));
/// assert!(is_printable(' '));
/// assert!(!is_printable('\n'));
/// assert!(!is_printable('é'));
/// ```
#[inline]
#[must_use]
pub fn is_printable(c: char) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&c)
}

/// Every printable character, ascending codepoint order.
pub fn all_printable() -> impl Iterator<Item = char> {
    PRINTABLE_MIN..=PRINTABLE_MAX
}

/// Résout un nom de preset (`digits`, `compact`, `standard`, `all`) ou
/// retourne la chaîne telle quelle.
///
/// # Example
/// ```
/// use am_core::charset::resolve_charset;
/// assert_eq!(resolve_charset("digits"), "0123456789");
/// assert_eq!(resolve_charset("ab"), "ab");
/// assert_eq!(resolve_charset("all").chars().count(), 95);
/// ```
#[must_use]
pub fn resolve_charset(name: &str) -> String {
    match name {
        "digits" => CHARSET_DIGITS.to_string(),
        "compact" => CHARSET_COMPACT.to_string(),
        "standard" => CHARSET_STANDARD.to_string(),
        "all" => all_printable().collect(),
        other => other.to_string(),
    }
}

/// Parse a character specification as accepted by `add` / `remove`.
///
/// - a single character: `"x"`
/// - `"all"`: every printable character
/// - `"space"`: the space character
/// - `"a-f"`: an inclusive range, walked in the order of its endpoints
///
/// Characters outside [32, 126] are rejected.
///
/// # Errors
/// [`CoreError::InvalidCharSpec`] for an unrecognised spec,
/// [`CoreError::UnprintableChar`] for a character outside the printable range.
///
/// # Example
/// ```
/// use am_core::charset::parse_char_spec;
/// assert_eq!(parse_char_spec("a-c").unwrap(), vec!['a', 'b', 'c']);
/// assert_eq!(parse_char_spec("c-a").unwrap(), vec!['c', 'b', 'a']);
/// assert_eq!(parse_char_spec("space").unwrap(), vec![' ']);
/// assert!(parse_char_spec("abcd").is_err());
/// ```
pub fn parse_char_spec(spec: &str) -> Result<Vec<char>, CoreError> {
    let chars: Vec<char> = spec.chars().collect();
    let parsed: Vec<char> = match (spec, chars.as_slice()) {
        ("all", _) => all_printable().collect(),
        ("space", _) => vec![' '],
        (_, [c]) => vec![*c],
        (_, [start, '-', end]) => {
            if start <= end {
                (*start..=*end).collect()
            } else {
                (*end..=*start).rev().collect()
            }
        }
        _ => return Err(CoreError::InvalidCharSpec(spec.to_string())),
    };
    if let Some(&bad) = parsed.iter().find(|c| !is_printable(**c)) {
        return Err(CoreError::UnprintableChar(bad));
    }
    Ok(parsed)
}
