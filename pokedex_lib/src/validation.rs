//! Normalization of client-supplied page numbers and identifiers.
//!
//! Nothing in here fails: out-of-range pages fall back to a default and
//! identifiers are reshaped, never rejected.

/// Page used when the requested one is missing or invalid.
pub const DEFAULT_PAGE: u32 = 1;

/// Highest page a client may request.
pub const MAX_PAGE: u32 = 200;

/// A page number as it arrives from a caller: already numeric, raw text, or absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageInput<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl From<f64> for PageInput<'_> {
    fn from(n: f64) -> Self {
        PageInput::Number(n)
    }
}

impl From<i64> for PageInput<'_> {
    fn from(n: i64) -> Self {
        PageInput::Number(n as f64)
    }
}

impl From<i32> for PageInput<'_> {
    fn from(n: i32) -> Self {
        PageInput::Number(f64::from(n))
    }
}

impl From<u32> for PageInput<'_> {
    fn from(n: u32) -> Self {
        PageInput::Number(f64::from(n))
    }
}

impl<'a> From<&'a str> for PageInput<'a> {
    fn from(s: &'a str) -> Self {
        PageInput::Text(s)
    }
}

impl<'a, T: Into<PageInput<'a>>> From<Option<T>> for PageInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(PageInput::Missing, Into::into)
    }
}

impl PageInput<'_> {
    /// Numeric value of the input. Text is read whole, like a JavaScript
    /// `Number()` conversion: surrounding whitespace is ignored and blank text is 0.
    /// Returns NaN when the input has no numeric reading.
    pub fn to_number(self) -> f64 {
        match self {
            PageInput::Number(n) => n,
            PageInput::Text(s) => parse_number_text(s),
            PageInput::Missing => f64::NAN,
        }
    }
}

fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust accepts spellings like "inf" and "nan" that JavaScript does not. Both are
    // non-finite so they end up at the default page either way.
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates a requested page against `[1, MAX_PAGE]`, falling back to
/// [`DEFAULT_PAGE`] when it is missing, non-numeric, or out of range.
pub fn validate_page_number<'a>(page: impl Into<PageInput<'a>>) -> f64 {
    validate_page_number_within(page, DEFAULT_PAGE, MAX_PAGE)
}

/// Same as [`validate_page_number`] with explicit bounds.
///
/// In-range values are returned unchanged, fractional ones included.
pub fn validate_page_number_within<'a>(
    page: impl Into<PageInput<'a>>,
    default_page: u32,
    max_page: u32,
) -> f64 {
    let parsed = page.into().to_number();
    if !parsed.is_finite() || parsed < 1.0 || parsed > f64::from(max_page) {
        return f64::from(default_page);
    }
    parsed
}

/// Reads the leading integer of a `?page=` value: optional sign, then decimal
/// digits (or a `0x` hex literal). Trailing garbage is ignored, so `"2abc"` is 2.
/// Returns `None` when no digits lead the text.
pub fn parse_page_param(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let digits: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !c.is_digit(radix))
            .map_or(s.len(), |(i, _)| i);
        &s[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let value = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        u64::from_str_radix(digits, radix).ok()? as f64
    };
    Some(if negative { -value } else { value })
}

/// An item identifier as supplied by a caller: a numeric id or a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identifier<'a> {
    Id(i64),
    Name(&'a str),
}

impl From<i64> for Identifier<'_> {
    fn from(id: i64) -> Self {
        Identifier::Id(id)
    }
}

impl From<u32> for Identifier<'_> {
    fn from(id: u32) -> Self {
        Identifier::Id(i64::from(id))
    }
}

impl From<i32> for Identifier<'_> {
    fn from(id: i32) -> Self {
        Identifier::Id(i64::from(id))
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(name: &'a str) -> Self {
        Identifier::Name(name)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(name: &'a String) -> Self {
        Identifier::Name(name.as_str())
    }
}

/// Normalizes an identifier into the form the upstream keys lookups by:
/// ids become their decimal string, names are trimmed and lower-cased.
/// Numeric-looking text such as `"001"` is kept as text.
pub fn normalize_identifier<'a>(identifier: impl Into<Identifier<'a>>) -> String {
    match identifier.into() {
        Identifier::Id(id) => id.to_string(),
        Identifier::Name(name) => name.trim().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Page validation --

    #[test]
    fn page_valid_numbers() {
        assert_eq!(validate_page_number(1), 1.0);
        assert_eq!(validate_page_number("5"), 5.0);
        assert_eq!(validate_page_number(200), 200.0);
    }

    #[test]
    fn page_invalid_falls_back() {
        assert_eq!(validate_page_number(0), 1.0);
        assert_eq!(validate_page_number(201), 1.0);
        assert_eq!(validate_page_number("invalid"), 1.0);
        assert_eq!(validate_page_number(None::<i64>), 1.0);
        assert_eq!(validate_page_number(-3), 1.0);
        assert_eq!(validate_page_number(f64::INFINITY), 1.0);
        assert_eq!(validate_page_number(f64::NAN), 1.0);
    }

    #[test]
    fn page_blank_text_is_zero_and_falls_back() {
        assert_eq!(validate_page_number(""), 1.0);
        assert_eq!(validate_page_number("   "), 1.0);
    }

    #[test]
    fn page_text_whitespace_is_ignored() {
        assert_eq!(validate_page_number(" 7 "), 7.0);
        assert_eq!(validate_page_number("0x10"), 16.0);
        assert_eq!(validate_page_number("7abc"), 1.0);
    }

    #[test]
    fn page_custom_bounds() {
        assert_eq!(validate_page_number_within(0, 5, MAX_PAGE), 5.0);
        assert_eq!(validate_page_number_within(300, 1, 300), 300.0);
        assert_eq!(validate_page_number_within(301, 1, 300), 1.0);
    }

    #[test]
    fn page_fraction_is_kept() {
        assert_eq!(validate_page_number(2.5), 2.5);
        assert_eq!(validate_page_number("1.5"), 1.5);
        assert_eq!(validate_page_number(0.5), 1.0);
    }

    // -- Page query parameter --

    #[test]
    fn page_param_reads_leading_integer() {
        assert_eq!(parse_page_param("2"), Some(2.0));
        assert_eq!(parse_page_param("  3"), Some(3.0));
        assert_eq!(parse_page_param("2abc"), Some(2.0));
        assert_eq!(parse_page_param("2.9"), Some(2.0));
        assert_eq!(parse_page_param("-4"), Some(-4.0));
        assert_eq!(parse_page_param("0x1A"), Some(26.0));
    }

    #[test]
    fn page_param_without_digits() {
        assert_eq!(parse_page_param("abc"), None);
        assert_eq!(parse_page_param(""), None);
        assert_eq!(parse_page_param("-"), None);
        assert_eq!(parse_page_param("0x"), None);
    }

    // -- Identifier normalization --

    #[test]
    fn identifier_names() {
        assert_eq!(normalize_identifier("Pikachu"), "pikachu");
        assert_eq!(normalize_identifier("  Charizard  "), "charizard");
        assert_eq!(normalize_identifier("MR-MIME"), "mr-mime");
    }

    #[test]
    fn identifier_numbers() {
        assert_eq!(normalize_identifier(25), "25");
        assert_eq!(normalize_identifier(151u32), "151");
        assert_eq!(normalize_identifier("001"), "001");
    }

    #[test]
    fn identifier_is_idempotent() {
        let once = normalize_identifier(" Eevee ");
        assert_eq!(normalize_identifier(&once), once);
    }
}
