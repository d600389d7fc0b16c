//! String transforms.
//!
//! Case conversion is ASCII-only: bytes outside the ASCII range pass through
//! unchanged, so `to_upper(to_lower(s)) == to_upper(s)` holds for every input.

/// Characters stripped by [`trim`].
const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Converts ASCII letters to uppercase.
///
/// # Examples
///
/// ```
/// use ks_core::utils::string::to_upper;
///
/// assert_eq!(to_upper("Hello, World"), "HELLO, WORLD");
/// ```
#[inline]
#[must_use]
pub fn to_upper(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Converts ASCII letters to lowercase.
///
/// # Examples
///
/// ```
/// use ks_core::utils::string::to_lower;
///
/// assert_eq!(to_lower("Hello, World"), "hello, world");
/// ```
#[inline]
#[must_use]
pub fn to_lower(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Splits `input` on `delimiter`.
///
/// Interior empty segments are kept. A trailing delimiter does not produce a
/// trailing empty segment, and an empty input yields no segments at all.
///
/// # Examples
///
/// ```
/// use ks_core::utils::string::split;
///
/// assert_eq!(split("a,b,c", ','), vec!["a", "b", "c"]);
/// assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
/// assert_eq!(split("a,b,", ','), vec!["a", "b"]);
/// assert!(split("", ',').is_empty());
/// ```
#[must_use]
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let body = input.strip_suffix(delimiter).unwrap_or(input);
    body.split(delimiter).map(str::to_owned).collect()
}

/// Joins `parts` with `delimiter` between each pair.
///
/// # Examples
///
/// ```
/// use ks_core::utils::string::join;
///
/// assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
/// assert_eq!(join::<&str>(&[], ","), "");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut out = String::from(first.as_ref());
    for part in iter {
        out.push_str(delimiter);
        out.push_str(part.as_ref());
    }
    out
}

/// Strips leading and trailing spaces, tabs, and line breaks.
#[inline]
#[must_use]
pub fn trim(input: &str) -> &str {
    input.trim_matches(TRIM_CHARS.as_slice())
}

/// Reverses `input` character by character.
///
/// # Examples
///
/// ```
/// use ks_core::utils::string::reverse;
///
/// assert_eq!(reverse("hello"), "olleh");
/// ```
#[inline]
#[must_use]
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_upper("hello"), "HELLO");
        assert_eq!(to_lower("HELLO"), "hello");
        assert_eq!(to_upper("MiXeD 123!"), "MIXED 123!");
        assert_eq!(to_upper(""), "");
    }

    #[test]
    fn test_upper_of_lower_equals_upper() {
        for s in ["", "abc", "ABC", "aBc-123_XyZ", "  spaced Out  ", "ümlaut"] {
            assert_eq!(to_upper(&to_lower(s)), to_upper(s), "input: {s:?}");
        }
    }

    #[test]
    fn test_case_conversion_leaves_non_ascii() {
        assert_eq!(to_upper("ä"), "ä");
        assert_eq!(to_lower("Ä"), "Ä");
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(split("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split("single", ','), vec!["single"]);
    }

    #[test]
    fn test_split_edge_cases() {
        assert!(split("", ',').is_empty());
        assert_eq!(split(",", ','), vec![""]);
        assert_eq!(split(",a", ','), vec!["", "a"]);
        assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split("a,b,", ','), vec!["a", "b"]);
        assert_eq!(split("a,,", ','), vec!["a", ""]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["a", "b", "c"], ","), "a,b,c");
        assert_eq!(join(&["only"], ","), "only");
        assert_eq!(join::<String>(&[], ","), "");
        assert_eq!(join(&["", ""], "-"), "-");
    }

    #[test]
    fn test_split_join_round_trip() {
        for s in ["a,b,c", "one", "x,,y", ",lead"] {
            assert_eq!(join(&split(s, ','), ","), s);
        }
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  padded\t\r\n"), "padded");
        assert_eq!(trim("inner  space"), "inner  space");
        assert_eq!(trim(" \t "), "");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("Parallel Test Data"), "ataD tseT lellaraP");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("añb"), "bña");
    }
}
