//! Course code helpers
//!
//! Course codes are opaque identifiers such as `CS101` or `COMP 202`.
//! Equality is exact string equality after normalization (interior
//! whitespace removed). The validator here is the same one used elsewhere
//! in the system to reject free-text garbage, which is what lets the
//! selection resolver distinguish real courses from synthetic operator ids.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a course code: a 2-4 letter subject, an optional display space,
/// a 3-4 digit catalog number, and an optional short section suffix
/// (e.g., `D1`, `N2`).
static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,4} ?[0-9]{3,4}(?:[A-Za-z][0-9]?)?$")
        .expect("course code pattern is valid")
});

/// Normalize a course code by stripping interior whitespace
#[must_use]
pub fn normalize(code: &str) -> String {
    code.split_whitespace().collect()
}

/// Insert the display space between the subject and catalog number
/// (e.g., `COMP202` becomes `COMP 202`)
///
/// Codes that already contain a space, or have no digit portion, are
/// returned unchanged.
#[must_use]
pub fn add_space(code: &str) -> String {
    if code.contains(' ') {
        return code.to_string();
    }
    match code.find(|c: char| c.is_ascii_digit()) {
        Some(pos) if pos > 0 => format!("{} {}", &code[..pos], &code[pos..]),
        _ => code.to_string(),
    }
}

/// Convert a course code to a URL path segment (normalized, lowercased)
#[must_use]
pub fn to_url_param(code: &str) -> String {
    normalize(code).to_lowercase()
}

/// Check whether a string is a plausible course code
///
/// Operator-derived graph ids (sentinel-prefixed joins such as
/// `#CS101ORCS102`) fail this check by construction.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    COURSE_CODE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_interior_whitespace() {
        assert_eq!(normalize("COMP 202"), "COMP202");
        assert_eq!(normalize("CS101"), "CS101");
    }

    #[test]
    fn test_add_space_before_catalog_number() {
        assert_eq!(add_space("COMP202"), "COMP 202");
        assert_eq!(add_space("CS101"), "CS 101");
        assert_eq!(add_space("MATH 133"), "MATH 133");
    }

    #[test]
    fn test_to_url_param() {
        assert_eq!(to_url_param("COMP 202"), "comp202");
        assert_eq!(to_url_param("CS101"), "cs101");
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid("CS101"));
        assert!(is_valid("COMP202"));
        assert!(is_valid("COMP 202"));
        assert!(is_valid("MATH1342"));
        assert!(is_valid("COMP202D1"));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(!is_valid(""));
        assert!(!is_valid("AND"));
        assert!(!is_valid("data structures"));
        // Operator-derived ids must fail, sentinel or not
        assert!(!is_valid("#CS101ORCS102"));
        assert!(!is_valid("CS101ORCS102"));
        assert!(!is_valid("CS101ANDCS102"));
    }
}
