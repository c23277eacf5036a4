//! Controller name normalization.
//!
//! Converts a human-readable type name into its canonical registry key:
//! `"AdminUsersController"` becomes `"admin_users"`, `"Admin::Users"`
//! becomes `"admin/users"`. The rules, in order:
//!
//! 1. Names already in canonical form (no ASCII uppercase, no hyphen, no
//!    `::`) are returned unchanged.
//! 2. One trailing `"Controller"` is stripped.
//! 3. `::` namespace separators become `/`.
//! 4. Runs matched by the acronym pattern collapse to a lowercase segment,
//!    preceded by an underscore when they follow an alphanumeric.
//! 5. An underscore is inserted between an uppercase/digit run and a
//!    following capitalized word (`"XMLParser"` → `"xml_parser"`), and
//!    between a lowercase/digit and a following uppercase.
//! 6. Hyphens become underscores and the result is lowercased.

use regex::Regex;
use std::sync::LazyLock;

static UPPER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("valid pattern"));

static LOWER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid pattern"));

/// Normalize a controller name into its registry key.
///
/// Uses no acronym pattern, so every camel-case boundary splits. Pure and
/// total: any printable input produces a key.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(underscore("FooBarController"), "foo_bar");
/// assert_eq!(underscore("Admin::Users"), "admin/users");
/// assert_eq!(underscore("already_canonical"), "already_canonical");
/// ```
pub fn underscore(name: &str) -> String {
    normalize(name, None)
}

/// Normalize a controller name, collapsing acronym runs matched by `acronyms`.
///
/// A match is honoured only at a word boundary or directly after an
/// alphanumeric, and only when not followed by a lowercase letter, so
/// `"RESTful"` is left for the plain boundary rules unless the pattern
/// covers the whole word.
pub fn underscore_with(name: &str, acronyms: &Regex) -> String {
    normalize(name, Some(acronyms))
}

fn normalize(name: &str, acronyms: Option<&Regex>) -> String {
    // Fast path: already a canonical key.
    if !name.contains("::") && !name.chars().any(|c| c.is_ascii_uppercase() || c == '-') {
        return name.to_string();
    }

    let name = name.strip_suffix("Controller").unwrap_or(name);

    let mut word = name.replace("::", "/");
    if let Some(acronyms) = acronyms {
        word = collapse_acronyms(&word, acronyms);
    }
    let word = UPPER_BOUNDARY.replace_all(&word, "${1}_${2}");
    let word = LOWER_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// Lowercase each honoured acronym match, prefixing an underscore when the
/// match directly follows an alphanumeric.
fn collapse_acronyms(word: &str, acronyms: &Regex) -> String {
    let mut out = String::with_capacity(word.len());
    let mut last = 0;

    for m in acronyms.find_iter(word) {
        let prev = word[..m.start()].chars().next_back();
        let next = word[m.end()..].chars().next();

        let after_alnum = prev.is_some_and(|c| c.is_ascii_alphanumeric());
        let at_boundary = prev.is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_');
        let ends_word = next.is_none_or(|c| !c.is_ascii_lowercase());

        if !ends_word || !(after_alnum || at_boundary) {
            continue;
        }

        out.push_str(&word[last..m.start()]);
        if after_alnum {
            out.push('_');
        }
        out.push_str(&m.as_str().to_lowercase());
        last = m.end();
    }

    out.push_str(&word[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_pass_through() {
        assert_eq!(underscore("hello"), "hello");
        assert_eq!(underscore("admin/users"), "admin/users");
        assert_eq!(underscore("foo_bar9"), "foo_bar9");
    }

    #[test]
    fn strips_controller_suffix() {
        assert_eq!(underscore("FooBarController"), "foo_bar");
        assert_eq!(underscore("HelloController"), "hello");
    }

    #[test]
    fn namespaces_become_path_segments() {
        assert_eq!(underscore("Admin::Users"), "admin/users");
        assert_eq!(underscore("Admin::UsersController"), "admin/users");
    }

    #[test]
    fn splits_uppercase_runs() {
        assert_eq!(underscore("XMLParser"), "xml_parser");
        assert_eq!(underscore("HTTPRequest"), "http_request");
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(underscore("foo-bar"), "foo_bar");
    }

    #[test]
    fn idempotent_on_canonical_output() {
        for name in ["FooBarController", "Admin::Users", "XMLParser", "a-b"] {
            let once = underscore(name);
            assert_eq!(underscore(&once), once);
        }
    }

    #[test]
    fn acronym_runs_collapse() {
        let acronyms = Regex::new("RESTful").unwrap();
        assert_eq!(underscore_with("RESTfulController", &acronyms), "restful");
        // Without the pattern, plain boundary rules apply.
        assert_eq!(underscore("RESTfulController"), "res_tful");
    }

    #[test]
    fn acronym_after_alphanumeric_gets_underscore() {
        let acronyms = Regex::new("API").unwrap();
        assert_eq!(underscore_with("OpenAPISpec", &acronyms), "open_api_spec");
    }

    #[test]
    fn acronym_followed_by_lowercase_is_skipped() {
        let acronyms = Regex::new("REST").unwrap();
        assert_eq!(underscore_with("RESTful", &acronyms), "res_tful");
    }
}
