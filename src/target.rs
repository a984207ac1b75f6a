//! Outbound URL construction for the requisitoriados listing.
//!
//! The upstream site exposes name searches as a path segment of the form
//! `N-<query>-<token>`. Everything here is a pure function of the inbound
//! query, so the same `q` always maps to the same target.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Listing endpoint every lookup is sent to.
pub const BASE_URL: &str = "https://recompensas.pe/requisitoriados/list/N-";

/// Static token the upstream expects after the encoded query.
pub const TOKEN_SUFFIX: &str = "BVQbU1vEVO";

/// URI component set: escapes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trims and lower-cases the raw query. Returns `None` when nothing is left.
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Percent-encodes a normalized query as a single path component.
pub fn encode_component(query: &str) -> String {
    utf8_percent_encode(query, COMPONENT).to_string()
}

/// Builds the full outbound URL for an already normalized query.
pub fn build_target(normalized: &str) -> String {
    format!(
        "{BASE_URL}{}-{TOKEN_SUFFIX}",
        encode_component(normalized)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rejects_missing_and_blank() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some("")), None);
        assert_eq!(normalize_query(Some("   \t\n ")), None);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(
            normalize_query(Some("  William Peter LOAYZA ")),
            Some("william peter loayza".to_string())
        );
        assert_eq!(normalize_query(Some("  ÑOÑO  ")), Some("ñoño".to_string()));
    }

    #[test]
    fn spaces_encode_as_percent_twenty() {
        assert_eq!(encode_component("juan perez"), "juan%20perez");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_component("o'brien-(jr)_x.y!~*"), "o'brien-(jr)_x.y!~*");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a/b?c&d=e#f+g"), "a%2Fb%3Fc%26d%3De%23f%2Bg");
        assert_eq!(encode_component("50%"), "50%25");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        assert_eq!(encode_component("ñoño"), "%C3%B1o%C3%B1o");
    }

    #[test]
    fn target_for_two_word_name() {
        let query = normalize_query(Some("Juan Perez")).unwrap();
        assert_eq!(
            build_target(&query),
            "https://recompensas.pe/requisitoriados/list/N-juan%20perez-BVQbU1vEVO"
        );
    }

    #[test]
    fn target_for_accented_name() {
        let query = normalize_query(Some("  ÑOÑO  ")).unwrap();
        assert_eq!(
            build_target(&query),
            "https://recompensas.pe/requisitoriados/list/N-%C3%B1o%C3%B1o-BVQbU1vEVO"
        );
    }

    #[test]
    fn target_is_deterministic() {
        let a = build_target(&normalize_query(Some(" Mamani ")).unwrap());
        let b = build_target(&normalize_query(Some("MAMANI")).unwrap());
        assert_eq!(a, b);
        assert!(a.starts_with(BASE_URL));
        assert!(a.ends_with(&format!("-{TOKEN_SUFFIX}")));
    }
}
