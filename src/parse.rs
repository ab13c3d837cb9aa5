use std::fmt;

/// The three segments of a default-format ID.
///
/// Format: `<PREFIX>-<NNNN>-<STAR>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParts {
    pub prefix: String,
    pub hash: String,
    pub star_name: String,
}

impl IdParts {
    /// The hash field as a number (0..=9999), or `None` if `hash` isn't
    /// exactly four ASCII digits.
    pub fn hash_number(&self) -> Option<u32> {
        if !is_hash_field(&self.hash) {
            return None;
        }
        self.hash.parse().ok()
    }

    /// Formats these parts back into an ID string.
    pub fn to_id_string(&self) -> String {
        format!("{}-{}-{}", self.prefix, self.hash, self.star_name)
    }
}

impl fmt::Display for IdParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_id_string())
    }
}

fn is_hash_field(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_prefix_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

/// Splits `id` at its last two dashes into `(prefix, hash, star)`.
///
/// Checks the shape `^[A-Z0-9_-]+-\d{4}-[A-Z]+$`. The star segment holds no
/// dash and neither does the hash, so the prefix is everything before the
/// second-to-last dash and may itself contain dashes.
fn split_default(id: &str) -> Option<(&str, &str, &str)> {
    let mut segments = id.rsplitn(3, '-');
    let star = segments.next()?;
    let hash = segments.next()?;
    let prefix = segments.next()?;

    if star.is_empty() || !star.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    if !is_hash_field(hash) {
        return None;
    }
    if prefix.is_empty() || !prefix.chars().all(is_prefix_char) {
        return None;
    }
    Some((prefix, hash, star))
}

/// Returns true if `id` has the default uppercase `PREFIX-NNNN-STAR` shape.
///
/// This is a narrow check: IDs generated with `Case::Lower`, `Case::Mixed`,
/// a custom format, length normalization, or special characters are valid
/// output but will not pass it.
pub fn validate_format(id: &str) -> bool {
    split_default(id).is_some()
}

/// Splits a default-format ID into its parts, or `None` if
/// [`validate_format`] would reject it.
pub fn extract_parts(id: &str) -> Option<IdParts> {
    let (prefix, hash, star) = split_default(id)?;
    Some(IdParts {
        prefix: prefix.to_string(),
        hash: hash.to_string(),
        star_name: star.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== validate_format ==========

    #[test]
    fn test_default_id_valid() {
        assert!(validate_format("STAR-2322-ALTAIR"));
        assert!(validate_format("COSMIC-0000-SIRIUS"));
    }

    #[test]
    fn test_prefix_with_dashes_and_underscores() {
        assert!(validate_format("MY-PROJ_2-0120-VEGA"));
        assert!(validate_format("-0120-VEGA-0120-VEGA"));
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(!validate_format("star-2322-altair"));
        assert!(!validate_format("sTaR-2322-aLtAiR"));
        assert!(!validate_format("STAR-2322-Altair"));
    }

    #[test]
    fn test_hash_must_be_four_digits() {
        assert!(!validate_format("STAR-232-ALTAIR"));
        assert!(!validate_format("STAR-23222-ALTAIR"));
        assert!(!validate_format("STAR-23A2-ALTAIR"));
    }

    #[test]
    fn test_missing_segments() {
        assert!(!validate_format(""));
        assert!(!validate_format("STAR"));
        assert!(!validate_format("2322-ALTAIR"));
        assert!(!validate_format("-2322-ALTAIR"));
        assert!(!validate_format("STAR-2322-"));
    }

    #[test]
    fn test_star_with_digits_or_symbols_rejected() {
        assert!(!validate_format("STAR-2322-ALTAIR2"));
        assert!(!validate_format("STAR-2322-ALT@IR"));
        assert!(!validate_format("STAR-2322-ALTAIR "));
    }

    #[test]
    fn test_custom_format_rejected() {
        assert!(!validate_format("SIRIUS_0120"));
    }

    // ========== extract_parts ==========

    #[test]
    fn test_extract_parts() {
        let parts = extract_parts("STAR-2322-ALTAIR").unwrap();
        assert_eq!(parts.prefix, "STAR");
        assert_eq!(parts.hash, "2322");
        assert_eq!(parts.star_name, "ALTAIR");
        assert_eq!(parts.hash_number(), Some(2322));
    }

    #[test]
    fn test_extract_parts_hyphenated_prefix() {
        let parts = extract_parts("MY-PROJ-0007-VEGA").unwrap();
        assert_eq!(parts.prefix, "MY-PROJ");
        assert_eq!(parts.hash, "0007");
        assert_eq!(parts.hash_number(), Some(7));
        assert_eq!(parts.star_name, "VEGA");
    }

    #[test]
    fn test_extract_parts_invalid() {
        assert_eq!(extract_parts("star-2322-altair"), None);
        assert_eq!(extract_parts("not an id"), None);
    }

    #[test]
    fn test_hash_number_hand_built_parts() {
        let parts = IdParts {
            prefix: "STAR".to_string(),
            hash: "12-!".to_string(),
            star_name: "VEGA".to_string(),
        };
        assert_eq!(parts.hash_number(), None);

        let long = IdParts {
            hash: "99999999999".to_string(),
            ..parts.clone()
        };
        assert_eq!(long.hash_number(), None);

        let short = IdParts {
            hash: "12".to_string(),
            ..parts
        };
        assert_eq!(short.hash_number(), None);
    }

    #[test]
    fn test_parts_display_roundtrip() {
        let id = "COSMIC-0120-SIRIUS";
        let parts = extract_parts(id).unwrap();
        assert_eq!(parts.to_string(), id);
        assert_eq!(parts.to_id_string(), id);
    }
}
