use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text for keyword matching.
///
/// Lower-cases, decomposes (NFD), drops combining marks and trims, so that
/// "MÜLLER" and "muller" compare equal. Absent or empty input yields "".
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   ")), "");
    }

    #[test]
    fn test_case_and_diacritics() {
        assert_eq!(normalize(Some("MÜLLER")), normalize(Some("muller")));
        assert_eq!(normalize(Some("Café Crème")), "cafe creme");
        assert_eq!(normalize(Some("Geschäftsführer")), "geschaftsfuhrer");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize(Some("  Head of Sales \n")), "head of sales");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        assert_eq!(normalize(Some("Head  of Sales")), "head  of sales");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "MÜLLER",
            "  Ångström Labs ",
            "Head of R&D",
            "ÉCOLE",
            "straße",
            "İstanbul",
            "",
        ];
        for s in samples {
            let once = normalize(Some(s));
            assert_eq!(normalize(Some(&once)), once, "not idempotent for {:?}", s);
        }
    }
}
