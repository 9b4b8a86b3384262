use unicode_normalization::UnicodeNormalization;

/// Normalize a query word before validation.
pub fn normalize_query(word: &str) -> String {
    let text = word.trim();

    if text.is_empty() {
        return String::new();
    }

    // Unicode normalization (NFKC), then re-trim in case normalization
    // exposed surrounding whitespace
    text.nfkc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_normalizes() {
        assert_eq!(normalize_query("  transport \n"), "transport");
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   \t "), "");
        // fullwidth latin normalizes to ascii
        assert_eq!(normalize_query("ｐｏｒｔ"), "port");
    }
}
