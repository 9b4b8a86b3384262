use serde::{Deserialize, Serialize};

/// Position of an affix relative to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedWordKind {
    Prefix,
    Suffix,
}

impl RelatedWordKind {
    /// Read an upstream `type` value. Models occasionally emit values
    /// outside the contract; anything that is not exactly "prefix" or
    /// "suffix" reads as a prefix rather than failing the whole response.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "suffix" => Self::Suffix,
            _ => Self::Prefix,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }
}

/// A derived word as reported by the root resolver, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWordDraft {
    /// The affix text itself, e.g. "trans" or "able".
    pub affix: String,
    pub kind: RelatedWordKind,
    /// The resulting word, e.g. "transport".
    pub word: String,
}

/// A related word carrying its definition, example sentence and display
/// color. Serializes to the field names the card UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRelatedWord {
    #[serde(rename = "prefixOrSuffix")]
    pub affix: String,
    #[serde(rename = "type")]
    pub kind: RelatedWordKind,
    pub word: String,
    pub definition: String,
    pub example: String,
    pub color: &'static str,
}

/// Final result for one query: the root, its meaning, and the enriched
/// related words in resolver order. The UI steps through the list
/// sequentially, so order is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRootResult {
    pub root: String,
    pub root_meaning: String,
    pub related_words: Vec<EnrichedRelatedWord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_coercion_is_total() {
        assert_eq!(RelatedWordKind::from_wire("prefix"), RelatedWordKind::Prefix);
        assert_eq!(RelatedWordKind::from_wire("suffix"), RelatedWordKind::Suffix);
        assert_eq!(RelatedWordKind::from_wire("infix"), RelatedWordKind::Prefix);
        assert_eq!(RelatedWordKind::from_wire("SUFFIX"), RelatedWordKind::Prefix);
        assert_eq!(RelatedWordKind::from_wire(""), RelatedWordKind::Prefix);
    }

    #[test]
    fn kind_serializes_to_its_wire_name() {
        for kind in [RelatedWordKind::Prefix, RelatedWordKind::Suffix] {
            let serialized = serde_json::to_string(&kind).unwrap();
            assert_eq!(serialized, format!("\"{}\"", kind.as_str()));
            // wire name round-trips through from_wire
            assert_eq!(RelatedWordKind::from_wire(kind.as_str()), kind);
        }
    }
}
