use serde::Deserialize;

use crate::WordSense;

#[derive(Deserialize)]
pub(crate) struct DictEntry {
    #[serde(default)]
    pub meanings: Vec<DictMeaning>,
}

#[derive(Deserialize)]
pub(crate) struct DictMeaning {
    #[serde(default)]
    pub definitions: Vec<DictDefinition>,
}

#[derive(Deserialize)]
pub(crate) struct DictDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// First entry, first meaning, first definition. The example comes from
/// the first definition in that same meaning that carries a non-empty one.
pub(crate) fn leading_sense(entries: &[DictEntry]) -> Option<WordSense> {
    let meaning = entries.first()?.meanings.first()?;
    let definition = meaning.definitions.first()?.definition.clone();
    let example = meaning.definitions.iter().find_map(|d| {
        d.example
            .as_deref()
            .filter(|example| !example.is_empty())
            .map(str::to_string)
    });

    Some(WordSense {
        definition,
        example,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<DictEntry> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn takes_the_first_definition_and_the_first_example_in_the_meaning() {
        let entries = parse(
            r#"[
                {
                    "word": "transport",
                    "meanings": [
                        {
                            "partOfSpeech": "verb",
                            "definitions": [
                                { "definition": "To carry or bear from one place to another." },
                                {
                                    "definition": "To deport to a penal colony.",
                                    "example": "He was transported to Australia."
                                }
                            ]
                        },
                        {
                            "partOfSpeech": "noun",
                            "definitions": [
                                { "definition": "A vehicle.", "example": "wrong meaning group" }
                            ]
                        }
                    ]
                },
                { "word": "transport", "meanings": [] }
            ]"#,
        );

        let sense = leading_sense(&entries).unwrap();
        assert_eq!(sense.definition, "To carry or bear from one place to another.");
        assert_eq!(
            sense.example.as_deref(),
            Some("He was transported to Australia.")
        );
    }

    #[test]
    fn no_example_in_the_meaning_yields_none() {
        let entries = parse(
            r#"[
                {
                    "meanings": [
                        { "definitions": [{ "definition": "To carry." }] }
                    ]
                }
            ]"#,
        );

        let sense = leading_sense(&entries).unwrap();
        assert_eq!(sense.definition, "To carry.");
        assert_eq!(sense.example, None);
    }

    #[test]
    fn empty_examples_do_not_count() {
        let entries = parse(
            r#"[
                {
                    "meanings": [
                        {
                            "definitions": [
                                { "definition": "To carry.", "example": "" },
                                { "definition": "To haul.", "example": "They hauled it away." }
                            ]
                        }
                    ]
                }
            ]"#,
        );

        let sense = leading_sense(&entries).unwrap();
        assert_eq!(sense.example.as_deref(), Some("They hauled it away."));
    }

    #[test]
    fn degenerate_shapes_yield_no_sense() {
        assert!(leading_sense(&parse("[]")).is_none());
        assert!(leading_sense(&parse(r#"[{ "meanings": [] }]"#)).is_none());
        assert!(leading_sense(&parse(r#"[{ "meanings": [{ "definitions": [] }] }]"#)).is_none());
    }
}
