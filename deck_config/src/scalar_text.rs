//! Lenient decoding for free-text manifest fields.
//!
//! The environment provider types values by their syntax, so
//! `DECK_GLOBAL__HEADER__TITLE=2024` arrives as an integer. Text fields read
//! through [`deserialize`] accept any scalar and keep its textual form.

use std::fmt;

use serde::Deserializer;
use serde::de::{Error, Visitor};

struct ScalarText;

impl Visitor<'_> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.to_owned())
    }

    fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_bool<E: Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }
}

/// Reads a string, accepting numbers and booleans as their display text.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Deserialize)]
    struct Titled {
        #[serde(deserialize_with = "super::deserialize")]
        title: String,
    }

    #[rstest]
    #[case::text(json!("Intro"), "Intro")]
    #[case::integer(json!(2024), "2024")]
    #[case::negative(json!(-3), "-3")]
    #[case::boolean(json!(true), "true")]
    #[case::float(json!(1.5), "1.5")]
    fn scalars_keep_their_text(#[case] title: Value, #[case] expected: &str) {
        let parsed: Result<Titled, _> = serde_json::from_value(json!({ "title": title }));
        assert_eq!(parsed.map(|t| t.title).ok().as_deref(), Some(expected));
    }

    #[test]
    fn tables_are_rejected() {
        let parsed = serde_json::from_value::<Titled>(json!({ "title": { "text": "x" } }));
        assert!(parsed.is_err());
    }
}
