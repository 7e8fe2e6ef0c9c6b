use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Turkish,
    English,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Turkish => "Turkish",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Translation direction accepted on the wire as `tr2en` or `en2tr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "tr2en")]
    Tr2En,
    #[serde(rename = "en2tr")]
    En2Tr,
}

impl Direction {
    /// `(source, target)` languages.
    pub fn languages(&self) -> (Language, Language) {
        match self {
            Direction::Tr2En => (Language::Turkish, Language::English),
            Direction::En2Tr => (Language::English, Language::Turkish),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Tr2En => "tr2en",
            Direction::En2Tr => "en2tr",
        }
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr2en" => Ok(Direction::Tr2En),
            "en2tr" => Ok(Direction::En2Tr),
            _ => Err(TranslateError::invalid_input(
                "direction must be one of: tr2en, en2tr",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: Direction,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
    pub model: String,
}

impl TranslationRequest {
    /// Validate a decoded JSON body.
    ///
    /// `text` must be a string with non-whitespace content and `direction` one of
    /// the known values. A non-string `model` is ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, TranslateError> {
        if !payload.is_object() {
            return Err(TranslateError::invalid_input("request body must be a JSON object"));
        }

        let text = payload
            .get("text")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TranslateError::invalid_input("text must be a non-empty string"))?;

        let direction = payload
            .get("direction")
            .and_then(Value::as_str)
            .ok_or_else(|| TranslateError::invalid_input("direction must be one of: tr2en, en2tr"))?
            .parse::<Direction>()?;

        let model = payload
            .get("model")
            .and_then(Value::as_str)
            .map(|m| m.to_string());

        Ok(Self {
            text: text.to_string(),
            direction,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_invalid(payload: Value) {
        match TranslationRequest::from_payload(&payload) {
            Err(TranslateError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for {payload}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_payload() {
        let request = TranslationRequest::from_payload(&json!({
            "text": "  Merhaba dünya  ",
            "direction": "tr2en",
            "model": "gpt-4o"
        }))
        .unwrap();

        assert_eq!(request.text, "  Merhaba dünya  ");
        assert_eq!(request.direction, Direction::Tr2En);
        assert_eq!(request.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn rejects_missing_or_blank_text() {
        assert_invalid(json!({ "direction": "tr2en" }));
        assert_invalid(json!({ "text": "", "direction": "tr2en" }));
        assert_invalid(json!({ "text": " \n\t ", "direction": "en2tr" }));
        assert_invalid(json!({ "text": 42, "direction": "en2tr" }));
        assert_invalid(json!({ "text": ["hello"], "direction": "en2tr" }));
    }

    #[test]
    fn rejects_unknown_direction() {
        assert_invalid(json!({ "text": "hello" }));
        assert_invalid(json!({ "text": "hello", "direction": "en2de" }));
        assert_invalid(json!({ "text": "hello", "direction": "TR2EN" }));
        assert_invalid(json!({ "text": "hello", "direction": 1 }));
    }

    #[test]
    fn rejects_non_object_body() {
        assert_invalid(json!("hello"));
        assert_invalid(json!(null));
    }

    #[test]
    fn non_string_model_is_ignored() {
        let request = TranslationRequest::from_payload(&json!({
            "text": "hello",
            "direction": "en2tr",
            "model": 7
        }))
        .unwrap();
        assert!(request.model.is_none());
    }

    #[test]
    fn direction_maps_to_language_pair() {
        assert_eq!(
            Direction::Tr2En.languages(),
            (Language::Turkish, Language::English)
        );
        assert_eq!(
            Direction::En2Tr.languages(),
            (Language::English, Language::Turkish)
        );
        assert_eq!(Language::Turkish.label(), "Turkish");
        assert_eq!(Language::English.to_string(), "English");
    }
}
