//! Response bodies accepted from the completion API.
//!
//! Three layouts carry the generated text, checked in this order:
//!
//! 1. `output[0].content[0].text`: the Responses API message item.
//! 2. `content[0].text`: a bare content array, as returned by older gateways.
//! 3. `output_text`: the flattened convenience field.
//!
//! Empty strings, `null`s and fields of the wrong type are treated as absent
//! so the next layout gets a chance.

use serde_json::Value;

/// Lookup paths, in priority order.
const CANDIDATES: [(ResponseShape, &str); 3] = [
    (ResponseShape::OutputContent, "/output/0/content/0/text"),
    (ResponseShape::Content, "/content/0/text"),
    (ResponseShape::OutputText, "/output_text"),
];

/// A decoded upstream body. Each layout is looked up on its own, so a `null` or
/// mistyped field only disqualifies that layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsesBody(Value);

/// Which layout the text was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    OutputContent,
    Content,
    OutputText,
}

impl ResponsesBody {
    /// Parse a raw body. Anything that is not JSON yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok().map(Self)
    }

    pub fn extract_text(&self) -> Option<(ResponseShape, &str)> {
        CANDIDATES.iter().find_map(|(shape, pointer)| {
            self.0
                .pointer(pointer)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(|text| (*shape, text))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Option<(ResponseShape, String)> {
        ResponsesBody::parse(raw)?
            .extract_text()
            .map(|(shape, text)| (shape, text.to_string()))
    }

    #[test]
    fn reads_nested_output_content() {
        let raw = r#"{
            "id": "resp_1",
            "object": "response",
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "output_text", "text": "Hello world", "annotations": [] }]
            }]
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputContent, "Hello world".to_string()))
        );
    }

    #[test]
    fn reads_bare_content_array() {
        let raw = r#"{ "content": [{ "type": "text", "text": "Merhaba dünya" }] }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::Content, "Merhaba dünya".to_string()))
        );
    }

    #[test]
    fn reads_output_text() {
        let raw = r#"{ "output_text": "Good morning" }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputText, "Good morning".to_string()))
        );
    }

    #[test]
    fn empty_candidates_fall_through() {
        let raw = r#"{
            "output": [{ "content": [{ "text": "" }] }],
            "content": [],
            "output_text": "fallback"
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputText, "fallback".to_string()))
        );
    }

    #[test]
    fn output_item_without_content_falls_through() {
        let raw = r#"{
            "output": [{ "type": "reasoning", "summary": [] }],
            "output_text": "İyi akşamlar"
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputText, "İyi akşamlar".to_string()))
        );
    }

    #[test]
    fn unrecognized_shapes_yield_nothing() {
        assert_eq!(extract(r#"{ "choices": [{ "message": { "content": "hi" } }] }"#), None);
        assert_eq!(extract(r#"{}"#), None);
        assert_eq!(extract("not json at all"), None);
        assert_eq!(extract(r#"{ "output": "wrong type" }"#), None);
        assert_eq!(extract(r#"[1, 2, 3]"#), None);
        assert_eq!(extract(r#"{ "output_text": 42 }"#), None);
    }

    #[test]
    fn null_output_falls_through_to_output_text() {
        assert_eq!(
            extract(r#"{ "output": null, "output_text": "Hello" }"#),
            Some((ResponseShape::OutputText, "Hello".to_string()))
        );
    }

    #[test]
    fn null_item_content_falls_through_to_output_text() {
        let raw = r#"{
            "output": [{ "type": "reasoning", "content": null }],
            "output_text": "Hello"
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputText, "Hello".to_string()))
        );
    }

    #[test]
    fn mistyped_fields_fall_through() {
        let raw = r#"{
            "output": "not an array",
            "content": [{ "text": 7 }],
            "output_text": "Hello"
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::OutputText, "Hello".to_string()))
        );

        let raw = r#"{
            "output": [{ "content": { "text": "object, not array" } }],
            "content": [{ "type": "text", "text": "Merhaba" }],
            "output_text": null
        }"#;
        assert_eq!(
            extract(raw),
            Some((ResponseShape::Content, "Merhaba".to_string()))
        );
    }
}
