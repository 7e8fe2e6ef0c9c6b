use super::interface::{Language, TranslationRequest};

/// System and user instructions sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_instruction: String,
    pub user_instruction: String,
    pub source: Language,
    pub target: Language,
}

impl PromptPair {
    pub fn build(request: &TranslationRequest) -> Self {
        let (source, target) = request.direction.languages();
        Self {
            system_instruction: system_instruction(source, target),
            user_instruction: user_instruction(source, target, &request.text),
            source,
            target,
        }
    }
}

fn system_instruction(source: Language, target: Language) -> String {
    format!(
        "You are a professional {source}<->{target} translator. \
         Preserve numbers, code blocks, URLs, usernames, mentions, emojis, product names and formatting. \
         Do not add or omit meaning. \
         If the text is a list or has line breaks, keep them. \
         If the input already contains both languages, translate only the parts in {source}."
    )
}

fn user_instruction(source: Language, target: Language, text: &str) -> String {
    format!("Translate from {source} to {target}.\n\nINPUT:\n{text}")
}
