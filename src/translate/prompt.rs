use serde::Serialize;

use crate::config::OutputFormat;

const JSON_INSTRUCTION: &str = "You are an expert translator who translates text from english to hindi and only return translated text in json format.";
const TEXT_INSTRUCTION: &str = "You are an expert translator who translates text from english to hindi and only return translated text";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Build the two-message prompt: fixed instruction, then the user text verbatim
pub fn build_messages(format: OutputFormat, input_str: &str) -> Vec<Message> {
    let instruction = match format {
        OutputFormat::Json => Message {
            role: "developer".to_string(),
            content: JSON_INSTRUCTION.to_string(),
        },
        OutputFormat::Text => Message {
            role: "system".to_string(),
            content: TEXT_INSTRUCTION.to_string(),
        },
    };

    vec![
        instruction,
        Message {
            role: "user".to_string(),
            content: input_str.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_format_uses_developer_role() {
        let messages = build_messages(OutputFormat::Json, "Hello");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "developer");
        assert!(messages[0].content.ends_with("in json format."));
        assert_eq!(messages[1], Message { role: "user".into(), content: "Hello".into() });
    }

    #[test]
    fn text_format_uses_system_role() {
        let messages = build_messages(OutputFormat::Text, "");
        assert_eq!(messages[0].role, "system");
        assert!(!messages[0].content.contains("json"));
        assert_eq!(messages[1].content, "");
    }
}
