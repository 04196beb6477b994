use serde::Serialize;

/// Text element inside a block, rendered as Slack `mrkdwn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextElement {
    Mrkdwn { text: String },
}

impl TextElement {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextElement::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TextElement::Mrkdwn { text } => text,
        }
    }
}

/// One unit of rendered output, serialized as a Slack Block Kit block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresentationBlock {
    /// Compact line made of small text elements
    Context { elements: Vec<TextElement> },
    /// Full message section
    Section { text: TextElement },
}

impl PresentationBlock {
    pub fn context<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PresentationBlock::Context {
            elements: texts.into_iter().map(TextElement::mrkdwn).collect(),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        PresentationBlock::Section {
            text: TextElement::mrkdwn(text),
        }
    }

    /// All text carried by the block, in order.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            PresentationBlock::Context { elements } => {
                elements.iter().map(TextElement::text).collect()
            }
            PresentationBlock::Section { text } => vec![text.text()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    InChannel,
}

/// Response returned to the chat surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse<B> {
    pub response_type: ResponseType,
    pub blocks: Vec<B>,
}

impl<B> CommandResponse<B> {
    pub fn in_channel(blocks: Vec<B>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_block_serializes_as_block_kit() {
        let block = PresentationBlock::context(["example.com", "Type: *A*"]);

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "context",
                "elements": [
                    {"type": "mrkdwn", "text": "example.com"},
                    {"type": "mrkdwn", "text": "Type: *A*"}
                ]
            })
        );
    }

    #[test]
    fn test_section_block_serializes_as_block_kit() {
        let block = PresentationBlock::section("ERROR: boom");

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "ERROR: boom"}})
        );
        assert_eq!(block.texts(), vec!["ERROR: boom"]);
    }

    #[test]
    fn test_command_response_is_in_channel() {
        let response = CommandResponse::in_channel(vec![PresentationBlock::context(["x"])]);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["response_type"], "in_channel");
        assert_eq!(value["blocks"].as_array().unwrap().len(), 1);
    }
}
