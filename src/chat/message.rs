//! Chat card message types
//!
//! Mirrors the chat platform's card schema: a message holds cards, cards
//! hold sections, sections hold widgets. Widgets are polymorphic on the
//! wire (`{"textParagraph": {...}}`, `{"buttons": [...]}`,
//! `{"keyValue": {...}}`), which serde's externally tagged enums produce
//! directly.

use serde::Serialize;

/// Top-level outbound message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Plain text shown above the cards, used for the mention marker
    pub text: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub widgets: Vec<Widget>,
}

impl Section {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }
}

/// A single visual element inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    TextParagraph(TextParagraph),
    Buttons(Vec<Button>),
    KeyValue(KeyValue),
}

impl Widget {
    pub fn text(text: impl Into<String>) -> Self {
        Widget::TextParagraph(TextParagraph { text: text.into() })
    }

    /// Single text button opening `url`
    pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Widget::Buttons(vec![Button::TextButton(TextButton {
            text: label.into(),
            on_click: OnClick {
                open_link: OpenLink { url: url.into() },
            },
        })])
    }

    /// Labelled value row with multi-line content enabled
    pub fn key_value(label: impl Into<String>, content: impl Into<String>) -> Self {
        Widget::KeyValue(KeyValue {
            top_label: label.into(),
            content: content.into(),
            content_multiline: true,
        })
    }
}

/// Text block; accepts the platform's limited HTML markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextParagraph {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Button {
    TextButton(TextButton),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextButton {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenLink {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    pub top_label: String,
    pub content: String,
    pub content_multiline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_wire_shapes() {
        let widgets = vec![
            Widget::text("hello"),
            Widget::link_button("URL", "https://example.com/i/1"),
            Widget::key_value("State", "open"),
        ];

        let expected = json!([
            { "textParagraph": { "text": "hello" } },
            { "buttons": [
                { "textButton": {
                    "text": "URL",
                    "onClick": { "openLink": { "url": "https://example.com/i/1" } }
                } }
            ] },
            { "keyValue": {
                "topLabel": "State",
                "content": "open",
                "contentMultiline": true
            } }
        ]);

        assert_eq!(serde_json::to_value(&widgets).unwrap(), expected);
    }
}
