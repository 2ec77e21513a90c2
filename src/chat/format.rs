//! Incident to chat card formatting

use super::message::{Card, ChatMessage, Section, Widget};
use crate::incident::Incident;

/// Mention marker that pings every member of the space
pub const MENTION_ALL: &str = "<users/all>";

/// Condition name prefix that marks an incident as dangerous
pub const DANGER_PREFIX: &str = "[DANGER]";

/// Placeholder shown for an empty resource id
pub const EMPTY_RESOURCE_ID: &str = "-";

/// Severity bucket, decides the header color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Danger,
    Warn,
    Health,
}

impl AlertLevel {
    /// Classify an incident.
    ///
    /// Conditions prefixed with `[DANGER]` escalate from warn to danger.
    /// A closed incident is always rendered healthy, even when its
    /// condition is a danger one.
    pub fn of(incident: &Incident) -> Self {
        let mut level = AlertLevel::Warn;
        if incident.condition_name.starts_with(DANGER_PREFIX) {
            level = AlertLevel::Danger;
        }
        if incident.is_closed() {
            level = AlertLevel::Health;
        }
        level
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlertLevel::Danger => "#fc2f2f",
            AlertLevel::Warn => "#ffcc14",
            AlertLevel::Health => "#27d871",
        }
    }
}

/// Mention text for an incident.
///
/// Every level currently broadcasts to the whole space.
pub fn mention(_incident: &Incident) -> &'static str {
    MENTION_ALL
}

/// Colored `"<policy> <condition>"` header line
pub fn header_text(incident: &Incident, level: AlertLevel) -> String {
    format!(
        "<font color=\"{}\">{} {}</font>",
        level.color(),
        incident.policy_name,
        incident.condition_name
    )
}

pub fn display_resource_id(incident: &Incident) -> &str {
    if incident.resource_id.is_empty() {
        EMPTY_RESOURCE_ID
    } else {
        &incident.resource_id
    }
}

/// Build the card message for an incident: a header section with the
/// colored title and a link button, then a key/value section with the
/// state and resource details.
pub fn build_message(incident: &Incident) -> ChatMessage {
    let level = AlertLevel::of(incident);

    let header = Section::new(vec![
        Widget::text(header_text(incident, level)),
        Widget::link_button("URL", incident.url.as_str()),
    ]);

    let details = Section::new(vec![
        Widget::key_value("State", incident.state.as_str()),
        Widget::key_value("Resource ID", display_resource_id(incident)),
        Widget::key_value("Resource Name", incident.resource_name.as_str()),
    ]);

    ChatMessage {
        text: mention(incident).to_string(),
        cards: vec![Card {
            sections: vec![header, details],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn incident(state: &str, condition: &str, resource_id: &str) -> Incident {
        Incident {
            incident_id: "f2e08c333dc64cb09f75eaab355393bz".to_string(),
            resource_id: resource_id.to_string(),
            resource_name: "webserver-85".to_string(),
            state: state.to_string(),
            started_at: Some(1385085727),
            ended_at: None,
            policy_name: "Webserver Health".to_string(),
            condition_name: condition.to_string(),
            url: "https://app.google.stackdriver.com/incidents/f333dc64z".to_string(),
            summary: "CPU for webserver-85 is above the threshold".to_string(),
        }
    }

    #[test]
    fn test_level_warn_by_default() {
        for state in ["open", "acknowledged", ""] {
            for condition in ["CPU usage", "", " [DANGER] leading space", "[danger] lower"] {
                let level = AlertLevel::of(&incident(state, condition, "i-1"));
                assert_eq!(level, AlertLevel::Warn, "{state:?} / {condition:?}");
                assert_eq!(level.color(), "#ffcc14");
            }
        }
    }

    #[test]
    fn test_level_danger_prefix() {
        for condition in ["[DANGER] CPU usage", "[DANGER]", "[DANGER]disk"] {
            let level = AlertLevel::of(&incident("open", condition, "i-1"));
            assert_eq!(level, AlertLevel::Danger);
            assert_eq!(level.color(), "#fc2f2f");
        }
    }

    #[test]
    fn test_closed_overrides_danger() {
        for condition in ["CPU usage", "[DANGER] CPU usage", ""] {
            let level = AlertLevel::of(&incident("closed", condition, "i-1"));
            assert_eq!(level, AlertLevel::Health);
            assert_eq!(level.color(), "#27d871");
        }
        // Only the exact state string counts as closed
        let level = AlertLevel::of(&incident("Closed", "[DANGER] CPU usage", "i-1"));
        assert_eq!(level, AlertLevel::Danger);
    }

    #[test]
    fn test_resource_id_placeholder() {
        assert_eq!(display_resource_id(&incident("open", "x", "")), "-");
        assert_eq!(
            display_resource_id(&incident("open", "x", "i-4a266a2d")),
            "i-4a266a2d"
        );
        assert_eq!(display_resource_id(&incident("open", "x", " ")), " ");
    }

    #[test]
    fn test_header_text() {
        let open = incident("open", "CPU usage", "i-1");
        assert_eq!(
            header_text(&open, AlertLevel::of(&open)),
            "<font color=\"#ffcc14\">Webserver Health CPU usage</font>"
        );
    }

    #[test]
    fn test_mention_is_broadcast() {
        assert_eq!(mention(&incident("open", "CPU usage", "")), "<users/all>");
        assert_eq!(
            mention(&incident("open", "[DANGER] CPU usage", "")),
            "<users/all>"
        );
        assert_eq!(mention(&incident("closed", "CPU usage", "")), "<users/all>");
    }

    #[test]
    fn test_build_message_open_danger_without_resource() {
        let message = build_message(&incident("open", "[DANGER] CPU usage", ""));

        let expected = json!({
            "text": "<users/all>",
            "cards": [{
                "sections": [
                    { "widgets": [
                        { "textParagraph": {
                            "text": "<font color=\"#fc2f2f\">Webserver Health [DANGER] CPU usage</font>"
                        } },
                        { "buttons": [{ "textButton": {
                            "text": "URL",
                            "onClick": { "openLink": {
                                "url": "https://app.google.stackdriver.com/incidents/f333dc64z"
                            } }
                        } }] }
                    ] },
                    { "widgets": [
                        { "keyValue": { "topLabel": "State", "content": "open", "contentMultiline": true } },
                        { "keyValue": { "topLabel": "Resource ID", "content": "-", "contentMultiline": true } },
                        { "keyValue": { "topLabel": "Resource Name", "content": "webserver-85", "contentMultiline": true } }
                    ] }
                ]
            }]
        });

        assert_eq!(serde_json::to_value(&message).unwrap(), expected);
    }

    #[test]
    fn test_build_message_closed_danger_is_healthy() {
        let message = build_message(&incident("closed", "[DANGER] CPU usage", "i-4a266a2d"));

        let header = &message.cards[0].sections[0].widgets[0];
        assert_eq!(
            header,
            &Widget::text("<font color=\"#27d871\">Webserver Health [DANGER] CPU usage</font>")
        );
        let resource = &message.cards[0].sections[1].widgets[1];
        assert_eq!(resource, &Widget::key_value("Resource ID", "i-4a266a2d"));
    }
}
