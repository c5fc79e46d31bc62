//! # Chat Payload
//!
//! Slack block-kit message announcing the release: header, divider, labeled
//! metadata fields, the description as a blockquote, a button to the
//! distribution page, and a relative-timestamp footer.

use chrono::Utc;
use serde_json::{Value, json};

use crate::core::state::WorkflowState;

/// Builds the webhook payload with the current time as the footer timestamp.
pub fn build(state: &WorkflowState) -> Value {
    build_at(state, Utc::now().timestamp())
}

/// Timestamp-injectable variant so tests stay deterministic.
pub fn build_at(state: &WorkflowState, timestamp: i64) -> Value {
    // Slack renders "\n>" as a continued blockquote
    let quoted_description = state.description.replace('\n', "\n>");
    json!({
        "blocks": [
            {
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": format!("🚀 New {} build is out", state.stage_name()),
                    "emoji": true
                }
            },
            { "type": "divider" },
            {
                "type": "section",
                "fields": [
                    { "type": "mrkdwn", "text": format!("*Environment:*\n{}", state.stage_name()) },
                    { "type": "mrkdwn", "text": format!("*Branch:*\n`{}`", state.branch) },
                    { "type": "mrkdwn", "text": format!("*Author:*\n{}", state.author) },
                    { "type": "mrkdwn", "text": format!("*Groups:*\n{}", state.groups) }
                ]
            },
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!("*What's new*\n>{quoted_description}")
                }
            },
            {
                "type": "actions",
                "elements": [
                    {
                        "type": "button",
                        "text": { "type": "plain_text", "text": "Open in App Distribution", "emoji": true },
                        "url": &state.release_url
                    }
                ]
            },
            {
                "type": "context",
                "elements": [
                    {
                        "type": "mrkdwn",
                        "text": format!("<!date^{timestamp}^Released {{date_short_pretty}} at {{time}}|Released just now>")
                    }
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{BuildType, Environment};

    fn test_state() -> WorkflowState {
        WorkflowState {
            environment: Environment::Stage,
            build_type: BuildType::Release,
            description: "Fixed crash\nImproved startup".to_string(),
            groups: "qa, devs".to_string(),
            branch: "release/2.4".to_string(),
            author: "Dana".to_string(),
            release_url: "https://example.test/xyz".to_string(),
        }
    }

    #[test]
    fn test_payload_block_order() {
        let payload = build_at(&test_state(), 1_700_000_000);
        let blocks = payload["blocks"].as_array().unwrap();
        let kinds: Vec<&str> = blocks.iter().map(|b| b["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            vec!["header", "divider", "section", "section", "actions", "context"]
        );
    }

    #[test]
    fn test_payload_fields_carry_metadata() {
        let payload = build_at(&test_state(), 1_700_000_000);
        let fields = payload["blocks"][2]["fields"].as_array().unwrap();
        let texts: Vec<&str> = fields.iter().map(|f| f["text"].as_str().unwrap()).collect();
        assert!(texts.iter().any(|t| t.contains("StageRelease")));
        assert!(texts.iter().any(|t| t.contains("release/2.4")));
        assert!(texts.iter().any(|t| t.contains("Dana")));
        assert!(texts.iter().any(|t| t.contains("qa, devs")));
    }

    #[test]
    fn test_description_is_blockquoted_per_line() {
        let payload = build_at(&test_state(), 1_700_000_000);
        let text = payload["blocks"][3]["text"]["text"].as_str().unwrap();
        assert!(text.contains(">Fixed crash\n>Improved startup"));
    }

    #[test]
    fn test_button_links_release_url() {
        let payload = build_at(&test_state(), 1_700_000_000);
        assert_eq!(
            payload["blocks"][4]["elements"][0]["url"],
            "https://example.test/xyz"
        );
    }

    #[test]
    fn test_footer_embeds_timestamp() {
        let payload = build_at(&test_state(), 1_700_000_000);
        let footer = payload["blocks"][5]["elements"][0]["text"].as_str().unwrap();
        assert!(footer.contains("<!date^1700000000^"));
        assert!(footer.contains("|Released just now>"));
    }
}
