//! Tests for payload assembly and encoding.

use serde_json::{Value, json};

use crate::config::{Settings, SlackInputs};

use super::{Attachment, NotificationPayload, build, render};

/// Inputs for a successful text-mode build with no optional fields.
fn inputs() -> SlackInputs {
    SlackInputs {
        webhook_url: "https://hooks.slack.com/services/T/B/X".to_string(),
        message: "Build OK".to_string(),
        formatting_mode: "text".to_string(),
        color: "good".to_string(),
        ..SlackInputs::default()
    }
}

/// Inputs with every on-error variant set.
fn inputs_with_variants() -> SlackInputs {
    SlackInputs {
        from_username: "CI".to_string(),
        from_username_on_error: "CI (failed)".to_string(),
        message_on_error: "Build FAILED".to_string(),
        color_on_error: "danger".to_string(),
        emoji: ":ok:".to_string(),
        emoji_on_error: ":x:".to_string(),
        ..inputs()
    }
}

fn settings(inputs: SlackInputs) -> Settings {
    inputs.validate().unwrap()
}

fn to_value(payload: &NotificationPayload) -> Value {
    serde_json::from_str(&payload.to_json().unwrap()).unwrap()
}

mod examples {
    use super::*;

    #[test]
    fn text_mode_success_has_only_text() {
        let json = render(&settings(SlackInputs {
            build_failed: false,
            ..inputs()
        }))
        .unwrap();

        assert_eq!(json, r#"{"text":"Build OK"}"#);
    }

    #[test]
    fn attachment_mode_failure_uses_error_variants() {
        let json = render(&settings(SlackInputs {
            formatting_mode: "attachment".to_string(),
            message_on_error: "Build FAILED".to_string(),
            color_on_error: "danger".to_string(),
            build_failed: true,
            ..inputs()
        }))
        .unwrap();

        assert_eq!(
            json,
            r#"{"text":"","attachments":[{"fallback":"Build FAILED","text":"Build FAILED","color":"danger"}]}"#
        );
    }
}

mod override_rule {
    use super::*;

    #[test]
    fn success_uses_normal_variants_even_when_error_variants_set() {
        let payload = build(&settings(SlackInputs {
            formatting_mode: "attachment".to_string(),
            build_failed: false,
            ..inputs_with_variants()
        }));

        assert_eq!(payload.attachments, vec![Attachment::new("Build OK", "good")]);
        assert_eq!(payload.username.as_deref(), Some("CI"));
        assert_eq!(payload.icon_emoji.as_deref(), Some(":ok:"));
    }

    #[test]
    fn failure_uses_error_variants_when_set() {
        let payload = build(&settings(SlackInputs {
            formatting_mode: "attachment".to_string(),
            build_failed: true,
            ..inputs_with_variants()
        }));

        assert_eq!(
            payload.attachments,
            vec![Attachment::new("Build FAILED", "danger")]
        );
        assert_eq!(payload.username.as_deref(), Some("CI (failed)"));
        assert_eq!(payload.icon_emoji.as_deref(), Some(":x:"));
    }

    #[test]
    fn failure_falls_back_to_normal_variants_when_unset() {
        let payload = build(&settings(SlackInputs {
            formatting_mode: "attachment".to_string(),
            from_username: "CI".to_string(),
            emoji: ":ok:".to_string(),
            icon_url: "https://example.com/ok.png".to_string(),
            build_failed: true,
            ..inputs()
        }));

        assert_eq!(payload.attachments, vec![Attachment::new("Build OK", "good")]);
        assert_eq!(payload.username.as_deref(), Some("CI"));
        assert_eq!(
            payload.icon_url.as_deref(),
            Some("https://example.com/ok.png")
        );
    }

    #[test]
    fn failure_with_only_error_variant_sets_field() {
        let payload = build(&settings(SlackInputs {
            from_username_on_error: "CI (failed)".to_string(),
            build_failed: true,
            ..inputs()
        }));

        assert_eq!(payload.username.as_deref(), Some("CI (failed)"));
    }

    #[test]
    fn success_with_only_error_variant_omits_field() {
        let payload = build(&settings(SlackInputs {
            from_username_on_error: "CI (failed)".to_string(),
            emoji_on_error: ":x:".to_string(),
            build_failed: false,
            ..inputs()
        }));

        assert!(payload.username.is_none());
        assert!(payload.icon_emoji.is_none());
    }

    #[test]
    fn channel_is_used_regardless_of_outcome() {
        for build_failed in [false, true] {
            let payload = build(&settings(SlackInputs {
                channel: "#builds".to_string(),
                build_failed,
                ..inputs()
            }));

            assert_eq!(payload.channel.as_deref(), Some("#builds"));
        }
    }
}

mod icons {
    use super::*;

    #[test]
    fn icon_url_drops_emoji() {
        let payload = build(&settings(SlackInputs {
            emoji: ":ok:".to_string(),
            icon_url: "https://example.com/ok.png".to_string(),
            build_failed: false,
            ..inputs()
        }));

        let value = to_value(&payload);
        assert_eq!(value["icon_url"], "https://example.com/ok.png");
        assert!(value.get("icon_emoji").is_none());
    }

    #[test]
    fn error_icon_url_drops_error_emoji() {
        let payload = build(&settings(SlackInputs {
            emoji_on_error: ":x:".to_string(),
            icon_url_on_error: "https://example.com/fail.png".to_string(),
            build_failed: true,
            ..inputs()
        }));

        assert_eq!(
            payload.icon_url.as_deref(),
            Some("https://example.com/fail.png")
        );
        assert!(payload.icon_emoji.is_none());
    }

    #[test]
    fn normal_icon_url_on_failure_still_drops_error_emoji() {
        let payload = build(&settings(SlackInputs {
            emoji_on_error: ":x:".to_string(),
            icon_url: "https://example.com/ok.png".to_string(),
            build_failed: true,
            ..inputs()
        }));

        assert_eq!(payload.icon_url.as_deref(), Some("https://example.com/ok.png"));
        assert!(payload.icon_emoji.is_none());
    }

    #[test]
    fn emoji_kept_without_icon_url() {
        let payload = build(&settings(SlackInputs {
            emoji: ":ok:".to_string(),
            build_failed: false,
            ..inputs()
        }));

        assert_eq!(payload.icon_emoji.as_deref(), Some(":ok:"));
        assert!(payload.icon_url.is_none());
    }
}

mod formatting {
    use super::*;

    #[test]
    fn attachment_mode_has_single_attachment_and_empty_text() {
        let payload = build(&settings(SlackInputs {
            formatting_mode: "attachment".to_string(),
            build_failed: false,
            ..inputs()
        }));

        assert!(payload.text.is_empty());
        assert_eq!(payload.attachments.len(), 1);

        let attachment = &payload.attachments[0];
        assert_eq!(attachment.fallback, "Build OK");
        assert_eq!(attachment.text, "Build OK");
        assert_eq!(attachment.color, "good");
    }

    #[test]
    fn text_mode_has_no_attachments() {
        let payload = build(&settings(SlackInputs {
            build_failed: true,
            ..inputs_with_variants()
        }));

        assert_eq!(payload.text, "Build FAILED");
        assert!(payload.attachments.is_empty());
        assert!(to_value(&payload).get("attachments").is_none());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn absent_optional_fields_are_omitted() {
        let value = to_value(&build(&settings(SlackInputs {
            build_failed: false,
            ..inputs()
        })));

        assert_eq!(value, json!({ "text": "Build OK" }));
    }

    #[test]
    fn present_optional_fields_use_slack_names() {
        let value = to_value(&build(&settings(SlackInputs {
            channel: "#builds".to_string(),
            build_failed: false,
            ..inputs_with_variants()
        })));

        assert_eq!(
            value,
            json!({
                "text": "Build OK",
                "channel": "#builds",
                "username": "CI",
                "icon_emoji": ":ok:",
            })
        );
    }

    #[test]
    fn special_characters_are_escaped() {
        let json = render(&settings(SlackInputs {
            message: "Build \"42\" OK\nsee <https://ci.example.com|logs>".to_string(),
            build_failed: false,
            ..inputs()
        }))
        .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["text"],
            "Build \"42\" OK\nsee <https://ci.example.com|logs>"
        );
    }
}
