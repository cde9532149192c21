use super::*;
use chrono::FixedOffset;

fn message(id: &str, is_own: bool) -> Message {
    Message {
        id: id.to_owned(),
        text: format!("hello from {id}"),
        sender: "Sarah Chen".to_owned(),
        timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap(),
        is_own,
    }
}

// =============================================================
// Alignment and labels
// =============================================================

#[test]
fn bubble_side_matches_ownership_for_every_message() {
    let messages = vec![message("a", false), message("b", true), message("c", false), message("d", true)];
    for msg in &messages {
        let expected = if msg.is_own { BubbleSide::End } else { BubbleSide::Start };
        assert_eq!(msg.side(), expected, "message {}", msg.id);
    }
}

#[test]
fn own_messages_have_no_sender_label() {
    assert_eq!(message("a", true).sender_label(), None);
}

#[test]
fn other_messages_are_labelled_with_sender() {
    assert_eq!(message("a", false).sender_label(), Some("Sarah Chen"));
}

#[test]
fn bubble_classes_differ_by_side() {
    assert_ne!(BubbleSide::Start.row_class(), BubbleSide::End.row_class());
    assert!(BubbleSide::End.bubble_class().ends_with("--own"));
}

// =============================================================
// List content
// =============================================================

#[test]
fn error_suppresses_messages() {
    assert_eq!(list_content(3, false, Some("boom")), ListContent::Error("boom".to_owned()));
}

#[test]
fn error_wins_over_loading() {
    assert_eq!(list_content(0, true, Some("boom")), ListContent::Error("boom".to_owned()));
}

#[test]
fn loading_with_no_messages_shows_indicator() {
    assert_eq!(list_content(0, true, None), ListContent::Loading);
}

#[test]
fn loading_with_messages_keeps_messages() {
    assert_eq!(list_content(2, true, None), ListContent::Messages);
}

#[test]
fn idle_empty_list_renders_messages_view() {
    assert_eq!(list_content(0, false, None), ListContent::Messages);
}

// =============================================================
// Clock formatting
// =============================================================

#[test]
fn format_clock_uses_two_digit_hour_and_minute() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
    assert_eq!(format_clock(&ts), "09:05");
}

#[test]
fn format_clock_respects_offset() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 14, 23, 30, 0).unwrap();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(format_clock(&ts.with_timezone(&plus_two)), "01:30");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn message_deserializes_without_ownership_flag() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "text": "hi",
        "sender": "Alex Johnson",
        "timestamp": "2026-03-14T09:05:00Z",
    }))
    .unwrap();
    assert!(!msg.is_own);
    assert_eq!(msg.side(), BubbleSide::Start);
}
