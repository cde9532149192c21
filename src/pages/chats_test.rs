use super::*;

#[test]
fn own_message_is_marked_own_and_keeps_text() {
    let at = Utc.with_ymd_and_hms(2026, 1, 10, 18, 30, 0).unwrap();
    let msg = own_message("hello".to_owned(), at);
    assert!(msg.is_own);
    assert_eq!(msg.text, "hello");
    assert_eq!(msg.timestamp, at);
    assert!(msg.sender_label().is_none());
}

#[test]
fn own_messages_get_distinct_ids() {
    let at = Utc::now();
    assert_ne!(own_message("a".to_owned(), at).id, own_message("a".to_owned(), at).id);
}

#[test]
fn seed_messages_are_chronological_with_unique_ids() {
    let seed = seed_messages();
    assert!(seed.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    let mut ids: Vec<&str> = seed.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), seed.len());
}
