use super::*;

// =============================================================
// Route list
// =============================================================

#[test]
fn nav_items_are_in_display_order() {
    let labels: Vec<&str> = NAV_ITEMS.iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Home", "Friends", "Chats", "Voice Chat", "Rewards"]);
}

#[test]
fn nav_hrefs_are_unique() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for (j, b) in NAV_ITEMS.iter().enumerate() {
            if i != j {
                assert_ne!(a.href, b.href);
            }
        }
    }
}

// =============================================================
// Active matching
// =============================================================

#[test]
fn exactly_one_item_active_for_known_route() {
    let active: Vec<&str> = NAV_ITEMS
        .iter()
        .filter(|i| is_active("/voice", i.href))
        .map(|i| i.label)
        .collect();
    assert_eq!(active, ["Voice Chat"]);
}

#[test]
fn root_does_not_prefix_match() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/chats", "/"));
}

#[test]
fn nested_route_does_not_activate_parent() {
    assert!(!is_active("/chats/42", "/chats"));
}

#[test]
fn unknown_route_activates_nothing() {
    assert!(NAV_ITEMS.iter().all(|i| !is_active("/settings", i.href)));
}
