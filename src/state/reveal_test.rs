use super::*;

// =============================================================
// Tracker
// =============================================================

#[test]
fn register_assigns_sequential_pending_keys() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.is_empty());
    let a = tracker.register();
    let b = tracker.register();
    assert_eq!(a, RevealKey(0));
    assert_eq!(b, RevealKey(1));
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.phase(a), Some(RevealPhase::Pending));
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn first_intersection_reveals() {
    let mut tracker = RevealTracker::new();
    let key = tracker.register();
    assert_eq!(tracker.on_intersection(key, true), RevealAction::Reveal);
    assert_eq!(tracker.phase(key), Some(RevealPhase::Revealed));
    assert_eq!(tracker.pending_count(), 0);
}

#[test]
fn non_intersecting_notification_keeps_pending() {
    let mut tracker = RevealTracker::new();
    let key = tracker.register();
    assert_eq!(tracker.on_intersection(key, false), RevealAction::Ignore);
    assert_eq!(tracker.phase(key), Some(RevealPhase::Pending));
}

#[test]
fn reveal_happens_at_most_once() {
    let mut tracker = RevealTracker::new();
    let key = tracker.register();
    let reveals = [true, false, true, true, false, true]
        .into_iter()
        .filter(|hit| tracker.on_intersection(key, *hit) == RevealAction::Reveal)
        .count();
    assert_eq!(reveals, 1);
    assert_eq!(tracker.phase(key), Some(RevealPhase::Revealed));
}

#[test]
fn elements_reveal_independently() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    let b = tracker.register();
    assert_eq!(tracker.on_intersection(b, true), RevealAction::Reveal);
    assert_eq!(tracker.phase(a), Some(RevealPhase::Pending));
    assert_eq!(tracker.on_intersection(a, true), RevealAction::Reveal);
    assert_eq!(tracker.pending_count(), 0);
}

#[test]
fn unknown_key_is_ignored() {
    let mut tracker = RevealTracker::new();
    assert_eq!(tracker.on_intersection(RevealKey(7), true), RevealAction::Ignore);
    assert_eq!(tracker.phase(RevealKey(7)), None);
}

// =============================================================
// Candidate list
// =============================================================

#[test]
fn candidates_keep_fade_ins_then_sections() {
    let list = reveal_candidates(vec!["hero", "card"], vec!["about", "contact"]);
    assert_eq!(list, vec!["hero", "card", "about", "contact"]);
}

#[test]
fn element_with_both_classes_is_registered_once() {
    // `about` is both `.fade-in` and `.section`.
    let list = reveal_candidates(vec!["hero", "about"], vec!["home", "about", "contact"]);
    assert_eq!(list, vec!["hero", "about", "home", "contact"]);

    let mut tracker = RevealTracker::new();
    for _ in &list {
        tracker.register();
    }
    assert_eq!(tracker.len(), 4);
}

#[test]
fn candidates_of_empty_page() {
    let list: Vec<u32> = reveal_candidates(Vec::new(), Vec::new());
    assert!(list.is_empty());
}

#[test]
fn pending_count_reaches_zero_after_every_reveal() {
    let mut tracker = RevealTracker::new();
    let keys: Vec<_> = (0..3).map(|_| tracker.register()).collect();
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tracker.pending_count(), 3 - i);
        tracker.on_intersection(*key, true);
    }
    assert_eq!(tracker.pending_count(), 0);
}
