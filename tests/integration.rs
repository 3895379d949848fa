// SPDX-License-Identifier: MPL-2.0
use admin_feedback::config::{self, FeedbackConfig};
use admin_feedback::diagnostics::{DiagnosticsCollector, FeedbackEvent};
use admin_feedback::domain::feedback::MaxItems;
use admin_feedback::feedback::{
    Anchor, DismissReason, Feedback, FeedbackMessage, FeedbackStore, Kind, ManualClock,
    NotificationSpec, Overrides, SharedStore, StoreSettings,
};
use std::cell::Cell;
use std::rc::Rc;
use tempfile::tempdir;

fn manual_store(max_items: usize) -> (FeedbackStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let settings = StoreSettings {
        max_items: MaxItems::new(max_items),
        ..StoreSettings::default()
    };
    (FeedbackStore::with_clock(clock.clone(), settings), clock)
}

fn dismiss_counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn overflow_keeps_newest_two() {
    let (mut store, _clock) = manual_store(2);
    let (a_dismissed, hook) = dismiss_counter();

    let a = store.add(
        NotificationSpec::new(Kind::Info, "A")
            .anchor(Anchor::TopRight)
            .persistent()
            .on_dismiss(hook),
    );
    let b = store.add(
        NotificationSpec::new(Kind::Info, "B")
            .anchor(Anchor::TopRight)
            .persistent(),
    );
    let c = store.add(
        NotificationSpec::new(Kind::Info, "C")
            .anchor(Anchor::TopRight)
            .persistent(),
    );

    assert_eq!(store.grouped().ids(Anchor::TopRight), vec![b, c]);
    assert!(!store.contains(a));
    assert_eq!(a_dismissed.get(), 1);
}

#[test]
fn timed_notification_lifecycle() {
    let (mut store, clock) = manual_store(5);
    let (dismissed, hook) = dismiss_counter();
    let x = store.add(
        NotificationSpec::new(Kind::Success, "X")
            .duration_ms(1_000)
            .on_dismiss(hook),
    );

    clock.advance_ms(999);
    store.handle_message(&FeedbackMessage::Tick);
    assert!(store.contains(x));

    clock.advance_ms(1);
    store.handle_message(&FeedbackMessage::Tick);
    assert!(!store.contains(x));
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn manual_removal_cancels_expiry() {
    let (mut store, clock) = manual_store(5);
    let (dismissed, hook) = dismiss_counter();
    let y = store.add(
        NotificationSpec::new(Kind::Warning, "Y")
            .duration_ms(500)
            .on_dismiss(hook),
    );

    store.handle_message(&FeedbackMessage::Dismiss(y));
    clock.advance_ms(500);
    store.handle_message(&FeedbackMessage::Tick);
    store.handle_message(&FeedbackMessage::Dismiss(y));

    assert_eq!(dismissed.get(), 1);
}

#[test]
fn clear_fires_each_hook_once_for_mixed_lifetimes() {
    let (mut store, clock) = manual_store(5);
    let counters: Vec<_> = (0..4)
        .map(|i| {
            let (count, hook) = dismiss_counter();
            let spec = NotificationSpec::new(Kind::Info, format!("n{i}"))
                .duration_ms(if i % 2 == 0 { 0 } else { 200 })
                .on_dismiss(hook);
            store.add(spec);
            count
        })
        .collect();

    store.clear();
    clock.advance_ms(1_000);
    store.tick();

    assert!(store.is_empty());
    assert!(counters.iter().all(|c| c.get() == 1));
}

#[test]
fn grouped_view_follows_anchors() {
    let (mut store, _clock) = manual_store(5);
    let saved = store.success("Customer saved", Overrides::new());
    let failed = store.error(
        "Transaction export failed",
        Overrides::new().anchor(Anchor::BottomLeft),
    );
    let hint = store.info("Filters reset", Overrides::new());

    let grouped = store.grouped();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped.ids(Anchor::TopRight), vec![saved, hint]);
    assert_eq!(grouped.ids(Anchor::BottomLeft), vec![failed]);
    assert_eq!(grouped.total(), store.len());
}

#[test]
fn config_file_drives_store_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("feedback.toml");

    let config = FeedbackConfig {
        default_anchor: Some(Anchor::BottomRight),
        max_items: Some(2),
        default_duration_ms: Some(2_500),
        ..FeedbackConfig::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    let mut store = FeedbackStore::from_config(&loaded);
    for i in 0..4 {
        store.info(format!("update {i}"), Overrides::new());
    }

    assert_eq!(store.len(), 2);
    let first = store.iter().next().expect("one notification");
    assert_eq!(first.anchor(), Anchor::BottomRight);
    assert_eq!(first.duration_ms(), 2_500);
    assert_eq!(first.message(), "update 2");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn diagnostics_record_full_lifecycle() {
    let (mut store, clock) = manual_store(5);
    let mut collector = DiagnosticsCollector::new(100);
    store.set_diagnostics(collector.handle());

    let mut feedback = Feedback::new(&mut store);
    let confirm = feedback.show_confirmation("Deactivate POS terminal?", || {});
    let loading = feedback.show_loading("Fetching transactions...");

    store.handle_message(&FeedbackMessage::Action(confirm));
    clock.advance_ms(3_000);
    store.tick();
    collector.process_pending();

    let reasons: Vec<_> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            FeedbackEvent::Removed { id, reason } => Some((*id, *reason)),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            (confirm, DismissReason::Dismissed),
            (loading, DismissReason::Expired)
        ]
    );
    assert!(collector.iter().any(|event| matches!(
        &event.kind,
        FeedbackEvent::ActionTriggered { label, .. } if label == "Confirm"
    )));

    let json = collector.export_json().expect("export should succeed");
    assert!(json.contains("\"action_triggered\""));
}

#[test]
fn shared_store_confirmation_raises_follow_up() {
    let (store, clock) = manual_store(5);
    let store = SharedStore::new(store);
    let cancelled = Rc::new(Cell::new(false));

    let on_confirm = store.clone();
    let on_cancel = store.clone();
    let flag = Rc::clone(&cancelled);
    let id = store.feedback(|feedback| {
        feedback.show_confirmation_with_cancel(
            "Deactivate POS terminal T-17?",
            move || {
                on_confirm.success("Terminal deactivated", Overrides::new());
            },
            move || {
                flag.set(true);
                on_cancel.info("Deactivation cancelled", Overrides::new());
            },
        )
    });

    store.handle_message(&FeedbackMessage::Action(id));
    assert!(!cancelled.get());
    let messages: Vec<String> = store
        .borrow()
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(messages, vec!["Terminal deactivated".to_string()]);

    clock.advance_ms(10_000);
    store.handle_message(&FeedbackMessage::Tick);
    assert!(store.borrow().is_empty());
}
