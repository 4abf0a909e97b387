use gpui_frame_stats::data_types::{StatHandle, StatHistory};
use gpui_frame_stats::{FrameStatError, StatRegistry, STAT_CAPACITY};
use parking_lot::RwLock;
use std::sync::Arc;

fn history() -> Arc<RwLock<StatHistory>> {
    Arc::new(RwLock::new(StatHistory::new(16)))
}

#[test]
fn test_ranks_follow_insertion_order() {
    let sources: Vec<_> = (0..3).map(|_| history()).collect();
    let mut registry = StatRegistry::new();

    let labels = ["Render", "Network", "Physics"];
    let colors = [gpui::red(), gpui::green(), gpui::blue()];
    for ((source, label), color) in sources.iter().zip(labels).zip(colors) {
        registry
            .add_stat(StatHandle::new(source), label, color)
            .expect("registry has room");
    }

    assert_eq!(registry.len(), 3);
    for (i, slot) in registry.slots().iter().enumerate() {
        assert_eq!(slot.rank, i);
        assert_eq!(slot.label, labels[i]);
        assert_eq!(slot.color, colors[i]);
    }
}

#[test]
fn test_default_capacity() {
    let registry = StatRegistry::new();
    assert_eq!(registry.capacity(), STAT_CAPACITY);
    assert_eq!(STAT_CAPACITY, 30);
    assert!(registry.is_empty());
}

#[test]
fn test_capacity_exceeded_keeps_prior_slots() {
    let source = history();
    let mut registry = StatRegistry::new();
    for i in 0..STAT_CAPACITY {
        let rank = registry
            .add_stat(StatHandle::new(&source), format!("stat{i}"), gpui::white())
            .unwrap();
        assert_eq!(rank, i);
    }
    assert!(registry.is_full());

    let before: Vec<(String, usize)> = registry
        .slots()
        .iter()
        .map(|s| (s.label.clone(), s.rank))
        .collect();

    let err = registry
        .add_stat(StatHandle::new(&source), "overflow", gpui::red())
        .unwrap_err();
    assert_eq!(
        err,
        FrameStatError::CapacityExceeded {
            capacity: STAT_CAPACITY,
            label: "overflow".to_string()
        }
    );

    let after: Vec<(String, usize)> = registry
        .slots()
        .iter()
        .map(|s| (s.label.clone(), s.rank))
        .collect();
    assert_eq!(before, after);
    assert_eq!(registry.len(), STAT_CAPACITY);
    assert!(registry.slots().iter().all(|s| s.color == gpui::white()));
}

#[test]
fn test_registry_does_not_own_sources() {
    let source = history();
    let mut registry = StatRegistry::with_capacity(2);
    registry
        .add_stat(StatHandle::new(&source), "frame", gpui::white())
        .unwrap();

    assert_eq!(Arc::strong_count(&source), 1);
    drop(source);
    assert!(!registry.slots()[0].handle.is_alive());
}
