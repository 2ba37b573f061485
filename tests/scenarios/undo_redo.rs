/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use graph_document::{Action, DocumentStore, HISTORY_LIMIT, NodePatch};

use crate::harness::add_node;

#[test]
fn test_undo_restores_pre_mutation_document() {
    let mut store = DocumentStore::new();
    let a = add_node(&mut store, 1.0);
    let b = add_node(&mut store, 2.0);
    assert_eq!(store.document().nodes.len(), 2);

    store.dispatch(Action::Undo).unwrap();
    assert_eq!(store.document().nodes.len(), 1);
    assert!(store.document().nodes.get(a).is_some());
    assert!(store.document().nodes.get(b).is_none());

    store.dispatch(Action::Redo).unwrap();
    assert_eq!(store.document().nodes.len(), 2);
}

#[test]
fn test_oldest_snapshot_evicted_past_the_bound() {
    let mut store = DocumentStore::new();
    // 11 composite mutations against a bound of 10.
    for i in 0..(HISTORY_LIMIT + 1) {
        add_node(&mut store, i as f64);
    }
    for _ in 0..HISTORY_LIMIT {
        store.dispatch(Action::Undo).unwrap();
    }
    // The snapshot before the first action was evicted: undo bottoms out at
    // the state after the first action, not the empty initial document.
    assert_eq!(store.document().nodes.len(), 1);
    assert!(!store.can_undo());
}

#[test]
fn test_mutation_after_undo_clears_future() {
    let mut store = DocumentStore::new();
    add_node(&mut store, 1.0);
    add_node(&mut store, 2.0);
    store.dispatch(Action::Undo).unwrap();
    assert!(store.can_redo());

    add_node(&mut store, 3.0);
    assert!(!store.can_redo());
    let before = store.document().clone();
    store.dispatch(Action::Redo).unwrap();
    assert_eq!(store.document(), &before);
}

#[test]
fn test_selection_is_unaffected_by_history_transitions() {
    let mut store = DocumentStore::new();
    let a = add_node(&mut store, 1.0);
    add_node(&mut store, 2.0);
    store.dispatch(Action::SelectNode(a)).unwrap();

    for _ in 0..5 {
        store.dispatch(Action::Undo).unwrap();
        store.dispatch(Action::Redo).unwrap();
    }
    assert_eq!(store.selection().nodes(), &[a]);
}

#[test]
fn test_app_meta_is_unaffected_by_history_transitions() {
    let mut store = DocumentStore::new();
    add_node(&mut store, 1.0);
    store.dispatch(Action::SetLastSaved(None)).unwrap();
    assert!(!store.app_meta().has_unsaved_changes);

    store.dispatch(Action::Undo).unwrap();
    store.dispatch(Action::Redo).unwrap();
    assert!(!store.app_meta().has_unsaved_changes);
    assert!(store.app_meta().last_saved.is_some());
}

#[test]
fn test_undo_restores_canvas_and_id_counter() {
    let mut store = DocumentStore::new();
    store.dispatch(Action::SetZoomLevel(3.0)).unwrap();
    add_node(&mut store, 1.0);

    store.dispatch(Action::Undo).unwrap();
    assert_eq!(store.document().nodes.next_id(), 0);
    assert_eq!(store.document().canvas.zoom_level, 3.0);

    store.dispatch(Action::Undo).unwrap();
    assert_eq!(store.document().canvas.zoom_level, 1.0);
}

#[test]
fn test_reset_nodes_is_undoable_and_keeps_counter() {
    let mut store = DocumentStore::new();
    store
        .dispatch(Action::AddOrUpdateNode {
            id: Some(4),
            props: NodePatch::default(),
        })
        .unwrap();
    store.dispatch(Action::ResetNodes).unwrap();
    assert!(store.document().nodes.is_empty());

    // Counter survives the reset: next counter-allocated id is 5.
    let id = add_node(&mut store, 0.0);
    assert_eq!(id, 5);

    store.dispatch(Action::Undo).unwrap();
    store.dispatch(Action::Undo).unwrap();
    assert_eq!(store.document().nodes.len(), 1);
    assert!(store.document().nodes.get(4).is_some());
}
