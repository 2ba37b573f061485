/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Strict-mode reference checking versus the lenient default.

use graph_document::{Action, DocumentStore, NodePatch, StoreConfig, StoreError};

use crate::harness::add_node;

fn strict_store() -> DocumentStore {
    DocumentStore::with_config(StoreConfig { strict: true })
}

#[test]
fn test_lenient_missing_references_are_silent_noops() {
    let mut store = DocumentStore::new();
    assert!(store.dispatch(Action::RemoveNode(9)).is_ok());
    assert!(
        store
            .dispatch(Action::UpdateNodeProps {
                id: 9,
                props: NodePatch::at(1.0, 1.0),
            })
            .is_ok()
    );
    assert!(
        store
            .dispatch(Action::RemoveEdge { source: 1, target: 2 })
            .is_ok()
    );
    assert!(store.document().nodes.is_empty());
}

#[test]
fn test_strict_missing_node_is_reported_without_state_change() {
    let mut store = strict_store();
    let result = store.dispatch(Action::RemoveNode(9));
    assert_eq!(result, Err(StoreError::NotFound("node 9".to_string())));
    // No checkpoint was taken and nothing was marked unsaved.
    assert_eq!(store.undo_depth(), 0);
    assert!(!store.app_meta().has_unsaved_changes);
}

#[test]
fn test_strict_missing_edge_is_reported_symmetrically() {
    let mut store = strict_store();
    let a = add_node(&mut store, 1.0);
    let b = add_node(&mut store, 2.0);
    store
        .dispatch(Action::AddOrUpdateEdge {
            source: a,
            target: b,
            props: Default::default(),
            direction: None,
        })
        .unwrap();

    // The swapped pair resolves to the same record, so this is not an error.
    assert!(
        store
            .dispatch(Action::RemoveEdge { source: b, target: a })
            .is_ok()
    );
    let result = store.dispatch(Action::RemoveEdge { source: b, target: a });
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_strict_upsert_of_new_ids_is_still_allowed() {
    let mut store = strict_store();
    // Upserts create; only removals and prop updates require existence.
    assert!(
        store
            .dispatch(Action::AddOrUpdateNode {
                id: Some(5),
                props: NodePatch::default(),
            })
            .is_ok()
    );
    assert!(store.document().nodes.get(5).is_some());
}
