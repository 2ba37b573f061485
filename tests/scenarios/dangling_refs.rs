/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lenient dangling-reference policy: removing a node cascades nowhere.

use graph_document::{Action, DocumentStore, EdgeKey};

use crate::harness::{add_edge, add_node};

#[test]
fn test_removing_a_node_leaves_its_edges() {
    let mut store = DocumentStore::new();
    let a = add_node(&mut store, 1.0);
    let b = add_node(&mut store, 2.0);
    add_edge(&mut store, a, b);

    store.dispatch(Action::RemoveNode(a)).unwrap();
    assert!(store.document().nodes.get(a).is_none());
    // The edge stays, referencing an id with no backing node.
    assert!(store.document().edges.get_pair(a, b).is_some());
}

#[test]
fn test_removing_a_node_leaves_its_selection_entry() {
    let mut store = DocumentStore::new();
    let a = add_node(&mut store, 1.0);
    store.dispatch(Action::SelectNode(a)).unwrap();

    store.dispatch(Action::RemoveNode(a)).unwrap();
    assert_eq!(store.selection().nodes(), &[a]);
}

#[test]
fn test_removing_an_edge_leaves_its_selection_entry() {
    let mut store = DocumentStore::new();
    let a = add_node(&mut store, 1.0);
    let b = add_node(&mut store, 2.0);
    add_edge(&mut store, a, b);
    let key = EdgeKey::canonical(a, b);
    store.dispatch(Action::SelectEdge(key.clone())).unwrap();

    store
        .dispatch(Action::RemoveEdge { source: b, target: a })
        .unwrap();
    assert!(store.document().edges.get(&key).is_none());
    assert_eq!(store.selection().edges(), &[key]);
}

#[test]
fn test_edges_may_target_ids_that_never_existed() {
    let mut store = DocumentStore::new();
    add_edge(&mut store, 100, 200);
    assert_eq!(store.document().edges.len(), 1);
    assert!(store.document().nodes.is_empty());
}
