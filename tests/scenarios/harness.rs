/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use graph_document::{Action, DocumentStore, NodeId, NodePatch};

/// Dispatch a counter-allocated node upsert at `(x, 0)` and return its id.
pub(crate) fn add_node(store: &mut DocumentStore, x: f64) -> NodeId {
    let id = store.document().nodes.next_id();
    store
        .dispatch(Action::AddOrUpdateNode {
            id: None,
            props: NodePatch::at(x, 0.0),
        })
        .unwrap();
    id
}

/// Dispatch an edge upsert with default props and no direction.
pub(crate) fn add_edge(store: &mut DocumentStore, source: NodeId, target: NodeId) {
    store
        .dispatch(Action::AddOrUpdateEdge {
            source,
            target,
            props: Default::default(),
            direction: None,
        })
        .unwrap();
}
