/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Transient selection over node ids and edge keys.
//!
//! Order is "most recently added last"; entries are unique. The selection has
//! its own lifecycle outside undo/redo and is never pruned when the referenced
//! nodes or edges leave the document — consumers must tolerate or filter
//! dangling entries.

use serde::{Deserialize, Serialize};

use crate::edge::EdgeKey;
use crate::node::NodeId;

/// Focused node ids and edge keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    selected_nodes: Vec<NodeId>,
    selected_edges: Vec<EdgeKey>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node selection with a singleton.
    pub fn select_node(&mut self, id: NodeId) {
        self.selected_nodes.clear();
        self.selected_nodes.push(id);
    }

    /// Replace the node selection, order preserved, duplicates collapsed.
    pub fn select_nodes(&mut self, ids: Vec<NodeId>) {
        self.selected_nodes.clear();
        for id in ids {
            if !self.selected_nodes.contains(&id) {
                self.selected_nodes.push(id);
            }
        }
    }

    /// Append a node id if not already selected.
    pub fn add_node(&mut self, id: NodeId) {
        if !self.selected_nodes.contains(&id) {
            self.selected_nodes.push(id);
        }
    }

    /// Drop a node id from the selection; no-op if absent.
    pub fn remove_node(&mut self, id: NodeId) {
        self.selected_nodes.retain(|existing| *existing != id);
    }

    /// Replace the edge selection with a singleton.
    pub fn select_edge(&mut self, key: EdgeKey) {
        self.selected_edges.clear();
        self.selected_edges.push(key);
    }

    /// Replace the edge selection, order preserved, duplicates collapsed.
    pub fn select_edges(&mut self, keys: Vec<EdgeKey>) {
        self.selected_edges.clear();
        for key in keys {
            if !self.selected_edges.contains(&key) {
                self.selected_edges.push(key);
            }
        }
    }

    /// Append an edge key if not already selected.
    pub fn add_edge(&mut self, key: EdgeKey) {
        if !self.selected_edges.contains(&key) {
            self.selected_edges.push(key);
        }
    }

    /// Drop an edge key from the selection; no-op if absent.
    pub fn remove_edge(&mut self, key: &EdgeKey) {
        self.selected_edges.retain(|existing| existing != key);
    }

    pub fn clear_nodes(&mut self) {
        self.selected_nodes.clear();
    }

    pub fn clear_edges(&mut self) {
        self.selected_edges.clear();
    }

    pub fn clear_all(&mut self) {
        self.selected_nodes.clear();
        self.selected_edges.clear();
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.selected_nodes
    }

    pub fn edges(&self) -> &[EdgeKey] {
        &self.selected_edges
    }

    pub fn is_empty(&self) -> bool {
        self.selected_nodes.is_empty() && self.selected_edges.is_empty()
    }
}
