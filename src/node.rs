/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Normalized node store.
//!
//! Nodes are keyed by integer id. The store owns id allocation: a monotonic
//! counter hands out the next id for upserts that omit one, and advances past
//! any explicitly supplied id. Clearing the store does not rewind the counter,
//! so ids are never reissued within a session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::merge::{ExtProps, merge_ext};

/// Stable node identity.
pub type NodeId = u64;

/// Typed node properties plus open-ended extension keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProps {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub ext: ExtProps,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            background_color: Some("#ffffff".to_string()),
            text_color: Some("#000000".to_string()),
            label: None,
            ext: ExtProps::new(),
        }
    }
}

impl NodeProps {
    /// Shallow-merge `patch` into these props. Patched fields win, unspecified
    /// fields are untouched, extension values are replaced wholesale.
    pub fn apply(&mut self, patch: &NodePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(color) = &patch.background_color {
            self.background_color = Some(color.clone());
        }
        if let Some(color) = &patch.text_color {
            self.text_color = Some(color.clone());
        }
        if let Some(label) = &patch.label {
            self.label = Some(label.clone());
        }
        merge_ext(&mut self.ext, &patch.ext);
    }
}

/// Partial node properties, the payload of upsert/update actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub ext: ExtProps,
}

impl NodePatch {
    /// Patch carrying only a position.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }
}

/// A diagram node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub props: NodeProps,
}

/// Normalized mapping from node id to node, plus the allocation counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStore {
    nodes: HashMap<NodeId, Node>,
    id_increment: NodeId,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update a node.
    ///
    /// A missing `id` takes the current allocation counter; an explicit id
    /// (including 0) is used as given. New nodes start from default props
    /// before the patch applies; existing nodes are shallow-merged. The
    /// counter always advances to at least `id + 1`.
    pub fn upsert(&mut self, id: Option<NodeId>, patch: &NodePatch) -> NodeId {
        let id = id.unwrap_or(self.id_increment);
        let node = self.nodes.entry(id).or_insert_with(|| Node {
            id,
            props: NodeProps::default(),
        });
        node.props.apply(patch);
        self.id_increment = self.id_increment.max(id.saturating_add(1));
        id
    }

    /// Remove a node. Returns whether an entry existed. Edges referencing the
    /// id are left in place; dangling endpoints are the consumer's concern.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    /// Merge props into an existing node. Returns false (without creating the
    /// node) when the id is absent.
    pub fn update_props(&mut self, id: NodeId, patch: &NodePatch) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.props.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Clear all nodes. The allocation counter survives: content is cleared,
    /// identity sequencing is not.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// The id the next counter-allocated upsert would take.
    pub fn next_id(&self) -> NodeId {
        self.id_increment
    }
}
