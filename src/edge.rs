/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Normalized edge store with canonical pair keys.
//!
//! Edge identity is order-independent: the key for endpoints `(a, b)` is
//! `"<min>-<max>"`, so `(3, 5)` and `(5, 3)` resolve to the same record.
//! A `direction` field rides on top of that undirected identity with
//! first-write-wins semantics. Endpoints are not checked against the node
//! store; dangling references are permitted by design.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::merge::{ExtProps, merge_ext};
use crate::node::NodeId;

/// Canonical order-independent edge key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeKey(String);

impl EdgeKey {
    /// Key for the unordered pair `{a, b}`: symmetric under endpoint swap.
    pub fn canonical(a: NodeId, b: NodeId) -> Self {
        Self(format!("{}-{}", a.min(b), a.max(b)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Rendered direction of an edge. Identity stays undirected regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    Forward,
    Backward,
    Both,
    #[default]
    None,
}

/// Typed edge properties plus open-ended extension keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeProps {
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub line_width: f64,
    pub color: String,
    pub line_style: String,
    #[serde(flatten)]
    pub ext: ExtProps,
}

impl Default for EdgeProps {
    fn default() -> Self {
        Self {
            weight: 1.0,
            label: None,
            line_width: 1.0,
            color: "#000000".to_string(),
            line_style: "solid".to_string(),
            ext: ExtProps::new(),
        }
    }
}

impl EdgeProps {
    /// Shallow-merge `patch` into these props, same precedence as node props.
    pub fn apply(&mut self, patch: &EdgePatch) {
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(label) = &patch.label {
            self.label = Some(label.clone());
        }
        if let Some(width) = patch.line_width {
            self.line_width = width;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(style) = &patch.line_style {
            self.line_style = style.clone();
        }
        merge_ext(&mut self.ext, &patch.ext);
    }
}

/// Partial edge properties, the payload of upsert actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    #[serde(flatten)]
    pub ext: ExtProps,
}

/// A diagram edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub edge_id: EdgeKey,
    pub source: NodeId,
    pub target: NodeId,
    pub props: EdgeProps,
    pub direction: EdgeDirection,
}

/// Normalized mapping from canonical key to edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeStore {
    edges: HashMap<EdgeKey, Edge>,
}

impl EdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the edge for the unordered pair `{source, target}`.
    ///
    /// Props are shallow-merged. The stored `source`/`target` take the
    /// orientation of the latest call. Direction is first-write-wins: an
    /// existing direction other than `None` is kept and the incoming argument
    /// is ignored; an existing `None` may be upgraded.
    pub fn upsert(
        &mut self,
        source: NodeId,
        target: NodeId,
        patch: &EdgePatch,
        direction: Option<EdgeDirection>,
    ) -> EdgeKey {
        let key = EdgeKey::canonical(source, target);
        match self.edges.get_mut(&key) {
            Some(edge) => {
                edge.source = source;
                edge.target = target;
                edge.props.apply(patch);
                if edge.direction == EdgeDirection::None
                    && let Some(direction) = direction
                {
                    edge.direction = direction;
                }
            }
            None => {
                let mut props = EdgeProps::default();
                props.apply(patch);
                self.edges.insert(
                    key.clone(),
                    Edge {
                        edge_id: key.clone(),
                        source,
                        target,
                        props,
                        direction: direction.unwrap_or_default(),
                    },
                );
            }
        }
        key
    }

    /// Remove the edge for the unordered pair. Symmetric under endpoint swap;
    /// returns whether an entry existed.
    pub fn remove(&mut self, source: NodeId, target: NodeId) -> bool {
        self.edges.remove(&EdgeKey::canonical(source, target)).is_some()
    }

    /// Clear all edges.
    pub fn reset(&mut self) {
        self.edges.clear();
    }

    pub fn get(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    pub fn get_pair(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeKey::canonical(source, target))
    }

    pub fn contains_pair(&self, source: NodeId, target: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::canonical(source, target))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }
}
