/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Typed action vocabulary: the contract between the UI layer and the store.
//!
//! Every action carries a well-typed payload; numeric payloads are validated
//! for finiteness at the dispatch boundary so the stores themselves can assume
//! well-formed input. `Action::target` classifies an action into the sub-store
//! it mutates, which decides whether it passes through the history controller.

use serde::{Deserialize, Serialize};

use crate::edge::{EdgeDirection, EdgeKey, EdgePatch};
use crate::error::StoreError;
use crate::node::{NodeId, NodePatch};

/// Which part of the store an action mutates.
///
/// `Document` actions snapshot into history before applying; `History` moves
/// the present between the stacks; `Selection` and `AppMeta` bypass history
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    Document,
    History,
    Selection,
    AppMeta,
}

/// A dispatchable intent against the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    // Canvas
    SetCanvasDimensions { width: f64, height: f64 },
    SetZoomLevel(f64),
    PanCanvas { offset_x: f64, offset_y: f64 },
    ToggleGrid,
    ToggleSnapToGrid,
    SetGridSize(f64),
    SetBackgroundColor(String),
    SetBackgroundImage(Option<String>),
    SetEditableMode(bool),

    // Nodes
    AddOrUpdateNode {
        #[serde(default)]
        id: Option<NodeId>,
        #[serde(default)]
        props: NodePatch,
    },
    RemoveNode(NodeId),
    UpdateNodeProps { id: NodeId, props: NodePatch },
    ResetNodes,

    // Edges
    AddOrUpdateEdge {
        source: NodeId,
        target: NodeId,
        #[serde(default)]
        props: EdgePatch,
        #[serde(default)]
        direction: Option<EdgeDirection>,
    },
    RemoveEdge { source: NodeId, target: NodeId },
    ResetEdges,

    // Selection
    SelectNode(NodeId),
    SelectEdge(EdgeKey),
    SelectMultipleNodes(Vec<NodeId>),
    SelectMultipleEdges(Vec<EdgeKey>),
    AddNodeToSelection(NodeId),
    RemoveNodeFromSelection(NodeId),
    AddEdgeToSelection(EdgeKey),
    RemoveEdgeFromSelection(EdgeKey),
    ClearNodeSelection,
    ClearEdgeSelection,
    ClearAllSelections,

    // History
    Undo,
    Redo,

    // App chrome
    ToggleSidebar(Option<bool>),
    SetLastSaved(Option<String>),
}

impl Action {
    /// Classify this action into the sub-store it mutates.
    pub fn target(&self) -> ActionTarget {
        match self {
            Action::SetCanvasDimensions { .. }
            | Action::SetZoomLevel(_)
            | Action::PanCanvas { .. }
            | Action::ToggleGrid
            | Action::ToggleSnapToGrid
            | Action::SetGridSize(_)
            | Action::SetBackgroundColor(_)
            | Action::SetBackgroundImage(_)
            | Action::SetEditableMode(_)
            | Action::AddOrUpdateNode { .. }
            | Action::RemoveNode(_)
            | Action::UpdateNodeProps { .. }
            | Action::ResetNodes
            | Action::AddOrUpdateEdge { .. }
            | Action::RemoveEdge { .. }
            | Action::ResetEdges => ActionTarget::Document,

            Action::Undo | Action::Redo => ActionTarget::History,

            Action::SelectNode(_)
            | Action::SelectEdge(_)
            | Action::SelectMultipleNodes(_)
            | Action::SelectMultipleEdges(_)
            | Action::AddNodeToSelection(_)
            | Action::RemoveNodeFromSelection(_)
            | Action::AddEdgeToSelection(_)
            | Action::RemoveEdgeFromSelection(_)
            | Action::ClearNodeSelection
            | Action::ClearEdgeSelection
            | Action::ClearAllSelections => ActionTarget::Selection,

            Action::ToggleSidebar(_) | Action::SetLastSaved(_) => ActionTarget::AppMeta,
        }
    }

    /// Reject malformed payloads before they reach any store.
    pub fn validate(&self) -> Result<(), StoreError> {
        match self {
            Action::SetCanvasDimensions { width, height } => {
                ensure_finite("width", *width)?;
                ensure_finite("height", *height)
            }
            Action::SetZoomLevel(zoom) => ensure_finite("zoom level", *zoom),
            Action::PanCanvas { offset_x, offset_y } => {
                ensure_finite("offsetX", *offset_x)?;
                ensure_finite("offsetY", *offset_y)
            }
            Action::SetGridSize(size) => ensure_finite("grid size", *size),
            Action::AddOrUpdateNode { props, .. } | Action::UpdateNodeProps { props, .. } => {
                validate_node_patch(props)
            }
            Action::AddOrUpdateEdge { props, .. } => validate_edge_patch(props),
            _ => Ok(()),
        }
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), StoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!("{name} is not finite")))
    }
}

fn validate_node_patch(patch: &NodePatch) -> Result<(), StoreError> {
    if let Some(x) = patch.x {
        ensure_finite("x", x)?;
    }
    if let Some(y) = patch.y {
        ensure_finite("y", y)?;
    }
    Ok(())
}

fn validate_edge_patch(patch: &EdgePatch) -> Result<(), StoreError> {
    if let Some(weight) = patch.weight {
        ensure_finite("weight", weight)?;
    }
    if let Some(width) = patch.line_width {
        ensure_finite("lineWidth", width)?;
    }
    Ok(())
}
