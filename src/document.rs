/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The composite document: nodes + edges + canvas.
//!
//! This is the unit of undo/redo. Selection and app-chrome state deliberately
//! live outside it so history transitions never disturb them.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::canvas::CanvasState;
use crate::edge::EdgeStore;
use crate::node::NodeStore;

/// Composite graph content and viewport configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: NodeStore,
    pub edges: EdgeStore,
    pub canvas: CanvasState,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a document-targeted action. The store classifies actions before
    /// delegating here; anything else falls through untouched.
    pub(crate) fn apply(&mut self, action: &Action) {
        match action {
            Action::SetCanvasDimensions { width, height } => {
                self.canvas.set_dimensions(*width, *height);
            }
            Action::SetZoomLevel(zoom) => self.canvas.set_zoom(*zoom),
            Action::PanCanvas { offset_x, offset_y } => self.canvas.pan(*offset_x, *offset_y),
            Action::ToggleGrid => self.canvas.toggle_grid(),
            Action::ToggleSnapToGrid => self.canvas.toggle_snap(),
            Action::SetGridSize(size) => self.canvas.set_grid_size(*size),
            Action::SetBackgroundColor(color) => self.canvas.set_background_color(color.clone()),
            Action::SetBackgroundImage(uri) => self.canvas.set_background_image(uri.clone()),
            Action::SetEditableMode(editable) => self.canvas.set_editable(*editable),

            Action::AddOrUpdateNode { id, props } => {
                self.nodes.upsert(*id, props);
            }
            Action::RemoveNode(id) => {
                self.nodes.remove(*id);
            }
            Action::UpdateNodeProps { id, props } => {
                self.nodes.update_props(*id, props);
            }
            Action::ResetNodes => self.nodes.reset(),

            Action::AddOrUpdateEdge {
                source,
                target,
                props,
                direction,
            } => {
                self.edges.upsert(*source, *target, props, *direction);
            }
            Action::RemoveEdge { source, target } => {
                self.edges.remove(*source, *target);
            }
            Action::ResetEdges => self.edges.reset(),

            // Selection, history, and app-meta actions are routed to their
            // own stores before reaching the document reducer.
            _ => {}
        }
    }
}
