/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The document store: single-writer dispatch over the composite document,
//! selection, and app-chrome state.
//!
//! Dispatch flow for a document-targeted action: snapshot the pre-mutation
//! document into the bounded past stack, clear the future stack, delegate to
//! the document reducer, mark unsaved. Selection and app-meta actions bypass
//! history entirely; undo/redo moves the present between the stacks without
//! touching either of them.
//!
//! The store is an explicit value constructed by the embedder and passed by
//! reference to consumers; there is no process-wide singleton. Readers only
//! ever observe fully committed state between dispatches.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionTarget};
use crate::app_meta::AppMetaState;
use crate::canvas::CanvasState;
use crate::document::Document;
use crate::edge::EdgeStore;
use crate::error::StoreError;
use crate::history::History;
use crate::node::NodeStore;
use crate::selection::SelectionState;

/// Fixed bound on the undo past stack; the oldest snapshot is evicted first.
pub const HISTORY_LIMIT: usize = 10;

/// Store behavior configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// In strict mode, mutating a missing node or edge returns
    /// `StoreError::NotFound` instead of silently doing nothing. Lenient is
    /// the default, matching UI-tolerant expectations.
    pub strict: bool,
}

/// Plain snapshot exchanged with the persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub nodes: NodeStore,
    pub edges: EdgeStore,
    pub canvas: CanvasState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionState>,
}

/// The in-memory model for a diagram editor session.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    history: History<Document>,
    selection: SelectionState,
    app_meta: AppMetaState,
    config: StoreConfig,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            history: History::new(Document::new(), HISTORY_LIMIT),
            selection: SelectionState::new(),
            app_meta: AppMetaState::default(),
            config,
        }
    }

    /// The committed present document.
    pub fn document(&self) -> &Document {
        self.history.present()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn app_meta(&self) -> &AppMetaState {
        &self.app_meta
    }

    pub fn undo_depth(&self) -> usize {
        self.history.past_len()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.future_len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply one action. Exactly one action is fully applied — snapshot,
    /// delegate, commit — before the next is accepted.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        action.validate()?;
        match action.target() {
            ActionTarget::Document => {
                if self.config.strict
                    && let Err(error) = self.check_references(&action)
                {
                    warn!("strict dispatch rejected {action:?}: {error}");
                    return Err(error);
                }
                self.history.checkpoint();
                self.history.present_mut().apply(&action);
                self.app_meta.mark_unsaved();
            }
            ActionTarget::History => {
                let moved = match action {
                    Action::Undo => self.history.undo(),
                    _ => self.history.redo(),
                };
                if !moved {
                    debug!("history stack empty; {action:?} ignored");
                }
            }
            ActionTarget::Selection => self.apply_selection(action),
            ActionTarget::AppMeta => self.apply_app_meta(action),
        }
        Ok(())
    }

    /// Strict-mode reference check, evaluated against the present document
    /// before any snapshot or mutation.
    fn check_references(&self, action: &Action) -> Result<(), StoreError> {
        let document = self.history.present();
        match action {
            Action::RemoveNode(id) | Action::UpdateNodeProps { id, .. }
                if !document.nodes.contains(*id) =>
            {
                Err(StoreError::NotFound(format!("node {id}")))
            }
            Action::RemoveEdge { source, target }
                if !document.edges.contains_pair(*source, *target) =>
            {
                Err(StoreError::NotFound(format!("edge {source}-{target}")))
            }
            _ => Ok(()),
        }
    }

    fn apply_selection(&mut self, action: Action) {
        match action {
            Action::SelectNode(id) => self.selection.select_node(id),
            Action::SelectEdge(key) => self.selection.select_edge(key),
            Action::SelectMultipleNodes(ids) => self.selection.select_nodes(ids),
            Action::SelectMultipleEdges(keys) => self.selection.select_edges(keys),
            Action::AddNodeToSelection(id) => self.selection.add_node(id),
            Action::RemoveNodeFromSelection(id) => self.selection.remove_node(id),
            Action::AddEdgeToSelection(key) => self.selection.add_edge(key),
            Action::RemoveEdgeFromSelection(key) => self.selection.remove_edge(&key),
            Action::ClearNodeSelection => self.selection.clear_nodes(),
            Action::ClearEdgeSelection => self.selection.clear_edges(),
            Action::ClearAllSelections => self.selection.clear_all(),
            _ => {}
        }
    }

    fn apply_app_meta(&mut self, action: Action) {
        match action {
            Action::ToggleSidebar(visible) => self.app_meta.toggle_sidebar(visible),
            Action::SetLastSaved(timestamp) => self.app_meta.set_last_saved(timestamp),
            _ => {}
        }
    }

    /// Plain snapshot of the present document plus the current selection,
    /// for the external persistence collaborator.
    pub fn export(&self) -> DocumentSnapshot {
        let document = self.history.present();
        DocumentSnapshot {
            nodes: document.nodes.clone(),
            edges: document.edges.clone(),
            canvas: document.canvas.clone(),
            selection: Some(self.selection.clone()),
        }
    }

    /// Replace the present document with `snapshot` and drop both history
    /// stacks. A snapshot carrying a selection restores it; one without
    /// leaves the current selection in place.
    pub fn import(&mut self, snapshot: DocumentSnapshot) {
        debug!(
            "importing snapshot: {} nodes, {} edges",
            snapshot.nodes.len(),
            snapshot.edges.len()
        );
        self.history.replace_present(Document {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            canvas: snapshot.canvas,
        });
        if let Some(selection) = snapshot.selection {
            self.selection = selection;
        }
    }
}
