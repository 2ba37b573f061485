/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! In-memory document model for interactive node/edge diagram editors.
//!
//! Core structures:
//! - `DocumentStore`: single-writer dispatch loop over the composite document,
//!   selection, and app-chrome state
//! - `Document`: the `{nodes, edges, canvas}` composite, the unit of undo/redo
//! - `History`: bounded past/present/future snapshot stacks
//! - `Action`: the typed intent vocabulary dispatched by the interaction layer
//!
//! Boundary: the rendering/interaction layer dispatches `Action`s and reads
//! committed state between dispatches; persistence exchanges plain
//! `DocumentSnapshot` values at `export`/`import`. Selection and app-meta are
//! deliberately outside the history-controlled document.

pub mod action;
pub mod app_meta;
pub mod canvas;
pub mod document;
pub mod edge;
pub mod error;
pub mod history;
pub mod merge;
pub mod node;
pub mod selection;
pub mod store;

pub use action::{Action, ActionTarget};
pub use app_meta::AppMetaState;
pub use canvas::CanvasState;
pub use document::Document;
pub use edge::{Edge, EdgeDirection, EdgeKey, EdgePatch, EdgeProps, EdgeStore};
pub use error::StoreError;
pub use history::History;
pub use merge::{ExtProps, merge_ext};
pub use node::{Node, NodeId, NodePatch, NodeProps, NodeStore};
pub use selection::SelectionState;
pub use store::{DocumentSnapshot, DocumentStore, HISTORY_LIMIT, StoreConfig};
