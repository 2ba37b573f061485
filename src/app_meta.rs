/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Application-chrome metadata: sidebar visibility and save tracking.
//!
//! Lives outside the document and outside undo/redo, like the selection.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Chrome-adjacent state the rendering layer reads but never snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetaState {
    pub show_sidebar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<String>,
    pub has_unsaved_changes: bool,
}

impl Default for AppMetaState {
    fn default() -> Self {
        Self {
            show_sidebar: true,
            last_saved: None,
            has_unsaved_changes: false,
        }
    }
}

impl AppMetaState {
    /// Set sidebar visibility explicitly, or flip it when no value is given.
    pub fn toggle_sidebar(&mut self, visible: Option<bool>) {
        self.show_sidebar = visible.unwrap_or(!self.show_sidebar);
    }

    /// Record a save marker and clear the unsaved flag. A missing timestamp
    /// takes the current UTC time in RFC 3339 form.
    pub fn set_last_saved(&mut self, timestamp: Option<String>) {
        let stamp = timestamp.unwrap_or_else(|| {
            OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default()
        });
        self.last_saved = Some(stamp);
        self.has_unsaved_changes = false;
    }

    /// Start a fresh unsaved-change episode; set by any document mutation.
    pub fn mark_unsaved(&mut self) {
        self.has_unsaved_changes = true;
    }
}
