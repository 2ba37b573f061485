/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Viewport and canvas configuration.
//!
//! Zoom is clamped against the bounds stored at the time of the set; changing
//! the bounds later does not retroactively re-clamp a previously set zoom.
//! Dimensions and offsets are assigned unconditionally.

use serde::{Deserialize, Serialize};

/// Single-instance canvas configuration for the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub width: f64,
    pub height: f64,
    pub zoom_level: f64,
    pub min_zoom_level: f64,
    pub max_zoom_level: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub show_grid: bool,
    pub grid_size: f64,
    pub snap_to_grid: bool,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub is_editable: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            zoom_level: 1.0,
            min_zoom_level: 0.1,
            max_zoom_level: 5.0,
            offset_x: 0.0,
            offset_y: 0.0,
            show_grid: true,
            grid_size: 20.0,
            snap_to_grid: true,
            background_color: "#ffffff".to_string(),
            background_image: None,
            is_editable: true,
        }
    }
}

impl CanvasState {
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Clamp `value` into the currently stored zoom bounds and store it.
    /// Out-of-range inputs are clamped, never rejected.
    pub fn set_zoom(&mut self, value: f64) {
        // max/min chain rather than f64::clamp: inverted bounds are not
        // enforced anywhere, and clamp would panic on them.
        self.zoom_level = value.max(self.min_zoom_level).min(self.max_zoom_level);
    }

    pub fn pan(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_snap(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }

    pub fn set_grid_size(&mut self, size: f64) {
        self.grid_size = size;
    }

    pub fn set_background_color(&mut self, color: String) {
        self.background_color = color;
    }

    pub fn set_background_image(&mut self, uri: Option<String>) {
        self.background_image = uri;
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.is_editable = editable;
    }
}
