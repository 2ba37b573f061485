/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shallow merge for extension property maps.
//!
//! Precedence is "new overrides old": top-level keys from the patch replace
//! existing entries wholesale. Nested values are not recursed into; a patch
//! carrying `{"style": {"a": 1}}` fully replaces any stored `"style"` object.

use std::collections::BTreeMap;

use serde_json::Value;

/// Open-ended extension properties carried alongside the typed fields of a
/// node or edge. `BTreeMap` keeps snapshot serialization deterministic.
pub type ExtProps = BTreeMap<String, Value>;

/// Merge `patch` into `dest`, top-level keys only.
pub fn merge_ext(dest: &mut ExtProps, patch: &ExtProps) {
    for (key, value) in patch {
        dest.insert(key.clone(), value.clone());
    }
}
