/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Errors reported across the dispatch boundary.
//!
//! Errors are returned values, never panics: malformed payloads are rejected
//! before any store is touched, and missing references only surface in strict
//! mode. State is never left partially mutated on an error path.

use std::fmt;

/// Errors from the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A referenced node or edge does not exist (strict mode only).
    NotFound(String),
    /// A malformed action payload, rejected at the dispatch boundary.
    Validation(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(what) => write!(f, "not found: {what}"),
            StoreError::Validation(what) => write!(f, "invalid payload: {what}"),
        }
    }
}

impl std::error::Error for StoreError {}
