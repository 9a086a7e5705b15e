// SPDX-FileCopyrightText: Copyright (c) 2026 rh-satellite contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Association set reconciliation.
//!
//! Satellite models several many-to-many relations (host collections on an
//! activation key, permissions on a filter) whose membership is edited
//! through bulk "associate" / "disassociate" calls. [`reconcile`] computes
//! the minimal edit between the previously recorded membership and the
//! desired one.
//!
//! Callers issue at most two calls per reconciliation: one bulk add with
//! [`Reconciliation::to_add`] (skipped when empty) and one bulk remove with
//! [`Reconciliation::to_remove`] (skipped when empty). Failures of either
//! call surface unchanged; nothing here retries or partially applies.

use std::collections::BTreeSet;

/// Edits that transform one association set into another.
///
/// Both lists are sorted ascending and disjoint. Applying `to_remove` and
/// `to_add` to the current set, in either order, yields exactly the desired
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<T> {
    /// Members of the desired set that the current set lacks.
    pub to_add: Vec<T>,
    /// Members of the current set that the desired set lacks.
    pub to_remove: Vec<T>,
}

impl<T> Reconciliation<T> {
    /// True when the current set already equals the desired set.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the edits that turn `current` into `desired`.
///
/// Pure and deterministic: both scans run in ascending order, so the output
/// lists come out sorted. Order never affects resulting membership, only the
/// shape of the bulk calls built from it.
#[must_use]
pub fn reconcile<T>(current: &BTreeSet<T>, desired: &BTreeSet<T>) -> Reconciliation<T>
where
    T: Ord + Clone,
{
    Reconciliation {
        to_add: desired.difference(current).cloned().collect(),
        to_remove: current.difference(desired).cloned().collect(),
    }
}
