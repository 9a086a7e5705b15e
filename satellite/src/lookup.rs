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

//! Cardinality check shared by the lookup calls.

use crate::Error;

/// Demand exactly one result from a lookup listing. Zero results raise
/// [`Error::NoMatch`], more than one [`Error::Ambiguous`].
pub(crate) fn one_of<T: Clone, E>(
    results: &[T],
    kind: &'static str,
    search: Option<&str>,
) -> Result<T, Error<E>> {
    match results {
        [one] => Ok(one.clone()),
        [] => Err(Error::NoMatch {
            kind,
            search: search.map(str::to_string),
        }),
        many => Err(Error::Ambiguous {
            kind,
            search: search.map(str::to_string),
            count: many.len(),
        }),
    }
}
