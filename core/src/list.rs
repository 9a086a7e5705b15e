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

//! Listing envelope
//!
//! Every Satellite listing endpoint wraps its results in the same pagination
//! envelope. [`ListResult`] mirrors it generically over the element type.

use serde::Deserialize;

/// The `{total, subtotal, page, per_page, search, results}` envelope of a
/// listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResult<T> {
    pub total: Option<u64>,
    pub subtotal: Option<u64>,
    pub page: Option<PageValue>,
    pub per_page: Option<PageValue>,
    pub search: Option<String>,
    pub results: Vec<T>,
}

/// Pagination counters arrive as numbers on most endpoints and as decimal
/// strings on a few older ones.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageValue {
    Number(u64),
    Text(String),
}
