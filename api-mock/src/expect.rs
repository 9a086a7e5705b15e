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

//! Expectations for the Satellite mock.

use rh_satellite_core::ApiPath;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

/// Canned outcome of an expected request.
#[derive(Debug)]
pub enum Response<E> {
    /// Respond with the given JSON document.
    Success(JsonValue),
    /// Respond as the server would for a missing resource (HTTP 404).
    NotFound,
    /// Fail with the given transport error.
    Failure(E),
}

/// Request expected by the Satellite mock.
#[derive(Debug)]
pub enum ExpectedRequest {
    /// Expected Get.
    Get { path: ApiPath },
    /// Expected Search, with the rendered query string.
    Search { path: ApiPath, query: String },
    /// Expected Create.
    Create { path: ApiPath, request: JsonValue },
    /// Expected Update.
    Update { path: ApiPath, request: JsonValue },
    /// Expected Delete.
    Delete { path: ApiPath },
    /// Expected Upload.
    Upload {
        path: ApiPath,
        file_name: String,
        content: Vec<u8>,
    },
}

/// Expectation for the tests.
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Response<E>,
}

impl<E> Expect<E> {
    pub fn get(path: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: path.to_string().into(),
            },
            response: Response::Success(parse(response)),
        }
    }

    pub fn get_not_found(path: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: path.to_string().into(),
            },
            response: Response::NotFound,
        }
    }

    pub fn get_failure(path: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: path.to_string().into(),
            },
            response: Response::Failure(error),
        }
    }

    pub fn search(path: impl Display, query: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Search {
                path: path.to_string().into(),
                query: query.to_string(),
            },
            response: Response::Success(parse(response)),
        }
    }

    pub fn search_failure(path: impl Display, query: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Search {
                path: path.to_string().into(),
                query: query.to_string(),
            },
            response: Response::Failure(error),
        }
    }

    pub fn create(path: impl Display, request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Create {
                path: path.to_string().into(),
                request: parse(request),
            },
            response: Response::Success(parse(response)),
        }
    }

    pub fn create_failure(path: impl Display, request: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Create {
                path: path.to_string().into(),
                request: parse(request),
            },
            response: Response::Failure(error),
        }
    }

    pub fn update(path: impl Display, request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Update {
                path: path.to_string().into(),
                request: parse(request),
            },
            response: Response::Success(parse(response)),
        }
    }

    pub fn update_failure(path: impl Display, request: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Update {
                path: path.to_string().into(),
                request: parse(request),
            },
            response: Response::Failure(error),
        }
    }

    pub fn delete(path: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Delete {
                path: path.to_string().into(),
            },
            response: Response::Success(JsonValue::Null),
        }
    }

    pub fn delete_failure(path: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Delete {
                path: path.to_string().into(),
            },
            response: Response::Failure(error),
        }
    }

    pub fn upload(
        path: impl Display,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        response: impl Display,
    ) -> Self {
        Expect {
            request: ExpectedRequest::Upload {
                path: path.to_string().into(),
                file_name: file_name.into(),
                content: content.into(),
            },
            response: Response::Success(parse(response)),
        }
    }
}

fn parse(json: impl Display) -> JsonValue {
    from_str(&json.to_string()).expect("invalid json")
}
