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

//! Mock transport for tests.
//!
//! The mock holds a FIFO queue of [`Expect`] values. Each incoming call pops
//! the front expectation; a call that does not match it fails the test with a
//! descriptive error. Resource operations are multi-request flows, so tests
//! enqueue the full sequence up front.

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;
pub use expect::Response;

use rh_satellite_core::ApiPath;
use rh_satellite_core::Empty;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite as RhSatellite;
use rh_satellite_core::SearchQuery;
use serde::Serialize;
use serde_json::from_value;
use serde_json::to_value;
use serde_json::Error as JsonError;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error {
    ErrorResponse(Box<dyn StdError + Send + Sync>),
    MutexLock(String),
    NothingIsExpected,
    BadResponseJson(JsonError),
    NotFound(ApiPath),
    UnexpectedGet(ApiPath, ExpectedRequest),
    UnexpectedSearch(ApiPath, String, ExpectedRequest),
    UnexpectedCreate(ApiPath, String, ExpectedRequest),
    UnexpectedUpdate(ApiPath, String, ExpectedRequest),
    UnexpectedDelete(ApiPath, ExpectedRequest),
    UnexpectedUpload(ApiPath, String, ExpectedRequest),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ErrorResponse(err) => write!(f, "response: {err}"),
            Self::MutexLock(err) => write!(f, "lock error: {err}"),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::BadResponseJson(err) => write!(f, "bad json response: {err}"),
            Self::NotFound(path) => write!(f, "not found: {path}"),
            Self::UnexpectedGet(path, expected) => {
                write!(f, "unexpected get: {path}; expected: {expected:?}")
            }
            Self::UnexpectedSearch(path, query, expected) => {
                write!(
                    f,
                    "unexpected search: {path}?{query}; expected: {expected:?}"
                )
            }
            Self::UnexpectedCreate(path, json, expected) => {
                write!(
                    f,
                    "unexpected create: {path}; json: {json} expected: {expected:?}"
                )
            }
            Self::UnexpectedUpdate(path, json, expected) => {
                write!(
                    f,
                    "unexpected update: {path}; json: {json} expected: {expected:?}"
                )
            }
            Self::UnexpectedDelete(path, expected) => {
                write!(f, "unexpected delete: {path}; expected: {expected:?}")
            }
            Self::UnexpectedUpload(path, file_name, expected) => {
                write!(
                    f,
                    "unexpected upload: {path}; file: {file_name} expected: {expected:?}"
                )
            }
        }
    }
}

impl StdError for Error {}

impl NotFoundError for Error {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

#[derive(Default)]
pub struct Satellite<E> {
    expect: Mutex<VecDeque<Expect<E>>>,
}

impl<E> Satellite<E> {
    /// Queue an expectation. Expectations are consumed in FIFO order, one
    /// per incoming request.
    pub fn expect(&self, exp: Expect<E>) {
        let expect: &mut VecDeque<Expect<E>> = &mut self.expect.lock().expect("not poisoned");
        expect.push_back(exp);
    }

    pub fn debug_expect(&self) {
        let expect: &VecDeque<Expect<E>> = &self.expect.lock().expect("not poisoned");
        println!("Expectations (total: {})", expect.len());
        for v in expect {
            println!("{:#?}", v.request);
        }
    }

    fn pop(&self) -> Result<Expect<E>, Error> {
        self.expect
            .lock()
            .map_err(Error::mutex_lock)?
            .pop_front()
            .ok_or(Error::NothingIsExpected)
    }
}

fn respond<T, E>(path: &ApiPath, response: Response<E>) -> Result<T, Error>
where
    T: for<'a> serde::Deserialize<'a>,
    E: StdError + Send + Sync + 'static,
{
    match response {
        Response::Success(value) => from_value(value).map_err(Error::BadResponseJson),
        Response::NotFound => Err(Error::NotFound(path.clone())),
        Response::Failure(err) => Err(Error::ErrorResponse(Box::new(err))),
    }
}

impl<E> RhSatellite for Satellite<E>
where
    E: StdError + Send + Sync + 'static,
{
    type Error = Error;

    async fn get<T: Sized + for<'a> serde::Deserialize<'a> + 'static + Send + Sync>(
        &self,
        in_path: &ApiPath,
    ) -> Result<Arc<T>, Self::Error> {
        let expect = self.pop()?;
        match expect {
            Expect {
                request: ExpectedRequest::Get { path },
                response,
            } if path == *in_path => respond(in_path, response).map(Arc::new),
            _ => Err(Error::UnexpectedGet(in_path.clone(), expect.request)),
        }
    }

    async fn search<T: Sized + for<'a> serde::Deserialize<'a> + 'static + Send + Sync>(
        &self,
        in_path: &ApiPath,
        in_query: &SearchQuery,
    ) -> Result<Arc<T>, Self::Error> {
        let expect = self.pop()?;
        let in_query = in_query.to_query_string();
        match expect {
            Expect {
                request: ExpectedRequest::Search { path, query },
                response,
            } if path == *in_path && query == in_query => {
                respond(in_path, response).map(Arc::new)
            }
            _ => Err(Error::UnexpectedSearch(
                in_path.clone(),
                in_query,
                expect.request,
            )),
        }
    }

    async fn create<
        V: Sync + Send + Serialize,
        R: Sync + Send + Sized + for<'a> serde::Deserialize<'a>,
    >(
        &self,
        in_path: &ApiPath,
        body: &V,
    ) -> Result<R, Self::Error> {
        let expect = self.pop()?;
        let in_request = to_value(body).expect("json serializable");
        match expect {
            Expect {
                request: ExpectedRequest::Create { path, request },
                response,
            } if path == *in_path && request == in_request => respond(in_path, response),
            _ => Err(Error::UnexpectedCreate(
                in_path.clone(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn update<
        V: Sync + Send + Serialize,
        R: Sync + Send + Sized + for<'a> serde::Deserialize<'a>,
    >(
        &self,
        in_path: &ApiPath,
        body: &V,
    ) -> Result<R, Self::Error> {
        let expect = self.pop()?;
        let in_request = to_value(body).expect("json serializable");
        match expect {
            Expect {
                request: ExpectedRequest::Update { path, request },
                response,
            } if path == *in_path && request == in_request => respond(in_path, response),
            _ => Err(Error::UnexpectedUpdate(
                in_path.clone(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn delete(&self, in_path: &ApiPath) -> Result<Empty, Self::Error> {
        let expect = self.pop()?;
        match expect {
            Expect {
                request: ExpectedRequest::Delete { path },
                response,
            } if path == *in_path => match response {
                Response::Success(_) => Ok(Empty {}),
                Response::NotFound => Err(Error::NotFound(in_path.clone())),
                Response::Failure(err) => Err(Error::ErrorResponse(Box::new(err))),
            },
            _ => Err(Error::UnexpectedDelete(in_path.clone(), expect.request)),
        }
    }

    async fn upload<R: Sync + Send + Sized + for<'a> serde::Deserialize<'a>>(
        &self,
        in_path: &ApiPath,
        in_file_name: &str,
        in_content: Vec<u8>,
    ) -> Result<R, Self::Error> {
        let expect = self.pop()?;
        match expect {
            Expect {
                request:
                    ExpectedRequest::Upload {
                        path,
                        file_name,
                        content,
                    },
                response,
            } if path == *in_path && file_name == in_file_name && content == in_content => {
                respond(in_path, response)
            }
            _ => Err(Error::UnexpectedUpload(
                in_path.clone(),
                in_file_name.to_string(),
                expect.request,
            )),
        }
    }
}
