// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A query token is not of the form `key:value`.
    MalformedToken(String),
    /// A query key is unknown or its value has the wrong type.
    InvalidQuery(mpcorb::Error),
    /// A catalogue line has a field of the wrong type.
    InvalidLine { line: usize, error: mpcorb::Error },
    /// The configuration could not be read.
    InvalidConfig(String),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken(token) => {
                write!(f, "query token \"{token}\" should be KEY:VALUE")
            }
            Self::InvalidQuery(e) => write!(f, "invalid query: {e}"),
            Self::InvalidLine { line, error } => write!(f, "line {line}: {error}"),
            Self::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidQuery(e) | Self::InvalidLine { error: e, .. } => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<mpcorb::Error> for Error {
    fn from(e: mpcorb::Error) -> Self {
        Self::InvalidQuery(e)
    }
}
