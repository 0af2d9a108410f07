// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use crate::Kind;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The name is neither a catalogue column nor a derived element.
    UnknownField { name: String },
    /// A value could not be converted to the type declared for its field.
    Coercion {
        field: &'static str,
        value: String,
        expected: Kind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { name } => {
                write!(f, "\"{name}\" is not a known MPCORB field")
            }
            Self::Coercion {
                field,
                value,
                expected,
            } => {
                write!(f, "found \"{value}\" in {field} but should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}
