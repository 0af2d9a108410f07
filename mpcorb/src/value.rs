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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Kind};

/// A typed field value of an [`OrbitRecord`](crate::OrbitRecord).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Text(_) => Kind::Text,
            Self::List(_) => Kind::List,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(l) => write!(f, "{}", l.join(", ")),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Converts the trimmed `raw` text of `field` to a value of `kind`.
///
/// List values are separated by `separator` and empty items are dropped.
///
/// # Errors
///
/// Returns [`Error::Coercion`] naming the field and the offending text if it
/// can't be parsed as `kind`.
pub fn coerce(
    field: &'static str,
    raw: &str,
    kind: Kind,
    separator: &str,
) -> Result<Value, Error> {
    let fail = || Error::Coercion {
        field,
        value: raw.to_owned(),
        expected: kind,
    };

    match kind {
        Kind::Text => Ok(Value::Text(raw.to_owned())),
        Kind::Integer => raw.parse().map(Value::Integer).map_err(|_| fail()),
        Kind::Float => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Float)
            .ok_or_else(fail),
        Kind::List => Ok(Value::List(
            raw.split(separator)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_declared_kinds() {
        assert_eq!(coerce("H", "3.34", Kind::Float, ","), Ok(Value::Float(3.34)));
        assert_eq!(coerce("Num_opps", "38", Kind::Integer, ","), Ok(Value::Integer(38)));
        assert_eq!(coerce("U", "0", Kind::Text, ","), Ok(Value::from("0")));
        assert_eq!(
            coerce("Other_desigs", "A899 OF  1943 XB", Kind::List, "  "),
            Ok(Value::List(vec!["A899 OF".to_owned(), "1943 XB".to_owned()]))
        );
    }

    #[test]
    fn reports_failed_coercion() {
        assert_eq!(
            coerce("Num_obs", "7330.5", Kind::Integer, ","),
            Err(Error::Coercion {
                field: "Num_obs",
                value: "7330.5".to_owned(),
                expected: Kind::Integer,
            })
        );
        assert!(coerce("a", "NaN", Kind::Float, ",").is_err());
        assert!(coerce("H", "3.3x", Kind::Float, ",").is_err());
    }
}
