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

//! Query mini-language.
//!
//! A query is a whitespace separated list of `key:value` tokens, e.g.
//!
//! ```text
//! Aphelion_dist:3.1948214 Num_opps:38
//! ```
//!
//! Each key must name a catalogue field or a derived element and each value is
//! converted to the field's type when the query is parsed. Values of list
//! fields (`Other_desigs`) are separated by commas.

use std::str::FromStr;

use mpcorb::field::EPOCH;
use mpcorb::{OrbitRecord, Value};

use crate::error::Error;

const DELIMITER: char = ':';
const LIST_SEPARATOR: &str = ",";

/// A query of field values that records must match.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Query {
    terms: Vec<(&'static str, Value)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the query from its `key:value` tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if a token has no `:`, the key is not a known field or
    /// the value can't be converted to the field's type.
    pub fn parse<I, S>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().try_fold(Self::new(), |query, token| {
            let token = token.as_ref();
            let (key, value) = token
                .split_once(DELIMITER)
                .ok_or_else(|| Error::MalformedToken(token.to_owned()))?;
            query.with(key, value)
        })
    }

    /// Adds the term `key:value`, replacing any previous term of the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a known field or the value can't be
    /// converted to the field's type. An `Epoch` that is not a Julian Date is
    /// kept as text, matching records whose packed epoch couldn't be decoded.
    pub fn with(mut self, key: &str, value: &str) -> Result<Self, Error> {
        let (field, kind) = mpcorb::canonical(key)
            .zip(mpcorb::kind_of(key))
            .ok_or_else(|| mpcorb::Error::UnknownField {
                name: key.to_owned(),
            })?;

        let value = match mpcorb::coerce(field, value, kind, LIST_SEPARATOR) {
            Ok(value) => value,
            Err(_) if field == EPOCH => Value::from(value),
            Err(e) => return Err(e.into()),
        };

        match self.terms.iter_mut().find(|(name, _)| *name == field) {
            Some(term) => term.1 = value,
            None => self.terms.push((field, value)),
        }

        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.terms.iter().map(|(name, value)| (*name, value))
    }

    /// Returns `true` if every term of this query is in the record.
    ///
    /// Fields of the record that are not queried are ignored. A list term
    /// matches if all its items are in the record's list.
    pub fn matches(&self, record: &OrbitRecord) -> bool {
        self.terms
            .iter()
            .all(|(name, expected)| match (expected, record.get(name)) {
                (Value::List(items), Some(Value::List(list))) => {
                    items.iter().all(|item| list.contains(item))
                }
                (expected, Some(actual)) => expected == actual,
                (_, None) => false,
            })
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.split_whitespace())
    }
}
