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

use std::collections::BTreeMap;

use log::trace;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::derived;
use crate::field::*;
use crate::fields::{last_observation, unpack_designation, unpack_epoch, Arc, Epoch, Readable};
use crate::{coerce, Error, Value};

/// Separator of the other designations at the end of a line.
const DESIG_SEPARATOR: &str = "  ";

/// The orbital elements and identification of one catalogue entry.
///
/// Fields that are blank in the catalogue are absent from the record.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct OrbitRecord {
    fields: BTreeMap<&'static str, Value>,
}

impl OrbitRecord {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// The unpacked principal designation.
    pub fn designation(&self) -> Option<&str> {
        self.get(PRINCIPAL_DESIG).and_then(Value::as_str)
    }

    fn insert(&mut self, name: &'static str, value: impl Into<Value>) {
        self.fields.insert(name, value.into());
    }

    fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }
}

/// Decodes catalogue lines.
///
/// This trait is implemented by [`RecordDecoder`] and lets consumers wrap the
/// decoder, e.g. to count or trace decoded lines.
pub trait Decode {
    /// Decodes one line into a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if a field contains text that is not of the
    /// field's kind.
    fn decode(&self, line: &str) -> Result<OrbitRecord, Error>;
}

impl<D: Decode + ?Sized> Decode for &D {
    fn decode(&self, line: &str) -> Result<OrbitRecord, Error> {
        (**self).decode(line)
    }
}

/// Decoder of the MPCORB fixed-column layout.
///
/// Each [field](crate::FIELDS) is sliced from the line and trimmed. Packed
/// designations and epochs are unpacked, the arc group is read either as years
/// or as length, and all other fields are converted to their kind. Finally the
/// [derived elements](crate::derived) are added.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct RecordDecoder;

impl RecordDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decode for RecordDecoder {
    fn decode(&self, line: &str) -> Result<OrbitRecord, Error> {
        let mut record = OrbitRecord::default();

        for spec in FIELDS {
            let raw = spec.slice(line);
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                continue;
            }

            match spec.name {
                PRINCIPAL_DESIG => record.insert(spec.name, unpack_designation(trimmed)),

                EPOCH => match unpack_epoch(trimmed) {
                    Epoch::JulianDate(jd) => record.insert(spec.name, jd),
                    Epoch::Raw(packed) => record.insert(spec.name, packed),
                },

                ARC_YEARS => {
                    if let Some(Arc::Years(years)) = Arc::resolve(raw) {
                        let value = coerce(spec.name, years, spec.kind, DESIG_SEPARATOR)?;
                        record.insert(spec.name, value);
                    }
                }

                ARC_LENGTH => match Arc::resolve(raw) {
                    Some(Arc::Length("")) => trace!("arc {trimmed:?} has no length in days"),
                    Some(Arc::Length(days)) => {
                        let value = coerce(spec.name, days, spec.kind, DESIG_SEPARATOR)?;
                        record.insert(spec.name, value);
                    }
                    _ => {}
                },

                NUMBER => {
                    let readable = Readable::parse(raw);
                    if let Some(number) = readable.number {
                        record.insert(NUMBER, number);
                    }
                    if let Some(name) = readable.name {
                        record.insert(NAME, name);
                    }
                }

                // read along with the number
                NAME => {}

                LAST_OBS => {
                    let part = |range: std::ops::Range<usize>| raw.get(range).unwrap_or("");
                    if let Some(date) = last_observation(part(0..4), part(4..6), part(6..8)) {
                        record.insert(spec.name, date);
                    }
                }

                _ => {
                    let value = coerce(spec.name, trimmed, spec.kind, DESIG_SEPARATOR)?;
                    match &value {
                        Value::List(list) if list.is_empty() => {}
                        _ => record.insert(spec.name, value),
                    }
                }
            }
        }

        add_derived(&mut record);

        Ok(record)
    }
}

fn add_derived(record: &mut OrbitRecord) {
    let a = record.float(A);
    let e = record.float(E);

    if let (Some(a), Some(e)) = (a, e) {
        if let Some(apsides) = derived::apsides(a, e) {
            record.insert(PERIHELION_DIST, apsides.perihelion);
            record.insert(APHELION_DIST, apsides.aphelion);
        }

        if let Some(p) = derived::semilatus_rectum(a, e) {
            record.insert(SEMILATUS_RECTUM, p);
        }
    }

    if let Some(period) = a.and_then(derived::orbital_period) {
        record.insert(ORBITAL_PERIOD, period);

        if let Some(synodic) = derived::synodic_period(period) {
            record.insert(SYNODIC_PERIOD, synodic);
        }
    }

    let orbit_type = record
        .get(HEX_FLAGS)
        .and_then(Value::as_str)
        .and_then(derived::orbit_type);

    if let Some(orbit_type) = orbit_type {
        record.insert(ORBIT_TYPE, orbit_type);
    }
}
