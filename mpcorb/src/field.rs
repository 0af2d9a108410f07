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

/// The type a field's text is converted to.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Kind {
    Text,
    Integer,
    Float,
    /// A sequence of text values.
    List,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "an integer"),
            Self::Float => write!(f, "a floating-point number"),
            Self::List => write!(f, "a list of text"),
        }
    }
}

/// A fixed-column field of an MPCORB line.
///
/// The columns are 0-indexed and half-open. A field without an end runs to the
/// end of the line.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: Option<usize>,
    pub kind: Kind,
}

impl FieldSpec {
    const fn new(name: &'static str, start: usize, end: usize, kind: Kind) -> Self {
        Self {
            name,
            start,
            end: Some(end),
            kind,
        }
    }

    /// Returns the raw, untrimmed text of this field.
    ///
    /// Columns past the end of a short line are treated as blank, so the slice
    /// may be shorter than the field or empty.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.map_or(line.len(), |end| end.min(line.len()));
        line.get(self.start..end).unwrap_or("")
    }
}

/////////////////////////////////////////////////////////////////////////////
// Field names
/////////////////////////////////////////////////////////////////////////////

pub const PRINCIPAL_DESIG: &str = "Principal_desig";
pub const H: &str = "H";
pub const G: &str = "G";
pub const EPOCH: &str = "Epoch";
pub const M: &str = "M";
pub const PERI: &str = "Peri";
pub const NODE: &str = "Node";
pub const I: &str = "i";
pub const E: &str = "e";
pub const N: &str = "n";
pub const A: &str = "a";
pub const U: &str = "U";
pub const REF: &str = "Ref";
pub const NUM_OBS: &str = "Num_obs";
pub const NUM_OPPS: &str = "Num_opps";
pub const ARC_YEARS: &str = "Arc_years";
pub const ARC_LENGTH: &str = "Arc_length";
pub const RMS: &str = "rms";
pub const PERTURBERS: &str = "Perturbers";
pub const PERTURBERS_2: &str = "Perturbers_2";
pub const COMPUTER: &str = "Computer";
pub const HEX_FLAGS: &str = "Hex_flags";
pub const NUMBER: &str = "Number";
pub const NAME: &str = "Name";
pub const LAST_OBS: &str = "Last_obs";
pub const TP: &str = "Tp";
pub const OTHER_DESIGS: &str = "Other_desigs";

pub const PERIHELION_DIST: &str = "Perihelion_dist";
pub const APHELION_DIST: &str = "Aphelion_dist";
pub const SEMILATUS_RECTUM: &str = "Semilatus_rectum";
pub const ORBITAL_PERIOD: &str = "Orbital_period";
pub const SYNODIC_PERIOD: &str = "Synodic_period";
pub const ORBIT_TYPE: &str = "Orbit_type";

/////////////////////////////////////////////////////////////////////////////
// Field table
/////////////////////////////////////////////////////////////////////////////

/// The column layout of an MPCORB line.
///
/// Some fields share their columns: `Arc_years` and `Arc_length` are two
/// readings of the same arc group, and `Number` and `Name` are both read from
/// the readable designation.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec::new(PRINCIPAL_DESIG, 0, 7, Kind::Text),
    FieldSpec::new(H, 8, 13, Kind::Float),
    FieldSpec::new(G, 14, 19, Kind::Float),
    FieldSpec::new(EPOCH, 20, 25, Kind::Float),
    FieldSpec::new(M, 26, 35, Kind::Float),
    FieldSpec::new(PERI, 36, 46, Kind::Float),
    FieldSpec::new(NODE, 47, 57, Kind::Float),
    FieldSpec::new(I, 58, 68, Kind::Float),
    FieldSpec::new(E, 69, 79, Kind::Float),
    FieldSpec::new(N, 80, 91, Kind::Float),
    FieldSpec::new(A, 92, 103, Kind::Float),
    FieldSpec::new(U, 104, 106, Kind::Text),
    FieldSpec::new(REF, 107, 116, Kind::Text),
    FieldSpec::new(NUM_OBS, 117, 122, Kind::Integer),
    FieldSpec::new(NUM_OPPS, 123, 126, Kind::Integer),
    FieldSpec::new(ARC_YEARS, 127, 136, Kind::Text),
    FieldSpec::new(ARC_LENGTH, 127, 136, Kind::Integer),
    FieldSpec::new(RMS, 137, 141, Kind::Float),
    FieldSpec::new(PERTURBERS, 142, 145, Kind::Text),
    FieldSpec::new(PERTURBERS_2, 146, 149, Kind::Text),
    FieldSpec::new(COMPUTER, 150, 160, Kind::Text),
    FieldSpec::new(HEX_FLAGS, 161, 165, Kind::Text),
    FieldSpec::new(NUMBER, 166, 194, Kind::Text),
    FieldSpec::new(NAME, 166, 194, Kind::Text),
    FieldSpec::new(LAST_OBS, 194, 202, Kind::Text),
    FieldSpec::new(TP, 203, 216, Kind::Float),
    FieldSpec {
        name: OTHER_DESIGS,
        start: 217,
        end: None,
        kind: Kind::List,
    },
];

/// Elements computed from the decoded fields, with their kinds.
pub static DERIVED: &[(&str, Kind)] = &[
    (PERIHELION_DIST, Kind::Float),
    (APHELION_DIST, Kind::Float),
    (SEMILATUS_RECTUM, Kind::Float),
    (ORBITAL_PERIOD, Kind::Float),
    (SYNODIC_PERIOD, Kind::Float),
    (ORBIT_TYPE, Kind::Text),
];

/// Returns the [`FieldSpec`] of a catalogue column.
pub fn spec_of(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Returns the `(start, end)` columns of a field, with `None` as end if the
/// field runs to the end of the line.
pub fn range_of(name: &str) -> Option<(usize, Option<usize>)> {
    spec_of(name).map(|spec| (spec.start, spec.end))
}

/// Returns the kind of a catalogue or derived field.
pub fn kind_of(name: &str) -> Option<Kind> {
    spec_of(name).map(|spec| spec.kind).or_else(|| {
        DERIVED
            .iter()
            .find(|(derived, _)| *derived == name)
            .map(|(_, kind)| *kind)
    })
}

/// Resolves a name to its static form if it is a known field.
pub fn canonical(name: &str) -> Option<&'static str> {
    spec_of(name).map(|spec| spec.name).or_else(|| {
        DERIVED
            .iter()
            .find(|(derived, _)| *derived == name)
            .map(|(derived, _)| *derived)
    })
}

/// Returns `true` if a record can contain the field.
pub fn is_known(name: &str) -> bool {
    canonical(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_columns() {
        assert_eq!(range_of(PRINCIPAL_DESIG), Some((0, Some(7))));
        assert_eq!(range_of(A), Some((92, Some(103))));
        assert_eq!(range_of(OTHER_DESIGS), Some((217, None)));
        assert_eq!(range_of(PERIHELION_DIST), None);
    }

    #[test]
    fn looks_up_kinds() {
        assert_eq!(kind_of(NUM_OPPS), Some(Kind::Integer));
        assert_eq!(kind_of(APHELION_DIST), Some(Kind::Float));
        assert_eq!(kind_of(OTHER_DESIGS), Some(Kind::List));
        assert_eq!(kind_of("Diameter"), None);
        assert!(!is_known("num_opps"));
    }

    #[test]
    fn slices_short_lines() {
        let tp = spec_of(TP).expect("Tp should be in the table");
        assert_eq!(tp.slice("too short"), "");
        assert_eq!(spec_of(H).map(|h| h.slice("00001    3.3")), Some(" 3.3"));
    }
}
