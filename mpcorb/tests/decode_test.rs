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

use mpcorb::field::*;
use mpcorb::{Decode, Error, Kind, RecordDecoder, Records, Value};

const PROVISIONAL: &str = "K14U00A  18.1  0.15 K14AV 343.26524   40.43672  209.50614    5.26843  0.4156830  0.45210818   1.6958432  9 MPO332109    11   1   12 days 0.38 M-v 38h MPCW       0804 2014 UA                     20141101";
const NUMBERED: &str = "A0001    16.6  0.15 K2555  12.34567  100.00001  200.00002    3.45678  0.2000000  0.24960499   2.5000000  0 E2024-V47   512  38 1999-2024 0.55 M-v 3Ek MPCLINUX   0000 (100001) 1999 AA1           20240915";

fn text(s: &str) -> Option<Value> {
    Some(Value::from(s))
}

#[test]
fn decodes_single_opposition_orbit() {
    let record = RecordDecoder
        .decode(PROVISIONAL)
        .expect("provisional orbit should decode");

    assert_eq!(record.designation(), Some("2014 UA"));
    assert_eq!(record.get(EPOCH).cloned(), Some(Value::Float(2456961.5)));
    assert_eq!(record.get(ARC_LENGTH).cloned(), Some(Value::Integer(12)));
    assert!(!record.contains(ARC_YEARS));
    assert_eq!(record.get(NUM_OPPS).cloned(), Some(Value::Integer(1)));
    assert_eq!(record.get(U).cloned(), text("9"));
    assert_eq!(record.get(HEX_FLAGS).cloned(), text("0804"));
    assert_eq!(record.get(ORBIT_TYPE).cloned(), text("Amor"));
    assert_eq!(record.get(LAST_OBS).cloned(), text("2014-11-01"));
    assert!(!record.contains(NUMBER));
    assert!(!record.contains(NAME));
    assert!(!record.contains(TP));
    assert!(!record.contains(OTHER_DESIGS));
}

#[test]
fn decodes_numbered_orbit() {
    let record = RecordDecoder
        .decode(NUMBERED)
        .expect("numbered orbit should decode");

    assert_eq!(record.designation(), Some("100001"));
    assert_eq!(record.get(NUMBER).cloned(), text("(100001)"));
    assert!(!record.contains(NAME));
    assert_eq!(record.get(ARC_YEARS).cloned(), text("1999-2024"));
    assert_eq!(record.get(NUM_OPPS).cloned(), Some(Value::Integer(38)));
    assert_eq!(record.get(PERIHELION_DIST).cloned(), Some(Value::Float(2.0)));
    assert_eq!(record.get(APHELION_DIST).cloned(), Some(Value::Float(3.0)));
    assert_eq!(record.get(SEMILATUS_RECTUM).cloned(), Some(Value::Float(2.4)));
}

#[test]
fn keeps_undecodable_epoch_as_text() {
    let line = NUMBERED.replacen("K2555", "K25Z5", 1);
    let record = RecordDecoder.decode(&line).expect("line should decode");

    assert_eq!(record.get(EPOCH).cloned(), text("K25Z5"));
}

#[test]
fn fails_on_invalid_integer() {
    let line = NUMBERED.replacen("  512", " 51x2", 1);

    assert_eq!(
        RecordDecoder.decode(&line),
        Err(Error::Coercion {
            field: NUM_OBS,
            value: "51x2".to_owned(),
            expected: Kind::Integer,
        })
    );
}

#[test]
fn decodes_catalogue() {
    let mut data = "MINOR PLANET CENTER ORBIT DATABASE (MPCORB)\n".repeat(mpcorb::HEADER_LINES);
    data.push_str(NUMBERED);
    data.push_str("\n\n");
    data.push_str(PROVISIONAL);
    data.push('\n');

    let designations: Vec<String> = Records::new(&data)
        .map(|line| RecordDecoder.decode(line).expect("line should decode"))
        .filter_map(|record| record.designation().map(str::to_owned))
        .collect();

    assert_eq!(designations, vec!["100001", "2014 UA"]);
}
