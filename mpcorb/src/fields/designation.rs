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

use log::trace;

use super::{CENTURY, CYCLE};

/// Unpacks a packed number or provisional designation.
///
/// | packed    | unpacked     |
/// |-----------|--------------|
/// | `00433`   | `00433`      |
/// | `A0001`   | `100001`     |
/// | `K14U00A` | `2014 UA`    |
/// | `J95X01L` | `1995 XL1`   |
/// | `PLS2040` | `P-L S2040`  |
/// | `T1S3138` | `T-1 S3138`  |
///
/// Designations that match none of the packing rules are returned unchanged.
pub fn unpack_designation(packed: &str) -> String {
    let bytes = packed.as_bytes();

    if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) {
        return packed.to_owned();
    }

    let unpacked = match bytes.len() {
        7 if bytes.starts_with(b"PL") || bytes[0] == b'T' => survey(packed),
        7 => provisional(bytes),
        5 => numbered(bytes),
        _ => None,
    };

    unpacked.unwrap_or_else(|| {
        trace!("designation {packed:?} is not packed, keeping it");
        packed.to_owned()
    })
}

fn survey(packed: &str) -> Option<String> {
    let (prefix, rest) = (packed.get(..2)?, packed.get(2..)?);
    let mut chars = prefix.chars();
    Some(format!("{}-{} {rest}", chars.next()?, chars.next()?))
}

fn provisional(bytes: &[u8]) -> Option<String> {
    let century = CENTURY.letter(bytes[0])?;

    if !bytes[1].is_ascii_digit() || !bytes[2].is_ascii_digit() {
        return None;
    }

    let half_month = bytes[3];
    let order = bytes[6];
    if !half_month.is_ascii_uppercase() || !order.is_ascii_uppercase() {
        return None;
    }

    // Each character resolves to a digit string, so "A5" reads as "10" + "5".
    let tens = CYCLE.digit_or_letter(bytes[4])?;
    let ones = CYCLE.digit_or_letter(bytes[5])?;
    let cycle: u32 = format!("{tens}{ones}").parse().ok()?;

    let mut designation = format!(
        "{century}{}{} {}{}",
        bytes[1] as char, bytes[2] as char, half_month as char, order as char
    );

    if cycle != 0 {
        designation.push_str(&cycle.to_string());
    }

    Some(designation)
}

fn numbered(bytes: &[u8]) -> Option<String> {
    let lead = CYCLE.digit_or_letter(bytes[0])?;

    if !bytes[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let rest = std::str::from_utf8(&bytes[1..]).ok()?;
    Some(format!("{lead}{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_permanent_numbers() {
        assert_eq!(unpack_designation("00001"), "00001");
        assert_eq!(unpack_designation("433"), "433");
    }

    #[test]
    fn unpacks_provisional_designations() {
        assert_eq!(unpack_designation("K14U00A"), "2014 UA");
        assert_eq!(unpack_designation("J95X01L"), "1995 XL1");
        assert_eq!(unpack_designation("K07Tf8A"), "K07Tf8A");
        assert_eq!(unpack_designation("I98A12B"), "1898 AB12");
        assert_eq!(unpack_designation("K19JA3Q"), "2019 JQ103");
        assert_eq!(unpack_designation("K20CZ9Z"), "2020 CZ349");
    }

    #[test]
    fn unpacks_survey_designations() {
        assert_eq!(unpack_designation("PLS2040"), "P-L S2040");
        assert_eq!(unpack_designation("T1S3138"), "T-1 S3138");
        assert_eq!(unpack_designation("T3S1234"), "T-3 S1234");
    }

    #[test]
    fn unpacks_numbered_designations() {
        assert_eq!(unpack_designation("A0001"), "100001");
        assert_eq!(unpack_designation("J2345"), "182345");
    }

    #[test]
    fn keeps_unknown_patterns() {
        assert_eq!(unpack_designation("X14U00A"), "X14U00A");
        assert_eq!(unpack_designation("K1AU00A"), "K1AU00A");
        assert_eq!(unpack_designation("I0001"), "I0001");
        assert_eq!(unpack_designation("A00B1"), "A00B1");
        assert_eq!(unpack_designation("ABC"), "ABC");
        assert_eq!(unpack_designation(""), "");
    }
}
