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

use chrono::{Datelike, NaiveDate};
use log::trace;

use super::{CENTURY, DAY, MONTH};

/// Offset from chrono's days of the common era (0001-01-01 is day 1) to the
/// Julian Date at 0h.
const JD_CE_OFFSET: f64 = 1_721_424.5;

/// A decoded epoch.
#[derive(Clone, PartialEq, Debug)]
pub enum Epoch {
    /// The epoch as Julian Date at 0h.
    JulianDate(f64),
    /// The packed text, kept as is since it couldn't be decoded.
    Raw(String),
}

/// Unpacks a `CYYMD` packed epoch to its Julian Date.
///
/// The century letter and year are followed by a month and a day, each packed
/// into one character (`1`-`9`, then `A` for 10 and so on). Epochs that can't
/// be decoded are returned as [`Epoch::Raw`].
pub fn unpack_epoch(packed: &str) -> Epoch {
    match date(packed) {
        Some(date) => Epoch::JulianDate(date.num_days_from_ce() as f64 + JD_CE_OFFSET),
        None => {
            trace!("epoch {packed:?} can't be decoded, keeping it");
            Epoch::Raw(packed.to_owned())
        }
    }
}

fn date(packed: &str) -> Option<NaiveDate> {
    let &[c, y1, y2, m, d] = packed.as_bytes() else {
        return None;
    };

    if !y1.is_ascii_digit() || !y2.is_ascii_digit() {
        return None;
    }

    let century = CENTURY.letter(c)? as i32;
    let year = century * 100 + ((y1 & 0x0F) * 10 + (y2 & 0x0F)) as i32;
    let month = MONTH.digit_or_letter(m)?;
    let day = DAY.digit_or_letter(d)?;

    NaiveDate::from_ymd_opt(year, month, day)
}
