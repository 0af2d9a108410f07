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

//! Decoders for the packed and compound MPCORB fields.
//!
//! The MPC packs numbers into single characters to keep designations and
//! epochs at a fixed width. Each packed character is either a literal digit or
//! a letter that is looked up in one of the static [`PackedTable`]s below.

mod arc;
mod designation;
mod epoch;
mod readable;

pub use arc::Arc;
pub use designation::unpack_designation;
pub use epoch::{unpack_epoch, Epoch};
pub use readable::{last_observation, Readable};

/// Letters that stand for consecutive numbers.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct PackedTable {
    letters: &'static [u8],
    first: u32,
}

impl PackedTable {
    const fn new(letters: &'static [u8], first: u32) -> Self {
        Self { letters, first }
    }

    /// Returns the number the letter stands for.
    #[inline]
    pub fn letter(&self, byte: u8) -> Option<u32> {
        self.letters
            .iter()
            .position(|&l| l == byte)
            .map(|pos| self.first + pos as u32)
    }

    /// Returns the number of a literal digit or a packed letter.
    #[inline]
    pub fn digit_or_letter(&self, byte: u8) -> Option<u32> {
        if byte.is_ascii_digit() {
            Some((byte & 0x0F) as u32)
        } else {
            self.letter(byte)
        }
    }
}

/// Centuries of packed years, e.g. `K` for 20xx.
pub const CENTURY: PackedTable = PackedTable::new(b"IJK", 18);

/// Months 10 to 12 of packed epochs.
pub const MONTH: PackedTable = PackedTable::new(b"ABC", 10);

/// Days 10 to 31 of packed epochs.
pub const DAY: PackedTable = PackedTable::new(b"ABCDEFGHIJKLMNOPQRSTUV", 10);

/// Tens of the cycle count and of numbered designations above 99999.
pub const CYCLE: PackedTable = PackedTable::new(b"ABCDEFGHJKLMNOPQRSTUVWXYZ", 10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_letters() {
        assert_eq!(CENTURY.letter(b'J'), Some(19));
        assert_eq!(CENTURY.letter(b'1'), None);
        assert_eq!(MONTH.digit_or_letter(b'C'), Some(12));
        assert_eq!(MONTH.digit_or_letter(b'D'), None);
        assert_eq!(DAY.digit_or_letter(b'A'), Some(10));
        assert_eq!(DAY.digit_or_letter(b'V'), Some(31));
        assert_eq!(CYCLE.digit_or_letter(b'7'), Some(7));
        assert_eq!(CYCLE.letter(b'J'), Some(18));
        assert_eq!(CYCLE.letter(b'I'), None);
    }
}
