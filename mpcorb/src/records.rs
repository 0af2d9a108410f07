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

use std::str::Lines;

/// Number of header and comment lines at the start of an MPCORB.DAT file.
pub const HEADER_LINES: usize = 43;

/// Iterator over the catalogue lines of an MPCORB.DAT file in memory.
///
/// The header is skipped, as are the blank lines that separate groups of
/// objects in the catalogue.
pub struct Records<'a> {
    lines: Lines<'a>,
    header: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from the file's text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mpcorb::{Decode, Error, RecordDecoder, Records};
    /// #
    /// # fn print_names(data: &str) -> Result<(), Error> {
    /// for line in Records::new(data) {
    ///     let record = RecordDecoder.decode(line)?;
    ///     if let Some(name) = record.get("Name") {
    ///         println!("{name}");
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a str) -> Self {
        Self::with_header(data, HEADER_LINES)
    }

    /// Creates a record iterator that skips `header` lines, e.g. `0` for
    /// extracts without header.
    pub fn with_header(data: &'a str, header: usize) -> Self {
        Self {
            lines: data.lines(),
            header,
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.header > 0 {
            self.header -= 1;
            self.lines.next()?;
        }

        self.lines.by_ref().find(|line| !line.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_blank_lines() {
        let data = "header\n-----\n\n00001 Ceres\n\n00002 Pallas\r\n";
        let lines: Vec<&str> = Records::with_header(data, 2).collect();
        assert_eq!(lines, vec!["00001 Ceres", "00002 Pallas"]);
    }

    #[test]
    fn yields_nothing_for_header_only() {
        let data = "header\n".repeat(HEADER_LINES);
        assert_eq!(Records::new(&data).count(), 0);
    }
}
