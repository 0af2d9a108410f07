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

use std::sync::LazyLock;

use regex::Regex;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("number pattern should compile"));

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s([A-Za-z_][\w'.-]*(?: [\w'.-]+)*)").expect("name pattern should compile")
});

/// The readable designation, e.g. `(1) Ceres` or `2014 UA`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct Readable<'a> {
    /// The parenthesized number of a numbered object, e.g. `(1)`.
    pub number: Option<&'a str>,
    /// The name following the number.
    pub name: Option<&'a str>,
}

impl<'a> Readable<'a> {
    /// Reads the number and name of the readable designation.
    ///
    /// Only numbered objects carry a name, so the name is read after the
    /// number. A provisional designation following the number (e.g.
    /// `(100001) 1999 AA1`) is not a name.
    pub fn parse(raw: &'a str) -> Self {
        let Some(number) = NUMBER.find(raw) else {
            return Self::default();
        };

        let name = NAME
            .captures(&raw[number.end()..])
            .and_then(|caps| caps.get(1))
            .map(|name| name.as_str().trim_end());

        Self {
            number: Some(number.as_str()),
            name,
        }
    }
}

/// Joins the `YYYY`, `MM` and `DD` parts of the last observation's date with
/// hyphens. Returns `None` if the date is blank.
pub fn last_observation(year: &str, month: &str, day: &str) -> Option<String> {
    let parts = [year.trim(), month.trim(), day.trim()];

    if parts.iter().all(|part| part.is_empty()) {
        None
    } else {
        Some(parts.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_number_and_name() {
        let readable = Readable::parse("(1) Ceres                   ");
        assert_eq!(readable.number, Some("(1)"));
        assert_eq!(readable.name, Some("Ceres"));

        let readable = Readable::parse("(4015) Wilson-Harrington    ");
        assert_eq!(readable.name, Some("Wilson-Harrington"));

        let readable = Readable::parse("(14223) van de Hulst        ");
        assert_eq!(readable.name, Some("van de Hulst"));
    }

    #[test]
    fn skips_provisional_designations() {
        let readable = Readable::parse("(100001) 1999 AA1           ");
        assert_eq!(readable.number, Some("(100001)"));
        assert_eq!(readable.name, None);

        assert_eq!(Readable::parse("2014 UA                     "), Readable::default());
    }

    #[test]
    fn joins_last_observation() {
        assert_eq!(
            last_observation("2024", "11", "01"),
            Some("2024-11-01".to_owned())
        );
        assert_eq!(last_observation("    ", "  ", ""), None);
    }
}
