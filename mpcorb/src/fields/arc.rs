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

/// The observed arc of an orbit.
///
/// Multi-opposition orbits give the years of the first and last observation
/// (`1801-2024`), single-opposition orbits the arc length (`  12 days`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arc<'a> {
    /// The year range, kept as text.
    Years(&'a str),
    /// The leading digits of the arc length in days.
    Length(&'a str),
}

impl<'a> Arc<'a> {
    /// Reads the arc group. Returns `None` if it's blank.
    pub fn resolve(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            None
        } else if trimmed.contains("days") {
            let end = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            Some(Self::Length(&trimmed[..end]))
        } else {
            Some(Self::Years(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_arc_length() {
        assert_eq!(Arc::resolve(" 125 days"), Some(Arc::Length("125")));
        assert_eq!(Arc::resolve("  12 days"), Some(Arc::Length("12")));
    }

    #[test]
    fn resolves_arc_years() {
        assert_eq!(Arc::resolve("1801-2024"), Some(Arc::Years("1801-2024")));
        assert_eq!(Arc::resolve("         "), None);
    }
}
