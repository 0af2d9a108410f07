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

use std::fs;
use std::path::{Path, PathBuf};

use mpcorb::HEADER_LINES;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::search::Searcher;

/// Location and layout of the catalogue.
///
/// Missing keys take their default, so `{}` is a valid configuration:
///
/// ```json
/// {
///   "dat_file": "MPCORB.DAT",
///   "header_lines": 43
/// }
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the catalogue, optionally gzip compressed.
    pub dat_file: PathBuf,
    /// Header lines before the first record.
    pub header_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dat_file: PathBuf::from("MPCORB.DAT"),
            header_lines: HEADER_LINES,
        }
    }
}

impl Config {
    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Loads the JSON configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not a valid
    /// configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns a searcher for the configured layout.
    pub fn searcher(&self) -> Searcher {
        Searcher::new().header_lines(self.header_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_defaults() {
        assert_eq!(Config::from_json("{}").ok(), Some(Config::default()));

        let config = Config::from_json(r#"{ "header_lines": 0 }"#).expect("config should parse");
        assert_eq!(config.dat_file, PathBuf::from("MPCORB.DAT"));
        assert_eq!(config.header_lines, 0);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            Config::from_json(r#"{ "header_lines": "many" }"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
