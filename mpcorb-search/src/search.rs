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

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use log::{debug, info, trace};
use mpcorb::{Decode, OrbitRecord, RecordDecoder, HEADER_LINES};
use serde::Serialize;

use crate::error::Error;
use crate::query::Query;

/// The records that matched a query.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct MatchResult {
    #[serde(rename = "data")]
    pub matches: Vec<OrbitRecord>,
    pub count: usize,
}

impl FromIterator<OrbitRecord> for MatchResult {
    fn from_iter<T: IntoIterator<Item = OrbitRecord>>(iter: T) -> Self {
        let matches: Vec<OrbitRecord> = iter.into_iter().collect();
        Self {
            count: matches.len(),
            matches,
        }
    }
}

/// Linear scan over a catalogue that matches each line against a query.
///
/// # Examples
///
/// ```
/// # use mpcorb_search::{Error, Query, Searcher};
/// # fn main() -> Result<(), Error> {
/// let catalogue = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.80 M-v 30k MPCLINUX   0000 (1) Ceres                   20241101\n";
///
/// let query: Query = "Name:Ceres".parse()?;
/// let result = Searcher::new()
///     .header_lines(0)
///     .first(true)
///     .find(catalogue.as_bytes(), &query)?;
///
/// assert_eq!(result.count, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Searcher<D = RecordDecoder> {
    decoder: D,
    header_lines: usize,
    first: bool,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            decoder: RecordDecoder,
            header_lines: HEADER_LINES,
            first: false,
        }
    }
}

impl<D: Decode> Searcher<D> {
    /// Uses `decoder` to decode the catalogue lines.
    pub fn decoder<E: Decode>(self, decoder: E) -> Searcher<E> {
        Searcher {
            decoder,
            header_lines: self.header_lines,
            first: self.first,
        }
    }

    /// Stops the search at the first matching record.
    pub fn first(mut self, first: bool) -> Self {
        self.first = first;
        self
    }

    /// Sets the number of header lines to skip.
    pub fn header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    /// Returns a lazy iterator over the records in `reader` that match `query`.
    ///
    /// The iterator ends after the first error, or after the first match if
    /// the searcher stops at the first match. The reader is dropped as soon as
    /// the iterator ends. Bytes that are not valid UTF-8 are read as `?`.
    pub fn search<'a, R: BufRead>(&'a self, reader: R, query: &'a Query) -> Search<'a, R, D> {
        debug!("searching for {} term(s)", query.len());

        Search {
            reader: Some(reader),
            buf: Vec::new(),
            query,
            decoder: &self.decoder,
            header_lines: self.header_lines,
            first: self.first,
            state: State::SkipHeader,
            line: 0,
        }
    }

    /// Collects all records in `reader` that match `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or a line has a field of the wrong
    /// type. Matches found before the error are discarded.
    pub fn find<R: BufRead>(&self, reader: R, query: &Query) -> Result<MatchResult, Error> {
        let result: MatchResult = self.search(reader, query).collect::<Result<_, _>>()?;

        if result.count == 0 {
            info!("objects not found, try a more precise query");
        } else {
            debug!("found {} object(s)", result.count);
        }

        Ok(result)
    }

    /// Collects all records in the catalogue at `path` that match `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be opened or read, or a line has a
    /// field of the wrong type.
    pub fn find_in_file<P: AsRef<Path>>(
        &self,
        path: P,
        query: &Query,
    ) -> Result<MatchResult, Error> {
        let path = path.as_ref();
        debug!("opening {}", path.display());

        let file = File::open(path)?;
        self.find(BufReader::new(file), query)
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum State {
    SkipHeader,
    Scan,
    Done,
}

/// Iterator over the matching records of a catalogue.
///
/// Created by [`Searcher::search`].
pub struct Search<'a, R, D> {
    reader: Option<R>,
    buf: Vec<u8>,
    query: &'a Query,
    decoder: &'a D,
    header_lines: usize,
    first: bool,
    state: State,
    line: usize,
}

impl<R: BufRead, D: Decode> Search<'_, R, D> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();

        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                Some(Ok(line_text(&self.buf, self.line)))
            }
            Err(e) => Some(Err(e)),
        }
    }

    fn finish(&mut self) {
        if self.reader.take().is_some() {
            debug!("search finished after {} line(s)", self.line);
        }
        self.state = State::Done;
    }
}

impl<R: BufRead, D: Decode> Iterator for Search<'_, R, D> {
    type Item = Result<OrbitRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Done => return None,

                State::SkipHeader => {
                    while self.line < self.header_lines {
                        match self.next_line() {
                            Some(Ok(_)) => {}
                            Some(Err(e)) => {
                                self.finish();
                                return Some(Err(e.into()));
                            }
                            None => {
                                self.finish();
                                return None;
                            }
                        }
                    }

                    trace!("skipped {} header line(s)", self.header_lines);
                    self.state = State::Scan;
                }

                State::Scan => {
                    let line = match self.next_line() {
                        Some(Ok(line)) => line,
                        Some(Err(e)) => {
                            self.finish();
                            return Some(Err(e.into()));
                        }
                        None => {
                            self.finish();
                            return None;
                        }
                    };

                    if line.trim().is_empty() {
                        continue;
                    }

                    let record = match self.decoder.decode(&line) {
                        Ok(record) => record,
                        Err(error) => {
                            let line = self.line;
                            self.finish();
                            return Some(Err(Error::InvalidLine { line, error }));
                        }
                    };

                    if self.query.matches(&record) {
                        trace!("line {} matches", self.line);

                        if self.first {
                            debug!("stopping at first match on line {}", self.line);
                            self.finish();
                        }

                        return Some(Ok(record));
                    }
                }
            }
        }
    }
}

impl<R: BufRead, D: Decode> FusedIterator for Search<'_, R, D> {}

/// Placeholder of a byte that is not valid UTF-8.
const INVALID_BYTE: char = '?';

/// Converts a raw line without its line break to text.
///
/// Each invalid byte is replaced by a single [`INVALID_BYTE`], which keeps the
/// following fields in their columns.
fn line_text(bytes: &[u8], line: usize) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());

        if !chunk.invalid().is_empty() {
            trace!("line {line} is not valid UTF-8");
            text.extend(chunk.invalid().iter().map(|_| INVALID_BYTE));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use mpcorb::Value;

    use super::*;

    const CERES: &str = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.80 M-v 30k MPCLINUX   0000 (1) Ceres                   20241101";

    fn catalogue(header: usize, records: &[&str]) -> String {
        let mut data = "header\n".repeat(header);
        for record in records {
            data.push_str(record);
            data.push('\n');
        }
        data
    }

    #[test]
    fn skips_header_lines() {
        let data = catalogue(2, &[CERES]);
        let query = Query::new();

        let searcher = Searcher::new().header_lines(2);
        assert_eq!(searcher.search(data.as_bytes(), &query).count(), 1);

        let searcher = Searcher::new().header_lines(3);
        assert_eq!(searcher.search(data.as_bytes(), &query).count(), 0);
    }

    #[test]
    fn ends_on_short_header() {
        let data = catalogue(1, &[]);
        let searcher = Searcher::new();
        let query = Query::new();
        let mut search = searcher.search(data.as_bytes(), &query);

        assert!(search.next().is_none());
        assert!(search.next().is_none());
    }

    #[test]
    fn skips_blank_lines() {
        let data = catalogue(0, &["", CERES, "   ", CERES]);
        let result = Searcher::new()
            .header_lines(0)
            .find(data.as_bytes(), &Query::new())
            .expect("search should succeed");

        assert_eq!(result.count, 2);
        assert_eq!(result.matches.len(), 2);
    }

    #[test]
    fn reports_line_of_invalid_record() {
        let invalid = CERES.replacen(" 3.34", "3.3x4", 1);
        let data = catalogue(1, &[CERES, &invalid, CERES]);

        let searcher = Searcher::new().header_lines(1);
        let results: Vec<_> = searcher.search(data.as_bytes(), &Query::new()).collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(Error::InvalidLine { line: 3, error: mpcorb::Error::Coercion { field: "H", .. } })
        ));
    }

    #[test]
    fn reads_lines_with_invalid_bytes() {
        let mut latin1 = CERES.as_bytes().to_vec();
        latin1[152] = 0xC7;

        let mut data = Vec::new();
        for line in [CERES.as_bytes(), latin1.as_slice(), CERES.as_bytes()] {
            data.extend_from_slice(line);
            data.extend_from_slice(b"\r\n");
        }

        let result = Searcher::new()
            .header_lines(0)
            .find(&data[..], &Query::new())
            .expect("search should succeed");

        assert_eq!(result.count, 3);
        let record = &result.matches[1];
        assert_eq!(record.get("Computer"), Some(&Value::from("MP?LINUX")));
        assert_eq!(record.get("Name"), Some(&Value::from("Ceres")));
        assert_eq!(record.get("Last_obs"), Some(&Value::from("2024-11-01")));
        assert_eq!(record.get("Num_opps"), result.matches[0].get("Num_opps"));
    }

    #[test]
    fn serializes_result() {
        let result: MatchResult = std::iter::empty().collect();
        assert_eq!(
            serde_json::to_string(&result).expect("result should serialize"),
            r#"{"data":[],"count":0}"#
        );
    }
}
