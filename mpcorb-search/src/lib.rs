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

//! Search of the MPCORB orbit catalogue.
//!
//! A [`Query`] of `key:value` terms is matched against every record of a
//! catalogue by a [`Searcher`]. The catalogue is read line by line, so the
//! whole file is never held in memory, and the search can stop at the first
//! match:
//!
//! ```no_run
//! use mpcorb_search::{Query, Searcher};
//!
//! # fn main() -> Result<(), mpcorb_search::Error> {
//! let query = Query::parse(["Aphelion_dist:3.1948214", "Num_opps:38"])?;
//! let result = Searcher::new().find_in_file("MPCORB.DAT", &query)?;
//!
//! for record in &result.matches {
//!     println!("{:?}", record.designation());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod query;
mod search;

pub use config::Config;
pub use error::Error;
pub use query::Query;
pub use search::{MatchResult, Search, Searcher};
