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

//! MPCORB orbit catalogue decoder.
//!
//! This crate decodes the fixed-column lines of the Minor Planet Center's
//! MPCORB.DAT into [records] of typed values. Packed designations and epochs
//! are unpacked on the way, and the perihelion and aphelion distance are
//! [derived] from the semi-major axis and eccentricity.
//!
//! # Examples
//!
//! Let's decode Ceres and print its perihelion distance:
//!
//! ```
//! use mpcorb::{Decode, RecordDecoder, Value};
//!
//! # fn main() -> Result<(), mpcorb::Error> {
//! let line = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.80 M-v 30k MPCLINUX   0000 (1) Ceres                   20241101";
//! let ceres = RecordDecoder.decode(line)?;
//!
//! assert_eq!(ceres.get("Name"), Some(&Value::from("Ceres")));
//! assert_eq!(ceres.get("Epoch"), Some(&Value::Float(2460800.5)));
//! assert_eq!(ceres.get("Perihelion_dist"), Some(&Value::Float(2.5464231)));
//! #     Ok(())
//! # }
//! ```
//!
//! An entire catalogue can be read with the [`Records`] iterator, which skips
//! the file's header:
//!
//! ```no_run
//! # use mpcorb::{Decode, Error, RecordDecoder, Records};
//! # fn main() -> Result<(), Error> {
//! let data = std::fs::read_to_string("MPCORB.DAT").expect("file should be readable");
//!
//! for line in Records::new(&data) {
//!     let record = RecordDecoder.decode(line)?;
//!     println!("{:?}", record.designation());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [records]: crate::OrbitRecord
//! [derived]: crate::derived

mod error;
mod record;
mod records;
mod value;

pub mod derived;
pub mod field;
pub mod fields;

pub use error::Error;
pub use field::{
    canonical, is_known, kind_of, range_of, spec_of, FieldSpec, Kind, DERIVED, FIELDS,
};
pub use record::{Decode, OrbitRecord, RecordDecoder};
pub use records::{Records, HEADER_LINES};
pub use value::{coerce, Value};
