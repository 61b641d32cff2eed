//! Parser for the National Weather Service master station table
//! (`stations.txt`).
//!
//! The table is a fixed-width text format: one station per line, grouped
//! under free-text state/country header lines and interleaved with `!`
//! comments and decorative divider rows. [`parser::StationParser`] turns
//! the raw text into [`station::Station`] records, resolving each
//! single-character classification column into a closed enum from
//! [`codes`].
//!
//! Reading the file and doing anything with the records is the caller's
//! job; this crate is a pure text-to-records transform.

pub mod codes;
pub mod error;
pub mod parser;
pub mod station;

pub use codes::{AviationFlag, Metar, ObservationSystem, OfficeType, Radar, StationCode, UpperAir};
pub use error::{AppError, Result};
pub use parser::{ParseStats, StationParser};
pub use station::Station;
