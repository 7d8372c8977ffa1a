use serde::{de, Deserialize, Deserializer};

use std::{fmt::Display, str::FromStr};

use crate::skills::Skills;

/// Defines the CSV format for employee data.
///
/// Columns are matched to fields by header name, so their order in the file
/// doesn't matter. Any other columns are ignored. The numeric fields may be
/// padded with whitespace, but must otherwise parse as their declared types,
/// or the whole row is rejected.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Record {
    pub name: String,
    /// The grouping key for the performance report. Compared exactly, with no
    /// case folding or trimming.
    pub position: String,
    #[serde(deserialize_with = "trimmed")]
    pub completed_tasks: u32,
    /// Taken as given; no particular scale is enforced.
    #[serde(deserialize_with = "trimmed")]
    pub performance: f64,
    pub skills: Skills,
    pub team: String,
    #[serde(deserialize_with = "trimmed")]
    pub experience_years: u32,
}

/// Parses a field with [`FromStr`] after trimming surrounding whitespace.
fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse().map_err(de::Error::custom)
}
