use std::fmt::{Debug, Display};

use crate::record::Record;

/// A summary of employee records.
///
/// Implementations should be pure: [`Report::generate`] must not depend on
/// anything but its input, and must return an empty `Vec` (not an error)
/// when given no records.
pub trait Report {
    /// Summarises `records` as an ordered list of rows.
    fn generate(&self, records: &[Record]) -> Vec<SummaryRow>;

    /// Returns the report's display name.
    fn name(&self) -> &str;
}

/// A single cell value in a [`SummaryRow`].
#[derive(Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    /// Displayed to 2 decimal places.
    Float(f64),
}

impl Value {
    /// Returns the value as a float, if it's numeric.
    ///
    /// Integers beyond 2^53 in magnitude are rounded to the nearest `f64`;
    /// use [`Self::as_i64`] to read them exactly.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Integer(n) => Some(*n as f64),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => Debug::fmt(s, f),
            Self::Integer(n) => Debug::fmt(n, f),
            Self::Float(x) => Debug::fmt(x, f),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.2}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// One output row of a [`Report`]: named values, in the order they were
/// added.
///
/// Every row a report produces should have the same keys in the same order,
/// so that the first row's keys can serve as column headers.
///
/// # Examples
///
/// ```
/// # use employees::SummaryRow;
/// let row = SummaryRow::new()
///     .with("position", "Backend Developer")
///     .with("avg_performance", 4.85);
/// assert_eq!(row.keys().collect::<Vec<_>>(), ["position", "avg_performance"]);
/// assert_eq!(row.get("avg_performance").unwrap().as_f64(), Some(4.85));
/// assert_eq!(row.get("team"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryRow(Vec<(String, Value)>);

impl SummaryRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under `key`, replacing any existing value for `key` in
    /// its original position.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
