#![doc = include_str!("../README.md")]

mod error;
mod loader;
mod performance;
mod record;
mod registry;
mod report;
mod skills;

pub mod logging;
pub mod table;

pub use error::{Error, ErrorKind, Result};
pub use loader::{load_records, Loaded, Loader, RowPolicy};
pub use performance::PerformanceReport;
pub use record::Record;
pub use registry::Registry;
pub use report::{Report, SummaryRow, Value};
pub use skills::Skills;
