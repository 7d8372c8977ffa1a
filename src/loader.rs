use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::{
    error::{Error, Result},
    record::Record,
};

/// What to do with a row that can't be turned into a [`Record`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RowPolicy {
    /// Fail the whole load on the first bad row.
    #[default]
    Abort,
    /// Leave the row out, and keep its error in [`Loaded::rejected`].
    Skip,
}

/// The result of a successful load.
#[derive(Debug, Default)]
pub struct Loaded {
    /// Records in file order, then row order within each file.
    pub records: Vec<Record>,
    /// Errors for rows left out under [`RowPolicy::Skip`]. Always empty under
    /// [`RowPolicy::Abort`].
    pub rejected: Vec<Error>,
}

/// Reads employee records from CSV files.
///
/// Missing or unreadable files always fail the load. What happens to a bad
/// row depends on the loader's [`RowPolicy`].
#[derive(Debug, Default)]
pub struct Loader {
    policy: RowPolicy,
}

impl Loader {
    /// Creates a loader that aborts on the first bad row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: RowPolicy) -> Self {
        Self { policy }
    }

    /// Reads the CSV files at `paths`, in order, and returns all their records.
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// * Any file doesn't exist ([`Error::NotFound`])
    /// * Any file can't be read, or isn't valid UTF-8 CSV ([`Error::Read`])
    /// * Under [`RowPolicy::Abort`], any row is missing a column or has a
    ///   value of the wrong type ([`Error::Value`])
    ///
    /// No records are returned if any error occurs.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Loaded> {
        let mut loaded = Loaded::default();
        for path in paths {
            let path = path.as_ref();
            let file = File::open(path).map_err(|err| open_error(path, err))?;
            self.read_into(file, path, &mut loaded)?;
        }
        Ok(loaded)
    }

    /// Reads CSV data from `reader`, using `source` to identify it in errors.
    ///
    /// # Errors
    ///
    /// As for [`Self::load`], except that there is no file to be missing.
    pub fn read<R: Read>(&self, reader: R, source: impl AsRef<Path>) -> Result<Loaded> {
        let mut loaded = Loaded::default();
        self.read_into(reader, source.as_ref(), &mut loaded)?;
        Ok(loaded)
    }

    fn read_into<R: Read>(&self, reader: R, source: &Path, loaded: &mut Loaded) -> Result<()> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        rdr.headers().map_err(|err| row_error(source, err))?;
        let before = loaded.records.len();
        for result in rdr.deserialize() {
            match result.map_err(|err| row_error(source, err)) {
                Ok(record) => loaded.records.push(record),
                Err(err @ Error::Value { .. }) if self.policy == RowPolicy::Skip => {
                    tracing::warn!("skipping row: {err}");
                    loaded.rejected.push(err);
                }
                Err(err) => return Err(err),
            }
        }
        tracing::debug!(
            path = %source.display(),
            records = loaded.records.len() - before,
            "read CSV data"
        );
        Ok(())
    }
}

/// Reads the CSV files at `paths`, aborting on the first bad row.
///
/// # Errors
///
/// See [`Loader::load`].
pub fn load_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    Loader::new().load(paths).map(|loaded| loaded.records)
}

fn open_error(path: &Path, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Read {
            path: path.to_path_buf(),
            source: err.into(),
        }
    }
}

fn row_error(path: &Path, err: csv::Error) -> Error {
    let line = err.position().map_or(0, csv::Position::line);
    let message = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => Some(de.to_string()),
        _ => None,
    };
    let Some(message) = message else {
        return Error::Read {
            path: path.to_path_buf(),
            source: err,
        };
    };
    Error::Value {
        path: path.to_path_buf(),
        line,
        message,
    }
}
