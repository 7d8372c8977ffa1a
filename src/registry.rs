use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    performance::PerformanceReport,
    report::Report,
};

type Constructor = Box<dyn Fn() -> Box<dyn Report>>;

/// Maps report type names to report constructors.
///
/// [`Registry::default`] has every built-in report registered; use
/// [`Registry::empty`] to start from nothing. A registry is an ordinary
/// value, so pass it to whatever needs to create reports.
///
/// # Examples
///
/// ```
/// # use employees::{PerformanceReport, Registry};
/// let mut registry = Registry::empty();
/// registry.register("perf", || PerformanceReport);
/// let report = registry.create("perf").unwrap();
/// assert_eq!(report.name(), "performance");
/// assert!(registry.create("performance").is_err());
/// ```
pub struct Registry {
    constructors: Vec<(String, Constructor)>,
}

impl Registry {
    /// Creates a registry with no reports registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            constructors: Vec::new(),
        }
    }

    /// Registers `constructor` under the type name `name`.
    ///
    /// If `name` is already registered, its constructor is replaced, but it
    /// keeps its place in [`Self::names`].
    pub fn register<F, R>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> R + 'static,
        R: Report + 'static,
    {
        let name = name.into();
        let boxed: Constructor = Box::new(move || -> Box<dyn Report> { Box::new(constructor()) });
        match self.constructors.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = boxed,
            None => self.constructors.push((name, boxed)),
        }
    }

    /// Creates a new report of type `name`.
    ///
    /// Each call runs the registered constructor again, so reports are never
    /// shared between callers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownReport`], listing the registered names, if
    /// `name` isn't registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn Report>> {
        let Some((_, constructor)) = self.constructors.iter().find(|(n, _)| n == name) else {
            return Err(Error::UnknownReport {
                name: name.to_string(),
                available: self.names().map(String::from).collect(),
            });
        };
        Ok(constructor())
    }

    /// Returns the registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.iter().map(|(n, _)| n.as_str())
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("performance", || PerformanceReport);
        registry
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
