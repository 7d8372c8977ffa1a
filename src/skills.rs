use serde_with::DeserializeFromStr;

use std::{
    convert::Infallible,
    fmt::{Debug, Display},
    str::FromStr,
};

/// Represents an employee's list of skills.
///
/// In the CSV data the skills are a single comma-separated field, such as
/// `"Python, Django, Docker"`. Each piece is trimmed of surrounding
/// whitespace, but empty pieces are kept, so `"Python, ,Java"` has three
/// skills, the second being empty.
///
/// # Examples
///
/// ```
/// # use employees::Skills;
/// let skills: Skills = "Python, Testing".parse().unwrap();
/// assert_eq!(skills.as_slice(), ["Python", "Testing"]);
/// ```
#[derive(Clone, Default, DeserializeFromStr, Eq, PartialEq)]
pub struct Skills(Vec<String>);

impl Skills {
    /// Returns the skills in the order they were listed.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
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

impl Debug for Skills {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Skills {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl FromStr for Skills {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.split(',').map(|skill| skill.trim().to_string()).collect()))
    }
}

impl<S: Into<String>> FromIterator<S> for Skills {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
