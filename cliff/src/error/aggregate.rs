//! Aggregation container for several validation failures.

use std::{error::Error, fmt};

use super::CliffError;

/// Collection of [`CliffError`]s produced while validating one flag set.
///
/// # Examples
///
/// ```
/// use cliff::{AggregatedErrors, CliffError, NameRule};
/// let agg = AggregatedErrors::new(vec![
///     CliffError::InvalidName { name: String::new(), rule: NameRule::Empty },
///     CliffError::InvalidShort { name: "port".into(), short: '!' },
/// ]);
/// assert_eq!(agg.len(), 2);
/// assert!(agg.to_string().starts_with("1: "));
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<CliffError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<CliffError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, CliffError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a CliffError;
    type IntoIter = std::slice::Iter<'a, CliffError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = CliffError;
    type IntoIter = std::vec::IntoIter<CliffError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl CliffError {
    /// Builds a single error from a list of validation failures.
    ///
    /// Returns `None` for an empty list, the error itself for a single entry
    /// and [`CliffError::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors: Vec<Self> = errors.into_iter().collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }
}
