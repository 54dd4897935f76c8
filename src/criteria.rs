use anyhow::{anyhow, Result};
use std::fmt;

use crate::shape::Shape;
use crate::types::{Mapping, Value};

/// Selects elements of a sequence.
///
/// A criteria is either a predicate which is called for each element, or a shape descriptor which
/// names fields and the values they must hold (see [`Shape::meets_criteria`]).
pub enum Criteria<'a, T: ?Sized> {
    /// Matches elements for which the function returns `true`.
    Predicate(Box<dyn Fn(&T) -> bool + 'a>),
    /// Matches elements whose fields hold all the values in the descriptor.
    Shape(Mapping),
}

impl<'a, T: ?Sized> Criteria<'a, T> {
    /// Creates a criteria from a predicate.
    #[inline]
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self::Predicate(Box::new(f))
    }

    /// Creates a criteria from a shape descriptor.
    #[inline]
    #[must_use]
    pub fn shape(descriptor: Mapping) -> Self {
        Self::Shape(descriptor)
    }

    /// Parses a shape descriptor from YAML, e.g. `{id: 3, kind: user}`.
    ///
    /// Returns an error if the input isn't valid YAML or doesn't hold a mapping.
    pub fn from_yaml(input: &str) -> Result<Self> {
        let v: Value = serde_yaml::from_str(input)
            .map_err(|e| anyhow!("Failed to parse shape descriptor: {e}"))?;
        match v {
            Value::Mapping(m) => Ok(Self::Shape(m)),
            // a null document is treated like an empty descriptor
            Value::Null => Ok(Self::Shape(Mapping::new())),
            _ => Err(anyhow!(
                "Expected shape descriptor to be a mapping, got {}",
                v.kind()
            )),
        }
    }
}

impl<T: Shape + ?Sized> Criteria<'_, T> {
    /// Checks whether `item` satisfies the criteria.
    ///
    /// Predicates are called directly, a panicking predicate unwinds through this method.
    #[inline]
    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        match self {
            Self::Predicate(f) => f(item),
            Self::Shape(descriptor) => item.meets_criteria(descriptor),
        }
    }
}

impl<T: ?Sized> From<Mapping> for Criteria<'_, T> {
    fn from(descriptor: Mapping) -> Self {
        Self::Shape(descriptor)
    }
}

impl<T: ?Sized> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => write!(f, "Criteria::Predicate(<fn>)"),
            Self::Shape(m) => write!(f, "Criteria::Shape({m})"),
        }
    }
}
