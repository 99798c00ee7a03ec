//! Course bucket and seed dataset shapes.

use crate::model::dish::Dish;
use serde::{Deserialize, Serialize};

/// One named course section holding its dishes in display order.
///
/// Insertion order is display order; positional removal depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseBucket {
    /// Course label, e.g. "Starters".
    pub name: String,
    /// Dishes in insertion order.
    pub dishes: Vec<Dish>,
}

impl CourseBucket {
    /// Creates an empty bucket for `name`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dishes: Vec::new(),
        }
    }
}

/// Initial dataset handed to the store at construction.
///
/// The seed's course names, in seed order, become the store's configured
/// course set and cannot change afterwards. Kept as an ordered list rather
/// than a map so a JSON seed keeps its author-intended course order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSeed {
    pub courses: Vec<CourseBucket>,
}

impl MenuSeed {
    /// Builds a seed from `(course, dishes)` pairs, preserving order.
    pub fn from_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Dish>)>,
        S: Into<String>,
    {
        Self {
            courses: courses
                .into_iter()
                .map(|(name, dishes)| CourseBucket {
                    name: name.into(),
                    dishes,
                })
                .collect(),
        }
    }
}
