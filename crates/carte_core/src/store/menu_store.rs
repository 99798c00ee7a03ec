//! Menu store: the single owned collection of all courses and dishes.
//!
//! # Responsibility
//! - Hold one bucket per configured course and keep dish order stable.
//! - Check every precondition before mutating, so rejected operations
//!   leave prior state untouched.
//!
//! # Invariants
//! - Every configured course name always maps to a bucket, possibly empty;
//!   the course set is fixed at construction.
//! - A dish lives in exactly one bucket; the store owns all dish values.
//! - `add_dish` appends; `remove_dish` shifts later elements left by one.

use crate::model::course::{CourseBucket, MenuSeed};
use crate::model::dish::{Dish, DishValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejection reasons for store operations.
///
/// Every variant is local and recoverable; callers surface a message and
/// retry with corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Dish fields failed validation on add.
    Validation(DishValidationError),
    /// Course name outside the configured set.
    UnknownCourse { course: String },
    /// Removal index past the end of the course's current sequence.
    IndexOutOfRange {
        course: String,
        index: usize,
        len: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCourse { course } => write!(f, "unknown course: `{course}`"),
            Self::IndexOutOfRange { course, index, len } => write!(
                f,
                "dish index {index} is out of range for course `{course}` with {len} dishes"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DishValidationError> for StoreError {
    fn from(value: DishValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Sole owner and mutator of the dish collection.
///
/// Constructed once from a seed and shared by every screen for the process
/// lifetime. Dish identity is positional, so an index read from a snapshot
/// is only valid until the next removal in the same bucket; callers re-read
/// indices after every mutation.
#[derive(Debug, Clone)]
pub struct MenuStore {
    courses: Vec<CourseBucket>,
}

impl MenuStore {
    /// Builds a store from an initial dataset.
    ///
    /// The seed's course names become the configured course set, in seed
    /// order. A course name repeated in the seed merges into its first
    /// occurrence rather than creating a second bucket.
    pub fn from_seed(seed: MenuSeed) -> Self {
        let mut courses: Vec<CourseBucket> = Vec::with_capacity(seed.courses.len());
        for bucket in seed.courses {
            match courses.iter_mut().find(|existing| existing.name == bucket.name) {
                Some(existing) => existing.dishes.extend(bucket.dishes),
                None => courses.push(bucket),
            }
        }
        Self { courses }
    }

    /// Appends a validated dish to the end of `course`'s sequence.
    ///
    /// All preconditions are checked before any mutation; a rejected add
    /// changes nothing.
    ///
    /// # Errors
    /// - [`StoreError::UnknownCourse`] when `course` is not configured.
    /// - [`StoreError::Validation`] when the dish fields are malformed.
    pub fn add_dish(&mut self, course: &str, dish: Dish) -> StoreResult<()> {
        let slot = self.bucket_index(course)?;
        dish.validate()?;
        self.courses[slot].dishes.push(dish);
        Ok(())
    }

    /// Removes and returns the dish at `index` within `course`.
    ///
    /// Later dishes shift left by one position, so any index captured
    /// before this call is stale afterwards.
    ///
    /// # Errors
    /// - [`StoreError::UnknownCourse`] when `course` is not configured.
    /// - [`StoreError::IndexOutOfRange`] when `index >= len`.
    pub fn remove_dish(&mut self, course: &str, index: usize) -> StoreResult<Dish> {
        let slot = self.bucket_index(course)?;
        let len = self.courses[slot].dishes.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange {
                course: course.to_string(),
                index,
                len,
            });
        }
        Ok(self.courses[slot].dishes.remove(index))
    }

    /// Returns a point-in-time copy of the full menu for rendering and
    /// aggregation. Never cached; each call re-reads live state.
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            sections: self.courses.clone(),
        }
    }

    /// Configured course names in configuration order.
    pub fn course_names(&self) -> Vec<&str> {
        self.courses.iter().map(|bucket| bucket.name.as_str()).collect()
    }

    /// Read-only view of one course's dishes.
    ///
    /// An unknown course is an error, never an empty slice, so callers can
    /// tell "empty course" apart from "no such course".
    pub fn course_dishes(&self, course: &str) -> StoreResult<&[Dish]> {
        let slot = self.bucket_index(course)?;
        Ok(&self.courses[slot].dishes)
    }

    fn bucket_index(&self, course: &str) -> StoreResult<usize> {
        self.courses
            .iter()
            .position(|bucket| bucket.name == course)
            .ok_or_else(|| StoreError::UnknownCourse {
                course: course.to_string(),
            })
    }
}

/// Point-in-time read-only view of the store used by screens and the
/// aggregate functions. Detached from the store: later mutations do not
/// show through an already-taken snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSnapshot {
    sections: Vec<CourseBucket>,
}

impl MenuSnapshot {
    /// Course sections in configuration order.
    pub fn sections(&self) -> &[CourseBucket] {
        &self.sections
    }

    /// Dishes of one course, or `None` when the course is not part of this
    /// snapshot.
    pub fn dishes_of(&self, course: &str) -> Option<&[Dish]> {
        self.sections
            .iter()
            .find(|bucket| bucket.name == course)
            .map(|bucket| bucket.dishes.as_slice())
    }
}
