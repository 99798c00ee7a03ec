//! Dish domain model.
//!
//! # Responsibility
//! - Define the canonical menu item record shared by every screen.
//! - Provide field validation for write paths and form-input parsing.
//!
//! # Invariants
//! - `name` and `description` are non-blank after trimming.
//! - `price` is a finite, non-negative amount in the source currency unit.
//! - A dish carries no stable identifier; identity is positional within its
//!   course bucket.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One menu item record.
///
/// Fields are public so screens can render directly from a snapshot; all
/// mutation still goes through the store, which enforces [`Dish::validate`]
/// before any write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Display label, non-blank.
    pub name: String,
    /// Amount in the source currency unit, two-decimal display precision.
    pub price: f64,
    /// Free-text blurb shown under the name.
    pub description: String,
}

impl Dish {
    /// Creates a dish without validating it.
    ///
    /// Write paths must call [`Dish::validate`] before persisting; seeds and
    /// tests may construct freely.
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    /// Checks the dish field rules.
    ///
    /// # Errors
    /// - [`DishValidationError::EmptyName`] when `name` is blank.
    /// - [`DishValidationError::EmptyDescription`] when `description` is blank.
    /// - [`DishValidationError::NonFinitePrice`] for NaN or infinite price.
    /// - [`DishValidationError::NegativePrice`] for a price below zero.
    pub fn validate(&self) -> Result<(), DishValidationError> {
        if self.name.trim().is_empty() {
            return Err(DishValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(DishValidationError::EmptyDescription);
        }
        if !self.price.is_finite() {
            return Err(DishValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(DishValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}

/// Raw form input for the add-dish flow.
///
/// The manage screen submits price as text; parsing and trimming happen here
/// so the store only ever sees a structurally sound [`Dish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    /// Price as typed, parsed as a decimal number.
    pub price: String,
    pub description: String,
}

impl DishDraft {
    /// Parses and validates the draft into a [`Dish`].
    ///
    /// Leading and trailing whitespace is trimmed from every field. The
    /// price text must parse as a decimal number in full; partial numeric
    /// prefixes are rejected.
    pub fn parse(&self) -> Result<Dish, DishValidationError> {
        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(DishValidationError::UnparsablePrice(self.price.clone()));
        }
        let price: f64 = price_text
            .parse()
            .map_err(|_| DishValidationError::UnparsablePrice(self.price.clone()))?;

        let dish = Dish::new(self.name.trim(), price, self.description.trim());
        dish.validate()?;
        Ok(dish)
    }
}

/// Field-level rejection for dish writes.
#[derive(Debug, Clone, PartialEq)]
pub enum DishValidationError {
    /// Name is empty or whitespace only.
    EmptyName,
    /// Description is empty or whitespace only.
    EmptyDescription,
    /// Price is NaN or infinite.
    NonFinitePrice,
    /// Price is below zero.
    NegativePrice(f64),
    /// Price text did not parse as a decimal number.
    UnparsablePrice(String),
}

impl Display for DishValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "dish name must not be empty"),
            Self::EmptyDescription => write!(f, "dish description must not be empty"),
            Self::NonFinitePrice => write!(f, "dish price must be a finite number"),
            Self::NegativePrice(price) => {
                write!(f, "dish price must not be negative, got {price}")
            }
            Self::UnparsablePrice(text) => {
                write!(f, "dish price is not a valid number: `{text}`")
            }
        }
    }
}

impl Error for DishValidationError {}
