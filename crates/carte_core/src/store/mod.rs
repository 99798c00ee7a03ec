//! Menu storage layer.
//!
//! # Responsibility
//! - Own the full course-to-dishes collection for the process.
//! - Funnel every mutation through one checked add/remove surface.
//!
//! # Invariants
//! - Writes enforce `Dish::validate()` before any mutation.
//! - A rejected operation leaves the collection exactly as it was.

pub mod menu_store;
