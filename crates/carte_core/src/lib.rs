//! Core domain logic for Carte, an in-memory restaurant menu catalog.
//! This crate is the single source of truth for business invariants.

pub mod aggregate;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use aggregate::{average_price_by_course, format_price, total_item_count, CourseAverage};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{CourseBucket, MenuSeed};
pub use model::dish::{Dish, DishDraft, DishValidationError};
pub use seed::sample_menu;
pub use service::menu_service::{MenuOverview, MenuService};
pub use store::menu_store::{MenuSnapshot, MenuStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
