//! FFI use-case API for the menu screens.
//!
//! # Responsibility
//! - Expose stable, screen-level functions to Dart via FRB.
//! - Hold the one process-wide menu store every screen shares.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store is seeded with the sample menu on first use and lives for
//!   the whole process; there is no per-screen or per-session copy.

use carte_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sample_menu, Dish, MenuService, MenuStore,
};
use std::sync::{Mutex, OnceLock};

// The mutex satisfies Rust's shared-static rules; all calls arrive on the
// single UI thread, so it is never contended.
static MENU: OnceLock<Mutex<MenuService>> = OnceLock::new();

fn with_menu<T>(f: impl FnOnce(&mut MenuService) -> T) -> T {
    let cell = MENU.get_or_init(|| Mutex::new(MenuService::new(MenuStore::from_seed(sample_menu()))));
    let mut guard = match cell.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One dish row as rendered by the menu screens.
#[derive(Debug, Clone, PartialEq)]
pub struct DishItem {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl From<&Dish> for DishItem {
    fn from(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            price: dish.price,
            description: dish.description.clone(),
        }
    }
}

/// One course section of the complete-menu screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSectionItem {
    pub course: String,
    pub dishes: Vec<DishItem>,
}

/// Per-course average row for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAverageItem {
    pub course: String,
    /// Two-decimal display string, `"0.00"` for an empty course.
    pub average: String,
}

/// Generic action response envelope for menu mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl MenuActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Response envelope for the course filter screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFilterResponse {
    /// Whether the course was found.
    pub ok: bool,
    /// Empty on success, rejection reason otherwise.
    pub message: String,
    /// The course's dishes in display order; empty on failure.
    pub dishes: Vec<DishItem>,
}

/// Total number of dishes across all courses, for the home screen.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; recomputed from live state on every call.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_total_items() -> u32 {
    with_menu(|service| service.overview().total_items as u32)
}

/// Per-course average prices, in configured course order.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; one row per configured course, empty courses show "0.00".
#[flutter_rust_bridge::frb(sync)]
pub fn menu_average_prices() -> Vec<CourseAverageItem> {
    with_menu(|service| {
        service
            .overview()
            .averages
            .into_iter()
            .map(|entry| CourseAverageItem {
                course: entry.course,
                average: entry.average,
            })
            .collect()
    })
}

/// Configured course names driving the category selectors.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; order is stable across the process lifetime.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_course_names() -> Vec<String> {
    with_menu(|service| service.course_names())
}

/// Complete menu grouped by course, for the catalog screen.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; reflects live state at call time.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_sections() -> Vec<MenuSectionItem> {
    with_menu(|service| {
        service
            .full_menu()
            .sections()
            .iter()
            .map(|bucket| MenuSectionItem {
                course: bucket.name.clone(),
                dishes: bucket.dishes.iter().map(DishItem::from).collect(),
            })
            .collect()
    })
}

/// Adds a dish from the manage-screen form.
///
/// `price` arrives as typed form text and is parsed in core.
///
/// # FFI contract
/// - Sync call, in-memory write.
/// - Never panics; a rejected add leaves the menu unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_add_dish(
    course: String,
    name: String,
    price: String,
    description: String,
) -> MenuActionResponse {
    let draft = carte_core::DishDraft {
        name,
        price,
        description,
    };
    with_menu(|service| match service.submit_dish(&course, &draft) {
        Ok(()) => MenuActionResponse::success("Dish added successfully!"),
        Err(err) => MenuActionResponse::failure(format!("menu_add_dish failed: {err}")),
    })
}

/// Removes the dish at `index` within `course`.
///
/// Indices come from the most recent render of the remove list; the screen
/// re-reads the list after every removal before offering another one.
///
/// # FFI contract
/// - Sync call, in-memory write.
/// - Never panics; a rejected removal leaves the menu unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_remove_dish(course: String, index: u32) -> MenuActionResponse {
    with_menu(|service| match service.remove_dish(&course, index as usize) {
        Ok(dish) => MenuActionResponse::success(format!("Removed `{}`.", dish.name)),
        Err(err) => MenuActionResponse::failure(format!("menu_remove_dish failed: {err}")),
    })
}

/// Dishes of one selected course, for the filter screen.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; an unknown course is reported as a failure envelope so
///   the UI can tell it apart from an empty course.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_filter_course(course: String) -> MenuFilterResponse {
    with_menu(|service| match service.filter_course(&course) {
        Ok(dishes) => MenuFilterResponse {
            ok: true,
            message: String::new(),
            dishes: dishes.iter().map(DishItem::from).collect(),
        },
        Err(err) => MenuFilterResponse {
            ok: false,
            message: format!("menu_filter_course failed: {err}"),
            dishes: Vec::new(),
        },
    })
}
