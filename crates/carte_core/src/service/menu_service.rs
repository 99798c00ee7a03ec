//! Menu use-case service.
//!
//! # Responsibility
//! - Provide the entry points each screen renders from: home overview,
//!   full catalog, manage add/remove, single-course filter.
//! - Delegate every mutation to the store so its accept/reject discipline
//!   stays in one place.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - Aggregates are re-derived on every call, never cached across renders.

use crate::aggregate::{average_price_by_course, total_item_count, CourseAverage};
use crate::model::dish::{Dish, DishDraft};
use crate::store::menu_store::{MenuSnapshot, MenuStore, StoreResult};
use log::{info, warn};

/// Home screen data: totals plus per-course averages.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOverview {
    pub total_items: usize,
    pub averages: Vec<CourseAverage>,
}

/// Use-case wrapper around the process's one [`MenuStore`].
pub struct MenuService {
    store: MenuStore,
}

impl MenuService {
    /// Creates a service owning the given store.
    pub fn new(store: MenuStore) -> Self {
        Self { store }
    }

    /// Data for the home screen, derived fresh from live state.
    pub fn overview(&self) -> MenuOverview {
        let view = self.store.snapshot();
        MenuOverview {
            total_items: total_item_count(&view),
            averages: average_price_by_course(&view),
        }
    }

    /// Full catalog for the complete-menu screen.
    pub fn full_menu(&self) -> MenuSnapshot {
        self.store.snapshot()
    }

    /// Configured course names for selector rows, in configuration order.
    pub fn course_names(&self) -> Vec<String> {
        self.store
            .course_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Manage-screen add flow: parse the form draft, then append.
    ///
    /// Returns store rejections unchanged; nothing is written on failure.
    pub fn submit_dish(&mut self, course: &str, draft: &DishDraft) -> StoreResult<()> {
        let dish = match draft.parse() {
            Ok(dish) => dish,
            Err(err) => {
                warn!("event=dish_rejected module=core course={course} reason={err}");
                return Err(err.into());
            }
        };
        match self.store.add_dish(course, dish) {
            Ok(()) => {
                info!("event=dish_added module=core status=ok course={course}");
                Ok(())
            }
            Err(err) => {
                warn!("event=dish_rejected module=core course={course} reason={err}");
                Err(err)
            }
        }
    }

    /// Manage-screen remove flow, positional within `course`.
    ///
    /// Indices are only valid within the synchronous pass that read them;
    /// the screen re-reads the list after every removal.
    pub fn remove_dish(&mut self, course: &str, index: usize) -> StoreResult<Dish> {
        match self.store.remove_dish(course, index) {
            Ok(dish) => {
                info!("event=dish_removed module=core status=ok course={course} index={index}");
                Ok(dish)
            }
            Err(err) => {
                warn!(
                    "event=dish_remove_rejected module=core course={course} index={index} reason={err}"
                );
                Err(err)
            }
        }
    }

    /// Filter-screen projection of a single course.
    pub fn filter_course(&self, course: &str) -> StoreResult<Vec<Dish>> {
        self.store.course_dishes(course).map(<[Dish]>::to_vec)
    }
}
