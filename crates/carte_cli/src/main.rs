//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `carte_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use carte_core::{sample_menu, MenuService, MenuStore};

fn main() {
    // Tiny probe validating core wiring independently of the mobile UI.
    println!("carte_core ping={}", carte_core::ping());
    println!("carte_core version={}", carte_core::core_version());

    let service = MenuService::new(MenuStore::from_seed(sample_menu()));
    let overview = service.overview();
    println!("menu total_items={}", overview.total_items);
    for entry in overview.averages {
        println!("course={} average={}", entry.course, entry.average);
    }
}
