//! Built-in demonstration dataset.
//!
//! # Responsibility
//! - Provide the fixed sample menu the process-wide store boots with.
//!
//! # Invariants
//! - Course order is Starters, Mains, Desserts; screens rely on it for
//!   consistent selector rows.

use crate::model::course::MenuSeed;
use crate::model::dish::Dish;

/// Returns the sample menu used to seed a fresh store.
pub fn sample_menu() -> MenuSeed {
    MenuSeed::from_courses([
        (
            "Starters",
            vec![
                Dish::new("Bruschetta", 6.0, "Toasted bread with tomato and basil."),
                Dish::new(
                    "Stuffed Mushrooms",
                    8.0,
                    "Mushrooms stuffed with cheese and herbs.",
                ),
                Dish::new(
                    "Caprese Salad",
                    7.0,
                    "Fresh mozzarella, tomatoes, and basil.",
                ),
            ],
        ),
        (
            "Mains",
            vec![
                Dish::new("Grilled Chicken", 15.0, "Chicken grilled to perfection."),
                Dish::new("Beef Steak", 18.0, "Juicy beef steak cooked to order."),
                Dish::new(
                    "Vegetarian Lasagna",
                    14.0,
                    "Lasagna with roasted vegetables.",
                ),
            ],
        ),
        (
            "Desserts",
            vec![
                Dish::new("Chocolate Cake", 5.0, "Rich chocolate cake with cream."),
                Dish::new("Tiramisu", 6.0, "Classic Italian coffee-flavored dessert."),
                Dish::new("Cheesecake", 7.0, "Creamy cheesecake with berry topping."),
            ],
        ),
    ])
}
