use carte_core::{
    sample_menu, Dish, DishValidationError, MenuSeed, MenuStore, StoreError,
};

fn seeded_store() -> MenuStore {
    MenuStore::from_seed(sample_menu())
}

#[test]
fn from_seed_configures_course_names_in_seed_order() {
    let store = seeded_store();
    assert_eq!(store.course_names(), vec!["Starters", "Mains", "Desserts"]);
}

#[test]
fn from_seed_merges_repeated_course_names() {
    let seed = MenuSeed::from_courses([
        ("Starters", vec![Dish::new("Bruschetta", 6.0, "Toasted bread.")]),
        ("Mains", vec![]),
        ("Starters", vec![Dish::new("Olives", 3.0, "Marinated olives.")]),
    ]);
    let store = MenuStore::from_seed(seed);

    assert_eq!(store.course_names(), vec!["Starters", "Mains"]);
    let starters = store.course_dishes("Starters").unwrap();
    assert_eq!(starters.len(), 2);
    assert_eq!(starters[1].name, "Olives");
}

#[test]
fn add_dish_appends_to_end_of_course() {
    let mut store = seeded_store();
    store
        .add_dish("Starters", Dish::new("Garlic Bread", 4.0, "With herb butter."))
        .unwrap();

    let starters = store.course_dishes("Starters").unwrap();
    assert_eq!(starters.len(), 4);
    assert_eq!(starters.last().unwrap().name, "Garlic Bread");
}

#[test]
fn add_dish_rejects_unknown_course_without_mutation() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let err = store
        .add_dish("Beverages", Dish::new("Espresso", 3.0, "Double shot."))
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::UnknownCourse {
            course: "Beverages".to_string()
        }
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn add_dish_rejection_is_atomic() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let err = store
        .add_dish("Starters", Dish::new("", 4.0, "With herb butter."))
        .unwrap_err();

    assert_eq!(err, StoreError::Validation(DishValidationError::EmptyName));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn remove_dish_shifts_later_dishes_left() {
    let mut store = seeded_store();

    let removed = store.remove_dish("Starters", 0).unwrap();
    assert_eq!(removed.name, "Bruschetta");

    let starters = store.course_dishes("Starters").unwrap();
    assert_eq!(starters.len(), 2);
    assert_eq!(starters[0].name, "Stuffed Mushrooms");
    assert_eq!(starters[1].name, "Caprese Salad");
}

#[test]
fn remove_dish_rejects_out_of_range_index() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let err = store.remove_dish("Starters", 3).unwrap_err();
    assert_eq!(
        err,
        StoreError::IndexOutOfRange {
            course: "Starters".to_string(),
            index: 3,
            len: 3,
        }
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn remove_dish_rejects_unknown_course() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let err = store.remove_dish("Beverages", 0).unwrap_err();
    assert_eq!(
        err,
        StoreError::UnknownCourse {
            course: "Beverages".to_string()
        }
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn remove_from_empty_course_is_rejected() {
    let seed = MenuSeed::from_courses([("Starters", Vec::new())]);
    let mut store = MenuStore::from_seed(seed);

    let err = store.remove_dish("Starters", 0).unwrap_err();
    assert!(matches!(err, StoreError::IndexOutOfRange { len: 0, .. }));
}

#[test]
fn course_dishes_distinguishes_empty_from_unknown() {
    let seed = MenuSeed::from_courses([("Starters", Vec::new())]);
    let store = MenuStore::from_seed(seed);

    assert!(store.course_dishes("Starters").unwrap().is_empty());
    assert!(matches!(
        store.course_dishes("Mains").unwrap_err(),
        StoreError::UnknownCourse { .. }
    ));
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let mut store = seeded_store();
    let view = store.snapshot();

    store.remove_dish("Desserts", 0).unwrap();

    assert_eq!(view.dishes_of("Desserts").unwrap().len(), 3);
    assert_eq!(store.snapshot().dishes_of("Desserts").unwrap().len(), 2);
}

#[test]
fn snapshot_reports_unknown_course_as_none() {
    let store = seeded_store();
    assert!(store.snapshot().dishes_of("Beverages").is_none());
}
