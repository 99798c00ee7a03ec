use carte_core::{
    sample_menu, DishDraft, DishValidationError, MenuService, MenuStore, StoreError,
};

fn seeded_service() -> MenuService {
    MenuService::new(MenuStore::from_seed(sample_menu()))
}

fn draft(name: &str, price: &str, description: &str) -> DishDraft {
    DishDraft {
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn overview_reports_seeded_totals_and_averages() {
    let service = seeded_service();
    let overview = service.overview();

    assert_eq!(overview.total_items, 9);
    assert_eq!(overview.averages.len(), 3);
    assert_eq!(overview.averages[1].course, "Mains");
    assert_eq!(overview.averages[1].average, "15.67");
}

#[test]
fn submit_dish_parses_form_input_and_appends() {
    let mut service = seeded_service();

    service
        .submit_dish("Mains", &draft("Risotto", "13.50", "Mushroom risotto."))
        .unwrap();

    let menu = service.full_menu();
    let mains = menu.dishes_of("Mains").unwrap();
    assert_eq!(mains.last().unwrap().name, "Risotto");
    assert_eq!(mains.last().unwrap().price, 13.5);
    assert_eq!(service.overview().total_items, 10);
}

#[test]
fn submit_dish_rejects_blank_fields_without_mutation() {
    let mut service = seeded_service();

    let err = service
        .submit_dish("Mains", &draft("Risotto", "13.50", ""))
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Validation(DishValidationError::EmptyDescription)
    );
    assert_eq!(service.overview().total_items, 9);
}

#[test]
fn submit_dish_rejects_price_text() {
    let mut service = seeded_service();

    let err = service
        .submit_dish("Mains", &draft("Risotto", "thirteen", "Mushroom risotto."))
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(DishValidationError::UnparsablePrice(_))
    ));
    assert_eq!(service.overview().total_items, 9);
}

#[test]
fn submit_dish_rejects_unknown_course() {
    let mut service = seeded_service();

    let err = service
        .submit_dish("Beverages", &draft("Espresso", "3", "Double shot."))
        .unwrap_err();

    assert!(matches!(err, StoreError::UnknownCourse { .. }));
    assert_eq!(service.overview().total_items, 9);
}

#[test]
fn remove_dish_returns_removed_and_updates_overview() {
    let mut service = seeded_service();

    let removed = service.remove_dish("Starters", 1).unwrap();
    assert_eq!(removed.name, "Stuffed Mushrooms");
    assert_eq!(service.overview().total_items, 8);
}

#[test]
fn remove_dish_surfaces_stale_index_as_error() {
    let mut service = seeded_service();

    // A second removal at the old end index must be re-read, not replayed.
    service.remove_dish("Starters", 2).unwrap();
    let err = service.remove_dish("Starters", 2).unwrap_err();

    assert!(matches!(err, StoreError::IndexOutOfRange { len: 2, .. }));
    assert_eq!(service.overview().total_items, 8);
}

#[test]
fn filter_course_projects_one_course_unchanged() {
    let service = seeded_service();

    let desserts = service.filter_course("Desserts").unwrap();
    let names: Vec<&str> = desserts.iter().map(|dish| dish.name.as_str()).collect();
    assert_eq!(names, vec!["Chocolate Cake", "Tiramisu", "Cheesecake"]);
}

#[test]
fn filter_course_rejects_unknown_course() {
    let service = seeded_service();

    assert!(matches!(
        service.filter_course("Beverages").unwrap_err(),
        StoreError::UnknownCourse { .. }
    ));
}

#[test]
fn course_names_match_seed_order() {
    let service = seeded_service();
    assert_eq!(service.course_names(), vec!["Starters", "Mains", "Desserts"]);
}
