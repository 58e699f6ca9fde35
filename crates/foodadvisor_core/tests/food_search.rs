use foodadvisor_core::db::open_db_in_memory;
use foodadvisor_core::{Food, FoodId, FoodRepository, Questionary, SqliteFoodRepository};

fn seed(
    repo: &SqliteFoodRepository<'_>,
    name: &str,
    cook_time_min: i32,
    price: i32,
    meal_type: &str,
    dish_type: &str,
) -> FoodId {
    repo.create_food(&Food::new(name, cook_time_min, price, meal_type, dish_type))
        .unwrap()
}

#[test]
fn empty_questionary_returns_all_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let id_a = seed(&repo, "toast", 5, 15, "breakfast", "bread");
    let id_b = seed(&repo, "goulash", 120, 140, "dinner", "stew");

    let questionary = Questionary::default();
    assert!(questionary.is_empty());

    let all = repo.search_foods(&questionary).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, id_a);
    assert_eq!(all[1].id, id_b);
}

#[test]
fn max_cook_time_filter_is_inclusive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let quick = seed(&repo, "salad", 10, 45, "lunch", "salad");
    let medium = seed(&repo, "risotto", 20, 95, "dinner", "rice dish");
    seed(&repo, "lasagna", 30, 110, "dinner", "pasta");

    let questionary = Questionary {
        max_cook_time_min: Some(20),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    let ids: Vec<_> = found.iter().map(|food| food.id).collect();
    assert_eq!(ids, vec![quick, medium]);
}

#[test]
fn max_price_filter_is_inclusive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let cheap = seed(&repo, "soup of the day", 25, 60, "lunch", "soup");
    seed(&repo, "steak", 25, 250, "dinner", "grill");

    let questionary = Questionary {
        max_price: Some(60),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, cheap);
}

#[test]
fn meal_type_filter_is_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let lunch = seed(&repo, "sandwich", 10, 35, "lunch", "bread");
    seed(&repo, "porridge", 15, 20, "breakfast", "cereal");

    let questionary = Questionary {
        meal_type: Some("lunch".to_string()),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, lunch);
}

#[test]
fn dish_type_filter_is_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    seed(&repo, "minestrone", 45, 70, "dinner", "soup");
    let dessert = seed(&repo, "tiramisu", 40, 80, "dinner", "dessert");

    let questionary = Questionary {
        dish_type: Some("dessert".to_string()),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, dessert);
}

#[test]
fn criteria_combine_conjunctively() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let match_both = seed(&repo, "noodle bowl", 15, 80, "lunch", "noodles");
    seed(&repo, "sushi set", 30, 180, "lunch", "fish");
    seed(&repo, "cheap dinner", 20, 55, "dinner", "stew");

    let questionary = Questionary {
        max_price: Some(100),
        meal_type: Some("lunch".to_string()),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, match_both);
}

#[test]
fn all_four_criteria_together() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let target = seed(&repo, "gazpacho", 15, 50, "lunch", "soup");
    seed(&repo, "slow gazpacho", 45, 50, "lunch", "soup");
    seed(&repo, "pricy gazpacho", 15, 90, "lunch", "soup");
    seed(&repo, "dinner soup", 15, 50, "dinner", "soup");
    seed(&repo, "lunch salad", 15, 50, "lunch", "salad");

    let questionary = Questionary {
        max_cook_time_min: Some(20),
        max_price: Some(60),
        meal_type: Some("lunch".to_string()),
        dish_type: Some("soup".to_string()),
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, target);
}

#[test]
fn no_match_returns_empty_list_not_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    seed(&repo, "paella", 50, 130, "dinner", "rice dish");

    let questionary = Questionary {
        meal_type: Some("breakfast".to_string()),
        ..Questionary::default()
    };
    let found = repo.search_foods(&questionary).unwrap();

    assert!(found.is_empty());
}

#[test]
fn search_on_empty_catalogue_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let found = repo.search_foods(&Questionary::default()).unwrap();
    assert!(found.is_empty());
}
