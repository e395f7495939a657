use rand::rngs::StdRng;
use rand::SeedableRng;

use recipe_picker::catalog::{
    category_icon, filter_by_keywords, group_by_category, pick_random, CategoryIcon,
};
use recipe_picker::data::builtin_recipes;
use recipe_picker::recipe::Recipe;

#[test]
fn random_pick_is_a_member_of_the_catalog() {
    let recipes = builtin_recipes();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let pick = pick_random(&recipes, &mut rng).expect("catalog is non-empty");
        assert!(recipes.iter().any(|r| r.id == pick.id));
    }
}

#[test]
fn random_pick_on_empty_catalog_is_none() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(pick_random(&[], &mut rng).is_none());
}

#[test]
fn filter_requires_every_keyword() {
    let recipes = builtin_recipes();

    let hits = filter_by_keywords(&recipes, "牛肉 青椒");
    assert!(hits.iter().any(|r| r.name == "青椒炒牛肉"));

    let hits = filter_by_keywords(&recipes, "牛肉 土豆");
    assert!(!hits.iter().any(|r| r.name == "青椒炒牛肉"));
    assert!(hits.iter().any(|r| r.name == "西红柿土豆炖牛肉"));
}

#[test]
fn filter_matches_ingredients_case_insensitively() {
    let recipes = builtin_recipes();
    let hits = filter_by_keywords(&recipes, "ribeye");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "日式牛排盖饭");
}

#[test]
fn empty_or_whitespace_query_matches_nothing() {
    let recipes = builtin_recipes();
    assert!(filter_by_keywords(&recipes, "").is_empty());
    assert!(filter_by_keywords(&recipes, "   ").is_empty());
}

#[test]
fn filter_preserves_merged_order() {
    let recipes = builtin_recipes();
    let hits = filter_by_keywords(&recipes, "牛肉");
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| recipes.iter().position(|r| r.id == hit.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn grouping_keeps_first_seen_category_order() {
    let mut recipes = builtin_recipes();
    recipes.push(Recipe::custom(
        "user-1".to_string(),
        "拿手红烧肉".to_string(),
        vec!["五花肉".to_string()],
        "猪肉/排骨类".to_string(),
    ));

    let groups = group_by_category(&recipes);
    let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        categories,
        vec!["牛肉类", "猪肉/排骨类", "鸡肉类", "素菜/蛋/主食"]
    );

    // The appended custom recipe lands last within its category.
    let pork = &groups[1].1;
    assert_eq!(pork.last().unwrap().name, "拿手红烧肉");
}

#[test]
fn category_icons_match_by_first_hit() {
    assert_eq!(category_icon("牛肉类"), CategoryIcon::Beef);
    assert_eq!(category_icon("猪肉/排骨类"), CategoryIcon::Pork);
    assert_eq!(category_icon("鸡肉类"), CategoryIcon::Chicken);
    assert_eq!(category_icon("AI 灵感"), CategoryIcon::Sparkles);
    assert_eq!(category_icon("素菜/蛋/主食"), CategoryIcon::Egg);
    // Ordered checks: beef wins when several markers appear.
    assert_eq!(category_icon("牛肉鸡肉双拼"), CategoryIcon::Beef);
}
