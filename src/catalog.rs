use rand::Rng;

use crate::recipe::Recipe;

/// Uniform pick over the merged catalog. `None` on an empty catalog — the
/// caller keeps its current selection in that case.
pub fn pick_random<'a, R: Rng>(recipes: &'a [Recipe], rng: &mut R) -> Option<&'a Recipe> {
    if recipes.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..recipes.len());
    Some(&recipes[index])
}

/// Keyword filter: the query is split on whitespace into lowercase tokens
/// and a recipe matches when every token is a substring of its lowercased
/// name + ingredients. An empty or whitespace-only query matches nothing.
pub fn filter_by_keywords(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let keywords: Vec<String> = query
        .split_whitespace()
        .map(|kw| kw.to_lowercase())
        .collect();
    if keywords.is_empty() {
        return Vec::new();
    }

    recipes
        .iter()
        .filter(|recipe| {
            let mut haystack = recipe.name.clone();
            for ingredient in &recipe.ingredients {
                haystack.push(' ');
                haystack.push_str(ingredient);
            }
            let haystack = haystack.to_lowercase();
            keywords.iter().all(|kw| haystack.contains(kw.as_str()))
        })
        .cloned()
        .collect()
}

/// Group the merged catalog by category for the browser view. Category
/// order is first appearance in merged order; members keep merged order.
pub fn group_by_category(recipes: &[Recipe]) -> Vec<(String, Vec<Recipe>)> {
    let mut groups: Vec<(String, Vec<Recipe>)> = Vec::new();
    for recipe in recipes {
        match groups.iter_mut().find(|(cat, _)| *cat == recipe.category) {
            Some((_, members)) => members.push(recipe.clone()),
            None => groups.push((recipe.category.clone(), vec![recipe.clone()])),
        }
    }
    groups
}

/// Icon hint for a category header. Checked in order, first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Beef,
    Pork,
    Chicken,
    Sparkles,
    Egg,
}

pub fn category_icon(category: &str) -> CategoryIcon {
    if category.contains("牛肉") {
        CategoryIcon::Beef
    } else if category.contains("猪肉") {
        CategoryIcon::Pork
    } else if category.contains("鸡肉") {
        CategoryIcon::Chicken
    } else if category.contains("AI") {
        CategoryIcon::Sparkles
    } else {
        CategoryIcon::Egg
    }
}
