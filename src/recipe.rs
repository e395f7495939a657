use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Categories selectable for built-in and user-authored recipes.
pub const CATEGORIES: &[&str] = &["牛肉类", "猪肉/排骨类", "鸡肉类", "素菜/蛋/主食"];

/// Sentinel category for recipes synthesized from AI suggestions.
pub const AI_CATEGORY: &str = "AI 灵感";

/// A dish. Immutable once created; the only lifecycle operations are
/// create and delete. The serialized form matches the stored JSON of the
/// original web app (`isCustom`, optional on old records).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub category: String,
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
}

impl Recipe {
    pub fn builtin(id: &str, name: &str, ingredients: &[&str], category: &str) -> Self {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            is_custom: false,
        }
    }

    pub fn custom(id: String, name: String, ingredients: Vec<String>, category: String) -> Self {
        Recipe {
            id,
            name,
            ingredients,
            category,
            is_custom: true,
        }
    }
}

/// Generated ids embed creation time plus a random suffix, prefixed by
/// origin: `user-…` for hand-entered recipes, `ai-…` for AI-sourced ones.
pub fn generate_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}-{}{}", prefix, millis, suffix)
}
