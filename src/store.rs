use anyhow::{Context, Result};

use crate::data::builtin_recipes;
use crate::recipe::Recipe;
use crate::storage::KeyValueStore;

/// Storage keys. Kept identical to the original app so existing data loads.
pub const RECIPES_KEY: &str = "user_recipes_v2";
pub const API_KEY_KEY: &str = "deepseek_official_key";

/// The fixed built-in catalog plus the mutable, persisted user list.
/// Single logical owner (the controller) serializes all mutations.
pub struct RecipeStore<S: KeyValueStore> {
    builtin: Vec<Recipe>,
    user: Vec<Recipe>,
    api_key: String,
    storage: S,
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Loads built-ins, the user list, and the credential. Absent or
    /// unparseable stored data falls back to the defaults without raising.
    pub fn load(storage: S) -> Self {
        let user = storage
            .get(RECIPES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<Recipe>>(&raw).ok())
            .unwrap_or_default();
        let api_key = storage.get(API_KEY_KEY).unwrap_or_default();
        RecipeStore {
            builtin: builtin_recipes(),
            user,
            api_key,
            storage,
        }
    }

    pub fn builtin(&self) -> &[Recipe] {
        &self.builtin
    }

    pub fn user(&self) -> &[Recipe] {
        &self.user
    }

    /// Merged catalog: built-ins first, then the user list, newest-first.
    pub fn merged(&self) -> Vec<Recipe> {
        self.builtin.iter().chain(self.user.iter()).cloned().collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.builtin.iter().any(|r| r.id == id) || self.user.iter().any(|r| r.id == id)
    }

    pub fn find_user_by_name(&self, name: &str) -> Option<&Recipe> {
        self.user.iter().find(|r| r.name == name)
    }

    pub fn find_custom(&self, id: &str) -> Option<&Recipe> {
        self.user.iter().find(|r| r.id == id && r.is_custom)
    }

    /// Prepends to the user list and rewrites the persisted value.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        self.user.insert(0, recipe);
        self.save_user_list()
    }

    /// Removes the entry with the given id if present. Absence is a no-op,
    /// not an error; the persisted value is only rewritten on change.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.user.len();
        self.user.retain(|r| r.id != id);
        if self.user.len() != before {
            self.save_user_list()?;
        }
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Persisted immediately; the credential is configuration, not a recipe.
    pub fn save_api_key(&mut self, value: String) -> Result<()> {
        self.storage
            .set(API_KEY_KEY, &value)
            .context("Failed to persist API key")?;
        self.api_key = value;
        Ok(())
    }

    fn save_user_list(&mut self) -> Result<()> {
        let encoded =
            serde_json::to_string(&self.user).context("Failed to encode user recipe list")?;
        self.storage
            .set(RECIPES_KEY, &encoded)
            .context("Failed to persist user recipe list")
    }
}
