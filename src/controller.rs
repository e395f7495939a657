use anyhow::Result;
use rand::Rng;
use std::time::Duration;

use crate::api_connection::connection::ChefApiError;
use crate::catalog;
use crate::chef::ExploreReply;
use crate::recipe::{generate_id, Recipe, AI_CATEGORY};
use crate::storage::KeyValueStore;
use crate::store::RecipeStore;

/// Staged-reveal randomize animation: fixed tick count, fixed interval.
pub const SPIN_TICKS: u32 = 15;
pub const SPIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Random,
    Filter,
    Explore,
}

/// An AI request the controller wants the driver to run.
#[derive(Debug, Clone, PartialEq)]
pub enum AiRequest {
    Instructions { recipe_name: String },
    Explore { input: String },
}

/// Token + request handed to the async driver. The token is the request
/// generation at issue time; a completion carrying a stale token is dropped
/// so a superseded call can never overwrite newer state.
#[derive(Debug, Clone, PartialEq)]
pub struct AiCall {
    pub token: u64,
    pub request: AiRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Nothing to do (empty input, no selection, ...).
    Idle,
    /// No stored credential; route the user to credential entry instead.
    NeedsCredential,
    Call(AiCall),
}

struct SpinState {
    ticks_left: u32,
    final_pick: Recipe,
}

/// Owns all transient display state and serializes every mutation of the
/// recipe store. Pure state machine: the async gateway calls live outside,
/// wired through `ActionOutcome` / `finish_*`.
pub struct AppController<S: KeyValueStore> {
    store: RecipeStore<S>,
    mode: AppMode,
    selected: Option<Recipe>,
    search_query: String,
    search_results: Vec<Recipe>,
    explore_input: String,
    explore_results: Vec<String>,
    ai_content: Option<String>,
    ai_error: Option<String>,
    loading: bool,
    pending_delete: Option<String>,
    spin: Option<SpinState>,
    generation: u64,
    last_request: Option<AiRequest>,
}

impl<S: KeyValueStore> AppController<S> {
    pub fn new(store: RecipeStore<S>) -> Self {
        AppController {
            store,
            mode: AppMode::Random,
            selected: None,
            search_query: String::new(),
            search_results: Vec::new(),
            explore_input: String::new(),
            explore_results: Vec::new(),
            ai_content: None,
            ai_error: None,
            loading: false,
            pending_delete: None,
            spin: None,
            generation: 0,
            last_request: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }

    pub fn merged(&self) -> Vec<Recipe> {
        self.store.merged()
    }

    pub fn grouped(&self) -> Vec<(String, Vec<Recipe>)> {
        catalog::group_by_category(&self.store.merged())
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn search_results(&self) -> &[Recipe] {
        &self.search_results
    }

    pub fn explore_results(&self) -> &[String] {
        &self.explore_results
    }

    pub fn ai_content(&self) -> Option<&str> {
        self.ai_content.as_deref()
    }

    pub fn ai_error(&self) -> Option<&str> {
        self.ai_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn api_key(&self) -> &str {
        self.store.api_key()
    }

    pub fn save_api_key(&mut self, value: String) -> Result<()> {
        self.store.save_api_key(value)
    }

    /// Modes are mutually exclusive. Switching clears AI content, the error
    /// slot and the selection; leaving Explore also drops the suggestions.
    pub fn switch_mode(&mut self, mode: AppMode) {
        let leaving_explore = self.mode == AppMode::Explore && mode != AppMode::Explore;
        self.mode = mode;
        self.ai_content = None;
        self.ai_error = None;
        self.selected = None;
        if leaving_explore {
            self.explore_results.clear();
        }
    }

    pub fn select_recipe(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
        self.ai_content = None;
        self.ai_error = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ----- RANDOM -----

    /// Starts the staged-reveal spin. Ignored while a spin is in flight and
    /// a no-op on an empty catalog. The final pick is drawn uniformly at
    /// invocation; the interim picks shown by `spin_tick` are cosmetic.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.spin.is_some() {
            return false;
        }
        let merged = self.store.merged();
        let Some(final_pick) = catalog::pick_random(&merged, rng).cloned() else {
            return false;
        };
        self.ai_content = None;
        self.ai_error = None;
        self.spin = Some(SpinState {
            ticks_left: SPIN_TICKS,
            final_pick,
        });
        true
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// One animation tick: shows an interim random pick, or settles on the
    /// stored final pick on the last tick. Returns whether the spin is
    /// still in flight afterwards.
    pub fn spin_tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        let Some(mut spin) = self.spin.take() else {
            return false;
        };
        spin.ticks_left -= 1;
        if spin.ticks_left == 0 {
            self.selected = Some(spin.final_pick);
            false
        } else {
            let merged = self.store.merged();
            self.selected = catalog::pick_random(&merged, rng).cloned();
            self.spin = Some(spin);
            true
        }
    }

    // ----- FILTER -----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Explicit submit, not live-as-you-type. An empty query clears the
    /// result list rather than returning the whole catalog.
    pub fn search(&mut self) {
        if self.search_query.trim().is_empty() {
            self.search_results.clear();
            return;
        }
        self.search_results = catalog::filter_by_keywords(&self.store.merged(), &self.search_query);
        self.selected = None;
        self.ai_content = None;
    }

    // ----- EXPLORE -----

    pub fn set_explore_input(&mut self, input: impl Into<String>) {
        self.explore_input = input.into();
    }

    pub fn explore_input(&self) -> &str {
        &self.explore_input
    }

    pub fn explore(&mut self) -> ActionOutcome {
        let input = self.explore_input.trim().to_string();
        if input.is_empty() {
            return ActionOutcome::Idle;
        }
        if self.store.api_key().trim().is_empty() {
            return ActionOutcome::NeedsCredential;
        }
        self.explore_results.clear();
        self.ai_content = None;
        self.selected = None;
        self.issue(AiRequest::Explore { input })
    }

    pub fn finish_explore(&mut self, token: u64, result: Result<ExploreReply, ChefApiError>) {
        if token != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(ExploreReply::List { items }) => self.explore_results = items,
            Ok(ExploreReply::Instruction { content }) => self.ai_content = Some(content),
            Err(err) => {
                self.ai_error = Some(err.user_message("AI 探索失败，请稍后重试"));
            }
        }
    }

    /// Picking a suggested dish: re-select a previously added user recipe
    /// of the same name, or synthesize a new custom one and add it.
    pub fn select_suggestion<R: Rng>(&mut self, dish_name: &str, rng: &mut R) -> Result<String> {
        if let Some(existing) = self.store.find_user_by_name(dish_name).cloned() {
            let id = existing.id.clone();
            self.select_recipe(existing);
            return Ok(id);
        }
        let mut ingredients = vec!["AI推荐".to_string()];
        ingredients.extend(self.explore_input.split_whitespace().map(str::to_string));
        let id = self.fresh_id("ai", rng);
        let recipe = Recipe::custom(
            id.clone(),
            dish_name.to_string(),
            ingredients,
            AI_CATEGORY.to_string(),
        );
        self.store.add(recipe.clone())?;
        self.select_recipe(recipe);
        Ok(id)
    }

    // ----- AI instructions -----

    /// "Teach me": available when a recipe is selected and no AI content is
    /// shown yet.
    pub fn teach_me(&mut self) -> ActionOutcome {
        let Some(recipe_name) = self.selected.as_ref().map(|r| r.name.clone()) else {
            return ActionOutcome::Idle;
        };
        if self.ai_content.is_some() {
            return ActionOutcome::Idle;
        }
        if self.store.api_key().trim().is_empty() {
            return ActionOutcome::NeedsCredential;
        }
        self.ai_content = None;
        self.issue(AiRequest::Instructions { recipe_name })
    }

    pub fn finish_instructions(&mut self, token: u64, result: Result<String, ChefApiError>) {
        if token != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(content) => self.ai_content = Some(content),
            Err(err) => {
                self.ai_error = Some(err.user_message("获取 AI 指导失败，请检查网络或 API Key"));
            }
        }
    }

    /// Re-issues the last AI request, whatever mode it came from.
    pub fn retry(&mut self) -> ActionOutcome {
        match self.last_request.clone() {
            Some(AiRequest::Explore { input }) => {
                self.explore_input = input;
                self.explore()
            }
            Some(AiRequest::Instructions { recipe_name }) => {
                if self.store.api_key().trim().is_empty() {
                    return ActionOutcome::NeedsCredential;
                }
                self.ai_content = None;
                self.issue(AiRequest::Instructions { recipe_name })
            }
            None => ActionOutcome::Idle,
        }
    }

    // ----- user recipes -----

    /// Adds a hand-entered recipe. A blank name is a no-op. Ingredients are
    /// split on Chinese/ASCII commas and whitespace.
    pub fn add_recipe<R: Rng>(
        &mut self,
        name: &str,
        ingredients_text: &str,
        category: &str,
        rng: &mut R,
    ) -> Result<Option<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let ingredients: Vec<String> = ingredients_text
            .split(|c: char| c == '，' || c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let id = self.fresh_id("user", rng);
        let recipe = Recipe::custom(
            id.clone(),
            name.to_string(),
            ingredients,
            category.to_string(),
        );
        self.store.add(recipe)?;
        Ok(Some(id))
    }

    /// Arms the two-step delete. Only existing custom recipes qualify;
    /// built-ins never get a delete affordance.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.store.find_custom(id).is_some() {
            self.pending_delete = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        if let Some(id) = self.pending_delete.take() {
            self.store.remove(&id)?;
            if self.selected.as_ref().map_or(false, |r| r.id == id) {
                self.selected = None;
                self.ai_content = None;
            }
        }
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ----- internals -----

    fn issue(&mut self, request: AiRequest) -> ActionOutcome {
        self.loading = true;
        self.ai_error = None;
        self.generation += 1;
        self.last_request = Some(request.clone());
        ActionOutcome::Call(AiCall {
            token: self.generation,
            request,
        })
    }

    fn fresh_id<R: Rng>(&self, prefix: &str, rng: &mut R) -> String {
        loop {
            let id = generate_id(prefix, rng);
            if !self.store.contains_id(&id) {
                return id;
            }
        }
    }
}
