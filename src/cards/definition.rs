//! Deck definitions - the catalogs a deck is built from.
//!
//! A deck definition is data only: an ingredient catalog and a recipe
//! catalog. Decks are grouped by *theme*, one directory per theme:
//!
//! ```text
//! decks/
//!   default/
//!     ingredients.json   {"ingredients": [{"id": "egg", "name": "Egg"}, ...]}
//!     recipes.json       {"recipes": [{"id": "omelette", "name": "Omelette",
//!                                      "requires": ["egg", "egg"]}, ...]}
//! ```
//!
//! The `default` theme ships inside the crate; see
//! [`DeckDefinition::embedded_default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::card::Rarity;
use super::registry::Catalog;
use crate::core::error::DeckError;

const DEFAULT_INGREDIENTS: &str = include_str!("../../decks/default/ingredients.json");
const DEFAULT_RECIPES: &str = include_str!("../../decks/default/recipes.json");

const INGREDIENTS_FILE: &str = "ingredients.json";
const RECIPES_FILE: &str = "recipes.json";

fn default_difficulty() -> u32 {
    1
}

/// One ingredient catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl IngredientConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity: Rarity::default(),
            category: None,
            effects: Vec::new(),
            icon: None,
        }
    }
}

/// One recipe catalog entry.
///
/// `requires` is ordered and may repeat an ingredient ID to ask for more
/// than one card of that kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeConfig {
    pub id: String,
    pub name: String,
    pub requires: Vec<String>,
    #[serde(default)]
    pub score: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,
    #[serde(default)]
    pub icon: Option<String>,
}

impl RecipeConfig {
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            requires: requires.into_iter().map(Into::into).collect(),
            score: 0,
            difficulty: default_difficulty(),
            icon: None,
        }
    }
}

#[derive(Deserialize)]
struct IngredientFile {
    ingredients: Vec<IngredientConfig>,
}

#[derive(Deserialize)]
struct RecipeFile {
    recipes: Vec<RecipeConfig>,
}

/// Ingredient and recipe catalogs for one deck.
///
/// ```
/// use potluck::cards::{DeckDefinition, IngredientConfig, RecipeConfig};
///
/// let deck = DeckDefinition::new(
///     vec![IngredientConfig::new("flour", "Flour"), IngredientConfig::new("egg", "Egg")],
///     vec![RecipeConfig::new("pancake", "Pancake", ["flour", "flour", "egg"])],
/// );
///
/// assert!(deck.validate().is_ok());
/// assert_eq!(deck.deck_size(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub ingredients: Vec<IngredientConfig>,
    pub recipes: Vec<RecipeConfig>,
}

impl DeckDefinition {
    #[must_use]
    pub fn new(ingredients: Vec<IngredientConfig>, recipes: Vec<RecipeConfig>) -> Self {
        Self {
            ingredients,
            recipes,
        }
    }

    /// Parse the two catalog documents.
    pub fn from_json(ingredients: &str, recipes: &str) -> Result<Self, DeckError> {
        let ingredients: IngredientFile =
            serde_json::from_str(ingredients).map_err(|source| DeckError::Parse {
                path: PathBuf::from(INGREDIENTS_FILE),
                source,
            })?;
        let recipes: RecipeFile =
            serde_json::from_str(recipes).map_err(|source| DeckError::Parse {
                path: PathBuf::from(RECIPES_FILE),
                source,
            })?;

        Ok(Self::new(ingredients.ingredients, recipes.recipes))
    }

    /// Load `<root>/<theme>/ingredients.json` and `recipes.json`.
    pub fn load_theme(root: impl AsRef<Path>, theme: &str) -> Result<Self, DeckError> {
        let dir = root.as_ref().join(theme);

        let ingredients_path = dir.join(INGREDIENTS_FILE);
        let ingredients: IngredientFile = read_json(&ingredients_path)?;

        let recipes_path = dir.join(RECIPES_FILE);
        let recipes: RecipeFile = read_json(&recipes_path)?;

        tracing::debug!(
            theme,
            ingredients = ingredients.ingredients.len(),
            recipes = recipes.recipes.len(),
            "loaded deck theme"
        );

        Ok(Self::new(ingredients.ingredients, recipes.recipes))
    }

    /// The `default` theme compiled into the crate.
    pub fn embedded_default() -> Result<Self, DeckError> {
        Self::from_json(DEFAULT_INGREDIENTS, DEFAULT_RECIPES)
    }

    /// Check the definition and build an ingredient lookup.
    ///
    /// Fails on duplicate IDs, empty recipes, no recipes at all, or a recipe
    /// naming an ingredient the catalog does not have.
    pub fn validate(&self) -> Result<Catalog<'_>, DeckError> {
        if self.recipes.is_empty() {
            return Err(DeckError::EmptyCatalog);
        }

        let catalog = Catalog::build(&self.ingredients)?;

        let mut seen = rustc_hash::FxHashSet::default();
        for recipe in &self.recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(DeckError::DuplicateRecipe(recipe.id.clone()));
            }
            if recipe.requires.is_empty() {
                return Err(DeckError::EmptyRecipe(recipe.id.clone()));
            }
            for ingredient in &recipe.requires {
                if !catalog.contains(ingredient) {
                    return Err(DeckError::UnknownIngredient {
                        recipe: recipe.id.clone(),
                        ingredient: ingredient.clone(),
                    });
                }
            }
        }

        Ok(catalog)
    }

    /// Cards a deck built from this definition contains: one per recipe
    /// plus one per requirement slot.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.recipes.len() + self.recipes.iter().map(|r| r.requires.len()).sum::<usize>()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DeckError> {
    let data = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
