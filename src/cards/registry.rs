//! Ingredient catalog lookup.
//!
//! `Catalog` indexes a validated ingredient list by ID so the deck manager
//! can resolve each recipe requirement slot in O(1).

use rustc_hash::FxHashMap;

use super::definition::IngredientConfig;
use crate::core::error::DeckError;

/// Borrowed ingredient index over a deck definition.
#[derive(Clone, Debug, Default)]
pub struct Catalog<'a> {
    ingredients: FxHashMap<&'a str, &'a IngredientConfig>,
}

impl<'a> Catalog<'a> {
    /// Index `ingredients` by ID, rejecting duplicates.
    pub fn build(ingredients: &'a [IngredientConfig]) -> Result<Self, DeckError> {
        let mut index = FxHashMap::default();
        for ingredient in ingredients {
            if index.insert(ingredient.id.as_str(), ingredient).is_some() {
                return Err(DeckError::DuplicateIngredient(ingredient.id.clone()));
            }
        }
        Ok(Self { ingredients: index })
    }

    /// Look up an ingredient entry.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a IngredientConfig> {
        self.ingredients.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ingredients.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
