//! Card instances: ingredients and recipes.
//!
//! A `Card` is created once when the deck is built and moves between a
//! player's hand and the table by value. It leaves the game only when a
//! dish consumes it.
//!
//! ## Example
//!
//! ```
//! use potluck::cards::{Card, CardKind};
//! use potluck::core::{CardId, IngredientKind};
//!
//! let egg = Card::ingredient(CardId(0), "Egg", IngredientKind::new("egg"));
//! let omelette = Card::recipe(CardId(1), "Omelette", ["egg", "egg"]);
//!
//! assert_eq!(egg.kind(), CardKind::Ingredient);
//! assert_eq!(omelette.requirements().map(|r| r.len()), Some(2));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::{CardId, IngredientKind};

/// A recipe's required ingredient kinds.
///
/// A multiset: the same kind may appear more than once, meaning that many
/// cards of the kind are needed.
pub type Requirements = SmallVec<[IngredientKind; 4]>;

/// The two card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Ingredient,
    Recipe,
}

/// How common an ingredient is in the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Ingredient-specific card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// Which catalog entry this card represents.
    pub kind: IngredientKind,
    pub rarity: Rarity,
    pub category: Option<String>,
    pub effects: Vec<String>,
}

/// Recipe-specific card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInfo {
    /// Ingredient kinds consumed when the dish is made.
    pub requires: Requirements,
    pub score: u32,
    pub difficulty: u32,
}

/// Kind-specific payload of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBody {
    Ingredient(IngredientInfo),
    Recipe(RecipeInfo),
}

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance ID.
    pub id: CardId,

    /// Catalog entry this card was built from (ingredient or recipe ID).
    pub catalog_id: String,

    /// Display name.
    pub name: String,

    /// Icon reference for presentation, if the catalog provides one.
    pub icon: Option<String>,

    pub body: CardBody,
}

impl Card {
    /// Create a plain ingredient card.
    #[must_use]
    pub fn ingredient(id: CardId, name: impl Into<String>, kind: IngredientKind) -> Self {
        Self {
            id,
            catalog_id: kind.as_str().to_string(),
            name: name.into(),
            icon: None,
            body: CardBody::Ingredient(IngredientInfo {
                kind,
                rarity: Rarity::default(),
                category: None,
                effects: Vec::new(),
            }),
        }
    }

    /// Create a plain recipe card from its requirement list.
    #[must_use]
    pub fn recipe<I, K>(id: CardId, name: impl Into<String>, requires: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<IngredientKind>,
    {
        let name = name.into();
        Self {
            id,
            catalog_id: name.to_lowercase().replace(' ', "_"),
            name,
            icon: None,
            body: CardBody::Recipe(RecipeInfo {
                requires: requires.into_iter().map(Into::into).collect(),
                score: 0,
                difficulty: 1,
            }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self.body {
            CardBody::Ingredient(_) => CardKind::Ingredient,
            CardBody::Recipe(_) => CardKind::Recipe,
        }
    }

    #[must_use]
    pub fn is_recipe(&self) -> bool {
        self.kind() == CardKind::Recipe
    }

    /// The ingredient kind, if this is an ingredient card.
    #[must_use]
    pub fn ingredient_kind(&self) -> Option<&IngredientKind> {
        match &self.body {
            CardBody::Ingredient(info) => Some(&info.kind),
            CardBody::Recipe(_) => None,
        }
    }

    /// The requirement multiset, if this is a recipe card.
    #[must_use]
    pub fn requirements(&self) -> Option<&Requirements> {
        match &self.body {
            CardBody::Recipe(info) => Some(&info.requires),
            CardBody::Ingredient(_) => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}
