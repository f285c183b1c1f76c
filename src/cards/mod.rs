//! Card system: card instances, deck definitions, and the ingredient catalog.
//!
//! ## Key Types
//!
//! - `Card`: A card instance (ingredient or recipe) with a unique `CardId`
//! - `CardKind`: Ingredient or Recipe
//! - `DeckDefinition`: Ingredient and recipe catalogs a deck is built from
//! - `Catalog`: Validated ingredient lookup

pub mod card;
pub mod definition;
pub mod registry;

pub use card::{Card, CardBody, CardKind, IngredientInfo, Rarity, RecipeInfo, Requirements};
pub use definition::{DeckDefinition, IngredientConfig, RecipeConfig};
pub use registry::Catalog;
