//! Deck lifecycle and dish matching.
//!
//! The `DeckManager` owns the undealt deck and the table. It:
//! - Builds a deck from a `DeckDefinition` and shuffles it
//! - Deals hands round-robin
//! - Moves played cards from a hand to the table
//! - Resolves dishes against the table
//!
//! ## Matching
//!
//! `try_make_dish` resolves at most one dish per call. Callers loop until it
//! returns `None`, since completing one dish can unblock another.
//!
//! Recipes are tried most-recently-played first. For each, ingredients are
//! scanned once, newest first, and taken greedily while their kind is still
//! needed. The first recipe whose requirement multiset is fully covered
//! wins; there is no backtracking to find a different assignment.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, CardBody, DeckDefinition, IngredientInfo, RecipeInfo, Requirements};
use crate::core::entity::{CardId, CardIdAllocator, IngredientKind};
use crate::core::error::{ActionError, DeckError};
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::events::{EventSink, GameEvent};
use crate::zones::{Table, TableEntry};

/// A completed dish: the recipe and the ingredients it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub recipe: TableEntry,
    pub ingredients: Vec<TableEntry>,
}

/// Which requirement slots of a recipe the table could fill right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeProgress {
    /// One entry per requirement slot, in recipe order.
    pub slots: Vec<(IngredientKind, bool)>,
}

impl RecipeProgress {
    /// Every slot can be filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, filled)| *filled)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|(_, filled)| *filled).count()
    }
}

/// Deck and table manager.
///
/// ## Example
///
/// ```
/// use potluck::cards::{DeckDefinition, IngredientConfig, RecipeConfig};
/// use potluck::core::{GameRng, Player, PlayerId};
/// use potluck::deck::DeckManager;
///
/// let definition = DeckDefinition::new(
///     vec![IngredientConfig::new("egg", "Egg")],
///     vec![RecipeConfig::new("omelette", "Omelette", ["egg", "egg"])],
/// );
///
/// let mut deck = DeckManager::with_rng(GameRng::new(42));
/// assert_eq!(deck.load_deck(&definition).unwrap(), 3);
///
/// let mut players = vec![
///     Player::new(PlayerId::new(0), "P0", false),
///     Player::new(PlayerId::new(1), "B1", true),
/// ];
/// deck.deal_hands(&mut players);
///
/// assert_eq!(players[0].hand.len(), 2);
/// assert_eq!(players[1].hand.len(), 1);
/// assert!(deck.deck().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct DeckManager {
    deck: Vec<Card>,
    table: Table,
    rng: GameRng,
    ids: CardIdAllocator,
}

impl Default for DeckManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckManager {
    /// Create a manager whose shuffles are seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a manager with an explicit random source.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            deck: Vec::new(),
            table: Table::new(),
            rng,
            ids: CardIdAllocator::default(),
        }
    }

    /// Seed of the shuffle RNG, for replaying a match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Build a fresh deck from `definition` and shuffle it.
    ///
    /// Creates one recipe card per recipe and one ingredient card per
    /// requirement slot. The definition is validated before any card is
    /// created; on error the manager is unchanged. On success the previous
    /// deck and table are discarded.
    ///
    /// Returns the deck size.
    pub fn load_deck(&mut self, definition: &DeckDefinition) -> Result<usize, DeckError> {
        let catalog = definition.validate()?;

        let mut deck = Vec::with_capacity(definition.deck_size());
        for recipe in &definition.recipes {
            for required in &recipe.requires {
                let Some(entry) = catalog.get(required) else {
                    return Err(DeckError::UnknownIngredient {
                        recipe: recipe.id.clone(),
                        ingredient: required.clone(),
                    });
                };
                deck.push(Card {
                    id: self.ids.alloc(),
                    catalog_id: entry.id.clone(),
                    name: entry.name.clone(),
                    icon: entry.icon.clone(),
                    body: CardBody::Ingredient(IngredientInfo {
                        kind: IngredientKind::new(entry.id.as_str()),
                        rarity: entry.rarity,
                        category: entry.category.clone(),
                        effects: entry.effects.clone(),
                    }),
                });
            }

            deck.push(Card {
                id: self.ids.alloc(),
                catalog_id: recipe.id.clone(),
                name: recipe.name.clone(),
                icon: recipe.icon.clone(),
                body: CardBody::Recipe(RecipeInfo {
                    requires: recipe
                        .requires
                        .iter()
                        .map(|id| IngredientKind::new(id.as_str()))
                        .collect(),
                    score: recipe.score,
                    difficulty: recipe.difficulty,
                }),
            });
        }

        self.rng.shuffle(&mut deck);
        self.deck = deck;
        self.table = Table::new();

        tracing::debug!(cards = self.deck.len(), seed = self.rng.seed(), "deck loaded");
        Ok(self.deck.len())
    }

    /// Undealt cards, in shuffled order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Deal the whole deck one card at a time in player order.
    ///
    /// When the deck doesn't divide evenly the earliest players get the
    /// extra cards. Does nothing if `players` is empty.
    pub fn deal_hands(&mut self, players: &mut [Player]) {
        if players.is_empty() {
            return;
        }

        let count = players.len();
        for (i, card) in std::mem::take(&mut self.deck).into_iter().enumerate() {
            players[i % count].hand.add(card);
        }

        for player in players.iter() {
            tracing::debug!(player = %player.id, cards = player.hand.len(), "dealt hand");
        }
    }

    /// The table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Move `card` from `player`'s hand to the table.
    ///
    /// Fails without changing anything if the card isn't in that hand.
    pub fn play_card(
        &mut self,
        player: &mut Player,
        card: CardId,
        events: &mut dyn EventSink,
    ) -> Result<(), ActionError> {
        let played = player
            .hand
            .remove(card)
            .ok_or(ActionError::InvalidCardId {
                player: player.id,
                card,
            })?;

        tracing::debug!(player = %player.id, card = %played, "card played");
        let event = GameEvent::CardPlayed {
            player: player.id,
            card: played.clone(),
        };

        if let Some(rejected) = self.table.add_card(played, player.id) {
            // IDs are unique, so this only happens if a caller inserted the
            // same card into a hand twice. Give it back rather than lose it.
            player.hand.add(rejected);
            return Err(ActionError::InvalidCardId {
                player: player.id,
                card,
            });
        }

        events.emit(event);
        Ok(())
    }

    /// Resolve at most one dish.
    ///
    /// Either removes exactly one recipe card and exactly its required
    /// ingredient cards from the table, or changes nothing.
    pub fn try_make_dish(&mut self, events: &mut dyn EventSink) -> Option<Dish> {
        let (recipe_id, used) = self.find_dish()?;

        let recipe = self.table.remove_card(recipe_id)?;
        let ingredients: Vec<TableEntry> = used
            .iter()
            .filter_map(|&id| self.table.remove_card(id))
            .collect();

        tracing::info!(
            recipe = %recipe.card.name,
            cook = %recipe.player,
            ingredients = ingredients.len(),
            "dish made"
        );
        events.emit(GameEvent::DishMade {
            recipe: recipe.card.clone(),
            cook: recipe.player,
            ingredients: used.to_vec(),
        });

        Some(Dish {
            recipe,
            ingredients,
        })
    }

    /// Pick the recipe to complete and the ingredient cards it consumes.
    fn find_dish(&self) -> Option<(CardId, SmallVec<[CardId; 4]>)> {
        let ingredients: Vec<(CardId, &IngredientKind)> = self
            .table
            .cards_in_reverse_play_order()
            .filter_map(|c| c.ingredient_kind().map(|k| (c.id, k)))
            .collect();

        self.table
            .cards_in_reverse_play_order()
            .filter_map(|c| c.requirements().map(|r| (c.id, r)))
            .find_map(|(recipe_id, requires)| {
                claim_ingredients(requires, &ingredients).map(|used| (recipe_id, used))
            })
    }

    /// Which of `requires` the table could currently supply.
    ///
    /// Counts multiplicity: a recipe needing two eggs with one egg on the
    /// table has one filled egg slot and one empty one.
    #[must_use]
    pub fn recipe_progress(&self, requires: &Requirements) -> RecipeProgress {
        let mut available: FxHashMap<&IngredientKind, usize> = FxHashMap::default();
        for card in self.table.cards_in_play_order() {
            if let Some(kind) = card.ingredient_kind() {
                *available.entry(kind).or_default() += 1;
            }
        }

        let slots = requires
            .iter()
            .map(|kind| {
                let filled = match available.get_mut(kind) {
                    Some(n) if *n > 0 => {
                        *n -= 1;
                        true
                    }
                    _ => false,
                };
                (kind.clone(), filled)
            })
            .collect();

        RecipeProgress { slots }
    }
}

/// Greedily claim ingredients for one recipe.
///
/// `ingredients` is scanned once in the given order. Returns the claimed
/// card IDs if every slot is filled.
fn claim_ingredients(
    requires: &Requirements,
    ingredients: &[(CardId, &IngredientKind)],
) -> Option<SmallVec<[CardId; 4]>> {
    let mut need: FxHashMap<&IngredientKind, usize> = FxHashMap::default();
    for kind in requires {
        *need.entry(kind).or_default() += 1;
    }

    let mut remaining = requires.len();
    let mut used = SmallVec::new();
    for &(id, kind) in ingredients {
        if remaining == 0 {
            break;
        }
        if let Some(n) = need.get_mut(kind) {
            if *n > 0 {
                *n -= 1;
                remaining -= 1;
                used.push(id);
            }
        }
    }

    (remaining == 0).then_some(used)
}
