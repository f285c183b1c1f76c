//! The match orchestrator.
//!
//! `Match` owns every piece of state for one round (players and hands, the
//! deck manager with its table, the turn sequencer) and is the single place
//! actions are submitted. Each action runs to completion, including any
//! chain of dishes it sets off, before control returns.
//!
//! `Match` is not internally synchronized. A host driving it from several
//! threads must serialize calls (one lock or one action queue per match).

use im::Vector;

use crate::cards::Card;
use crate::core::action::{Action, ActionRecord};
use crate::core::entity::CardId;
use crate::core::error::ActionError;
use crate::core::player::{Hand, Player, PlayerId};
use crate::deck::{DeckManager, RecipeProgress};
use crate::events::{EventLog, EventSink, GameEvent};
use crate::rules::{MatchActions, PlayOutcome, PlayerTurn, PlayerView, TurnSequencer};
use crate::zones::Table;

/// One round of the game.
///
/// Build one with [`MatchBuilder`](super::MatchBuilder).
pub struct Match {
    players: Vec<Player>,
    deck: DeckManager,
    turns: TurnSequencer,
    sinks: Vec<Box<dyn EventSink + Send>>,
    last_events: Vec<GameEvent>,
    history: Vector<ActionRecord>,
    round_over_announced: bool,
}

impl Match {
    /// Seat `players` (already dealt) in the given order.
    pub(crate) fn new(players: Vec<Player>, deck: DeckManager) -> Self {
        let mut turns = TurnSequencer::new();
        for player in &players {
            turns.add_player(player.id, player.is_bot);
        }

        tracing::info!(
            players = players.len(),
            seed = deck.seed(),
            "match ready"
        );

        Self {
            players,
            deck,
            turns,
            sinks: Vec::new(),
            last_events: Vec::new(),
            history: Vector::new(),
            round_over_announced: false,
        }
    }

    /// Register an observer for every event this match emits.
    pub fn subscribe(&mut self, sink: impl EventSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // === Queries ===

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// A player's hand, in insertion order.
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> Option<&Hand> {
        self.player(id).map(|p| &p.hand)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        self.deck.table()
    }

    #[must_use]
    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    #[must_use]
    pub fn turns(&self) -> &TurnSequencer {
        &self.turns
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerTurn> {
        self.turns.current()
    }

    /// Finishers, first finisher first.
    ///
    /// A dish can finish several players at once; they are ranked in seat
    /// order regardless of who cooked it.
    #[must_use]
    pub fn finished_order(&self) -> &[PlayerId] {
        self.turns.finished_order()
    }

    /// Every player has finished.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.turns.is_round_over()
    }

    /// The round isn't over but every unfinished player has passed, so no
    /// one can be rotated to.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        !self.is_round_over() && self.turns.players().iter().all(|p| !p.is_eligible())
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events produced by the most recent accepted action.
    #[must_use]
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// How close a recipe card (in any hand or on the table) is to being
    /// completed by what is on the table now.
    #[must_use]
    pub fn recipe_progress(&self, recipe: CardId) -> Option<RecipeProgress> {
        let card = self.find_card(recipe)?;
        card.requirements().map(|r| self.deck.recipe_progress(r))
    }

    fn find_card(&self, id: CardId) -> Option<&Card> {
        self.players
            .iter()
            .find_map(|p| p.hand.get(id))
            .or_else(|| self.table().get(id).map(|e| &e.card))
    }

    // === Actions ===

    /// Play a card for `player`.
    ///
    /// On success: pass flags are cleared, dishes are resolved until none
    /// match, players are finished when their hand is empty and none of
    /// their cards are left on the table, and the turn moves on unless the
    /// actor made a dish and still holds cards.
    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<PlayOutcome, ActionError> {
        let idx = self.check_turn(player).map_err(|err| rejected("play", player, err))?;

        let mut events = EventLog::new();
        self.deck
            .play_card(&mut self.players[idx], card, &mut events)
            .map_err(|err| rejected("play", player, err))?;

        self.turns.mark_all_unpassed();

        let mut dishes = Vec::new();
        while let Some(dish) = self.deck.try_make_dish(&mut events) {
            dishes.push(dish);
            self.settle_players(&mut events);
        }
        self.note_empty_hands(&mut events);

        let extra_turn = !dishes.is_empty() && !self.players[idx].hand.is_empty();
        if !extra_turn {
            self.turns.next();
        }
        self.check_round_over(&mut events);

        let mut record = ActionRecord::new(self.next_sequence(), Action::PlayCard { player, card });
        record.dishes_made = dishes.len() as u32;
        record.extra_turn = extra_turn;
        self.history.push_back(record);
        self.publish(events);

        Ok(PlayOutcome { dishes, extra_turn })
    }

    /// Pass for `player` and rotate to the next eligible player.
    pub fn pass(&mut self, player: PlayerId) -> Result<(), ActionError> {
        self.check_turn(player).map_err(|err| rejected("pass", player, err))?;
        self.turns
            .pass(player)
            .map_err(|err| rejected("pass", player, err))?;

        tracing::debug!(%player, "passed");
        if !self.turns.next() {
            tracing::debug!("no eligible player to rotate to");
        }

        let mut events = EventLog::new();
        events.emit(GameEvent::Passed { player });

        self.history
            .push_back(ActionRecord::new(self.next_sequence(), Action::Pass { player }));
        self.publish(events);
        Ok(())
    }

    /// Submit either action.
    pub fn submit(&mut self, action: Action) -> Result<Option<PlayOutcome>, ActionError> {
        match action {
            Action::PlayCard { player, card } => self.play_card(player, card).map(Some),
            Action::Pass { player } => self.pass(player).map(|()| None),
        }
    }

    // === Internals ===

    /// The actor must be seated, be the current player, and not be finished.
    fn check_turn(&self, player: PlayerId) -> Result<usize, ActionError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player)
            .ok_or(ActionError::UnknownPlayer(player))?;
        let current = self.turns.current().ok_or(ActionError::NoCurrentPlayer)?;

        if current.id != player {
            return Err(ActionError::NotYourTurn {
                player,
                current: current.id,
            });
        }
        if current.finished {
            return Err(ActionError::PlayerFinished(player));
        }
        Ok(idx)
    }

    /// Finish every player whose hand is empty and who has nothing left on
    /// the table, in seat order.
    fn settle_players(&mut self, events: &mut EventLog) {
        for player in &self.players {
            if !player.hand.is_empty() {
                continue;
            }
            if self.turns.mark_hand_empty(player.id) {
                events.emit(GameEvent::HandEmptied { player: player.id });
            }
            if !self.deck.table().has_player_cards(player.id) && self.turns.mark_finished(player.id) {
                let rank = self.turns.finished_order().len();
                tracing::info!(player = %player.id, rank, "player finished");
                events.emit(GameEvent::PlayerFinished {
                    player: player.id,
                    rank,
                });
            }
        }
    }

    fn note_empty_hands(&mut self, events: &mut EventLog) {
        for player in &self.players {
            if player.hand.is_empty() && self.turns.mark_hand_empty(player.id) {
                events.emit(GameEvent::HandEmptied { player: player.id });
            }
        }
    }

    fn check_round_over(&mut self, events: &mut EventLog) {
        if self.round_over_announced || !self.turns.is_round_over() {
            return;
        }
        self.round_over_announced = true;

        let ranking = self.turns.finished_order().to_vec();
        tracing::info!(?ranking, "round over");
        events.emit(GameEvent::RoundOver { ranking });
    }

    fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    fn publish(&mut self, mut events: EventLog) {
        let events = events.drain();
        for sink in &mut self.sinks {
            for event in &events {
                sink.emit(event.clone());
            }
        }
        self.last_events = events;
    }

    fn view(&self, id: PlayerId) -> Option<PlayerView> {
        let turn = self.turns.get_player(id)?;
        let player = self.player(id)?;
        Some(PlayerView {
            id,
            is_bot: turn.is_bot,
            passed: turn.passed,
            finished: turn.finished,
            hand: player.hand.cards().cloned().collect(),
        })
    }
}

fn rejected(action: &str, player: PlayerId, err: ActionError) -> ActionError {
    tracing::warn!(action, %player, %err, "action rejected");
    err
}

impl MatchActions for Match {
    fn current_player(&self) -> Option<PlayerId> {
        self.turns.current().map(|p| p.id)
    }

    fn player_view(&self, player: PlayerId) -> Option<PlayerView> {
        self.view(player)
    }

    fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<PlayOutcome, ActionError> {
        Match::play_card(self, player, card)
    }

    fn pass(&mut self, player: PlayerId) -> Result<(), ActionError> {
        Match::pass(self, player)
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("players", &self.players)
            .field("turns", &self.turns)
            .field("table", self.deck.table())
            .field("sinks", &self.sinks.len())
            .field("history", &self.history.len())
            .finish()
    }
}
