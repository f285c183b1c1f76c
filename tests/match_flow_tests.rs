//! Full-match behavior through the orchestrator.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use potluck::cards::{DeckDefinition, IngredientConfig, RecipeConfig};
use potluck::core::{Action, ActionError, CardId, GameRng, PlayerId};
use potluck::events::{EventLog, GameEvent};
use potluck::game::{Match, MatchBuilder};
use potluck::rules::MatchActions;
use potluck::{BotRoster, RandomBot};
use proptest::prelude::*;

fn omelette_deck() -> DeckDefinition {
    DeckDefinition::new(
        vec![IngredientConfig::new("egg", "Egg")],
        vec![RecipeConfig::new("omelette", "Omelette", ["egg", "egg"])],
    )
}

fn solo(definition: DeckDefinition) -> Match {
    MatchBuilder::new()
        .seat("Cook", false)
        .deck(definition)
        .seed(3)
        .build()
        .unwrap()
}

fn current(game: &Match) -> PlayerId {
    game.current().map(|p| p.id).unwrap()
}

fn first_card(game: &Match, player: PlayerId) -> CardId {
    game.hand(player).and_then(|h| h.ids().next()).unwrap()
}

/// Every card is in exactly one place, and finishing matches hand and
/// table state.
fn assert_consistent(game: &Match) {
    let mut seen = HashSet::new();
    for player in game.players() {
        for id in player.hand.ids() {
            assert!(seen.insert(id), "{id} held twice");
        }
    }
    for card in game.table().cards_in_play_order() {
        assert!(seen.insert(card.id), "{} on table and elsewhere", card.id);
    }

    for player in game.players() {
        let gone = player.hand.is_empty() && !game.table().has_player_cards(player.id);
        let finished = game.turns().get_player(player.id).unwrap().finished;
        assert_eq!(gone, finished, "{} finished={finished} but gone={gone}", player.id);
    }
}

#[test]
fn test_wrong_turn_leaves_state_untouched() {
    let mut game = MatchBuilder::new().humans(1).bots(3).seed(10).build().unwrap();
    let intruder = PlayerId::new(2);
    let card = first_card(&game, intruder);
    let hand_before = game.hand(intruder).unwrap().len();

    let err = game.play_card(intruder, card).unwrap_err();

    assert_eq!(
        err,
        ActionError::NotYourTurn {
            player: intruder,
            current: PlayerId::new(0)
        }
    );
    assert_eq!(game.hand(intruder).unwrap().len(), hand_before);
    assert!(game.table().is_empty());
    assert!(game.history().is_empty());
    assert!(game.last_events().is_empty());

    assert_eq!(game.pass(intruder), Err(ActionError::NotYourTurn { player: intruder, current: PlayerId::new(0) }));
}

#[test]
fn test_pass_then_play_clears_passes() {
    let mut game = MatchBuilder::new().humans(0).bots(3).seed(4).build().unwrap();

    game.pass(PlayerId::new(0)).unwrap();
    game.pass(PlayerId::new(1)).unwrap();
    assert_eq!(current(&game), PlayerId::new(2));
    assert!(game.turns().get_player(PlayerId::new(0)).unwrap().passed);

    let card = first_card(&game, PlayerId::new(2));
    game.play_card(PlayerId::new(2), card).unwrap();

    assert!(game.turns().players().iter().all(|p| !p.passed));
    assert_eq!(
        game.history().iter().map(|r| r.action).collect::<Vec<_>>(),
        vec![
            Action::Pass { player: PlayerId::new(0) },
            Action::Pass { player: PlayerId::new(1) },
            Action::PlayCard { player: PlayerId::new(2), card },
        ]
    );
}

#[test]
fn test_all_passed_is_stalled() {
    let mut game = MatchBuilder::new().humans(0).bots(2).seed(4).build().unwrap();

    game.pass(PlayerId::new(0)).unwrap();
    game.pass(PlayerId::new(1)).unwrap();

    assert!(game.is_stalled());
    assert!(!game.is_round_over());
    // Rotation had nowhere to go.
    assert_eq!(current(&game), PlayerId::new(1));
}

#[test]
fn test_solo_round_event_sequence() {
    let mut game = solo(omelette_deck());
    let me = PlayerId::new(0);
    assert_eq!(game.hand(me).unwrap().len(), 3);

    let first = first_card(&game, me);
    let outcome = game.play_card(me, first).unwrap();
    assert!(!outcome.made_dish());

    let second = first_card(&game, me);
    let outcome = game.play_card(me, second).unwrap();
    assert!(!outcome.made_dish());

    let last = first_card(&game, me);
    let outcome = game.play_card(me, last).unwrap();
    assert_eq!(outcome.dishes.len(), 1);
    assert!(!outcome.extra_turn);

    match game.last_events() {
        [GameEvent::CardPlayed { card, .. }, GameEvent::DishMade { recipe, ingredients, .. }, GameEvent::HandEmptied { player }, GameEvent::PlayerFinished { player: finisher, rank: 1 }, GameEvent::RoundOver { ranking }] =>
        {
            assert_eq!(card.id, last);
            assert_eq!(recipe.catalog_id, "omelette");
            assert_eq!(ingredients.len(), 2);
            assert_eq!(*player, me);
            assert_eq!(*finisher, me);
            assert_eq!(ranking, &vec![me]);
        }
        other => panic!("unexpected events: {other:?}"),
    }

    assert!(game.is_round_over());
    assert!(game.table().is_empty());
    assert_eq!(game.finished_order(), &[me]);
    assert_eq!(game.pass(me), Err(ActionError::PlayerFinished(me)));
}

#[test]
fn test_extra_turn_keeps_actor() {
    // A lone player keeps the turn whether or not a play makes a dish.
    let definition = DeckDefinition::new(
        vec![IngredientConfig::new("egg", "Egg"), IngredientConfig::new("rice", "Rice")],
        vec![
            RecipeConfig::new("boiled", "Boiled Egg", ["egg"]),
            RecipeConfig::new("congee", "Congee", ["rice", "rice"]),
        ],
    );
    let mut game = solo(definition);
    let me = PlayerId::new(0);

    while !game.is_round_over() {
        let card = first_card(&game, me);
        let outcome = game.play_card(me, card).unwrap();
        assert_eq!(outcome.extra_turn, outcome.made_dish() && !game.hand(me).unwrap().is_empty());
        assert_eq!(current(&game), me);
    }
    assert_eq!(game.history().iter().map(|r| r.dishes_made).sum::<u32>(), 2);
}

#[test]
fn test_dish_finishes_other_players() {
    // Seat 0 gets cards 0 and 2 of the shuffled deck, seat 1 gets card 1.
    // Whatever the order, when the last card lands the dish clears the
    // table and both players finish in the same action.
    let mut game = MatchBuilder::new()
        .seat("A", false)
        .seat("B", false)
        .deck(omelette_deck())
        .seed(8)
        .build()
        .unwrap();

    let a = PlayerId::new(0);
    let b = PlayerId::new(1);
    game.play_card(a, first_card(&game, a)).unwrap();
    game.play_card(b, first_card(&game, b)).unwrap();
    assert!(game.finished_order().is_empty());

    let outcome = game.play_card(a, first_card(&game, a)).unwrap();
    assert!(outcome.made_dish());
    assert_eq!(game.finished_order(), &[a, b]);
    assert!(game.is_round_over());
    assert_consistent(&game);
}

/// One recipe needing one egg: two cards, so only seats 0 and 1 are dealt.
fn boiled_egg_table(seats: usize) -> Match {
    let definition = DeckDefinition::new(
        vec![IngredientConfig::new("egg", "Egg")],
        vec![RecipeConfig::new("boiled", "Boiled Egg", ["egg"])],
    );
    MatchBuilder::new()
        .humans(0)
        .bots(seats)
        .deck(definition)
        .seed(5)
        .build()
        .unwrap()
}

#[test]
fn test_same_dish_finishers_ranked_by_seat() {
    let mut game = boiled_egg_table(5);
    let seats: Vec<_> = (0..5).map(PlayerId::new).collect();

    game.play_card(seats[0], first_card(&game, seats[0])).unwrap();
    assert!(game.finished_order().is_empty());

    // Seat 1 completes the dish, yet seat 0 is ranked first.
    let outcome = game.play_card(seats[1], first_card(&game, seats[1])).unwrap();
    assert_eq!(outcome.dishes.len(), 1);
    assert_eq!(game.finished_order(), seats.as_slice());

    let ranks: Vec<_> = game
        .last_events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::PlayerFinished { player, rank } => Some((*player, *rank)),
            _ => None,
        })
        .collect();
    assert_eq!(ranks, seats.iter().copied().zip(1..).collect::<Vec<_>>());
    assert!(game.is_round_over());
    assert_consistent(&game);
}

#[test]
fn test_submit_drives_match() {
    let mut game = boiled_egg_table(5);
    let p = PlayerId::new;

    // Out of turn: rejected, nothing recorded.
    assert_eq!(
        game.submit(Action::Pass { player: p(1) }),
        Err(ActionError::NotYourTurn { player: p(1), current: p(0) })
    );
    let bogus = Action::PlayCard { player: p(0), card: CardId(99) };
    assert_eq!(
        game.submit(bogus),
        Err(ActionError::InvalidCardId { player: p(0), card: CardId(99) })
    );
    assert!(game.history().is_empty());

    assert_eq!(game.submit(Action::Pass { player: p(0) }), Ok(None));
    assert_eq!(current(&game), p(1));

    let mut submitted = vec![Action::Pass { player: p(0) }];
    for _ in 0..50 {
        if game.is_round_over() {
            break;
        }
        let actor = current(&game);
        let action = match game.hand(actor).and_then(|h| h.ids().next()) {
            Some(card) => Action::PlayCard { player: actor, card },
            None => Action::Pass { player: actor },
        };
        let before = game.history().len();
        match game.submit(action).unwrap() {
            Some(outcome) => assert!(matches!(action, Action::PlayCard { .. }) && outcome.dishes.len() <= 1),
            None => assert!(matches!(action, Action::Pass { .. })),
        }
        assert_eq!(game.history().len(), before + 1);
        submitted.push(action);
        assert_consistent(&game);
    }

    assert!(game.is_round_over());
    assert_eq!(game.finished_order(), &[p(0), p(1), p(2), p(3), p(4)]);
    assert_eq!(
        game.history().iter().map(|r| r.action).collect::<Vec<_>>(),
        submitted
    );

    let history = game.history().len();
    assert_eq!(
        game.submit(Action::Pass { player: p(0) }),
        Err(ActionError::PlayerFinished(p(0)))
    );
    assert_eq!(game.history().len(), history);
}

#[test]
fn test_empty_hand_player_stays_in_rotation() {
    // With two players and three cards, B empties their hand on the first
    // play but still has a card on the table.
    let mut game = MatchBuilder::new()
        .seat("A", false)
        .seat("B", false)
        .deck(omelette_deck())
        .seed(8)
        .build()
        .unwrap();
    let a = PlayerId::new(0);
    let b = PlayerId::new(1);

    game.play_card(a, first_card(&game, a)).unwrap();
    game.play_card(b, first_card(&game, b)).unwrap();

    let turn = game.turns().get_player(b).unwrap();
    assert!(turn.hand_empty);
    assert!(!turn.finished);
    assert!(turn.is_eligible());
    assert!(game
        .last_events()
        .contains(&GameEvent::HandEmptied { player: b }));

    assert_eq!(current(&game), a);
}

#[test]
fn test_subscribers_match_last_events() {
    let mut game = solo(omelette_deck());
    let log = Arc::new(Mutex::new(EventLog::new()));
    let sink = Arc::clone(&log);
    game.subscribe(move |event: &GameEvent| {
        use potluck::events::EventSink;
        sink.lock().unwrap().emit(event.clone());
    });

    let me = PlayerId::new(0);
    let card = first_card(&game, me);
    game.play_card(me, card).unwrap();

    assert_eq!(log.lock().unwrap().events(), game.last_events());
}

#[test]
fn test_recipe_progress_tracks_table() {
    let mut game = solo(omelette_deck());
    let me = PlayerId::new(0);
    let recipe = game
        .hand(me)
        .unwrap()
        .cards()
        .find(|c| c.is_recipe())
        .map(|c| c.id)
        .unwrap();

    assert_eq!(game.recipe_progress(recipe).unwrap().filled(), 0);

    let egg = game
        .hand(me)
        .unwrap()
        .cards()
        .find(|c| !c.is_recipe())
        .map(|c| c.id)
        .unwrap();
    game.play_card(me, egg).unwrap();

    let progress = game.recipe_progress(recipe).unwrap();
    assert_eq!(progress.filled(), 1);
    assert!(!progress.is_complete());
}

#[test]
fn test_player_view_through_trait() {
    let game = MatchBuilder::new().humans(1).bots(1).seed(2).build().unwrap();
    let actions: &dyn MatchActions = &game;

    let view = actions.player_view(PlayerId::new(1)).unwrap();
    assert!(view.is_bot);
    assert!(!view.passed);
    assert_eq!(view.hand.len(), game.hand(PlayerId::new(1)).unwrap().len());
    assert!(actions.player_view(PlayerId::new(5)).is_none());
    assert_eq!(actions.current_player(), Some(PlayerId::new(0)));
}

/// Drive a match with seeded random choices, checking consistency after
/// every action.
fn play_out(game: &mut Match, seed: u64) {
    let mut rng = GameRng::new(seed);

    for _ in 0..10_000 {
        if game.is_round_over() {
            break;
        }
        assert!(!game.is_stalled());

        let actor = current(game);
        let hand: Vec<CardId> = game.hand(actor).unwrap().ids().collect();
        match rng.choose(&hand) {
            Some(&card) => {
                let outcome = game.play_card(actor, card).unwrap();
                if outcome.extra_turn {
                    assert_eq!(current(game), actor);
                }
            }
            None => game.pass(actor).unwrap(),
        }
        assert_consistent(game);
    }

    assert!(game.is_round_over());
    assert!(game.table().is_empty());
    assert_eq!(game.finished_order().len(), game.players().len());

    let dishes: u32 = game.history().iter().map(|r| r.dishes_made).sum();
    assert!(dishes > 0);
}

#[test]
fn test_default_deck_plays_to_completion() {
    let mut game = MatchBuilder::new().seed(2024).build().unwrap();
    play_out(&mut game, 7);

    let rounds_over = game
        .last_events()
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundOver { .. }))
        .count();
    assert_eq!(rounds_over, 1);
}

#[test]
fn test_bot_roster_finishes_match() {
    let mut game = MatchBuilder::new().humans(0).bots(4).seed(99).build().unwrap();
    let mut roster = BotRoster::new();
    for player in game.players() {
        roster.register(player.id, RandomBot::seeded(u64::from(player.id.0) + 1));
    }

    let mut ticks = 0;
    while !game.is_round_over() && ticks < 10_000 {
        assert!(roster.tick(&mut game).unwrap());
        ticks += 1;
    }
    assert!(game.is_round_over());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_random_matches_always_finish(seats in 1usize..=8, deal_seed in any::<u64>(), play_seed in any::<u64>()) {
        let mut game = MatchBuilder::new()
            .humans(0)
            .bots(seats)
            .seed(deal_seed)
            .build()
            .unwrap();
        play_out(&mut game, play_seed);
    }
}
