//! Headless simulator: runs all-bot matches and prints the finishing order.

use std::path::PathBuf;

use clap::Parser;
use potluck::{BotRoster, GameRng, Match, MatchBuilder, MatchConfig, RandomBot};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "potluck-sim")]
#[command(about = "Run all-bot potluck matches")]
struct Args {
    /// Number of matches to run
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Bot seats per match
    #[arg(short, long, default_value = "4")]
    bots: usize,

    /// Seed of the first match; match N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Deck theme
    #[arg(long, default_value = potluck::core::DEFAULT_THEME)]
    theme: String,

    /// Directory holding deck themes (defaults to the embedded deck)
    #[arg(long)]
    decks: Option<PathBuf>,

    /// Give up on a match after this many bot actions
    #[arg(long, default_value = "100000")]
    max_actions: usize,

    /// Print one JSON object per match
    #[arg(long)]
    json: bool,

    /// Enable info-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct MatchSummary {
    game: u32,
    seed: u64,
    actions: usize,
    dishes: u32,
    ranking: Vec<String>,
    completed: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(games = args.games, bots = args.bots, theme = %args.theme, "starting simulator");

    let mut completed = 0;
    for game_num in 1..=args.games {
        let mut config = MatchConfig::default()
            .with_humans(0)
            .with_bots(args.bots)
            .with_theme(args.theme.clone());
        if let Some(seed) = args.seed {
            config = config.with_seed(seed.wrapping_add(u64::from(game_num) - 1));
        }
        let mut builder = MatchBuilder::from_config(config);
        if let Some(root) = &args.decks {
            builder = builder.deck_root(root);
        }

        let mut game = builder.build()?;
        let summary = run_match(game_num, &mut game, args.max_actions)?;
        if summary.completed {
            completed += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "game {:>4}  seed {:>20}  actions {:>4}  dishes {:>3}  ranking {}",
                summary.game,
                summary.seed,
                summary.actions,
                summary.dishes,
                summary.ranking.join(" > ")
            );
        }
    }

    info!(completed, games = args.games, "simulation finished");
    Ok(())
}

fn run_match(
    game_num: u32,
    game: &mut Match,
    max_actions: usize,
) -> Result<MatchSummary, potluck::ActionError> {
    let rng = GameRng::new(game.deck().seed());
    let mut roster = BotRoster::new();
    for player in game.players() {
        let stream = rng.for_context(&format!("bot-{}", player.id.0));
        roster.register(player.id, RandomBot::new(stream));
    }

    let mut actions = 0;
    while !game.is_round_over() && !game.is_stalled() && actions < max_actions {
        if !roster.tick(&mut *game)? {
            break;
        }
        actions += 1;
    }

    let completed = game.is_round_over();
    if !completed {
        warn!(game = game_num, actions, stalled = game.is_stalled(), "match did not finish");
    }

    let ranking = game
        .finished_order()
        .iter()
        .filter_map(|id| game.player(*id).map(|p| p.name.clone()))
        .collect();
    let dishes = game.history().iter().map(|r| r.dishes_made).sum();

    Ok(MatchSummary {
        game: game_num,
        seed: game.deck().seed(),
        actions,
        dishes,
        ranking,
        completed,
    })
}
