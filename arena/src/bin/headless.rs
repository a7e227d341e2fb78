use anyhow::Result;
use arena::spawn::{replenish_food, spawn_food, spawn_players};
use arena::tick::apply_contacts;
use arena::{run_tick, ArenaConfig, TickContext};
use clap::Parser;
use common::shapes::Point;
use quadtree::Particle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs the arena without a renderer")]
struct Args {
    /// JSON file overriding the default arena settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of players to spawn
    #[arg(long, default_value_t = 100)]
    players: usize,
    /// Seed for spawning and the random walk
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Largest step a player takes per frame
    #[arg(long, default_value_t = 1.75, value_parser = parse_speed)]
    max_speed: f64,
}

fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value.parse().map_err(|err| format!("{}", err))?;
    if !speed.is_finite() || speed < 0.0 {
        return Err(format!("speed must be finite and non-negative (got {})", value));
    }
    Ok(speed)
}

// Stand-in for the trained controllers: every player wanders.
fn random_walk(players: &mut [Particle], config: &ArenaConfig, max_speed: f64, rng: &mut StdRng) {
    let world = config.world();
    for player in players.iter_mut() {
        let x = player.position.x + rng.gen_range(-max_speed..=max_speed);
        let y = player.position.y + rng.gen_range(-max_speed..=max_speed);
        player.set_position(Point::new(
            x.clamp(world.left(), world.right()),
            y.clamp(world.top(), world.bottom()),
        ));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ArenaConfig::from_json_file(path)?,
        None => ArenaConfig::default(),
    };
    info!(?config, "starting arena");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut players = spawn_players(&config, args.players, 0, &mut rng);
    let mut next_id = args.players as u32;
    let mut food = spawn_food(&config, config.num_food, next_id, &players, &mut rng);
    next_id += config.num_food as u32;

    let mut ctx = TickContext::new(0, &config);
    let mut eaten_food = 0;
    let mut eaten_players = 0;
    while !players.is_empty() && !ctx.is_last_frame() {
        let particles: Vec<Particle> = players.iter().chain(food.iter()).copied().collect();
        let report = run_tick(ctx, &particles)?;

        let before = (players.len(), food.len());
        apply_contacts(&mut players, &report.contacts);
        apply_contacts(&mut food, &report.contacts);
        eaten_players += before.0 - players.len();
        eaten_food += before.1 - food.len();

        replenish_food(&config, &mut food, &players, &mut next_id, &mut rng);
        random_walk(&mut players, &config, args.max_speed, &mut rng);

        if ctx.frame % 100 == 0 {
            info!(
                frame = ctx.frame,
                players = players.len(),
                indexed = report.indexed,
                eaten_food,
                eaten_players,
                "progress"
            );
        }
        ctx = ctx.next();
    }

    info!(
        frames = ctx.frame,
        survivors = players.len(),
        eaten_food,
        eaten_players,
        "arena finished"
    );
    Ok(())
}
