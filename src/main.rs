//! # Warren Main Entry Point
//!
//! Parses the command line, sets up logging and macroquad rendering, and
//! runs the main game loop.

use clap::Parser;
use log::{debug, info};
use macroquad::prelude::*;
use warren::{
    config, generation::utils, Display, GameEvent, GameState, GenerationConfig, Generator,
    InputHandler, ScatterGenerator, TextureCatalog, WarrenResult,
};

/// Command line arguments for Warren.
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(about = "A single-screen tiled dungeon stroll")]
#[command(version)]
struct Args {
    /// Random seed for map generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of tiles per map row
    #[arg(long, default_value_t = config::DEFAULT_TILES_PER_ROW)]
    columns: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Warren")]
async fn main() -> WarrenResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    info!("Starting Warren v{}", warren::VERSION);

    set_pc_assets_folder("assets");

    run_game(&args).await
}

/// Builds the display, generates the map, and runs the frame loop.
async fn run_game(args: &Args) -> WarrenResult<()> {
    let seed = args.seed.unwrap_or(12345);
    info!("Generating map with seed: {}", seed);

    let catalog = TextureCatalog::standard();
    let mut display = Display::new(&catalog, args.columns).await?;
    info!(
        "Display ready: {} columns x {} rows, tile size {:.1}px",
        display.columns, display.rows, display.tile_size
    );

    let config = GenerationConfig::new(seed).with_dimensions(display.columns, display.rows);
    let generator = ScatterGenerator::new(catalog);
    let mut rng = utils::create_rng(&config);
    let map = generator.generate(&config, &mut rng)?;

    let spawn = map.find_spawn()?;
    let mut state = GameState::new(map, display.tile_size, spawn)?;
    info!("Avatar spawned at ({}, {})", spawn.x, spawn.y);

    let input_handler = InputHandler::new();

    display.add_message("Welcome to Warren!".to_string());
    display.add_message("Hold arrows/WASD or the pad to move, ESC to quit".to_string());

    loop {
        if input_handler.quit_requested() {
            info!("Player quit the game");
            break;
        }

        // One held direction per frame; the state derives press/release
        // edges from consecutive polls.
        let held = input_handler
            .held_direction()
            .or_else(|| display.held_direction());
        match held {
            Some(direction) => {
                for event in state.press(direction) {
                    log_event(&event);
                }
            }
            None => state.release(),
        }

        for event in state.tick(get_frame_time()) {
            log_event(&event);
        }

        display.render(&state);

        next_frame().await;
    }

    info!("Game loop ended");
    Ok(())
}

/// Logs a move-loop event at debug level.
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::StepStarted {
            from,
            to,
            direction,
        } => debug!(
            "step started ({}, {}) -> ({}, {}) going {:?}",
            from.x, from.y, to.x, to.y, direction
        ),
        GameEvent::StepCompleted { position } => {
            debug!("step completed at ({}, {})", position.x, position.y)
        }
        GameEvent::MoveBlocked {
            position,
            direction,
        } => debug!(
            "move blocked at ({}, {}) going {:?}",
            position.x, position.y, direction
        ),
    }
}
