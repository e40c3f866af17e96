mod input;
mod terminal_renderer;
mod tokio_scheduler;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::games::snake::{GameStatus, SnakeController, SnakeSettings};
use common::{log, logger};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::time::{sleep_until, Instant};

use input::{command_for_key, InputCommand, HELP_TEXT};
use terminal_renderer::{RawScreen, TerminalRenderer};
use tokio_scheduler::TokioScheduler;

type TerminalController = SnakeController<TokioScheduler, TerminalRenderer<std::io::Stdout>>;

#[derive(Parser)]
#[command(name = "snake_terminal", about = "Wrap-around snake with moving walls")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = "snake_config.yaml")]
    config: PathBuf,

    /// Seed for food and wall placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// The game owns the terminal while running, so log lines go here.
    #[arg(long, default_value = "snake_terminal.log")]
    log_file: PathBuf,

    /// Start moving right away instead of waiting for `p`.
    #[arg(long)]
    autoplay: bool,

    /// Write the default settings to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    if args.write_default_config {
        logger::init_logger(prefix);
    } else {
        logger::init_file_logger(prefix, &args.log_file)?;
    }

    let config_manager: ConfigManager<_, SnakeSettings, _> = ConfigManager::from_yaml_file(&args.config);

    if args.write_default_config {
        config_manager.set_config(&SnakeSettings::default())?;
        log!("Default settings written to {}", args.config.display());
        return Ok(());
    }

    let settings = config_manager.get_config().inspect_err(|e| {
        log!("Failed to load settings from {}: {}", args.config.display(), e);
    })?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let screen = RawScreen::enter()?;
    let mut controller = SnakeController::new(
        settings,
        TokioScheduler::new(),
        TerminalRenderer::stdout(settings.field_size(), HELP_TEXT),
        rng,
    )?;

    if args.autoplay {
        controller.play();
    }
    print_status(&mut controller);

    run_event_loop(&mut controller).await;
    drop(screen);

    log!("Final score: {}", controller.state().score());
    Ok(())
}

async fn run_event_loop(controller: &mut TerminalController) {
    let mut events = EventStream::new();
    let mut input_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let next_tick = controller.scheduler().next_tick();
        let next_wall_relocation = controller.scheduler().next_wall_relocation();

        tokio::select! {
            _ = sleep_until(next_tick.unwrap_or_else(Instant::now)), if next_tick.is_some() => {
                controller.scheduler_mut().tick_elapsed();
                controller.on_tick();
                print_status(controller);
            }
            _ = sleep_until(next_wall_relocation.unwrap_or_else(Instant::now)), if next_wall_relocation.is_some() => {
                controller.scheduler_mut().wall_elapsed();
                controller.on_wall_timer();
            }
            event = events.next(), if input_open => {
                match event {
                    Some(Ok(Event::Key(key))) => match command_for_key(&key) {
                        Some(command) if !apply_command(controller, command) => break,
                        _ => {}
                    },
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log!("Failed to read input: {}", e);
                        input_open = false;
                    }
                    None => input_open = false,
                }
            }
            _ = &mut ctrl_c => {
                log!("Interrupted");
                break;
            }
        }

        // Without input nothing can restart a stopped or finished game.
        if !input_open && controller.state().status() != GameStatus::Playing {
            break;
        }
    }
}

/// Returns `false` when the player asked to quit.
fn apply_command(controller: &mut TerminalController, command: InputCommand) -> bool {
    match command {
        InputCommand::Key(key_code) => {
            controller.handle_key_code(key_code);
        }
        InputCommand::TogglePlay => {
            controller.toggle_play();
            print_status(controller);
        }
        InputCommand::NewGame => {
            if let Err(e) = controller.new_game() {
                log!("Failed to start a new game: {}", e);
            }
            print_status(controller);
        }
        InputCommand::Quit => return false,
    }
    true
}

fn print_status(controller: &mut TerminalController) {
    let state = controller.state();
    let status = match (state.status(), state.finish_reason()) {
        (GameStatus::Playing, _) => "playing".to_string(),
        (GameStatus::Stopped, _) => "stopped (p to start)".to_string(),
        (GameStatus::Finished, Some(reason)) => format!("game over: {} (n for a new game)", reason),
        (GameStatus::Finished, None) => "game over (n for a new game)".to_string(),
    };
    let line = format!("Score: {} | Length: {} | {}", state.score(), state.snake().len(), status);
    controller.renderer_mut().set_status(line);
}
