use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use crossterm::event::{Event, KeyEventKind};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

use crate::constants::TICK_RATE;
use crate::state::{App, AppConfig, FsSessionStorage, MemorySessionStorage, SessionStorage};
use crate::tui::Tui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 ____  ____  ____  _     ____  ____  ____  _     _____ ____  _____
/   _\/  _ \/  __\/ \   /  _ \/ ___\/  __\/ \__/|/  __//  __\/  __/
|  /  | / \||  \/|| |   | / \||    \|  \/|| |\/|||  \  |  \/||  \
|  \__| |-|||    /| |_/\| \_/|\___ ||  __/| |  |||  /_ |    /|  /_
\____/\_/ \|\_/\_\\____/\____/\____/\_/   \_/  \|\____\\_/\_\\____\
";

/// CarloSphere - money, chats, gigs, and learning in one terminal app
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and CARLOSPHERE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Keep the session in memory only; do not persist it to disk
    #[arg(long)]
    no_persist: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("CarloSphere v{VERSION}");
        return Ok(());
    }

    color_eyre::install()?;

    let config = AppConfig::load();
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let storage: Box<dyn SessionStorage + Send> = if cli.no_persist {
        Box::new(MemorySessionStorage::new())
    } else {
        Box::new(FsSessionStorage::new()?)
    };
    let mut app = App::new(config, &api_url, storage);
    if app.is_authenticated() {
        app.refresh_wallet();
    }

    let mut terminal = tui::init()?;
    let result = run_app(&mut terminal, &mut app).await;
    tui::restore()?;
    result
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        // Poll terminal events with a tiny timeout, then drain background
        // task messages and sleep the rest of the tick.
        let mut handled_event = false;
        if crossterm::event::poll(Duration::from_millis(1))? {
            handled_event = true;
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => continue,
                _ => {}
            }
        }

        app.process_messages();

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            app.on_tick();
        }

        if !handled_event {
            let remaining = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_millis(5));
            tokio::time::sleep(remaining.min(Duration::from_millis(50))).await;
        }
    }
    Ok(())
}
