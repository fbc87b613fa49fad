use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self as crossterm_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tripdeck::app::{App, QuerySeeds};
use tripdeck::auth::Session;
use tripdeck::cli::Commands;
use tripdeck::{cmd, config, handlers, tui};

const INPUT_POLL_DURATION_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "tripdeck")]
#[command(about = "A terminal travel-booking storefront with live filtering and an admin dashboard", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the flight origin search field
    #[arg(long)]
    origin: Option<String>,

    /// Seed the flight and package destination search fields
    #[arg(long)]
    destination: Option<String>,

    /// Seed the hotel location search field
    #[arg(long)]
    location: Option<String>,

    /// Override the artificial search latency from the config
    #[arg(long)]
    latency_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(command) = &args.command {
        let result = match command {
            Commands::Search(search_args) => cmd::search::run(search_args),
            Commands::Show(show_args) => cmd::show::run(show_args),
            Commands::Explore(explore_args) => cmd::explore::run(explore_args),
            Commands::Config { action } => match action {
                tripdeck::cli::ConfigAction::Validate => cmd::config::validate(),
                tripdeck::cli::ConfigAction::Show => cmd::config::show(),
            },
        };
        if let Err(code) = result {
            std::process::exit(code);
        }
        return Ok(());
    }

    // Load config and catalog before touching the terminal so errors print
    // normally.
    let discovery = config::discover();
    let cfg = config::load(&discovery).context("Failed to load config")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load catalog")?;

    let latency = args
        .latency_ms
        .map(Duration::from_millis)
        .unwrap_or(cfg.latency);

    let mut app = App::new(
        Arc::new(catalog),
        cfg.theme.clone(),
        latency,
        Session::load(),
    );
    app.seed_queries(QuerySeeds {
        origin: args.origin,
        destination: args.destination,
        location: args.location,
    });

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| tui::render(f, app))?;

        if app.is_entering_input() {
            terminal.show_cursor()?;
        } else {
            terminal.hide_cursor()?;
        }

        // Background searches finished since the last tick.
        let mut events = app.poll_search_outcomes();

        // Keyboard input.
        if crossterm_event::poll(Duration::from_millis(INPUT_POLL_DURATION_MS))? {
            if let Event::Key(key) = crossterm_event::read()? {
                events.extend(handlers::input::handle_input_event(key, app));
            }
        }

        for event in events {
            app.apply_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
