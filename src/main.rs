use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use clicode::app::App;
use clicode::config::Config;
use clicode::event::{AppEvent, EventHandler};
use clicode::logging;
use clicode::ui::theme::Theme;
use clicode::ui::view;

/// The problem, language and problems directory come from the config file.
#[derive(Parser)]
#[command(
    name = "clicode",
    version,
    about = "Read a coding problem next to its code stub in the terminal"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    // Logging is best effort; the dashboard runs without it.
    let _ = logging::init(Path::new(&config.log_file));
    if let Some(err) = config_err {
        tracing::warn!(%err, path = %Config::config_path().display(), "using default config");
    }

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let mut app = App::new(&config, theme);

    match run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(err = %format!("{err:#}"), "terminal session failed");
            eprintln!("Error running CLICode: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let result = run_app(&mut terminal, app);
            let _ = terminal.show_cursor();
            result
        });

    restore_terminal(&mut io::stdout(), disable_raw_mode)?;
    result
}

/// Leaves the alternate screen even if raw mode could not be disabled; the
/// first failure is returned.
fn restore_terminal<W: io::Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen);
    raw.and(screen)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // crossterm only reports size changes, so seed the first one.
    let size = terminal.size()?;
    app.handle(&AppEvent::Resize(size.width, size.height));

    let events = EventHandler::new(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| view::render(frame, app))?;

        let event = events.next()?;
        app.handle(&event);

        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
