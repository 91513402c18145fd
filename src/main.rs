use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use linkwatch::data::export;
use linkwatch::ui::Theme;
use linkwatch::{
    events, ingest, logging, ui, App, Classifier, FileSource, Journal, LogSource, ReaderSource,
    Settings, Shell,
};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "linkwatch")]
#[command(about = "Scan syslog for NetworkManager connect/disconnect events and browse them")]
struct Args {
    /// Log file to scan ("-" reads standard input). Overrides `log_path` from the config.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Browse events in a full-screen terminal UI instead of the text menu
    #[arg(long, conflicts_with = "export")]
    tui: bool,

    /// Write the detected events to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(file) = args.file {
        settings.log_path = file;
    }

    let reads_stdin = settings.log_path == Path::new(STDIN_PATH);
    if reads_stdin && !args.tui && args.export.is_none() {
        bail!("reading the log from standard input requires --export or --tui");
    }

    let mut source = open_source(&settings.log_path)?;
    let interactive_shell = !args.tui && args.export.is_none();
    if interactive_shell {
        println!("Monitoring {}...", source.description());
    }

    let classifier = Classifier::new(&settings.classifier);
    let mut journal = Journal::new();
    ingest(source.as_mut(), &classifier, &mut journal).context("failed to scan log")?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        export::write_report(&journal, source.description(), &export_path)?;
        println!("Exported {} events to: {}", journal.count(), export_path.display());
        return Ok(());
    }

    if args.tui {
        return run_tui(journal, source.description());
    }

    run_shell(&mut journal)
}

/// Open the configured log, failing before any journal exists.
fn open_source(path: &Path) -> Result<Box<dyn LogSource>> {
    if path == Path::new(STDIN_PATH) {
        let stdin = io::stdin().lock();
        return Ok(Box::new(ReaderSource::new(stdin, "stdin")));
    }
    Ok(Box::new(FileSource::open(path)?))
}

/// Run the numbered text menu on stdin/stdout
fn run_shell(journal: &mut Journal) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(journal, stdin, stdout).run()?;
    info!(remaining = journal.count(), "session ended");
    Ok(())
}

/// Run the TUI over a populated journal
fn run_tui(journal: Journal, source_description: &str) -> Result<()> {
    // Detect the theme before raw mode, terminal-light queries the terminal itself
    let theme = Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(journal, source_description, theme);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(remaining = app.journal.count(), "session ended");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = events::poll_event(Duration::from_millis(250))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
