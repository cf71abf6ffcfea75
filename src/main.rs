use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{IsTerminal as _, stdout};
use std::path::PathBuf;

mod app;
mod bookmarklet;
mod clipboard;
mod config;
mod controls;
mod document;
mod error;
mod help;
mod input;
mod notification;
mod session;
mod theme;
#[cfg(test)]
mod test_utils;
mod viewport;
mod widgets;

use app::{App, ExitOutput};
use document::Document;
use input::DocumentLoader;
use session::{Direction, ScrollConfig};

/// Terminal auto-scroller with bookmarklet export
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal auto-scroller with bookmarklet export for any webpage"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin; on a tty, shows demo content)
    input: Option<PathBuf>,

    /// Scroll speed in pixels per second
    #[arg(long)]
    speed: Option<f64>,

    /// Scroll direction
    #[arg(long, value_enum)]
    direction: Option<Direction>,

    /// Wrap to the opposite edge when a boundary is reached
    #[arg(long = "loop", overrides_with = "no_loop")]
    loop_at_end: bool,

    /// Stop at the boundary instead of wrapping
    #[arg(long = "no-loop", overrides_with = "loop_at_end")]
    no_loop: bool,

    /// Print the scroll bookmarklet URI and exit
    #[arg(long)]
    bookmarklet: bool,

    /// Print the stop bookmarklet URI and exit
    #[arg(long)]
    stop_bookmarklet: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/autoscroll-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/autoscroll-debug.log")
            .expect("Failed to open /tmp/autoscroll-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== AUTOSCROLL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let scroll = resolve_scroll_config(&args, &config_result.config);

    // Print modes never touch the terminal state
    if args.bookmarklet || args.stop_bookmarklet {
        if args.bookmarklet {
            println!("{}", bookmarklet::scroll_uri(&scroll));
        }
        if args.stop_bookmarklet {
            println!("{}", bookmarklet::stop_uri());
        }
        return Ok(());
    }

    let terminal = init_terminal()?;

    // Deferred loading prevents blocking on large files/stdin
    let app = if let Some(path) = args.input {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let loader = DocumentLoader::spawn_load(path);
        App::new_with_loader(loader, &label, scroll, &config_result.config)
    } else if std::io::stdin().is_terminal() {
        App::new(Document::demo(), "demo", scroll, &config_result.config)
    } else {
        let loader = DocumentLoader::spawn_load_stdin();
        App::new_with_loader(loader, "stdin", scroll, &config_result.config)
    };

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app);

    #[cfg(debug_assertions)]
    log::debug!("=== AUTOSCROLL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Merge CLI overrides onto the config file settings; `ScrollConfig::new`
/// applies the speed clamp.
fn resolve_scroll_config(args: &Args, config: &config::Config) -> ScrollConfig {
    let settings = &config.scroll;
    let speed = args.speed.unwrap_or(settings.speed);
    let direction = args.direction.unwrap_or(settings.direction);
    let loop_at_end = if args.loop_at_end {
        true
    } else if args.no_loop {
        false
    } else {
        settings.loop_at_end
    };
    ScrollConfig::new(speed, direction, loop_at_end)
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) {
    if app.exit_output == Some(ExitOutput::Bookmarklet) {
        println!("{}", bookmarklet::scroll_uri(&app.session.config));
    }
}
