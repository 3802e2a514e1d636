use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pomodoro_core::error::Result as CoreResult;
use pomodoro_core::{
    Config, Cycle, DesktopNotifier, NoopNotifier, Notifier, ProgressBar, SessionSummary,
    TerminalConsole, TickDriver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pomodoro",
    version,
    about = "Pomodoro timer: alternate focus and rest, confirming each switch"
)]
struct Cli {
    /// Duration of the focus timer, in minutes [default: 25]
    #[arg(allow_negative_numbers = true)]
    focus: Option<f64>,

    /// Duration of the rest timer, in minutes [default: 5]
    #[arg(short = 'r', long = "rest", allow_negative_numbers = true)]
    rest: Option<f64>,

    /// Do not send desktop notifications
    #[arg(long)]
    no_notify: bool,

    /// Print the session summary as JSON on exit
    #[arg(long)]
    json: bool,

    /// Read configuration from this file instead of ~/.config/pomodoro/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Everything the run loop needs, resolved from flags and config.
struct Settings {
    cycle: Cycle,
    tick_interval: Duration,
    bar_width: usize,
    notify: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve(cli: &Cli) -> CoreResult<Settings> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(Settings {
        cycle: config.cycle(cli.focus, cli.rest)?,
        tick_interval: config.tick_interval()?,
        bar_width: config.bar_width()?,
        notify: config.notifications.enabled && !cli.no_notify,
    })
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = resolve(&cli)?;
    tracing::debug!(
        focus = %settings.cycle.focus,
        rest = %settings.cycle.rest,
        notify = settings.notify,
        "starting"
    );

    let console = TerminalConsole::new(
        io::stdin().lock(),
        io::stdout(),
        ProgressBar::new(settings.bar_width),
    );
    let notifier: Box<dyn Notifier> = if settings.notify {
        Box::new(DesktopNotifier)
    } else {
        Box::new(NoopNotifier)
    };

    let mut driver = TickDriver::new(console, notifier).with_tick_interval(settings.tick_interval);
    let summary = driver.run(settings.cycle);
    print_summary(&summary, cli.json)
}

fn print_summary(summary: &SessionSummary, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
