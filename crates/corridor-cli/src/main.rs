use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use corridor_cli::commands::corridors::handle_corridors_command;
use corridor_cli::commands::hubs::handle_hubs_command;
use corridor_cli::commands::route::{handle_route_command, RouteCommandArgs, DEFAULT_RAINFALL_MM};
use corridor_cli::output::OutputFormat;
use corridor_cli::terminal::ColorPalette;
use corridor_lib::{load_network, AlertLevel, RouteMode};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dual-mode, hazard-aware routing across the North-East India hub network"
)]
struct Cli {
    /// Load the hub network from this JSON file or directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors even when the terminal supports them.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the safest and shortcut routes between two hubs.
    Route(RouteArgs),
    /// Report how accessible each hub is under the given rainfall.
    Hubs {
        /// Current rainfall in millimetres.
        #[arg(long, default_value_t = DEFAULT_RAINFALL_MM)]
        rainfall: f64,
    },
    /// List emergency-corridor presets or run one as a relief mission.
    Corridors {
        /// Run the numbered preset (1-based) with the goal hub in SOS.
        #[arg(long)]
        run: Option<usize>,
        /// Current rainfall in millimetres.
        #[arg(long, default_value_t = DEFAULT_RAINFALL_MM)]
        rainfall: f64,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting hub name.
    #[arg(long = "from")]
    from: String,
    /// Destination hub name.
    #[arg(long = "to")]
    to: String,
    /// Current rainfall in millimetres.
    #[arg(long, default_value_t = DEFAULT_RAINFALL_MM)]
    rainfall: f64,
    /// Seven-day rainfall average in millimetres.
    #[arg(long = "rainfall-7day")]
    rainfall_7day: Option<f64>,
    /// Weather alert level (green, yellow, red); derived from rainfall when omitted.
    #[arg(long)]
    alert: Option<AlertLevel>,
    /// Open restricted corridors for relief traffic.
    #[arg(long)]
    emergency: bool,
    /// The start hub has declared SOS.
    #[arg(long)]
    sos_start: bool,
    /// The destination hub has declared SOS.
    #[arg(long)]
    sos_goal: bool,
    /// Route shown as active (safest or shortcut).
    #[arg(long, default_value = "safest")]
    focus: RouteMode,
    /// Explain why the active route was selected.
    #[arg(long)]
    explain: bool,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            rainfall: args.rainfall,
            rainfall_7day: args.rainfall_7day,
            alert: args.alert,
            emergency: args.emergency,
            sos_start: args.sos_start,
            sos_goal: args.sos_goal,
            focus: args.focus,
            explain: args.explain,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(cli.data.as_deref()).context("failed to load the hub network")?;
    let palette = ColorPalette::resolve(cli.no_color);

    let rendered = match cli.command {
        Command::Route(args) => {
            handle_route_command(&network, &RouteCommandArgs::from(args), cli.format, palette)?
        }
        Command::Hubs { rainfall } => {
            handle_hubs_command(&network, rainfall, cli.format, palette)?
        }
        Command::Corridors { run, rainfall } => {
            handle_corridors_command(&network, run, rainfall, cli.format, palette)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
