use anyhow::Context;
use clap::{Parser, Subcommand};
use navigator_execution::Session;
use navigator_simulator::{render, simulate, store, Config, Console, Summary};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured session file.
    #[arg(short, long)]
    session: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Enter hands interactively.
    Play,
    /// Print the saved hand history, newest first.
    History,
    /// Clear the saved session.
    Reset,
    /// Play a seeded random shoe and print a summary.
    Simulate {
        #[arg(long, default_value_t = 75)]
        hands: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Save the simulated session here. The configured session is never touched.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => Config::load(path).context("failed to load config")?,
        None => Config::default(),
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    let config = config.validate().context("invalid config")?;
    let session_path = args.session.or(config.session_path);

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    // Load session
    let session = match &session_path {
        Some(path) => store::load(path)
            .with_context(|| format!("failed to load session from {}", path.display()))?,
        None => Session::new(),
    };
    info!(hands = session.ledger().count(), "session ready");

    match args.command {
        Cmd::Play => {
            let console = Console {
                session_path: session_path.as_deref(),
                confirm_reset: config.confirm_reset,
            };
            let stdin = std::io::stdin();
            let session = console
                .run(session, &mut stdin.lock(), &mut std::io::stdout())
                .context("console error")?;
            info!(
                hands = session.ledger().count(),
                total = session.ledger().running_total(),
                "session closed"
            );
        }
        Cmd::History => {
            if session.ledger().is_empty() {
                println!("waiting for first hand");
            }
            for hand in session.ledger().newest_first() {
                println!("{}", render::hand_line(hand));
            }
            println!(
                "next bet: {}",
                render::indicator(session.current_prediction())
            );
        }
        Cmd::Reset => {
            let path = session_path.context("reset needs a session file")?;
            store::save(&path, &session.reset())
                .with_context(|| format!("failed to save session to {}", path.display()))?;
            info!(path = %path.display(), "session cleared");
        }
        Cmd::Simulate {
            hands,
            seed,
            output,
        } => {
            let session =
                simulate::run_to(hands, seed, output.as_deref()).context("simulation failed")?;
            let summary = Summary::from_ledger(session.ledger());
            println!(
                "hands {}  wins {}  losses {}  pushes {}",
                summary.hands, summary.wins, summary.losses, summary.pushes
            );
            println!(
                "total {}  peak {}  trough {}  next bet {}",
                summary.final_total,
                summary.peak,
                summary.trough,
                render::indicator(session.current_prediction())
            );
        }
    }

    Ok(())
}
