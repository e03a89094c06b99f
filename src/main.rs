use betti_summary::config::AnalysisConfig;
use betti_summary::BtResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sum and average Betti number reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    analysis: AnalysisConfig,

    /// JSON file with base analysis settings. Flags given explicitly win.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every indexed result and the cumulative totals
    Totals(cmd::totals::TotalsArgs),
    /// Average each percolation-probability bucket into one row
    Summary(cmd::summary::SummaryArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &AnalysisConfig,
    matches: &ArgMatches,
) -> BtResult<AnalysisConfig> {
    let Some(path) = path else {
        cli_config.validate()?;
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading settings from: {}", path);
    let mut config = AnalysisConfig::load_from_file(path)?;
    config.merge_from_cli(cli_config, matches);
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(cli.config_file.as_deref(), &cli.analysis, &matches)
        .unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        });

    let result = match &cli.command {
        Commands::Totals(args) => cmd::totals::run(args, &config),
        Commands::Summary(args) => cmd::summary::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
