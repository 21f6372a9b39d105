use clap::Parser;
use footprint_core::config::validate_target;
use footprint_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carbon")]
#[command(about = "Daily carbon footprint calculator", long_about = None)]
struct Cli {
    /// Goal target in kg CO2 per day (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    target: Option<f64>,

    /// Load configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    footprint_core::logging::init_with_level(&config.logging.level);

    let target = cli.target.unwrap_or(config.goal.target_kg_per_day);
    validate_target(target)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = InteractionShell::new(stdin.lock(), stdout.lock());

    let outcome = shell.run(target)?;
    tracing::info!("Session finished: {:?}", outcome);

    Ok(())
}
