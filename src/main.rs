//! Spoken Ship Alerts CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use shipspeak::credentials::{self, Provisioner};
use shipspeak::{Alerter, Config, GoogleTts, Sanitizer, SpeakerPlayer};

/// Spoken ship-sighting alerts
#[derive(Parser)]
#[command(name = "shipspeak")]
#[command(about = "Unlock the speech credentials and speak a greeting", long_about = None)]
struct Cli {
    /// Passphrase to unlock the speech service credentials
    #[arg(long = "pass-phrase", alias = "passPhrase")]
    pass_phrase: String,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - quiet by default, use -v for more
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    // Load configuration
    let config = if let Some(ref config_path) = cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Config::default()
    };

    let source = credentials::secret::from_config(&config.credentials)
        .context("No encrypted credentials configured")?;
    let provisioner = Provisioner::new(config.credentials.output_path());
    let creds = provisioner
        .provision(source.as_ref(), &cli.pass_phrase)
        .context("Failed to provision speech credentials")?;
    info!("Speech credentials at {}", creds.path().display());

    let tts = GoogleTts::new(
        config.speech.clone(),
        Sanitizer::new(config.text.corrections.clone()),
        Some(creds),
    )
    .context("Failed to create speech client")?;
    let player = SpeakerPlayer::new(config.playback.clone());
    let alerter = Alerter::new(tts, player, config.alert.tones.clone());

    alerter
        .say(&config.alert.greeting)
        .with_context(|| format!("Failed to speak {:?}", config.alert.greeting))?;

    Ok(())
}
