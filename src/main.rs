use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use webhook_composer::config::Config;
use webhook_composer::discord::is_valid_webhook_url;
use webhook_composer::markup::MessagePreview;
use webhook_composer::timestamp::{normalize_timestamp, now_timestamp};
use webhook_composer::{Composer, Message, build, validate};

#[derive(Parser)]
#[command(name = "webhook-composer")]
#[command(about = "Compose, check and send Discord webhook messages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed preview of a message as JSON
    Preview {
        /// Message JSON file
        file: PathBuf,
    },

    /// Report every length limit the message exceeds
    Validate {
        /// Message JSON file
        file: PathBuf,
    },

    /// Print the payload that would be posted
    Build {
        /// Message JSON file
        file: PathBuf,
        /// Timestamp for every embed: `now`, an ISO-8601 date-time or a date
        #[arg(short, long)]
        timestamp: Option<String>,
    },

    /// Send a message to a webhook
    Send {
        /// Message JSON file
        file: PathBuf,
        /// Webhook URL (defaults to DISCORD_WEBHOOK_URL)
        #[arg(short, long)]
        webhook: Option<String>,
        /// Timestamp for every embed: `now`, an ISO-8601 date-time or a date
        #[arg(short, long)]
        timestamp: Option<String>,
        /// Refuse to send when a limit is exceeded
        #[arg(long)]
        strict: bool,
    },

    /// Check whether a URL looks like a Discord webhook
    CheckUrl { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { file } => {
            let message = load_message(&file)?;
            let preview = MessagePreview::render(&message);
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        Commands::Validate { file } => {
            let message = load_message(&file)?;
            let violations = validate(&message);
            if violations.is_empty() {
                println!("OK: within all Discord limits");
            } else {
                for violation in &violations {
                    println!("{violation}");
                }
                bail!("{} limit(s) exceeded", violations.len());
            }
        }
        Commands::Build { file, timestamp } => {
            let mut message = load_message(&file)?;
            stamp_embeds(&mut message, timestamp.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&build(&message))?);
        }
        Commands::Send {
            file,
            webhook,
            timestamp,
            strict,
        } => {
            let mut message = load_message(&file)?;
            stamp_embeds(&mut message, timestamp.as_deref())?;

            let config = Config::from_env();
            let mut composer = Composer::from_config(&Config {
                webhook_url: webhook.or_else(|| config.webhook_url.clone()),
                ..config.clone()
            })
            .context("Webhook URL rejected")?;
            composer.replace_message(message);
            config.apply_defaults(composer.message_mut());

            for warning in composer.warnings() {
                warn!("{warning}");
            }

            if strict {
                composer.submit_strict().await?;
            } else {
                composer.submit().await?;
            }
            info!("Message sent");
        }
        Commands::CheckUrl { url } => {
            if is_valid_webhook_url(url.trim()) {
                println!("Valid Discord webhook URL");
            } else {
                bail!("Invalid Discord webhook URL format");
            }
        }
    }

    Ok(())
}

fn load_message(path: &Path) -> Result<Message> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a valid message", path.display()))
}

/// Sets the timestamp of every embed; `now` means the current time.
fn stamp_embeds(message: &mut Message, raw: Option<&str>) -> Result<()> {
    let Some(raw) = raw else {
        return Ok(());
    };

    let timestamp = if raw.trim().eq_ignore_ascii_case("now") {
        Some(now_timestamp())
    } else {
        normalize_timestamp(raw)?
    };

    for embed in &mut message.embeds {
        embed.timestamp = timestamp.clone();
    }
    Ok(())
}
